//! In-memory store of active games, keyed by user.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex as TurnLock, OwnedMutexGuard};

use crate::card::DeckHandle;
use crate::error::RoundError;
use crate::session::{GameSession, UserId};
use crate::sync::Mutex;

/// Exclusive right to act on one user's game.
///
/// Held for the whole handling of a command. Dropping it lets the next command for the
/// same user proceed.
#[derive(Debug)]
pub struct UserTurn {
    user: UserId,
    _guard: OwnedMutexGuard<()>,
}

impl UserTurn {
    /// The user this turn belongs to.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }
}

/// Owns every [`GameSession`]. At most one session exists per user.
///
/// Map operations are synchronous and short. Commands that span several operations (and
/// await the card source in between) take [`GameStateStore::lock_user`] first so that two
/// commands for the same user never interleave. Distinct users never wait on each other.
#[derive(Default)]
pub struct GameStateStore {
    sessions: Mutex<HashMap<UserId, GameSession>>,
    turns: Mutex<HashMap<UserId, Arc<TurnLock<()>>>>,
}

impl GameStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh, not-yet-started session for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::SessionAlreadyExists`] if the user already has a session; the
    /// existing session is left untouched.
    pub fn create(&self, user: UserId, deck: DeckHandle) -> Result<GameSession, RoundError> {
        self.sessions.with(|sessions| {
            if sessions.contains_key(&user) {
                return Err(RoundError::SessionAlreadyExists);
            }
            let session = GameSession::new(deck);
            sessions.insert(user, session.clone());
            Ok(session)
        })
    }

    /// Returns a snapshot of the user's session.
    #[must_use]
    pub fn get(&self, user: UserId) -> Option<GameSession> {
        self.sessions.with(|sessions| sessions.get(&user).cloned())
    }

    /// Returns whether the user has a session.
    #[must_use]
    pub fn contains(&self, user: UserId) -> bool {
        self.sessions.with(|sessions| sessions.contains_key(&user))
    }

    /// Mutates the user's session in place.
    ///
    /// Returns `None` without calling `f` when the user has no session.
    pub fn update<R>(&self, user: UserId, f: impl FnOnce(&mut GameSession) -> R) -> Option<R> {
        self.sessions.with(|sessions| sessions.get_mut(&user).map(f))
    }

    /// Deletes the user's session, returning it. Absent sessions are not an error.
    pub fn remove(&self, user: UserId) -> Option<GameSession> {
        self.sessions.with(|sessions| sessions.remove(&user))
    }

    /// Returns the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.with(|sessions| HashMap::len(sessions))
    }

    /// Returns whether no session is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.with(|sessions| HashMap::is_empty(sessions))
    }

    /// Waits for exclusive access to `user`'s game.
    pub async fn lock_user(&self, user: UserId) -> UserTurn {
        let lock = self.turns.with(|turns| {
            // Entries only the map references are idle.
            turns.retain(|id, lock| *id == user || Arc::strong_count(lock) > 1);
            Arc::clone(turns.entry(user).or_default())
        });
        UserTurn {
            user,
            _guard: lock.lock_owned().await,
        }
    }

    /// Number of per-user locks currently tracked.
    #[cfg(test)]
    fn tracked_turns(&self) -> usize {
        self.turns.with(|turns| HashMap::len(turns))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn deck(id: &str) -> DeckHandle {
        DeckHandle::new(id)
    }

    #[test]
    fn create_twice_keeps_first_session() {
        let store = GameStateStore::new();
        let user = UserId(7);

        store.create(user, deck("first")).unwrap();
        assert_eq!(
            store.create(user, deck("second")).unwrap_err(),
            RoundError::SessionAlreadyExists
        );
        assert_eq!(store.get(user).unwrap().deck, deck("first"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = GameStateStore::new();
        let user = UserId(1);
        assert!(store.remove(user).is_none());

        store.create(user, deck("d")).unwrap();
        assert!(store.remove(user).is_some());
        assert!(store.remove(user).is_none());
        assert!(store.is_empty());

        store.create(user, deck("again")).unwrap();
        assert!(store.contains(user));
    }

    #[test]
    fn update_skips_missing_users() {
        let store = GameStateStore::new();
        let mut called = false;
        assert!(store.update(UserId(3), |_| called = true).is_none());
        assert!(!called);
    }

    #[tokio::test]
    async fn same_user_turns_are_serialized() {
        let store = Arc::new(GameStateStore::new());
        let user = UserId(9);

        let first = store.lock_user(user).await;
        let waiter = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.lock_user(user).await.user() })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(first);
        assert_eq!(waiter.await.unwrap(), user);
    }

    #[tokio::test]
    async fn distinct_users_do_not_block() {
        let store = GameStateStore::new();
        let _a = store.lock_user(UserId(1)).await;
        let b = tokio::time::timeout(Duration::from_millis(100), store.lock_user(UserId(2))).await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn idle_turn_locks_are_pruned() {
        let store = GameStateStore::new();
        for id in 0..10 {
            drop(store.lock_user(UserId(id)).await);
        }
        let _held = store.lock_user(UserId(100)).await;
        assert_eq!(store.tracked_turns(), 1);
    }
}
