use core::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::TelegramError;
use crate::game::Table;
use crate::notify::Notifier;
use crate::session::{ChatId, UserId};
use crate::source::CardSource;

use super::api::TelegramApi;
use super::command::Command;
use super::types::Message;

/// Pause after a failed poll before trying again.
const POLL_BACKOFF: Duration = Duration::from_secs(3);

/// Long-polling bot that routes chat commands to a [`Table`].
pub struct Bot<S> {
    api: TelegramApi,
    table: Arc<Table<S, TelegramApi>>,
    username: Option<String>,
    poll_timeout: u32,
}

impl<S: CardSource + 'static> Bot<S> {
    /// Creates a bot. The table should use a clone of `api` as its notifier.
    #[must_use]
    pub const fn new(api: TelegramApi, table: Arc<Table<S, TelegramApi>>, poll_timeout: u32) -> Self {
        Self {
            api,
            table,
            username: None,
            poll_timeout,
        }
    }

    /// Polls for updates until `shutdown` completes.
    ///
    /// Each message is handled on its own task; the table serializes commands per user.
    ///
    /// # Errors
    ///
    /// Returns an error if the bot's own account cannot be fetched at startup. Polling
    /// errors afterwards are logged and retried.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) -> Result<(), TelegramError> {
        let me = self.api.get_me().await?;
        info!(id = me.id, username = ?me.username, "bot connected");
        self.username = me.username;

        tokio::pin!(shutdown);
        let mut offset = 0;
        loop {
            let updates = tokio::select! {
                () = &mut shutdown => break,
                updates = self.api.get_updates(offset, self.poll_timeout) => updates,
            };

            let updates = match updates {
                Ok(updates) => updates,
                Err(err) => {
                    warn!(%err, "failed to poll updates");
                    tokio::time::sleep(POLL_BACKOFF).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                let Some(message) = update.message else {
                    continue;
                };
                let table = Arc::clone(&self.table);
                let api = self.api.clone();
                let username = self.username.clone();
                tokio::spawn(async move {
                    handle_message(&table, &api, username.as_deref(), message).await;
                });
            }
        }

        info!("bot stopped polling");
        Ok(())
    }
}

async fn handle_message<S: CardSource>(
    table: &Table<S, TelegramApi>,
    api: &TelegramApi,
    username: Option<&str>,
    message: Message,
) {
    let Some(command) = message
        .text
        .as_deref()
        .and_then(|text| Command::parse(text, username))
    else {
        return;
    };
    let Some(from) = message.from else {
        return;
    };
    let user = UserId(from.id);
    let chat = ChatId(message.chat.id);
    let locale = table.locale();
    debug!(%user, %chat, ?command, "command received");

    if command.requires_membership() {
        match api.get_chat_member(chat, user).await {
            Ok(member) if member.status.is_participant() => {}
            Ok(member) => {
                debug!(%user, %chat, status = ?member.status, "rejected non-participant");
                reply(api, chat, locale.unauthorized()).await;
                return;
            }
            Err(err) => {
                warn!(%user, %chat, %err, "membership check failed");
                reply(api, chat, locale.membership_unknown()).await;
                return;
            }
        }
    }

    let result = match command {
        Command::Start => {
            reply(api, chat, locale.welcome()).await;
            return;
        }
        Command::NewGame => table.start(user, chat).await,
        Command::Hit => table.hit(user, chat).await,
        Command::Stand => table.stand(user, chat).await,
    };

    if let Err(err) = result {
        debug!(%user, %err, "command rejected");
        reply(api, chat, locale.error(&err)).await;
    }
}

async fn reply(api: &TelegramApi, chat: ChatId, text: &str) {
    if let Err(err) = api.send_text(chat, text, None).await {
        warn!(%chat, %err, "failed to send reply");
    }
}
