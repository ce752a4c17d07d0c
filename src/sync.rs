//! Short synchronous critical sections.

use std::sync::PoisonError;

/// A mutex whose guard never leaves the closure passed to [`Mutex::with`].
///
/// Guards therefore cannot be held across an `.await`. A panic inside one section does not
/// poison the others: every section leaves its data consistent before it can panic.
#[derive(Debug, Default)]
pub struct Mutex<T>(std::sync::Mutex<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Runs `f` with exclusive access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
