//! Outbound messaging capability used by the round controller.

use core::future::Future;

use crate::error::NotifyError;
use crate::session::ChatId;

/// Quick-reply keyboards offered alongside a text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// `/hit` and `/stand` buttons on one row.
    HitStand,
}

impl Keyboard {
    /// Button labels, in display order.
    #[must_use]
    pub const fn buttons(self) -> &'static [&'static str] {
        match self {
            Self::HitStand => &["/hit", "/stand"],
        }
    }
}

/// Delivers text and card images to a chat.
pub trait Notifier: Send + Sync {
    /// Sends a text message, optionally with a quick-reply keyboard.
    fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;

    /// Sends a card image by reference.
    fn send_image(
        &self,
        chat: ChatId,
        image: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
