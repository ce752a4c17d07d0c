//! The subset of Bot API objects the bot reads and writes.

use serde::{Deserialize, Serialize};

use crate::notify::Keyboard;

/// Envelope of every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Payload of a successful call.
    pub result: Option<T>,
    /// Reason for a failed call.
    pub description: Option<String>,
    /// Error code of a failed call.
    pub error_code: Option<i64>,
}

/// An incoming update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier.
    pub update_id: i64,
    /// New incoming message, if this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier within the chat.
    pub message_id: i64,
    /// Sender; absent for channel posts.
    #[serde(default)]
    pub from: Option<User>,
    /// Chat the message belongs to.
    pub chat: Chat,
    /// Text of a text message.
    #[serde(default)]
    pub text: Option<String>,
}

/// A Telegram user or bot.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Whether the user is a bot.
    #[serde(default)]
    pub is_bot: bool,
    /// Username without the leading `@`.
    #[serde(default)]
    pub username: Option<String>,
}

/// A chat.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Chat identifier.
    pub id: i64,
}

/// Membership record returned by `getChatMember`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMember {
    /// Membership status.
    pub status: ChatMemberStatus,
}

/// Membership status of a user in a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    /// Owner of the chat.
    Creator,
    /// Administrator.
    Administrator,
    /// Regular member.
    Member,
    /// Member with restrictions.
    Restricted,
    /// Left the chat.
    Left,
    /// Banned.
    Kicked,
    /// A status this bot does not know.
    #[serde(other)]
    Unknown,
}

impl ChatMemberStatus {
    /// Returns whether the user may play.
    #[must_use]
    pub const fn is_participant(self) -> bool {
        matches!(self, Self::Creator | Self::Administrator | Self::Member)
    }
}

/// One button of a reply keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardButton {
    /// Text sent when the button is pressed.
    pub text: String,
}

/// Custom reply keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyKeyboardMarkup {
    /// Button rows.
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Ask clients to shrink the keyboard to fit its buttons.
    pub resize_keyboard: bool,
}

impl From<Keyboard> for ReplyKeyboardMarkup {
    fn from(keyboard: Keyboard) -> Self {
        let row = keyboard
            .buttons()
            .iter()
            .map(|text| KeyboardButton {
                text: (*text).to_owned(),
            })
            .collect();
        Self {
            keyboard: vec![row],
            resize_keyboard: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct GetUpdates {
    pub offset: i64,
    pub timeout: u32,
    pub allowed_updates: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(super) struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
pub(super) struct SendPhoto<'a> {
    pub chat_id: i64,
    pub photo: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct GetChatMember {
    pub chat_id: i64,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_update() {
        let update: Update = serde_json::from_str(
            r#"{"update_id": 10, "message": {"message_id": 5, "date": 0,
                "from": {"id": 42, "is_bot": false, "first_name": "A"},
                "chat": {"id": -100, "type": "group"}, "text": "/hit"}}"#,
        )
        .unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.from.unwrap().id, 42);
        assert_eq!(message.chat.id, -100);
        assert_eq!(message.text.as_deref(), Some("/hit"));
    }

    #[test]
    fn update_without_message() {
        let update: Update =
            serde_json::from_str(r#"{"update_id": 11, "callback_query": {"id": "x"}}"#).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn participant_statuses() {
        for (raw, allowed) in [
            ("creator", true),
            ("administrator", true),
            ("member", true),
            ("restricted", false),
            ("left", false),
            ("kicked", false),
            ("something_new", false),
        ] {
            let member: ChatMember =
                serde_json::from_str(&format!(r#"{{"status": "{raw}"}}"#)).unwrap();
            assert_eq!(member.status.is_participant(), allowed, "{raw}");
        }
    }

    #[test]
    fn hit_stand_keyboard_shape() {
        let markup = serde_json::to_value(ReplyKeyboardMarkup::from(Keyboard::HitStand)).unwrap();
        assert_eq!(
            markup,
            serde_json::json!({
                "keyboard": [[{"text": "/hit"}, {"text": "/stand"}]],
                "resize_keyboard": true
            })
        );
    }
}
