use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{NotifyError, TelegramError};
use crate::notify::{Keyboard, Notifier};
use crate::session::{ChatId, UserId};

use super::types::{
    ApiResponse, ChatMember, GetChatMember, GetUpdates, Message, ReplyKeyboardMarkup, SendMessage,
    SendPhoto, Update, User,
};

/// Public Bot API endpoint.
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Minimal Bot API client.
///
/// Request URLs embed the bot token, so transport errors are stripped of their URL before
/// they leave this type.
#[derive(Clone)]
pub struct TelegramApi {
    /// `{api}/bot{token}/`; method names are joined onto it.
    bot_url: Url,
    http_client: HttpClient,
}

impl TelegramApi {
    /// Creates a client for the bot identified by `token`.
    ///
    /// `timeout` bounds every request and must exceed the long-poll timeout used with
    /// [`TelegramApi::get_updates`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_url: &Url, token: &str, timeout: Duration) -> Result<Self, TelegramError> {
        let mut bot_url = api_url.clone();
        let base = api_url.path().trim_end_matches('/');
        bot_url.set_path(&format!("{base}/bot{token}/"));

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(reqwest::Error::without_url)?;

        Ok(Self {
            bot_url,
            http_client,
        })
    }

    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, TelegramError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.bot_url.join(method)?;
        let response: ApiResponse<T> = self
            .http_client
            .post(url)
            .json(params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        match response {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                description,
                error_code,
                ..
            } => Err(TelegramError::Api {
                code: error_code,
                description: description.unwrap_or_else(|| format!("{method} returned no result")),
            }),
        }
    }

    /// Returns the bot's own account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the Bot API rejects it.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-polls for message updates with an identifier of at least `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the Bot API rejects it.
    pub async fn get_updates(&self, offset: i64, timeout: u32) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout,
                allowed_updates: &["message"],
            },
        )
        .await
    }

    /// Sends a text message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the Bot API rejects it.
    pub async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessage {
                chat_id: chat.0,
                text,
                reply_markup: keyboard.map(ReplyKeyboardMarkup::from),
            },
        )
        .await
    }

    /// Sends a photo by URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the Bot API rejects it.
    pub async fn send_photo(&self, chat: ChatId, photo: &str) -> Result<Message, TelegramError> {
        self.call(
            "sendPhoto",
            &SendPhoto {
                chat_id: chat.0,
                photo,
            },
        )
        .await
    }

    /// Looks up a user's membership in a chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the Bot API rejects it.
    pub async fn get_chat_member(
        &self,
        chat: ChatId,
        user: UserId,
    ) -> Result<ChatMember, TelegramError> {
        self.call(
            "getChatMember",
            &GetChatMember {
                chat_id: chat.0,
                user_id: user.0,
            },
        )
        .await
    }
}

impl Notifier for TelegramApi {
    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), NotifyError> {
        self.send_message(chat, text, keyboard).await?;
        Ok(())
    }

    async fn send_image(&self, chat: ChatId, image: &str) -> Result<(), NotifyError> {
        self.send_photo(chat, image).await?;
        Ok(())
    }
}
