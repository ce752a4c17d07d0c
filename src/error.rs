//! Error types for every layer of the bot.

use thiserror::Error;

/// Errors raised while interpreting card labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The face is not one of the thirteen ranks.
    #[error("malformed card face: {0:?}")]
    MalformedCardFace(String),
    /// The suit is not one of the four suits.
    #[error("unknown suit: {0:?}")]
    UnknownSuit(String),
}

/// Errors raised by a card source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The request did not complete within the configured timeout.
    #[error("card source request timed out")]
    Timeout,
    /// The service answered with a non-success HTTP status.
    #[error("card source returned status {0}")]
    Status(reqwest::StatusCode),
    /// The response is missing fields or is not the expected shape.
    #[error("malformed card source response: {0}")]
    MalformedResponse(String),
    /// A drawn card carries a face that is not a known rank.
    #[error("card source returned a malformed card face: {0:?}")]
    MalformedCardFace(String),
    /// The deck handle is not known to the source.
    #[error("unknown deck: {0}")]
    UnknownDeck(String),
    /// The deck has no cards left.
    #[error("deck {0} is exhausted")]
    Exhausted(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

impl From<CardError> for SourceError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::MalformedCardFace(face) => Self::MalformedCardFace(face),
            CardError::UnknownSuit(suit) => Self::MalformedResponse(format!("unknown suit {suit:?}")),
        }
    }
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The command needs a game that does not exist.
    #[error("no active game for this user")]
    NoActiveSession,
    /// A new game was requested while one is in progress.
    #[error("a game is already in progress for this user")]
    SessionAlreadyExists,
    /// The game exists but is not waiting for a player decision.
    #[error("the game is not waiting for a player decision")]
    NotPlayerTurn,
    /// The card source returned an unrecognized rank. The round was ended.
    #[error("card source returned a malformed card face: {0:?}")]
    MalformedCardFace(String),
    /// The card source returned an unusable response. The round was ended.
    #[error("malformed card source response: {0}")]
    MalformedResponse(String),
    /// The card source could not be reached. The round was ended.
    #[error("card source unavailable: {0}")]
    CardSourceUnavailable(String),
}

impl RoundError {
    /// Returns whether this error ended the round it occurred in.
    #[must_use]
    pub const fn ends_round(&self) -> bool {
        matches!(
            self,
            Self::MalformedCardFace(_) | Self::MalformedResponse(_) | Self::CardSourceUnavailable(_)
        )
    }
}

impl From<SourceError> for RoundError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::MalformedCardFace(face) => Self::MalformedCardFace(face),
            SourceError::MalformedResponse(reason) => Self::MalformedResponse(reason),
            other @ (SourceError::Transport(_)
            | SourceError::Timeout
            | SourceError::Status(_)
            | SourceError::UnknownDeck(_)
            | SourceError::Exhausted(_)) => Self::CardSourceUnavailable(other.to_string()),
        }
    }
}

/// Errors that can occur while delivering a message to the user.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The messaging platform rejected or failed the request.
    #[error("failed to deliver message: {0}")]
    Delivery(String),
}

/// Errors raised by the Telegram front-end.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The request could not be sent or its body could not be read.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The Bot API answered with `ok: false`.
    #[error("bot api error {code:?}: {description}")]
    Api {
        /// Error code reported by the Bot API.
        code: Option<i64>,
        /// Human-readable description.
        description: String,
    },
    /// The base URL could not be joined with a method name.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<TelegramError> for NotifyError {
    fn from(err: TelegramError) -> Self {
        Self::Delivery(err.to_string())
    }
}
