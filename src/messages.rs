//! User-visible texts.

use core::fmt;
use core::str::FromStr;

use crate::card::Face;
use crate::error::RoundError;
use crate::result::Outcome;

/// Language of the bot's replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(format!("unsupported locale {other:?} (expected en or ru)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Ru => "ru",
        })
    }
}

impl Locale {
    /// Greeting for `/start`.
    #[must_use]
    pub const fn welcome(self) -> &'static str {
        match self {
            Self::En => "Welcome to blackjack! Use /newgame to start a new game.",
            Self::Ru => "Добро пожаловать в игру блэкджек! Используйте /newgame для начала новой игры.",
        }
    }

    /// Announces a freshly dealt round.
    #[must_use]
    pub fn new_game(self, player_score: u8, dealer_up: Option<Face>) -> String {
        let dealer = dealer_up.map_or_else(|| "?".to_owned(), |face| face.label().to_owned());
        match self {
            Self::En => format!(
                "A new game has started! Your score: {player_score}. Dealer shows {dealer}. Use /hit to take a card."
            ),
            Self::Ru => format!(
                "Новая игра началась! Ваш счет: {player_score}. Карта дилера: {dealer}. Используйте /hit, чтобы взять карту"
            ),
        }
    }

    /// Reports a card drawn by the player.
    #[must_use]
    pub fn drew_card(self, face: Face, score: u8) -> String {
        match self {
            Self::En => format!("You drew {face}. Your score: {score}."),
            Self::Ru => format!("Вы взяли карту {face}. Ваш счет: {score}."),
        }
    }

    /// Prompt shown with the hit/stand keyboard.
    #[must_use]
    pub const fn your_move(self) -> &'static str {
        match self {
            Self::En => "Your move:",
            Self::Ru => "Ваш ход:",
        }
    }

    /// Final scores shown before the outcome.
    #[must_use]
    pub fn scores(self, player_score: u8, dealer_score: u8) -> String {
        match self {
            Self::En => format!("Dealer: {dealer_score}. You: {player_score}."),
            Self::Ru => format!("Дилер: {dealer_score}. Вы: {player_score}."),
        }
    }

    /// The round result.
    #[must_use]
    pub const fn outcome(self, outcome: Outcome) -> &'static str {
        match (self, outcome) {
            (Self::En, Outcome::PlayerWins) => "You won!",
            (Self::En, Outcome::DealerWins | Outcome::PlayerBust) => "You lost!",
            (Self::En, Outcome::Push) => "Push!",
            (Self::Ru, Outcome::PlayerWins) => "Вы выиграли!",
            (Self::Ru, Outcome::DealerWins | Outcome::PlayerBust) => "Вы проиграли!",
            (Self::Ru, Outcome::Push) => "Ничья!",
        }
    }

    /// Sent after every finished round.
    #[must_use]
    pub const fn game_over(self) -> &'static str {
        match self {
            Self::En => "Game over. Use /newgame to start a new game.",
            Self::Ru => "Игра завершена. Используйте /newgame для начала новой игры.",
        }
    }

    /// Rejection for senders who are not chat participants.
    #[must_use]
    pub const fn unauthorized(self) -> &'static str {
        match self {
            Self::En => "You cannot use these commands.",
            Self::Ru => "Вы не можете использовать эти команды.",
        }
    }

    /// Sent when the sender's chat membership could not be checked.
    #[must_use]
    pub const fn membership_unknown(self) -> &'static str {
        match self {
            Self::En => "Could not check your access to this chat. Please try again.",
            Self::Ru => "Не удалось проверить ваш доступ к этому чату. Попробуйте еще раз.",
        }
    }

    /// Guidance for a failed command.
    #[must_use]
    pub const fn error(self, err: &RoundError) -> &'static str {
        match (self, err) {
            (Self::En, RoundError::NoActiveSession) => "Start a new game with /newgame.",
            (Self::Ru, RoundError::NoActiveSession) => "Начните новую игру с помощью /newgame.",
            (Self::En, RoundError::SessionAlreadyExists) => {
                "You already have a game in progress. Use /hit or /stand."
            }
            (Self::Ru, RoundError::SessionAlreadyExists) => {
                "У вас уже идет игра. Используйте /hit или /stand."
            }
            (Self::En, RoundError::NotPlayerTurn) => "Please wait, the cards are still being dealt.",
            (Self::Ru, RoundError::NotPlayerTurn) => "Подождите, карты еще раздаются.",
            (Self::En, RoundError::MalformedCardFace(_) | RoundError::MalformedResponse(_)) => {
                "The card service sent an unreadable card. The game has ended."
            }
            (Self::Ru, RoundError::MalformedCardFace(_) | RoundError::MalformedResponse(_)) => {
                "Сервис карт прислал неизвестную карту. Игра завершена."
            }
            (Self::En, RoundError::CardSourceUnavailable(_)) => {
                "The card service is unavailable. The game has ended."
            }
            (Self::Ru, RoundError::CardSourceUnavailable(_)) => {
                "Сервис карт недоступен. Игра завершена."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_names() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn bust_reads_as_a_loss() {
        assert_eq!(
            Locale::En.outcome(Outcome::PlayerBust),
            Locale::En.outcome(Outcome::DealerWins)
        );
    }

    #[test]
    fn drew_card_uses_service_label() {
        assert_eq!(
            Locale::En.drew_card(Face::King, 20),
            "You drew KING. Your score: 20."
        );
    }
}
