/// A bot command recognized in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`: greeting.
    Start,
    /// `/newgame`: deal a new round.
    NewGame,
    /// `/hit`: draw a card.
    Hit,
    /// `/stand`: end the player's turn.
    Stand,
}

impl Command {
    /// Parses the command at the start of `text`.
    ///
    /// Matching is case-insensitive. The group form `/hit@SomeBot` is accepted only when the
    /// mention names this bot (`bot_username`); with no known username any mention passes.
    #[must_use]
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let word = text.split_whitespace().next()?.strip_prefix('/')?;
        let (name, mention) = match word.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (word, None),
        };

        if let (Some(mention), Some(username)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(username) {
                return None;
            }
        }

        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "newgame" => Some(Self::NewGame),
            "hit" => Some(Self::Hit),
            "stand" => Some(Self::Stand),
            _ => None,
        }
    }

    /// Returns whether only chat participants may issue this command.
    #[must_use]
    pub const fn requires_membership(self) -> bool {
        matches!(self, Self::Hit | Self::Stand)
    }
}
