use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::card::{Card, DeckHandle, Face, Suit};
use crate::error::SourceError;

use super::CardSource;

/// Public deck-of-cards service.
pub const DEFAULT_DECK_API: &str = "https://deckofcardsapi.com";

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    #[serde(default)]
    success: bool,
    deck_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    cards: Vec<RawCard>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    value: Option<String>,
    suit: Option<String>,
    image: Option<String>,
}

fn deck_from_response(response: ShuffleResponse) -> Result<DeckHandle, SourceError> {
    if !response.success {
        return Err(SourceError::MalformedResponse(
            response
                .error
                .unwrap_or_else(|| "shuffle was not successful".to_owned()),
        ));
    }
    response
        .deck_id
        .filter(|id| !id.is_empty())
        .map(DeckHandle::new)
        .ok_or_else(|| SourceError::MalformedResponse("missing deck_id".to_owned()))
}

fn card_from_response(deck: &DeckHandle, response: DrawResponse) -> Result<Card, SourceError> {
    let Some(raw) = response.cards.into_iter().next() else {
        if response.success {
            return Err(SourceError::MalformedResponse("no card in draw".to_owned()));
        }
        // The service reports an empty deck as an unsuccessful draw without cards.
        debug!(%deck, error = ?response.error, "draw returned no card");
        return Err(SourceError::Exhausted(deck.to_string()));
    };

    let value = raw
        .value
        .ok_or_else(|| SourceError::MalformedResponse("card without value".to_owned()))?;
    let suit = raw
        .suit
        .ok_or_else(|| SourceError::MalformedResponse("card without suit".to_owned()))?;
    let image = raw
        .image
        .ok_or_else(|| SourceError::MalformedResponse("card without image".to_owned()))?;

    Ok(Card::new(Face::parse(&value)?, Suit::parse(&suit)?, image))
}

/// Client of the deck-of-cards HTTP service.
#[derive(Clone, Debug)]
pub struct DeckApi {
    base_url: Url,
    http_client: HttpClient,
}

impl DeckApi {
    /// Creates a client for the service at `base_url`.
    ///
    /// Every request is bounded by `timeout`; a request that exceeds it fails with
    /// [`SourceError::Timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, SourceError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|err| SourceError::MalformedResponse(format!("bad endpoint {path}: {err}")))
    }
}

impl CardSource for DeckApi {
    async fn new_deck(&self, decks: u8) -> Result<DeckHandle, SourceError> {
        let url = self.endpoint("api/deck/new/shuffle/")?;
        let response = self
            .http_client
            .get(url)
            .query(&[("deck_count", decks)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let deck = deck_from_response(response.json().await?)?;
        debug!(%deck, decks, "shuffled new deck");
        Ok(deck)
    }

    async fn draw(&self, deck: &DeckHandle) -> Result<Card, SourceError> {
        let url = self.endpoint(&format!("api/deck/{}/draw/", deck.as_str()))?;
        let response = self
            .http_client
            .get(url)
            .query(&[("count", 1)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::UnknownDeck(deck.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        card_from_response(deck, response.json().await?)
    }
}
