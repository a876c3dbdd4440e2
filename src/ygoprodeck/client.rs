use crate::ygoprodeck::models::Card;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Public YGOPRODeck card-information endpoint
pub const DEFAULT_CARDINFO_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";

#[derive(Error, Debug)]
pub enum CardInfoError {
    #[error(transparent)]
    Request(#[from] ReqwestError),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("{0}")]
    Api(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Success envelope: `{"data": [...]}`
#[derive(Debug, Deserialize)]
struct CardInfoResponse {
    data: Vec<Card>,
}

/// Error envelope returned alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// Anything that can produce the full card catalog (allows mocking for tests)
#[async_trait::async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<Card>, CardInfoError>;
}

#[derive(Clone)]
pub struct CardInfoClient {
    client: Client,
    endpoint: String,
}

impl CardInfoClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for CardInfoClient {
    fn default() -> Self {
        Self::new(DEFAULT_CARDINFO_URL.to_string())
    }
}

#[async_trait::async_trait]
impl CardSource for CardInfoClient {
    /// Fetch the unfiltered card set
    async fn fetch_cards(&self) -> Result<Vec<Card>, CardInfoError> {
        debug!("Requesting card catalog from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("User-Agent", "cardview/0.1")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let cards = parse_card_response(&body)?;
            info!("Fetched {} cards", cards.len());
            Ok(cards)
        } else {
            warn!("Card endpoint returned {}", status);
            Err(error_from_body(status, &body))
        }
    }
}

/// Decode a successful response body into the ordered card list
pub fn parse_card_response(body: &str) -> Result<Vec<Card>, CardInfoError> {
    let response: CardInfoResponse = serde_json::from_str(body)?;
    Ok(response.data)
}

/// Prefer the API's own message; fall back to the bare status
fn error_from_body(status: StatusCode, body: &str) -> CardInfoError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_error) => CardInfoError::Api(api_error.error),
        Err(_) => CardInfoError::Status(status.as_u16()),
    }
}
