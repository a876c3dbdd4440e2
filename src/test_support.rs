// Test support utilities for both unit and integration tests

use crate::ygoprodeck::{Card, CardImage, CardInfoError, CardSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock card source for testing
///
/// Serves a fixed catalog (or a fixed failure) instead of calling the API.
pub struct MockCardSource {
    response: Result<Vec<Card>, String>,
    latency: Duration,
    fetches: AtomicUsize,
}

impl MockCardSource {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            response: Ok(cards),
            latency: Duration::ZERO,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with `message` as its display text
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            latency: Duration::ZERO,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Delay each response, to exercise cancellation
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CardSource for MockCardSource {
    async fn fetch_cards(&self) -> Result<Vec<Card>, CardInfoError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.response.clone().map_err(CardInfoError::Api)
    }
}

/// `count` distinct cards with ids starting at 1
pub fn sample_cards(count: usize) -> Vec<Card> {
    (1..=count as u64)
        .map(|id| Card {
            id,
            name: format!("Card {}", id),
            card_type: if id % 2 == 0 {
                "Spell Card".to_string()
            } else {
                "Effect Monster".to_string()
            },
            description: format!("Description for card {}", id),
            images: vec![CardImage {
                id,
                image_url: format!("https://images.example.test/cards/{}.jpg", id),
                image_url_small: format!("https://images.example.test/cards_small/{}.jpg", id),
            }],
            race: None,
            archetype: None,
        })
        .collect()
}
