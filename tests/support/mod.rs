#![allow(dead_code)]

use cardview::ygoprodeck::{Card, CardImage};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn card(id: u64, name: &str, card_type: &str, description: &str) -> Card {
    Card {
        id,
        name: name.to_string(),
        card_type: card_type.to_string(),
        description: description.to_string(),
        images: vec![CardImage {
            id,
            image_url: format!("https://images.example.test/cards/{}.jpg", id),
            image_url_small: format!("https://images.example.test/cards_small/{}.jpg", id),
        }],
        race: None,
        archetype: None,
    }
}

/// `count` plain monsters named "Monster 1", "Monster 2", ...
pub fn numbered_catalog(count: usize) -> Vec<Card> {
    (1..=count as u64)
        .map(|id| {
            card(
                id,
                &format!("Monster {}", id),
                "Normal Monster",
                "A vanilla monster.",
            )
        })
        .collect()
}

pub fn ids(cards: &[&Card]) -> Vec<u64> {
    cards.iter().map(|c| c.id).collect()
}
