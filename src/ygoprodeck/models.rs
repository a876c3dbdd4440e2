use serde::Deserialize;

/// Artwork attached to a card
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CardImage {
    pub id: u64,
    pub image_url: String,
    pub image_url_small: String,
}

/// A single card record as returned by the cardinfo endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Card {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "card_images", default)]
    pub images: Vec<CardImage>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub archetype: Option<String>,
}

impl Card {
    /// Artwork shown on the card panel
    pub fn primary_image(&self) -> Option<&CardImage> {
        self.images.first()
    }
}
