mod client;
pub mod models;

pub use client::{
    parse_card_response, CardInfoClient, CardInfoError, CardSource, DEFAULT_CARDINFO_URL,
};
pub use models::{Card, CardImage};
