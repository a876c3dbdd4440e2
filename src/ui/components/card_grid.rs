use crate::catalog::ImageLoadStates;
use crate::ygoprodeck::Card;
use dioxus::prelude::*;

use super::CardPanel;

/// Responsive grid for the cards on the current page
#[component]
pub fn CardGrid(
    cards: Vec<Card>,
    image_states: ImageLoadStates,
    on_image_settled: EventHandler<u64>,
) -> Element {
    rsx! {
        div { class: "card-grid",
            for card in cards {
                CardPanel {
                    key: "{card.id}",
                    image_waiting: image_states.is_waiting(card.id),
                    card: card.clone(),
                    on_image_settled,
                }
            }
        }
    }
}
