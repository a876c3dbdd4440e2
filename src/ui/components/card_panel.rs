use crate::ygoprodeck::Card;
use dioxus::prelude::*;

/// Individual card panel
///
/// Shows a placeholder over the artwork until the image reports load or
/// error. A failed image clears the placeholder the same way.
#[component]
pub fn CardPanel(card: Card, image_waiting: bool, on_image_settled: EventHandler<u64>) -> Element {
    let card_id = card.id;

    let subtitle = match (&card.race, &card.archetype) {
        (Some(race), Some(archetype)) => Some(format!("{} · {}", race, archetype)),
        (Some(race), None) => Some(race.clone()),
        (None, Some(archetype)) => Some(archetype.clone()),
        (None, None) => None,
    };

    rsx! {
        div { class: "card-panel",
            h1 { class: "card-name", title: "{card.name}", "{card.name}" }
            h3 { class: "card-type", "Type: {card.card_type}" }
            if let Some(subtitle) = subtitle {
                p { class: "card-subtitle", "{subtitle}" }
            }

            if let Some(image) = card.primary_image() {
                div { class: "card-art",
                    if image_waiting {
                        div { class: "card-art-placeholder",
                            div { class: "spinner" }
                        }
                    }
                    img {
                        class: if image_waiting { "card-image card-image-hidden" } else { "card-image" },
                        src: "{image.image_url}",
                        alt: "{card.name}",
                        onload: move |_| on_image_settled.call(card_id),
                        onerror: move |_| on_image_settled.call(card_id),
                    }
                }
            }

            p { class: "card-description", "Description: {card.description}" }
        }
    }
}
