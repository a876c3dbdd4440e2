use crate::catalog::{
    filter_indices, page_slice, total_pages, BrowseState, CatalogLoader, ImageLoadStates,
    LoadOutcome, LoadStatus, PageRequest, PAGE_SIZE,
};
use crate::config::Config;
use crate::ygoprodeck::{Card, CardInfoClient, CardSource};
use dioxus::prelude::*;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{CardGrid, LoadingOverlay, PageControls, SearchForm};

/// Catalog browser page
///
/// Owns every piece of browse state. Children get plain values and request
/// changes through callbacks.
#[component]
pub fn CatalogPage() -> Element {
    debug!("Component rendering");
    let config = use_context::<Config>();
    let mut cards = use_signal(Vec::<Card>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut browse = use_signal(BrowseState::new);
    let mut image_states = use_signal(ImageLoadStates::new);

    // Released when the page is torn down so a late fetch is dropped
    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Load the catalog once on mount
    use_hook(move || {
        let source: Arc<dyn CardSource> = Arc::new(CardInfoClient::new(config.api_url.clone()));
        let loader = CatalogLoader::new(source, config.loading_delay, cancel.clone());
        spawn(async move {
            debug!("Starting catalog load");
            let status = loader
                .run(|outcome| match outcome {
                    LoadOutcome::Loaded(card_list) => {
                        image_states.write().reset();
                        cards.set(card_list);
                    }
                    LoadOutcome::Failed(message) => {
                        error.set(Some(message));
                    }
                })
                .await;

            if status == LoadStatus::Settled {
                loading.set(false);
            }
        })
    });

    // Positions into the catalog; only the visible page is cloned
    let filtered = use_memo(move || filter_indices(&cards.read(), browse.read().search_term()));
    let page_count = use_memo(move || total_pages(filtered.read().len(), PAGE_SIZE));
    let page_cards = use_memo(move || {
        let catalog = cards.read();
        page_slice(&filtered.read(), browse.read().current_page(), PAGE_SIZE)
            .iter()
            .map(|&index| catalog[index].clone())
            .collect::<Vec<Card>>()
    });

    // Each new page is a fresh render pass for the image placeholders
    use_effect(move || {
        let visible: Vec<u64> = page_cards.read().iter().map(|card| card.id).collect();
        image_states.write().retain_visible(&visible);
    });

    let current_page = browse.read().current_page();

    rsx! {
        if loading() {
            LoadingOverlay {}
        }

        div { class: "catalog",
            if let Some(message) = error() {
                p { class: "catalog-error", "Error: {message}" }
            } else if !loading() {
                SearchForm {
                    on_search: move |term: String| {
                        browse.write().submit_search(&term);
                    },
                }

                if filtered.read().is_empty() {
                    p { class: "catalog-empty", "No data" }
                } else {
                    PageControls {
                        current_page,
                        total_pages: page_count(),
                        on_request: move |request: PageRequest| {
                            let total = page_count();
                            browse.write().apply(request, total);
                        },
                    }
                    CardGrid {
                        cards: page_cards(),
                        image_states: image_states(),
                        on_image_settled: move |card_id: u64| {
                            image_states.write().settle(card_id);
                        },
                    }
                }
            }
        }
    }
}
