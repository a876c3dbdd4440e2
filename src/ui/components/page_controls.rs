use crate::catalog::pagination::{next_page, page_window, previous_page};
use crate::catalog::PageRequest;
use dioxus::prelude::*;

/// Previous / numbered / next buttons for the current filtered view
#[component]
pub fn PageControls(
    current_page: usize,
    total_pages: usize,
    on_request: EventHandler<PageRequest>,
) -> Element {
    let has_previous = previous_page(current_page).is_some();
    let has_next = next_page(current_page, total_pages).is_some();

    rsx! {
        nav { class: "page-controls",
            button {
                class: "page-button",
                disabled: !has_previous,
                onclick: move |_| {
                    if has_previous {
                        on_request.call(PageRequest::Previous);
                    }
                },
                "Previous"
            }

            for page in page_window(current_page, total_pages) {
                button {
                    key: "{page}",
                    class: if page == current_page { "page-button page-button-current" } else { "page-button" },
                    onclick: move |_| on_request.call(PageRequest::Page(page)),
                    "{page}"
                }
            }

            button {
                class: "page-button",
                disabled: !has_next,
                onclick: move |_| {
                    if has_next {
                        on_request.call(PageRequest::Next);
                    }
                },
                "Next"
            }
        }
    }
}
