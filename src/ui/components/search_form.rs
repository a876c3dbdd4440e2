use dioxus::prelude::*;

/// Search box; the term is only applied on submit, not while typing
#[component]
pub fn SearchForm(on_search: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_search.call(draft.read().clone());
            },
            input {
                r#type: "text",
                id: "searchTerm",
                class: "search-input",
                placeholder: "Search...",
                value: "{draft}",
                oninput: move |event: FormEvent| {
                    draft.set(event.value());
                },
            }
            button { r#type: "submit", class: "search-button", "Search" }
        }
    }
}
