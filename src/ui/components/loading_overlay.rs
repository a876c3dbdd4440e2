use dioxus::prelude::*;

/// Full-window overlay shown while the catalog loads
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner spinner-large" }
            h5 { class: "loading-text", "Loading..." }
        }
    }
}
