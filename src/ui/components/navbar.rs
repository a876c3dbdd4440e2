use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the app header above the routed content
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "Card Catalog" }
        }
        main { class: "app-content", Outlet::<Route> {} }
    }
}
