mod app;
mod card_grid;
mod card_panel;
mod catalog_page;
mod loading_overlay;
mod navbar;
mod page_controls;
mod search_form;

pub use app::App;
pub use card_grid::CardGrid;
pub use card_panel::CardPanel;
pub use catalog_page::CatalogPage;
pub use loading_overlay::LoadingOverlay;
pub use navbar::Navbar;
pub use page_controls::PageControls;
pub use search_form::SearchForm;
