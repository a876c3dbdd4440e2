mod browse;
mod filter;
mod image_state;
mod loader;
pub mod pagination;

pub use browse::{BrowseState, PageRequest};
pub use filter::{filter_cards, filter_indices};
pub use image_state::{ImageLoad, ImageLoadStates};
pub use loader::{CatalogLoader, LoadOutcome, LoadStatus};
pub use pagination::{page_slice, page_window, total_pages, PAGE_SIZE, PAGE_WINDOW};
