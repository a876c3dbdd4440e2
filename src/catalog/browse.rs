use super::pagination::{checked_page, next_page, previous_page};
use tracing::debug;

/// A navigation request coming from the page controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    Page(usize),
}

/// User-driven browse inputs: the submitted search term and the current page.
///
/// Everything shown on screen (filtered view, page slice, page window) is
/// derived from this plus the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    search_term: String,
    current_page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the search term; always lands back on page 1
    pub fn submit_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.current_page = 1;
        debug!("Search submitted: {:?}", self.search_term);
    }

    /// Jump to `page` if it exists; returns whether anything changed
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        match checked_page(page, total_pages) {
            Some(page) if page != self.current_page => {
                self.current_page = page;
                true
            }
            _ => false,
        }
    }

    /// Apply a control-strip request; out-of-range requests are no-ops
    pub fn apply(&mut self, request: PageRequest, total_pages: usize) -> bool {
        match request {
            PageRequest::Previous => self.previous(),
            PageRequest::Next => self.next(total_pages),
            PageRequest::Page(page) => self.go_to(page, total_pages),
        }
    }

    pub fn previous(&mut self) -> bool {
        match previous_page(self.current_page) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        match next_page(self.current_page, total_pages) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unfiltered_on_first_page() {
        let state = BrowseState::new();
        assert_eq!(state.search_term(), "");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = BrowseState::new();
        assert!(state.go_to(3, 5));
        state.submit_search("dragon");
        assert_eq!(state.search_term(), "dragon");
        assert_eq!(state.current_page(), 1);

        // Resubmitting the same term still resets
        assert!(state.next(5));
        state.submit_search("dragon");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_search_term_is_kept_verbatim() {
        let mut state = BrowseState::new();
        state.submit_search("Blue ");
        assert_eq!(state.search_term(), "Blue ");
        state.submit_search("   ");
        assert_eq!(state.search_term(), "   ");
    }

    #[test]
    fn test_go_to_rejects_missing_pages() {
        let mut state = BrowseState::new();
        assert!(!state.go_to(0, 3));
        assert!(!state.go_to(4, 3));
        assert!(!state.go_to(1, 3));
        assert_eq!(state.current_page(), 1);
        assert!(state.go_to(3, 3));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_previous_and_next_stop_at_ends() {
        let mut state = BrowseState::new();
        assert!(!state.previous());
        assert_eq!(state.current_page(), 1);

        assert!(state.next(2));
        assert!(!state.next(2));
        assert_eq!(state.current_page(), 2);

        assert!(state.previous());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_apply_routes_requests() {
        let mut state = BrowseState::new();
        assert!(!state.apply(PageRequest::Previous, 4));
        assert!(state.apply(PageRequest::Page(4), 4));
        assert!(!state.apply(PageRequest::Next, 4));
        assert!(state.apply(PageRequest::Previous, 4));
        assert_eq!(state.current_page(), 3);
        assert!(!state.apply(PageRequest::Page(9), 4));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_next_with_no_pages_is_noop() {
        let mut state = BrowseState::new();
        assert!(!state.next(0));
        assert_eq!(state.current_page(), 1);
    }
}
