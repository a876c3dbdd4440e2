use std::collections::HashMap;

/// Display state of a card's artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoad {
    /// Placeholder is showing
    Waiting,
    /// The image loaded or failed; either way the placeholder goes away
    Settled,
}

/// Per-card image load flags, keyed by card id.
///
/// Ids never seen are `Waiting`. There is no retry: a failed image settles
/// exactly like a loaded one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageLoadStates {
    states: HashMap<u64, ImageLoad>,
}

impl ImageLoadStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, card_id: u64) -> ImageLoad {
        self.states
            .get(&card_id)
            .copied()
            .unwrap_or(ImageLoad::Waiting)
    }

    pub fn is_waiting(&self, card_id: u64) -> bool {
        self.get(card_id) == ImageLoad::Waiting
    }

    /// Called from both the load and the error event
    pub fn settle(&mut self, card_id: u64) {
        self.states.insert(card_id, ImageLoad::Settled);
    }

    /// Start a new render pass: drop flags for cards no longer on screen.
    ///
    /// Cards that stay visible keep their mounted image, so their flag stays
    /// too; anything that comes back later mounts a fresh image and waits.
    pub fn retain_visible(&mut self, visible: &[u64]) {
        self.states.retain(|card_id, _| visible.contains(card_id));
    }

    /// Forget everything, e.g. when the catalog is replaced
    pub fn reset(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_cards_are_waiting() {
        let states = ImageLoadStates::new();
        assert!(states.is_waiting(42));
        assert_eq!(states.get(42), ImageLoad::Waiting);
    }

    #[test]
    fn test_settling_one_card_leaves_others_waiting() {
        let mut states = ImageLoadStates::new();
        states.settle(1);
        assert_eq!(states.get(1), ImageLoad::Settled);
        assert!(states.is_waiting(2));
        assert!(states.is_waiting(3));
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut states = ImageLoadStates::new();
        states.settle(7);
        states.settle(7);
        assert_eq!(states.get(7), ImageLoad::Settled);
    }

    #[test]
    fn test_new_page_puts_departed_cards_back_to_waiting() {
        let mut states = ImageLoadStates::new();
        states.settle(1);
        states.settle(2);
        states.settle(3);

        // Page changes: card 2 stays, 1 and 3 leave
        states.retain_visible(&[2, 9, 10]);
        assert_eq!(states.get(2), ImageLoad::Settled);
        assert!(states.is_waiting(1));
        assert!(states.is_waiting(3));
        assert!(states.is_waiting(9));

        // Card 1 comes back on a later pass and shows its placeholder again
        states.retain_visible(&[1, 2]);
        assert!(states.is_waiting(1));
    }

    #[test]
    fn test_reset_returns_to_waiting() {
        let mut states = ImageLoadStates::new();
        states.settle(1);
        states.settle(2);
        states.reset();
        assert!(states.is_waiting(1));
        assert!(states.is_waiting(2));
    }
}
