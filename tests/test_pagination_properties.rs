mod support;

use crate::support::{card, ids};
use cardview::catalog::{filter_cards, page_slice, page_window, total_pages, PAGE_SIZE, PAGE_WINDOW};
use cardview::ygoprodeck::Card;
use proptest::prelude::*;

const NAMES: [&str; 6] = [
    "Blue-Eyes White Dragon",
    "Dark Magician",
    "Mirror Force",
    "Pot of Greed",
    "Red-Eyes Black Dragon",
    "Swords of Revealing Light",
];

fn catalog_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((0..NAMES.len(), any::<bool>()), 0..60).prop_map(|picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(i, (name, is_spell))| {
                let card_type = if is_spell { "Spell Card" } else { "Normal Monster" };
                card(i as u64 + 1, NAMES[name], card_type, "Flavor text.")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filtered_view_is_exact_ordered_subsequence(
        catalog in catalog_strategy(),
        term in prop::sample::select(vec!["", "dragon", "EYES", "spell", "flavor", "nothing"]),
    ) {
        let filtered = filter_cards(&catalog, term);
        let needle = term.to_lowercase();

        let expected: Vec<u64> = catalog
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.card_type.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
            })
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn pages_concatenate_to_filtered_view(
        catalog in catalog_strategy(),
        term in prop::sample::select(vec!["", "dragon", "spell"]),
    ) {
        let filtered = filter_cards(&catalog, term);
        let pages = total_pages(filtered.len(), PAGE_SIZE);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&filtered, page, PAGE_SIZE);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= PAGE_SIZE);
            rebuilt.extend_from_slice(slice);
        }

        prop_assert_eq!(ids(&rebuilt), ids(&filtered));
        prop_assert!(page_slice(&filtered, pages + 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn window_stays_in_range(total in 0usize..200, offset in 0usize..200) {
        let current = if total == 0 { 1 } else { offset % total + 1 };
        let window: Vec<usize> = page_window(current, total).collect();

        prop_assert_eq!(window.len(), total.min(PAGE_WINDOW));
        prop_assert!(window.iter().all(|p| (1..=total).contains(p)));
        if total > 0 {
            prop_assert!(window.contains(&current));
        }
    }
}
