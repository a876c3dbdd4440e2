use crate::ygoprodeck::Card;

/// Cards whose name, type or description contain `term`, ignoring case.
///
/// An empty term matches everything. Catalog order is preserved and nothing
/// is ranked.
pub fn filter_cards<'a>(catalog: &'a [Card], term: &str) -> Vec<&'a Card> {
    filter_indices(catalog, term)
        .into_iter()
        .map(|index| &catalog[index])
        .collect()
}

/// Positions in `catalog` of the cards [`filter_cards`] would return
pub fn filter_indices(catalog: &[Card], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = term.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, card)| card_matches(card, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// `needle` must already be lowercased
fn card_matches(card: &Card, needle: &str) -> bool {
    [&card.name, &card.card_type, &card.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
