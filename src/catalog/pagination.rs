use std::ops::RangeInclusive;

/// Cards shown per page
pub const PAGE_SIZE: usize = 8;

/// Most page-number buttons shown at once
pub const PAGE_WINDOW: usize = 3;

/// Number of pages needed for `count` items; zero items means zero pages
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The half-open range `[(page-1)*size, page*size)` of `items`, clamped to
/// its bounds. Page numbers are 1-indexed; page 0 is empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers for the control strip, centred on `current`.
///
/// Spans exactly [`PAGE_WINDOW`] numbers whenever `total` allows it and never
/// leaves `1..=total`. Empty when there are no pages.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total <= PAGE_WINDOW {
        return 1..=total;
    }

    let middle = PAGE_WINDOW.div_ceil(2);
    if current <= middle {
        return 1..=PAGE_WINDOW;
    }

    let start = current - (middle - 1);
    let end = current + (PAGE_WINDOW - middle);
    if end > total {
        (total - PAGE_WINDOW + 1)..=total
    } else {
        start..=end
    }
}

/// Page before `current`, if there is one
pub fn previous_page(current: usize) -> Option<usize> {
    (current > 1).then(|| current - 1)
}

/// Page after `current`, if there is one
pub fn next_page(current: usize, total: usize) -> Option<usize> {
    (current < total).then(|| current + 1)
}

/// Accept a requested page only when it exists
pub fn checked_page(requested: usize, total: usize) -> Option<usize> {
    (1..=total).contains(&requested).then_some(requested)
}
