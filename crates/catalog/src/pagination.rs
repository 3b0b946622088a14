//! Pure pagination math and page-index shaping.

use serde::{Serialize, Serializer};

/// Products per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Text shown for a gap in the page-index list.
pub const GAP_MARKER: &str = "...";

/// One slot of the page-index list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    Page(usize),
    Gap,
}

impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Gap => serializer.serialize_str(GAP_MARKER),
        }
    }
}

/// One page of an already filtered and ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Length of the whole collection before slicing.
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    /// Empty when there is at most one page.
    pub page_index_list: Vec<PageEntry>,
}

/// Number of pages needed for `item_count` items.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Zero-based `[start, end)` window of `page`, clamped to `total_items`.
///
/// Page `0` and pages past the end yield an empty window.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> (usize, usize) {
    let size = page_size.max(1);
    let Some(index) = page.checked_sub(1) else {
        return (0, 0);
    };
    let start = index.saturating_mul(size).min(total_items);
    let end = start.saturating_add(size).min(total_items);
    (start, end)
}

/// Slice `items` to `page` (1-based). Out-of-range pages give an empty slice.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageResult<T> {
    let total_count = items.len();
    let pages = total_pages(total_count, page_size);
    let (start, end) = page_window(total_count, page_size, page);
    let paginated = pages > 1;

    PageResult {
        items: items[start..end].to_vec(),
        total_count,
        current_page: page,
        total_pages: pages,
        prev_page: (paginated && page > 1).then(|| page - 1),
        next_page: (paginated && page < pages).then(|| page + 1),
        page_index_list: page_index_list(page, pages),
    }
}

/// Compact "first … near-current … last" page list.
///
/// Keeps page 1, the last page and the pages adjacent to `current` that
/// exist, and puts a single [`PageEntry::Gap`] wherever consecutive kept
/// pages are more than one apart.
pub fn page_index_list(current: usize, total_pages: usize) -> Vec<PageEntry> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut kept = vec![1, total_pages];
    let neighbours = [current.checked_sub(1), Some(current), current.checked_add(1)];
    kept.extend(
        neighbours
            .into_iter()
            .flatten()
            .filter(|p| (1..=total_pages).contains(p)),
    );
    kept.sort_unstable();
    kept.dedup();

    let mut entries = Vec::with_capacity(kept.len() * 2);
    let mut previous: Option<usize> = None;
    for page in kept {
        if previous.is_some_and(|prev| page > prev + 1) {
            entries.push(PageEntry::Gap);
        }
        entries.push(PageEntry::Page(page));
        previous = Some(page);
    }
    entries
}
