//! Search and pagination over fully fetched collections.
//!
//! The management API always returns complete collections. Every list page
//! narrows them with a case-insensitive substring search and then shows a
//! fixed-size window of the result together with a bounded row of page links.
//! Everything here is pure: the same inputs always render the same page.
//!
//! [`ListView`] also carries the navigation rules of a list (previous, next,
//! jump, frozen while the collection is being fetched). The console renders
//! a page only once its fetch has completed, so [`Paginated::new`] always
//! starts from an idle view and the rendered links are live.

use std::ops::Range;

use serde::Serialize;

/// Number of rows shown on every list page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of page links rendered at once.
pub const MAX_VISIBLE_PAGES: usize = 7;

/// A record that can be matched against a free-text search term.
pub trait Searchable {
    /// Stringified values of the fields taking part in search.
    ///
    /// Absent optional fields are left out.
    fn search_values(&self) -> Vec<String>;

    /// Returns `true` when any field contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

impl Searchable for String {
    fn search_values(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl Searchable for serde_json::Value {
    fn search_values(&self) -> Vec<String> {
        match self {
            serde_json::Value::Object(map) => map.values().filter_map(stringify_value).collect(),
            other => stringify_value(other).into_iter().collect(),
        }
    }
}

fn stringify_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(values) => Some(
            values
                .iter()
                .filter_map(stringify_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Keeps the items matching `search_term`, preserving their order.
///
/// An empty term matches everything.
pub fn filter<T, I>(items: I, search_term: &str) -> Vec<T>
where
    T: Searchable,
    I: IntoIterator<Item = T>,
{
    let needle = search_term.to_lowercase();
    if needle.is_empty() {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| item.matches(&needle))
        .collect()
}

/// Number of pages needed for `total_items`. Never less than one.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// Index range of `current_page` within a collection of `len` items.
///
/// Pages outside the collection produce an empty range.
fn page_bounds(len: usize, current_page: usize, items_per_page: usize) -> Range<usize> {
    let start = current_page
        .checked_sub(1)
        .and_then(|page| page.checked_mul(items_per_page))
        .unwrap_or(len)
        .min(len);
    let end = start.saturating_add(items_per_page).min(len);
    start..end
}

/// Returns the slice shown on `current_page`.
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    &items[page_bounds(items.len(), current_page, items_per_page)]
}

/// Page numbers rendered as links, centered on `current_page` when there are
/// more pages than `max_visible_pages`.
pub fn visible_pages(
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
) -> Vec<usize> {
    if max_visible_pages == 0 {
        return vec![];
    }
    if total_pages <= max_visible_pages {
        return (1..=total_pages).collect();
    }

    let mut start = current_page.saturating_sub(max_visible_pages / 2).max(1);
    let mut end = start + max_visible_pages - 1;

    if end > total_pages {
        end = total_pages;
        start = (end + 1).saturating_sub(max_visible_pages).max(1);
    }

    (start..=end).collect()
}

/// Per-request state of a searchable list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView {
    search_term: String,
    current_page: usize,
    items_per_page: usize,
    max_visible_pages: usize,
    loading: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_visible_pages: MAX_VISIBLE_PAGES,
            loading: false,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the state carried by a request's query string.
    pub fn from_query(search: Option<&str>, page: Option<usize>) -> Self {
        Self {
            search_term: search.map(str::trim).unwrap_or_default().to_string(),
            current_page: page.unwrap_or(1).max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    #[must_use]
    pub fn max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages.max(1);
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the search term and returns to the first page.
    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
        self.current_page = 1;
    }

    pub fn previous_page(&mut self) {
        if self.loading {
            return;
        }
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.loading {
            return;
        }
        self.current_page = (self.current_page + 1).min(total_pages.max(1));
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        if self.loading {
            return;
        }
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Marks the underlying collection as being fetched; navigation is frozen
    /// and [`ListView::apply`] hides the page links until
    /// [`ListView::finish_fetch`].
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn finish_fetch(&mut self) {
        self.loading = false;
    }

    /// Whether previous/next/page links should be active.
    pub fn navigation_enabled(&self, total_pages: usize) -> bool {
        !self.loading && total_pages > 1
    }

    /// Filters `items`, clamps the current page into range and cuts out the
    /// visible window.
    pub fn apply<T: Searchable>(&mut self, items: Vec<T>) -> Paginated<T> {
        let mut filtered = filter(items, &self.search_term);
        let total_items = filtered.len();
        let total = total_pages(total_items, self.items_per_page);
        self.current_page = self.current_page.clamp(1, total);

        let bounds = page_bounds(total_items, self.current_page, self.items_per_page);
        let page_items: Vec<T> = filtered.drain(bounds).collect();

        Paginated {
            items: page_items,
            pages: visible_pages(self.current_page, total, self.max_visible_pages),
            page: self.current_page,
            total_pages: total,
            total_items,
            previous: (self.current_page > 1).then(|| self.current_page - 1),
            next: (self.current_page < total).then(|| self.current_page + 1),
            show_controls: self.navigation_enabled(total),
            search: (!self.search_term.is_empty()).then(|| self.search_term.clone()),
        }
    }
}

/// One rendered page of a list together with its navigation links.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub show_controls: bool,
    pub search: Option<String>,
}

impl<T: Searchable> Paginated<T> {
    /// Renders `items` for the given query state with default page sizes.
    pub fn new(items: Vec<T>, search: Option<&str>, page: Option<usize>) -> Self {
        ListView::from_query(search, page).apply(items)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("item-{i}")).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let items = vec![json!({"name": "FOO"})];
        assert_eq!(filter(items.clone(), "oo"), items);
        assert!(filter(vec![json!({"name": "foo"})], "XYZ").is_empty());
    }

    #[test]
    fn filter_with_empty_term_keeps_order() {
        let items = numbered(5);
        assert_eq!(filter(items.clone(), ""), items);
    }

    #[test]
    fn filter_checks_every_field() {
        let items = vec![
            json!({"name": "SCOTT", "status": "LOCKED", "attempts": 3}),
            json!({"name": "HR", "status": "OPEN", "attempts": 0}),
        ];
        assert_eq!(filter(items.clone(), "locked"), vec![items[0].clone()]);
        assert_eq!(filter(items.clone(), "3"), vec![items[0].clone()]);
    }

    #[test]
    fn filter_skips_null_fields() {
        let items = vec![json!({"name": "HR", "description": null})];
        assert!(filter(items, "null").is_empty());
    }

    #[test]
    fn filter_joins_arrays() {
        let items = vec![json!({"roles": ["CONNECT", "RESOURCE"]})];
        assert_eq!(filter(items, "connect,res").len(), 1);
    }

    #[test]
    fn paginate_second_page_of_twenty_three() {
        let items = numbered(23);
        let page = paginate(&items, 2, 10);
        assert_eq!(page, &items[10..20]);
        assert_eq!(total_pages(items.len(), 10), 3);
    }

    #[test]
    fn paginate_out_of_range_is_empty() {
        let items = numbered(5);
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, 3, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn empty_collection_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        let items: Vec<String> = vec![];
        assert!(paginate(&items, 1, 10).is_empty());
    }

    #[test]
    fn visible_pages_all_when_few() {
        assert_eq!(visible_pages(2, 3, 7), vec![1, 2, 3]);
    }

    #[test]
    fn visible_pages_centered() {
        assert_eq!(visible_pages(15, 20, 7), (12..=18).collect::<Vec<_>>());
    }

    #[test]
    fn visible_pages_shifted_at_end() {
        assert_eq!(visible_pages(19, 20, 7), (14..=20).collect::<Vec<_>>());
    }

    #[test]
    fn visible_pages_start_at_one() {
        assert_eq!(visible_pages(2, 20, 7), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn visible_pages_without_pages() {
        assert!(visible_pages(1, 0, 7).is_empty());
    }

    #[test]
    fn changing_search_resets_page() {
        let mut view = ListView::from_query(Some("a"), Some(4));
        view.set_search_term("b");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.search_term(), "b");
    }

    #[test]
    fn previous_and_next_stop_at_bounds() {
        let mut view = ListView::new();
        view.previous_page();
        assert_eq!(view.current_page(), 1);
        view.next_page(2);
        assert_eq!(view.current_page(), 2);
        view.next_page(2);
        assert_eq!(view.current_page(), 2);
        view.previous_page();
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn links_hidden_until_fetch_finishes() {
        let items = numbered(25);
        let mut view = ListView::new();
        view.begin_fetch();
        assert!(!view.apply(items.clone()).show_controls);
        view.finish_fetch();
        assert!(view.apply(items.clone()).show_controls);
        assert!(Paginated::new(items, None, None).show_controls);
    }

    #[test]
    fn navigation_frozen_while_loading() {
        let mut view = ListView::new();
        view.begin_fetch();
        view.next_page(5);
        assert_eq!(view.current_page(), 1);
        assert!(!view.navigation_enabled(5));
        view.finish_fetch();
        view.next_page(5);
        assert_eq!(view.current_page(), 2);
        assert!(view.navigation_enabled(5));
    }

    #[test]
    fn apply_clamps_page_into_range() {
        let paginated = ListView::from_query(None, Some(9)).apply(numbered(23));
        assert_eq!(paginated.page, 3);
        assert_eq!(paginated.items.len(), 3);
        assert_eq!(paginated.previous, Some(2));
        assert_eq!(paginated.next, None);
    }

    #[test]
    fn apply_with_no_matches_hides_controls() {
        let paginated = Paginated::new(numbered(23), Some("missing"), Some(2));
        assert!(paginated.items.is_empty());
        assert_eq!(paginated.total_pages, 1);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![1]);
        assert!(!paginated.show_controls);
        assert_eq!(paginated.search.as_deref(), Some("missing"));
    }

    #[test]
    fn apply_second_page() {
        let items = numbered(23);
        let paginated = Paginated::new(items.clone(), None, Some(2));
        assert_eq!(paginated.items, items[10..20].to_vec());
        assert_eq!(paginated.pages, vec![1, 2, 3]);
        assert!(paginated.show_controls);
        assert_eq!(paginated.total_items, 23);
    }
}
