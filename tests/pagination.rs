use proptest::prelude::*;

use oracle_console::pagination::{ListView, filter, paginate, total_pages, visible_pages};

proptest! {
    #[test]
    fn pages_cover_every_item_once(
        len in 0usize..200,
        per_page in 1usize..25,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let pages = total_pages(len, per_page);
        prop_assert!(pages >= 1);

        let joined: Vec<usize> = (1..=pages)
            .flat_map(|page| paginate(&items, page, per_page).to_vec())
            .collect();
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn page_past_the_end_is_empty(len in 0usize..100, per_page in 1usize..25) {
        let items: Vec<usize> = (0..len).collect();
        let past = total_pages(len, per_page) + 1;
        prop_assert!(paginate(&items, past, per_page).is_empty());
        prop_assert!(paginate(&items, 0, per_page).is_empty());
    }

    #[test]
    fn visible_window_is_bounded_and_contains_current(
        total in 1usize..500,
        current_seed in 0usize..500,
        max_visible in 1usize..12,
    ) {
        let current = current_seed % total + 1;
        let pages = visible_pages(current, total, max_visible);

        prop_assert_eq!(pages.len(), max_visible.min(total));
        prop_assert!(pages.contains(&current));
        prop_assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(pages.first().is_some_and(|&p| p >= 1));
        prop_assert!(pages.last().is_some_and(|&p| p <= total));
    }

    #[test]
    fn filter_keeps_order_and_only_matches(
        names in prop::collection::vec("[a-zA-Z]{1,8}", 0..40),
        needle in "[a-zA-Z]{0,3}",
    ) {
        let kept = filter(names.clone(), &needle);
        let lower = needle.to_lowercase();

        prop_assert!(kept.iter().all(|name| name.to_lowercase().contains(&lower)));
        let expected: Vec<String> = names
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&lower))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn requested_page_is_clamped(len in 0usize..120, requested in 0usize..50) {
        let items: Vec<String> = (0..len).map(|i| format!("row-{i}")).collect();
        let page = ListView::from_query(None, Some(requested)).apply(items);

        prop_assert!(page.page >= 1);
        prop_assert!(page.page <= page.total_pages);
        prop_assert_eq!(page.total_items, len);
        prop_assert_eq!(page.previous.is_some(), page.page > 1);
        prop_assert_eq!(page.next.is_some(), page.page < page.total_pages);
    }
}

