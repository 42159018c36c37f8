use super::*;

fn page_of(items: Vec<&'static str>, total: u64) -> Page<&'static str> {
    Page { items, limit: 10, offset: 0, total }
}

#[test]
fn new_pager_is_idle_and_empty() {
    let pager: Pager<&str> = Pager::new(10);
    assert!(pager.items().is_empty());
    assert_eq!(pager.page(), 0);
    assert_eq!(pager.max_page(), 0);
    assert_eq!(*pager.phase(), FetchPhase::Idle);
    assert!(!pager.loading());
}

#[test]
fn request_moves_to_loading_with_page_offset() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, request) = pager.request(0);

    assert_eq!(generation, 1);
    assert_eq!(request, PageRequest { limit: 10, offset: 0 });
    assert!(pager.loading());
}

#[test]
fn empty_result_means_single_empty_page() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);

    assert!(pager.resolve(generation, page_of(vec![], 0)));
    assert_eq!(pager.max_page(), 0);
    assert!(pager.items().is_empty());
    assert_eq!(*pager.phase(), FetchPhase::Loaded);
}

#[test]
fn max_page_is_ceil_of_total_over_limit_minus_one() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    assert!(pager.resolve(generation, page_of(vec!["a"], 23)));
    assert_eq!(pager.max_page(), 2);

    // Exact multiples do not produce a trailing empty page.
    let (generation, _) = pager.request(0);
    assert!(pager.resolve(generation, page_of(vec!["a"], 20)));
    assert_eq!(pager.max_page(), 1);
}

#[test]
fn requested_page_is_clamped_to_known_range() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    pager.resolve(generation, page_of(vec!["a"], 23));

    let (_, request) = pager.request(99);
    assert_eq!(pager.page(), 2);
    assert_eq!(request.offset, 20);
}

#[test]
fn reset_request_returns_to_page_zero() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    pager.resolve(generation, page_of(vec!["a"], 23));
    pager.request(2);
    assert_eq!(pager.page(), 2);

    // Dependency change: back to the first page.
    let (_, request) = pager.request(0);
    assert_eq!(pager.page(), 0);
    assert_eq!(request.offset, 0);
    assert!(pager.loading());
}

#[test]
fn stale_resolve_is_discarded() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (gen_a, _) = pager.request(0);
    pager.resolve(gen_a, page_of(vec!["x"], 23));

    // Fetch A (page 1) issued, then fetch B (page 2); B resolves first.
    let (gen_a, _) = pager.request(1);
    let (gen_b, _) = pager.request(2);
    assert!(pager.resolve(gen_b, page_of(vec!["b"], 23)));
    assert_eq!(pager.items(), ["b"]);

    // A arrives late and must not overwrite B.
    assert!(!pager.resolve(gen_a, page_of(vec!["a"], 23)));
    assert_eq!(pager.items(), ["b"]);
    assert_eq!(pager.page(), 2);
    assert_eq!(*pager.phase(), FetchPhase::Loaded);
}

#[test]
fn reject_keeps_items_and_surfaces_error() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    pager.resolve(generation, page_of(vec!["a", "b"], 2));

    let (generation, _) = pager.request(0);
    assert!(pager.reject(generation, "boom".to_owned()));
    assert_eq!(pager.items(), ["a", "b"]);
    assert_eq!(pager.error().as_deref(), Some("boom"));
    assert!(!pager.loading());
}

#[test]
fn stale_reject_does_not_clear_newer_loading_state() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (gen_a, _) = pager.request(0);
    let (_gen_b, _) = pager.request(0);

    assert!(!pager.reject(gen_a, "boom".to_owned()));
    assert!(pager.loading());
    assert!(pager.error().is_none());
}

#[test]
fn resolve_clamps_page_when_total_shrinks() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    pager.resolve(generation, page_of(vec!["a"], 50));

    let (generation, _) = pager.request(4);
    assert_eq!(pager.page(), 4);
    pager.resolve(generation, page_of(vec![], 11));
    assert_eq!(pager.max_page(), 1);
    assert_eq!(pager.page(), 1);
}

#[test]
fn next_request_clears_previous_error() {
    let mut pager: Pager<&str> = Pager::new(10);
    let (generation, _) = pager.request(0);
    pager.reject(generation, "boom".to_owned());

    let (generation, _) = pager.request(0);
    assert!(pager.error().is_none());
    assert!(pager.loading());
    assert!(pager.resolve(generation, page_of(vec!["a"], 1)));
}

#[test]
fn zero_limit_is_bumped_to_one() {
    let mut pager: Pager<&str> = Pager::new(0);
    let (generation, request) = pager.request(0);
    assert_eq!(request.limit, 1);
    assert!(pager.resolve(generation, Page { items: vec!["a"], limit: 1, offset: 0, total: 3 }));
    assert_eq!(pager.max_page(), 2);
}
