use std::sync::{Arc, Mutex};

use voltdesk_lib::pagination::PageToken::{Ellipsis, Page};
use voltdesk_lib::pagination::{ButtonKind, ItemRange, PageMeta, Pager, PagerItem};

fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    (events, move |page: u32| sink.lock().unwrap().push(page))
}

#[test]
fn test_range_summary() {
    let meta = PageMeta::new(2, 3).total_items(25).page_size(10);
    assert_eq!(meta.item_range().unwrap().to_string(), "Showing 11-20 of 25");
}

#[test]
fn test_range_summary_last_partial_page() {
    let meta = PageMeta::new(3, 3).total_items(25).page_size(10);
    assert_eq!(
        meta.item_range(),
        Some(ItemRange {
            start: 21,
            end: 25,
            total: 25
        })
    );
}

#[test]
fn test_range_summary_without_items() {
    let meta = PageMeta::new(1, 1).total_items(0).page_size(10);
    assert_eq!(meta.item_range().unwrap().to_string(), "Showing 0-0 of 0");
}

#[test]
fn test_range_summary_absent_without_total() {
    let pager = Pager::new(PageMeta::new(1, 5).page_size(10), |_| {});
    assert_eq!(pager.render().summary, None);
}

#[test]
fn test_range_uses_default_page_size() {
    let meta = PageMeta::new(2, 5).total_items(45);
    assert_eq!(meta.item_range().unwrap().to_string(), "Showing 11-20 of 45");
}

#[test]
fn test_previous_disabled_on_first_page() {
    let view = Pager::new(PageMeta::new(1, 5), |_| {}).render();
    assert!(view.button(ButtonKind::Previous).unwrap().disabled);
    assert!(!view.button(ButtonKind::Next).unwrap().disabled);
}

#[test]
fn test_next_disabled_on_last_page() {
    let view = Pager::new(PageMeta::new(5, 5), |_| {}).render();
    assert!(!view.button(ButtonKind::Previous).unwrap().disabled);
    assert!(view.button(ButtonKind::Next).unwrap().disabled);
}

#[test]
fn test_single_page_disables_both() {
    let view = Pager::new(PageMeta::new(1, 1), |_| {}).render();
    assert!(view.button(ButtonKind::Previous).unwrap().disabled);
    assert!(view.button(ButtonKind::Next).unwrap().disabled);
}

#[test]
fn test_edges_hidden_by_default() {
    let view = Pager::new(PageMeta::new(3, 10), |_| {}).render();
    assert!(view.button(ButtonKind::First).is_none());
    assert!(view.button(ButtonKind::Last).is_none());
}

#[test]
fn test_edges_follow_prev_next_boundaries() {
    let first = Pager::new(PageMeta::new(1, 10), |_| {}).show_edges(true).render();
    assert!(first.button(ButtonKind::First).unwrap().disabled);
    assert!(!first.button(ButtonKind::Last).unwrap().disabled);

    let last = Pager::new(PageMeta::new(10, 10), |_| {}).show_edges(true).render();
    assert!(!last.button(ButtonKind::First).unwrap().disabled);
    assert!(last.button(ButtonKind::Last).unwrap().disabled);
    assert_eq!(last.button(ButtonKind::First).unwrap().target, 1);
}

#[test]
fn test_controls_order() {
    let view = Pager::new(PageMeta::new(5, 10), |_| {}).show_edges(true).render();
    let kinds: Vec<_> = view.buttons().map(|b| b.kind).collect();
    assert_eq!(kinds.first(), Some(&ButtonKind::First));
    assert_eq!(kinds[1], ButtonKind::Previous);
    assert_eq!(kinds[kinds.len() - 2], ButtonKind::Next);
    assert_eq!(kinds.last(), Some(&ButtonKind::Last));
}

#[test]
fn test_window_embedded_in_controls() {
    let view = Pager::new(PageMeta::new(5, 10), |_| {}).render();
    assert_eq!(
        view.window(),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    let active: Vec<_> = view.buttons().filter(|b| b.active).map(|b| b.target).collect();
    assert_eq!(active, [5]);
    assert_eq!(view.items.iter().filter(|i| **i == PagerItem::Ellipsis).count(), 2);
}

#[test]
fn test_sibling_count_widens_window() {
    let view = Pager::new(PageMeta::new(10, 20), |_| {}).sibling_count(2).render();
    assert_eq!(
        view.window(),
        vec![
            Page(1),
            Ellipsis,
            Page(8),
            Page(9),
            Page(10),
            Page(11),
            Page(12),
            Ellipsis,
            Page(20)
        ]
    );
}

#[test]
fn test_compact_hides_page_buttons() {
    let view = Pager::new(PageMeta::new(4, 9), |_| {}).compact(true).render();
    assert!(view.window().is_empty());
    assert_eq!(view.status, "Page 4 of 9");
    assert!(view.button(ButtonKind::Previous).is_some());
}

#[test]
fn test_press_emits_target() {
    let (events, on_change) = recorder();
    let pager = Pager::new(PageMeta::new(5, 10), on_change).show_edges(true);
    let view = pager.render();

    assert!(pager.press(view.button(ButtonKind::Next).unwrap()));
    assert!(pager.press(view.button(ButtonKind::Previous).unwrap()));
    assert!(pager.press(view.button(ButtonKind::Last).unwrap()));
    let six = view.buttons().find(|b| b.kind == ButtonKind::Page && b.target == 6).unwrap();
    assert!(pager.press(six));

    assert_eq!(*events.lock().unwrap(), vec![6, 4, 10, 6]);
}

#[test]
fn test_disabled_press_is_ignored() {
    let (events, on_change) = recorder();
    let pager = Pager::new(PageMeta::new(1, 3), on_change);
    let view = pager.render();
    assert!(!pager.press(view.button(ButtonKind::Previous).unwrap()));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_pager_holds_no_page_state() {
    let (events, on_change) = recorder();
    let pager = Pager::new(PageMeta::new(2, 5), on_change);
    let before = pager.render();
    pager.go_to(3);
    assert_eq!(pager.render(), before);
    assert_eq!(*events.lock().unwrap(), vec![3]);
}

#[test]
fn test_go_to_clamps() {
    let (events, on_change) = recorder();
    let pager = Pager::new(PageMeta::new(2, 5), on_change);
    pager.go_to(0);
    pager.go_to(99);
    assert_eq!(*events.lock().unwrap(), vec![1, 5]);
}

#[test]
fn test_out_of_range_meta_is_clamped() {
    let pager = Pager::new(PageMeta::new(0, 0), |_| {});
    assert_eq!(pager.meta(), PageMeta::new(1, 1));

    let view = Pager::new(PageMeta::new(12, 4), |_| {}).render();
    assert_eq!(view.status, "Page 4 of 4");
    assert!(view.button(ButtonKind::Next).unwrap().disabled);
}

#[test]
fn test_page_size_selector_requires_handler_and_options() {
    let meta = PageMeta::new(1, 3).page_size(20);

    let no_handler = Pager::new(meta, |_| {}).page_size_options(vec![10, 20]).render();
    assert!(no_handler.page_size.is_none());

    let no_options = Pager::new(meta, |_| {}).on_page_size_change(|_| {}).render();
    assert!(no_options.page_size.is_none());

    let both = Pager::new(meta, |_| {})
        .page_size_options(vec![10, 20, 50])
        .on_page_size_change(|_| {})
        .render();
    let selector = both.page_size.unwrap();
    assert_eq!(selector.selected, 20);
    assert_eq!(selector.options, [10, 20, 50]);
}

#[test]
fn test_select_page_size_emits_only_offered_sizes() {
    let (pages, on_change) = recorder();
    let (sizes, on_size) = recorder();
    let pager = Pager::new(PageMeta::new(3, 5).page_size(10), on_change)
        .page_size_options(vec![10, 25, 50])
        .on_page_size_change(on_size);

    assert!(pager.select_page_size(25));
    assert!(!pager.select_page_size(33));
    assert_eq!(*sizes.lock().unwrap(), vec![25]);
    // page reset is left to the caller
    assert!(pages.lock().unwrap().is_empty());
}

#[test]
fn test_select_page_size_without_handler() {
    let pager = Pager::new(PageMeta::new(1, 2), |_| {}).page_size_options(vec![10]);
    assert!(!pager.select_page_size(10));
}
