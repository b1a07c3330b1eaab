use voltdesk_lib::pagination::PageToken::{self, Ellipsis, Page};
use voltdesk_lib::pagination::{DEFAULT_SIBLING_COUNT, window_pages};

fn pages(tokens: &[PageToken]) -> Vec<u32> {
    tokens.iter().filter_map(|t| t.page()).collect()
}

#[test]
fn test_middle_page_has_both_ellipses() {
    assert_eq!(
        window_pages(5, 10, 1),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn test_first_page_right_ellipsis_only() {
    assert_eq!(window_pages(1, 10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
}

#[test]
fn test_last_page_left_ellipsis_only() {
    assert_eq!(window_pages(10, 10, 1), vec![Page(1), Ellipsis, Page(9), Page(10)]);
}

#[test]
fn test_small_total_lists_every_page() {
    assert_eq!(
        window_pages(3, 5, 1),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
}

#[test]
fn test_total_within_span_never_elides() {
    for sibling_count in 0..4 {
        let span = sibling_count * 2 + 3;
        for total in 1..=span {
            for current in 1..=total {
                let tokens = window_pages(current, total, sibling_count);
                let expected: Vec<PageToken> = (1..=total).map(Page).collect();
                assert_eq!(tokens, expected, "current={current} total={total} s={sibling_count}");
            }
        }
    }
}

#[test]
fn test_window_invariants_hold_everywhere() {
    for sibling_count in 0..4 {
        for total in 1..40 {
            for current in 1..=total {
                let tokens = window_pages(current, total, sibling_count);
                let ctx = format!("current={current} total={total} s={sibling_count}");

                assert!(
                    !tokens.windows(2).any(|w| w[0].is_ellipsis() && w[1].is_ellipsis()),
                    "adjacent ellipses: {ctx}"
                );
                assert_eq!(tokens.first(), Some(&Page(1)), "{ctx}");
                assert_eq!(tokens.last(), Some(&Page(total)), "{ctx}");
                assert!(tokens.contains(&Page(current)), "current missing: {ctx}");

                let shown = pages(&tokens);
                assert!(shown.windows(2).all(|w| w[0] < w[1]), "not ascending: {ctx}");

                let lo = current.saturating_sub(sibling_count).max(1);
                let hi = (current + sibling_count).min(total);
                for p in lo..=hi {
                    assert!(shown.contains(&p), "sibling {p} missing: {ctx}");
                }

                // an ellipsis always stands for at least one hidden page
                for (i, token) in tokens.iter().enumerate() {
                    if token.is_ellipsis() {
                        let before = tokens[i - 1].page().unwrap();
                        let after = tokens[i + 1].page().unwrap();
                        assert!(after - before > 1, "empty ellipsis: {ctx}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_out_of_range_current_is_clamped() {
    assert_eq!(window_pages(0, 10, 1), window_pages(1, 10, 1));
    assert_eq!(window_pages(99, 10, 1), window_pages(10, 10, 1));
}

#[test]
fn test_zero_total_is_one_page() {
    assert_eq!(window_pages(1, 0, 1), vec![Page(1)]);
    assert_eq!(window_pages(0, 0, 1), vec![Page(1)]);
}

#[test]
fn test_huge_sibling_count_does_not_overflow() {
    let tokens = window_pages(3, 6, u32::MAX);
    assert_eq!(pages(&tokens), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_large_page_counts() {
    assert_eq!(
        window_pages(u32::MAX, u32::MAX, 1),
        vec![Page(1), Ellipsis, Page(u32::MAX - 1), Page(u32::MAX)]
    );
}

#[test]
fn test_is_idempotent() {
    assert_eq!(window_pages(7, 42, 2), window_pages(7, 42, 2));
}

#[test]
fn test_default_sibling_count() {
    assert_eq!(DEFAULT_SIBLING_COUNT, 1);
}

#[test]
fn test_serializes_ellipsis_as_string() {
    let json = serde_json::to_string(&window_pages(5, 10, 1)).unwrap();
    assert_eq!(json, r#"[1,"ellipsis",4,5,6,"ellipsis",10]"#);
}
