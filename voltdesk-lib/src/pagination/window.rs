//! Page window calculation.

use std::fmt;

use serde::Serialize;
use serde::Serializer;

/// Number of pages shown on each side of the current page by default.
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// One entry of a page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A page button.
    Page(u32),
    /// An elided run of pages.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, if this is a page.
    pub fn page(self) -> Option<u32> {
        match self {
            PageToken::Page(page) => Some(page),
            PageToken::Ellipsis => None,
        }
    }

    /// Returns `true` for the ellipsis marker.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Serializes as the bare page number or the string `"ellipsis"`.
impl Serialize for PageToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageToken::Page(page) => serializer.serialize_u32(*page),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Compute the page buttons and ellipses to display.
///
/// First page, last page, the current page and `sibling_count` neighbours on
/// each side are always visible. Inputs are normalized first: `total_pages`
/// is at least 1 and `current_page` is clamped into `1..=total_pages`.
///
/// ```
/// use voltdesk_lib::pagination::{PageToken::*, window_pages};
///
/// assert_eq!(
///     window_pages(5, 10, 1),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)],
/// );
/// ```
pub fn window_pages(current_page: u32, total_pages: u32, sibling_count: u32) -> Vec<PageToken> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    // first + last + current + siblings on both sides
    let span = sibling_count.saturating_mul(2).saturating_add(3);
    if total <= span {
        return pages(1, total).collect();
    }

    let left = current.saturating_sub(sibling_count).max(1);
    let right = current.saturating_add(sibling_count).min(total);

    let show_left = left > 2;
    let show_right = right < total - 1;

    let mut tokens = Vec::with_capacity(span as usize + 2);
    match (show_left, show_right) {
        (false, true) => {
            tokens.extend(pages(1, right));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total));
        }
        (true, false) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend(pages(left, total));
        }
        (true, true) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend(pages(left, right));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total));
        }
        // total > span rules this out
        (false, false) => tokens.extend(pages(1, total)),
    }
    tokens
}

fn pages(from: u32, to: u32) -> impl Iterator<Item = PageToken> {
    (from..=to).map(PageToken::Page)
}
