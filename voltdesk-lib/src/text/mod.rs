//! Plain-text backend: display-width helpers and a table/pager renderer for
//! terminals.

mod render;

pub use render::*;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;

/// Terminal cells per CSS pixel hint.
const PX_PER_CELL: usize = 8;

const ELLIPSIS: &str = "…";
const ELLIPSIS_WIDTH: usize = 1;

/// Terminal cells taken by `s`. Wide (e.g. CJK) characters count as two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Terminal cells taken by `c`; control characters take none.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, ending in `…` when anything was
/// dropped. A wide character that would straddle the limit is dropped whole.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(ELLIPSIS_WIDTH) else {
        return String::new();
    };

    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|c| {
            used += char_width(*c);
            used <= budget
        })
        .collect();
    kept + ELLIPSIS
}

/// Pad `s` with spaces to exactly `width` cells, truncating if it is wider.
pub fn pad_to_width(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let gap = width.saturating_sub(display_width(&text));
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Center => (gap / 2, gap - gap / 2),
        Alignment::Right => (gap, 0),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Newlines and tabs become spaces; cells never wrap.
pub fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .collect()
}

/// Convert a width hint into terminal cells.
///
/// Accepts `"12"` and `"12ch"` as cell counts, `"96px"` at 8px per cell and
/// `"4rem"` at 16px per rem. Anything else is ignored.
pub fn parse_width_hint(hint: &str) -> Option<usize> {
    let hint = hint.trim();
    let (number, px_factor) = if let Some(n) = hint.strip_suffix("px") {
        (n, Some(1))
    } else if let Some(n) = hint.strip_suffix("rem") {
        (n, Some(16))
    } else if let Some(n) = hint.strip_suffix("ch") {
        (n, None)
    } else {
        (hint, None)
    };

    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let cells = match px_factor {
        Some(factor) => (value * factor as f64 / PX_PER_CELL as f64).ceil(),
        None => value.ceil(),
    };
    Some(cells as usize)
}
