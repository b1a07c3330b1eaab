//! Pager control.
//!
//! The pager is fully controlled: it never stores a page number of its own.
//! Every interaction is forwarded to the caller through a callback and the
//! caller passes the resulting [`PageMeta`] back in on the next render.

use std::fmt;
use std::sync::Arc;

use super::meta::{ItemRange, PageMeta};
use super::window::{DEFAULT_SIBLING_COUNT, PageToken, window_pages};

/// Called with the requested page number.
pub type PageChangeFn = Arc<dyn Fn(u32) + Send + Sync>;

/// Called with the requested page size.
pub type PageSizeFn = Arc<dyn Fn(u32) + Send + Sync>;

// =============================================================================
// View
// =============================================================================

/// What a pager button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    First,
    Previous,
    Page,
    Next,
    Last,
}

/// A rendered pager button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerButton {
    pub kind: ButtonKind,
    /// Label shown on the button.
    pub label: String,
    /// Page requested when the button is pressed.
    pub target: u32,
    pub disabled: bool,
    /// Set on the button of the current page.
    pub active: bool,
}

/// An entry in the pager's control strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PagerItem {
    Button(PagerButton),
    /// Inert placeholder for elided pages.
    Ellipsis,
}

impl PagerItem {
    /// Returns the button, if this item is one.
    pub fn button(&self) -> Option<&PagerButton> {
        match self {
            PagerItem::Button(button) => Some(button),
            PagerItem::Ellipsis => None,
        }
    }
}

/// Page size dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSizeSelector {
    pub selected: u32,
    pub options: Vec<u32>,
}

/// The rendered pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerView {
    /// Normalized metadata the view was derived from.
    pub meta: PageMeta,
    /// "Showing a-b of n", when the total is known.
    pub summary: Option<ItemRange>,
    /// Navigation buttons and page window, left to right.
    pub items: Vec<PagerItem>,
    /// "Page x of y".
    pub status: String,
    pub page_size: Option<PageSizeSelector>,
}

impl PagerView {
    /// Iterate over the buttons, skipping ellipses.
    pub fn buttons(&self) -> impl Iterator<Item = &PagerButton> {
        self.items.iter().filter_map(PagerItem::button)
    }

    /// Find the first button of the given kind.
    pub fn button(&self, kind: ButtonKind) -> Option<&PagerButton> {
        self.buttons().find(|button| button.kind == kind)
    }

    /// The page window as shown, or empty in compact mode.
    pub fn window(&self) -> Vec<PageToken> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PagerItem::Button(b) if b.kind == ButtonKind::Page => Some(PageToken::Page(b.target)),
                PagerItem::Button(_) => None,
                PagerItem::Ellipsis => Some(PageToken::Ellipsis),
            })
            .collect()
    }
}

// =============================================================================
// Pager
// =============================================================================

/// Pager control props.
///
/// # Example
///
/// ```
/// use voltdesk_lib::pagination::{PageMeta, Pager};
///
/// let pager = Pager::new(PageMeta::new(2, 3).total_items(25).page_size(10), |page| {
///     println!("go to {page}");
/// });
/// let view = pager.render();
/// assert_eq!(view.summary.unwrap().to_string(), "Showing 11-20 of 25");
/// ```
#[derive(Clone)]
pub struct Pager {
    meta: PageMeta,
    sibling_count: u32,
    show_edges: bool,
    compact: bool,
    page_size_options: Vec<u32>,
    on_page_change: PageChangeFn,
    on_page_size_change: Option<PageSizeFn>,
}

impl Pager {
    /// Create a pager for `meta` that reports page requests to `on_page_change`.
    pub fn new(meta: PageMeta, on_page_change: impl Fn(u32) + Send + Sync + 'static) -> Self {
        Self {
            meta: meta.normalized(),
            sibling_count: DEFAULT_SIBLING_COUNT,
            show_edges: false,
            compact: false,
            page_size_options: Vec::new(),
            on_page_change: Arc::new(on_page_change),
            on_page_size_change: None,
        }
    }

    /// Number of pages shown around the current one.
    pub fn sibling_count(mut self, count: u32) -> Self {
        self.sibling_count = count;
        self
    }

    /// Show First/Last jump buttons.
    pub fn show_edges(mut self, show: bool) -> Self {
        self.show_edges = show;
        self
    }

    /// Hide the numbered page buttons, for narrow viewports.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Sizes offered by the page size selector.
    pub fn page_size_options(mut self, options: impl Into<Vec<u32>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Handler for page size changes. Resetting the page is up to the handler.
    pub fn on_page_size_change(mut self, handler: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Arc::new(handler));
        self
    }

    /// The normalized metadata this pager renders.
    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    /// Derive the pager view from the current props.
    pub fn render(&self) -> PagerView {
        let PageMeta {
            current_page: current,
            total_pages: total,
            ..
        } = self.meta;
        let at_start = current <= 1;
        let at_end = current >= total;

        let mut items = Vec::new();
        if self.show_edges {
            items.push(nav(ButtonKind::First, "«", 1, at_start));
        }
        items.push(nav(ButtonKind::Previous, "‹", current.saturating_sub(1).max(1), at_start));

        if !self.compact {
            for token in window_pages(current, total, self.sibling_count) {
                items.push(match token {
                    PageToken::Page(page) => PagerItem::Button(PagerButton {
                        kind: ButtonKind::Page,
                        label: page.to_string(),
                        target: page,
                        disabled: false,
                        active: page == current,
                    }),
                    PageToken::Ellipsis => PagerItem::Ellipsis,
                });
            }
        }

        items.push(nav(ButtonKind::Next, "›", current.saturating_add(1).min(total), at_end));
        if self.show_edges {
            items.push(nav(ButtonKind::Last, "»", total, at_end));
        }

        let page_size = match (&self.on_page_size_change, self.page_size_options.is_empty()) {
            (Some(_), false) => Some(PageSizeSelector {
                selected: self.meta.effective_page_size(),
                options: self.page_size_options.clone(),
            }),
            _ => None,
        };

        PagerView {
            meta: self.meta,
            summary: self.meta.item_range(),
            items,
            status: format!("Page {current} of {total}"),
            page_size,
        }
    }

    /// Handle a button press. Returns `false` for disabled buttons.
    pub fn press(&self, button: &PagerButton) -> bool {
        if button.disabled {
            return false;
        }
        self.go_to(button.target)
    }

    /// Request a page. The page is clamped into range first.
    pub fn go_to(&self, page: u32) -> bool {
        let page = page.clamp(1, self.meta.total_pages);
        log::trace!("page change requested: {page}");
        (self.on_page_change)(page);
        true
    }

    /// Request a page size. Only sizes offered by the selector are accepted.
    pub fn select_page_size(&self, size: u32) -> bool {
        let Some(handler) = &self.on_page_size_change else {
            return false;
        };
        if !self.page_size_options.contains(&size) {
            log::debug!("ignoring page size {size}, not in {:?}", self.page_size_options);
            return false;
        }
        handler(size);
        true
    }
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("meta", &self.meta)
            .field("sibling_count", &self.sibling_count)
            .field("show_edges", &self.show_edges)
            .field("compact", &self.compact)
            .field("page_size_options", &self.page_size_options)
            .field("on_page_size_change", &self.on_page_size_change.is_some())
            .finish_non_exhaustive()
    }
}

fn nav(kind: ButtonKind, label: &str, target: u32, disabled: bool) -> PagerItem {
    PagerItem::Button(PagerButton {
        kind,
        label: label.to_string(),
        target,
        disabled,
        active: false,
    })
}
