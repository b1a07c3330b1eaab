//! Table and pager rendering to lines of text.

use crate::column::Alignment;
use crate::pagination::{PagerItem, PagerView};
use crate::table::{TableBody, TableView};

use super::{display_width, pad_to_width, parse_width_hint, single_line, truncate_to_width};

/// Width cap for tooltip columns without an explicit max width.
pub const DEFAULT_TOOLTIP_WIDTH: usize = 24;

/// Columns are never squeezed below this when fitting the table.
pub const MIN_COLUMN_WIDTH: usize = 4;

/// Renders table and pager views as terminal lines.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Total width available, in cells.
    pub max_width: usize,
    /// Spaces between columns.
    pub column_gap: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            max_width: 120,
            column_gap: 2,
        }
    }
}

impl TextRenderer {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    /// Render the header, a rule, the body and, when present, the pager.
    pub fn render_table(&self, view: &TableView) -> Vec<String> {
        let widths = self.column_widths(view);
        let gap = " ".repeat(self.column_gap);
        let table_width = self.table_width(&widths);

        let mut lines = Vec::new();
        lines.push(
            view.header
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_to_width(&cell.label, *width, cell.align))
                .collect::<Vec<_>>()
                .join(&gap),
        );
        lines.push(
            widths
                .iter()
                .map(|width| "─".repeat(*width))
                .collect::<Vec<_>>()
                .join(&gap),
        );

        match &view.body {
            TableBody::Loading {
                indicator, message, ..
            } => {
                let text = format!("{} {}", indicator.plain_text(), message);
                lines.push(pad_to_width(&text, self.span_width(table_width, &text), Alignment::Center));
            }
            TableBody::Empty { message, .. } => {
                lines.push(pad_to_width(message, self.span_width(table_width, message), Alignment::Center));
            }
            TableBody::Rows(rows) => {
                for row in rows {
                    lines.push(
                        row.cells
                            .iter()
                            .zip(&widths)
                            .map(|(cell, width)| {
                                pad_to_width(&single_line(&cell.content.plain_text()), *width, cell.align)
                            })
                            .collect::<Vec<_>>()
                            .join(&gap),
                    );
                }
            }
        }

        if let Some(pager) = &view.pagination {
            lines.push(String::new());
            lines.push(self.render_pager(pager));
        }

        lines.into_iter().map(|line| line.trim_end().to_string()).collect()
    }

    /// Render the pager as a single line.
    pub fn render_pager(&self, view: &PagerView) -> String {
        let mut parts = Vec::new();
        if let Some(summary) = &view.summary {
            parts.push(summary.to_string());
        }

        let controls = view
            .items
            .iter()
            .map(|item| match item {
                PagerItem::Ellipsis => "…".to_string(),
                PagerItem::Button(button) if button.active => format!("[{}]", button.label),
                PagerItem::Button(button) => button.label.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        parts.push(controls);

        parts.push(view.status.clone());

        if let Some(selector) = &view.page_size {
            let options = selector
                .options
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("/");
            parts.push(format!("Size: {} ({options})", selector.selected));
        }

        truncate_to_width(&parts.join("  "), self.max_width)
    }

    /// Width of each column after hints and fitting are applied.
    pub fn column_widths(&self, view: &TableView) -> Vec<usize> {
        let rows = view.rows();
        let mut widths: Vec<usize> = view
            .header
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cells = rows.iter().filter_map(|row| row.cells.get(i));
                let natural = cells
                    .clone()
                    .map(|cell| display_width(&single_line(&cell.content.plain_text())))
                    .fold(display_width(&header.label), usize::max);

                let hint = |h: &Option<String>| {
                    h.as_deref()
                        .and_then(parse_width_hint)
                        .map(|cells| cells.min(self.max_width))
                };
                let min = hint(&header.min_width);
                let max = hint(&header.max_width);
                let max = match max {
                    Some(max) => Some(max),
                    None if cells.clone().any(|cell| cell.content.has_tooltip()) => {
                        Some(DEFAULT_TOOLTIP_WIDTH.max(display_width(&header.label)))
                    }
                    None => None,
                };

                let mut width = natural;
                if let Some(max) = max {
                    width = width.min(max);
                }
                if let Some(min) = min {
                    width = width.max(min);
                }
                width.max(1)
            })
            .collect();

        // Shrink the widest column, down to the next widest, until the table fits.
        let mut excess = self.table_width(&widths).saturating_sub(self.max_width);
        while excess > 0 {
            let Some((widest, width)) = widths
                .iter()
                .copied()
                .enumerate()
                .max_by_key(|(_, width)| *width)
            else {
                break;
            };
            if width <= MIN_COLUMN_WIDTH {
                break;
            }
            let next = widths
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != widest)
                .map(|(_, w)| *w)
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH);
            let cut = width.saturating_sub(next).max(1).min(excess);
            widths[widest] -= cut;
            excess -= cut;
        }
        widths
    }

    /// Full-width rows span the table, but never hide their own message
    /// unless the terminal is narrower than it.
    fn span_width(&self, table_width: usize, text: &str) -> usize {
        table_width.max(display_width(text)).min(self.max_width)
    }

    fn table_width(&self, widths: &[usize]) -> usize {
        let gaps = widths.len().saturating_sub(1).saturating_mul(self.column_gap);
        widths.iter().fold(gaps, |total, width| total.saturating_add(*width))
    }
}
