use serde_json::json;
use voltdesk_lib::pagination::{PageMeta, Pager};
use voltdesk_lib::text::{
    DEFAULT_TOOLTIP_WIDTH, TextRenderer, display_width, pad_to_width, truncate_to_width,
};
use voltdesk_lib::{Alignment, Column, Record, Table};

fn records() -> Vec<Record> {
    vec![
        Record::from_json(json!({
            "id": "CP-1",
            "evse": "BE*VLT*E0000000001*0001*EXTREMELY-LONG-CONNECTOR-IDENTIFIER",
            "power": 22
        }))
        .unwrap(),
        Record::from_json(json!({ "id": "CP-22", "evse": "short", "power": 150 })).unwrap(),
    ]
}

#[test]
fn test_truncate_and_pad() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(pad_to_width("ab", 5, Alignment::Left), "ab   ");
    assert_eq!(pad_to_width("ab", 5, Alignment::Right), "   ab");
    assert_eq!(pad_to_width("ab", 5, Alignment::Center), " ab  ");
    assert_eq!(pad_to_width("abcdef", 4, Alignment::Left), "abc…");
}

#[test]
fn test_cjk_width() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(pad_to_width("日本", 6, Alignment::Left), "日本  ");
}

#[test]
fn test_header_rule_and_rows() {
    let columns = vec![
        Column::new("ID", "id"),
        Column::new("Power", "power").align(Alignment::Right),
    ];
    let data = records();
    let lines = TextRenderer::default().render_table(&Table::new(&columns, &data).render());
    assert_eq!(
        lines,
        vec![
            "ID     Power".to_string(),
            "─────  ─────".to_string(),
            "CP-1      22".to_string(),
            "CP-22    150".to_string(),
        ]
    );
}

#[test]
fn test_tooltip_column_is_capped() {
    let columns = vec![Column::new("EVSE", "evse").tooltip()];
    let data = records();
    let renderer = TextRenderer::default();
    let view = Table::new(&columns, &data).render();
    assert_eq!(renderer.column_widths(&view), vec![DEFAULT_TOOLTIP_WIDTH]);

    let lines = renderer.render_table(&view);
    assert!(lines[2].ends_with('…'));
    assert_eq!(display_width(&lines[2]), DEFAULT_TOOLTIP_WIDTH);
    // the full value is still in the view
    assert_eq!(
        view.rows()[0].cells[0].content.tooltip_text(),
        Some("BE*VLT*E0000000001*0001*EXTREMELY-LONG-CONNECTOR-IDENTIFIER")
    );
}

#[test]
fn test_width_hints() {
    let columns = vec![
        Column::new("ID", "id").min_width("10ch"),
        Column::new("EVSE", "evse").max_width("64px"),
    ];
    let data = records();
    let view = Table::new(&columns, &data).render();
    assert_eq!(TextRenderer::default().column_widths(&view), vec![10, 8]);
}

#[test]
fn test_fits_to_max_width() {
    let columns = vec![Column::new("ID", "id"), Column::new("EVSE", "evse")];
    let data = records();
    let view = Table::new(&columns, &data).render();
    let renderer = TextRenderer::new(30);
    let widths = renderer.column_widths(&view);
    assert_eq!(widths.iter().sum::<usize>() + renderer.column_gap, 30);
    for line in renderer.render_table(&view) {
        assert!(display_width(&line) <= 30, "{line:?}");
    }
}

#[test]
fn test_loading_line() {
    let columns = vec![Column::new("Charger ID", "id"), Column::new("Status", "status")];
    let data: Vec<Record> = Vec::new();
    let view = Table::new(&columns, &data).loading(true).render();
    let lines = TextRenderer::default().render_table(&view);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].trim(), "⠋ Loading data…");
}

#[test]
fn test_empty_line() {
    let columns = vec![Column::new("Charger ID", "id")];
    let data: Vec<Record> = Vec::new();
    let view = Table::new(&columns, &data).empty_message("No sessions").render();
    let lines = TextRenderer::default().render_table(&view);
    assert_eq!(lines[2].trim(), "No sessions");
}

#[test]
fn test_pager_line() {
    let pager = Pager::new(PageMeta::new(2, 3).total_items(25).page_size(10), |_| {})
        .page_size_options(vec![10, 20])
        .on_page_size_change(|_| {});
    let line = TextRenderer::default().render_pager(&pager.render());
    assert_eq!(line, "Showing 11-20 of 25  ‹ 1 [2] 3 ›  Page 2 of 3  Size: 10 (10/20)");
}

#[test]
fn test_pager_line_with_edges_and_ellipsis() {
    let pager = Pager::new(PageMeta::new(5, 10), |_| {}).show_edges(true);
    let line = TextRenderer::default().render_pager(&pager.render());
    assert_eq!(line, "« ‹ 1 … 4 [5] 6 … 10 › »  Page 5 of 10");
}

#[test]
fn test_table_with_pager_appends_footer() {
    let columns = vec![Column::new("ID", "id")];
    let data = records();
    let pager = Pager::new(PageMeta::new(1, 1), |_| {});
    let lines = TextRenderer::default().render_table(&Table::new(&columns, &data).pagination(pager).render());
    assert_eq!(lines[lines.len() - 2], "");
    assert_eq!(lines[lines.len() - 1], "‹ [1] ›  Page 1 of 1");
}

#[test]
fn test_oversized_hints_are_capped() {
    let columns = vec![
        Column::new("ID", "id").min_width("1e300"),
        Column::new("Power", "power").max_width("1e12"),
    ];
    let data = records();
    let view = Table::new(&columns, &data).render();
    let renderer = TextRenderer::new(80);

    let widths = renderer.column_widths(&view);
    assert_eq!(widths.iter().sum::<usize>() + renderer.column_gap, 80);
    for line in renderer.render_table(&view) {
        assert!(display_width(&line) <= 80, "{line:?}");
    }
}

#[test]
fn test_shrinks_widest_columns_evenly() {
    let columns = vec![
        Column::new("A", "a").min_width("40"),
        Column::new("B", "b").min_width("30"),
        Column::new("C", "c").min_width("6"),
    ];
    let data = records();
    let view = Table::new(&columns, &data).render();
    let renderer = TextRenderer::new(54);
    assert_eq!(renderer.column_widths(&view), vec![22, 22, 6]);
}
