use serde_json::json;
use voltdesk_lib::{Column, NOT_AVAILABLE, Node, Record, render_cell};

fn charger() -> Record {
    Record::from_json(json!({
        "id": "CP-0042",
        "status": "Available",
        "max_power_kw": 150,
        "online": true,
        "evse_uid": "BE*VLT*E0000000042*0001*CONNECTOR-LONG",
        "location": { "city": "Ghent", "street": null },
        "connectors": ["CCS", "Type2"]
    }))
    .unwrap()
}

#[test]
fn test_accessor_value_is_stringified() {
    let row = charger();
    assert_eq!(render_cell(&row, &Column::new("Power", "max_power_kw")), Node::text("150"));
    assert_eq!(render_cell(&row, &Column::new("Online", "online")), Node::text("true"));
    assert_eq!(
        render_cell(&row, &Column::new("Connectors", "connectors")),
        Node::text("CCS,Type2")
    );
}

#[test]
fn test_nested_accessor() {
    let row = charger();
    assert_eq!(
        render_cell(&row, &Column::new("City", "location.city")),
        Node::text("Ghent")
    );
}

#[test]
fn test_missing_value_shows_sentinel() {
    let row = charger();
    assert_eq!(
        render_cell(&row, &Column::new("Owner", "owner.name")),
        Node::text(NOT_AVAILABLE)
    );
    assert_eq!(
        render_cell(&row, &Column::new("Street", "location.street")),
        Node::text("N/A")
    );
}

#[test]
fn test_sentinel_is_not_wrapped_in_tooltip() {
    let row = charger();
    let node = render_cell(&row, &Column::new("Owner", "owner").tooltip());
    assert_eq!(node, Node::text("N/A"));
}

#[test]
fn test_tooltip_wraps_text() {
    let row = charger();
    let node = render_cell(&row, &Column::new("EVSE", "evse_uid").tooltip());
    assert_eq!(
        node.tooltip_text(),
        Some("BE*VLT*E0000000042*0001*CONNECTOR-LONG")
    );
}

#[test]
fn test_custom_cell_wins_and_sees_whole_row() {
    let column = Column::new("Status", "status").cell(|row: &Record| {
        let status = row.get_str("status").unwrap_or("Unknown");
        let power = row.get_i64("max_power_kw").unwrap_or(0);
        Node::text(format!("{status} @ {power} kW")).class("badge-ok")
    });
    let node = render_cell(&charger(), &column);
    assert_eq!(node, Node::text("Available @ 150 kW").class("badge-ok"));
}

#[test]
fn test_custom_cell_output_is_verbatim() {
    let column = Column::new("Blank", "status").tooltip().cell(|_: &Record| Node::Empty);
    assert_eq!(render_cell(&charger(), &column), Node::Empty);
}

#[test]
fn test_custom_cell_runs_for_missing_accessor() {
    let column = Column::new("Computed", "does.not.exist").cell(|_: &Record| Node::text("ok"));
    assert_eq!(render_cell(&charger(), &column), Node::text("ok"));
}
