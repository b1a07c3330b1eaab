//! List screens: which columns each entity shows and how.

use clap::ValueEnum;
use voltdesk_lib::model::{Record, Value};
use voltdesk_lib::{Alignment, Column, NOT_AVAILABLE, Node};

/// Sample data bundled with the binary.
const CHARGERS_JSON: &str = include_str!("../data/chargers.json");
const SESSIONS_JSON: &str = include_str!("../data/sessions.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Chargers,
    Sessions,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Chargers => "Chargers",
            Screen::Sessions => "Charging sessions",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Screen::Chargers => "No chargers registered",
            Screen::Sessions => "No charging sessions found",
        }
    }

    pub fn sample_data(self) -> &'static str {
        match self {
            Screen::Chargers => CHARGERS_JSON,
            Screen::Sessions => SESSIONS_JSON,
        }
    }

    /// Field that identifies a record of this screen.
    pub fn key_field(self) -> &'static str {
        match self {
            Screen::Chargers => "id",
            Screen::Sessions => "session_id",
        }
    }

    pub fn columns(self) -> Vec<Column<Record>> {
        match self {
            Screen::Chargers => charger_columns(),
            Screen::Sessions => session_columns(),
        }
    }

    /// Row class derived from the record's status.
    pub fn row_class(self, row: &Record, _index: usize) -> String {
        let status = row.get_str("status").unwrap_or_default();
        match (self, status) {
            (Screen::Chargers, "Faulted" | "Unavailable") => "row-error".to_string(),
            (Screen::Chargers, _) if row.get_bool("online") == Some(false) => "row-muted".to_string(),
            (Screen::Sessions, "Active") => "row-active".to_string(),
            _ => "row".to_string(),
        }
    }
}

fn charger_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("Charger", "id"),
        Column::new("Name", "name").max_width("22ch"),
        Column::new("City", "location.city").min_width("10ch"),
        Column::new("Status", "status").cell(charger_status),
        Column::new("Connectors", "connectors").cell(connector_summary),
        Column::new("Max kW", "max_power_kw").align(Alignment::Right),
        Column::new("EVSE", "evse_uid").tooltip(),
        Column::new("Heartbeat", "last_heartbeat").max_width("160px"),
    ]
}

fn session_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("Session", "session_id").tooltip().max_width("12ch"),
        Column::new("Charger", "charger.id"),
        Column::new("Connector", "charger.connector"),
        Column::new("Driver", "user.name"),
        Column::new("Started", "started_at"),
        Column::new("Energy", "energy_wh")
            .align(Alignment::Right)
            .cell(energy_kwh),
        Column::new("Cost", "cost")
            .align(Alignment::Right)
            .cell(session_cost),
        Column::new("Status", "status").class_name("status"),
    ]
}

/// Status badge; an offline charger is flagged whatever its last status.
fn charger_status(row: &Record) -> Node {
    let status = row.get_str("status").unwrap_or("Unknown");
    let badge = Node::text(status).class(format!("badge-{}", status.to_lowercase()));
    match row.get_bool("online") {
        Some(false) => Node::group([badge, Node::text("(offline)").class("muted")]),
        _ => badge,
    }
}

/// e.g. `CCS 150 / Type2 22`
fn connector_summary(row: &Record) -> Node {
    let Some(connectors) = row.get("connectors").and_then(Value::as_list) else {
        return Node::text(NOT_AVAILABLE);
    };
    let parts: Vec<String> = connectors
        .iter()
        .filter_map(Value::as_record)
        .map(|connector| {
            let standard = connector.get_str("standard").unwrap_or("?");
            match connector.get_f64("power_kw") {
                Some(kw) => format!("{standard} {kw}"),
                None => standard.to_string(),
            }
        })
        .collect();
    if parts.is_empty() {
        Node::text(NOT_AVAILABLE)
    } else {
        Node::text(parts.join(" / "))
    }
}

fn energy_kwh(row: &Record) -> Node {
    match row.get_f64("energy_wh") {
        Some(wh) => Node::text(format!("{:.1} kWh", wh / 1000.0)),
        None => Node::text(NOT_AVAILABLE),
    }
}

fn session_cost(row: &Record) -> Node {
    let Some(cost) = row.get("cost").and_then(Value::as_record) else {
        return Node::text(NOT_AVAILABLE);
    };
    match (cost.get_f64("amount"), cost.get_str("currency")) {
        (Some(amount), Some(currency)) => Node::text(format!("{amount:.2} {currency}")),
        (Some(amount), None) => Node::text(format!("{amount:.2}")),
        _ => Node::text(NOT_AVAILABLE),
    }
}
