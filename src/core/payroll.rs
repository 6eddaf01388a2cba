//! Payroll CSV parser for the admin view.
//!
//! Shares the line splitting, layout detection and date/kind rules with the
//! personal import, with two differences: the legacy layout gets a placeholder
//! employee name, and an unparsable amount falls back to the current rate for
//! the row's kind instead of skipping the row.

use crate::core::import::{Layout, data_lines, is_header, parse_row_timestamp, split_fields};
use crate::models::employee::Employee;
use crate::models::event::WorkEvent;
use crate::models::event_kind::EventKind;
use crate::models::settings::Settings;

pub const UNKNOWN_EMPLOYEE: &str = "Desconhecido";

/// Parse a payroll CSV into employees, grouped by name in first-occurrence
/// order. Later rows with an already-seen name merge into that employee.
pub fn parse_payroll_csv(text: &str, settings: &Settings) -> Vec<Employee> {
    let lines = data_lines(text);
    if lines.is_empty() {
        return Vec::new();
    }

    let start = if is_header(lines[0], &["nome", "funcionario"]) {
        1
    } else {
        0
    };

    let mut employees: Vec<Employee> = Vec::new();
    for line in &lines[start..] {
        let parts = split_fields(line);
        let Some(layout) = Layout::detect(parts.len()) else {
            continue;
        };

        let name = match layout.name_idx() {
            Some(i) => parts[i].as_str(),
            None => UNKNOWN_EMPLOYEE,
        };

        let Some(timestamp) =
            parse_row_timestamp(&parts[layout.date_idx()], &parts[layout.time_idx()])
        else {
            continue;
        };

        let kind = EventKind::classify(&parts[layout.kind_idx()]);
        let amount = parts[layout.amount_idx()]
            .trim()
            .parse::<f64>()
            .unwrap_or_else(|_| settings.rate_for(kind));

        let idx = match employees.iter().position(|e| e.name == name) {
            Some(i) => i,
            None => {
                let id = employees.len() as i64 + 1;
                employees.push(Employee::new(id, name));
                employees.len() - 1
            }
        };
        employees[idx].push_event(WorkEvent::new(timestamp, kind, amount));
    }
    employees
}
