use super::event::WorkEvent;
use serde::Serialize;

/// Payroll-import aggregate: one employee with the running total owed and
/// the work events parsed from the imported CSV. Disjoint from the personal
/// event list; the whole collection is replaced on every payroll import.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub total_due: f64,
    pub events: Vec<WorkEvent>,
}

impl Employee {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            total_due: 0.0,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, ev: WorkEvent) {
        self.total_due += ev.amount;
        self.events.push(ev);
    }
}
