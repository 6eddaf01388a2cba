// src/export/model.rs

use crate::models::event::WorkEvent;
use crate::models::settings::Settings;
use crate::utils::date::{month_pt, weekday_pt};
use serde::Serialize;

/// The fixed, localized CSV header. Written unquoted, unlike the data rows.
pub(crate) const CSV_HEADER: &str = "Funcionário,Data,Hora,Dia da Semana,Tipo,Valor (R$),Mês,Ano";

/// Fallback for the first column when no user name is configured.
pub(crate) const DEFAULT_EMPLOYEE: &str = "Funcionário";

/// Flat row for CSV / JSON export. Amounts are preformatted to two decimals
/// so both formats round-trip identically.
#[derive(Serialize, Clone, Debug)]
pub struct ExportRow {
    pub employee: String,
    pub date: String,
    pub time: String,
    pub weekday: String,
    pub kind: String,
    pub amount: String,
    pub month: String,
    pub year: String,
}

impl ExportRow {
    pub fn from_event(ev: &WorkEvent, settings: &Settings) -> Self {
        let d = ev.date();
        Self {
            employee: settings
                .user_name
                .clone()
                .unwrap_or_else(|| DEFAULT_EMPLOYEE.to_string()),
            date: d.format("%d/%m/%Y").to_string(),
            time: ev.time_str(),
            weekday: weekday_pt(d).to_string(),
            kind: ev.kind.label_pt().to_string(),
            amount: format!("{:.2}", ev.amount),
            month: month_pt(d).to_string(),
            year: d.format("%Y").to_string(),
        }
    }
}

pub(crate) fn build_rows(events: &[WorkEvent], settings: &Settings) -> Vec<ExportRow> {
    events
        .iter()
        .map(|ev| ExportRow::from_event(ev, settings))
        .collect()
}
