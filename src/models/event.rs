use super::event_kind::EventKind;
use crate::utils::date::TIMESTAMP_FMT;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One logged half-day or full-day work instance.
///
/// The amount is a snapshot of the rate at creation time and is never
/// recomputed when the configured rates change later.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEvent {
    pub id: i64,                  // ⇔ events.id (assigned by the store)
    pub timestamp: NaiveDateTime, // ⇔ events.timestamp (TEXT, ISO-8601)
    pub kind: EventKind,          // ⇔ events.kind ('half_day' | 'full_day')
    pub amount: f64,              // ⇔ events.amount (REAL)
}

impl WorkEvent {
    /// Events built outside the store carry `id = 0` until inserted.
    pub fn new(timestamp: NaiveDateTime, kind: EventKind, amount: f64) -> Self {
        Self {
            id: 0,
            timestamp,
            kind,
            amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FMT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
