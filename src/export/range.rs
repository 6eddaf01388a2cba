// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Export range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRange {
    All,
    /// One calendar month (year, month).
    Month(i32, u32),
    /// One calendar day.
    Day(NaiveDate),
}

impl ExportRange {
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        match self {
            ExportRange::All => true,
            ExportRange::Month(y, m) => ts.year() == *y && ts.month() == *m,
            ExportRange::Day(d) => ts.date() == *d,
        }
    }
}

/// Parse --range.
///
/// Supports:
/// - all          → everything (also the default when --range is omitted)
/// - YYYY-MM      → one month
/// - YYYY-MM-DD   → one day
pub(crate) fn parse_range(r: &str) -> AppResult<ExportRange> {
    if r.eq_ignore_ascii_case("all") {
        return Ok(ExportRange::All);
    }

    match r.len() {
        // YYYY-MM
        7 => {
            let (y, m) = r
                .split_once('-')
                .ok_or_else(|| AppError::InvalidRange(r.to_string()))?;
            let y: i32 = y
                .parse()
                .map_err(|_| AppError::InvalidRange(r.to_string()))?;
            let m: u32 = m
                .parse()
                .map_err(|_| AppError::InvalidRange(r.to_string()))?;
            if !(1..=12).contains(&m) {
                return Err(AppError::InvalidRange(r.to_string()));
            }
            Ok(ExportRange::Month(y, m))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(r.to_string()))?;
            Ok(ExportRange::Day(d))
        }
        _ => Err(AppError::InvalidRange(r.to_string())),
    }
}
