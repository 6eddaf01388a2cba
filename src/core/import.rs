//! Tolerant CSV parser for personal imports.
//!
//! Two known column layouts exist in the wild, selected by column count:
//! the current export format carries the user name in column 0, the legacy
//! format starts directly with the date. Structurally unusable rows (too few
//! columns, unparsable date, non-numeric amount) are skipped, never fatal.

use crate::models::event::WorkEvent;
use crate::models::event_kind::EventKind;
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Column layout of one CSV row, detected from the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `Name, Date, Time, Weekday, Kind, Amount[, Month, Year]`
    WithName,
    /// `Date, Time, ?, Kind, Amount`
    Legacy,
}

impl Layout {
    pub fn detect(columns: usize) -> Option<Self> {
        if columns >= 6 {
            Some(Layout::WithName)
        } else if columns >= 3 {
            Some(Layout::Legacy)
        } else {
            None
        }
    }

    pub fn name_idx(&self) -> Option<usize> {
        match self {
            Layout::WithName => Some(0),
            Layout::Legacy => None,
        }
    }

    pub fn date_idx(&self) -> usize {
        match self {
            Layout::WithName => 1,
            Layout::Legacy => 0,
        }
    }

    pub fn time_idx(&self) -> usize {
        match self {
            Layout::WithName => 2,
            Layout::Legacy => 1,
        }
    }

    pub fn kind_idx(&self) -> usize {
        match self {
            Layout::WithName => 4,
            Layout::Legacy => 3,
        }
    }

    pub fn amount_idx(&self) -> usize {
        match self {
            Layout::WithName => 5,
            Layout::Legacy => 4,
        }
    }
}

/// Split a raw CSV line: comma-separated, fields trimmed, quotes stripped.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    line.split(',')
        .map(|p| p.trim().replace('"', ""))
        .collect()
}

/// Non-empty lines of the document.
pub(crate) fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

pub(crate) fn is_header(first_line: &str, markers: &[&str]) -> bool {
    let lower = first_line.to_lowercase();
    markers.iter().any(|m| lower.contains(m))
}

/// Reassemble date and time cells into one timestamp.
/// A slash-delimited date is `DD/MM/YYYY`, the time defaults to `00:00`;
/// anything else goes through the free-form fallback.
pub(crate) fn parse_row_timestamp(date_part: &str, time_part: &str) -> Option<NaiveDateTime> {
    let date_part = date_part.trim();
    let time_part = time_part.trim();

    if date_part.contains('/') {
        let mut dmy = date_part.split('/');
        let d: u32 = dmy.next()?.trim().parse().ok()?;
        let m: u32 = dmy.next()?.trim().parse().ok()?;
        let y: i32 = dmy.next()?.trim().parse().ok()?;
        let d = NaiveDate::from_ymd_opt(y, m, d)?;

        let t = if time_part.is_empty() {
            NaiveTime::MIN
        } else {
            date::parse_time(time_part)?
        };
        return Some(d.and_time(t));
    }

    date::parse_flexible(&format!("{date_part} {time_part}"))
}

/// Parse a personal CSV export into work events for the current user,
/// in file order. Rows that cannot be used are silently skipped; unlike the
/// payroll import there is no rate fallback for bad amounts.
pub fn parse_personal_csv(text: &str) -> Vec<WorkEvent> {
    let lines = data_lines(text);
    if lines.is_empty() {
        return Vec::new();
    }

    let start = if is_header(lines[0], &["data", "funcionário", "funcionario"]) {
        1
    } else {
        0
    };

    let mut events = Vec::new();
    for line in &lines[start..] {
        let parts = split_fields(line);
        let Some(layout) = Layout::detect(parts.len()) else {
            continue;
        };

        let Some(timestamp) =
            parse_row_timestamp(&parts[layout.date_idx()], &parts[layout.time_idx()])
        else {
            continue;
        };

        let kind = EventKind::classify(&parts[layout.kind_idx()]);

        let Ok(amount) = parts[layout.amount_idx()].trim().parse::<f64>() else {
            continue;
        };

        events.push(WorkEvent::new(timestamp, kind, amount));
    }
    events
}
