//! Date utilities: wall-clock "now", timestamp parsing, period starts,
//! Portuguese weekday/month names used by the CSV exporter.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Storage format for event timestamps and `last_reset_date`.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn epoch() -> NaiveDateTime {
    NaiveDateTime::new(
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        NaiveTime::MIN,
    )
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Parse a stored ISO-8601 timestamp. Tolerates the RFC 3339 forms older
/// exports round-tripped (fractional seconds, trailing Z).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        TIMESTAMP_FMT,
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
}

/// Free-form date fallback for CSV rows without a slash-delimited date.
/// Accepts the directly parseable ISO forms; a bare date means midnight.
pub fn parse_flexible(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Some(ts) = parse_timestamp(s) {
        return Some(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(ts);
    }
    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Most recent Sunday at 00:00, relative to `now`.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    let back = now.date().weekday().num_days_from_sunday() as i64;
    (now.date() - chrono::Duration::days(back)).and_time(NaiveTime::MIN)
}

/// First day of the current month at 00:00.
pub fn month_start(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .unwrap_or(now.date())
        .and_time(NaiveTime::MIN)
}

/// January 1st of the current year at 00:00.
pub fn year_start(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .unwrap_or(now.date())
        .and_time(NaiveTime::MIN)
}

const WEEKDAYS_PT: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

pub fn weekday_pt(d: NaiveDate) -> &'static str {
    WEEKDAYS_PT[d.weekday().num_days_from_sunday() as usize]
}

pub fn month_pt(d: NaiveDate) -> &'static str {
    MONTHS_PT[(d.month0()) as usize]
}
