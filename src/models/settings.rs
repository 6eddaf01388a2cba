//! Canonical application settings and the normalizer that decodes them from
//! the string-valued key/value rows the store persists.

use super::event_kind::EventKind;
use crate::utils::date::{self, TIMESTAMP_FMT};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const KEY_HALF_DAY_VALUE: &str = "half_day_value";
pub const KEY_FULL_DAY_VALUE: &str = "full_day_value";
pub const KEY_SHOW_JOKES: &str = "show_jokes";
pub const KEY_SHOW_TIPS: &str = "show_tips";
pub const KEY_THEME: &str = "theme";
pub const KEY_WEEKLY_GOAL: &str = "weekly_goal";
pub const KEY_MONTHLY_GOAL: &str = "monthly_goal";
pub const KEY_LAST_RESET_DATE: &str = "last_reset_date";
pub const KEY_USER_NAME: &str = "user_name";

/// Every key the settings table may legitimately hold.
pub const SETTING_KEYS: [&str; 9] = [
    KEY_HALF_DAY_VALUE,
    KEY_FULL_DAY_VALUE,
    KEY_SHOW_JOKES,
    KEY_SHOW_TIPS,
    KEY_THEME,
    KEY_WEEKLY_GOAL,
    KEY_MONTHLY_GOAL,
    KEY_LAST_RESET_DATE,
    KEY_USER_NAME,
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Vibrant,
}

impl Theme {
    /// Unknown wire values fall back to the default theme.
    pub fn from_wire(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Theme::Light,
            "vibrant" => Theme::Vibrant,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Vibrant => "vibrant",
        }
    }
}

/// One settings field that failed strict decoding.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub key: String,
    pub value: String,
}

/// All decoding failures of one normalization pass.
#[derive(Debug, Clone, Error)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}='{}'", e.key, e.value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Settings {
    pub half_day_value: f64,
    pub full_day_value: f64,
    pub show_jokes: bool,
    pub show_tips: bool,
    pub theme: Theme,
    pub weekly_goal: f64,
    pub monthly_goal: f64,
    pub last_reset_date: NaiveDateTime,
    pub user_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            half_day_value: 60.0,
            full_day_value: 120.0,
            show_jokes: true,
            show_tips: true,
            theme: Theme::Dark,
            weekly_goal: 2000.0,
            monthly_goal: 8000.0,
            last_reset_date: date::epoch(),
            user_name: None,
        }
    }
}

impl Settings {
    /// Strict decode of the persisted key/value map. Missing keys fall back
    /// to the fixed defaults; present-but-invalid numeric or datetime values
    /// are collected and the whole decode is rejected.
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, FieldErrors> {
        let d = Settings::default();
        let mut errors: Vec<FieldError> = Vec::new();

        let half_day_value = num_field(raw, KEY_HALF_DAY_VALUE, d.half_day_value, &mut errors);
        let full_day_value = num_field(raw, KEY_FULL_DAY_VALUE, d.full_day_value, &mut errors);
        let weekly_goal = num_field(raw, KEY_WEEKLY_GOAL, d.weekly_goal, &mut errors);
        let monthly_goal = num_field(raw, KEY_MONTHLY_GOAL, d.monthly_goal, &mut errors);

        let show_jokes = bool_field(raw, KEY_SHOW_JOKES, d.show_jokes);
        let show_tips = bool_field(raw, KEY_SHOW_TIPS, d.show_tips);

        let theme = raw
            .get(KEY_THEME)
            .map(|v| Theme::from_wire(v))
            .unwrap_or(d.theme);

        let last_reset_date = match raw.get(KEY_LAST_RESET_DATE) {
            None => d.last_reset_date,
            Some(v) => date::parse_timestamp(v).unwrap_or_else(|| {
                errors.push(FieldError {
                    key: KEY_LAST_RESET_DATE.to_string(),
                    value: v.clone(),
                });
                d.last_reset_date
            }),
        };

        let user_name = raw
            .get(KEY_USER_NAME)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        if errors.is_empty() {
            Ok(Self {
                half_day_value,
                full_day_value,
                show_jokes,
                show_tips,
                theme,
                weekly_goal,
                monthly_goal,
                last_reset_date,
                user_name,
            })
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Wire form: every field as the string the settings table stores.
    pub fn to_raw(&self) -> HashMap<String, String> {
        let mut raw = HashMap::new();
        raw.insert(KEY_HALF_DAY_VALUE.into(), self.half_day_value.to_string());
        raw.insert(KEY_FULL_DAY_VALUE.into(), self.full_day_value.to_string());
        raw.insert(KEY_SHOW_JOKES.into(), self.show_jokes.to_string());
        raw.insert(KEY_SHOW_TIPS.into(), self.show_tips.to_string());
        raw.insert(KEY_THEME.into(), self.theme.as_str().to_string());
        raw.insert(KEY_WEEKLY_GOAL.into(), self.weekly_goal.to_string());
        raw.insert(KEY_MONTHLY_GOAL.into(), self.monthly_goal.to_string());
        raw.insert(
            KEY_LAST_RESET_DATE.into(),
            self.last_reset_date.format(TIMESTAMP_FMT).to_string(),
        );
        if let Some(name) = &self.user_name {
            raw.insert(KEY_USER_NAME.into(), name.clone());
        }
        raw
    }

    /// Current rate for one event kind.
    pub fn rate_for(&self, kind: EventKind) -> f64 {
        if kind.is_full() {
            self.full_day_value
        } else {
            self.half_day_value
        }
    }
}

fn num_field(
    raw: &HashMap<String, String>,
    key: &str,
    fallback: f64,
    errors: &mut Vec<FieldError>,
) -> f64 {
    match raw.get(key) {
        None => fallback,
        Some(v) => v.trim().parse::<f64>().unwrap_or_else(|_| {
            errors.push(FieldError {
                key: key.to_string(),
                value: v.clone(),
            });
            fallback
        }),
    }
}

/// Booleans are true iff the stored string is exactly "true"; any other
/// present value is false, an absent key keeps the default.
fn bool_field(raw: &HashMap<String, String>, key: &str, fallback: bool) -> bool {
    match raw.get(key) {
        None => fallback,
        Some(v) => v == "true",
    }
}
