//! Aggregation engine: pure function of (event list, settings, now).
//!
//! The active set is every event at or after the last reset. Period sums are
//! intersected with the active set, not the raw list, so a reset suppresses
//! earlier earnings even inside the current week/month/year.

use crate::models::event::WorkEvent;
use crate::models::settings::Settings;
use crate::utils::date::{month_start, week_start, year_start};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: f64,
    pub days: usize,
    pub full_days: usize,
    pub half_days: usize,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
    pub weekly_progress: f64,
    pub monthly_progress: f64,
}

pub fn compute(events: &[WorkEvent], settings: &Settings, now: NaiveDateTime) -> Stats {
    let active: Vec<&WorkEvent> = events
        .iter()
        .filter(|e| e.timestamp >= settings.last_reset_date)
        .collect();

    let earned = |start: NaiveDateTime| -> f64 {
        active
            .iter()
            .filter(|e| e.timestamp >= start)
            .map(|e| e.amount)
            .sum()
    };

    let weekly = earned(week_start(now));
    let monthly = earned(month_start(now));
    let yearly = earned(year_start(now));

    Stats {
        total: active.iter().map(|e| e.amount).sum(),
        days: active.len(),
        full_days: active.iter().filter(|e| e.kind.is_full()).count(),
        half_days: active.iter().filter(|e| !e.kind.is_full()).count(),
        weekly,
        monthly,
        yearly,
        weekly_progress: progress(weekly, settings.weekly_goal),
        monthly_progress: progress(monthly, settings.monthly_goal),
    }
}

/// Percentage toward a goal, capped at 100. A zero goal is left to float
/// division semantics.
fn progress(earned: f64, goal: f64) -> f64 {
    (earned / goal * 100.0).min(100.0)
}
