use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{insert_event_front, load_settings};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::event::WorkEvent;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::NaiveTime;

/// Log a half/full day. The amount snapshots the current rate for the kind
/// and is never recomputed when rates change later.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { kind, date, time } = cmd {
        let kind =
            EventKind::from_cli(kind).ok_or_else(|| AppError::InvalidKind(kind.to_string()))?;

        let timestamp = match (date, time) {
            (None, None) => date::now(),
            (Some(d), t) => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                let t = match t {
                    Some(t) => {
                        date::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?
                    }
                    None => NaiveTime::MIN,
                };
                d.and_time(t)
            }
            (None, Some(t)) => {
                let t = date::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
                date::now().date().and_time(t)
            }
        };

        let store = Store::open(&cfg.database)?;
        let settings = load_settings(&store)?;
        let ev = WorkEvent::new(timestamp, kind, settings.rate_for(kind));
        let id = insert_event_front(&store.conn, &ev)?;

        success(format!(
            "Logged {} on {}: R$ {:.2} (id {})",
            kind.label_pt(),
            ev.timestamp.format("%Y-%m-%d %H:%M"),
            ev.amount,
            id
        ));
    }
    Ok(())
}
