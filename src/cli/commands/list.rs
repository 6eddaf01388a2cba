use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{load_events, load_settings};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::event::WorkEvent;

/// Event history. A reset never hides history: events before the last reset
/// are listed too, flagged as outside the active window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store = Store::open(&cfg.database)?;
        let settings = load_settings(&store)?;
        let events = load_events(&store)?;

        let prefix = resolve_period(period)?;
        let filtered: Vec<&WorkEvent> = events
            .iter()
            .filter(|e| {
                prefix
                    .as_deref()
                    .is_none_or(|p| e.date().format("%Y-%m-%d").to_string().starts_with(p))
            })
            .collect();

        if filtered.is_empty() {
            println!("No events found.");
            return Ok(());
        }

        println!("EVENTS:");
        for ev in filtered {
            let marker = if ev.timestamp < settings.last_reset_date {
                "  (before last reset)"
            } else {
                ""
            };
            println!(
                "- {:>4} | {} | {:<11} | R$ {:.2}{}",
                ev.id,
                ev.timestamp.format("%Y-%m-%d %H:%M"),
                ev.kind.label_pt(),
                ev.amount,
                marker
            );
        }
    }
    Ok(())
}

/// Validate --period and turn it into a date-string prefix filter.
fn resolve_period(period: &Option<String>) -> AppResult<Option<String>> {
    let Some(p) = period else { return Ok(None) };
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let valid = match p.len() {
        4 => p.parse::<i32>().is_ok(),
        7 | 10 => {
            let full = if p.len() == 7 {
                format!("{p}-01")
            } else {
                p.clone()
            };
            crate::utils::date::parse_date(&full).is_some()
        }
        _ => false,
    };

    if valid {
        Ok(Some(p.clone()))
    } else {
        Err(AppError::InvalidDate(p.clone()))
    }
}
