use crate::config::Config;
use crate::core::stats;
use crate::db::queries::{load_events, load_settings};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::date;

/// Dashboard: balance since the last reset, day counts and goal progress.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(&cfg.database)?;
    let settings = load_settings(&store)?;
    let events = load_events(&store)?;

    let s = stats::compute(&events, &settings, date::now());

    println!("=== Balance since last reset ===");
    println!("Total:      R$ {:.2}", s.total);
    println!(
        "Entries:    {} (full days: {}, half days: {})",
        s.days, s.full_days, s.half_days
    );
    println!();
    println!(
        "This week:  R$ {:.2} / {:.0}  ({:.0}%)",
        s.weekly, settings.weekly_goal, s.weekly_progress
    );
    println!(
        "This month: R$ {:.2} / {:.0}  ({:.0}%)",
        s.monthly, settings.monthly_goal, s.monthly_progress
    );
    println!("This year:  R$ {:.2}", s.yearly);

    Ok(())
}
