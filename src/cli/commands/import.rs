use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::parse_personal_csv;
use crate::db::queries::insert_events_front;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;

/// Import a personal CSV export. Parsed rows are prepended, in file order,
/// ahead of the existing event list; zero valid rows change nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let text = fs::read_to_string(&path)?;

        let events = parse_personal_csv(&text);

        if events.is_empty() {
            info("No valid rows found; nothing imported.");
            return Ok(());
        }

        let mut store = Store::open(&cfg.database)?;
        insert_events_front(&mut store.conn, &events)?;

        success(format!("{} records imported", events.len()));
    }
    Ok(())
}
