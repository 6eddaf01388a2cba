use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::delete_event;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete one event by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = Store::open(&cfg.database)?;
        delete_event(&store.conn, *id)?;
        success(format!("Deleted event {id}"));
    }
    Ok(())
}
