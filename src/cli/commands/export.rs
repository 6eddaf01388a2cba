use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Export events as CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = Store::open(&cfg.database)?;
        let path = expand_tilde(file).to_string_lossy().to_string();
        ExportLogic::export(&store, format.clone(), &path, range, *force)?;
    }
    Ok(())
}
