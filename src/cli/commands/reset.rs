use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{factory_reset, reset_balance};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use std::io::{self, Write};

/// Balance reset and factory reset. Both prompt unless --yes is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Reset { yes } => {
            if !yes
                && !confirm("Zero the balance? History in the calendar is kept. [y/N]: ")?
            {
                info("Reset cancelled.");
                return Ok(());
            }

            let store = Store::open(&cfg.database)?;
            reset_balance(&store.conn, date::now())?;
            success("Balance zeroed. New active window starts now; history was kept.");
        }
        Commands::FactoryReset { yes } => {
            if !yes
                && !confirm(
                    "Delete ALL events and payroll data and restore default settings? [y/N]: ",
                )?
            {
                info("Factory reset cancelled.");
                return Ok(());
            }

            let mut store = Store::open(&cfg.database)?;
            factory_reset(&mut store.conn)?;
            success("Factory reset completed: all data deleted, defaults restored.");
        }
        _ => {}
    }
    Ok(())
}

fn confirm(question: &str) -> AppResult<bool> {
    print!("{question}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
