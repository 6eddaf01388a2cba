use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll::parse_payroll_csv;
use crate::db::queries::{load_employees, load_settings, replace_employees};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

/// Password-gated payroll view. A wrong password is a plain rejection:
/// no lockout, no throttling.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin {
        password,
        import,
        list,
    } = cmd
    {
        if password != &cfg.admin_password {
            return Err(AppError::AdminAuth);
        }

        let mut store = Store::open(&cfg.database)?;

        if let Some(file) = import {
            let text = fs::read_to_string(expand_tilde(file))?;
            let settings = load_settings(&store)?;
            let employees = parse_payroll_csv(&text, &settings);

            // Each import replaces the stored collection wholesale.
            replace_employees(&mut store.conn, &employees)?;
            success(format!("{} employees processed", employees.len()));
        }

        if *list || import.is_none() {
            print_employees(&store)?;
        }
    }
    Ok(())
}

fn print_employees(store: &Store) -> AppResult<()> {
    let employees = load_employees(store)?;

    if employees.is_empty() {
        println!("No employees imported.");
        return Ok(());
    }

    let mut grand_total = 0.0;
    println!("PAYROLL:");
    for emp in &employees {
        grand_total += emp.total_due;
        println!(
            "- {} | {} shift(s) | R$ {:.2}",
            emp.name,
            emp.events.len(),
            emp.total_due
        );
        for ev in &emp.events {
            println!(
                "    {} | {:<8} | R$ {:.2}",
                ev.timestamp.format("%d/%m %H:%M"),
                ev.kind.payroll_label_pt(),
                ev.amount
            );
        }
    }
    println!("\nTotal due: R$ {grand_total:.2}");
    Ok(())
}
