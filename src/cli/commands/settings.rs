use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{load_raw_settings, save_setting};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{SETTING_KEYS, Settings};
use crate::ui::messages::success;

/// Show or change application settings.
///
/// Changes are validated through the normalizer before anything is written:
/// an invalid value is rejected as a whole and the store stays untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { print, set } = cmd {
        let store = Store::open(&cfg.database)?;

        if !set.is_empty() {
            let mut raw = load_raw_settings(&store)?;
            let mut changed: Vec<(String, String)> = Vec::new();

            for assignment in set {
                let (key, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| AppError::InvalidSetting(assignment.clone()))?;
                let key = key.trim();
                if !SETTING_KEYS.contains(&key) {
                    return Err(AppError::InvalidSetting(format!("unknown key '{key}'")));
                }
                raw.insert(key.to_string(), value.trim().to_string());
                changed.push((key.to_string(), value.trim().to_string()));
            }

            // Strict decode first; only persist once the whole map is valid.
            Settings::from_raw(&raw)?;

            for (key, value) in &changed {
                save_setting(&store.conn, key, value)?;
            }
            success(format!("Updated {} setting(s)", changed.len()));
        }

        if *print || set.is_empty() {
            let raw = load_raw_settings(&store)?;
            let s = Settings::from_raw(&raw)?;

            println!("half_day_value:  {}", s.half_day_value);
            println!("full_day_value:  {}", s.full_day_value);
            println!("weekly_goal:     {}", s.weekly_goal);
            println!("monthly_goal:    {}", s.monthly_goal);
            println!("show_jokes:      {}", s.show_jokes);
            println!("show_tips:       {}", s.show_tips);
            println!("theme:           {}", s.theme.as_str());
            println!("last_reset_date: {}", s.last_reset_date.format("%Y-%m-%dT%H:%M:%S"));
            println!(
                "user_name:       {}",
                s.user_name.as_deref().unwrap_or("(not set)")
            );
        }
    }
    Ok(())
}
