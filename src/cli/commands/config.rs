use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Show the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        println!("Config file: {:?}\n", Config::config_file());
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {e}")))?;
        println!("{yaml}");
    }
    Ok(())
}
