use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for contadia:
/// log half/full work days and track earnings with SQLite.
#[derive(Parser)]
#[command(
    name = "contadia",
    version = env!("CARGO_PKG_VERSION"),
    about = "A day-counter CLI: log half/full work days, track earnings against goals, import/export CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log a work day
    Add {
        /// Event kind: half (meio) or full (inteiro)
        kind: String,

        /// Backdate the event (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of day (HH:MM); defaults to now (or 00:00 with --date)
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Show balance, day counts and goal progress
    Status,

    /// List logged events (history, including events before the last reset)
    List {
        /// Filter by period: YYYY, YYYY-MM or YYYY-MM-DD (default: everything)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Delete one event by id
    Del {
        /// Event id (shown by `list`)
        id: i64,
    },

    /// Show or change application settings
    Settings {
        #[arg(long = "print", help = "Print the normalized settings")]
        print: bool,

        /// Change a setting (repeatable), e.g. --set half_day_value=75
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Import a personal CSV export
    Import {
        /// CSV file to import
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export events as CSV or JSON
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Range: all (default), YYYY-MM (one month), YYYY-MM-DD (one day)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Zero the balance: start a new active window now (history is kept)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Delete ALL events and payroll data and restore default settings
    FactoryReset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Password-gated payroll view: import and list employees
    Admin {
        /// Admin password (see the config file)
        #[arg(long)]
        password: String,

        /// Import a payroll CSV, replacing the stored employee collection
        #[arg(long = "import", value_name = "FILE")]
        import: Option<String>,

        /// List employees with totals
        #[arg(long)]
        list: bool,
    },
}
