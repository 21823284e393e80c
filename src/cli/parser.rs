use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for luckylog
/// CLI application to journal lucky and unlucky moments with SQLite
#[derive(Parser)]
#[command(
    name = "luckylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small luck journal: log lucky and unlucky moments, track monthly stats and a calendar heatmap",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Log a new entry
    Add {
        /// Entry kind: lucky, unlucky or neutral
        kind: String,

        /// Magnitude 1-5 (neutral entries allow 0; defaults: 1, or 0 for neutral)
        #[arg(long, short)]
        score: Option<u8>,

        /// Category label (defaults to the configured uncategorized marker)
        #[arg(long, short)]
        category: Option<String>,

        /// Free-form note
        #[arg(long, short, default_value = "")]
        note: String,

        /// Entry timestamp (RFC 3339 or YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// Edit an existing entry (full-record replace)
    Edit {
        /// Id of the entry to edit
        id: i64,

        #[arg(long, help = "New kind: lucky, unlucky or neutral")]
        kind: Option<String>,

        #[arg(long, short)]
        score: Option<u8>,

        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, short)]
        note: Option<String>,
    },

    /// Delete an entry by id
    Del {
        id: i64,
    },

    /// Delete every entry. Irreversible.
    Clear {
        #[arg(long, help = "Confirm deletion of all entries")]
        yes: bool,
    },

    /// List entries, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Monthly statistics and insights
    Stats {
        #[arg(long, value_name = "YYYY-MM", help = "Month to inspect (default: current)")]
        month: Option<String>,
    },

    /// Calendar heatmap of daily net scores
    Heatmap {
        #[arg(long, value_name = "YYYY-MM", help = "Month to render (default: current)")]
        month: Option<String>,
    },

    /// Export entries to a file
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
