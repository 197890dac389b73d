//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

use duns_core::dun::DunFilter;

use crate::config::Config;

/// Keep track of the sites you plan to visit, online or offline.
#[derive(Debug, Parser)]
#[command(name = "duns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the local SQLite mirror.
    #[arg(long, env = "DUNS_SQLITE_PATH")]
    pub db: Option<String>,

    /// Start with the remote unreachable.
    #[arg(long)]
    pub offline: bool,

    /// Simulated remote latency in milliseconds.
    #[arg(long, env = "DUNS_REMOTE_LATENCY_MS")]
    pub latency_ms: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(db) = &self.db {
            config.sqlite_path = db.clone();
        }
        if let Some(latency_ms) = self.latency_ms {
            config.remote_latency_ms = latency_ms;
        }
        if self.offline {
            config.offline = true;
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI filter for listings (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl From<Filter> for DunFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => DunFilter::All,
            Filter::Active => DunFilter::Active,
            Filter::Completed => DunFilter::Completed,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List duns.
    List {
        /// Which duns to show.
        #[arg(long, value_enum, default_value = "all")]
        filter: Filter,
        /// Bypass the cache and fetch from the remote.
        #[arg(long)]
        refresh: bool,
    },
    /// Get dun by ID.
    Get {
        /// Dun ID.
        id: String,
    },
    /// Add a new dun.
    Add {
        /// Dun title.
        #[arg(long, default_value = "")]
        title: String,
        /// Dun description.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit the text of a dun.
    Edit {
        /// Dun ID.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a dun as completed.
    Complete {
        /// Dun ID.
        id: String,
    },
    /// Mark a dun as active again.
    Activate {
        /// Dun ID.
        id: String,
    },
    /// Delete every completed dun.
    ClearCompleted,
    /// Delete dun by ID.
    Delete {
        /// Dun ID.
        id: String,
    },
    /// Delete every dun.
    DeleteAll,
    /// Show the share of active and completed duns.
    Stats {
        /// Bypass the cache and fetch from the remote.
        #[arg(long)]
        refresh: bool,
    },
}
