//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Client-side pagination over a remote collection
#[derive(Parser, Debug)]
#[command(name = "pageflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Results endpoint (overrides the config)
    #[arg(long, global = true)]
    pub fetch_url: Option<String>,

    /// Count endpoint (overrides the config)
    #[arg(long, global = true)]
    pub count_url: Option<String>,

    /// Records per page (overrides the config)
    #[arg(short, long, global = true)]
    pub limit: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load one page and print it
    Show {
        /// Page to show
        #[arg(long, conflicts_with = "offset")]
        page: Option<u64>,

        /// Record offset to show the page of
        #[arg(long)]
        offset: Option<u64>,
    },

    /// Print every page from the starting one to the last
    Walk {
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Print page/offset boundaries without fetching anything
    Bounds {
        /// Total number of records
        #[arg(long)]
        count: u64,

        /// Index of the first page
        #[arg(long, default_value = "0")]
        first_page: u64,

        /// Current page
        #[arg(long, conflicts_with = "offset")]
        page: Option<u64>,

        /// Current offset
        #[arg(long)]
        offset: Option<u64>,
    },

    /// Validate the config file
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Indented JSON
    Pretty,
}
