pub mod config;
pub mod formats;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ledger-import", version, about = "Parse bank CSV exports into ledger transactions.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a CSV export and show the transactions and errors it yields.
    Parse {
        /// Path to the CSV file
        file: PathBuf,
        /// Format key (e.g. rbc); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
        /// Account the transactions belong to
        #[arg(long = "account-id")]
        account_id: i64,
        /// Account currency (e.g. CAD); defaults to the configured currency
        #[arg(long)]
        currency: Option<String>,
        /// Print the raw parse result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported institution formats.
    Formats,
    /// Show or change saved defaults.
    Config {
        /// Default format key
        #[arg(long)]
        format: Option<String>,
        /// Default account currency
        #[arg(long)]
        currency: Option<String>,
    },
}
