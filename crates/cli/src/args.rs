//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the document source from `--source` or `APPCFG_SOURCE`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load documents (see `commands` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appcfg")]
#[command(about = "Inspect and normalize application configuration documents", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appcfg -s config.json show\n  appcfg -s https://cfg.example.com/app.json database main\n  APPCFG_SOURCE=config.json appcfg flag MAX_ROWS\n  appcfg -s config.json save\n"
)]
pub struct Cli {
    /// Local path or http(s):// URL of the configuration document
    #[arg(short, long, global = true, env = "APPCFG_SOURCE")]
    pub source: Option<String>,

    /// Output file path (saves output to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole document as JSON
    Show {
        /// Print placeholders as written in the source instead of resolved values
        #[arg(long)]
        raw: bool,
    },

    /// Print one database record
    Database {
        /// Database ID (case-insensitive)
        id: String,
    },

    /// Print one API endpoint record
    Endpoint {
        /// Endpoint ID; omit for the document's default endpoint
        id: Option<String>,
    },

    /// Print one notification record
    Notification {
        /// Notification ID; omit for the document's default notification
        id: Option<String>,
    },

    /// Print the value of a document-level flag
    Flag {
        /// Flag key; case, underscores and dashes are ignored
        key: String,
    },

    /// Print a top-level field as JSON
    Field {
        /// Field name, e.g. ApplicationName or application_name
        name: String,
    },

    /// Load the document and write it back with defaults filled in
    Save,
}
