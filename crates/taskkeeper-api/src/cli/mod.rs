//! CLI command definitions for the `taskkeeper` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod tasks;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run and inspect the Taskkeeper voice skill backend.
#[derive(Parser)]
#[command(name = "taskkeeper", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP endpoint that receives skill requests.
    Serve {
        /// Port to listen on (defaults to config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind (defaults to config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Show a user's persisted task list.
    Tasks {
        /// Platform-supplied user id.
        user_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
