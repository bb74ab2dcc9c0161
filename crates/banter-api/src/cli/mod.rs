//! CLI command definitions and dispatch for the `banter` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod group;
pub mod personas;
pub mod simulate;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run a group chat of persona-driven accounts.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
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

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the character archetypes.
    Personas,

    /// Assign personas to a set of accounts and show the result.
    Assign {
        /// Account identifiers, in order.
        #[arg(required = true, num_args = 2..)]
        accounts: Vec<String>,
    },

    /// Guess which kind of character wrote a message.
    Classify {
        /// Message text.
        text: String,
    },

    /// Generate one in-character reply without sending it.
    Reply {
        /// Accounts in the group (comma-separated).
        #[arg(long, value_delimiter = ',', required = true)]
        accounts: Vec<String>,

        /// Account that replies.
        #[arg(long)]
        account: String,

        /// Skip the generation service and use fallback phrases only.
        #[arg(long)]
        offline: bool,

        /// Message to reply to.
        message: String,
    },

    /// Run a group conversation over the in-process channel.
    Simulate {
        /// Accounts in the group (comma-separated).
        #[arg(long, value_delimiter = ',', required = true)]
        accounts: Vec<String>,

        /// Stop after this many replies.
        #[arg(long, default_value = "10")]
        turns: usize,

        /// Skip the generation service and use fallback phrases only.
        #[arg(long)]
        offline: bool,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show configuration and chat log status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command asked for the offline generator.
    pub fn offline(&self) -> bool {
        match self {
            Commands::Reply { offline, .. } | Commands::Simulate { offline, .. } => *offline,
            _ => false,
        }
    }
}
