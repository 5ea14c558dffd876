//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::api::Endpoint;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Client for the prime search API
#[derive(Parser, Debug)]
#[command(
    name = "prime-search",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ask a prime search server for the n-th prime or the prime count below n",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config), e.g. http://localhost:3000/api/
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Reject input that is not a number instead of sending n=NaN
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the n-th prime
    NthPrime {
        /// Value for n. Read from stdin when omitted.
        n: Option<String>,
    },

    /// Show how many primes are at most n
    PrimeCount {
        /// Value for n. Read from stdin when omitted.
        n: Option<String>,
    },

    /// Set up .prime-search directory
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

impl Commands {
    /// Endpoint and raw input for the query commands.
    pub fn query(&self) -> Option<(Endpoint, Option<&str>)> {
        match self {
            Commands::NthPrime { n } => Some((Endpoint::NthPrime, n.as_deref())),
            Commands::PrimeCount { n } => Some((Endpoint::PrimeCount, n.as_deref())),
            Commands::Init { .. } | Commands::Config => None,
        }
    }
}
