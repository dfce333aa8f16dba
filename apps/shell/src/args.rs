//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "countries")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect country codes, IOC codes and flag URLs")]
pub(crate) struct Cli {
    /// Config file (TOML, YAML or JSON); `countries.*` in the working directory otherwise
    #[arg(long, short, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show name, IOC code and flag URL of a country code
    Show {
        /// Two-letter code, any case
        code: String,
    },
    /// Resolve an IOC code to its country
    Ioc {
        /// Three-letter IOC code, any case
        code: String,
    },
    /// List the form choices, sorted by name
    Choices {
        /// Lead with the empty choice
        #[arg(long)]
        blank: bool,
        /// Print a JSON array instead of lines
        #[arg(long)]
        json: bool,
    },
}
