//! CLI argument definitions for the `sr` command.
//!
//! Defines all subcommands, their arguments, and long help text
//! using the `clap` derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "sr", version, about = "Similarity report tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the report subcommands.
#[derive(Args)]
pub struct CommonArgs {
    /// Results CSV from the comparison stage (default: similarity_results.csv)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available report subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Per-file match lists filtered by a similarity threshold
    #[command(long_about = cli_help::MATCHES)]
    Matches {
        #[command(flatten)]
        common: CommonArgs,

        /// Minimum similarity % for a pair to be shown (default: 80)
        #[arg(long, default_value = "80", value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,

        /// Show only this file's matches
        #[arg(long)]
        file: Option<String>,

        /// Write the filtered pairs to a CSV file
        #[arg(long, value_name = "CSV")]
        export: Option<PathBuf>,
    },

    /// Pair counts across the five similarity ranges
    #[command(long_about = cli_help::DIST)]
    Dist {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Headline statistics (files, pairs, highest match, high pairs)
    Summary {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Most similar pairs across the whole table
    Top {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of pairs to show (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Each file's single highest match
    #[command(long_about = cli_help::BEST)]
    Best {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a self-contained HTML report with match badges and a pie chart
    #[command(long_about = cli_help::HTML)]
    Html {
        /// Results CSV from the comparison stage (default: similarity_results.csv)
        path: Option<PathBuf>,

        /// Minimum similarity % for a pair to be shown (default: 80)
        #[arg(long, default_value = "80", value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,

        /// Output file (default: similarity_report.html)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
