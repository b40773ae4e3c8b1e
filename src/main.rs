mod best;
mod cli;
mod cli_help;
mod dist;
mod html;
mod matches;
mod ranges;
mod records;
mod report_helpers;
mod severity;
mod summary;
mod top;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};

/// File name the comparison stage writes its results to.
const DEFAULT_RESULTS: &str = "similarity_results.csv";

fn input_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS))
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Matches {
            common,
            threshold,
            file,
            export,
        } => matches::run(
            &input_path(common.path),
            threshold,
            file.as_deref(),
            export.as_deref(),
            common.json,
        ),
        Commands::Dist { common } => dist::run(&input_path(common.path), common.json),
        Commands::Summary { common } => summary::run(&input_path(common.path), common.json),
        Commands::Top { common, count } => top::run(&input_path(common.path), count, common.json),
        Commands::Best { common } => best::run(&input_path(common.path), common.json),
        Commands::Html {
            path,
            threshold,
            out,
        } => html::run(
            &input_path(path),
            threshold,
            &out.unwrap_or_else(|| PathBuf::from("similarity_report.html")),
        ),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sr", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
