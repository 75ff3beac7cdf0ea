//! md-to-project
//!
//! Prints a Markdown file as a JSON string, ready to paste into a project's
//! `longDescription` in `myData.json`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folio::extract;

#[derive(Parser, Debug)]
#[command(
    name = "md-to-project",
    version,
    about = "Convert a Markdown file into a JSON string for longDescription"
)]
struct Cli {
    /// Markdown file to convert
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match extract::markdown_file_to_json(&cli.path) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
