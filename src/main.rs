//! legacylift: inspect legacy source files, preview migration paths, and
//! produce simulated migration reports.

mod commands;
mod config;
mod diagnostics;
mod error;
mod findings;
mod highlight;
mod language;
mod logging;
mod paths;
mod progress;
mod render;
mod report;
mod samples;
mod types;
mod upload;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::MigrateOptions;
use crate::render::{CodeFormat, Side};

/// Command-line interface.
#[derive(Parser)]
#[command(name = "legacylift", version, about = "Preview legacy code migrations")]
struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
    /// Log debug output to stderr (overridden by `LEGACYLIFT_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print a source file with syntax highlighting
    Highlight {
        /// File to highlight.
        file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = CodeFormat::Ansi)]
        format: CodeFormat,
        /// Language tag overriding the one detected from the extension.
        #[arg(long)]
        language: Option<String>,
    },
    /// Ingest files or directories and describe each one
    Inspect {
        /// Files or directories to ingest.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run a simulated migration and print the report
    Migrate {
        /// File or directory to migrate.
        input: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Skip the progress display.
        #[arg(long)]
        no_progress: bool,
        /// Write a plain-text summary to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Migration path id, e.g. `jquery-react`.
        #[arg(short, long)]
        path: String,
    },
    /// List supported migration paths
    Paths {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show the example code pair for a migration path
    Sample {
        /// Migration path id.
        path: String,
        /// Which half of the pair to show.
        #[arg(long, value_enum, default_value_t = Side::Both)]
        side: Side,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Highlight { file, format, language } => commands::highlight(&file, language.as_deref(), format),
        Commands::Inspect { inputs, json } => commands::inspect(&inputs, json),
        Commands::Migrate { input, json, no_progress, output, path } => commands::migrate(&MigrateOptions {
            input,
            json,
            no_progress,
            output,
            path,
        }),
        Commands::Paths { json } => commands::paths(json),
        Commands::Sample { path, side } => commands::sample(&path, side),
    };

    return match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}
