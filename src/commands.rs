//! CLI commands for legacylift: highlight, inspect, migrate, paths, sample.

use std::io::{IsTerminal as _, Write as _};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::highlight::{self, HighlightedLine};
use crate::language;
use crate::paths;
use crate::progress::{self, Phase};
use crate::render::{self, CodeFormat, Side};
use crate::report;
use crate::samples::{self, CodeSample};
use crate::types::{FileKind, Framework, MigrationPathId, RequestedPath, UploadedFile};
use crate::upload;

/// What `inspect --json` prints per file. Content is left out.
#[derive(Serialize)]
struct FileSummary<'a> {
    /// Detected framework.
    framework: Option<Framework>,
    /// Content fingerprint.
    id: &'a str,
    /// File or archive.
    kind: FileKind,
    /// Language tag.
    language: &'a str,
    /// Non-blank lines.
    loc: usize,
    /// File name.
    name: &'a str,
    /// Paths suggested by the detected framework.
    recommended: &'static [MigrationPathId],
    /// Size in bytes.
    size: u64,
    /// Size formatted for display.
    size_display: String,
}

/// Options for `migrate`.
pub struct MigrateOptions {
    /// File or directory to migrate; the first ingested file is used.
    pub input: PathBuf,
    /// Print the report as JSON instead of the terminal view.
    pub json: bool,
    /// Skip the progress display.
    pub no_progress: bool,
    /// Where to write the text summary, if anywhere.
    pub output: Option<PathBuf>,
    /// Migration path id as typed.
    pub path: String,
}

/// Highlight one file and print it in the requested format.
///
/// # Errors
///
/// Returns errors from config loading, file reading, or JSON serialization.
pub fn highlight(file: &Path, language: Option<&str>, format: CodeFormat) -> Result<(), Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let uploaded = upload::read_file(file, &config)?;

    let mut document = uploaded.document();
    if let Some(tag) = language {
        document.language = tag.to_string();
    }
    tracing::debug!(language = %document.language, "highlighting");

    let lines = highlight::highlight(&document.text, &document.language);
    match format {
        CodeFormat::Ansi => {
            let color = use_color(&config);
            for line in lines {
                println!("{}", render::ansi_line(&line, color));
            }
        },
        CodeFormat::Html => {
            println!("<pre class=\"code-block\">");
            for line in lines {
                println!("{}", render::html_line(&line));
            }
            println!("</pre>");
        },
        CodeFormat::Json => {
            let all: Vec<HighlightedLine> = lines.collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        },
        CodeFormat::Plain => {
            for line in lines {
                println!("{}", render::plain_line(&line));
            }
        },
    }

    return Ok(());
}

/// Ingest inputs and describe each file.
///
/// # Errors
///
/// Returns errors from config loading, ingestion, or JSON serialization.
pub fn inspect(inputs: &[PathBuf], json: bool) -> Result<(), Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let files = upload::ingest(inputs, &config)?;

    if json {
        let summaries: Vec<FileSummary<'_>> = files.iter().map(summarize).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for file in &files {
        let framework = file.framework.map_or("none detected", Framework::label);
        let kind = match file.kind {
            FileKind::File => "file",
            FileKind::Zip => "zip",
        };
        println!("{}", file.name);
        println!("  kind:      {kind}");
        println!("  size:      {}", upload::format_size(file.size));
        println!("  language:  {}", file.language);
        println!("  framework: {framework}");
        println!("  loc:       {}", file.loc);
        let recommended = recommended_for(file);
        if !recommended.is_empty() {
            let ids: Vec<&str> = recommended.iter().map(|p| return p.as_str()).collect();
            println!("  recommended: {}", ids.join(", "));
        }
    }
    println!();
    println!("{} file(s) ingested", files.len());

    return Ok(());
}

/// Run the simulated migration: progress, comparison, report.
///
/// # Errors
///
/// Returns errors from config loading, ingestion, JSON serialization,
/// or writing the summary file.
pub fn migrate(options: &MigrateOptions) -> Result<(), Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let inputs = std::slice::from_ref(&options.input);
    let Some(first) = upload::ingest(inputs, &config)?.into_iter().next() else {
        return Err(Error::NoInputFiles {
            inputs: inputs.to_vec(),
        });
    };

    let requested = RequestedPath::parse(&options.path);
    let sample = match &requested {
        RequestedPath::Known(id) => Some(samples::sample(*id)),
        RequestedPath::Unrecognized(_) => None,
    };
    let file = with_demo_content(first, sample);
    tracing::info!(file = %file.name, path = %requested.as_str(), loc = file.loc, "starting migration");

    if !options.no_progress {
        play_progress(config.progress_speed);
    }

    let report = report::synthesize(&file, &requested);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let color = use_color(&config);
        let original_language = original_panel_language(&file, sample);
        print!(
            "{}",
            render::code_panel(
                &format!("Original: {}", file.name),
                original_language,
                highlight::highlight(&file.content, original_language),
                color,
            )
        );
        if let Some(pair) = sample {
            println!();
            print!(
                "{}",
                render::code_panel(
                    "Converted",
                    pair.converted_language,
                    highlight::highlight(pair.converted, pair.converted_language),
                    color,
                )
            );
        }
        println!();
        print!("{}", render::report_view(&report, color));
    }

    if let Some(path) = &options.output {
        std::fs::write(path, render::summary_text(&report))?;
        tracing::info!(path = %path.display(), "wrote report summary");
        eprintln!("Report written to {}", path.display());
    }

    return Ok(());
}

/// List the supported migration paths.
///
/// # Errors
///
/// Returns `Error::Json` if JSON serialization fails.
pub fn paths(json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(&paths::CATALOG)?);
        return Ok(());
    }

    for info in paths::CATALOG {
        println!("{} {:<18} {}", info.icon, info.id.as_str(), info.name);
        println!("   {} → {}", info.from, info.to);
        println!("   {}", info.description);
    }
    return Ok(());
}

/// Show the canned code pair for a path.
///
/// # Errors
///
/// Returns `Error::UnknownMigrationPath` for an unrecognized id, or errors from config loading.
pub fn sample(path: &str, side: Side) -> Result<(), Error> {
    let RequestedPath::Known(id) = RequestedPath::parse(path) else {
        return Err(Error::UnknownMigrationPath {
            id: path.to_string(),
            known: MigrationPathId::ALL.iter().map(|p| return p.as_str()).collect(),
        });
    };

    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let color = use_color(&config);
    let pair = samples::sample(id);
    let info = paths::info(id);

    if matches!(side, Side::Both | Side::Original) {
        let title = format!("Original ({})", info.from);
        print!("{}", render::code_panel(&title, pair.language, highlight::highlight(pair.original, pair.language), color));
    }
    if side == Side::Both {
        println!();
    }
    if matches!(side, Side::Both | Side::Converted) {
        let title = format!("Converted ({})", info.to);
        print!(
            "{}",
            render::code_panel(&title, pair.converted_language, highlight::highlight(pair.converted, pair.converted_language), color)
        );
    }

    return Ok(());
}

/// The language tag for the original side: the file's own tag when its
/// extension is recognized, otherwise the sample's.
fn original_panel_language<'a>(file: &'a UploadedFile, sample: Option<&'static CodeSample>) -> &'a str {
    if file.language != language::UNKNOWN {
        return &file.language;
    }
    return sample.map_or(file.language.as_str(), |pair| return pair.language);
}

/// Play the progress schedule on stderr, waiting out each scaled delay.
fn play_progress(speed: f64) {
    let mut stderr = std::io::stderr();
    let mut current: Option<Phase> = None;

    for snapshot in progress::schedule() {
        let delay = progress::scaled(snapshot.delay, speed);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        if current != Some(snapshot.phase) {
            if current.is_some() {
                let _ = writeln!(stderr);
            }
            current = Some(snapshot.phase);
        }
        let _ = write!(stderr, "\r{:<20} {}", snapshot.phase.label(), progress::bar(snapshot.percent));
        let _ = stderr.flush();
    }
    let _ = writeln!(stderr);
}

/// Paths suggested for a file's detected framework.
fn recommended_for(file: &UploadedFile) -> &'static [MigrationPathId] {
    return match file.framework {
        Some(framework) => paths::recommended(framework),
        None => &[],
    };
}

/// JSON view of an ingested file.
fn summarize(file: &UploadedFile) -> FileSummary<'_> {
    return FileSummary {
        framework: file.framework,
        id: &file.id,
        kind: file.kind,
        language: &file.language,
        loc: file.loc,
        name: &file.name,
        recommended: recommended_for(file),
        size: file.size,
        size_display: upload::format_size(file.size),
    };
}

/// Colors only when enabled in config and stdout is a terminal.
fn use_color(config: &Config) -> bool {
    return config.color && std::io::stdout().is_terminal();
}

/// The content shown on the original side: the upload trimmed of surrounding
/// whitespace, or the path's canned original when nothing is left. Line count
/// still describes the upload.
fn with_demo_content(mut file: UploadedFile, sample: Option<&'static CodeSample>) -> UploadedFile {
    let trimmed = file.content.trim();
    if !trimmed.is_empty() {
        file.content = trimmed.to_string();
        return file;
    }
    if let Some(pair) = sample {
        tracing::debug!(file = %file.name, "empty upload, using demo content");
        file.content = pair.original.to_string();
    }
    return file;
}
