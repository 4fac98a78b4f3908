use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::Error;
use crate::language::ACCEPTED_EXTENSIONS;

/// Bold on.
const BOLD: &str = "\x1b[1m";
/// All attributes off.
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is
/// one, how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::FileNotFound { path } => render_file_not_found(path),
        Error::FileTooLarge { file, size_bytes, max_bytes } => render_file_too_large(file, *size_bytes, *max_bytes),
        Error::InvalidConfig { reason } => render_invalid_config(reason),
        Error::NoInputFiles { inputs } => render_no_input_files(inputs),
        Error::UnknownMigrationPath { id, known } => render_unknown_migration_path(id, known),
        Error::Io(_) | Error::Json(_) | Error::TomlDe(_) => render_generic(e),
    }
}

/// Suggest the known id sharing the typed id's leading word, e.g. `jquery` → `jquery-react`.
pub(crate) fn find_closest_path<'a>(id: &str, known: &[&'a str]) -> Option<&'a str> {
    let lowered = id.to_lowercase();
    let head = lowered.split(['-', '_', ' ']).next().unwrap_or_default();
    if head.is_empty() {
        return None;
    }
    known.iter().find(|k| k.starts_with(head)).copied()
}

fn render_generic(e: &Error) -> String {
    match e {
        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::Json(e) => format!("\
# Error: JSON Output

{e}
"),
        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

`{CONFIG_FILE}` could not be parsed:

{e}
"),
        // Already handled in render_error, but need exhaustive match.
        _ => format!("\
# Error

{e}
"),
    }
}

fn render_file_not_found(path: &Path) -> String {
    format!("\
# Error: File Not Found

`{}` does not exist.
", path.display())
}

fn render_file_too_large(file: &Path, size_bytes: u64, max_bytes: u64) -> String {
    format!("\
# Error: File Too Large

`{}` is {size_bytes} bytes (max {max_bytes}).

## Fix

Raise the limit in `{CONFIG_FILE}`:

    max_file_bytes = {size_bytes}
", file.display())
}

fn render_invalid_config(reason: &str) -> String {
    format!("\
# Error: Invalid Config

{reason}

## Fix

Correct the value in `{CONFIG_FILE}`.
")
}

fn render_no_input_files(inputs: &[PathBuf]) -> String {
    let mut out = String::from("\
# Error: No Input Files

Nothing to ingest in:

");
    for input in inputs {
        let _ = writeln!(out, "- `{}`", input.display());
    }
    let extensions = ACCEPTED_EXTENSIONS.iter().map(|e| format!(".{e}")).collect::<Vec<_>>().join(", ");
    let _ = write!(out, "\n## Accepted extensions\n\n{extensions}\n");
    out
}

fn render_unknown_migration_path(id: &str, known: &[&str]) -> String {
    let mut out = format!("\
# Error: Unknown Migration Path

`{id}` is not a supported migration path.
");

    if let Some(suggestion) = find_closest_path(id, known) {
        let _ = write!(out, "\n## Did you mean `{suggestion}`?\n");
    }

    out.push_str("\n## Available paths\n\n");
    for k in known {
        let _ = writeln!(out, "- `{k}`");
    }
    out.push_str("\
\n## Fix

    legacylift paths
");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [&str; 3] = ["jquery-react", "jquery-vue", "es5-es6"];

    #[test]
    fn suggests_path_by_leading_word() {
        assert_eq!(find_closest_path("jquery", &KNOWN), Some("jquery-react"));
        assert_eq!(find_closest_path("ES5-to-es2020", &KNOWN), Some("es5-es6"));
        assert_eq!(find_closest_path("perl-raku", &KNOWN), None);
        assert_eq!(find_closest_path("", &KNOWN), None);
    }

    #[test]
    fn unknown_path_lists_alternatives() {
        let md = render_error(&Error::UnknownMigrationPath {
            id: "jquery".to_string(),
            known: KNOWN.to_vec(),
        });
        assert!(md.starts_with("# Error: Unknown Migration Path"));
        assert!(md.contains("## Did you mean `jquery-react`?"));
        assert!(md.contains("- `es5-es6`"));
    }

    #[test]
    fn too_large_suggests_config_fix() {
        let md = render_error(&Error::FileTooLarge {
            file: PathBuf::from("big.js"),
            max_bytes: 10,
            size_bytes: 64,
        });
        assert!(md.contains("`big.js` is 64 bytes (max 10)."));
        assert!(md.contains("max_file_bytes = 64"));
    }
}
