//! File ingestion: read inputs from disk and describe them as uploaded files.

use std::path::{Path, PathBuf};

use sha2::{Digest as _, Sha256};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::language;
use crate::types::{FileKind, Framework, UploadedFile};

/// Bytes in a kilobyte as the size formatter counts them.
const KIB: u64 = 1024;

/// Bytes in a megabyte as the size formatter counts them.
const MIB: u64 = 1024 * 1024;

/// Marker substrings checked in order; the first hit names the framework.
const FRAMEWORK_MARKERS: [(&[&str], Framework); 6] = [
    (&["$(", "jQuery"], Framework::JQuery),
    (&["angular.module"], Framework::AngularJs),
    (&["@angular/core"], Framework::Angular),
    (&["React.Component", "extends Component"], Framework::ReactClass),
    (&["useState", "useEffect"], Framework::ReactHooks),
    (&["createApp", "defineComponent"], Framework::Vue3),
];

/// Non-blank lines in `content`.
pub fn count_loc(content: &str) -> usize {
    return content.split('\n').filter(|line| return !line.trim().is_empty()).count();
}

/// Recognize the framework a file is written against by marker substrings.
pub fn detect_framework(content: &str) -> Option<Framework> {
    return FRAMEWORK_MARKERS
        .iter()
        .find(|(markers, _)| return markers.iter().any(|m| return content.contains(m)))
        .map(|&(_, framework)| return framework);
}

/// Human-readable size: bytes below 1 KB, otherwise KB or MB with one decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{bytes} B");
    }
    let (unit, label) = if bytes < MIB { (KIB, "KB") } else { (MIB, "MB") };
    // Tenths, rounded half up.
    let tenths = bytes.saturating_mul(10).saturating_add(unit / 2) / unit;
    return format!("{}.{} {label}", tenths / 10, tenths % 10);
}

/// Ingest every input. Files are taken as given; directories are walked for
/// accepted extensions that pass the config's include/exclude filters.
/// Results keep input order, with each directory's files sorted by path.
///
/// # Errors
///
/// Returns `Error::FileNotFound` for a missing input, `Error::FileTooLarge`
/// for a file over the size limit, `Error::Io` for read failures, or
/// `Error::NoInputFiles` if nothing was ingested.
pub fn ingest(inputs: &[PathBuf], config: &Config) -> Result<Vec<UploadedFile>, Error> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            ingest_directory(input, config, &mut files)?;
        } else {
            files.push(read_file(input, config)?);
        }
    }

    if files.is_empty() {
        return Err(Error::NoInputFiles {
            inputs: inputs.to_vec(),
        });
    }

    tracing::debug!(count = files.len(), "ingested files");
    return Ok(files);
}

/// Read a single file and describe it.
///
/// # Errors
///
/// Returns `Error::FileNotFound` if the path does not exist,
/// `Error::FileTooLarge` if it exceeds `config.max_file_bytes`,
/// or `Error::Io` for other read failures.
pub fn read_file(path: &Path, config: &Config) -> Result<UploadedFile, Error> {
    let bytes = match std::fs::read(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound { path: path.to_path_buf() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(b) => b,
    };

    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > config.max_file_bytes {
        return Err(Error::FileTooLarge {
            file: path.to_path_buf(),
            max_bytes: config.max_file_bytes,
            size_bytes: size,
        });
    }

    let name = path
        .file_name()
        .map_or_else(|| return path.display().to_string(), |n| return n.to_string_lossy().into_owned());
    let kind = if name.to_lowercase().ends_with(".zip") { FileKind::Zip } else { FileKind::File };
    let content = String::from_utf8_lossy(&bytes).into_owned();

    let file = UploadedFile {
        framework: detect_framework(&content),
        id: fingerprint(&bytes),
        kind,
        language: language::language_for_path(path).to_string(),
        loc: count_loc(&content),
        name,
        size,
        content,
    };
    tracing::debug!(file = %path.display(), language = %file.language, loc = file.loc, "read input");
    return Ok(file);
}

/// First 16 hex chars of the SHA-256 of `bytes`.
fn fingerprint(bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    return digest.chars().take(16).collect();
}

/// Walk a directory and ingest every accepted file the config lets through.
///
/// # Errors
///
/// Returns errors from reading any selected file.
fn ingest_directory(root: &Path, config: &Config, files: &mut Vec<UploadedFile>) -> Result<(), Error> {
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| return !e.file_type().is_dir() && language::is_accepted(e.path()))
    {
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
        if !config.should_scan(&relative) {
            tracing::debug!(file = %relative, "skipped by config filter");
            continue;
        }
        files.push(read_file(path, config)?);
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loc_ignores_blank_and_whitespace_lines() {
        assert_eq!(count_loc("a\n\n   \nb\n\t\nc"), 3);
        assert_eq!(count_loc(""), 0);
    }

    #[test]
    fn framework_markers_checked_in_order() {
        assert_eq!(detect_framework("$('#x').click()"), Some(Framework::JQuery));
        assert_eq!(detect_framework("angular.module('app', [])"), Some(Framework::AngularJs));
        assert_eq!(detect_framework("import { Component } from '@angular/core';"), Some(Framework::Angular));
        assert_eq!(detect_framework("class A extends Component {}"), Some(Framework::ReactClass));
        assert_eq!(detect_framework("const [a, b] = useState(0);"), Some(Framework::ReactHooks));
        assert_eq!(detect_framework("$(function () { useState(0); })"), Some(Framework::JQuery));
        assert_eq!(detect_framework("createApp(App).mount('#app')"), Some(Framework::Vue3));
        assert_eq!(detect_framework("defineComponent({})"), Some(Framework::Vue3));
        assert_eq!(detect_framework("print 'hi'"), None);
    }

    #[test]
    fn sizes_use_one_decimal_above_a_kilobyte() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_575), "1024.0 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(5 * 1_048_576 + 104_858), "5.1 MB");
    }

    #[test]
    fn reads_file_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.py");
        std::fs::write(&path, "print 'hi'\n\nx = 1\n").unwrap();

        let file = read_file(&path, &Config::default()).unwrap();
        assert_eq!(file.name, "legacy.py");
        assert_eq!(file.language, "python");
        assert_eq!(file.kind, FileKind::File);
        assert_eq!(file.loc, 2);
        assert_eq!(file.size, 18);
        assert_eq!(file.id.len(), 16);
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.js");
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let config = Config {
            max_file_bytes: 10,
            ..Config::default()
        };

        let err = read_file(&path, &config).unwrap_err();
        assert!(matches!(err, Error::FileTooLarge { size_bytes: 64, max_bytes: 10, .. }));
    }

    #[test]
    fn missing_file_is_reported_by_path() {
        let err = read_file(Path::new("no/such/file.js"), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn directory_walk_keeps_accepted_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.js"), "var a = 1;").unwrap();
        std::fs::write(dir.path().join("a.py"), "print 1").unwrap();
        std::fs::write(dir.path().join("notes.md"), "# notes").unwrap();

        let files = ingest(&[dir.path().to_path_buf()], &Config::default()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.py", "b.js"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ingest(&[dir.path().to_path_buf()], &Config::default()).unwrap_err();
        assert!(matches!(err, Error::NoInputFiles { .. }));
    }
}
