/// Crate-level error types for legacylift diagnostics.
use std::path::PathBuf;

/// Errors from the ambient layers (ingestion, config, output). The highlighter
/// and the report synthesizer are total and never produce one of these.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named input does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// An input file exceeds the configured size limit.
    #[error("file too large ({size_bytes} bytes, max {max_bytes}): {}", file.display())]
    FileTooLarge {
        /// File that exceeded the size limit.
        file: PathBuf,
        /// Maximum allowed file size in bytes.
        max_bytes: u64,
        /// Actual file size in bytes.
        size_bytes: u64,
    },

    /// `.legacylift.toml` parsed but holds a value outside its valid range.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Which setting is wrong and why.
        reason: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// Inputs were given but none of them produced an ingestible file.
    #[error("no input files found in: {}", inputs.iter().map(|p| return p.display().to_string()).collect::<Vec<_>>().join(", "))]
    NoInputFiles {
        /// The inputs as given on the command line.
        inputs: Vec<PathBuf>,
    },

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// A command that needs a concrete migration path got an unrecognized id.
    #[error("unknown migration path: `{id}`")]
    UnknownMigrationPath {
        /// The id as typed.
        id: String,
        /// Every recognized id, for the diagnostic.
        known: Vec<&'static str>,
    },
}
