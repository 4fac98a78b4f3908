use std::path::Path;

use crate::error::Error;

/// Name of the optional config file in the working directory.
pub const CONFIG_FILE: &str = ".legacylift.toml";

/// Default per-file size limit: 5 MiB.
const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Largest accepted `progress_speed`; slower than this is never useful.
const MAX_PROGRESS_SPEED: f64 = 100.0;

/// Project configuration loaded from `.legacylift.toml`.
/// Include/exclude patterns are path prefixes applied to files found while
/// walking a directory input.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Emit ANSI colors in terminal output.
    pub color: bool,
    /// Path prefixes never ingested.
    pub exclude: Vec<String>,
    /// Path prefixes ingested; empty means everything.
    pub include: Vec<String>,
    /// Largest file accepted, in bytes.
    pub max_file_bytes: u64,
    /// Multiplier on progress delays; `0.0` plays the schedule without waiting.
    pub progress_speed: f64,
}

/// Raw TOML structure for `.legacylift.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyliftTomlConfig {
    /// See [`Config::color`].
    color: Option<bool>,
    /// See [`Config::exclude`].
    #[serde(default)]
    exclude: Vec<String>,
    /// See [`Config::include`].
    #[serde(default)]
    include: Vec<String>,
    /// See [`Config::max_file_bytes`].
    max_file_bytes: Option<u64>,
    /// See [`Config::progress_speed`].
    progress_speed: Option<f64>,
}

impl Default for Config {
    /// Ingest everything, color on, real-time progress, 5 MiB limit.
    fn default() -> Self {
        return Self {
            color: true,
            exclude: Vec::new(),
            include: Vec::new(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            progress_speed: 1.0,
        };
    }
}

impl Config {
    /// Load config from `.legacylift.toml` in the given root directory.
    /// Returns the default if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; a config the
    /// user wrote is never silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// `Error::TomlDe` if the TOML is malformed,
    /// or `Error::InvalidConfig` if a value is out of range.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        return Ok(config);
    }

    /// Parse config from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed,
    /// or `Error::InvalidConfig` if a value is out of range.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: LegacyliftTomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let progress_speed = raw.progress_speed.unwrap_or(defaults.progress_speed);
        if !(0.0..=MAX_PROGRESS_SPEED).contains(&progress_speed) {
            return Err(Error::InvalidConfig {
                reason: format!("progress_speed must be between 0 and {MAX_PROGRESS_SPEED}, got {progress_speed}"),
            });
        }

        return Ok(Self {
            color: raw.color.unwrap_or(defaults.color),
            exclude: raw.exclude,
            include: raw.include,
            max_file_bytes: raw.max_file_bytes.unwrap_or(defaults.max_file_bytes),
            progress_speed,
        });
    }

    /// Check whether a file found under a directory input should be ingested.
    ///
    /// A path is included if no include patterns are set (ingest everything),
    /// or if the path starts with at least one include pattern.
    /// An included path is then excluded if it starts with any exclude pattern.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| return relative_path.starts_with(p.as_str()));

        if !included {
            return false;
        }

        return !self.exclude.iter().any(|p| return relative_path.starts_with(p.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = Config::parse(
            "color = false\ninclude = [\"src/\"]\nexclude = [\"src/vendor/\"]\nmax_file_bytes = 2048\nprogress_speed = 0.5\n",
        )
        .unwrap();
        assert!(!config.color);
        assert_eq!(config.max_file_bytes, 2048);
        assert!((config.progress_speed - 0.5).abs() < f64::EPSILON);
        assert!(config.should_scan("src/app.js"));
        assert!(!config.should_scan("src/vendor/jquery.js"));
        assert!(!config.should_scan("test/app.test.js"));
    }

    #[test]
    fn empty_include_scans_everything() {
        let config = Config::parse("exclude = [\"dist/\"]").unwrap();
        assert!(config.should_scan("app.js"));
        assert!(!config.should_scan("dist/app.min.js"));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let err = Config::parse("progress_speed = -1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn huge_speed_is_rejected() {
        let err = Config::parse("progress_speed = 1e30").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref reason } if reason.contains("between 0 and 100")));
        assert!(Config::parse("progress_speed = 100.0").is_ok());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "include = 3").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::TomlDe(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(Config::parse("colour = true"), Err(Error::TomlDe(_))));
    }
}
