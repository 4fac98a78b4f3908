/// Core domain types for legacylift: uploaded files, migration paths, findings, and reports.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A static record of a potential behavioral conflict when adopting the target technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityIssue {
    /// What conflicts and where it comes from.
    pub description: &'static str,
    /// Identifier unique within one path's issue list.
    pub id: &'static str,
    /// One-based line the issue is attributed to, if any.
    pub line: Option<u32>,
    /// How bad the conflict is.
    pub severity: Severity,
    /// How to resolve it.
    pub suggestion: &'static str,
    /// Short heading.
    pub title: &'static str,
}

/// Effort bucket derived from lines of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// More than 1000 lines.
    High,
    /// 300 lines or fewer.
    Low,
    /// Between 301 and 1000 lines.
    Medium,
}

impl Complexity {
    /// Lowercase label used in reports.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Complexity::High => "high",
            Complexity::Low => "low",
            Complexity::Medium => "medium",
        };
    }
}

/// A legacy idiom and its suggested modern replacement, pre-associated with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeprecatedPattern {
    /// How many times the idiom is reported.
    pub instances: u32,
    /// The legacy idiom.
    pub pattern: &'static str,
    /// The modern replacement.
    pub replacement: &'static str,
}

/// Whether an upload is a single source file or an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A plain source file.
    File,
    /// A `.zip` archive (content is read as text, not unpacked).
    Zip,
}

/// Framework recognized from marker substrings in file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Framework {
    /// Modern Angular (`@angular/core`).
    #[serde(rename = "Angular")]
    Angular,
    /// AngularJS 1.x (`angular.module`).
    #[serde(rename = "AngularJS")]
    AngularJs,
    /// jQuery (`$(` or `jQuery`).
    #[serde(rename = "jQuery")]
    JQuery,
    /// React class components.
    #[serde(rename = "React Class")]
    ReactClass,
    /// React function components with hooks.
    #[serde(rename = "React Hooks")]
    ReactHooks,
    /// Vue 3 (`createApp` or `defineComponent`).
    #[serde(rename = "Vue 3")]
    Vue3,
}

impl Framework {
    /// Display label.
    pub const fn label(self) -> &'static str {
        return match self {
            Framework::Angular => "Angular",
            Framework::AngularJs => "AngularJS",
            Framework::JQuery => "jQuery",
            Framework::ReactClass => "React Class",
            Framework::ReactHooks => "React Hooks",
            Framework::Vue3 => "Vue 3",
        };
    }
}

/// Everything a report derives from its inputs. Two syntheses over the same
/// file and path produce equal values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationAnalysis {
    /// Whether the migration can be rolled back. Always true.
    pub can_rollback: bool,
    /// Verbatim copy of the path's compatibility issue table.
    pub compatibility_issues: Vec<CompatibilityIssue>,
    /// Bucket derived from lines of code.
    pub complexity: Complexity,
    /// The path's canned converted sample. Empty for an unrecognized path.
    pub converted_code: &'static str,
    /// Verbatim copy of the path's deprecated pattern table.
    pub deprecated_patterns: Vec<DeprecatedPattern>,
    /// `ceil(loc / 100)`.
    pub effort_hours: usize,
    /// The path the report was requested for.
    pub migration_path: RequestedPath,
    /// The file the report describes.
    pub original_file: UploadedFile,
    /// Reported performance gain in percent. Fixed.
    pub performance_gain: u8,
    /// Risk derived from lines of code.
    pub risk_level: RiskLevel,
    /// Reported coverage in percent. Fixed.
    pub test_coverage: u8,
    /// Number of generated tests. Fixed.
    pub tests_generated: u32,
    /// Number of passing tests. Fixed.
    pub tests_passing: u32,
}

/// One of the six supported source→target pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MigrationPathId {
    /// AngularJS 1.x → Angular 17+.
    #[serde(rename = "angularjs-angular")]
    AngularjsAngular,
    /// ES5 → ES6+ / TypeScript.
    #[serde(rename = "es5-es6")]
    Es5Es6,
    /// jQuery → React hooks.
    #[serde(rename = "jquery-react")]
    JqueryReact,
    /// jQuery → Vue 3.
    #[serde(rename = "jquery-vue")]
    JqueryVue,
    /// Python 2 → Python 3.
    #[serde(rename = "python2-python3")]
    Python2Python3,
    /// React class components → hooks.
    #[serde(rename = "react-class-hooks")]
    ReactClassHooks,
}

impl MigrationPathId {
    /// All paths in catalog order.
    pub const ALL: [Self; 6] = [
        Self::JqueryReact,
        Self::JqueryVue,
        Self::Python2Python3,
        Self::AngularjsAngular,
        Self::Es5Es6,
        Self::ReactClassHooks,
    ];

    /// The kebab-case identifier.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Self::AngularjsAngular => "angularjs-angular",
            Self::Es5Es6 => "es5-es6",
            Self::JqueryReact => "jquery-react",
            Self::JqueryVue => "jquery-vue",
            Self::Python2Python3 => "python2-python3",
            Self::ReactClassHooks => "react-class-hooks",
        };
    }

    /// Look up a path by its kebab-case identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        return Self::ALL.into_iter().find(|p| return p.as_str() == id);
    }
}

impl fmt::Display for MigrationPathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// A report: the deterministic analysis plus an opaque id and creation time.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Deterministic content.
    #[serde(flatten)]
    pub analysis: MigrationAnalysis,
    /// Random per-run identifier.
    pub id: Uuid,
    /// When the report was synthesized.
    pub timestamp: DateTime<Utc>,
}

/// A path id as the caller supplied it. Unrecognized ids are carried through
/// rather than rejected so the synthesizer stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum RequestedPath {
    /// One of the six supported paths.
    Known(MigrationPathId),
    /// Anything else, verbatim.
    Unrecognized(String),
}

impl RequestedPath {
    /// Classify a raw identifier.
    pub fn parse(id: &str) -> Self {
        return match MigrationPathId::from_id(id) {
            Some(known) => Self::Known(known),
            None => Self::Unrecognized(id.to_string()),
        };
    }

    /// The identifier as given.
    pub fn as_str(&self) -> &str {
        return match self {
            Self::Known(id) => id.as_str(),
            Self::Unrecognized(raw) => raw,
        };
    }
}

impl From<RequestedPath> for String {
    fn from(path: RequestedPath) -> Self {
        return match path {
            RequestedPath::Known(id) => id.as_str().to_string(),
            RequestedPath::Unrecognized(raw) => raw,
        };
    }
}

/// Risk bucket derived from lines of code. `High` is never produced by the
/// synthesizer but is part of the report vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Reserved.
    High,
    /// 1000 lines or fewer.
    Low,
    /// More than 1000 lines.
    Medium,
}

impl RiskLevel {
    /// Lowercase label used in reports.
    pub const fn as_str(self) -> &'static str {
        return match self {
            RiskLevel::High => "high",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
        };
    }
}

/// Compatibility issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the migration until fixed.
    Critical,
    /// Informational only.
    Info,
    /// Needs attention.
    Warning,
}

impl Severity {
    /// Uppercase tag used in text summaries.
    pub const fn tag(self) -> &'static str {
        return match self {
            Severity::Critical => "CRITICAL",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
        };
    }
}

/// Immutable source text plus its language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Language tag, e.g. `python` or `typescript`. Open-ended.
    pub language: String,
    /// The source text.
    pub text: String,
}

/// A file as ingested from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// File content, lossily decoded as UTF-8.
    pub content: String,
    /// Framework recognized in the content, if any.
    pub framework: Option<Framework>,
    /// Short content fingerprint.
    pub id: String,
    /// Single file or archive.
    pub kind: FileKind,
    /// Language tag from the extension, `unknown` when unmapped.
    pub language: String,
    /// Non-blank lines of code.
    pub loc: usize,
    /// File name as displayed.
    pub name: String,
    /// Size on disk in bytes.
    pub size: u64,
}

impl UploadedFile {
    /// The file's content as a document for highlighting.
    pub fn document(&self) -> SourceDocument {
        return SourceDocument {
            language: self.language.clone(),
            text: self.content.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ids_round_trip_through_text() {
        for path in MigrationPathId::ALL {
            assert_eq!(MigrationPathId::from_id(path.as_str()), Some(path));
        }
    }

    #[test]
    fn unknown_id_is_carried_verbatim() {
        let requested = RequestedPath::parse("cobol-rust");
        assert_eq!(requested, RequestedPath::Unrecognized("cobol-rust".to_string()));
        assert_eq!(requested.as_str(), "cobol-rust");
    }

    #[test]
    fn requested_path_serializes_as_plain_id() {
        let json = serde_json::to_string(&RequestedPath::Known(MigrationPathId::Es5Es6)).unwrap();
        assert_eq!(json, "\"es5-es6\"");
    }
}
