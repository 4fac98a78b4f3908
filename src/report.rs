//! Report synthesis: table lookup by migration path plus two line-count derivations.

use chrono::Utc;
use uuid::Uuid;

use crate::findings;
use crate::samples;
use crate::types::{
    CompatibilityIssue, Complexity, DeprecatedPattern, MigrationAnalysis, MigrationReport,
    RequestedPath, RiskLevel, UploadedFile,
};

/// Lines of code above which complexity is high and risk is medium.
const LARGE_LOC: usize = 1000;

/// Lines of code above which complexity is medium.
const MEDIUM_LOC: usize = 300;

/// Lines of code covered by one hour of effort.
const LOC_PER_HOUR: usize = 100;

/// Reported performance gain in percent.
const PERFORMANCE_GAIN: u8 = 35;

/// Reported test coverage in percent.
const TEST_COVERAGE: u8 = 87;

/// Reported number of generated tests, all passing.
const TESTS_GENERATED: u32 = 12;

/// Build the deterministic part of a report.
pub fn analyze(file: &UploadedFile, path: &RequestedPath) -> MigrationAnalysis {
    let (converted_code, deprecated_patterns, compatibility_issues): (
        &'static str,
        &'static [DeprecatedPattern],
        &'static [CompatibilityIssue],
    ) = match path {
        RequestedPath::Known(id) => (
            samples::sample(*id).converted,
            findings::deprecated_patterns(*id),
            findings::compatibility_issues(*id),
        ),
        RequestedPath::Unrecognized(_) => ("", &[], &[]),
    };

    return MigrationAnalysis {
        can_rollback: true,
        compatibility_issues: compatibility_issues.to_vec(),
        complexity: complexity_for(file.loc),
        converted_code,
        deprecated_patterns: deprecated_patterns.to_vec(),
        effort_hours: effort_hours_for(file.loc),
        migration_path: path.clone(),
        original_file: file.clone(),
        performance_gain: PERFORMANCE_GAIN,
        risk_level: risk_for(file.loc),
        test_coverage: TEST_COVERAGE,
        tests_generated: TESTS_GENERATED,
        tests_passing: TESTS_GENERATED,
    };
}

/// Complexity bucket for a line count.
pub const fn complexity_for(loc: usize) -> Complexity {
    if loc > LARGE_LOC {
        return Complexity::High;
    }
    if loc > MEDIUM_LOC {
        return Complexity::Medium;
    }
    return Complexity::Low;
}

/// Estimated hours: one per started hundred lines.
pub const fn effort_hours_for(loc: usize) -> usize {
    return loc.div_ceil(LOC_PER_HOUR);
}

/// Risk level for a line count.
pub const fn risk_for(loc: usize) -> RiskLevel {
    if loc > LARGE_LOC {
        return RiskLevel::Medium;
    }
    return RiskLevel::Low;
}

/// Synthesize a report for `file` migrated along `path`. Never fails: an
/// unrecognized path yields empty pattern and issue lists.
pub fn synthesize(file: &UploadedFile, path: &RequestedPath) -> MigrationReport {
    let analysis = analyze(file, path);
    if let RequestedPath::Unrecognized(raw) = path {
        tracing::warn!(path = %raw, "unrecognized migration path, report has no findings");
    }
    return MigrationReport {
        analysis,
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileKind, MigrationPathId};

    fn file_with_loc(loc: usize) -> UploadedFile {
        UploadedFile {
            content: "$('#counter').text(0);".to_string(),
            framework: None,
            id: "0123456789abcdef".to_string(),
            kind: FileKind::File,
            language: "javascript".to_string(),
            loc,
            name: "app.js".to_string(),
            size: 22,
        }
    }

    #[test]
    fn effort_rounds_up_per_hundred_lines() {
        assert_eq!(effort_hours_for(0), 0);
        assert_eq!(effort_hours_for(50), 1);
        assert_eq!(effort_hours_for(100), 1);
        assert_eq!(effort_hours_for(101), 2);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(complexity_for(300), Complexity::Low);
        assert_eq!(complexity_for(301), Complexity::Medium);
        assert_eq!(complexity_for(1000), Complexity::Medium);
        assert_eq!(complexity_for(1001), Complexity::High);
        assert_eq!(risk_for(1000), RiskLevel::Low);
        assert_eq!(risk_for(1001), RiskLevel::Medium);
    }

    #[test]
    fn large_file_is_high_complexity_medium_risk() {
        let report = synthesize(&file_with_loc(1001), &RequestedPath::Known(MigrationPathId::JqueryReact));
        assert_eq!(report.analysis.complexity, Complexity::High);
        assert_eq!(report.analysis.risk_level, RiskLevel::Medium);
        assert_eq!(report.analysis.effort_hours, 11);
    }

    #[test]
    fn findings_are_copied_verbatim() {
        let path = MigrationPathId::Python2Python3;
        let report = synthesize(&file_with_loc(40), &RequestedPath::Known(path));
        assert_eq!(report.analysis.deprecated_patterns, findings::deprecated_patterns(path));
        assert_eq!(report.analysis.compatibility_issues, findings::compatibility_issues(path));
        assert_eq!(report.analysis.converted_code, samples::sample(path).converted);
    }

    #[test]
    fn fixed_metrics_ignore_input() {
        let analysis = analyze(&file_with_loc(5000), &RequestedPath::Known(MigrationPathId::Es5Es6));
        assert_eq!(analysis.test_coverage, 87);
        assert_eq!(analysis.performance_gain, 35);
        assert_eq!(analysis.tests_generated, 12);
        assert_eq!(analysis.tests_passing, 12);
        assert!(analysis.can_rollback);
    }

    #[test]
    fn repeated_synthesis_differs_only_in_id_and_time() {
        let file = file_with_loc(250);
        let path = RequestedPath::Known(MigrationPathId::AngularjsAngular);
        let first = synthesize(&file, &path);
        let second = synthesize(&file, &path);
        assert_eq!(first.analysis, second.analysis);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn unknown_path_yields_empty_findings() {
        let report = synthesize(&file_with_loc(10), &RequestedPath::parse("cobol-rust"));
        assert!(report.analysis.deprecated_patterns.is_empty());
        assert!(report.analysis.compatibility_issues.is_empty());
        assert_eq!(report.analysis.converted_code, "");
        assert_eq!(report.analysis.effort_hours, 1);
    }
}
