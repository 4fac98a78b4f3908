//! Presentation: highlighted code for terminals and HTML, and report views.

use std::fmt::Write as _;

use crate::highlight::{BLANK_PLACEHOLDER, HighlightedLine, Style};
use crate::paths;
use crate::types::{MigrationReport, RequestedPath, Severity};

/// Italic dim, for comments.
const ANSI_COMMENT: &str = "\x1b[2;3m";
/// Bold blue, for keywords.
const ANSI_KEYWORD: &str = "\x1b[1;34m";
/// Yellow, for numbers.
const ANSI_NUMBER: &str = "\x1b[33m";
/// Green, for strings.
const ANSI_STRING: &str = "\x1b[32m";
/// Dim, for the line-number gutter.
const ANSI_GUTTER: &str = "\x1b[2m";
/// Bold, for headings.
const BOLD: &str = "\x1b[1m";
/// Reset all attributes.
const RESET: &str = "\x1b[0m";

/// Output format for highlighted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CodeFormat {
    /// Colored terminal output.
    Ansi,
    /// HTML fragment with escaped text and class-tagged spans.
    Html,
    /// One JSON array of highlighted lines.
    Json,
    /// Uncolored text with line numbers.
    Plain,
}

/// Which half of a code pair to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    /// Original and converted, one after the other.
    Both,
    /// Only the modern version.
    Converted,
    /// Only the legacy version.
    Original,
}

/// Render a line for a terminal: right-aligned gutter, then colored segments.
pub fn ansi_line(line: &HighlightedLine, color: bool) -> String {
    let mut out = String::new();
    if color {
        let _ = write!(out, "{ANSI_GUTTER}{:>4}{RESET}  ", line.number);
    } else {
        let _ = write!(out, "{:>4}  ", line.number);
    }

    if line.blank {
        return out;
    }
    for segment in &line.segments {
        let code = match segment.style {
            Style::Comment => ANSI_COMMENT,
            Style::Keyword => ANSI_KEYWORD,
            Style::Number => ANSI_NUMBER,
            Style::Plain => "",
            Style::String => ANSI_STRING,
        };
        if color && !code.is_empty() {
            let _ = write!(out, "{code}{}{RESET}", segment.text);
        } else {
            out.push_str(&segment.text);
        }
    }
    return out;
}

/// Render a titled block of highlighted code, e.g. one side of a comparison.
pub fn code_panel<I>(title: &str, language: &str, lines: I, color: bool) -> String
where
    I: IntoIterator<Item = HighlightedLine>,
{
    let mut out = heading(&format!("{title} ({language})"), color);
    for line in lines {
        out.push_str(&ansi_line(&line, color));
        out.push('\n');
    }
    return out;
}

/// Escape text for embedding in HTML, quotes and slashes included.
pub fn escape_html(text: &str) -> String {
    return v_htmlescape::escape(text).to_string();
}

/// Render a line as an HTML row. Every segment is escaped, so source text can
/// never inject markup.
pub fn html_line(line: &HighlightedLine) -> String {
    let mut out = format!(
        "<div class=\"flex\"><span class=\"line-number\">{}</span><span class=\"flex-1\">",
        line.number
    );
    if line.blank {
        out.push_str("&nbsp;");
    } else {
        for segment in &line.segments {
            let text = escape_html(&segment.text);
            let _ = match html_class(segment.style) {
                Some(class) => write!(out, "<span class=\"{class}\">{text}</span>"),
                None => write!(out, "{text}"),
            };
        }
    }
    out.push_str("</span></div>");
    return out;
}

/// Render a line without color: gutter and source text.
pub fn plain_line(line: &HighlightedLine) -> String {
    return format!("{:>4}  {}", line.number, line.plain_text());
}

/// Terminal view of a report: headline metrics, patterns, issues.
pub fn report_view(report: &MigrationReport, color: bool) -> String {
    let analysis = &report.analysis;
    let mut out = heading("Migration Report", color);

    let _ = writeln!(out, "Path:        {}", path_display_name(&analysis.migration_path));
    let _ = writeln!(out, "File:        {} ({} lines)", analysis.original_file.name, analysis.original_file.loc);
    let _ = writeln!(out, "Complexity:  {}", analysis.complexity.as_str());
    let _ = writeln!(out, "Effort:      {} hours", analysis.effort_hours);
    let _ = writeln!(out, "Risk:        {}", analysis.risk_level.as_str());
    let _ = writeln!(out, "Coverage:    {}%", analysis.test_coverage);
    let _ = writeln!(out, "Tests:       {}/{} passing", analysis.tests_passing, analysis.tests_generated);
    let _ = writeln!(out, "Performance: +{}%", analysis.performance_gain);
    out.push('\n');

    out.push_str(&heading("Deprecated Patterns", color));
    if analysis.deprecated_patterns.is_empty() {
        out.push_str("  none\n");
    }
    for pattern in &analysis.deprecated_patterns {
        let _ = writeln!(out, "  {:<24} {:>3}x  → {}", pattern.pattern, pattern.instances, pattern.replacement);
    }
    out.push('\n');

    let critical = count_severity(report, Severity::Critical);
    let warning = count_severity(report, Severity::Warning);
    out.push_str(&heading(&format!("Compatibility Issues ({critical} Critical, {warning} Warning)"), color));
    if analysis.compatibility_issues.is_empty() {
        out.push_str("  none\n");
    }
    for issue in &analysis.compatibility_issues {
        let line = issue.line.map(|l| return format!(" (line {l})")).unwrap_or_default();
        let _ = writeln!(out, "  [{}] {}{line}", issue.severity.tag(), issue.title);
        let _ = writeln!(out, "      {}", issue.description);
        let _ = writeln!(out, "      fix: {}", issue.suggestion);
    }
    return out;
}

/// The downloadable plain-text summary of a report.
pub fn summary_text(report: &MigrationReport) -> String {
    let analysis = &report.analysis;
    let patterns: Vec<String> = analysis
        .deprecated_patterns
        .iter()
        .map(|p| return format!("- {} ({}x) → {}", p.pattern, p.instances, p.replacement))
        .collect();
    let issues: Vec<String> = analysis
        .compatibility_issues
        .iter()
        .map(|i| return format!("- [{}] {}: {}", i.severity.tag(), i.title, i.description))
        .collect();

    return format!(
        "\
Migration Report
================
Date: {date}
File: {name}
LOC: {loc}
Migration: {path}

Complexity: {complexity}
Effort: {effort} hours
Risk: {risk}

Test Coverage: {coverage}%
Tests: {passing}/{generated} passing
Performance Gain: +{gain}%

Deprecated Patterns:
{patterns}

Compatibility Issues:
{issues}
",
        date = report.timestamp.to_rfc3339(),
        name = analysis.original_file.name,
        loc = analysis.original_file.loc,
        path = path_display_name(&analysis.migration_path),
        complexity = analysis.complexity.as_str(),
        effort = analysis.effort_hours,
        risk = analysis.risk_level.as_str(),
        coverage = analysis.test_coverage,
        passing = analysis.tests_passing,
        generated = analysis.tests_generated,
        gain = analysis.performance_gain,
        patterns = patterns.join("\n"),
        issues = issues.join("\n"),
    );
}

/// Number of issues in the report with the given severity.
fn count_severity(report: &MigrationReport, severity: Severity) -> usize {
    return report
        .analysis
        .compatibility_issues
        .iter()
        .filter(|i| return i.severity == severity)
        .count();
}

/// Section heading with an underline, bold when colored.
fn heading(text: &str, color: bool) -> String {
    let rule = "─".repeat(text.chars().count());
    if color {
        return format!("{BOLD}{text}{RESET}\n{rule}\n");
    }
    return format!("{text}\n{rule}\n");
}

/// CSS classes for a style; `None` leaves the text unwrapped.
const fn html_class(style: Style) -> Option<&'static str> {
    return match style {
        Style::Comment => Some("text-muted-foreground italic"),
        Style::Keyword => Some("text-primary font-medium"),
        Style::Number => Some("text-warning"),
        Style::Plain => None,
        Style::String => Some("text-success"),
    };
}

/// Display name for a path, or the raw id when unrecognized.
fn path_display_name(path: &RequestedPath) -> String {
    return match path {
        RequestedPath::Known(id) => paths::info(*id).name.to_string(),
        RequestedPath::Unrecognized(raw) => raw.clone(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;
    use crate::report;
    use crate::types::{FileKind, MigrationPathId, UploadedFile};

    fn sample_file() -> UploadedFile {
        UploadedFile {
            content: "print \"hi\"".to_string(),
            framework: None,
            id: "feedfacecafebeef".to_string(),
            kind: FileKind::File,
            language: "python".to_string(),
            loc: 120,
            name: "legacy.py".to_string(),
            size: 10,
        }
    }

    #[test]
    fn html_escapes_untagged_and_tagged_text() {
        let line = highlight("x = '<b>' + <script>", "javascript").next().unwrap();
        let html = html_line(&line);
        let string_span = html.split("<span class=\"text-success\">").nth(1).unwrap();
        let (string_text, _) = string_span.split_once("</span>").unwrap();
        assert!(string_text.contains("&lt;b&gt;"), "{string_text}");
        assert!(!string_text.contains('\''), "{string_text}");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn html_keyword_class_never_leaks_into_markup() {
        let line = highlight("const s = \"class\";", "javascript").next().unwrap();
        let html = html_line(&line);
        assert_eq!(html.matches("text-primary").count(), 1);
    }

    #[test]
    fn escape_covers_markup_and_quotes() {
        let escaped = escape_html("<a href=\"x\">Tom & 'Jerry'</a>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.contains("Tom &amp; "));
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn html_blank_line_uses_nbsp() {
        let line = highlight("", "javascript").next().unwrap();
        assert!(html_line(&line).contains("&nbsp;"));
        assert!(!html_line(&line).contains(BLANK_PLACEHOLDER));
    }

    #[test]
    fn ansi_without_color_is_plain() {
        let line = highlight("let n = 42; // hi", "javascript").next().unwrap();
        assert_eq!(ansi_line(&line, false), "   1  let n = 42; // hi");
        assert_eq!(plain_line(&line), "   1  let n = 42; // hi");
        assert!(ansi_line(&line, true).contains("\x1b[33m42\x1b[0m"));
    }

    #[test]
    fn summary_lists_findings() {
        let report = report::synthesize(&sample_file(), &RequestedPath::Known(MigrationPathId::Python2Python3));
        let text = summary_text(&report);
        assert!(text.starts_with("Migration Report\n================\n"));
        assert!(text.contains("Migration: Python 2 → Python 3\n"));
        assert!(text.contains("Effort: 2 hours\n"));
        assert!(text.contains("Tests: 12/12 passing\n"));
        assert!(text.contains("- xrange() (8x) → range()\n"));
        assert!(text.contains("- [CRITICAL] Print Statement Syntax: Python 2 print statement must be converted to function\n"));
    }

    #[test]
    fn report_view_counts_severities() {
        let report = report::synthesize(&sample_file(), &RequestedPath::Known(MigrationPathId::AngularjsAngular));
        let view = report_view(&report, false);
        assert!(view.contains("Compatibility Issues (2 Critical, 1 Warning)"));
        assert!(view.contains("[WARNING] Template Syntax (line 89)"));
    }

    #[test]
    fn unknown_path_report_shows_raw_id() {
        let report = report::synthesize(&sample_file(), &RequestedPath::parse("fortran-go"));
        let view = report_view(&report, false);
        assert!(view.contains("Path:        fortran-go"));
        assert!(view.contains("(0 Critical, 0 Warning)"));
    }
}
