//! Line-oriented syntax highlighting: strings, comments, keywords, numbers.
//!
//! Each line is tagged in four ordered stages. A stage only looks at text no
//! earlier stage has claimed, so the first stage to tag a span wins and the
//! segments of a line always concatenate back to the line itself.

use std::iter::Enumerate;
use std::str::Split;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::language::Dialect;

/// Text shown in place of an empty line so it still occupies a row.
pub const BLANK_PLACEHOLDER: &str = "\u{a0}";

/// Quoted literal in any of the three quote styles, backslash escapes allowed.
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#)
        .expect("valid regex");
});

/// Run of ASCII digits on ASCII word boundaries.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)").expect("valid regex"));

/// Whole-word brace dialect keywords.
static BRACE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| return keyword_regex(Dialect::Brace));

/// Whole-word indentation dialect keywords.
static INDENTATION_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| return keyword_regex(Dialect::Indentation));

/// One line of highlighted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedLine {
    /// The source line was empty; `segments` holds only the placeholder.
    pub blank: bool,
    /// One-based line number.
    pub number: usize,
    /// Styled runs in source order.
    pub segments: Vec<Segment>,
}

impl HighlightedLine {
    /// The source text of the line with styles stripped. Empty for a blank line.
    pub fn plain_text(&self) -> String {
        if self.blank {
            return String::new();
        }
        return self.segments.iter().map(|s| return s.text.as_str()).collect();
    }
}

/// Lazy iterator over the highlighted lines of a text. Clone it to restart.
#[derive(Debug, Clone)]
pub struct HighlightedLines<'a> {
    /// Keyword set and comment syntax in effect.
    dialect: Dialect,
    /// Remaining raw lines with their zero-based index.
    lines: Enumerate<Split<'a, char>>,
}

impl Iterator for HighlightedLines<'_> {
    type Item = HighlightedLine;

    fn next(&mut self) -> Option<HighlightedLine> {
        let (index, line) = self.lines.next()?;
        return Some(highlight_line(line, index.saturating_add(1), self.dialect));
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// How the run is displayed.
    pub style: Style,
    /// The run's source text.
    pub text: String,
}

impl Segment {
    /// Build a segment from borrowed text.
    fn new(style: Style, text: &str) -> Self {
        return Self {
            style,
            text: text.to_string(),
        };
    }
}

/// Display category of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// From the comment marker to end of line.
    Comment,
    /// A keyword of the line's dialect.
    Keyword,
    /// A decimal literal.
    Number,
    /// Anything untagged.
    Plain,
    /// A quoted literal including its quotes.
    String,
}

/// Highlight `text` line by line. Lines are split on `\n`, so the number of
/// lines produced equals `text.split('\n').count()`. Any language tag other
/// than `python` uses the brace dialect.
pub fn highlight<'a>(text: &'a str, language: &str) -> HighlightedLines<'a> {
    return HighlightedLines {
        dialect: Dialect::from_tag(language),
        lines: text.split('\n').enumerate(),
    };
}

/// Highlight a single line (no line feeds).
pub fn highlight_line(line: &str, number: usize, dialect: Dialect) -> HighlightedLine {
    if line.is_empty() {
        return HighlightedLine {
            blank: true,
            number,
            segments: vec![Segment::new(Style::Plain, BLANK_PLACEHOLDER)],
        };
    }

    let keywords: &Regex = match dialect {
        Dialect::Brace => &BRACE_KEYWORDS,
        Dialect::Indentation => &INDENTATION_KEYWORDS,
    };

    let segments = vec![Segment::new(Style::Plain, line)];
    let segments = tag_matches_in_plain_segments(segments, &STRING_LITERAL, Style::String);
    let segments = tag_first_comment(segments, dialect);
    let segments = tag_matches_in_plain_segments(segments, keywords, Style::Keyword);
    let segments = tag_matches_in_plain_segments(segments, &NUMBER, Style::Number);

    return HighlightedLine {
        blank: false,
        number,
        segments,
    };
}

/// Byte offset of the first comment marker in `text`, if any.
/// A `#` directly preceded by a backslash does not start a comment.
fn find_comment_marker(text: &str, dialect: Dialect) -> Option<usize> {
    return match dialect {
        Dialect::Brace => text.find("//"),
        Dialect::Indentation => text
            .match_indices('#')
            .map(|(offset, _)| return offset)
            .find(|&offset| return !text.get(..offset).unwrap_or_default().ends_with('\\')),
    };
}

/// Compile the whole-word alternation for a dialect's keyword set.
///
/// # Panics
///
/// Panics if the keyword list produces an invalid regex (compile-time invariant).
fn keyword_regex(dialect: Dialect) -> Regex {
    let pattern = format!(r"(?-u:\b)(?:{})(?-u:\b)", dialect.keywords().join("|"));
    return Regex::new(&pattern).expect("valid regex");
}

/// Append a plain segment unless `text` is empty.
fn push_plain(out: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        out.push(Segment::new(Style::Plain, text));
    }
}

/// Find the first comment marker in an untagged run and turn everything from
/// it to the end of the line into one comment segment, absorbing any
/// segments that follow.
fn tag_first_comment(segments: Vec<Segment>, dialect: Dialect) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    let mut remaining = segments.into_iter();

    while let Some(segment) = remaining.next() {
        let marker = match segment.style {
            Style::Plain => find_comment_marker(&segment.text, dialect),
            Style::Comment | Style::Keyword | Style::Number | Style::String => None,
        };
        let Some(offset) = marker else {
            out.push(segment);
            continue;
        };

        let (code, comment_head) = segment.text.split_at(offset);
        push_plain(&mut out, code);
        let mut comment = comment_head.to_string();
        for trailing in remaining.by_ref() {
            comment.push_str(&trailing.text);
        }
        out.push(Segment {
            style: Style::Comment,
            text: comment,
        });
    }

    return out;
}

/// Split every untagged segment around the matches of `pattern`, tagging the
/// matches with `style`. Tagged segments pass through untouched.
fn tag_matches_in_plain_segments(segments: Vec<Segment>, pattern: &Regex, style: Style) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.style != Style::Plain {
            out.push(segment);
            continue;
        }

        let text = segment.text.as_str();
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            push_plain(&mut out, text.get(cursor..found.start()).unwrap_or_default());
            out.push(Segment::new(style, found.as_str()));
            cursor = found.end();
        }
        push_plain(&mut out, text.get(cursor..).unwrap_or_default());
    }
    return out;
}
