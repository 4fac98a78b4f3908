/// Language tags by file extension, and the highlighter dialect for a tag.
use std::path::Path;

/// Extensions accepted when walking a directory.
pub const ACCEPTED_EXTENSIONS: [&str; 9] = ["css", "html", "js", "jsx", "py", "ts", "tsx", "vue", "zip"];

/// Tag for files whose extension maps to no language.
pub const UNKNOWN: &str = "unknown";

/// Comment syntax and keyword family used by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `//` comments, JavaScript/TypeScript keywords and React hook names.
    Brace,
    /// `#` comments, Python keywords.
    Indentation,
}

impl Dialect {
    /// Pick the dialect for a language tag. Only `python` is indentation-oriented;
    /// every other tag, known or not, falls back to the brace dialect.
    pub fn from_tag(tag: &str) -> Self {
        return match tag {
            "python" => Dialect::Indentation,
            _ => Dialect::Brace,
        };
    }

    /// Keywords highlighted as whole words.
    pub const fn keywords(self) -> &'static [&'static str] {
        return match self {
            Dialect::Brace => &[
                "const", "let", "var", "function", "return", "if", "else", "for", "while",
                "class", "extends", "import", "export", "from", "default", "async", "await",
                "try", "catch", "throw", "new", "this", "super", "static", "interface", "type",
                "useState", "useEffect", "useCallback", "useMemo", "useRef",
            ],
            Dialect::Indentation => &[
                "def", "class", "import", "from", "return", "if", "else", "elif", "for",
                "while", "try", "except", "raise", "with", "as", "True", "False", "None",
                "and", "or", "not", "in", "print", "range", "async", "await",
            ],
        };
    }
}

/// Whether a path's extension is one the directory walk picks up.
pub fn is_accepted(path: &Path) -> bool {
    let ext = extension_lowercase(path);
    return ACCEPTED_EXTENSIONS.contains(&ext.as_str());
}

/// Map a file extension to its language tag, `unknown` if unmapped.
pub fn language_for_path(path: &Path) -> &'static str {
    return match extension_lowercase(path).as_str() {
        "css" => "css",
        "html" => "html",
        "js" | "jsx" => "javascript",
        "py" => "python",
        "ts" | "tsx" => "typescript",
        "vue" => "vue",
        _ => UNKNOWN,
    };
}

/// The extension without its dot, lowercased; empty when absent.
fn extension_lowercase(path: &Path) -> String {
    return path
        .extension()
        .and_then(|e| return e.to_str())
        .unwrap_or("")
        .to_lowercase();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(language_for_path(Path::new("app.jsx")), "javascript");
        assert_eq!(language_for_path(Path::new("src/Counter.TSX")), "typescript");
        assert_eq!(language_for_path(Path::new("legacy.py")), "python");
    }

    #[test]
    fn unmapped_extension_is_unknown() {
        assert_eq!(language_for_path(Path::new("Makefile")), UNKNOWN);
        assert_eq!(language_for_path(Path::new("bundle.zip")), UNKNOWN);
    }

    #[test]
    fn only_python_is_indentation_oriented() {
        assert_eq!(Dialect::from_tag("python"), Dialect::Indentation);
        assert_eq!(Dialect::from_tag("typescript"), Dialect::Brace);
        assert_eq!(Dialect::from_tag("cobol"), Dialect::Brace);
    }

    #[test]
    fn directory_walk_accepts_archives() {
        assert!(is_accepted(Path::new("upload.zip")));
        assert!(!is_accepted(Path::new("README.md")));
    }
}
