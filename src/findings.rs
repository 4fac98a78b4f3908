//! Static per-path findings: deprecated patterns and compatibility issues.
//!
//! These are fixed data keyed by migration path. Nothing here looks at the
//! uploaded content.

use crate::types::{CompatibilityIssue, DeprecatedPattern, MigrationPathId, Severity};

/// Shorthand for a table row.
const fn pattern(pattern: &'static str, instances: u32, replacement: &'static str) -> DeprecatedPattern {
    return DeprecatedPattern { instances, pattern, replacement };
}

/// Shorthand for a table row.
const fn issue(
    id: &'static str,
    severity: Severity,
    title: &'static str,
    description: &'static str,
    line: u32,
    suggestion: &'static str,
) -> CompatibilityIssue {
    return CompatibilityIssue {
        description,
        id,
        line: Some(line),
        severity,
        suggestion,
        title,
    };
}

/// Compatibility issues reported for a path.
pub const fn compatibility_issues(path: MigrationPathId) -> &'static [CompatibilityIssue] {
    return match path {
        MigrationPathId::AngularjsAngular => const {
            &[
                issue("1", Severity::Critical, "Scope Binding", "$scope is not available in modern Angular", 23, "Use component class properties"),
                issue("2", Severity::Critical, "Dependency Injection", "DI syntax changed significantly", 34, "Use constructor injection"),
                issue("3", Severity::Warning, "Template Syntax", "ng-* directives need conversion", 89, "Use new Angular syntax"),
            ]
        },
        MigrationPathId::Es5Es6 => const {
            &[
                issue("1", Severity::Warning, "Callback Pattern", "Callback hell detected, consider refactoring", 56, "Convert to Promise/async-await"),
                issue("2", Severity::Info, "Variable Hoisting", "var hoisting may cause unexpected behavior", 12, "Use const/let with block scoping"),
            ]
        },
        MigrationPathId::JqueryReact => const {
            &[
                issue("1", Severity::Critical, "Direct DOM Manipulation", "jQuery direct DOM changes conflict with React virtual DOM", 45, "Use React refs or state instead"),
                issue("2", Severity::Warning, "jQuery Plugin Dependency", "Custom jQuery plugin detected that needs manual conversion", 78, "Find React equivalent or wrap in useEffect"),
                issue("3", Severity::Warning, "Event Delegation Pattern", "jQuery event delegation needs restructuring", 102, "Use React event handlers on components"),
                issue("4", Severity::Info, "Animation Library", "jQuery animations can be replaced with CSS or Framer Motion", 156, "Consider using framer-motion for animations"),
            ]
        },
        MigrationPathId::JqueryVue => const {
            &[
                issue("1", Severity::Critical, "Direct DOM Manipulation", "jQuery DOM manipulation conflicts with Vue reactivity", 32, "Use Vue refs and reactive state"),
                issue("2", Severity::Warning, "Ajax Calls", "Replace $.ajax with fetch or axios", 67, "Use Composition API with async/await"),
            ]
        },
        MigrationPathId::Python2Python3 => const {
            &[
                issue("1", Severity::Critical, "Print Statement Syntax", "Python 2 print statement must be converted to function", 12, "Use print() function syntax"),
                issue("2", Severity::Warning, "Dictionary Iteration", "iteritems() removed in Python 3", 45, "Use items() instead"),
                issue("3", Severity::Info, "Integer Division", "Division behavior changed in Python 3", 78, "Use // for integer division"),
            ]
        },
        MigrationPathId::ReactClassHooks => const {
            &[
                issue("1", Severity::Warning, "Lifecycle Method", "componentWillMount is deprecated", 34, "Move logic to useEffect or useState initializer"),
                issue("2", Severity::Info, "this Binding", "Arrow functions or bind patterns can be simplified", 67, "Use functional components with hooks"),
            ]
        },
    };
}

/// Deprecated patterns reported for a path.
pub const fn deprecated_patterns(path: MigrationPathId) -> &'static [DeprecatedPattern] {
    return match path {
        MigrationPathId::AngularjsAngular => const {
            &[
                pattern("$scope", 45, "component properties"),
                pattern("$http", 18, "HttpClient"),
                pattern("ng-click", 22, "(click)"),
            ]
        },
        MigrationPathId::Es5Es6 => const {
            &[
                pattern("var", 89, "const/let"),
                pattern("function()", 34, "arrow functions"),
                pattern("callback", 12, "async/await"),
            ]
        },
        MigrationPathId::JqueryReact => const {
            &[
                pattern("$.ajax()", 12, "fetch/axios"),
                pattern("$(selector).click()", 28, "onClick handler"),
                pattern("$(selector).html()", 45, "React state/JSX"),
            ]
        },
        MigrationPathId::JqueryVue => const {
            &[
                pattern("$.ajax()", 8, "fetch/axios"),
                pattern("$(selector).val()", 15, "v-model"),
            ]
        },
        MigrationPathId::Python2Python3 => const {
            &[
                pattern("print \"...\"", 34, "print(...)"),
                pattern(".iteritems()", 12, ".items()"),
                pattern("xrange()", 8, "range()"),
            ]
        },
        MigrationPathId::ReactClassHooks => const {
            &[
                pattern("componentDidMount", 8, "useEffect"),
                pattern("this.state", 24, "useState"),
                pattern("this.setState", 18, "setState"),
            ]
        },
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_has_findings() {
        for path in MigrationPathId::ALL {
            assert!(!deprecated_patterns(path).is_empty(), "{path} has no patterns");
            assert!(!compatibility_issues(path).is_empty(), "{path} has no issues");
        }
    }

    #[test]
    fn tables_are_static_and_usable_in_const_context() {
        const PYTHON_ISSUES: &[CompatibilityIssue] = compatibility_issues(MigrationPathId::Python2Python3);
        const VUE_PATTERNS: &[DeprecatedPattern] = deprecated_patterns(MigrationPathId::JqueryVue);

        let kept: &'static [CompatibilityIssue] = compatibility_issues(MigrationPathId::AngularjsAngular);
        assert_eq!(PYTHON_ISSUES.len(), 3);
        assert_eq!(VUE_PATTERNS.len(), 2);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn issue_ids_are_unique_per_path() {
        for path in MigrationPathId::ALL {
            let mut ids: Vec<&str> = compatibility_issues(path).iter().map(|i| i.id).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "{path} repeats an issue id");
        }
    }

    #[test]
    fn jquery_react_table_matches_catalog() {
        let issues = compatibility_issues(MigrationPathId::JqueryReact);
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[3].line, Some(156));
        assert_eq!(deprecated_patterns(MigrationPathId::JqueryReact)[2].instances, 45);
    }
}
