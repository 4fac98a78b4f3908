//! Display catalog of migration paths and framework-based recommendations.
use serde::Serialize;

use crate::types::{Framework, MigrationPathId};

/// Display metadata for one migration path.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MigrationPathInfo {
    /// What the migration does.
    pub description: &'static str,
    /// Source technology.
    pub from: &'static str,
    /// Emoji shown next to the name.
    pub icon: &'static str,
    /// Path identifier.
    pub id: MigrationPathId,
    /// Display name, e.g. `jQuery → React`.
    pub name: &'static str,
    /// Target technology.
    pub to: &'static str,
}

/// Catalog entry for `angularjs-angular`.
static ANGULARJS_ANGULAR: MigrationPathInfo = MigrationPathInfo {
    description: "Transform AngularJS controllers and directives to modern Angular components",
    from: "AngularJS 1.x",
    icon: "🅰️",
    id: MigrationPathId::AngularjsAngular,
    name: "AngularJS → Angular",
    to: "Angular 17+",
};

/// Catalog entry for `es5-es6`.
static ES5_ES6: MigrationPathInfo = MigrationPathInfo {
    description: "Convert callbacks to Promises/async-await, var to const/let, and add modern syntax",
    from: "JavaScript ES5",
    icon: "📜",
    id: MigrationPathId::Es5Es6,
    name: "ES5 → ES6+",
    to: "ES6+ / TypeScript",
};

/// Catalog entry for `jquery-react`.
static JQUERY_REACT: MigrationPathInfo = MigrationPathInfo {
    description: "Convert jQuery DOM manipulation and events to React components with hooks and state management",
    from: "jQuery",
    icon: "⚛️",
    id: MigrationPathId::JqueryReact,
    name: "jQuery → React",
    to: "React Hooks",
};

/// Catalog entry for `jquery-vue`.
static JQUERY_VUE: MigrationPathInfo = MigrationPathInfo {
    description: "Migrate jQuery code to Vue 3 Composition API with reactive state",
    from: "jQuery",
    icon: "💚",
    id: MigrationPathId::JqueryVue,
    name: "jQuery → Vue",
    to: "Vue 3",
};

/// Catalog entry for `python2-python3`.
static PYTHON2_PYTHON3: MigrationPathInfo = MigrationPathInfo {
    description: "Upgrade Python 2 syntax, print statements, and deprecated methods to Python 3",
    from: "Python 2",
    icon: "🐍",
    id: MigrationPathId::Python2Python3,
    name: "Python 2 → Python 3",
    to: "Python 3",
};

/// Catalog entry for `react-class-hooks`.
static REACT_CLASS_HOOKS: MigrationPathInfo = MigrationPathInfo {
    description: "Migrate lifecycle methods and class state to functional components with hooks",
    from: "React Class Components",
    icon: "🪝",
    id: MigrationPathId::ReactClassHooks,
    name: "React Class → Hooks",
    to: "React Hooks",
};

/// All paths in display order.
pub static CATALOG: [&MigrationPathInfo; 6] = [
    &JQUERY_REACT,
    &JQUERY_VUE,
    &PYTHON2_PYTHON3,
    &ANGULARJS_ANGULAR,
    &ES5_ES6,
    &REACT_CLASS_HOOKS,
];

/// Catalog entry for a path.
pub fn info(path: MigrationPathId) -> &'static MigrationPathInfo {
    return match path {
        MigrationPathId::AngularjsAngular => &ANGULARJS_ANGULAR,
        MigrationPathId::Es5Es6 => &ES5_ES6,
        MigrationPathId::JqueryReact => &JQUERY_REACT,
        MigrationPathId::JqueryVue => &JQUERY_VUE,
        MigrationPathId::Python2Python3 => &PYTHON2_PYTHON3,
        MigrationPathId::ReactClassHooks => &REACT_CLASS_HOOKS,
    };
}

/// Paths suggested for code written with `framework`. Empty when the
/// framework is already a migration target.
pub const fn recommended(framework: Framework) -> &'static [MigrationPathId] {
    return match framework {
        Framework::AngularJs => &[MigrationPathId::AngularjsAngular],
        Framework::JQuery => &[MigrationPathId::JqueryReact, MigrationPathId::JqueryVue],
        Framework::ReactClass => &[MigrationPathId::ReactClassHooks],
        Framework::Angular | Framework::ReactHooks | Framework::Vue3 => &[],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_path_once() {
        for path in MigrationPathId::ALL {
            let count = CATALOG.iter().filter(|e| e.id == path).count();
            assert_eq!(count, 1, "{path} listed {count} times");
            assert_eq!(info(path).id, path);
        }
    }

    #[test]
    fn jquery_recommends_both_frontends() {
        assert_eq!(
            recommended(Framework::JQuery),
            &[MigrationPathId::JqueryReact, MigrationPathId::JqueryVue]
        );
        assert!(recommended(Framework::Vue3).is_empty());
    }
}
