//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Packages keep insertion order; symbols within a package are sorted, so
/// output is deterministic.
///
/// # Example
///
/// ```
/// use jackgen_codegen::builder::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_wildcard("com.fasterxml.jackson.annotation");
/// imports.add("java.util", "Map");
/// imports.add("java.util", "List");
///
/// assert_eq!(
///     imports.java_lines(),
///     vec![
///         "import com.fasterxml.jackson.annotation.*;",
///         "import java.util.List;",
///         "import java.util.Map;",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols; an empty set means a wildcard import
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        match self.imports.get_mut(package) {
            // Already covered by a wildcard
            Some(symbols) if symbols.is_empty() => {}
            Some(symbols) => {
                symbols.insert(symbol.to_string());
            }
            None => {
                self.imports
                    .insert(package.to_string(), BTreeSet::from([symbol.to_string()]));
            }
        }
    }

    /// Import everything from a package.
    pub fn add_wildcard(&mut self, package: &str) {
        self.imports.insert(package.to_string(), BTreeSet::new());
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Render as Java `import` statements.
    pub fn java_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (package, symbols) in &self.imports {
            if symbols.is_empty() {
                lines.push(format!("import {}.*;", package));
            } else {
                for symbol in symbols {
                    lines.push(format!("import {}.{};", package, symbol));
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupes_symbols() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add("java.util", "List");
        assert_eq!(imports.java_lines(), vec!["import java.util.List;"]);
    }

    #[test]
    fn test_wildcard_covers_symbols() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add_wildcard("java.util");
        imports.add("java.util", "Map");
        assert_eq!(imports.java_lines(), vec!["import java.util.*;"]);
    }

    #[test]
    fn test_packages_keep_insertion_order() {
        let mut imports = ImportCollector::new();
        assert!(imports.is_empty());
        imports.add("java.util", "Map");
        imports.add_wildcard("java.io");
        imports.add("java.util", "List");

        assert!(!imports.is_empty());
        assert_eq!(
            imports.java_lines(),
            vec!["import java.util.List;", "import java.util.Map;", "import java.io.*;"]
        );
    }
}
