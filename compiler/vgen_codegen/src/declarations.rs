//! One-shot global declarations.

use rustc_hash::FxHashSet;

/// Insertion-ordered declaration store; the first text defined for a key wins.
#[derive(Clone, Debug, Default)]
pub struct DeclarationRegistry {
    keys: FxHashSet<String>,
    entries: Vec<String>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `key` unless the key is already defined.
    ///
    /// Returns whether the text was stored.
    pub fn define(&mut self, key: &str, text: impl Into<String>) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        tracing::debug!(key, "defined declaration");
        self.keys.insert(key.to_string());
        self.entries.push(text.into());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Stored texts in insertion order.
    pub fn collect(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.keys.clear();
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_writer_wins() {
        let mut decls = DeclarationRegistry::new();
        assert!(decls.define("helper", "wire helper;"));
        assert!(!decls.define("helper", "reg helper;"));
        assert_eq!(decls.collect(), ["wire helper;".to_string()]);
    }

    #[test]
    fn test_insertion_order() {
        let mut decls = DeclarationRegistry::new();
        decls.define("b", "second");
        decls.define("a", "first");
        decls.define("b", "ignored");
        assert_eq!(decls.collect(), ["second".to_string(), "first".to_string()]);
        assert_eq!(decls.len(), 2);
        assert!(decls.contains("a"));
    }

    #[test]
    fn test_reset() {
        let mut decls = DeclarationRegistry::new();
        decls.define("a", "x");
        decls.reset();
        assert!(decls.is_empty());
        assert!(decls.define("a", "y"));
        assert_eq!(decls.collect(), ["y".to_string()]);
    }
}
