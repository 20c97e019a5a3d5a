//! Supported-language catalog.
//!
//! The driver does not parse source code itself; it only needs to know which
//! languages the analysis engine behind it supports so the usage text can list
//! them. This module provides a read-only, ordered view over that registry.

use serde::Serialize;

/// Metadata for one supported source language.
///
/// Only the terse name is consumed by the driver; everything else about a
/// language (parser, versions, file extensions) lives in the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// The short identifier used to reference the language, e.g. `java`.
    pub terse_name: String,
}

impl LanguageDescriptor {
    /// Creates a descriptor for the given terse name.
    pub fn new(terse_name: impl Into<String>) -> Self {
        Self {
            terse_name: terse_name.into(),
        }
    }
}

/// An ordered, read-only registry of supported languages.
///
/// Iteration order is declaration order and is stable for the lifetime of the
/// registry; the usage text depends on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageRegistry {
    /// Creates a registry from an ordered list of descriptors.
    pub fn new(languages: Vec<LanguageDescriptor>) -> Self {
        Self { languages }
    }

    /// Returns the registry of languages shipped with this build.
    pub fn builtin() -> Self {
        Self::new(vec![
            LanguageDescriptor::new("java"),
            LanguageDescriptor::new("ecmascript"),
            LanguageDescriptor::new("jsp"),
            LanguageDescriptor::new("plsql"),
            LanguageDescriptor::new("xml"),
        ])
    }

    /// Iterates over the descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter()
    }

    /// Returns the number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` when no languages are registered.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_not_empty() {
        let registry = LanguageRegistry::builtin();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), registry.iter().count());
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let registry = LanguageRegistry::new(vec![
            LanguageDescriptor::new("zeta"),
            LanguageDescriptor::new("alpha"),
            LanguageDescriptor::new("mid"),
        ]);
        let names: Vec<&str> = registry.iter().map(|l| l.terse_name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_registry_is_empty() {
        let registry = LanguageRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
