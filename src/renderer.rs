//! Output-renderer catalog.
//!
//! Renderers are external to the driver: they live in the reporting layer of
//! the engine and produce the actual report formats. The driver only consumes
//! their declared metadata (name, description, configurable properties) to
//! assemble usage text. This module provides that read-only view.
//!
//! A registry entry whose registered name differs from its display name is a
//! deprecated alias: its own description is never shown, only a notice
//! pointing at the renderer it aliases.

use serde::Serialize;

/// Metadata describing one configurable option of a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// The property name, as passed via `-property name=value`.
    pub name: String,
    /// Human-readable description of the property.
    pub description: String,
    /// The default value, if the renderer declares one. `None` means the
    /// property has no default at all, which is distinct from a default that
    /// happens to render as an empty or falsy string.
    pub default: Option<String>,
}

impl PropertyDescriptor {
    /// Creates a property descriptor with no default value.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: None,
        }
    }

    /// Creates a property descriptor with a default value.
    pub fn with_default(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: Some(default.into()),
        }
    }
}

/// Metadata for one registered output renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RendererDescriptor {
    /// The name the renderer is registered under and selected by (`-f name`).
    pub name: String,
    /// The renderer's own name. Equal to `name` for regular entries; different
    /// for deprecated aliases, where it names the renderer being aliased.
    pub display_name: String,
    /// Human-readable description of the output format.
    pub description: String,
    /// Configurable properties, in declaration order.
    pub properties: Vec<PropertyDescriptor>,
}

impl RendererDescriptor {
    /// Creates a regular renderer entry with no properties.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            description: description.into(),
            properties: Vec::new(),
        }
    }

    /// Creates a deprecated alias entry pointing at `target`.
    ///
    /// The description of an alias is never rendered, so none is taken here.
    pub fn alias(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: target.into(),
            description: String::new(),
            properties: Vec::new(),
        }
    }

    /// Appends a property descriptor, preserving declaration order.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Returns `true` when this entry is a deprecated alias for another
    /// renderer.
    pub fn is_alias(&self) -> bool {
        self.name != self.display_name
    }
}

/// An ordered, read-only registry of output renderers.
///
/// Iteration order is registration order and is stable for the lifetime of
/// the registry; the usage text depends on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RendererRegistry {
    renderers: Vec<RendererDescriptor>,
}

impl RendererRegistry {
    /// Creates a registry from an ordered list of descriptors.
    pub fn new(renderers: Vec<RendererDescriptor>) -> Self {
        Self { renderers }
    }

    /// Returns the registry of report formats shipped with this build.
    pub fn builtin() -> Self {
        Self::new(vec![
            RendererDescriptor::new("text", "A simple stream of text, one violation per line."),
            RendererDescriptor::new("xml", "An XML report.").with_property(
                PropertyDescriptor::with_default("encoding", "XML encoding format", "UTF-8"),
            ),
            RendererDescriptor::new("html", "An HTML report.")
                .with_property(PropertyDescriptor::new(
                    "linkPrefix",
                    "Path to HTML source where violation lines link to",
                ))
                .with_property(PropertyDescriptor::new(
                    "linePrefix",
                    "Prefix for line number anchor in the source file",
                )),
            RendererDescriptor::new(
                "csv",
                "Comma-separated values, tabular format suitable for spreadsheets.",
            ),
            RendererDescriptor::new("summaryhtml", "An HTML summary grouped by rule.")
                .with_property(PropertyDescriptor::new(
                    "linkPrefix",
                    "Path to HTML source where violation lines link to",
                )),
            RendererDescriptor::alias("betterhtml", "html"),
        ])
    }

    /// Iterates over the descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RendererDescriptor> {
        self.renderers.iter()
    }

    /// Returns the number of registered renderers, aliases included.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns `true` when no renderers are registered.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_entry_is_not_an_alias() {
        let renderer = RendererDescriptor::new("xml", "An XML report.");
        assert!(!renderer.is_alias());
        assert_eq!(renderer.name, renderer.display_name);
    }

    #[test]
    fn test_alias_entry_points_at_target() {
        let alias = RendererDescriptor::alias("betterhtml", "html");
        assert!(alias.is_alias());
        assert_eq!(alias.name, "betterhtml");
        assert_eq!(alias.display_name, "html");
    }

    #[test]
    fn test_with_property_preserves_declaration_order() {
        let renderer = RendererDescriptor::new("html", "An HTML report.")
            .with_property(PropertyDescriptor::new("first", "first property"))
            .with_property(PropertyDescriptor::new("second", "second property"));
        let names: Vec<&str> = renderer.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_absent_default_is_distinct_from_empty_default() {
        let without = PropertyDescriptor::new("a", "no default");
        let with_empty = PropertyDescriptor::with_default("b", "empty default", "");
        assert_eq!(without.default, None);
        assert_eq!(with_empty.default, Some(String::new()));
        assert_ne!(without.default, with_empty.default);
    }

    #[test]
    fn test_builtin_registry_contains_an_alias() {
        let registry = RendererRegistry::builtin();
        assert!(!registry.is_empty());
        assert!(
            registry.iter().any(RendererDescriptor::is_alias),
            "builtin registry should carry at least one deprecated alias"
        );
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let registry = RendererRegistry::new(vec![
            RendererDescriptor::new("b", "second alphabetically, first registered"),
            RendererDescriptor::new("a", "first alphabetically, second registered"),
        ]);
        let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
