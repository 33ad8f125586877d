//! Pluggable renderer hooks.
//!
//! A renderer asks its hooks for every identifier it binds and lets them
//! append class annotations after its own. Each method has a default, so an
//! implementation overrides only the hooks it cares about.

use jackgen_graph::{ClassProperty, ClassType, TypeGraph, TypeNode};

use crate::{CodeBuilder, Name, NameStyle};

/// Label used for a top-level root when the caller gives none.
pub const DEFAULT_TOP_LEVEL_NAME: &str = "TopLevel";

/// The caller-given top-level name, or [`DEFAULT_TOP_LEVEL_NAME`] if empty.
pub fn given_or_default(given_name: &str) -> &str {
    if given_name.is_empty() {
        DEFAULT_TOP_LEVEL_NAME
    } else {
        given_name
    }
}

/// Customization points of a renderer.
///
/// Defaults produce derived names that the host styles with its naming
/// convention and deduplicates, and emit no extra class annotations.
pub trait RendererHooks {
    /// Name for a class, enum or union declaration.
    fn name_for_named_type(&self, node: &TypeNode) -> Name {
        let proposal = node.combined_name().unwrap_or(DEFAULT_TOP_LEVEL_NAME);
        Name::derived(NameStyle::Type, proposal)
    }

    /// Name for a top-level root.
    ///
    /// `named_type` is the declaration the root resolves to, if any; the
    /// root then shares that declaration's name.
    fn name_for_top_level(
        &self,
        node: &TypeNode,
        given_name: &str,
        named_type: Option<&TypeNode>,
    ) -> Name {
        let _ = node;
        match named_type {
            Some(named) => self.name_for_named_type(named),
            None => Name::derived(NameStyle::Type, given_or_default(given_name)),
        }
    }

    /// Name for the field backing a class property.
    fn name_for_property(
        &self,
        class: &ClassType,
        class_name: &str,
        property: &ClassProperty,
        json_name: &str,
    ) -> Name {
        let _ = (class, class_name, property);
        Name::derived(NameStyle::Member, json_name)
    }

    /// Getter and setter names for a class property.
    fn names_for_property_accessors(
        &self,
        class: &ClassType,
        class_name: &str,
        property: &ClassProperty,
        json_name: &str,
        property_name: &Name,
    ) -> (Name, Name) {
        let _ = (class, class_name, property, property_name);
        (
            Name::derived(NameStyle::Member, format!("get_{}", json_name)),
            Name::derived(NameStyle::Member, format!("set_{}", json_name)),
        )
    }

    /// Append annotations for a class after the host's own annotations and
    /// before the declaration line.
    fn emit_class_attributes(
        &self,
        graph: &TypeGraph,
        class: &ClassType,
        class_name: &str,
        out: &mut CodeBuilder,
    ) {
        let _ = (graph, class, class_name, out);
    }
}

/// Host behaviour with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl RendererHooks for DefaultHooks {}

#[cfg(test)]
mod tests {
    use jackgen_graph::{TypeGraphBuilder, TypeKind, TypeNames};

    use super::*;

    #[test]
    fn test_default_named_type_is_derived_from_combined_name() {
        let mut b = TypeGraphBuilder::new();
        let slot = b.reserve_class(TypeNames::new("Person"));
        let id = b.define_class(slot, []);
        let graph = b.finish();

        let name = DefaultHooks.name_for_named_type(graph.node(id));
        assert_eq!(name, Name::derived(NameStyle::Type, "Person"));
    }

    #[test]
    fn test_default_top_level_falls_back_to_label() {
        let mut b = TypeGraphBuilder::new();
        let s = b.primitive(TypeKind::String);
        let graph = b.finish();

        let name = DefaultHooks.name_for_top_level(graph.node(s), "", None);
        assert_eq!(name, Name::derived(NameStyle::Type, "TopLevel"));
    }

    #[test]
    fn test_default_accessors() {
        let class = ClassType::default();
        let mut b = TypeGraphBuilder::new();
        let prop = ClassProperty::new(b.primitive(TypeKind::String));
        let property_name = DefaultHooks.name_for_property(&class, "Person", &prop, "first_name");
        let (getter, setter) = DefaultHooks.names_for_property_accessors(
            &class,
            "Person",
            &prop,
            "first_name",
            &property_name,
        );
        assert_eq!(property_name, Name::derived(NameStyle::Member, "first_name"));
        assert_eq!(getter, Name::derived(NameStyle::Member, "get_first_name"));
        assert_eq!(setter, Name::derived(NameStyle::Member, "set_first_name"));
    }

    #[test]
    fn test_default_emits_no_attributes() {
        let graph = TypeGraphBuilder::new().finish();
        let mut out = CodeBuilder::java();
        DefaultHooks.emit_class_attributes(&graph, &ClassType::default(), "Person", &mut out);
        assert!(out.lines().is_empty());
    }
}
