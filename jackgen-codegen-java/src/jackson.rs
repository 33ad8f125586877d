//! Jackson naming policy and class annotations.
//!
//! Every identifier produced here is a fixed name: it reaches the output
//! exactly as built, with no case conversion, keyword escaping or
//! collision suffix.

use jackgen_codegen::{
    CodeBuilder, Name, RendererHooks,
    hooks::{DEFAULT_TOP_LEVEL_NAME, given_or_default},
};
use jackgen_core::capitalize;
use jackgen_graph::{ClassProperty, ClassType, TypeGraph, TypeNode};

/// Added to every class.
pub const IGNORE_UNKNOWN_ANNOTATION: &str = "@JsonIgnoreProperties(ignoreUnknown=true)";

/// Added to classes with at least one nullable property.
pub const NON_ABSENT_ANNOTATION: &str = "@JsonInclude(JsonInclude.Include.NON_ABSENT)";

/// Hooks producing kind-prefixed type names, verbatim property names and
/// Jackson class annotations.
///
/// ```
/// use jackgen_codegen::{Name, RendererHooks};
/// use jackgen_codegen_java::JacksonHooks;
/// use jackgen_graph::{TypeGraphBuilder, TypeNames};
///
/// let mut b = TypeGraphBuilder::new();
/// let slot = b.reserve_class(TypeNames::new("Person"));
/// let person = b.define_class(slot, []);
/// let graph = b.finish();
///
/// assert_eq!(
///     JacksonHooks.name_for_named_type(graph.node(person)),
///     Name::fixed("Class_Person")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacksonHooks;

fn kind_prefixed(node: &TypeNode, label: &str) -> Name {
    Name::fixed(format!("{}_{}", capitalize(node.kind().as_str()), label))
}

impl RendererHooks for JacksonHooks {
    fn name_for_named_type(&self, node: &TypeNode) -> Name {
        kind_prefixed(node, node.combined_name().unwrap_or(DEFAULT_TOP_LEVEL_NAME))
    }

    fn name_for_top_level(
        &self,
        node: &TypeNode,
        given_name: &str,
        named_type: Option<&TypeNode>,
    ) -> Name {
        match named_type {
            Some(named) => self.name_for_named_type(named),
            None => kind_prefixed(node, given_or_default(given_name)),
        }
    }

    fn name_for_property(
        &self,
        _class: &ClassType,
        _class_name: &str,
        _property: &ClassProperty,
        json_name: &str,
    ) -> Name {
        Name::fixed(json_name)
    }

    fn names_for_property_accessors(
        &self,
        _class: &ClassType,
        _class_name: &str,
        _property: &ClassProperty,
        json_name: &str,
        _property_name: &Name,
    ) -> (Name, Name) {
        (
            Name::fixed(format!("get_{}", json_name)),
            Name::fixed(format!("set_{}", json_name)),
        )
    }

    fn emit_class_attributes(
        &self,
        graph: &TypeGraph,
        class: &ClassType,
        class_name: &str,
        out: &mut CodeBuilder,
    ) {
        out.push_line(IGNORE_UNKNOWN_ANNOTATION);
        let has_nullable = class.properties().any(|(_, p)| graph.is_nullable(p.ty));
        if has_nullable {
            out.push_line(NON_ABSENT_ANNOTATION);
        }
        tracing::debug!(class = class_name, has_nullable, "injected class annotations");
    }
}
