//! Java type mapper.

use eyre::{Result, eyre};
use jackgen_codegen::{ImportCollector, NameBindings};
use jackgen_graph::{ClassProperty, Type, TypeGraph, TypeId};

/// Maps graph types to Java type syntax, recording the imports they need.
#[derive(Debug, Clone, Copy)]
pub struct JavaTypeMapper<'a> {
    graph: &'a TypeGraph,
    bindings: &'a NameBindings,
}

impl<'a> JavaTypeMapper<'a> {
    pub fn new(graph: &'a TypeGraph, bindings: &'a NameBindings) -> Self {
        Self { graph, bindings }
    }

    /// Java type of a class property.
    ///
    /// Primitives are used only for required, non-nullable properties.
    pub fn property_type(
        &self,
        property: &ClassProperty,
        imports: &mut ImportCollector,
    ) -> Result<String> {
        let boxed = property.optional || self.graph.is_nullable(property.ty);
        self.java_type(property.ty, boxed, imports)
    }

    /// Java type of `id`, boxed when `boxed` is set.
    pub fn java_type(
        &self,
        id: TypeId,
        boxed: bool,
        imports: &mut ImportCollector,
    ) -> Result<String> {
        let node = self
            .graph
            .get(id)
            .ok_or_else(|| eyre!("type {} is not part of the graph", id))?;

        let java = match &node.ty {
            Type::Any | Type::Null => "Object".to_string(),
            Type::Bool => primitive(boxed, "Boolean", "boolean"),
            Type::Integer => primitive(boxed, "Long", "long"),
            Type::Double => primitive(boxed, "Double", "double"),
            Type::String => "String".to_string(),
            Type::Array { items } => {
                imports.add("java.util", "List");
                format!("List<{}>", self.java_type(*items, true, imports)?)
            }
            Type::Map { values } => {
                imports.add("java.util", "Map");
                format!("Map<String, {}>", self.java_type(*values, true, imports)?)
            }
            Type::Class(_) | Type::Enum(_) | Type::Union(_) => {
                if let Some(inner) = self.graph.nullable_inner(id) {
                    return self.java_type(inner, true, imports);
                }
                self.bindings
                    .type_name(id)
                    .ok_or_else(|| eyre!("type {} has no bound name", id))?
                    .to_string()
            }
        };
        Ok(java)
    }

    /// Expression handing the type to Jackson: `X.class`, or a
    /// `TypeReference` for generic types.
    pub fn type_token(&self, java_type: &str, imports: &mut ImportCollector) -> String {
        if java_type.contains('<') {
            imports.add("com.fasterxml.jackson.core.type", "TypeReference");
            format!("new TypeReference<{}>() {{}}", java_type)
        } else {
            format!("{}.class", java_type)
        }
    }
}

fn primitive(boxed: bool, boxed_name: &str, name: &str) -> String {
    if boxed { boxed_name } else { name }.to_string()
}
