//! Node definitions.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Index of a node inside a [`crate::TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Position of the node in the graph arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array,
    Map,
    Class,
    Enum,
    Union,
}

impl TypeKind {
    /// Lowercase kind name (e.g., "class", "integer").
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Any => "any",
            TypeKind::Null => "null",
            TypeKind::Bool => "bool",
            TypeKind::Integer => "integer",
            TypeKind::Double => "double",
            TypeKind::String => "string",
            TypeKind::Array => "array",
            TypeKind::Map => "map",
            TypeKind::Class => "class",
            TypeKind::Enum => "enum",
            TypeKind::Union => "union",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable naming hints attached to composite nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNames {
    /// Name unique among nodes of the same kind (e.g., "Person").
    pub combined: String,
    /// Free-form description carried over from the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeNames {
    pub fn new(combined: impl Into<String>) -> Self {
        Self {
            combined: combined.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// A property of a class, keyed by its source field name in [`ClassType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassProperty {
    /// Declared type of the property.
    pub ty: TypeId,
    /// The field may be absent from input (not listed as required).
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassProperty {
    pub fn new(ty: TypeId) -> Self {
        Self {
            ty,
            optional: false,
            description: None,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Object type with properties in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassType {
    pub properties: IndexMap<String, ClassProperty>,
}

impl ClassType {
    /// Iterate over `(json_name, property)` pairs in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &ClassProperty)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn property(&self, json_name: &str) -> Option<&ClassProperty> {
        self.properties.get(json_name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// String enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnumType {
    pub cases: IndexSet<String>,
}

/// Union of member types, flattened and deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnionType {
    pub members: Vec<TypeId>,
}

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Type {
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array { items: TypeId },
    Map { values: TypeId },
    Class(ClassType),
    Enum(EnumType),
    Union(UnionType),
}

impl Type {
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Any => TypeKind::Any,
            Type::Null => TypeKind::Null,
            Type::Bool => TypeKind::Bool,
            Type::Integer => TypeKind::Integer,
            Type::Double => TypeKind::Double,
            Type::String => TypeKind::String,
            Type::Array { .. } => TypeKind::Array,
            Type::Map { .. } => TypeKind::Map,
            Type::Class(_) => TypeKind::Class,
            Type::Enum(_) => TypeKind::Enum,
            Type::Union(_) => TypeKind::Union,
        }
    }

    /// Primitive payload for a primitive kind.
    pub(crate) fn primitive(kind: TypeKind) -> Option<Self> {
        Some(match kind {
            TypeKind::Any => Type::Any,
            TypeKind::Null => Type::Null,
            TypeKind::Bool => Type::Bool,
            TypeKind::Integer => Type::Integer,
            TypeKind::Double => Type::Double,
            TypeKind::String => Type::String,
            _ => return None,
        })
    }
}

/// A node in the type graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNode {
    pub id: TypeId,
    #[serde(flatten)]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<TypeNames>,
}

impl TypeNode {
    pub fn kind(&self) -> TypeKind {
        self.ty.kind()
    }

    /// The combined name, if the node carries naming hints.
    pub fn combined_name(&self) -> Option<&str> {
        self.names.as_ref().map(|n| n.combined.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.names.as_ref().and_then(|n| n.description.as_deref())
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match &self.ty {
            Type::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match &self.ty {
            Type::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match &self.ty {
            Type::Union(u) => Some(u),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(TypeKind::Class.as_str(), "class");
        assert_eq!(TypeKind::Integer.as_str(), "integer");
        assert_eq!(TypeKind::Union.to_string(), "union");
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(Type::primitive(TypeKind::Bool), Some(Type::Bool));
        assert_eq!(Type::primitive(TypeKind::Map), None);
    }
}
