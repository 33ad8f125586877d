//! Read-only type graph.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{ClassType, Type, TypeId, TypeKind, TypeNode};

/// An immutable set of type nodes plus the ordered top-level roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeGraph {
    pub(crate) nodes: Vec<TypeNode>,
    pub(crate) top_levels: IndexMap<String, TypeId>,
}

impl TypeGraph {
    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by the builder of this graph.
    pub fn node(&self, id: TypeId) -> &TypeNode {
        &self.nodes[id.index()]
    }

    /// Look up a node, returning `None` for a foreign id.
    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level roots as `(given_name, type)` pairs in declaration order.
    pub fn top_levels(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.top_levels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns true if the type admits an explicit null.
    ///
    /// `null` and `any` are nullable; a union is nullable if any member is.
    pub fn is_nullable(&self, id: TypeId) -> bool {
        match &self.node(id).ty {
            Type::Null | Type::Any => true,
            Type::Union(u) => u.members.iter().any(|m| self.is_nullable(*m)),
            _ => false,
        }
    }

    /// Members of a union other than `null`.
    pub fn non_null_members(&self, id: TypeId) -> Vec<TypeId> {
        match &self.node(id).ty {
            Type::Union(u) => u
                .members
                .iter()
                .copied()
                .filter(|m| self.node(*m).kind() != TypeKind::Null)
                .collect(),
            _ => vec![id],
        }
    }

    /// For a union of exactly one type and `null`, the non-null member.
    pub fn nullable_inner(&self, id: TypeId) -> Option<TypeId> {
        let node = self.node(id);
        let union = node.as_union()?;
        let non_null = self.non_null_members(id);
        if non_null.len() == 1 && non_null.len() < union.members.len() {
            Some(non_null[0])
        } else {
            None
        }
    }

    /// Returns true if the node needs its own declaration (and thus a name).
    ///
    /// Classes and enums are always named. Unions are named unless they are
    /// a plain nullable wrapper around a single type.
    pub fn is_named(&self, id: TypeId) -> bool {
        match self.node(id).kind() {
            TypeKind::Class | TypeKind::Enum => true,
            TypeKind::Union => self.nullable_inner(id).is_none(),
            _ => false,
        }
    }

    /// Named nodes in creation order.
    pub fn named_types(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.iter().filter(|n| self.is_named(n.id))
    }

    /// The named node a top-level resolves to, if any.
    ///
    /// A nullable wrapper resolves to its inner type.
    pub fn resolve_named(&self, id: TypeId) -> Option<&TypeNode> {
        if self.is_named(id) {
            return Some(self.node(id));
        }
        let inner = self.nullable_inner(id)?;
        self.is_named(inner).then(|| self.node(inner))
    }

    /// Classes in creation order.
    pub fn classes(&self) -> impl Iterator<Item = (&TypeNode, &ClassType)> {
        self.nodes.iter().filter_map(|n| n.as_class().map(|c| (n, c)))
    }
}
