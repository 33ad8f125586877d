//! Incremental construction of a [`TypeGraph`].

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};

use crate::{
    ClassProperty, ClassType, EnumType, Type, TypeGraph, TypeId, TypeKind, TypeNames, TypeNode,
    UnionType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InternKey {
    Primitive(TypeKind),
    Array(TypeId),
    Map(TypeId),
}

/// A class node that has been allocated but not yet given properties.
///
/// Reserving first lets a class refer to itself through its properties.
#[derive(Debug)]
pub struct ClassSlot(TypeId);

impl ClassSlot {
    /// The id the class will have once defined.
    pub fn id(&self) -> TypeId {
        self.0
    }
}

/// Builds a type graph.
///
/// Primitive, array and map nodes are interned so that structurally equal
/// leaves share one id. Combined names of named kinds are made unique per
/// kind by appending a numeric suffix.
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    nodes: Vec<TypeNode>,
    top_levels: IndexMap<String, TypeId>,
    interned: HashMap<InternKey, TypeId>,
    taken_names: HashSet<(TypeKind, String)>,
}

impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a primitive node.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not a primitive kind.
    pub fn primitive(&mut self, kind: TypeKind) -> TypeId {
        let ty = Type::primitive(kind)
            .unwrap_or_else(|| panic!("'{}' is not a primitive kind", kind));
        self.intern(InternKey::Primitive(kind), ty)
    }

    /// Intern an array of `items`.
    pub fn array(&mut self, items: TypeId) -> TypeId {
        self.intern(InternKey::Array(items), Type::Array { items })
    }

    /// Intern a string-keyed map of `values`.
    pub fn map(&mut self, values: TypeId) -> TypeId {
        self.intern(InternKey::Map(values), Type::Map { values })
    }

    /// Allocate a class node with no properties yet.
    pub fn reserve_class(&mut self, names: TypeNames) -> ClassSlot {
        let names = self.unique(TypeKind::Class, names);
        ClassSlot(self.push(Type::Class(ClassType::default()), Some(names)))
    }

    /// Fill in the properties of a reserved class.
    ///
    /// Later duplicates of a property name replace the earlier type but keep
    /// the original position.
    pub fn define_class(
        &mut self,
        slot: ClassSlot,
        properties: impl IntoIterator<Item = (String, ClassProperty)>,
    ) -> TypeId {
        let id = slot.0;
        let class = ClassType {
            properties: properties.into_iter().collect(),
        };
        self.nodes[id.index()].ty = Type::Class(class);
        id
    }

    /// Add a string enumeration. Duplicate cases are dropped.
    pub fn enumeration(
        &mut self,
        cases: impl IntoIterator<Item = impl Into<String>>,
        names: TypeNames,
    ) -> TypeId {
        let cases: IndexSet<String> = cases.into_iter().map(Into::into).collect();
        let names = self.unique(TypeKind::Enum, names);
        self.push(Type::Enum(EnumType { cases }), Some(names))
    }

    /// Add a union of `members`.
    ///
    /// Nested unions are flattened and duplicates removed. A single
    /// remaining member is returned as-is; no members yields `any`.
    pub fn union(&mut self, members: impl IntoIterator<Item = TypeId>, names: TypeNames) -> TypeId {
        let mut flat: IndexSet<TypeId> = IndexSet::new();
        for member in members {
            match &self.nodes[member.index()].ty {
                Type::Union(u) => flat.extend(u.members.iter().copied()),
                _ => {
                    flat.insert(member);
                }
            }
        }

        match flat.len() {
            0 => return self.primitive(TypeKind::Any),
            1 => return flat[0],
            _ => {}
        }

        let non_null = flat
            .iter()
            .filter(|m| self.nodes[m.index()].kind() != TypeKind::Null)
            .count();
        // A nullable wrapper never gets its own declaration, so it does not
        // claim a name in the union namespace.
        let names = if non_null == 1 {
            names
        } else {
            self.unique(TypeKind::Union, names)
        };

        self.push(
            Type::Union(UnionType {
                members: flat.into_iter().collect(),
            }),
            Some(names),
        )
    }

    /// Register a top-level root. Re-registering a name replaces its type.
    pub fn add_top_level(&mut self, name: impl Into<String>, ty: TypeId) {
        self.top_levels.insert(name.into(), ty);
    }

    pub fn node(&self, id: TypeId) -> &TypeNode {
        &self.nodes[id.index()]
    }

    /// Freeze the graph.
    pub fn finish(self) -> TypeGraph {
        TypeGraph {
            nodes: self.nodes,
            top_levels: self.top_levels,
        }
    }

    fn intern(&mut self, key: InternKey, ty: Type) -> TypeId {
        if let Some(id) = self.interned.get(&key) {
            return *id;
        }
        let id = self.push(ty, None);
        self.interned.insert(key, id);
        id
    }

    fn push(&mut self, ty: Type, names: Option<TypeNames>) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        self.nodes.push(TypeNode { id, ty, names });
        id
    }

    fn unique(&mut self, kind: TypeKind, mut names: TypeNames) -> TypeNames {
        let base = names.combined.clone();
        let mut candidate = base.clone();
        let mut n = 2;
        while !self.taken_names.insert((kind, candidate.clone())) {
            candidate = format!("{}{}", base, n);
            n += 1;
        }
        names.combined = candidate;
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_interned() {
        let mut b = TypeGraphBuilder::new();
        let a = b.primitive(TypeKind::String);
        let c = b.primitive(TypeKind::String);
        let arr1 = b.array(a);
        let arr2 = b.array(c);
        assert_eq!(a, c);
        assert_eq!(arr1, arr2);
        assert_eq!(b.finish().len(), 2);
    }

    #[test]
    #[should_panic(expected = "not a primitive kind")]
    fn test_primitive_rejects_composite_kind() {
        TypeGraphBuilder::new().primitive(TypeKind::Class);
    }

    #[test]
    fn test_combined_names_unique_per_kind() {
        let mut b = TypeGraphBuilder::new();
        let first = b.reserve_class(TypeNames::new("Person"));
        let second = b.reserve_class(TypeNames::new("Person"));
        let third = b.reserve_class(TypeNames::new("Person"));
        let e = b.enumeration(["a"], TypeNames::new("Person"));
        let (first, second, third) = (first.id(), second.id(), third.id());
        let graph = b.finish();

        assert_eq!(graph.node(first).combined_name(), Some("Person"));
        assert_eq!(graph.node(second).combined_name(), Some("Person2"));
        assert_eq!(graph.node(third).combined_name(), Some("Person3"));
        // Different kind, separate namespace
        assert_eq!(graph.node(e).combined_name(), Some("Person"));
    }

    #[test]
    fn test_union_flattens_and_dedupes() {
        let mut b = TypeGraphBuilder::new();
        let s = b.primitive(TypeKind::String);
        let i = b.primitive(TypeKind::Integer);
        let d = b.primitive(TypeKind::Double);
        let inner = b.union([s, i], TypeNames::new("Inner"));
        let outer = b.union([inner, s, d], TypeNames::new("Outer"));
        let graph = b.finish();

        assert_eq!(graph.node(outer).as_union().unwrap().members, vec![s, i, d]);
    }

    #[test]
    fn test_union_of_one_collapses() {
        let mut b = TypeGraphBuilder::new();
        let s = b.primitive(TypeKind::String);
        assert_eq!(b.union([s, s], TypeNames::new("X")), s);
        let any = b.union([], TypeNames::new("Y"));
        assert_eq!(b.node(any).kind(), TypeKind::Any);
    }

    #[test]
    fn test_nullable_wrapper_does_not_claim_name() {
        let mut b = TypeGraphBuilder::new();
        let s = b.primitive(TypeKind::String);
        let i = b.primitive(TypeKind::Integer);
        let null = b.primitive(TypeKind::Null);
        let _wrapper = b.union([s, null], TypeNames::new("Value"));
        let real = b.union([s, i], TypeNames::new("Value"));
        assert_eq!(b.node(real).combined_name(), Some("Value"));
    }

    #[test]
    fn test_self_referencing_class() {
        let mut b = TypeGraphBuilder::new();
        let slot = b.reserve_class(TypeNames::new("Node"));
        let children = b.array(slot.id());
        let id = b.define_class(slot, [("children".to_string(), ClassProperty::new(children))]);
        let graph = b.finish();

        let class = graph.node(id).as_class().unwrap();
        assert_eq!(class.property("children").unwrap().ty, children);
    }
}
