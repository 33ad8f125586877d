//! Per-pass name bindings.

use indexmap::{IndexMap, IndexSet};
use jackgen_graph::{TypeGraph, TypeId};

use super::{Name, NameStyle, Namer, NamingConvention};
use crate::RendererHooks;

/// Identifiers bound to one class property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberNames {
    pub property: String,
    pub getter: String,
    pub setter: String,
}

/// Every identifier bound during one render pass.
///
/// Built once by [`NameBindings::bind`] and discarded with the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBindings {
    types: IndexMap<TypeId, String>,
    top_levels: IndexMap<String, String>,
    members: IndexMap<TypeId, IndexMap<String, MemberNames>>,
    enum_cases: IndexMap<TypeId, IndexMap<String, String>>,
    union_members: IndexMap<TypeId, IndexMap<TypeId, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GlobalKey<'a> {
    Type(TypeId),
    TopLevel(&'a str),
}

impl NameBindings {
    /// Bind every name the graph needs.
    ///
    /// Type names share one global namespace seeded with `reserved`.
    /// Members, enum cases and union fields each get a namespace per
    /// declaration. Requests are made in a fixed order (top-levels, then
    /// named types, then members), so the result is reproducible.
    pub fn bind<H>(
        graph: &TypeGraph,
        hooks: &H,
        convention: &NamingConvention,
        reserved: &[&str],
    ) -> Self
    where
        H: RendererHooks + ?Sized,
    {
        let mut bindings = Self::default();

        // Global namespace: declarations and top-levels
        let mut keys: IndexSet<GlobalKey<'_>> = IndexSet::new();
        let mut requests: Vec<Name> = Vec::new();

        for (given, ty) in graph.top_levels() {
            let named = graph.resolve_named(ty);
            let name = hooks.name_for_top_level(graph.node(ty), given, named);
            let key = match named {
                Some(named) => GlobalKey::Type(named.id),
                None => GlobalKey::TopLevel(given),
            };
            if keys.insert(key) {
                requests.push(name);
            }
        }

        for node in graph.named_types() {
            if keys.insert(GlobalKey::Type(node.id)) {
                requests.push(hooks.name_for_named_type(node));
            }
        }

        let mut global = Namer::new();
        global.reserve(reserved.iter().copied());
        let assigned = global.assign_all(&requests, convention);

        let mut roots: IndexMap<&str, String> = IndexMap::new();
        for (key, name) in keys.into_iter().zip(assigned) {
            match key {
                GlobalKey::Type(id) => {
                    tracing::debug!(ty = %id, %name, "bound type name");
                    bindings.types.insert(id, name);
                }
                GlobalKey::TopLevel(given) => {
                    tracing::debug!(top_level = given, %name, "bound top-level name");
                    roots.insert(given, name);
                }
            }
        }

        // A root resolving to a declaration shares the declaration's name
        for (given, ty) in graph.top_levels() {
            let name = match graph.resolve_named(ty) {
                Some(named) => bindings.types.get(&named.id).cloned(),
                None => roots.get(given).cloned(),
            };
            if let Some(name) = name {
                bindings.top_levels.insert(given.to_string(), name);
            }
        }

        bindings.bind_members(graph, hooks, convention);
        bindings.bind_enum_cases(graph, convention);
        bindings.bind_union_members(graph, convention);
        bindings
    }

    fn bind_members<H>(&mut self, graph: &TypeGraph, hooks: &H, convention: &NamingConvention)
    where
        H: RendererHooks + ?Sized,
    {
        for (node, class) in graph.classes() {
            let Some(class_name) = self.types.get(&node.id) else {
                continue;
            };

            let mut requests = Vec::with_capacity(class.len() * 3);
            for (json_name, property) in class.properties() {
                let property_name = hooks.name_for_property(class, class_name, property, json_name);
                let (getter, setter) = hooks.names_for_property_accessors(
                    class,
                    class_name,
                    property,
                    json_name,
                    &property_name,
                );
                requests.extend([property_name, getter, setter]);
            }

            let assigned = Namer::new().assign_all(&requests, convention);
            let members: IndexMap<String, MemberNames> = class
                .properties()
                .zip(assigned.chunks_exact(3))
                .map(|((json_name, _), names)| {
                    (
                        json_name.to_string(),
                        MemberNames {
                            property: names[0].clone(),
                            getter: names[1].clone(),
                            setter: names[2].clone(),
                        },
                    )
                })
                .collect();
            self.members.insert(node.id, members);
        }
    }

    fn bind_enum_cases(&mut self, graph: &TypeGraph, convention: &NamingConvention) {
        for node in graph.named_types() {
            let Some(e) = node.as_enum() else {
                continue;
            };
            let requests: Vec<Name> = e
                .cases
                .iter()
                .map(|case| Name::derived(NameStyle::EnumCase, case.as_str()))
                .collect();
            let assigned = Namer::new().assign_all(&requests, convention);
            let cases = e.cases.iter().cloned().zip(assigned).collect();
            self.enum_cases.insert(node.id, cases);
        }
    }

    fn bind_union_members(&mut self, graph: &TypeGraph, convention: &NamingConvention) {
        for node in graph.named_types() {
            if node.as_union().is_none() {
                continue;
            }
            let members = graph.non_null_members(node.id);
            let requests: Vec<Name> = members
                .iter()
                .map(|m| {
                    let member = graph.node(*m);
                    let base = match member.combined_name() {
                        Some(name) if graph.is_named(*m) => name,
                        _ => member.kind().as_str(),
                    };
                    Name::derived(NameStyle::Member, format!("{}_value", base))
                })
                .collect();
            let assigned = Namer::new().assign_all(&requests, convention);
            self.union_members
                .insert(node.id, members.into_iter().zip(assigned).collect());
        }
    }

    /// Name bound to a declaration.
    pub fn type_name(&self, id: TypeId) -> Option<&str> {
        self.types.get(&id).map(String::as_str)
    }

    /// Name bound to a top-level root.
    pub fn top_level_name(&self, given_name: &str) -> Option<&str> {
        self.top_levels.get(given_name).map(String::as_str)
    }

    /// Top-level names in declaration order.
    pub fn top_levels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.top_levels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names bound to a class property.
    pub fn member(&self, class: TypeId, json_name: &str) -> Option<&MemberNames> {
        self.members.get(&class)?.get(json_name)
    }

    /// Constant name bound to an enum case.
    pub fn enum_case(&self, enumeration: TypeId, case: &str) -> Option<&str> {
        self.enum_cases
            .get(&enumeration)?
            .get(case)
            .map(String::as_str)
    }

    /// Field name bound to a union member.
    pub fn union_member(&self, union: TypeId, member: TypeId) -> Option<&str> {
        self.union_members
            .get(&union)?
            .get(&member)
            .map(String::as_str)
    }
}
