//! Type graph for the jackgen code generator.
//!
//! The graph is the hand-off point between schema loading and rendering:
//!
//! ```text
//! JSON Schema → jackgen-schema (loading) → jackgen-graph (type graph) → codegen
//! ```
//!
//! Nodes live in an arena addressed by [`TypeId`]. A graph is assembled with
//! [`TypeGraphBuilder`] and is read-only once [`TypeGraphBuilder::finish`]
//! returns. The types here carry no knowledge of any output language.

mod builder;
mod graph;
mod types;

pub use builder::{ClassSlot, TypeGraphBuilder};
pub use graph::TypeGraph;
pub use types::{
    ClassProperty, ClassType, EnumType, Type, TypeId, TypeKind, TypeNames, TypeNode, UnionType,
};
