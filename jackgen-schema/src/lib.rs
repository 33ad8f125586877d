//! JSON Schema loading for jackgen.
//!
//! Turns one or more JSON Schema documents into a [`TypeGraph`]. Each
//! source becomes a top-level root named after the source. Failures are
//! reported as [`miette`] diagnostics pointing into the schema text.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod loader;
mod source;

pub use error::{Error, Result, SourceContext};
pub use jackgen_graph::TypeGraph;
pub use loader::{load, load_str};
pub use source::SchemaSource;
