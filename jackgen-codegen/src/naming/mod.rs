//! Names and name resolution.
//!
//! - [`Name`] - A fixed or derived identifier request
//! - [`NamingConvention`] - Language-specific styling for derived names
//! - [`Namer`] - Collision resolution within one namespace
//! - [`NameBindings`] - Every identifier bound during one render pass

mod bindings;
mod convention;
mod name;
mod namer;

pub use bindings::{MemberNames, NameBindings};
pub use convention::NamingConvention;
pub use name::{Name, NameStyle};
pub use namer::Namer;
