//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line buffer with indentation tracking
//! - [`ImportCollector`] - Ordered, deduplicated imports
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod imports;
mod indent;

pub use code_builder::CodeBuilder;
pub use imports::ImportCollector;
pub use indent::Indent;
