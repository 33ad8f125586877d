//! Core utilities and types for the jackgen code generator.
//!
//! This crate provides the string helpers and file output primitives used
//! across the jackgen workspace.

mod file;
mod utils;

// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
// String utilities
pub use utils::{capitalize, split_words, to_camel_case, to_pascal_case, to_upper_snake_case};
