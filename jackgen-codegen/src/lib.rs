//! Host renderer framework for jackgen.
//!
//! This crate provides the language-agnostic pieces a target renderer is
//! built from, and the hook surface through which a renderer is customized.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented line buffer and import collection
//! - [`naming`] - Names, collision resolution and per-pass name bindings
//! - [`hooks`] - The [`RendererHooks`] trait with default behaviour
//! - [`output`] - Rendered files handed to the output writer
//! - [`target`] - The [`TargetLanguage`] trait implemented per language

pub mod builder;
pub mod hooks;
pub mod naming;
pub mod output;
pub mod target;

pub use builder::{CodeBuilder, ImportCollector, Indent};
pub use hooks::{DefaultHooks, RendererHooks};
pub use naming::{MemberNames, Name, NameBindings, NameStyle, Namer, NamingConvention};
pub use output::{RenderOutput, SourceFile};
pub use target::TargetLanguage;
