//! Java code generator for jackgen.
//!
//! Renders a [`TypeGraph`](jackgen_graph::TypeGraph) into Java classes that
//! bind with Jackson. [`JacksonHooks`] supplies the naming policy and the
//! class annotations; [`JavaRenderer`] supplies everything else.

mod jackson;
mod naming;
mod options;
mod renderer;
mod target;
mod type_mapper;

pub use jackgen_codegen::TargetLanguage;
pub use jackson::{IGNORE_UNKNOWN_ANNOTATION, JacksonHooks, NON_ABSENT_ANNOTATION};
pub use naming::JAVA_NAMING;
pub use options::{DEFAULT_PACKAGE, JavaOptions};
pub use renderer::{CONVERTER_CLASS, JavaRenderer};
pub use target::JavaTarget;
pub use type_mapper::JavaTypeMapper;
