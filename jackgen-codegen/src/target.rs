//! Target language abstraction.

use eyre::Result;
use jackgen_graph::TypeGraph;

use crate::RenderOutput;

/// A language the type graph can be rendered to.
pub trait TargetLanguage {
    /// Language identifier as accepted by `--lang` (e.g., "java")
    fn name(&self) -> &'static str;

    /// File extension for generated sources (e.g., "java")
    fn extension(&self) -> &'static str;

    /// Render the whole graph in memory.
    ///
    /// Nothing is written; the caller decides where the files go.
    fn render(&self, graph: &TypeGraph) -> Result<RenderOutput>;
}
