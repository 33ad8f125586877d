//! Java as a [`TargetLanguage`].

use eyre::Result;
use jackgen_codegen::{RenderOutput, RendererHooks, TargetLanguage};
use jackgen_graph::TypeGraph;

use crate::{JacksonHooks, JavaOptions, JavaRenderer};

/// Java target, customized by a set of renderer hooks.
#[derive(Debug, Clone, Default)]
pub struct JavaTarget<H = JacksonHooks> {
    hooks: H,
    options: JavaOptions,
}

impl JavaTarget<JacksonHooks> {
    /// Java with Jackson naming and annotations.
    pub fn jackson(options: JavaOptions) -> Self {
        Self::new(JacksonHooks, options)
    }
}

impl<H: RendererHooks> JavaTarget<H> {
    pub fn new(hooks: H, options: JavaOptions) -> Self {
        Self { hooks, options }
    }
}

impl<H: RendererHooks> TargetLanguage for JavaTarget<H> {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, graph: &TypeGraph) -> Result<RenderOutput> {
        let output = JavaRenderer::new(graph, &self.hooks, &self.options).render()?;
        tracing::debug!(files = output.len(), "rendered java sources");
        Ok(output)
    }
}
