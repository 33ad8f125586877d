//! Target language dispatch.

use clap::ValueEnum;
use jackgen_codegen::TargetLanguage;
use jackgen_codegen_java::{JavaOptions, JavaTarget};

/// Languages accepted by `--lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    Java,
}

impl Language {
    /// Create the target for this language.
    pub fn target(self, options: JavaOptions) -> Box<dyn TargetLanguage> {
        match self {
            Language::Java => Box::new(JavaTarget::jackson(options)),
        }
    }
}
