//! Java renderer options.

/// Package used when none is configured.
pub const DEFAULT_PACKAGE: &str = "io.jackgen";

/// Options controlling Java output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOptions {
    /// Package declared at the top of every file
    pub package: String,
    /// Emit only the type declarations, no `Converter` helper
    pub just_types: bool,
    /// Annotate classes with `@lombok.Data` instead of emitting accessors
    pub lombok: bool,
    /// Comment lines placed at the top of every file, replacing the
    /// default usage notes
    pub leading_comments: Option<Vec<String>>,
}

impl Default for JavaOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            just_types: false,
            lombok: false,
            leading_comments: None,
        }
    }
}

impl JavaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn just_types(mut self, just_types: bool) -> Self {
        self.just_types = just_types;
        self
    }

    pub fn lombok(mut self, lombok: bool) -> Self {
        self.lombok = lombok;
        self
    }

    pub fn leading_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_comments = Some(comments.into_iter().map(Into::into).collect());
        self
    }
}
