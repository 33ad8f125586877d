use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the schema text and its filename so error factories don't need
/// both passed at every call site.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the first occurrence of `"text"` (quoted) in the source.
    pub fn find_quoted(&self, text: &str) -> Option<SourceSpan> {
        let needle = format!("\"{}\"", text);
        self.src
            .find(&needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_col_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid schema error at a JSON pointer.
    pub fn invalid_schema(
        &self,
        pointer: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidSchema {
            src: self.named_source(),
            span,
            pointer: pointer.into(),
            message: message.into(),
        })
    }

    /// Create an unresolved reference error.
    pub fn unresolved_ref(&self, reference: impl Into<String>) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::UnresolvedRef {
            src: self.named_source(),
            span: self.find_quoted(&reference),
            reference,
        })
    }

    /// Create a circular reference error.
    pub fn circular_ref(&self, reference: impl Into<String>) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::CircularRef {
            src: self.named_source(),
            span: self.find_quoted(&reference),
            reference,
        })
    }

    /// Create an unsupported type error.
    pub fn unsupported_type(
        &self,
        pointer: impl Into<String>,
        ty: impl Into<String>,
    ) -> Box<Error> {
        let ty = ty.into();
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span: self.find_quoted(&ty),
            pointer: pointer.into(),
            ty,
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, l) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(l.len());
            return Some(offset + col);
        }
        offset += l.len();
    }
    Some(src.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(jackgen::io), help("check that the schema path exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("top-level '{name}' in '{filename}' is already declared by another source")]
    #[diagnostic(
        code(jackgen::duplicate_top_level),
        help("give each source a distinct name, e.g. with --top-level or [[sources]] name")
    )]
    DuplicateTopLevel { name: String, filename: String },

    #[error("failed to parse schema as JSON")]
    #[diagnostic(code(jackgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema at '{pointer}': {message}")]
    #[diagnostic(code(jackgen::invalid_schema))]
    InvalidSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        pointer: String,
        message: String,
    },

    #[error("cannot resolve reference '{reference}'")]
    #[diagnostic(
        code(jackgen::unresolved_ref),
        help("only local references such as '#/definitions/Name' or '#/$defs/Name' are supported")
    )]
    UnresolvedRef {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: Option<SourceSpan>,
        reference: String,
    },

    #[error("reference '{reference}' resolves to itself without passing through an object")]
    #[diagnostic(code(jackgen::circular_ref))]
    CircularRef {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        reference: String,
    },

    #[error("unsupported type '{ty}' at '{pointer}'")]
    #[diagnostic(
        code(jackgen::unsupported_type),
        help("valid types are: object, array, string, integer, number, boolean, null")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        pointer: String,
        ty: String,
    },
}
