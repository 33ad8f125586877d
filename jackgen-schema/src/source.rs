use std::path::Path;

use crate::{Error, Result};

/// One schema input, registered as a top-level type under `name`.
#[derive(Debug, Clone)]
pub struct SchemaSource {
    name: String,
    filename: String,
    content: String,
}

impl SchemaSource {
    /// Create a source from in-memory text (filename defaults to `<name>.schema.json`).
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            filename: format!("{}.schema.json", name),
            name,
            content: content.into(),
        }
    }

    /// Read a schema file from disk.
    pub fn open(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Ok(Self {
            name: name.into(),
            filename: path.display().to_string(),
            content,
        })
    }

    /// Override the filename used in diagnostics.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Top-level name for this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person.json");
        std::fs::write(&path, "{}").unwrap();

        let source = SchemaSource::open("Person", &path).unwrap();
        assert_eq!(source.name(), "Person");
        assert_eq!(source.content(), "{}");
        assert!(source.filename().ends_with("person.json"));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let err = SchemaSource::open("X", "/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_default_filename() {
        let source = SchemaSource::new("TopLevel", "{}");
        assert_eq!(source.filename(), "TopLevel.schema.json");
    }
}
