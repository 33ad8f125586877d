//! Rendered files handed to the output writer.

use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use jackgen_core::{OutputFile, Overwrite, WriteResult};

/// One rendered source file as a list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    lines: Vec<String>,
}

impl SourceFile {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// File content with each line newline-terminated.
    pub fn content(&self) -> String {
        let mut content = String::new();
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        content
    }
}

/// Result of a render pass: file names mapped to their content, in
/// emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    files: IndexMap<String, SourceFile>,
}

impl RenderOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. Re-adding a name replaces the content and keeps the
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, file: SourceFile) {
        self.files.insert(name.into(), file);
    }

    pub fn get(&self, name: &str) -> Option<&SourceFile> {
        self.files.get(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceFile)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write every file under `dir`.
    ///
    /// Returns the path and outcome of each file, in emission order.
    pub fn write_all(
        &self,
        dir: &Path,
        overwrite: Overwrite,
    ) -> Result<Vec<(std::path::PathBuf, WriteResult)>> {
        let mut results = Vec::with_capacity(self.files.len());
        for (name, file) in &self.files {
            let output = OutputFile::from_lines(dir.join(name), file.lines()).overwrite(overwrite);
            let result = output.write()?;
            results.push((output.path().to_path_buf(), result));
        }
        Ok(results)
    }
}

impl<'a> IntoIterator for &'a RenderOutput {
    type Item = (&'a String, &'a SourceFile);
    type IntoIter = indexmap::map::Iter<'a, String, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_terminates_lines() {
        let file = SourceFile::new(vec!["package a;".into(), "".into()]);
        assert_eq!(file.content(), "package a;\n\n");
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut out = RenderOutput::new();
        out.insert("B.java", SourceFile::default());
        out.insert("A.java", SourceFile::default());
        out.insert("B.java", SourceFile::new(vec!["x".into()]));
        assert_eq!(out.names().collect::<Vec<_>>(), vec!["B.java", "A.java"]);
        assert_eq!(out.get("B.java").unwrap().lines(), ["x"]);
    }
}
