//! Output writers for rendered files.

use std::io::Write;

use eyre::Result;
use jackgen_codegen::RenderOutput;

/// Print every file as `// <name>`, `//`, then its lines.
pub fn print_files(output: &RenderOutput, out: &mut impl Write) -> Result<()> {
    for (name, file) in output.iter() {
        writeln!(out, "// {}", name)?;
        writeln!(out, "//")?;
        for line in file.lines() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jackgen_codegen::SourceFile;

    use super::*;

    #[test]
    fn test_print_files() {
        let mut output = RenderOutput::new();
        output.insert(
            "Class_Point.java",
            SourceFile::new(vec!["package io.jackgen;".into(), "".into()]),
        );
        output.insert("Converter.java", SourceFile::new(vec!["x".into()]));

        let mut buf = Vec::new();
        print_files(&output, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "// Class_Point.java\n//\npackage io.jackgen;\n\n// Converter.java\n//\nx\n"
        );
    }
}
