//! Line buffer for generating properly indented code.

use super::Indent;

/// Append-only buffer of indented source lines.
///
/// # Example
///
/// ```
/// use jackgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder.block("public class Foo {", "}", |b| {
///     b.push_line("private String bar;");
/// });
///
/// assert_eq!(
///     builder.into_lines(),
///     vec!["public class Foo {", "    private String bar;", "}"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = String::with_capacity(self.indent_level * 4 + s.len());
        for _ in 0..self.indent_level {
            line.push_str(self.indent.as_str());
        }
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Add a blank line unless the buffer is empty or already ends with one.
    pub fn ensure_blank(&mut self) -> &mut Self {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.push_blank();
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body written by `f`, then `close`.
    pub fn block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Add a Javadoc comment; a single line stays on one line.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        match lines.as_slice() {
            [] => self,
            [single] => self.push_line(&format!("/** {} */", single.trim())),
            many => {
                self.push_line("/**");
                for line in many {
                    let line = line.trim();
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */")
            }
        }
    }

    /// Add a `//` line comment per entry; empty entries become a bare `//`.
    pub fn push_comment_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                self.push_line("//");
            } else {
                self.push_line(&format!("// {}", line));
            }
        }
        self
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the builder and return the emitted lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut b = CodeBuilder::java();
        b.push_line("int x = 1;");
        assert_eq!(b.lines(), ["int x = 1;"]);
    }

    #[test]
    fn test_indentation() {
        let mut b = CodeBuilder::java();
        b.push_line("void main() {")
            .push_indent()
            .push_line("run();")
            .push_dedent()
            .push_line("}");
        assert_eq!(b.lines(), ["void main() {", "    run();", "}"]);
    }

    #[test]
    fn test_nested_blocks() {
        let mut b = CodeBuilder::new(Indent::Spaces(2));
        b.block("class A {", "}", |b| {
            b.block("void f() {", "}", |b| {
                b.push_line("g();");
            });
        });
        b.push_line("B b;");
        assert_eq!(
            b.lines(),
            ["class A {", "  void f() {", "    g();", "  }", "}", "B b;"]
        );
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let mut b = CodeBuilder::java();
        b.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(b.lines(), ["    a;", "", "    b;"]);
    }

    #[test]
    fn test_ensure_blank() {
        let mut b = CodeBuilder::java();
        b.ensure_blank();
        assert!(b.lines().is_empty());
        b.push_line("a;").ensure_blank().ensure_blank();
        assert_eq!(b.lines(), ["a;", ""]);
    }

    #[test]
    fn test_dedent_saturates() {
        let mut b = CodeBuilder::java();
        b.push_dedent().push_line("x");
        assert_eq!(b.lines(), ["x"]);
    }

    #[test]
    fn test_javadoc() {
        let mut b = CodeBuilder::java();
        b.push_javadoc("One line");
        b.push_javadoc("First\n\nSecond");
        assert_eq!(
            b.lines(),
            ["/** One line */", "/**", " * First", " *", " * Second", " */"]
        );
    }

    #[test]
    fn test_comment_lines() {
        let mut b = CodeBuilder::java();
        b.push_indent();
        b.push_comment_lines(&["Generated", "", "Do not edit"]);
        assert_eq!(b.lines(), ["    // Generated", "    //", "    // Do not edit"]);
    }
}
