use std::fmt::Display;

/// Helps write out indented codes into a line buffer.
pub struct CodeWriter<'a> {
    lines: &'a mut Vec<String>,
    indent_unit: &'a str,
    indent: String,
    termination: Option<&'static str>,
}

impl<'a> CodeWriter<'a> {
    /// Wraps line buffer for code generation.
    pub fn new(lines: &'a mut Vec<String>, indent_unit: &'a str) -> CodeWriter<'a> {
        CodeWriter {
            lines,
            indent_unit,
            indent: String::new(),
            termination: None,
        }
    }

    /// Writes `head {`, then extends current instance and indents until `}`.
    pub fn open_block<D: Display>(&mut self, head: D) -> CodeWriter<'_> {
        self.write(format_args!("{head} {{"));
        CodeWriter {
            lines: self.lines,
            indent_unit: self.indent_unit,
            indent: format!("{}{}", self.indent, self.indent_unit),
            termination: Some("}"),
        }
    }

    /// Executes function with indented block.
    pub fn with_block<'f, T, D, F>(&'f mut self, head: D, f: F) -> T
    where
        D: Display,
        F: FnOnce(CodeWriter<'f>) -> T,
    {
        f(self.open_block(head))
    }

    /// Writes a line.
    pub fn write<D: Display>(&mut self, line: D) {
        self.lines.push(format!("{}{line}", self.indent));
    }

    /// Writes a line without current indent.
    pub fn write_head<D: Display>(&mut self, line: D) {
        self.lines.push(line.to_string());
    }

    /// Writes a blank line.
    pub fn write_empty(&mut self) {
        self.lines.push(String::new());
    }

    /// Closes the current block, if any.
    pub fn flush(&mut self) {
        if let Some(text) = self.termination.take() {
            let outer = self.indent.len() - self.indent_unit.len();
            let line = format!("{}{text}", &self.indent[..outer]);
            self.write_head(line);
        }
    }
}

impl<'a> Drop for CodeWriter<'a> {
    fn drop(&mut self) {
        self.flush();
    }
}
