use crate::codegen::{CodeWriter, SwiftObject, TypeHeader};

/// Indent for members of the generated type.
const INDENT: &str = "\t";

/// One generated type, accumulated member by member.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    type_name: String,
    conformances: Vec<String>,
    lines: Vec<String>,
}

impl GeneratedUnit {
    /// Creates new unit. An empty conformance list renders no `:` clause.
    pub fn new<S: Into<String>>(type_name: S, conformances: Vec<String>) -> Self {
        GeneratedUnit {
            type_name: type_name.into(),
            conformances,
            lines: Vec::new(),
        }
    }

    /// Appends a member.
    pub fn append<O: SwiftObject>(&mut self, object: &O) {
        let mut w = CodeWriter::new(&mut self.lines, INDENT);
        object.write_into(&mut w);
    }

    /// Header, blank line, indented members and closing brace, joined by `\n`.
    pub fn render(&self) -> String {
        let mut code = Vec::with_capacity(self.lines.len() + 3);
        {
            let mut w = CodeWriter::new(&mut code, INDENT);
            let header = TypeHeader::new(&self.type_name, &self.conformances);
            w.with_block(header, |mut body| {
                body.write_empty();
                for line in &self.lines {
                    body.write(line);
                }
            });
        }

        code.join("\n")
    }
}
