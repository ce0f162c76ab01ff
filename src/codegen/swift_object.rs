use crate::codegen::CodeWriter;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Emits piece of Swift code.
pub trait SwiftObject {
    fn write_into(&self, w: &mut CodeWriter);
}

/// Wraps `value` in double quotes, replacing each embedded `"` with a single `\`.
///
/// This is not a proper escape: `a"b` becomes `"a\b"`. Existing generated
/// files depend on this exact output.
pub fn quote_literal(value: &str) -> String {
    format!(r#""{}""#, value.replace('"', r"\"))
}

/// `var key:String { return "value" }`
#[derive(Debug, Clone, Copy)]
pub struct PropertyDefinition<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> PropertyDefinition<'a> {
    pub fn new(key: &'a str, value: &'a str) -> Self {
        PropertyDefinition { key, value }
    }
}

impl<'a> SwiftObject for PropertyDefinition<'a> {
    fn write_into(&self, w: &mut CodeWriter) {
        let key = self.key;
        let literal = quote_literal(self.value);
        w.write(format_args!("var {key}:String {{ return {literal} }}"));
    }
}

/// `struct Name : A, B`, without the opening brace.
#[derive(Debug, Clone, Copy)]
pub struct TypeHeader<'a> {
    name: &'a str,
    conformances: &'a [String],
}

impl<'a> TypeHeader<'a> {
    pub fn new(name: &'a str, conformances: &'a [String]) -> Self {
        TypeHeader { name, conformances }
    }
}

impl<'a> Display for TypeHeader<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "struct {}", self.name)?;
        if !self.conformances.is_empty() {
            write!(f, " : {}", self.conformances.join(", "))?;
        }
        Ok(())
    }
}
