use crate::source::ConfigEntry;

use thiserror::Error as ThisError;

/// Swift keywords that cannot be used as bare identifiers.
const RESERVED_WORDS: &[&str] = &[
    "Any", "Self", "as", "associatedtype", "break", "case", "catch", "class", "continue",
    "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough", "false",
    "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout", "internal",
    "is", "let", "nil", "open", "operator", "private", "protocol", "public", "repeat",
    "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while",
];

/// Something that will likely not compile once generated. Never fatal.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationWarning {
    /// Target name is invalid as a type name.
    #[error("invalid name for a type: \"{0}\"")]
    InvalidTypeName(String),

    /// Key is invalid as a property name.
    #[error("invalid name for a property: \"{0}\"")]
    InvalidPropertyName(String),
}

pub fn validate_entries(target: &str, entries: &[ConfigEntry]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    if !is_identifier(target) {
        warnings.push(ValidationWarning::InvalidTypeName(target.to_string()));
    }
    for entry in entries {
        if !is_identifier(&entry.key) {
            warnings.push(ValidationWarning::InvalidPropertyName(entry.key.clone()));
        }
    }

    warnings
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head_ok = match chars.next() {
        Some(c) => c == '_' || c.is_alphabetic(),
        None => false,
    };

    head_ok && chars.all(|c| c == '_' || c.is_alphanumeric()) && !RESERVED_WORDS.contains(&name)
}
