mod swift_object;
mod unit;
mod writer;

pub use self::{
    swift_object::{PropertyDefinition, SwiftObject, TypeHeader},
    unit::GeneratedUnit,
    writer::CodeWriter,
};

use crate::source::ConfigEntry;

/// Renders the whole source file for `target`, one property per entry, in entry order.
pub fn render(target: &str, entries: &[ConfigEntry], conformances: &[String]) -> String {
    let mut unit = GeneratedUnit::new(target, conformances.to_vec());
    for entry in entries {
        unit.append(&PropertyDefinition::new(&entry.key, &entry.value));
    }

    unit.render()
}
