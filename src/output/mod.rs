pub mod errors;
pub mod summary;
pub mod table;

use bytesize::FormatSpec;

use crate::entry::Entry;

pub fn make_lines(entries: &[Entry], spec: &FormatSpec) -> String {
    let mut lines = String::new();
    for entry in entries {
        lines.push_str(&spec.format(entry.size));
        lines.push('\n');
    }
    lines
}

pub fn print_lines(entries: &[Entry], spec: &FormatSpec) {
    print!("{}", make_lines(entries, spec));
}
