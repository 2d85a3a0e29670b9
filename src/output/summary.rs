use bytesize::FormatSpec;

use crate::entry::{total_size, Entry};

pub fn make_summary(entries: &[Entry], errors_len: usize, spec: &FormatSpec) -> String {
    let mut summary = String::new();
    let mut max_len = 0;
    let mut push = |s: String| {
        max_len = max_len.max(s.trim_end().chars().count());
        summary.push_str(&s);
    };

    push(format!("Values: {}\n", entries.len()));
    push(format!("Errors: {}\n", errors_len));
    match total_size(entries) {
        Some(total) => push(format!("Total: {}\n", spec.format(total))),
        None => push("Total: out of range\n".to_string()),
    }

    let sep = "=".repeat(max_len);
    format!("{}\n{}{}\n", sep, summary, sep)
}

pub fn print_summary(entries: &[Entry], errors_len: usize, spec: &FormatSpec) {
    print!("{}", make_summary(entries, errors_len, spec));
}
