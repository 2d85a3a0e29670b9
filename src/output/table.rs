use console::{measure_text_width, pad_str, Alignment};

use bytesize::Precision;

use crate::entry::Entry;

const HEADER: [&str; 6] = ["input", "bytes", ".0", ".1", ".2", ".3"];
const SEP: &str = "   ";

pub fn print_table(entries: &[Entry]) {
    print!("{}", make_table(entries));
}

/// Lays out every entry with its raw value and all four suffix forms. The
/// input column is left-aligned, the rest right-aligned.
pub fn make_table(entries: &[Entry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let mut row = vec![entry.input.clone(), entry.size.get().to_string()];
            row.extend(Precision::all().iter().map(|&p| entry.size.format(p)));
            row
        })
        .collect();

    let mut widths = HEADER.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut table = String::new();
    let header: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();
    for row in std::iter::once(header).chain(rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let align = if i == 0 {
                    Alignment::Left
                } else {
                    Alignment::Right
                };
                pad_str(cell, width, align, None).into_owned()
            })
            .collect();
        table.push_str(&cells.join(SEP));
        table.push('\n');
    }

    table
}
