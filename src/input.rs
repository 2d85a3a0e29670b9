use std::io::{self, BufRead};

use anyhow::{anyhow, Context};
use once_cell::sync::Lazy;
use regex::Regex;

use bytesize::ByteSize;

use crate::entry::Entry;

static VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<num>[0-9][0-9_]*)(?:\s*<<\s*(?P<shift>[0-9]+))?$")
        .expect("value pattern is valid")
});

/// Parses an integer such as `-1_024` or `1256<<50`.
pub fn parse_value(s: &str) -> anyhow::Result<ByteSize> {
    let caps = VALUE_RE
        .captures(s.trim())
        .ok_or_else(|| anyhow!("'{}' is not an integer", s))?;

    let digits: String = caps["num"].chars().filter(|&c| c != '_').collect();
    let mut n: i128 = digits
        .parse()
        .with_context(|| format!("'{}' is too large", s))?;

    if let Some(shift) = caps.name("shift") {
        let shift: u32 = shift
            .as_str()
            .parse()
            .with_context(|| format!("invalid shift in '{}'", s))?;
        n = 1i128
            .checked_shl(shift)
            .filter(|&m| shift < 127 && m > 0)
            .and_then(|m| n.checked_mul(m))
            .ok_or_else(|| anyhow!("'{}' is too large", s))?;
    }

    if &caps["sign"] == "-" {
        n = -n;
    }

    Ok(ByteSize::try_from(n)?)
}

/// Parses every input, collecting failures into `errors`.
pub fn parse_entries<I>(inputs: I, errors: &mut Vec<anyhow::Error>) -> Vec<Entry>
where
    I: IntoIterator<Item = String>,
{
    let mut entries = Vec::new();
    for input in inputs {
        match parse_value(&input) {
            Ok(size) => {
                log::debug!("parsed {:?} as {:?}", input, size);
                entries.push(Entry { input, size });
            }
            Err(err) => errors.push(err.context(format!("error parsing value '{}'", input))),
        }
    }
    entries
}

/// Non-blank lines of `reader`, trimmed.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
