//! Printf-style rendering of a plain `i64`, used for every verb that is not
//! a byte size verb.

use crate::format::{spec::FormatSpec, Flag, Verb};

pub fn format_integer(spec: &FormatSpec, value: i64) -> String {
    let magnitude = value.unsigned_abs();

    let mut digits = match spec.verb() {
        Verb::LowerHex => format!("{magnitude:x}"),
        Verb::UpperHex => format!("{magnitude:X}"),
        Verb::Octal => format!("{magnitude:o}"),
        Verb::Binary => format!("{magnitude:b}"),
        Verb::Decimal | Verb::Value | Verb::String => magnitude.to_string(),
    };

    // A precision is the minimum number of digits; zero digits for zero.
    if let Some(precision) = spec.precision() {
        let precision = usize::try_from(precision.max(0)).unwrap_or(usize::MAX);
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let sign = if value < 0 {
        "-"
    } else if spec.has_flag(Flag::Plus) {
        "+"
    } else if spec.has_flag(Flag::Space) {
        " "
    } else {
        ""
    };

    let prefix = if spec.has_flag(Flag::Alternate) {
        match spec.verb() {
            Verb::LowerHex => "0x",
            Verb::UpperHex => "0X",
            Verb::Binary => "0b",
            Verb::Octal if !digits.starts_with('0') => "0",
            _ => "",
        }
    } else {
        ""
    };

    let len = sign.len() + prefix.len() + digits.len();
    let fill = spec.width().unwrap_or(0).saturating_sub(len);

    if spec.has_flag(Flag::Minus) {
        format!("{sign}{prefix}{digits}{}", " ".repeat(fill))
    } else if spec.has_flag(Flag::Zero) && spec.precision().is_none() {
        format!("{sign}{prefix}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{sign}{prefix}{digits}", " ".repeat(fill))
    }
}
