use crate::bytes::units::Precision;
use crate::bytes::MAX_MAGNITUDE;

const EXA_SHIFT: u32 = 60;

/// Renders `value` with 1 to 4 significant digits followed by the suffix
/// `precision` selects.
///
/// Every `i64` renders, `i64::MIN` included.
pub fn format_byte_size(value: i64, precision: Precision) -> String {
    let mut ret = String::with_capacity(32);
    if value < 0 {
        ret.push('-');
    }
    let value = value.unsigned_abs();

    if value < 1024 {
        append_decimal(&mut ret, value);
        ret.push_str(precision.suffix(0));
        return ret;
    }

    let magnitude = if value >= 1 << EXA_SHIFT {
        append_exa(&mut ret, value);
        MAX_MAGNITUDE
    } else {
        let magnitude = magnitude_of(value);
        append_scaled(&mut ret, value, magnitude);
        magnitude
    };

    ret.push_str(precision.suffix(magnitude));
    ret
}

/// Appends the decimal digits of `number` to `buffer`.
pub fn append_decimal(buffer: &mut String, mut number: u64) {
    let mut buf = [0u8; 20];
    let mut i = buf.len() - 1;
    while number >= 10 {
        buf[i] = b'0' + (number % 10) as u8;
        i -= 1;
        number /= 10;
    }
    buf[i] = b'0' + number as u8;
    buffer.extend(buf[i..].iter().map(|&b| b as char));
}

// 1 <= result <= 5 for 1024 <= value < 2^60.
fn magnitude_of(value: u64) -> usize {
    let mut magnitude = 1;
    let mut k: u64 = 1 << 20;
    while value >= k && k < 1 << EXA_SHIFT {
        magnitude += 1;
        k <<= 10;
    }
    magnitude
}

// unit <= value < 1024 * unit, unit <= 2^50, so value * 100 stays below 2^61
// whenever two decimals are printed.
fn append_scaled(ret: &mut String, value: u64, magnitude: usize) {
    let shift = 10 * magnitude as u32;
    let unit = 1u64 << shift;

    if value & (unit - 1) == 0 {
        append_decimal(ret, value >> shift);
        return;
    }

    let (decimals, scaled) = if value < 10 * unit - unit / 200 {
        (2, 100 * value)
    } else if value < 100 * unit - unit / 20 {
        (1, 10 * value)
    } else {
        (0, value)
    };
    append_decimal(ret, (scaled + unit / 2) >> shift);
    insert_point(ret, decimals);
}

// Shifting before multiplying keeps 1024 * 2^60 out of the picture. The
// magnitude is at most 2^63, so it is always below 10 EiB.
fn append_exa(ret: &mut String, value: u64) {
    let unit = 1u64 << EXA_SHIFT;
    if value & (unit - 1) == 0 {
        append_decimal(ret, value >> EXA_SHIFT);
    } else {
        append_decimal(ret, ((value >> 50) * 100 + 512) >> 10);
        insert_point(ret, 2);
    }
}

fn insert_point(ret: &mut String, decimals: usize) {
    if decimals > 0 {
        ret.insert(ret.len() - decimals, '.');
    }
}
