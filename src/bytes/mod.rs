pub mod render;
pub mod units;

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
};

use thiserror::Error;

use crate::{
    bytes::units::Precision,
    format::{self, spec::FormatSpec, SpecError, Verb},
};

const B: &str = "B";

const K: &str = "K";
const M: &str = "M";
const G: &str = "G";
const T: &str = "T";
const P: &str = "P";
const E: &str = "E";

const KB: &str = "KB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";
const EB: &str = "EB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";
const EIB: &str = "EiB";

/// Highest magnitude level (exa-).
pub(crate) const MAX_MAGNITUDE: usize = 6;

/// A number of bytes, possibly negative.
///
/// `{}` prints it with 1 to 4 significant digits and a binary suffix, `{:?}`
/// prints `ByteSize(<n>)`, and the hex, octal, binary and exponent traits act
/// on the underlying `i64`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(pub i64);

impl ByteSize {
    pub const B: ByteSize = ByteSize(1);
    pub const KIB: ByteSize = ByteSize(1 << 10);
    pub const MIB: ByteSize = ByteSize(1 << 20);
    pub const GIB: ByteSize = ByteSize(1 << 30);
    pub const TIB: ByteSize = ByteSize(1 << 40);
    pub const PIB: ByteSize = ByteSize(1 << 50);
    pub const EIB: ByteSize = ByteSize(1 << 60);

    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// What `{:.N}` would print for the matching precision level.
    pub fn format(self, precision: Precision) -> String {
        render::format_byte_size(self.0, precision)
    }

    /// Formats with a printf-style specifier such as `"%8.2v"` or `"%x"`.
    pub fn format_with(self, spec: &str) -> Result<String, SpecError> {
        Ok(spec.parse::<FormatSpec>()?.format(self))
    }

    pub fn checked_add(self, rhs: ByteSize) -> Option<ByteSize> {
        self.0.checked_add(rhs.0).map(ByteSize)
    }

    pub fn checked_sub(self, rhs: ByteSize) -> Option<ByteSize> {
        self.0.checked_sub(rhs.0).map(ByteSize)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::render(f, *self, Verb::Value)
    }
}

impl fmt::Debug for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSize({})", self.0)
    }
}

macro_rules! forward_int_fmt {
    ($($trait: ident),*) => {
        $(
            impl fmt::$trait for ByteSize {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.0, f)
                }
            }
        )*
    };
}

forward_int_fmt!(LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

/// The source integer does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} bytes is out of range for ByteSize")]
pub struct OutOfRangeError(pub i128);

macro_rules! from_int {
    ($($int: ty),*) => {
        $(
            impl From<$int> for ByteSize {
                fn from(n: $int) -> Self {
                    Self(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! try_from_int {
    ($($int: ty),*) => {
        $(
            impl TryFrom<$int> for ByteSize {
                type Error = OutOfRangeError;

                fn try_from(n: $int) -> Result<Self, Self::Error> {
                    i64::try_from(n)
                        .map(Self)
                        .map_err(|_| OutOfRangeError(n as i128))
                }
            }
        )*
    };
}

try_from_int!(u64, usize, isize, i128);

impl TryFrom<u128> for ByteSize {
    type Error = OutOfRangeError;

    fn try_from(n: u128) -> Result<Self, Self::Error> {
        i64::try_from(n)
            .map(Self)
            .map_err(|_| OutOfRangeError(i128::try_from(n).unwrap_or(i128::MAX)))
    }
}

impl From<ByteSize> for i64 {
    fn from(b: ByteSize) -> Self {
        b.0
    }
}

impl Add for ByteSize {
    type Output = ByteSize;

    fn add(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self.0 + rhs.0)
    }
}

impl Sub for ByteSize {
    type Output = ByteSize;

    fn sub(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self.0 - rhs.0)
    }
}

impl Mul<i64> for ByteSize {
    type Output = ByteSize;

    fn mul(self, rhs: i64) -> ByteSize {
        ByteSize(self.0 * rhs)
    }
}

impl Mul<ByteSize> for i64 {
    type Output = ByteSize;

    fn mul(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self * rhs.0)
    }
}

impl Neg for ByteSize {
    type Output = ByteSize;

    fn neg(self) -> ByteSize {
        ByteSize(-self.0)
    }
}

impl Sum for ByteSize {
    fn sum<I: Iterator<Item = ByteSize>>(iter: I) -> Self {
        ByteSize(iter.map(|b| b.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_binary_suffixes() {
        assert_eq!(ByteSize(0).to_string(), "0B");
        assert_eq!(ByteSize(1025).to_string(), "1.00KiB");
        assert_eq!(ByteSize(-1025).to_string(), "-1.00KiB");
        assert_eq!(ByteSize::EIB.to_string(), "1EiB");
    }

    #[test]
    fn display_precision_selects_suffixes() {
        let v = ByteSize(1024);
        assert_eq!(format!("{:.0}", v), "1");
        assert_eq!(format!("{:.1}", v), "1K");
        assert_eq!(format!("{:.2}", v), "1KB");
        assert_eq!(format!("{:.3}", v), "1KiB");
        assert_eq!(format!("{:.4}", v), "1KiB");
        assert_eq!(format!("{:.45678}", v), "1KiB");

        let v = ByteSize(1023);
        assert_eq!(format!("{:.0}", v), "1023");
        assert_eq!(format!("{:.1}", v), "1023B");
        assert_eq!(format!("{:.2}", v), "1023B");
    }

    #[test]
    fn display_width() {
        let v = ByteSize(1024);
        assert_eq!(format!("{:6}", v), "  1KiB");
        assert_eq!(format!("{:>6}", v), "  1KiB");
        assert_eq!(format!("{:<6}", v), "1KiB  ");
        assert_eq!(format!("{:2}", v), "1KiB");
        assert_eq!(format!("{:<8.1}", v), "1K      ");
        assert_eq!(format!("{:w$}", v, w = 5), " 1KiB");
    }

    #[test]
    fn debug_form() {
        assert_eq!(format!("{:?}", ByteSize(-5)), "ByteSize(-5)");
        assert_eq!(format!("{:#?}", ByteSize(1024)), "ByteSize(1024)");
        assert_eq!(format!("{:#}", ByteSize(-5)), "ByteSize(-5)");
        assert_eq!(format!("{:?}", ByteSize(i64::MIN)), "ByteSize(-9223372036854775808)");
    }

    #[test]
    fn integer_traits_act_on_raw_value() {
        let v = ByteSize(255);
        assert_eq!(format!("{:x}", v), "ff");
        assert_eq!(format!("{:#X}", v), "0xFF");
        assert_eq!(format!("{:o}", v), "377");
        assert_eq!(format!("{:#b}", ByteSize(5)), "0b101");
        assert_eq!(format!("{:08x}", v), "000000ff");
        assert_eq!(format!("{:e}", ByteSize(1500)), "1.5e3");
    }

    #[test]
    fn conversions() {
        assert_eq!(ByteSize::from(7u8), ByteSize(7));
        assert_eq!(ByteSize::from(-7i32), ByteSize(-7));
        assert_eq!(ByteSize::from(u32::MAX), ByteSize(u32::MAX as i64));
        assert_eq!(i64::from(ByteSize(-3)), -3);
        assert_eq!(ByteSize::try_from(10u64), Ok(ByteSize(10)));
        assert_eq!(ByteSize::try_from(u64::MAX), Err(OutOfRangeError(u64::MAX as i128)));
        assert_eq!(ByteSize::try_from(i128::MIN).map_err(|e| e.0), Err(i128::MIN));
        assert!(ByteSize::try_from(u128::MAX).is_err());
        assert_eq!(ByteSize::try_from(-4isize), Ok(ByteSize(-4)));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(ByteSize::KIB * 3, ByteSize(3072));
        assert_eq!(2 * ByteSize::MIB, ByteSize(2 << 20));
        assert_eq!(ByteSize::KIB - ByteSize::MIB, ByteSize(1024 - (1 << 20)));
        assert_eq!(-ByteSize::B, ByteSize(-1));
        let total: ByteSize = [ByteSize(1), ByteSize(2), ByteSize::KIB].into_iter().sum();
        assert_eq!(total, ByteSize(1027));
        assert_eq!(ByteSize(i64::MAX).checked_add(ByteSize(1)), None);
        assert_eq!(ByteSize(i64::MIN).checked_sub(ByteSize(1)), None);
        assert_eq!(ByteSize(1).checked_sub(ByteSize(3)), Some(ByteSize(-2)));
    }

    #[test]
    fn format_methods() {
        assert_eq!(ByteSize(1 << 30).format(Precision::Short), "1GB");
        assert_eq!(ByteSize(3000).format_with("%.1s").unwrap(), "2.93K");
        assert!(ByteSize(1).format_with("%q").is_err());
    }
}
