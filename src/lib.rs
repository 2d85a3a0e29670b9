//! A [`ByteSize`] is a number of bytes, possibly negative, which prints as
//! "1B", "2KiB", "3.45MiB", "67.8GiB", "987TiB", "8EiB" and so on.
//!
//! Formatting with `{}` prints 1 to 4 decimal digits, possibly including a
//! decimal point, followed by "B", "KiB", "MiB", "GiB", "TiB", "PiB" or "EiB".
//!
//! A precision does not change how many digits are printed. It selects a
//! shorter form of the suffixes instead:
//!
//! | precision | suffixes |
//! |---|---|
//! | `{:.0}` | `""`, `"K"`, `"M"`, `"G"`, `"T"`, `"P"`, `"E"` |
//! | `{:.1}` | `"B"`, `"K"`, `"M"`, `"G"`, `"T"`, `"P"`, `"E"` |
//! | `{:.2}` | `"B"`, `"KB"`, `"MB"`, `"GB"`, `"TB"`, `"PB"`, `"EB"` |
//! | `{:.3}` | `"B"`, `"KiB"`, `"MiB"`, `"GiB"`, `"TiB"`, `"PiB"`, `"EiB"` |
//!
//! Larger precisions behave like `{:.3}`.
//!
//! ```
//! use bytesize::ByteSize;
//!
//! assert_eq!(ByteSize(1030).to_string(), "1.01KiB");
//! assert_eq!(format!("{:.2}", ByteSize(5 << 30)), "5GB");
//! assert_eq!(format!("{:>8}", ByteSize(-1 << 20)), "   -1MiB");
//! assert_eq!(format!("{:?}", ByteSize(-5)), "ByteSize(-5)");
//! ```
//!
//! Printf-style specifiers chosen at runtime go through [`FormatSpec`]:
//!
//! ```
//! use bytesize::ByteSize;
//!
//! assert_eq!(ByteSize(1024).format_with("%-6.1v").unwrap(), "1K    ");
//! assert_eq!(ByteSize(255).format_with("%#x").unwrap(), "0xff");
//! ```

pub mod bytes;
pub mod format;

pub use bytes::{units::Precision, ByteSize, OutOfRangeError};
pub use format::spec::{FormatSpec, SpecError};
pub use format::{equivalent_format, render, Flag, FormatState, Verb};
