//! Maps a generic "print this value" request onto the byte size renderer.
//!
//! A request is anything implementing [`FormatState`]: a verb plus flags, an
//! optional width and an optional precision, and a place to write to. Both
//! [`fmt::Formatter`] and the runtime [`FormatSpec`] writer are requests.

pub mod integer;
pub mod spec;

use std::fmt::{self, Alignment};

use console::pad_str;

use crate::{
    bytes::{render::format_byte_size, units::Precision},
    ByteSize,
};

pub use spec::{FormatSpec, SpecError};

/// Boolean options of a format request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `#`: alternate form.
    Alternate,
    /// `+`: always print a sign.
    Plus,
    /// `-`: left-justify within the width.
    Minus,
    /// ` `: leave a space for the sign of positive numbers.
    Space,
    /// `0`: pad numbers with leading zeros.
    Zero,
}

impl Flag {
    /// Every flag, in the order specifiers spell them.
    pub const ALL: [Flag; 5] = [
        Flag::Alternate,
        Flag::Plus,
        Flag::Minus,
        Flag::Space,
        Flag::Zero,
    ];

    pub fn as_char(self) -> char {
        match self {
            Flag::Alternate => '#',
            Flag::Plus => '+',
            Flag::Minus => '-',
            Flag::Space => ' ',
            Flag::Zero => '0',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_char() == c)
    }
}

/// What kind of output a request asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `v`: the default rendering; with [`Flag::Alternate`] the debug form.
    Value,
    /// `s`: the default rendering.
    String,
    /// `d`
    Decimal,
    /// `x`
    LowerHex,
    /// `X`
    UpperHex,
    /// `o`
    Octal,
    /// `b`
    Binary,
}

impl Verb {
    pub fn as_char(self) -> char {
        match self {
            Verb::Value => 'v',
            Verb::String => 's',
            Verb::Decimal => 'd',
            Verb::LowerHex => 'x',
            Verb::UpperHex => 'X',
            Verb::Octal => 'o',
            Verb::Binary => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'v' => Verb::Value,
            's' => Verb::String,
            'd' => Verb::Decimal,
            'x' => Verb::LowerHex,
            'X' => Verb::UpperHex,
            'o' => Verb::Octal,
            'b' => Verb::Binary,
            _ => return None,
        })
    }

    /// Whether this verb gets the byte size rendering rather than the plain
    /// integer one.
    pub fn is_default(self) -> bool {
        matches!(self, Verb::Value | Verb::String)
    }
}

/// A format request: options to read and a sink to write to.
pub trait FormatState {
    fn flag(&self, flag: Flag) -> bool;

    fn width(&self) -> Option<usize>;

    fn precision(&self) -> Option<i64>;

    fn write(&mut self, s: &str) -> fmt::Result;
}

impl FormatState for fmt::Formatter<'_> {
    fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Alternate => self.alternate(),
            Flag::Plus => self.sign_plus(),
            Flag::Minus => matches!(self.align(), Some(Alignment::Left)),
            Flag::Space => false,
            Flag::Zero => self.sign_aware_zero_pad(),
        }
    }

    fn width(&self) -> Option<usize> {
        fmt::Formatter::width(self)
    }

    fn precision(&self) -> Option<i64> {
        fmt::Formatter::precision(self).map(|p| i64::try_from(p).unwrap_or(i64::MAX))
    }

    fn write(&mut self, s: &str) -> fmt::Result {
        self.write_str(s)
    }
}

/// Prints `value` as `state` asks.
///
/// `v` with `#` prints `ByteSize(<n>)`. Verbs other than `v` and `s` print
/// the underlying integer as if the request had been made for it directly.
/// Otherwise the precision picks the suffixes (see [`Precision`]) and the
/// output is padded with spaces to the width, on the left unless `-` is set.
/// Width is measured in terminal display columns; rendered sizes are ASCII,
/// so that is also their character count.
pub fn render<S: FormatState + ?Sized>(state: &mut S, value: ByteSize, verb: Verb) -> fmt::Result {
    if verb == Verb::Value && state.flag(Flag::Alternate) {
        return state.write(&format!("ByteSize({})", value.get()));
    }

    if !verb.is_default() {
        let spec = FormatSpec::from_state(&*state, verb);
        log::trace!("formatting {} as the plain integer with {spec}", value.get());
        return state.write(&integer::format_integer(&spec, value.get()));
    }

    let precision = Precision::from_requested(state.precision());
    let output = format_byte_size(value.get(), precision);

    match state.width() {
        None => state.write(&output),
        Some(width) => {
            let align = if state.flag(Flag::Minus) {
                console::Alignment::Left
            } else {
                console::Alignment::Right
            };
            state.write(&pad_str(&output, width, align, None))
        }
    }
}

/// Rebuilds a specifier string equivalent to the request `state` carries,
/// e.g. `"%-8.2x"`.
pub fn equivalent_format<S: FormatState + ?Sized>(state: &S, verb: Verb) -> String {
    FormatSpec::from_state(state, verb).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Request {
        flags: Vec<Flag>,
        width: Option<usize>,
        precision: Option<i64>,
        out: String,
    }

    impl Request {
        fn new(flags: &[Flag], width: Option<usize>, precision: Option<i64>) -> Self {
            Self {
                flags: flags.to_vec(),
                width,
                precision,
                out: String::new(),
            }
        }
    }

    impl FormatState for Request {
        fn flag(&self, flag: Flag) -> bool {
            self.flags.contains(&flag)
        }

        fn width(&self) -> Option<usize> {
            self.width
        }

        fn precision(&self) -> Option<i64> {
            self.precision
        }

        fn write(&mut self, s: &str) -> fmt::Result {
            self.out.push_str(s);
            Ok(())
        }
    }

    fn run(flags: &[Flag], width: Option<usize>, precision: Option<i64>, verb: Verb, v: i64) -> String {
        let mut req = Request::new(flags, width, precision);
        render(&mut req, ByteSize(v), verb).unwrap();
        req.out
    }

    #[test]
    fn default_verbs() {
        assert_eq!(run(&[], None, None, Verb::Value, 1024), "1KiB");
        assert_eq!(run(&[], None, None, Verb::String, 1024), "1KiB");
        assert_eq!(run(&[Flag::Alternate], None, None, Verb::String, 1024), "1KiB");
    }

    #[test]
    fn negative_precision_is_level_zero() {
        assert_eq!(run(&[], None, Some(-1), Verb::Value, 1023), "1023");
        assert_eq!(run(&[], None, Some(-1), Verb::Value, 2048), "2K");
        assert_eq!(run(&[], None, Some(9), Verb::Value, 2048), "2KiB");
    }

    #[test]
    fn debug_form_ignores_everything_else() {
        assert_eq!(
            run(&[Flag::Alternate, Flag::Minus], Some(20), Some(1), Verb::Value, -5),
            "ByteSize(-5)"
        );
    }

    #[test]
    fn padding() {
        assert_eq!(run(&[], Some(6), None, Verb::Value, 1024), "  1KiB");
        assert_eq!(run(&[Flag::Minus], Some(6), None, Verb::Value, 1024), "1KiB  ");
        assert_eq!(run(&[], Some(3), None, Verb::Value, 1024), "1KiB");
        assert_eq!(run(&[Flag::Zero], Some(6), None, Verb::Value, 1024), "  1KiB");
    }

    #[test]
    fn other_verbs_act_on_integer() {
        assert_eq!(run(&[], None, None, Verb::Decimal, 1024), "1024");
        assert_eq!(run(&[Flag::Plus], Some(7), None, Verb::Decimal, 1024), "  +1024");
        assert_eq!(run(&[Flag::Alternate], None, None, Verb::LowerHex, 255), "0xff");
        assert_eq!(run(&[Flag::Minus], Some(5), None, Verb::Octal, 8), "10   ");
    }

    #[test]
    fn reconstructs_specifiers() {
        let req = Request::new(&[Flag::Zero, Flag::Alternate, Flag::Minus], Some(8), Some(2));
        assert_eq!(equivalent_format(&req, Verb::LowerHex), "%#-08.2x");
        let req = Request::new(&[], None, None);
        assert_eq!(equivalent_format(&req, Verb::Decimal), "%d");
        let req = Request::new(&[Flag::Space, Flag::Plus], Some(3), None);
        assert_eq!(equivalent_format(&req, Verb::Value), "%+ 3v");
    }

    #[test]
    fn formatter_flags() {
        struct Probe;
        impl fmt::Display for Probe {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let spec = equivalent_format(&*f, Verb::Value);
                f.write_str(&spec)
            }
        }
        assert_eq!(format!("{}", Probe), "%v");
        assert_eq!(format!("{:<#8.2}", Probe), "%#-8.2v");
        assert_eq!(format!("{:+08}", Probe), "%+08v");
    }

    #[test]
    fn flag_chars() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_char(flag.as_char()), Some(flag));
        }
        assert_eq!(Flag::from_char('x'), None);
        assert_eq!(Verb::from_char('X'), Some(Verb::UpperHex));
        assert_eq!(Verb::from_char('q'), None);
    }
}
