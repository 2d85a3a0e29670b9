use std::{
    fmt,
    iter::Peekable,
    str::{Chars, FromStr},
};

use thiserror::Error;

use crate::{
    format::{render, Flag, FormatState, Verb},
    ByteSize,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("format specifier must start with '%', got {0:?}")]
    MissingPercent(String),
    #[error("format specifier {0:?} has no verb")]
    MissingVerb(String),
    #[error("unknown verb '{verb}' in format specifier {spec:?}")]
    UnknownVerb { verb: char, spec: String },
    #[error("unexpected {rest:?} after the verb in format specifier {spec:?}")]
    TrailingInput { rest: String, spec: String },
    #[error("{0} is too large in format specifier {1:?}")]
    Overflow(&'static str, String),
    #[error("{0} {1} is larger than 1000000")]
    TooLarge(&'static str, u64),
}

/// Largest width or precision a [`FormatSpec`] accepts.
pub const MAX_WIDTH: u64 = 1_000_000;

/// A printf-style specifier such as `%v`, `%-8.2s` or `%#x`, parsed at
/// runtime.
///
/// `Display` prints it back in canonical form: flags in the order `#+- 0`,
/// then width, precision and verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    // Bit `flag as u8` set for each flag present.
    flags: u8,
    width: Option<usize>,
    precision: Option<i64>,
    verb: Verb,
}

impl FormatSpec {
    pub fn new(verb: Verb) -> Self {
        Self {
            flags: 0,
            width: None,
            precision: None,
            verb,
        }
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags |= 1 << flag as u8;
        self
    }

    pub fn with_width(mut self, width: usize) -> Result<Self, SpecError> {
        let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
        if width_u64 > MAX_WIDTH {
            return Err(SpecError::TooLarge("width", width_u64));
        }
        self.width = Some(width);
        Ok(self)
    }

    /// Negative precisions are kept; they select the shortest suffixes.
    pub fn with_precision(mut self, precision: i64) -> Result<Self, SpecError> {
        if precision > MAX_WIDTH as i64 {
            return Err(SpecError::TooLarge("precision", precision as u64));
        }
        self.precision = Some(precision);
        Ok(self)
    }

    /// Snapshot of the options a request carries.
    pub fn from_state<S: FormatState + ?Sized>(state: &S, verb: Verb) -> Self {
        Self {
            flags: Flag::ALL
                .into_iter()
                .filter(|&f| state.flag(f))
                .fold(0, |bits, f| bits | 1 << f as u8),
            width: state.width(),
            precision: state.precision(),
            verb,
        }
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags & (1 << flag as u8) != 0
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn precision(&self) -> Option<i64> {
        self.precision
    }

    pub fn format(&self, value: ByteSize) -> String {
        let mut writer = SpecWriter {
            spec: self,
            out: String::new(),
        };
        // Writing into a String cannot fail.
        let _ = render(&mut writer, value, self.verb);
        writer.out
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new(Verb::Value)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        for flag in Flag::ALL {
            if self.has_flag(flag) {
                write!(f, "{}", flag.as_char())?;
            }
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        write!(f, "{}", self.verb.as_char())
    }
}

impl FromStr for FormatSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('%')
            .ok_or_else(|| SpecError::MissingPercent(s.to_string()))?;
        let mut chars = rest.chars().peekable();

        let mut spec = FormatSpec::default();
        while let Some(flag) = chars.peek().copied().and_then(Flag::from_char) {
            spec = spec.with_flag(flag);
            chars.next();
        }

        let width = parse_digits(&mut chars)
            .ok_or_else(|| SpecError::Overflow("width", s.to_string()))?;
        spec.width = width
            .map(usize::try_from)
            .transpose()
            .map_err(|_| SpecError::Overflow("width", s.to_string()))?;

        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = parse_digits(&mut chars)
                .ok_or_else(|| SpecError::Overflow("precision", s.to_string()))?
                .unwrap_or(0);
            spec.precision = Some(
                i64::try_from(precision)
                    .map_err(|_| SpecError::Overflow("precision", s.to_string()))?,
            );
        }

        let verb = chars
            .next()
            .ok_or_else(|| SpecError::MissingVerb(s.to_string()))?;
        spec.verb = Verb::from_char(verb).ok_or_else(|| SpecError::UnknownVerb {
            verb,
            spec: s.to_string(),
        })?;

        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(SpecError::TrailingInput {
                rest,
                spec: s.to_string(),
            });
        }

        Ok(spec)
    }
}

// None above MAX_WIDTH, Some(None) when there are no digits at all.
fn parse_digits(chars: &mut Peekable<Chars<'_>>) -> Option<Option<u64>> {
    let mut n: Option<u64> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        let acc = n.unwrap_or(0) * 10 + u64::from(d);
        if acc > MAX_WIDTH {
            return None;
        }
        n = Some(acc);
        chars.next();
    }
    Some(n)
}

struct SpecWriter<'a> {
    spec: &'a FormatSpec,
    out: String,
}

impl FormatState for SpecWriter<'_> {
    fn flag(&self, flag: Flag) -> bool {
        self.spec.has_flag(flag)
    }

    fn width(&self) -> Option<usize> {
        self.spec.width
    }

    fn precision(&self) -> Option<i64> {
        self.spec.precision
    }

    fn write(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}
