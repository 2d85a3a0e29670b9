use crate::bytes::*;

/// Selects which form of the suffixes a [`ByteSize`](crate::ByteSize) is
/// printed with. It never changes the number of digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// `""`, `"K"`, `"M"`, ... (no suffix at all below 1024).
    Bare,
    /// `"B"`, `"K"`, `"M"`, ...
    Letter,
    /// `"B"`, `"KB"`, `"MB"`, ...
    Short,
    /// `"B"`, `"KiB"`, `"MiB"`, ...
    #[default]
    Binary,
}

impl Precision {
    const SUFFIXES: [[&'static str; 7]; 4] = [
        ["", K, M, G, T, P, E],
        [B, K, M, G, T, P, E],
        [B, KB, MB, GB, TB, PB, EB],
        [B, KIB, MIB, GIB, TIB, PIB, EIB],
    ];

    /// Clamps an arbitrary precision to one of the four levels.
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Self::Bare,
            1 => Self::Letter,
            2 => Self::Short,
            _ => Self::Binary,
        }
    }

    /// Resolves the precision of a format request; no precision means the
    /// default suffixes.
    pub fn from_requested(requested: Option<i64>) -> Self {
        requested.map_or(Self::Binary, Self::from_level)
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    /// The suffix for a magnitude level, where 0 is plain bytes and 1 to 6
    /// are K, M, G, T, P, E.
    pub fn suffix(self, magnitude: usize) -> &'static str {
        Self::SUFFIXES[self as usize][magnitude.min(MAX_MAGNITUDE)]
    }

    pub fn all() -> [Precision; 4] {
        [Self::Bare, Self::Letter, Self::Short, Self::Binary]
    }
}
