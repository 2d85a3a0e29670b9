use bytesize::ByteSize;

/// One value from the command line or stdin, with the text it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub input: String,
    pub size: ByteSize,
}

/// Sum of all entries, or `None` if it does not fit in an `i64`.
pub fn total_size(entries: &[Entry]) -> Option<ByteSize> {
    entries
        .iter()
        .try_fold(ByteSize(0), |acc, e| acc.checked_add(e.size))
}
