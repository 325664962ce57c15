use std::fmt;

/// Errors raised when a qualified name cannot be packed or a packed buffer
/// is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The packed buffer has no length char at all.
    EmptyQName,
    /// The length char claims more prefix characters than the buffer holds.
    PrefixOutOfBounds { prefix_len: usize, len: usize },
    /// The prefix cannot be stored in a single length char.
    PrefixTooLong(usize),
    /// Text of the form `:local`.
    EmptyPrefix(String),
    /// Text of the form `prefix:` or the empty string.
    EmptyLocalName(String),
    /// Text with more than one colon.
    MultipleColons(String),
    /// A prefix or local name given separately contains a colon.
    ColonInPart(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyQName => write!(f, "empty qualified name buffer"),
            Error::PrefixOutOfBounds { prefix_len, len } => write!(
                f,
                "prefix length {} does not fit in buffer of length {}",
                prefix_len, len
            ),
            Error::PrefixTooLong(len) => write!(f, "prefix too long: {} chars", len),
            Error::EmptyPrefix(s) => write!(f, "empty prefix in qualified name: {}", s),
            Error::EmptyLocalName(s) => write!(f, "empty local name in qualified name: {}", s),
            Error::MultipleColons(s) => write!(f, "more than one colon in qualified name: {}", s),
            Error::ColonInPart(s) => write!(f, "colon in prefix or local name: {}", s),
        }
    }
}

impl std::error::Error for Error {}
