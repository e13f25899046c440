use core::fmt;

/// Errors surfaced by the trees and the judge harness.
#[derive(Debug)]
pub enum Error {
    /// A 1-based position outside `[1, len]`
    OutOfRange { index: usize, len: usize },
    /// A query whose start lies after its end
    InvalidRange { start: usize, end: usize },
    /// A missing token, or one that does not parse as the expected type
    MalformedInput {
        expected: &'static str,
        found: Option<String>,
    },
    /// A product modulus outside `[1, i64::MAX]`
    InvalidModulus { modulus: u64 },
    /// A `l r m` triple with `l != r`
    UnsupportedRangeUpdate { start: usize, end: usize },
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Error::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is greater than end {end}")
            }
            Error::MalformedInput {
                expected,
                found: Some(found),
            } => write!(f, "malformed input: expected {expected}, found {found:?}"),
            Error::MalformedInput {
                expected,
                found: None,
            } => write!(f, "malformed input: expected {expected}, found end of input"),
            Error::InvalidModulus { modulus } => {
                write!(f, "modulus {modulus} is not in [1, {}]", i64::MAX)
            }
            Error::UnsupportedRangeUpdate { start, end } => {
                write!(f, "range update [{start}, {end}] is not supported, only l == r")
            }
            Error::Io(error) => write!(f, "I/O error: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
