use std::fmt;

/// Errors of indexed reads on a [`CircularList`].
///
/// Insertions and deletions never fail with an `Error`: out-of-range
/// positions make them return `false` instead.
///
/// [`CircularList`]: crate::CircularList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `index` does not address an element of a list of length `len`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
