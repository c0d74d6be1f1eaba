use std::error;
use std::fmt;

/// Errors reported by deque operations. Each one is a contract
/// violation by the caller; the deque is left structurally valid and
/// unchanged when any of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An absent value was offered to a checked push. The deque never
    /// stores absent items.
    AbsentItem,
    /// A pop was attempted on an empty deque.
    Empty,
    /// A fallible iterator advance was attempted past the last item.
    Exhausted,
    /// Removal was attempted through an iterator.
    Unsupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AbsentItem => write!(f, "absent values cannot be stored in the deque"),
            Error::Empty => write!(f, "the deque is empty"),
            Error::Exhausted => write!(f, "the iterator is exhausted"),
            Error::Unsupported => write!(f, "removal through an iterator is not supported"),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_strings_are_distinct() {
        let all = [
            Error::AbsentItem,
            Error::Empty,
            Error::Exhausted,
            Error::Unsupported,
        ];

        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(format!("{}", a), format!("{}", b));
            }
        }
    }
}
