use std::fmt;

/// Errors returned by the checked sort entry points and [`pow`](crate::pow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A required argument was absent or out of the accepted domain. Raised before any element
    /// is touched.
    InvalidArgument(&'static str),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for SortError {}
