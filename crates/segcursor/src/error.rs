use thiserror::Error;

/// Misuse of a [`Reader`](crate::Reader) that cannot be satisfied.
///
/// A scan that simply does not find its delimiter is not an error; it
/// returns `None` and leaves the reader untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderError {
    /// An advance asked for more elements than remain unread.
    #[error("cannot advance by {requested}: only {remaining} elements remain")]
    OutOfRange {
        /// Number of elements the caller asked to skip.
        requested: usize,
        /// Number of unread elements at the time of the call.
        remaining: usize,
    },
}
