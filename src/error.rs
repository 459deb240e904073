use thiserror::Error;

/// A specialized `Result` for list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a list or cursor operation can fail.
///
/// Every failure is reported synchronously at the offending call; nothing is
/// retried or recovered internally. Bulk operations are not atomic: an error
/// raised mid-way leaves the mutations already applied in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The null element was passed where a real element is required.
    ///
    /// Lists never store the null element; insertion points and query points
    /// (`contains`, `index_of`, ...) both reject it.
    #[error("null element")]
    NullElement,

    /// An index outside the valid interval.
    ///
    /// Insertion positions range over `0..=len`; access and removal positions
    /// over `0..len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A mutation was attempted through a read-only view.
    #[error("unsupported operation `{0}` on a read-only view")]
    Unsupported(&'static str),

    /// `next` or `previous` was called with nothing left in that direction.
    #[error("iteration exhausted")]
    Exhausted,

    /// Cursor `remove` or `set` without an element pending.
    ///
    /// Raised when neither `next` nor `previous` has yielded since the cursor
    /// was created, or since the last `add` or `remove`.
    #[error("no element pending: call `next` or `previous` first")]
    NoLastReturned,
}
