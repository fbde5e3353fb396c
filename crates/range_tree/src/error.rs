use thiserror::Error;

pub type Result<T, E = RangeTreeError> = std::result::Result<T, E>;

/// Errors reported by [`RangeTree`](crate::RangeTree) operations.
///
/// Every check runs before the tree is touched, so a failed call leaves it unchanged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RangeTreeError {
    /// `index` is the largest position the call asked for.
    #[error("index {index} is out of range for a tree of capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// The start bound lies past the end bound. Both are reported exactly as the
    /// caller passed them, so `right` may be inclusive or exclusive.
    #[error("invalid range: left bound {left} is past right bound {right}")]
    InvalidRange { left: usize, right: usize },
}
