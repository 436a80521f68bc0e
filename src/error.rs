// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

use thiserror::Error;

/// Error returned by [`SkipList::try_insert`](crate::SkipList::try_insert).
///
/// The list is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// Memory for the node or its level slots could not be reserved.
    #[error("out of memory while allocating a skip list node")]
    OutOfMemory,
    /// NaN has no position in score order.
    #[error("score is NaN")]
    NanScore,
}
