//! Error types for queue and list operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("queue is empty")]
    Empty,

    #[error("output buffer has no room for the terminator")]
    ZeroCapacity,

    #[error("failed to allocate {len} bytes")]
    AllocFailed { len: usize },

    #[error("group size must be at least 1, got {0}")]
    InvalidGroupSize(usize),

    /// A cursor was asked to move across the ghost node.
    #[error("cursor move across ghost boundary")]
    GhostBoundary,

    #[error("list structure is corrupted: {0}")]
    Corrupted(&'static str),
}
