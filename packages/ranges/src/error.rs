//! Error types for range handling and expansion

use crate::range::Boundary;
use excerpt_tree::{NodePath, TreeError};
use thiserror::Error;

/// A range that does not describe a valid span of the document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Offset {offset} is out of bounds for node at {container} (length {length})")]
    OffsetOutOfBounds {
        container: NodePath,
        offset: usize,
        length: usize,
    },

    #[error("Range start {start} is after its end {end}")]
    StartAfterEnd { start: Boundary, end: Boundary },
}

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("Could not clone range contents: {0}")]
    CloneFailure(String),
}
