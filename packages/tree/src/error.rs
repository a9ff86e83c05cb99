use crate::path::NodePath;
use thiserror::Error;

/// Errors raised while addressing nodes in a content tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("No node at path {0}")]
    NodeNotFound(NodePath),

    #[error("Node at {0} has no parent")]
    NoParent(NodePath),

    #[error("Invalid node path: {0:?}")]
    InvalidPath(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
