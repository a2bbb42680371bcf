//! Error types shared by both graph representations.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by graph operations.
///
/// Node values are rendered with their `Debug` form at construction time so
/// the error type stays non-generic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("node not found: {node}")]
    NotFound { node: String },

    #[error("node already present: {node}")]
    DuplicateNode { node: String },

    #[error("edge references an absent endpoint: {from} -> {to}")]
    InvalidEdge { from: String, to: String },
}

impl Error {
    pub(crate) fn not_found<T: fmt::Debug>(node: &T) -> Self {
        Self::NotFound {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn duplicate_node<T: fmt::Debug>(node: &T) -> Self {
        Self::DuplicateNode {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn invalid_edge<T: fmt::Debug>(from: &T, to: &T) -> Self {
        Self::InvalidEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}
