//! Error types for the tree store.

use std::fmt::Debug;

use thiserror::Error;

/// Result alias for tree store operations keyed by `Id`.
pub type Result<T, Id> = std::result::Result<T, TreeStoreError<Id>>;

/// Errors raised while building or querying a [`TreeStore`](crate::TreeStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum TreeStoreError<Id: Debug> {
    /// No record is registered under the requested id.
    #[error("no item with id {id:?}")]
    NotFound { id: Id },

    /// A record referenced a parent that was not registered before it.
    ///
    /// Parents must appear earlier in the input sequence than their children.
    #[error("item {id:?} references parent {parent_id:?} which does not precede it")]
    MissingParent { id: Id, parent_id: Id },
}

impl<Id: Debug> TreeStoreError<Id> {
    /// The id the failing operation was working on.
    #[must_use]
    pub fn id(&self) -> &Id {
        match self {
            TreeStoreError::NotFound { id } | TreeStoreError::MissingParent { id, .. } => id,
        }
    }
}
