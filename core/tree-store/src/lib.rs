#![warn(clippy::pedantic)]
//! Tree Store
//!
//! Indexes a flat list of parent-referencing records into a read-only tree.
//!
//! Every record names its own id and the id of its parent; a parent id equal to
//! the item type's root sentinel (`0` for [`Record`]) marks a root. The store is
//! built once from the records in input order and then answers queries:
//!
//! - [`TreeStore::get_all`] - the original sequence, untouched
//! - [`TreeStore::get_item`] - lookup by id
//! - [`TreeStore::get_children`] - immediate children in input order
//! - [`TreeStore::get_all_parents`] - the ancestor chain, nearest first
//! - [`TreeStore::get_structure`] - the nested forest of every node that has children
//!
//! Parents must precede their children in the input. A record whose parent has
//! not been seen yet fails construction with [`TreeStoreError::MissingParent`].
//!
//! ## Quick Start
//!
//! ```
//! use tree_store::{Record, TreeStore};
//!
//! let store = TreeStore::new(vec![
//!     Record::new(1, 0),
//!     Record::new(2, 1),
//!     Record::new(3, 2),
//! ])?;
//!
//! let parents: Vec<u32> = store.get_all_parents(3)?.iter().map(|r| r.id).collect();
//! assert_eq!(parents, vec![2, 1]);
//! # Ok::<(), tree_store::TreeStoreError<u32>>(())
//! ```

pub mod errors;
pub mod item;
pub mod store;
pub mod structure;

pub use errors::{Result, TreeStoreError};
pub use item::{Record, TreeItem};
pub use store::TreeStore;
pub use structure::StructureNode;
