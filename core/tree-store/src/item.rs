//! Items that can be indexed by a [`TreeStore`](crate::TreeStore).
//!
//! [`TreeItem`] is the only thing the store needs from a record: its own id,
//! its parent's id, and the sentinel that marks "no parent". [`Record`] is the
//! JSON-shaped implementation used by the command line tool and most tests.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field `get_structure` attaches to records that have children.
pub const CHILDREN_FIELD: &str = "children";

/// A flat record that references its parent by id.
pub trait TreeItem {
    /// Identifier type. Ids are compared and hashed, never ordered.
    type Id: Copy + Eq + Hash + Debug;

    /// Parent id carried by root records.
    const ROOT: Self::Id;

    fn id(&self) -> Self::Id;

    fn parent_id(&self) -> Self::Id;

    #[must_use]
    fn is_root(&self) -> bool {
        self.parent_id() == Self::ROOT
    }

    /// Whether the item already carries its own non-null `children` field.
    ///
    /// Such items are never annotated by
    /// [`TreeStore::get_structure`](crate::TreeStore::get_structure), but still
    /// surface at its top level.
    #[must_use]
    fn has_children_field(&self) -> bool {
        false
    }

    /// Removes a null `children` field before the item is annotated with its
    /// real children.
    fn clear_children_field(&mut self) {}
}

/// A record with an integer id, an integer `parentId` and any number of
/// additional JSON fields.
///
/// Extra fields are kept in input order and serialized back verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    #[serde(rename = "parentId")]
    pub parent_id: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: u32, parent_id: u32) -> Self {
        Self {
            id,
            parent_id,
            extra: Map::new(),
        }
    }

    /// Adds (or replaces) an extra field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl TreeItem for Record {
    type Id = u32;

    const ROOT: u32 = 0;

    fn id(&self) -> u32 {
        self.id
    }

    fn parent_id(&self) -> u32 {
        self.parent_id
    }

    fn has_children_field(&self) -> bool {
        matches!(self.extra.get(CHILDREN_FIELD), Some(value) if !value.is_null())
    }

    fn clear_children_field(&mut self) {
        self.extra.shift_remove(CHILDREN_FIELD);
    }
}
