//! The tree index itself.
//!
//! Records are kept in a single vector in input order. The index maps an id to
//! the record's position, and a parallel vector of [`NodeRoute`]s holds each
//! position's resolved parent and its child positions. A parent is always
//! registered before its children, so a parent position is strictly smaller
//! than the positions of its children and every upward walk terminates.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{Result, TreeStoreError};
use crate::item::TreeItem;

/// Read-only tree index built from a flat, parent-first sequence of items.
#[derive(Debug, Clone)]
pub struct TreeStore<T: TreeItem> {
    pub(crate) items: Vec<T>,
    pub(crate) index: FxHashMap<T::Id, usize>,
    pub(crate) node_routes: Vec<NodeRoute>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeRoute {
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

impl<T: TreeItem> TreeStore<T> {
    /// Builds the index in a single pass over `items`.
    ///
    /// Children are recorded in the order they appear in `items`. When an id
    /// occurs more than once, the later record takes over the id; the earlier
    /// one stays in [`get_all`](Self::get_all).
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::MissingParent`] if an item's parent id is not
    /// the root sentinel and no earlier item carries that id. This includes an
    /// item naming itself as its parent.
    pub fn new(items: Vec<T>) -> Result<Self, T::Id> {
        let mut index: FxHashMap<T::Id, usize> = FxHashMap::default();
        index.reserve(items.len());
        let mut node_routes: Vec<NodeRoute> = Vec::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            let parent = if item.is_root() {
                None
            } else {
                let parent_id = item.parent_id();
                let Some(&parent_position) = index.get(&parent_id) else {
                    return Err(TreeStoreError::MissingParent {
                        id: item.id(),
                        parent_id,
                    });
                };
                node_routes[parent_position].children.push(position);
                Some(parent_position)
            };
            index.insert(item.id(), position);
            node_routes.push(NodeRoute {
                parent,
                children: Vec::new(),
            });
        }

        debug!(
            items = items.len(),
            ids = index.len(),
            roots = node_routes.iter().filter(|r| r.parent.is_none()).count(),
            "built tree store"
        );

        Ok(Self {
            items,
            index,
            node_routes,
        })
    }

    /// The original items, in input order.
    #[must_use]
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the item registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::NotFound`] if `id` is unknown.
    pub fn get_item(&self, id: T::Id) -> Result<&T, T::Id> {
        self.position(id).map(|position| &self.items[position])
    }

    #[must_use]
    pub fn find_item(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the immediate children of `id` in input order.
    ///
    /// A known item without children yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::NotFound`] if `id` is unknown.
    pub fn get_children(&self, id: T::Id) -> Result<Vec<&T>, T::Id> {
        let position = self.position(id)?;
        Ok(self.node_routes[position]
            .children
            .iter()
            .map(|&child| &self.items[child])
            .collect())
    }

    /// Returns the parent of `id`, or `None` for a root item.
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::NotFound`] if `id` is unknown.
    pub fn get_parent(&self, id: T::Id) -> Result<Option<&T>, T::Id> {
        let position = self.position(id)?;
        Ok(self.node_routes[position]
            .parent
            .map(|parent| &self.items[parent]))
    }

    /// Returns the ancestors of `id`, nearest first, ending with its root.
    ///
    /// The item itself is not included; a root item yields an empty vector.
    /// The walk is iterative, so arbitrarily deep chains are fine.
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::NotFound`] if `id` is unknown.
    pub fn get_all_parents(&self, id: T::Id) -> Result<Vec<&T>, T::Id> {
        let position = self.position(id)?;
        Ok(self
            .ancestors(position)
            .map(|ancestor| &self.items[ancestor])
            .collect())
    }

    /// Number of items on the path from the root down to `id`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`TreeStoreError::NotFound`] if `id` is unknown.
    pub fn depth(&self, id: T::Id) -> Result<usize, T::Id> {
        let position = self.position(id)?;
        Ok(self.ancestors(position).count() + 1)
    }

    /// Items whose parent id is the root sentinel, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(|item| item.is_root())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: T::Id) -> Result<usize, T::Id> {
        self.index
            .get(&id)
            .copied()
            .ok_or(TreeStoreError::NotFound { id })
    }

    fn ancestors(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.node_routes[position].parent, |&ancestor| {
            self.node_routes[ancestor].parent
        })
    }
}

impl<T: TreeItem> TryFrom<Vec<T>> for TreeStore<T> {
    type Error = TreeStoreError<T::Id>;

    fn try_from(items: Vec<T>) -> std::result::Result<Self, Self::Error> {
        Self::new(items)
    }
}
