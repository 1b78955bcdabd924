//! Nested materialization of a [`TreeStore`].
//!
//! [`TreeStore::get_structure`] turns the flat index into a forest of
//! [`StructureNode`]s. Every node holds a copy of the stored item, so the store
//! and anything previously borrowed from it are never touched. Each item is
//! copied once; a finished subtree is shared through an [`Rc`] by its parent
//! and by the top level.

use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::item::TreeItem;
use crate::store::TreeStore;

/// An item together with its nested children.
///
/// Serializes as the item's own fields plus a `children` array when the node
/// has children, and as the bare item otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureNode<T> {
    #[serde(flatten)]
    item: T,
    #[serde(skip_serializing_if = "Children::is_empty")]
    children: Children<T>,
}

/// Child list of a [`StructureNode`].
///
/// Dropping releases uniquely owned descendants from an explicit stack, so a
/// chain of any depth is freed without recursion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
struct Children<T>(Vec<Rc<StructureNode<T>>>);

impl<T> Children<T> {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.0);
        while let Some(child) = stack.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child) {
                stack.append(&mut node.children.0);
            }
        }
    }
}

impl<T> StructureNode<T> {
    #[must_use]
    pub fn new(item: T, children: Vec<Rc<StructureNode<T>>>) -> Self {
        Self {
            item,
            children: Children(children),
        }
    }

    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[must_use]
    pub fn children(&self) -> &[Rc<StructureNode<T>>] {
        &self.children.0
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (T, Vec<Rc<StructureNode<T>>>) {
        let StructureNode { item, mut children } = self;
        (item, std::mem::take(&mut children.0))
    }

    /// Pre-order walk over this node and all of its descendants.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'_, T> {
        Flatten { stack: vec![self] }
    }
}

/// Iterator returned by [`StructureNode::flatten`].
pub struct Flatten<'a, T> {
    stack: Vec<&'a StructureNode<T>>,
}

impl<'a, T> Iterator for Flatten<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.0.iter().rev().map(|child| &**child));
        Some(&node.item)
    }
}

impl<T: TreeItem + Clone> TreeStore<T> {
    /// Materializes the nested forest.
    ///
    /// The result holds, in input order, every item that has at least one
    /// child, each with its complete subtree attached. Children that have
    /// children of their own are nested the same way at every level. A node
    /// with children is built once and shared between the top level and its
    /// parent.
    ///
    /// An item that already carries its own `children` field (see
    /// [`TreeItem::has_children_field`]) is left unannotated but is still kept
    /// at the top level.
    ///
    /// Nodes are built from the last input position backwards. Children always
    /// come after their parent in the input, so every child subtree is finished
    /// before its parent is assembled.
    #[must_use]
    pub fn get_structure(&self) -> Vec<Rc<StructureNode<T>>> {
        let len = self.items.len();
        // `built[len - 1 - position]` holds the node for `position`.
        let mut built: Vec<Rc<StructureNode<T>>> = Vec::with_capacity(len);

        for position in (0..len).rev() {
            let item = &self.items[position];
            let route = &self.node_routes[position];
            let node = if route.children.is_empty() || item.has_children_field() {
                StructureNode::new(item.clone(), Vec::new())
            } else {
                trace!(id = ?item.id(), children = route.children.len(), "attaching children");
                let mut item = item.clone();
                item.clear_children_field();
                let children = route
                    .children
                    .iter()
                    .map(|&child| Rc::clone(&built[len - 1 - child]))
                    .collect();
                StructureNode::new(item, children)
            };
            built.push(Rc::new(node));
        }
        built.reverse();

        let structure: Vec<_> = built
            .into_iter()
            .filter(|node| node.has_children() || node.item.has_children_field())
            .collect();
        debug!(
            items = len,
            top_level = structure.len(),
            "materialized tree structure"
        );
        structure
    }
}
