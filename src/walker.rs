// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::{CompositeTypes, Forest, NodeId, NodeRef};

/// Lazy walk from a node up to the root of its tree.
///
/// Yields the starting node first, then its parent, and so on until the
/// root. The sentinel root is never yielded.
///
/// Each call of [`RootWalker::iter()`] starts a fresh traversal from the
/// starting node.
pub struct RootWalker<'a, T: CompositeTypes> {
    forest: &'a Forest<T>,
    start: NodeId,
}

impl<T: CompositeTypes> Clone for RootWalker<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CompositeTypes> Copy for RootWalker<'_, T> {}

impl<T: CompositeTypes> fmt::Debug for RootWalker<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootWalker")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

impl<'a, T: CompositeTypes> RootWalker<'a, T> {
    #[must_use]
    pub const fn new(forest: &'a Forest<T>, start: NodeId) -> Self {
        Self { forest, start }
    }

    #[must_use]
    pub const fn start(&self) -> NodeId {
        self.start
    }

    /// Start a new traversal.
    ///
    /// The iterator is empty if the starting node is not found.
    #[must_use]
    pub const fn iter(&self) -> AncestorNodeIter<'a, T> {
        AncestorNodeIter {
            forest: self.forest,
            next_node_id: Some(self.start),
        }
    }

    /// The last node of the walk.
    ///
    /// Returns `None` if the starting node is not found.
    #[must_use]
    pub fn find_root(&self) -> Option<NodeRef<'a, T>> {
        self.iter().last()
    }
}

impl<'a, T: CompositeTypes> IntoIterator for RootWalker<'a, T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = AncestorNodeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: CompositeTypes> IntoIterator for &RootWalker<'a, T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = AncestorNodeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator created by [`RootWalker::iter()`].
pub struct AncestorNodeIter<'a, T: CompositeTypes> {
    forest: &'a Forest<T>,
    next_node_id: Option<NodeId>,
}

impl<T: CompositeTypes> fmt::Debug for AncestorNodeIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AncestorNodeIter")
            .field("next_node_id", &self.next_node_id)
            .finish_non_exhaustive()
    }
}

impl<'a, T: CompositeTypes> Iterator for AncestorNodeIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.forest.node(self.next_node_id.take()?)?;
        self.next_node_id = node.tree_node().parent().node_id();
        Some(node)
    }
}

impl<T: CompositeTypes> std::iter::FusedIterator for AncestorNodeIter<'_, T> {}
