// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, sync::Arc};

use crate::{
    address::PATH_SEPARATOR, ChildId, CompositeTypes, Container as _, ContainerKind, Forest,
    HalfEdge, NodeContainer, NodeId, Parent, ParentLink, RootWalker,
};

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode<T: CompositeTypes> {
    pub(crate) id: NodeId,
    pub(crate) link: ParentLink,
    pub(crate) container: NodeContainer<T::Key>,
    pub(crate) value: T::Value,
}

impl<T: CompositeTypes> TreeNode<T> {
    pub(crate) fn new(container: ContainerKind, value: T::Value) -> Self {
        Self {
            id: NodeId::next(),
            link: ParentLink::default(),
            container: NodeContainer::new(container),
            value,
        }
    }

    /// Identity of this node.
    #[must_use]
    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub const fn link(&self) -> &ParentLink {
        &self.link
    }

    #[must_use]
    pub const fn parent(&self) -> Parent {
        self.link.parent()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.link.is_root()
    }

    /// Read-only access to the backing store.
    ///
    /// Mutations must go through the [`Forest`] for keeping the parent
    /// links consistent.
    #[must_use]
    pub const fn container(&self) -> &NodeContainer<T::Key> {
        &self.container
    }

    #[must_use]
    pub fn container_kind(&self) -> ContainerKind {
        self.container.kind()
    }

    /// Leaf nodes can never hold children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.container, NodeContainer::Null(_))
    }

    #[must_use]
    pub const fn value(&self) -> &T::Value {
        &self.value
    }
}

/// Borrowed view of a node within its forest.
///
/// Provides the node-centric API for reading the tree structure.
pub struct NodeRef<'a, T: CompositeTypes> {
    pub(crate) forest: &'a Forest<T>,
    pub(crate) node: &'a Arc<TreeNode<T>>,
}

impl<T: CompositeTypes> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CompositeTypes> Copy for NodeRef<'_, T> {}

impl<T: CompositeTypes> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("node", self.node).finish()
    }
}

impl<'a, T: CompositeTypes> NodeRef<'a, T> {
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node.id
    }

    #[must_use]
    pub fn tree_node(&self) -> &'a Arc<TreeNode<T>> {
        self.node
    }

    #[must_use]
    pub fn value(&self) -> &'a T::Value {
        &self.node.value
    }

    /// The current id of this node within its parent.
    ///
    /// `None` for root nodes.
    #[must_use]
    pub fn id(&self) -> Option<ChildId<T::Key>> {
        self.forest.id_of(self.node)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// The parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node
            .parent()
            .node_id()
            .and_then(|parent_id| self.forest.node(parent_id))
    }

    #[must_use]
    pub fn children(&self) -> Vec<HalfEdge<T::Key>> {
        self.node.container.children()
    }

    #[must_use]
    pub fn get_child(&self, id: &ChildId<T::Key>) -> Option<NodeRef<'a, T>> {
        self.node
            .container
            .get_child(id)
            .and_then(|child_id| self.forest.node(child_id))
    }

    #[must_use]
    pub fn get_child_such_that(
        &self,
        predicate: impl FnMut(&ChildId<T::Key>) -> bool,
    ) -> Option<NodeRef<'a, T>> {
        self.node
            .container
            .get_child_such_that(predicate)
            .and_then(|child_id| self.forest.node(child_id))
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.forest.path_of(self.node)
    }

    #[must_use]
    pub fn child_path(&self, child_id: &ChildId<T::Key>) -> String {
        format!("{path}{PATH_SEPARATOR}{child_id}", path = self.path())
    }

    #[must_use]
    pub fn parent_path(&self) -> String {
        self.parent().map(|parent| parent.path()).unwrap_or_default()
    }

    /// Walk from this node up to its root.
    #[must_use]
    pub fn ancestors(&self) -> RootWalker<'a, T> {
        RootWalker::new(self.forest, self.node.id)
    }

    /// The root of the tree that contains this node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'a, T> {
        self.ancestors().into_iter().last().unwrap_or(*self)
    }
}
