// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, sync::Arc};

use crate::{
    ChildId, ChildKey, Container as _, ContainerError, ContainerKind, HalfEdge, HashMap, NodeId,
    NodeRef, Parent, RootWalker, TreeNode,
};

/// Type system for [`Forest`].
pub trait CompositeTypes: Clone + Default + fmt::Debug {
    /// Keys of hash containers.
    type Key: ChildKey;

    /// Payload of each node.
    type Value: Clone + fmt::Debug;
}

/// Return type when removing a subtree from the forest.
#[derive(Debug, Clone)]
pub struct RemovedSubtree<T: CompositeTypes> {
    /// The former parent of the subtree root.
    pub parent: Parent,

    /// The detached subtree root.
    pub node: Arc<TreeNode<T>>,

    /// Ids of all deleted nodes, the subtree root first.
    pub removed_node_ids: Vec<NodeId>,
}

/// Arena of composite trees.
///
/// Owns all nodes. Every node that has no real parent is the root of a
/// separate tree. Parents only refer to their children by [`NodeId`] and
/// children only refer back to their parent by [`NodeId`].
///
/// Cheaply clonable if the `im` feature is enabled. A clone is an
/// independent snapshot that shares unmodified nodes.
#[derive(Debug, Clone)]
pub struct Forest<T: CompositeTypes> {
    nodes: HashMap<NodeId, Arc<TreeNode<T>>>,
}

impl<T: CompositeTypes> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CompositeTypes> Forest<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Create a new, parentless node with an empty container.
    pub fn create_node(&mut self, container: ContainerKind, value: T::Value) -> NodeId {
        let node = TreeNode::new(container, value);
        let node_id = node.id;
        log::debug!("Creating {container} node {node_id}");
        let old_node = self.nodes.insert(node_id, Arc::new(node));
        debug_assert!(old_node.is_none());
        node_id
    }

    /// Create a node with positional children.
    pub fn create_array(&mut self, value: T::Value) -> NodeId {
        self.create_node(ContainerKind::Array, value)
    }

    /// Create a node with keyed children.
    pub fn create_hash(&mut self, value: T::Value) -> NodeId {
        self.create_node(ContainerKind::Hash, value)
    }

    /// Create a node that never has children.
    pub fn create_leaf(&mut self, value: T::Value) -> NodeId {
        self.create_node(ContainerKind::Null, value)
    }

    #[must_use]
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    #[must_use]
    pub fn lookup_node(&self, node_id: NodeId) -> Option<&Arc<TreeNode<T>>> {
        self.nodes.get(&node_id)
    }

    #[must_use]
    pub fn node(&self, node_id: NodeId) -> Option<NodeRef<'_, T>> {
        self.lookup_node(node_id)
            .map(|node| NodeRef { forest: self, node })
    }

    fn node_mut(&mut self, node_id: NodeId) -> Option<&mut TreeNode<T>> {
        self.nodes.get_mut(&node_id).map(Arc::make_mut)
    }

    /// All nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Arc<TreeNode<T>>> {
        self.nodes.values()
    }

    /// Total number of nodes in all trees.
    #[must_use]
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// The roots of all trees in no particular order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_, T>> {
        self.nodes
            .values()
            .filter(|node| node.is_root())
            .map(|node| NodeRef { forest: self, node })
    }

    #[must_use]
    pub fn value(&self, node_id: NodeId) -> Option<&T::Value> {
        self.lookup_node(node_id).map(|node| &node.value)
    }

    #[must_use]
    pub fn value_mut(&mut self, node_id: NodeId) -> Option<&mut T::Value> {
        self.node_mut(node_id).map(|node| &mut node.value)
    }

    /// Replace the value of a node.
    ///
    /// Returns the previous value or gives back the new value if the node
    /// does not exist.
    pub fn set_value(&mut self, node_id: NodeId, value: T::Value) -> Result<T::Value, T::Value> {
        let Some(node) = self.node_mut(node_id) else {
            return Err(value);
        };
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// The current parent of a node.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn parent(&self, node_id: NodeId) -> Option<Parent> {
        self.lookup_node(node_id).map(|node| node.parent())
    }

    /// Check if a node is owned by the sentinel root.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn is_root(&self, node_id: NodeId) -> Option<bool> {
        self.lookup_node(node_id).map(|node| node.is_root())
    }

    /// The current id of a node within its parent.
    ///
    /// Resolved on every call by asking the container of the parent. The
    /// positional id of a child of an array container thereby reflects
    /// all preceding insertions and removals.
    ///
    /// Returns `None` if the node is not found or if it is a root.
    #[must_use]
    pub fn id(&self, node_id: NodeId) -> Option<ChildId<T::Key>> {
        self.lookup_node(node_id).and_then(|node| self.id_of(node))
    }

    pub(crate) fn id_of(&self, node: &TreeNode<T>) -> Option<ChildId<T::Key>> {
        let parent_id = node.parent().node_id()?;
        let child_id = self
            .lookup_node(parent_id)
            .and_then(|parent| parent.container.child_id(node.id));
        debug_assert!(
            child_id.is_some(),
            "parent {parent_id} must contain child {node_id}",
            node_id = node.id
        );
        child_id
    }

    /// Snapshot of the children of a node.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn children(&self, node_id: NodeId) -> Option<Vec<HalfEdge<T::Key>>> {
        self.lookup_node(node_id).map(|node| node.container.children())
    }

    #[must_use]
    pub fn get_child(&self, parent_id: NodeId, id: &ChildId<T::Key>) -> Option<NodeId> {
        self.lookup_node(parent_id)
            .and_then(|parent| parent.container.get_child(id))
    }

    /// The first child in iteration order whose id satisfies the predicate.
    #[must_use]
    pub fn get_child_such_that(
        &self,
        parent_id: NodeId,
        predicate: impl FnMut(&ChildId<T::Key>) -> bool,
    ) -> Option<NodeId> {
        self.lookup_node(parent_id)
            .and_then(|parent| parent.container.get_child_such_that(predicate))
    }

    /// Attach a parentless node as a child.
    ///
    /// A hash container displaces any previous occupant of the id, which
    /// then becomes parentless.
    ///
    /// Returns the id of the attached child. In case of an error no node is
    /// modified.
    pub fn add(
        &mut self,
        parent_id: NodeId,
        id: impl Into<ChildId<T::Key>>,
        child_id: NodeId,
    ) -> Result<NodeId, ContainerError> {
        let id = id.into();
        let child = self
            .lookup_node(child_id)
            .ok_or(ContainerError::UnknownNode(child_id))?;
        if !child.is_root() {
            return Err(ContainerError::AlreadyAttached(child_id));
        }
        if !self.contains_node(parent_id) {
            return Err(ContainerError::UnknownNode(parent_id));
        }
        if self
            .root_walker(parent_id)
            .iter()
            .any(|ancestor| ancestor.node_id() == child_id)
        {
            return Err(ContainerError::WouldCycle);
        }
        let Some(parent) = self.node_mut(parent_id) else {
            return Err(ContainerError::UnknownNode(parent_id));
        };
        log::debug!("Adding child node {child_id} with id {id} to node {parent_id}");
        let displaced = parent.container.insert_child(id, child_id)?;
        if let Some(displaced_id) = displaced {
            log::debug!("Detaching displaced child node {displaced_id} from node {parent_id}");
            self.clear_parent_of(displaced_id);
        }
        if let Some(child) = self.node_mut(child_id) {
            child.link.update_parent(parent_id);
        }
        debug_assert!(self.id(child_id).is_some());
        Ok(child_id)
    }

    /// Detach a child from its parent.
    ///
    /// Returns the id of the detached child that is now parentless.
    pub fn remove(
        &mut self,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<NodeId, ContainerError> {
        let parent = self
            .node_mut(parent_id)
            .ok_or(ContainerError::UnknownNode(parent_id))?;
        let removed_id = parent.container.remove_child(child_id)?;
        debug_assert_eq!(removed_id, child_id);
        log::debug!("Removed child node {removed_id} from node {parent_id}");
        self.clear_parent_of(removed_id);
        Ok(removed_id)
    }

    /// Detach the child with the given id from its parent.
    ///
    /// Returns the id of the detached child that is now parentless.
    pub fn remove_id(
        &mut self,
        parent_id: NodeId,
        id: impl Into<ChildId<T::Key>>,
    ) -> Result<NodeId, ContainerError> {
        let id = id.into();
        let parent = self
            .node_mut(parent_id)
            .ok_or(ContainerError::UnknownNode(parent_id))?;
        let removed_id = parent.container.remove_child_id(&id)?;
        log::debug!("Removed child node {removed_id} with id {id} from node {parent_id}");
        self.clear_parent_of(removed_id);
        Ok(removed_id)
    }

    fn clear_parent_of(&mut self, node_id: NodeId) {
        debug_assert!(self.contains_node(node_id));
        if let Some(node) = self.node_mut(node_id) {
            node.link.clear_parent();
        }
    }

    /// All descendants of a node, excluding the node itself.
    ///
    /// Depth-first order: parent nodes are visited before their children
    /// and siblings in the iteration order of their container.
    #[must_use]
    pub fn descendants(&self, node_id: NodeId) -> DescendantIter<'_, T> {
        let mut iter = DescendantIter {
            forest: self,
            pending: Vec::new(),
        };
        iter.push_children_of(node_id);
        iter
    }

    #[must_use]
    pub fn count_descendants(&self, node_id: NodeId) -> usize {
        self.descendants(node_id).count()
    }

    /// Detach a node from its parent and delete it together with all
    /// its descendants.
    ///
    /// Returns `None` if the node is not found.
    pub fn remove_subtree(&mut self, node_id: NodeId) -> Option<RemovedSubtree<T>> {
        let parent = self.parent(node_id)?;
        if let Parent::Node(parent_id) = parent {
            if let Err(err) = self.remove(parent_id, node_id) {
                log::warn!("Failed to detach node {node_id} from node {parent_id}: {err}");
                return None;
            }
        }
        let removed_node_ids = std::iter::once(node_id)
            .chain(self.descendants(node_id).map(|half_edge| half_edge.node_id))
            .collect::<Vec<_>>();
        let node_count_before = self.nodes_count();
        let node = self.nodes.remove(&node_id)?;
        for descendant_id in &removed_node_ids[1..] {
            self.nodes.remove(descendant_id);
        }
        debug_assert_eq!(
            node_count_before - self.nodes_count(),
            removed_node_ids.len()
        );
        log::debug!(
            "Removed subtree of node {node_id} with {count} node(s)",
            count = removed_node_ids.len()
        );
        Some(RemovedSubtree {
            parent,
            node,
            removed_node_ids,
        })
    }

    /// Walk from a node up to the root of its tree.
    #[must_use]
    pub const fn root_walker(&self, node_id: NodeId) -> RootWalker<'_, T> {
        RootWalker::new(self, node_id)
    }

    /// The root of the tree that contains the given node.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn find_root(&self, node_id: NodeId) -> Option<NodeId> {
        self.root_walker(node_id)
            .find_root()
            .map(|root| root.node_id())
    }
}

/// Iterator created by [`Forest::descendants()`].
pub struct DescendantIter<'a, T: CompositeTypes> {
    forest: &'a Forest<T>,
    // Top of the stack is the next edge to visit
    pending: Vec<HalfEdge<T::Key>>,
}

impl<T: CompositeTypes> DescendantIter<'_, T> {
    fn push_children_of(&mut self, node_id: NodeId) {
        if let Some(children) = self.forest.children(node_id) {
            self.pending.extend(children.into_iter().rev());
        }
    }
}

impl<T: CompositeTypes> fmt::Debug for DescendantIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescendantIter")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<T: CompositeTypes> Iterator for DescendantIter<'_, T> {
    type Item = HalfEdge<T::Key>;

    fn next(&mut self) -> Option<Self::Item> {
        let half_edge = self.pending.pop()?;
        self.push_children_of(half_edge.node_id);
        Some(half_edge)
    }
}

impl<T: CompositeTypes> std::iter::FusedIterator for DescendantIter<'_, T> {}
