// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

//! Backing stores for the children of a node.

use thiserror::Error;

use crate::{ChildId, ChildKey, HalfEdge, NodeId};

mod array;
pub use self::array::ArrayContainer;

mod hash;
pub use self::hash::HashContainer;

mod null;
pub use self::null::NullContainer;

/// Rejected structural mutations.
///
/// Failures never modify any node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The container rejects the id, e.g. a key or an out-of-range
    /// position for an array container.
    #[error("invalid child id")]
    InvalidId,
    /// The id or child is not contained.
    #[error("child not found")]
    NotFound,
    /// The container never holds children.
    #[error("container does not support children")]
    Unsupported,
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// The node is already a child of some parent, possibly of this
    /// container. Relocating an attached node requires
    /// [`Forest::move_to`](crate::Forest::move_to).
    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),
    #[error("node cannot become a descendant of itself")]
    WouldCycle,
}

/// The different kinds of backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContainerKind {
    #[display(fmt = "array")]
    Array,
    #[display(fmt = "hash")]
    Hash,
    #[display(fmt = "null")]
    Null,
}

/// Minimal contract of a backing store.
///
/// Stores only keep track of which child sits at which id. Wiring the
/// parent link of the children is done by the [`Forest`](crate::Forest).
///
/// Implementations must provide [`Container::remove_child()`] and/or
/// [`Container::remove_child_id()`]. The default implementations are
/// defined in terms of each other.
pub trait Container<K: ChildKey> {
    fn kind(&self) -> ContainerKind;

    /// Place a child at the given id.
    ///
    /// Returns a previous occupant that has been displaced by the new child.
    /// A child that is already stored is rejected.
    ///
    /// On failure the state of the store remains unchanged.
    fn insert_child(
        &mut self,
        id: ChildId<K>,
        child: NodeId,
    ) -> Result<Option<NodeId>, ContainerError>;

    /// Remove the given child.
    fn remove_child(&mut self, child: NodeId) -> Result<NodeId, ContainerError> {
        let id = self.child_id(child).ok_or(ContainerError::NotFound)?;
        self.remove_child_id(&id)
    }

    /// Remove the child with the given id.
    fn remove_child_id(&mut self, id: &ChildId<K>) -> Result<NodeId, ContainerError> {
        let child = self.get_child(id).ok_or(ContainerError::NotFound)?;
        self.remove_child(child)
    }

    /// Snapshot of all children with their current ids.
    ///
    /// Ordered by position for array stores, unordered for hash stores.
    fn children(&self) -> Vec<HalfEdge<K>>;

    /// The current id of a child.
    ///
    /// Always resolved by looking up the child, never cached.
    fn child_id(&self, child: NodeId) -> Option<ChildId<K>> {
        self.children()
            .into_iter()
            .find(|edge| edge.node_id == child)
            .map(|edge| edge.child_id)
    }

    fn get_child(&self, id: &ChildId<K>) -> Option<NodeId> {
        self.children()
            .into_iter()
            .find(|edge| edge.child_id == *id)
            .map(|edge| edge.node_id)
    }

    /// The first child in iteration order whose id satisfies the predicate.
    fn get_child_such_that(&self, mut predicate: impl FnMut(&ChildId<K>) -> bool) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.children()
            .into_iter()
            .find(|edge| predicate(&edge.child_id))
            .map(|edge| edge.node_id)
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Backing store of a node.
#[derive(Debug, Clone)]
pub enum NodeContainer<K: ChildKey> {
    Array(ArrayContainer),
    Hash(HashContainer<K>),
    Null(NullContainer),
}

impl<K: ChildKey> NodeContainer<K> {
    #[must_use]
    pub fn new(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Array => Self::Array(ArrayContainer::new()),
            ContainerKind::Hash => Self::Hash(HashContainer::new()),
            ContainerKind::Null => Self::Null(NullContainer),
        }
    }
}

impl<K: ChildKey> Container<K> for NodeContainer<K> {
    fn kind(&self) -> ContainerKind {
        match self {
            Self::Array(_) => ContainerKind::Array,
            Self::Hash(_) => ContainerKind::Hash,
            Self::Null(_) => ContainerKind::Null,
        }
    }

    fn insert_child(
        &mut self,
        id: ChildId<K>,
        child: NodeId,
    ) -> Result<Option<NodeId>, ContainerError> {
        match self {
            Self::Array(array) => Container::<K>::insert_child(array, id, child),
            Self::Hash(hash) => hash.insert_child(id, child),
            Self::Null(null) => Container::<K>::insert_child(null, id, child),
        }
    }

    fn remove_child(&mut self, child: NodeId) -> Result<NodeId, ContainerError> {
        match self {
            Self::Array(array) => Container::<K>::remove_child(array, child),
            Self::Hash(hash) => hash.remove_child(child),
            Self::Null(null) => Container::<K>::remove_child(null, child),
        }
    }

    fn remove_child_id(&mut self, id: &ChildId<K>) -> Result<NodeId, ContainerError> {
        match self {
            Self::Array(array) => array.remove_child_id(id),
            Self::Hash(hash) => hash.remove_child_id(id),
            Self::Null(null) => null.remove_child_id(id),
        }
    }

    fn children(&self) -> Vec<HalfEdge<K>> {
        match self {
            Self::Array(array) => array.children(),
            Self::Hash(hash) => hash.children(),
            Self::Null(null) => null.children(),
        }
    }

    fn child_id(&self, child: NodeId) -> Option<ChildId<K>> {
        match self {
            Self::Array(array) => array.child_id(child),
            Self::Hash(hash) => hash.child_id(child),
            Self::Null(null) => null.child_id(child),
        }
    }

    fn get_child(&self, id: &ChildId<K>) -> Option<NodeId> {
        match self {
            Self::Array(array) => array.get_child(id),
            Self::Hash(hash) => hash.get_child(id),
            Self::Null(null) => null.get_child(id),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(array) => Container::<K>::len(array),
            Self::Hash(hash) => hash.len(),
            Self::Null(null) => Container::<K>::len(null),
        }
    }
}
