// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, ChildKey, Container, ContainerError, ContainerKind, HalfEdge, NodeId, Vector};

/// Children stored in a contiguous sequence.
///
/// The id of a child is its current position. Inserting or removing a
/// child shifts the positions of all subsequent children, which are
/// never touched directly. Their ids are only observed at read time
/// through [`ArrayContainer::current_index_of()`].
#[derive(Debug, Clone, Default)]
pub struct ArrayContainer {
    children: Vector<NodeId>,
}

impl ArrayContainer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vector::new(),
        }
    }

    /// Scan for the child and report its current position.
    ///
    /// O(n) in the number of children.
    #[must_use]
    pub fn current_index_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|node_id| *node_id == child)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All children in positional order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().copied()
    }
}

impl<K: ChildKey> Container<K> for ArrayContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Array
    }

    fn insert_child(
        &mut self,
        id: ChildId<K>,
        child: NodeId,
    ) -> Result<Option<NodeId>, ContainerError> {
        let Some(index) = id.as_index() else {
            return Err(ContainerError::InvalidId);
        };
        // Appending at the end is permitted
        if index > self.children.len() {
            return Err(ContainerError::InvalidId);
        }
        if self.current_index_of(child).is_some() {
            return Err(ContainerError::AlreadyAttached(child));
        }
        self.children.insert(index, child);
        Ok(None)
    }

    fn remove_child_id(&mut self, id: &ChildId<K>) -> Result<NodeId, ContainerError> {
        let Some(index) = id.as_index() else {
            return Err(ContainerError::InvalidId);
        };
        if index >= self.children.len() {
            return Err(ContainerError::NotFound);
        }
        Ok(self.children.remove(index))
    }

    fn children(&self) -> Vec<HalfEdge<K>> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, node_id)| HalfEdge {
                child_id: ChildId::Index(index),
                node_id: *node_id,
            })
            .collect()
    }

    fn child_id(&self, child: NodeId) -> Option<ChildId<K>> {
        self.current_index_of(child).map(ChildId::Index)
    }

    fn get_child(&self, id: &ChildId<K>) -> Option<NodeId> {
        id.as_index().and_then(|index| self.get(index))
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}
