// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, ChildKey, Container, ContainerError, ContainerKind, HalfEdge, HashMap, NodeId};

/// Children stored by arbitrary keys.
///
/// Inserting at an occupied key displaces the previous occupant. Keys of
/// other children are never affected by insertions or removals.
#[derive(Debug, Clone)]
pub struct HashContainer<K: ChildKey> {
    children: HashMap<ChildId<K>, NodeId>,
}

impl<K: ChildKey> HashContainer<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Reverse lookup of the key under which the child is stored.
    ///
    /// O(n) in the number of children.
    #[must_use]
    pub fn current_key_of(&self, child: NodeId) -> Option<&ChildId<K>> {
        self.children
            .iter()
            .find_map(|(id, node_id)| (*node_id == child).then_some(id))
    }

    #[must_use]
    pub fn contains_id(&self, id: &ChildId<K>) -> bool {
        self.children.contains_key(id)
    }
}

impl<K: ChildKey> Default for HashContainer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChildKey> Container<K> for HashContainer<K> {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Hash
    }

    fn insert_child(
        &mut self,
        id: ChildId<K>,
        child: NodeId,
    ) -> Result<Option<NodeId>, ContainerError> {
        if self.current_key_of(child).is_some() {
            return Err(ContainerError::AlreadyAttached(child));
        }
        Ok(self.children.insert(id, child))
    }

    fn remove_child_id(&mut self, id: &ChildId<K>) -> Result<NodeId, ContainerError> {
        self.children.remove(id).ok_or(ContainerError::NotFound)
    }

    fn children(&self) -> Vec<HalfEdge<K>> {
        self.children
            .iter()
            .map(|(child_id, node_id)| HalfEdge {
                child_id: child_id.clone(),
                node_id: *node_id,
            })
            .collect()
    }

    fn child_id(&self, child: NodeId) -> Option<ChildId<K>> {
        self.current_key_of(child).cloned()
    }

    fn get_child(&self, id: &ChildId<K>) -> Option<NodeId> {
        self.children.get(id).copied()
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}
