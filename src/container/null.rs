// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, ChildKey, Container, ContainerError, ContainerKind, HalfEdge, NodeId};

/// Store of leaf nodes that never hold any children.
///
/// All mutations fail with [`ContainerError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContainer;

impl<K: ChildKey> Container<K> for NullContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Null
    }

    fn insert_child(
        &mut self,
        _id: ChildId<K>,
        _child: NodeId,
    ) -> Result<Option<NodeId>, ContainerError> {
        Err(ContainerError::Unsupported)
    }

    fn remove_child(&mut self, _child: NodeId) -> Result<NodeId, ContainerError> {
        Err(ContainerError::Unsupported)
    }

    fn remove_child_id(&mut self, _id: &ChildId<K>) -> Result<NodeId, ContainerError> {
        Err(ContainerError::Unsupported)
    }

    fn children(&self) -> Vec<HalfEdge<K>> {
        Vec::new()
    }

    fn child_id(&self, _child: NodeId) -> Option<ChildId<K>> {
        None
    }

    fn get_child(&self, _id: &ChildId<K>) -> Option<NodeId> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}
