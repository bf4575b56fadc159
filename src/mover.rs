// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, CompositeTypes, Forest, NodeId, Parent};

impl<T: CompositeTypes> Forest<T> {
    /// Relocate a node.
    ///
    /// First detaches the node from its current parent, then attaches it
    /// to the new parent at the new id. Without a new parent the node ends
    /// up parentless and the id is ignored.
    ///
    /// Both steps may fail independently and there is no rollback. A node
    /// that has been detached but is rejected by the new parent remains
    /// parentless. Check [`Forest::parent()`] for the outcome.
    ///
    /// Returns the id of the moved node.
    pub fn move_to(
        &mut self,
        node_id: NodeId,
        new_parent_id: Option<NodeId>,
        new_id: impl Into<ChildId<T::Key>>,
    ) -> NodeId {
        let Some(old_parent) = self.parent(node_id) else {
            log::warn!("Cannot move unknown node {node_id}");
            return node_id;
        };
        if let Parent::Node(old_parent_id) = old_parent {
            if let Err(err) = self.remove(old_parent_id, node_id) {
                log::warn!("Failed to detach node {node_id} from node {old_parent_id}: {err}");
            }
        }
        let Some(new_parent_id) = new_parent_id else {
            log::debug!("Moved node {node_id} out of its tree");
            return node_id;
        };
        match self.add(new_parent_id, new_id, node_id) {
            Ok(_) => {
                log::debug!("Moved node {node_id} to node {new_parent_id}");
            }
            Err(err) => {
                log::debug!("Failed to move node {node_id} to node {new_parent_id}: {err}");
            }
        }
        node_id
    }
}
