// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, NodeId};

/// Half-edge from a container to one of its children.
///
/// A snapshot of the child id at the time it was taken. Positional ids
/// of array containers may shift on later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfEdge<K> {
    /// Current id of the child within the (implicit) parent.
    pub child_id: ChildId<K>,

    /// The id of the child node.
    pub node_id: NodeId,
}
