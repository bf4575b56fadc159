// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::NodeId;

/// The current parent of a node.
///
/// Nodes without a real parent are owned by the sentinel root. The
/// sentinel is a plain state and not a node: it never appears in any
/// container, its path is empty and it has no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parent {
    #[default]
    Sentinel,
    Node(NodeId),
}

impl Parent {
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel)
    }

    #[must_use]
    pub const fn node_id(self) -> Option<NodeId> {
        match self {
            Self::Node(node_id) => Some(node_id),
            Self::Sentinel => None,
        }
    }
}

impl From<Option<NodeId>> for Parent {
    fn from(from: Option<NodeId>) -> Self {
        from.map_or(Self::Sentinel, Self::Node)
    }
}

/// Per-node link to the current parent.
///
/// The id of the node is not stored here. It is resolved on demand by
/// asking the container of the parent, see [`Forest::id()`](crate::Forest::id).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParentLink {
    parent: Parent,
}

impl ParentLink {
    #[must_use]
    pub const fn parent(&self) -> Parent {
        self.parent
    }

    /// Check if the node is owned by the sentinel root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_sentinel()
    }

    /// Attach to a real parent.
    ///
    /// Detaching must be requested explicitly with [`Self::clear_parent()`].
    pub(crate) fn update_parent(&mut self, parent: NodeId) {
        self.parent = Parent::Node(parent);
    }

    /// Hand the node over to the sentinel root.
    pub(crate) fn clear_parent(&mut self) {
        self.parent = Parent::Sentinel;
    }
}
