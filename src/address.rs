// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ChildId, CompositeTypes, Forest, NodeId, Parent, TreeNode};

pub(crate) const PATH_SEPARATOR: char = '/';

impl<T: CompositeTypes> Forest<T> {
    /// The slash-delimited path of a node from the root of its tree.
    ///
    /// The path of a root is empty. Every other node appends a separator
    /// followed by its current id to the path of its parent, e.g. `/a/b/1`.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn path(&self, node_id: NodeId) -> Option<String> {
        self.lookup_node(node_id).map(|node| self.path_of(node))
    }

    pub(crate) fn path_of(&self, node: &TreeNode<T>) -> String {
        let mut segments = self
            .root_walker(node.id)
            .iter()
            .filter(|ancestor| !ancestor.is_root())
            .map(|ancestor| ancestor.id())
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default();
        segments.reverse();
        segments.into_iter().fold(String::new(), |mut path, segment| {
            path.push(PATH_SEPARATOR);
            path.push_str(&segment.to_string());
            path
        })
    }

    /// The would-be path of a child with the given id.
    ///
    /// The child does not need to exist.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn child_path(&self, node_id: NodeId, child_id: &ChildId<T::Key>) -> Option<String> {
        self.path(node_id)
            .map(|path| format!("{path}{PATH_SEPARATOR}{child_id}"))
    }

    /// The path of the parent.
    ///
    /// Empty for roots, i.e. the path of the sentinel root.
    ///
    /// Returns `None` if the node is not found.
    #[must_use]
    pub fn parent_path(&self, node_id: NodeId) -> Option<String> {
        match self.parent(node_id)? {
            Parent::Sentinel => Some(String::new()),
            Parent::Node(parent_id) => self.path(parent_id),
        }
    }
}
