// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

//! Mutable composite trees with parent tracking and path-based addressing.
//!
//! All nodes are owned by a [`Forest`]. Every node knows its current parent
//! and its current id within that parent, even while the positions of
//! siblings shift. Nodes can be located from a root by a slash-delimited
//! path of ids.
//!
//! ```
//! use im_composite::{ChildId, CompositeTypes, Forest};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Types;
//!
//! impl CompositeTypes for Types {
//!     type Key = &'static str;
//!     type Value = ();
//! }
//!
//! let mut forest = Forest::<Types>::new();
//! let root = forest.create_hash(());
//! let list = forest.create_array(());
//! let first = forest.create_leaf(());
//! let second = forest.create_leaf(());
//! forest.add(root, ChildId::Key("list"), list).unwrap();
//! forest.add(list, ChildId::Index(0), second).unwrap();
//! forest.add(list, ChildId::Index(0), first).unwrap();
//!
//! assert_eq!(Some("/list/1".to_owned()), forest.path(second));
//! assert_eq!(Ok(second), forest.find_node(root, "list/1"));
//! ```

mod address;

mod child_id;
pub use self::child_id::{ChildId, ChildKey};

mod container;
pub use self::container::{
    ArrayContainer, Container, ContainerError, ContainerKind, HashContainer, NodeContainer,
    NullContainer,
};

mod edge;
pub use self::edge::HalfEdge;

mod forest;
pub use self::forest::{CompositeTypes, DescendantIter, Forest, RemovedSubtree};

mod link;
pub use self::link::{Parent, ParentLink};

mod mover;

mod node;
pub use self::node::{NodeRef, TreeNode};

mod node_id;
pub use self::node_id::NodeId;

mod resolver;
pub use self::resolver::{
    default_missing_handler, DefaultMissingHandler, PathResolver, ResolvePathError, Resolved,
};

mod walker;
pub use self::walker::{AncestorNodeIter, RootWalker};

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "im")]
type Vector<T> = im::Vector<T>;

#[cfg(not(feature = "im"))]
type Vector<T> = Vec<T>;
