// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, hash::Hash};

/// Keys that are accepted by hash-backed containers.
///
/// Every key has a deterministic string projection through [`fmt::Display`]
/// that is used for matching path segments.
pub trait ChildKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<K> ChildKey for K where K: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Identifier of a child relative to its parent.
///
/// The meaning depends on the container of the parent:
///
/// - array containers only accept [`ChildId::Index`] and report the current,
///   contiguous position of a child,
/// - hash containers accept both variants as arbitrary keys,
/// - null containers never hold children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChildId<K> {
    Index(usize),
    Key(K),
}

impl<K> ChildId<K> {
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }

    #[must_use]
    pub const fn as_key(&self) -> Option<&K> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }
}

impl<K: fmt::Display> ChildId<K> {
    /// Check if the string projection of this id equals the given path segment.
    ///
    /// Integer ids match their decimal representation, i.e. `Index(1)`
    /// matches the segment `"1"`.
    #[must_use]
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.to_string() == segment
    }
}

impl<K> From<usize> for ChildId<K> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<K: fmt::Display> fmt::Display for ChildId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => index.fmt(f),
            Self::Key(key) => key.fmt(f),
        }
    }
}
