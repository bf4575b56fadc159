// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

static LAST_NODE_ID_VALUE: AtomicUsize = AtomicUsize::new(0);

/// Opaque identity of a node in a [`Forest`](crate::Forest).
///
/// Identities are handed out by the forest when a node is created and
/// are never reused within the same process, not even across different
/// forests. A stale id of a deleted node therefore never aliases a
/// newer node.
///
/// Identities are ephemeral and must not be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display(fmt = "#{}", _0)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    pub(crate) fn next() -> Self {
        loop {
            let last_value = LAST_NODE_ID_VALUE.fetch_add(1, Ordering::Relaxed);
            // fetch_add() wraps around on overflow and zero is skipped
            if let Some(next_value) = NonZeroUsize::new(last_value.wrapping_add(1)) {
                return Self(next_value);
            }
        }
    }

    /// The raw numeric value, e.g. for diagnostics.
    #[must_use]
    pub const fn to_usize(self) -> usize {
        self.0.get()
    }
}
