// SPDX-FileCopyrightText: The im-composite authors
// SPDX-License-Identifier: MPL-2.0

use std::{convert::Infallible, fmt};

use thiserror::Error;

use crate::{address::PATH_SEPARATOR, CompositeTypes, Forest, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolvePathError {
    #[error("could not find resource: {path}")]
    NotFound { path: String },
    #[error("unknown root node {0}")]
    UnknownRoot(NodeId),
}

/// Outcome of a successful path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<S> {
    /// The node at the path.
    Found(NodeId),
    /// Returned by the missing-resource handler in place of a node.
    Substituted(S),
}

impl<S> Resolved<S> {
    #[must_use]
    pub fn found(self) -> Option<NodeId> {
        match self {
            Self::Found(node_id) => Some(node_id),
            Self::Substituted(_) => None,
        }
    }
}

/// The handler that is used if none has been provided.
///
/// Always fails with [`ResolvePathError::NotFound`].
pub fn default_missing_handler<S>(path: &str) -> Result<S, ResolvePathError> {
    Err(ResolvePathError::NotFound {
        path: path.to_owned(),
    })
}

pub type DefaultMissingHandler = fn(&str) -> Result<Infallible, ResolvePathError>;

/// Strip a single leading and a single trailing separator.
fn normalize_path(path: &str) -> &str {
    let path = path.strip_prefix(PATH_SEPARATOR).unwrap_or(path);
    path.strip_suffix(PATH_SEPARATOR).unwrap_or(path)
}

#[derive(Debug, Clone)]
enum ResolveState<S> {
    Descending {
        current: NodeId,
        // Byte offset of the unresolved remainder within the normalized path
        remaining: usize,
    },
    Done(Resolved<S>),
}

/// Locates a node by descending from a root along a path.
///
/// Each path segment is matched against the string projection of the
/// child ids. If multiple children match, the first one in iteration order
/// of the container is chosen.
///
/// If a segment cannot be matched the missing-resource handler is invoked
/// once with the original path. It either returns a substitute value that
/// terminates the resolution successfully or fails.
///
/// Not reentrant. A resolver may be reused for sequential queries.
pub struct PathResolver<'a, T: CompositeTypes, S = Infallible, H = DefaultMissingHandler> {
    forest: &'a Forest<T>,
    root: NodeId,
    path: String,
    missing_handler: H,
    state: ResolveState<S>,
}

impl<T, S, H> fmt::Debug for PathResolver<'_, T, S, H>
where
    T: CompositeTypes,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("root", &self.root)
            .field("path", &self.path)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a, T: CompositeTypes> PathResolver<'a, T> {
    /// Create a resolver that fails on missing resources.
    #[must_use]
    pub fn new(forest: &'a Forest<T>, root: NodeId, path: impl Into<String>) -> Self {
        Self::with_missing_handler(
            forest,
            root,
            path,
            default_missing_handler::<Infallible> as DefaultMissingHandler,
        )
    }
}

impl<'a, T, S, H> PathResolver<'a, T, S, H>
where
    T: CompositeTypes,
    H: FnMut(&str) -> Result<S, ResolvePathError>,
{
    #[must_use]
    pub fn with_missing_handler(
        forest: &'a Forest<T>,
        root: NodeId,
        path: impl Into<String>,
        missing_handler: H,
    ) -> Self {
        Self {
            forest,
            root,
            path: path.into(),
            missing_handler,
            state: ResolveState::Descending {
                current: root,
                remaining: 0,
            },
        }
    }

    /// The original, unnormalized path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Restart the resolution from the root.
    pub fn reset(&mut self) {
        self.state = ResolveState::Descending {
            current: self.root,
            remaining: 0,
        };
    }

    /// Restart the resolution from the root with a different path.
    pub fn reset_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.reset();
    }

    /// Check if the resolution has terminated.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, ResolveState::Done(_))
    }

    /// Descend by a single path segment.
    ///
    /// Does nothing if the resolution has already terminated, see
    /// [`Self::is_done()`].
    pub fn step(&mut self) -> Result<(), ResolvePathError> {
        let ResolveState::Descending { current, remaining } = self.state else {
            return Ok(());
        };
        if !self.forest.contains_node(self.root) {
            return Err(ResolvePathError::UnknownRoot(self.root));
        }
        let normalized = normalize_path(&self.path);
        let tail = &normalized[remaining..];
        if tail.is_empty() {
            self.state = ResolveState::Done(Resolved::Found(current));
            return Ok(());
        }
        let (head, rest_offset) = match tail.split_once(PATH_SEPARATOR) {
            Some((head, _)) => (head, remaining + head.len() + PATH_SEPARATOR.len_utf8()),
            None => (tail, normalized.len()),
        };
        let next = self
            .forest
            .get_child_such_that(current, |child_id| child_id.matches_segment(head));
        log::trace!("Resolved segment {head:?} below node {current} as {next:?}");
        if let Some(next) = next {
            self.state = ResolveState::Descending {
                current: next,
                remaining: rest_offset,
            };
            return Ok(());
        }
        log::debug!("Missing resource {path:?}", path = self.path);
        let substitute = (self.missing_handler)(&self.path)?;
        self.state = ResolveState::Done(Resolved::Substituted(substitute));
        Ok(())
    }

    /// Resolve the path from the root.
    ///
    /// Always starts over, regardless of any previous resolution.
    pub fn run(&mut self) -> Result<Resolved<S>, ResolvePathError>
    where
        S: Clone,
    {
        self.reset();
        loop {
            self.step()?;
            if let ResolveState::Done(resolved) = &self.state {
                return Ok(resolved.clone());
            }
        }
    }

    /// Resolve the path and pass the result to a continuation.
    pub fn find<R>(
        mut self,
        on_resolved: impl FnOnce(Resolved<S>) -> R,
    ) -> Result<R, ResolvePathError> {
        self.reset();
        loop {
            self.step()?;
            if let ResolveState::Done(resolved) = self.state {
                return Ok(on_resolved(resolved));
            }
        }
    }
}

impl<T: CompositeTypes> Forest<T> {
    /// Create a resolver for the given root and path.
    #[must_use]
    pub fn resolver(&self, root: NodeId, path: impl Into<String>) -> PathResolver<'_, T> {
        PathResolver::new(self, root, path)
    }

    /// Find the node at the given path below the root.
    ///
    /// Leading and trailing separators are optional. An empty path
    /// refers to the root itself.
    pub fn find_node(&self, root: NodeId, path: &str) -> Result<NodeId, ResolvePathError> {
        self.resolver(root, path).find(|resolved| match resolved {
            Resolved::Found(node_id) => node_id,
            Resolved::Substituted(never) => match never {},
        })
    }
}
