// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::VertexId;

/// Structural errors from [`ViewTree`](crate::ViewTree) operations.
///
/// These indicate programming errors in how the tree is built or how it is
/// synchronized with the renderer, not user-facing conditions.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TreeError {
    /// The id refers to a removed vertex (or was never issued by this tree).
    #[error("vertex {0:?} is not alive")]
    Dead(VertexId),

    /// Children can only be added to groups.
    #[error("vertex {0:?} is an item and cannot hold contents")]
    NotAGroup(VertexId),

    /// A vertex gets exactly one parent, once.
    #[error("vertex {child:?} is already attached to {parent:?}")]
    AlreadyAttached {
        /// Vertex being attached.
        child: VertexId,
        /// Its existing parent.
        parent: VertexId,
    },

    /// The attachment would make a vertex its own ancestor.
    #[error("attaching {child:?} under {group:?} would create a cycle")]
    Cycle {
        /// Prospective parent.
        group: VertexId,
        /// Vertex being attached.
        child: VertexId,
    },

    /// Group content scales must be finite and positive.
    #[error("group scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    /// Visuals are set once and never replaced.
    #[error("vertex {0:?} already carries a visual")]
    VisualAlreadySet(VertexId),

    /// The renderer produced no visual for a vertex that must be attached.
    #[error("vertex {0:?} has no rendered visual to attach")]
    MissingVisual(VertexId),

    /// A group was rendered without a container for its contents.
    #[error("group {0:?} has no visual container for its contents")]
    MissingContainer(VertexId),
}
