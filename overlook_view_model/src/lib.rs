// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook View Model: the nested diagram hierarchy a viewport frames.
//!
//! A diagram is a tree of **groups** (modules that contain other vertices
//! and draw them at their own content scale) and **items** (leaves). Every
//! vertex is positioned relative to its parent's content frame, which is
//! what lets a deeply nested module be authored at a comfortable size and
//! shrunk into its parent.
//!
//! - [`ViewTree`]: arena holding the vertices and their parent links.
//! - [`ViewItem`] / [`ViewGroup`]: descriptions consumed on insert.
//! - [`ViewVertex`]: a stored vertex; [`ViewVertex::is_leaf`] tells the variants apart.
//! - [`VertexId`]: generational handle of a vertex.
//! - [`Visual`]: opaque, set-once token produced by an external [`Renderer`].
//! - [`TreeError`]: structural failures, including render/attach desynchronization.
//!
//! Key operations:
//! - [`ViewTree::add_content`] attaches a vertex to a group exactly once.
//! - [`ViewTree::world_bounds`] composes parent frames into absolute geometry.
//! - [`ViewTree::visible`] yields the level-of-detail slice for a visible rectangle.
//! - [`ViewTree::hit_test`] finds the deepest vertex under a world point.
//! - [`ViewTree::render`] populates missing visuals through a [`Renderer`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use overlook_view_model::{ViewGroup, ViewItem, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let model = tree
//!     .insert_group(ViewGroup::new("model", (0.0, 0.0), (800.0, 600.0), 1.0))
//!     .unwrap();
//! // A module whose contents are drawn at a quarter of their authored size.
//! let module = tree
//!     .insert_group(ViewGroup::new("population", (200.0, 100.0), (200.0, 150.0), 0.25))
//!     .unwrap();
//! let stock = tree.insert_item(ViewItem::new("births", (40.0, 0.0), (80.0, 40.0)));
//! tree.add_content(model, module).unwrap();
//! tree.add_content(module, stock).unwrap();
//!
//! // 200 + 0.25 * 40 = 210; 80 x 40 shrinks to 20 x 10.
//! let bounds = tree.world_bounds(stock).unwrap();
//! assert_eq!(bounds, Rect::from_center_size((210.0, 100.0), (20.0, 10.0)));
//! ```

mod error;
mod query;
mod render;
mod tree;
mod types;
mod vertex;

pub use error::TreeError;
pub use render::{GroupVisual, Renderer};
pub use tree::{Ancestors, ViewTree};
pub use types::{Label, LabelPlacement, PlacementError, VertexId, ViewGroup, ViewItem, Visual};
pub use vertex::{GroupData, VertexKind, ViewVertex};
