// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view-model tree: identifiers, visual tokens, labels,
//! and the item/group descriptions handed to [`ViewTree`](crate::ViewTree).

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Size};
use thiserror::Error;

/// Identifier for a vertex in a [`ViewTree`](crate::ViewTree).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `VertexId` for it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `VertexId`.
///
/// Use [`ViewTree::is_alive`](crate::ViewTree::is_alive) to check liveness.
/// Stale ids never alias a different live vertex because the generation
/// must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VertexId(pub(crate) u32, pub(crate) u32);

impl VertexId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Opaque handle to whatever the renderer produced for a vertex.
///
/// The tree stores it and checks for its presence; it never looks inside.
/// Renderers mint these from their own identifiers with
/// [`Visual::from_raw`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Visual(u64);

impl Visual {
    /// Wraps a renderer-side identifier.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The renderer-side identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Where a label sits relative to its vertex.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LabelPlacement {
    /// Above the vertex.
    Top,
    /// Below the vertex.
    Bottom,
    /// Left of the vertex.
    Left,
    /// Right of the vertex.
    Right,
    /// Over the vertex center.
    Center,
}

/// A placement string that does not name a [`LabelPlacement`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown label placement `{0}`")]
pub struct PlacementError(pub String);

impl FromStr for LabelPlacement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(PlacementError(s.to_owned())),
        }
    }
}

impl fmt::Display for LabelPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        })
    }
}

/// Text attached to a vertex.
///
/// The placement is kept as authored; it is parsed at render time so that
/// one bad label does not prevent the rest of the model from loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Authored placement, e.g. `"bottom"`.
    pub placement: String,
}

impl Label {
    /// Creates a label.
    pub fn new(text: impl Into<String>, placement: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: placement.into(),
        }
    }

    /// Parses the authored placement.
    pub fn placement(&self) -> Result<LabelPlacement, PlacementError> {
        self.placement.parse()
    }
}

/// Description of a leaf vertex, consumed by
/// [`ViewTree::insert_item`](crate::ViewTree::insert_item).
#[derive(Clone, Debug)]
pub struct ViewItem {
    /// Display name.
    pub name: String,
    /// Center, in the parent group's content frame.
    pub center: Point,
    /// Size, in the parent group's content frame.
    pub size: Size,
    /// Style reference, opaque to the tree.
    pub style: Option<String>,
    /// Labels.
    pub labels: Vec<Label>,
}

impl ViewItem {
    /// Creates an item centered at `center` with the given `size`.
    pub fn new(name: impl Into<String>, center: impl Into<Point>, size: impl Into<Size>) -> Self {
        Self {
            name: name.into(),
            center: center.into(),
            size: size.into(),
            style: None,
            labels: Vec::new(),
        }
    }

    /// Sets the style reference.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Appends a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

/// Description of a composite vertex, consumed by
/// [`ViewTree::insert_group`](crate::ViewTree::insert_group).
#[derive(Clone, Debug)]
pub struct ViewGroup {
    /// Display name.
    pub name: String,
    /// Center, in the parent group's content frame.
    pub center: Point,
    /// Size, in the parent group's content frame.
    pub size: Size,
    /// Content-to-local scale applied to this group's children.
    pub scale: f64,
    /// Style reference, opaque to the tree.
    pub style: Option<String>,
    /// Labels.
    pub labels: Vec<Label>,
}

impl ViewGroup {
    /// Creates a group centered at `center` with the given `size` whose
    /// children are drawn at `scale`.
    pub fn new(
        name: impl Into<String>,
        center: impl Into<Point>,
        size: impl Into<Size>,
        scale: f64,
    ) -> Self {
        Self {
            name: name.into(),
            center: center.into(),
            size: size.into(),
            scale,
            style: None,
            labels: Vec::new(),
        }
    }

    /// Sets the style reference.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Appends a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, LabelPlacement, Visual};

    #[test]
    fn placements_parse_leniently() {
        assert_eq!("Top".parse::<LabelPlacement>(), Ok(LabelPlacement::Top));
        assert_eq!(
            " bottom ".parse::<LabelPlacement>(),
            Ok(LabelPlacement::Bottom)
        );
        assert_eq!(
            "centre".parse::<LabelPlacement>(),
            Ok(LabelPlacement::Center)
        );
        assert_eq!(LabelPlacement::Right.to_string(), "right");
    }

    #[test]
    fn malformed_placement_reports_original_text() {
        let label = Label::new("Stock", "Diagonal");
        let err = label.placement().unwrap_err();
        assert_eq!(err.0, "Diagonal");
        assert_eq!(err.to_string(), "unknown label placement `Diagonal`");
    }

    #[test]
    fn visual_roundtrips_raw_value() {
        assert_eq!(Visual::from_raw(42).raw(), 42);
    }
}
