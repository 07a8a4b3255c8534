// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::VertexId;
use crate::types::{Label, ViewGroup, ViewItem, Visual};

/// A vertex stored in a [`ViewTree`](crate::ViewTree).
///
/// Position and size are expressed in the parent's content frame; nothing
/// here is in world space. Use [`ViewTree::world_bounds`](crate::ViewTree::world_bounds)
/// for absolute geometry.
#[derive(Clone, Debug)]
pub struct ViewVertex {
    pub(crate) name: String,
    pub(crate) center: Point,
    pub(crate) size: Size,
    pub(crate) style: Option<String>,
    pub(crate) labels: Vec<Label>,
    pub(crate) visual: Option<Visual>,
    pub(crate) parent: Option<VertexId>,
    pub(crate) kind: VertexKind,
}

/// Variant-specific data of a [`ViewVertex`].
#[derive(Clone, Debug)]
pub enum VertexKind {
    /// A leaf.
    Item,
    /// A composite with nested contents.
    Group(GroupData),
}

/// Data carried only by group vertices.
#[derive(Clone, Debug)]
pub struct GroupData {
    pub(crate) scale: f64,
    pub(crate) contents: Vec<VertexId>,
    pub(crate) container: Option<Visual>,
}

impl GroupData {
    /// Content-to-local scale applied to children.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Children, in drawing order.
    pub fn contents(&self) -> &[VertexId] {
        &self.contents
    }

    /// Renderer container that children's visuals are attached to.
    pub fn container(&self) -> Option<Visual> {
        self.container
    }
}

impl ViewVertex {
    pub(crate) fn from_item(item: ViewItem) -> Self {
        Self {
            name: item.name,
            center: item.center,
            size: item.size,
            style: item.style,
            labels: item.labels,
            visual: None,
            parent: None,
            kind: VertexKind::Item,
        }
    }

    pub(crate) fn from_group(group: ViewGroup) -> Self {
        Self {
            name: group.name,
            center: group.center,
            size: group.size,
            style: group.style,
            labels: group.labels,
            visual: None,
            parent: None,
            kind: VertexKind::Group(GroupData {
                scale: group.scale,
                contents: Vec::new(),
                container: None,
            }),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Center X in the parent's content frame.
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Center Y in the parent's content frame.
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Center in the parent's content frame.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Width in the parent's content frame.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height in the parent's content frame.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Size in the parent's content frame.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounds in the parent's content frame.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Style reference.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Labels as authored.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Visual handle, once rendered.
    pub fn visual(&self) -> Option<Visual> {
        self.visual
    }

    /// Parent group, once attached.
    pub fn parent(&self) -> Option<VertexId> {
        self.parent
    }

    /// Variant data.
    pub fn kind(&self) -> &VertexKind {
        &self.kind
    }

    /// Group data, if this is a group.
    pub fn as_group(&self) -> Option<&GroupData> {
        match &self.kind {
            VertexKind::Group(g) => Some(g),
            VertexKind::Item => None,
        }
    }

    /// `true` for items, `false` for groups.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, VertexKind::Item)
    }

    /// Children in drawing order; empty for items.
    pub fn contents(&self) -> &[VertexId] {
        match &self.kind {
            VertexKind::Group(g) => &g.contents,
            VertexKind::Item => &[],
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut GroupData> {
        match &mut self.kind {
            VertexKind::Group(g) => Some(g),
            VertexKind::Item => None,
        }
    }
}
