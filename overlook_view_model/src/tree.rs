// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use tracing::debug;

use crate::VertexId;
use crate::error::TreeError;
use crate::types::{ViewGroup, ViewItem, Visual};
use crate::vertex::ViewVertex;

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    vertex: Option<ViewVertex>,
}

/// Arena of [`ViewVertex`]es forming one or more ordered, acyclic hierarchies.
///
/// Every vertex is positioned in its parent's content frame. A group maps
/// its content frame into its own parent frame by scaling by
/// [`ViewGroup::scale`] about its center and then translating to its center,
/// so absolute geometry is always derived, never stored.
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl ViewTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a detached leaf.
    pub fn insert_item(&mut self, item: ViewItem) -> VertexId {
        self.alloc(ViewVertex::from_item(item))
    }

    /// Adds a detached group.
    ///
    /// Fails with [`TreeError::InvalidScale`] unless the content scale is
    /// finite and positive.
    pub fn insert_group(&mut self, group: ViewGroup) -> Result<VertexId, TreeError> {
        if !group.scale.is_finite() || group.scale <= 0.0 {
            return Err(TreeError::InvalidScale(group.scale));
        }
        Ok(self.alloc(ViewVertex::from_group(group)))
    }

    /// Returns `true` if `id` refers to a live vertex of this tree.
    pub fn is_alive(&self, id: VertexId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a live vertex.
    pub fn get(&self, id: VertexId) -> Option<&ViewVertex> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.vertex.as_ref()
    }

    /// Looks up a live vertex, reporting stale ids as [`TreeError::Dead`].
    pub fn vertex(&self, id: VertexId) -> Result<&ViewVertex, TreeError> {
        self.get(id).ok_or(TreeError::Dead(id))
    }

    /// Parent group of `id`, if attached.
    pub fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.get(id)?.parent
    }

    /// Children of `id` in drawing order; empty for items and stale ids.
    pub fn contents(&self, id: VertexId) -> &[VertexId] {
        match self.get(id) {
            Some(vertex) => vertex.contents(),
            None => &[],
        }
    }

    /// Live vertices that have no parent.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "slot indices originate from u32 ids"
    )]
    pub fn roots(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            let vertex = slot.vertex.as_ref()?;
            if vertex.parent.is_some() {
                return None;
            }
            Some(VertexId::new(idx as u32, slot.generation))
        })
    }

    /// Iterates the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: VertexId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Number of ancestors of `id`; roots have depth `0`.
    pub fn depth(&self, id: VertexId) -> usize {
        self.ancestors(id).count()
    }

    /// Appends `child` to `group`'s contents and sets its parent.
    ///
    /// A vertex is attached at most once; attaching a vertex under itself or
    /// one of its descendants is rejected.
    pub fn add_content(&mut self, group: VertexId, child: VertexId) -> Result<(), TreeError> {
        let group_vertex = self.vertex(group)?;
        if group_vertex.is_leaf() {
            return Err(TreeError::NotAGroup(group));
        }
        if let Some(parent) = self.vertex(child)?.parent {
            return Err(TreeError::AlreadyAttached { child, parent });
        }
        if group == child || self.ancestors(group).any(|a| a == child) {
            return Err(TreeError::Cycle { group, child });
        }

        self.vertex_mut(child)?.parent = Some(group);
        if let Some(data) = self.vertex_mut(group)?.as_group_mut() {
            data.contents.push(child);
        }
        Ok(())
    }

    /// Removes `id` and its whole subtree, detaching it from its parent.
    ///
    /// Returns the number of vertices freed.
    pub fn remove(&mut self, id: VertexId) -> Result<usize, TreeError> {
        let parent = self.vertex(id)?.parent;
        if let Some(parent) = parent {
            if let Some(data) = self.vertex_mut(parent)?.as_group_mut() {
                data.contents.retain(|c| *c != id);
            }
        }

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(slot) = self.slots.get_mut(next.idx()) else {
                continue;
            };
            if slot.generation != next.generation() {
                continue;
            }
            let Some(vertex) = slot.vertex.take() else {
                continue;
            };
            stack.extend_from_slice(vertex.contents());
            self.free.push(next.0);
            self.len -= 1;
            freed += 1;
        }
        debug!(?id, freed, "removed view subtree");
        Ok(freed)
    }

    /// Records the renderer's visual for `id`.
    ///
    /// Visuals are set once; a second call fails with
    /// [`TreeError::VisualAlreadySet`].
    pub fn set_visual(&mut self, id: VertexId, visual: Visual) -> Result<(), TreeError> {
        let vertex = self.vertex_mut(id)?;
        if vertex.visual.is_some() {
            return Err(TreeError::VisualAlreadySet(id));
        }
        vertex.visual = Some(visual);
        Ok(())
    }

    /// Visual handle of `id`, once rendered.
    pub fn visual(&self, id: VertexId) -> Option<Visual> {
        self.get(id)?.visual
    }

    /// Transform from the frame `id` is positioned in (its parent's content
    /// frame) to world space. Identity for roots.
    pub fn frame_transform(&self, id: VertexId) -> Result<Affine, TreeError> {
        self.vertex(id)?;
        let chain: Vec<VertexId> = self.ancestors(id).collect();
        let mut transform = Affine::IDENTITY;
        for ancestor in chain.iter().rev() {
            transform *= self.local_content_transform(*ancestor)?;
        }
        Ok(transform)
    }

    /// Transform from a group's own content frame to world space.
    pub fn world_transform(&self, group: VertexId) -> Result<Affine, TreeError> {
        Ok(self.frame_transform(group)? * self.local_content_transform(group)?)
    }

    /// Absolute center of `id`.
    pub fn world_center(&self, id: VertexId) -> Result<Point, TreeError> {
        Ok(self.frame_transform(id)? * self.vertex(id)?.center)
    }

    /// Absolute bounds of `id`.
    pub fn world_bounds(&self, id: VertexId) -> Result<Rect, TreeError> {
        let local = self.vertex(id)?.local_bounds();
        Ok(self.frame_transform(id)?.transform_rect_bbox(local))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut ViewVertex, TreeError> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.vertex.as_mut())
            .ok_or(TreeError::Dead(id))
    }

    fn local_content_transform(&self, group: VertexId) -> Result<Affine, TreeError> {
        let vertex = self.vertex(group)?;
        let data = vertex.as_group().ok_or(TreeError::NotAGroup(group))?;
        Ok(Affine::translate(vertex.center.to_vec2()) * Affine::scale(data.scale))
    }

    fn alloc(&mut self, vertex: ViewVertex) -> VertexId {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.vertex = Some(vertex);
            return VertexId::new(idx, slot.generation);
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "more than u32::MAX vertices is unsupported"
        )]
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            vertex: Some(vertex),
        });
        VertexId::new(idx, 1)
    }
}

/// Iterator over the ancestors of a vertex, nearest first.
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a ViewTree,
    next: Option<VertexId>,
}

impl Iterator for Ancestors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
