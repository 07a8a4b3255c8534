// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space queries over a [`ViewTree`]: hit testing and the
//! level-of-detail slice handed to the renderer.

use kurbo::{Point, Rect};

use crate::error::TreeError;
use crate::{VertexId, ViewTree};

impl ViewTree {
    /// Deepest vertex under `root` whose world bounds contain `world_point`.
    ///
    /// Later siblings are drawn on top, so they are tested first.
    pub fn hit_test(
        &self,
        root: VertexId,
        world_point: Point,
    ) -> Result<Option<VertexId>, TreeError> {
        if !self.world_bounds(root)?.contains(world_point) {
            return Ok(None);
        }
        for child in self.contents(root).iter().rev() {
            if let Some(hit) = self.hit_test(*child, world_point)? {
                return Ok(Some(hit));
            }
        }
        Ok(Some(root))
    }

    /// Vertices under `root` (inclusive) that should be drawn for the
    /// visible world rectangle `visible` at camera `scale`, in pre-order.
    ///
    /// Vertices whose world bounds miss `visible` are culled along with their
    /// subtree. Groups whose larger on-screen extent is below
    /// `min_screen_extent` pixels are returned but not descended into, so
    /// distant modules render as a single block.
    pub fn visible(
        &self,
        root: VertexId,
        visible: Rect,
        scale: f64,
        min_screen_extent: f64,
    ) -> Result<Vec<VertexId>, TreeError> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let bounds = self.world_bounds(id)?;
            if !overlaps(bounds, visible) {
                continue;
            }
            out.push(id);
            let on_screen = bounds.width().max(bounds.height()) * scale;
            if on_screen < min_screen_extent {
                continue;
            }
            // Reverse so that children pop in drawing order.
            stack.extend(self.contents(id).iter().rev().copied());
        }
        Ok(out)
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
