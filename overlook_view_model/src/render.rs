// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge to an external renderer.
//!
//! The tree asks the renderer for a [`Visual`] the first time it sees a
//! vertex and remembers it; later passes skip vertices that already carry
//! one. Freshly rendered children are attached to their group's content
//! container, so a renderer can build a retained scene graph that mirrors
//! the tree.

use tracing::{trace, warn};

use crate::error::TreeError;
use crate::types::{Label, LabelPlacement, Visual};
use crate::vertex::{VertexKind, ViewVertex};
use crate::{VertexId, ViewTree};

/// What a renderer returns for a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupVisual {
    /// The group's own visual.
    pub visual: Visual,
    /// Container that children's visuals are attached to.
    ///
    /// `None` is legal for empty groups but fatal as soon as a child needs
    /// attaching.
    pub container: Option<Visual>,
}

/// Produces and wires visuals for view vertices.
///
/// Returning `None` from a render call means the renderer could not produce
/// a visual; the tree reports this as [`TreeError::MissingVisual`] when the
/// vertex has to be attached.
pub trait Renderer {
    /// Renders a leaf.
    fn render_item(&mut self, id: VertexId, vertex: &ViewVertex) -> Option<Visual>;

    /// Renders a group shell and its content container.
    fn render_group(&mut self, id: VertexId, vertex: &ViewVertex) -> Option<GroupVisual>;

    /// Attaches `child` under a group's content `container`.
    fn attach(&mut self, container: Visual, child: Visual);

    /// Renders one label of a freshly rendered vertex.
    fn render_label(&mut self, visual: Visual, label: &Label, placement: LabelPlacement) {
        let _ = (visual, label, placement);
    }
}

impl ViewTree {
    /// Renders every vertex under `root` (inclusive) that has no visual yet.
    ///
    /// Returns the number of vertices rendered in this pass. Vertices that
    /// already carry a visual are left alone, but their contents are still
    /// visited so that children added since the last pass get rendered and
    /// attached.
    ///
    /// Labels with malformed placements are logged and skipped.
    pub fn render(
        &mut self,
        root: VertexId,
        renderer: &mut dyn Renderer,
    ) -> Result<usize, TreeError> {
        self.render_vertex(root, renderer)
            .map(|(_, rendered)| rendered)
    }

    /// Returns whether `id` was freshly rendered, plus the subtree count.
    fn render_vertex(
        &mut self,
        id: VertexId,
        renderer: &mut dyn Renderer,
    ) -> Result<(bool, usize), TreeError> {
        let mut rendered = 0;
        let vertex = self.vertex(id)?;
        let produced = if vertex.visual.is_some() {
            None
        } else {
            let produced = match vertex.kind {
                VertexKind::Item => renderer.render_item(id, vertex).map(|visual| GroupVisual {
                    visual,
                    container: None,
                }),
                VertexKind::Group(_) => renderer.render_group(id, vertex),
            };
            let visual = produced.ok_or(TreeError::MissingVisual(id))?.visual;
            render_labels(renderer, visual, vertex);
            produced
        };

        let fresh = produced.is_some();
        if let Some(produced) = produced {
            let vertex = self.vertex_mut(id)?;
            vertex.visual = Some(produced.visual);
            if let Some(data) = vertex.as_group_mut() {
                data.container = produced.container;
            }
            rendered += 1;
            trace!(?id, name = vertex.name(), "rendered view vertex");
        }

        let children = self.contents(id).to_vec();
        for child in children {
            let (child_fresh, child_rendered) = self.render_vertex(child, renderer)?;
            rendered += child_rendered;
            if child_fresh {
                let container = self
                    .vertex(id)?
                    .as_group()
                    .and_then(|g| g.container)
                    .ok_or(TreeError::MissingContainer(id))?;
                let child_visual = self.visual(child).ok_or(TreeError::MissingVisual(child))?;
                renderer.attach(container, child_visual);
            }
        }
        Ok((fresh, rendered))
    }
}

fn render_labels(renderer: &mut dyn Renderer, visual: Visual, vertex: &ViewVertex) {
    for label in vertex.labels() {
        match label.placement() {
            Ok(placement) => renderer.render_label(visual, label, placement),
            Err(err) => warn!(vertex = vertex.name(), %err, "skipping label"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupVisual, Renderer};
    use crate::{
        Label, LabelPlacement, TreeError, VertexId, ViewGroup, ViewItem, ViewTree, ViewVertex,
        Visual,
    };

    #[derive(Default)]
    struct Recording {
        next: u64,
        attached: Vec<(u64, u64)>,
        labels: Vec<(String, LabelPlacement)>,
        refuse_items: bool,
        omit_container: bool,
    }

    impl Recording {
        fn mint(&mut self) -> Visual {
            self.next += 1;
            Visual::from_raw(self.next)
        }
    }

    impl Renderer for Recording {
        fn render_item(&mut self, _id: VertexId, _vertex: &ViewVertex) -> Option<Visual> {
            if self.refuse_items {
                return None;
            }
            Some(self.mint())
        }

        fn render_group(&mut self, _id: VertexId, _vertex: &ViewVertex) -> Option<GroupVisual> {
            let visual = self.mint();
            let container = if self.omit_container {
                None
            } else {
                Some(self.mint())
            };
            Some(GroupVisual { visual, container })
        }

        fn attach(&mut self, container: Visual, child: Visual) {
            self.attached.push((container.raw(), child.raw()));
        }

        fn render_label(&mut self, _visual: Visual, label: &Label, placement: LabelPlacement) {
            self.labels.push((label.text.clone(), placement));
        }
    }

    fn model() -> (ViewTree, VertexId, VertexId) {
        let mut tree = ViewTree::new();
        let root = tree
            .insert_group(ViewGroup::new("root", (0.0, 0.0), (100.0, 100.0), 1.0))
            .unwrap();
        let item = tree.insert_item(
            ViewItem::new("stock", (0.0, 0.0), (10.0, 10.0))
                .with_label(Label::new("Population", "bottom"))
                .with_label(Label::new("broken", "sideways")),
        );
        tree.add_content(root, item).unwrap();
        (tree, root, item)
    }

    #[test]
    fn first_pass_renders_and_attaches() {
        let (mut tree, root, item) = model();
        let mut renderer = Recording::default();

        assert_eq!(tree.render(root, &mut renderer), Ok(2));

        let container = tree
            .get(root)
            .unwrap()
            .as_group()
            .unwrap()
            .container()
            .unwrap();
        let child = tree.visual(item).unwrap();
        assert_eq!(renderer.attached, vec![(container.raw(), child.raw())]);
        // The malformed label is skipped, the good one rendered.
        assert_eq!(
            renderer.labels,
            vec![("Population".to_owned(), LabelPlacement::Bottom)]
        );
    }

    #[test]
    fn rendered_vertices_are_not_rendered_again() {
        let (mut tree, root, _) = model();
        let mut renderer = Recording::default();
        tree.render(root, &mut renderer).unwrap();

        let late = tree.insert_item(ViewItem::new("late", (5.0, 5.0), (1.0, 1.0)));
        tree.add_content(root, late).unwrap();

        assert_eq!(tree.render(root, &mut renderer), Ok(1));
        assert_eq!(renderer.attached.len(), 2);
        assert_eq!(tree.render(root, &mut renderer), Ok(0));
    }

    #[test]
    fn missing_child_visual_is_fatal() {
        let (mut tree, root, item) = model();
        let mut renderer = Recording {
            refuse_items: true,
            ..Recording::default()
        };
        assert_eq!(
            tree.render(root, &mut renderer),
            Err(TreeError::MissingVisual(item))
        );
        assert!(renderer.attached.is_empty());
    }

    #[test]
    fn missing_group_container_is_fatal() {
        let (mut tree, root, _) = model();
        let mut renderer = Recording {
            omit_container: true,
            ..Recording::default()
        };
        assert_eq!(
            tree.render(root, &mut renderer),
            Err(TreeError::MissingContainer(root))
        );
    }
}
