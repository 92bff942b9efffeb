//! Layout pass: minimum sizes, size distribution and screen rectangles

use crate::config::DockingConfig;
use crate::error::{DockError, DockResult};
use crate::geometry::{Rect, Size};
use crate::model::{DockLength, GroupData, LayoutTree, NodeId, NodeKind, NodeTag, Orientation};

use super::distribute::{distribute, ChildMeasure};

/// A draggable splitter between two children of a split container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterBar {
    /// Panel or group owning the splitter
    pub panel: NodeId,
    /// The splitter sits between children `index` and `index + 1`
    pub index: usize,
    pub orientation: Orientation,
    /// Hit-testing rectangle
    pub rect: Rect,
}

impl LayoutTree {
    /// Minimum size a node needs to lay out its subtree
    pub fn minimum_size(&self, id: NodeId, config: &DockingConfig) -> Size {
        let Some(node) = self.get(id) else {
            return Size::default();
        };
        let own = node.size.min();
        let computed = match &node.kind {
            NodeKind::Pane(_) => Size::new(config.pane_min_width, config.pane_min_height),
            NodeKind::Panel { orientation }
            | NodeKind::Group(GroupData { orientation, .. }) => {
                let children = node.children();
                let mut along = config.splitter_size * children.len().saturating_sub(1) as f64;
                let mut across: f64 = 0.0;
                for &child in children {
                    let min = self.minimum_size(child, config);
                    along += min.along(*orientation);
                    across = across.max(min.across(*orientation));
                }
                match orientation {
                    Orientation::Horizontal => Size::new(along, across),
                    Orientation::Vertical => Size::new(across, along),
                }
            }
            NodeKind::FloatingWindow(_) => node
                .children()
                .first()
                .map(|&child| self.minimum_size(child, config))
                .unwrap_or_default(),
            NodeKind::Root | NodeKind::Content(_) | NodeKind::AnchorSide(_) => Size::default(),
        };
        Size::new(
            computed.width.max(own.width),
            computed.height.max(own.height),
        )
    }

    /// Lay out the docked tree inside `root_rect` and every floating window
    /// inside its own rectangle
    ///
    /// Stores each node's resolved `actual` size and screen `rect`, and
    /// returns the splitter bars for hit testing.
    pub fn arrange(&mut self, root_rect: Rect, config: &DockingConfig) -> Vec<SplitterBar> {
        let mut splitters = Vec::new();
        let root = self.root();
        self.place(root, root_rect);
        let root_panel = self.root_panel();
        self.arrange_node(root_panel, root_rect, config, &mut splitters);

        for window in self.floating_windows() {
            let rect = match self.kind(window) {
                Some(NodeKind::FloatingWindow(data)) => data.rect,
                _ => continue,
            };
            self.place(window, rect);
            let children = self.children(window).to_vec();
            for child in children {
                self.arrange_node(child, rect, config, &mut splitters);
            }
        }
        splitters
    }

    fn place(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.get_mut(id) {
            node.rect = rect;
            node.actual = rect.size();
        }
    }

    fn arrange_node(
        &mut self,
        id: NodeId,
        rect: Rect,
        config: &DockingConfig,
        splitters: &mut Vec<SplitterBar>,
    ) {
        self.place(id, rect);
        let children = self.children(id).to_vec();

        let Some(tag) = self.tag(id) else {
            return;
        };
        match tag {
            NodeTag::Pane => {
                // Contents share the area below the tab strip
                let strip = config.tab_strip_height.min(rect.height);
                let body = Rect::new(rect.x, rect.y + strip, rect.width, rect.height - strip);
                for child in children {
                    self.place(child, body);
                }
            }
            NodeTag::Panel | NodeTag::Group => {
                let Some(orientation) = self.orientation(id) else {
                    return;
                };
                if children.is_empty() {
                    return;
                }
                let measures: Vec<ChildMeasure> = children
                    .iter()
                    .map(|&child| {
                        let node = self.get(child);
                        ChildMeasure::new(
                            node.map(|n| n.size.along(orientation)).unwrap_or_default(),
                            self.minimum_size(child, config).along(orientation),
                            node.map(|n| n.actual.along(orientation)).unwrap_or(0.0),
                        )
                    })
                    .collect();
                let sizes = distribute(
                    rect.size().along(orientation),
                    config.splitter_size,
                    &measures,
                );

                let mut offset = 0.0;
                for (i, (&child, &size)) in children.iter().zip(&sizes).enumerate() {
                    let child_rect = match orientation {
                        Orientation::Horizontal => {
                            Rect::new(rect.x + offset, rect.y, size, rect.height)
                        }
                        Orientation::Vertical => {
                            Rect::new(rect.x, rect.y + offset, rect.width, size)
                        }
                    };
                    self.arrange_node(child, child_rect, config, splitters);
                    offset += size;

                    // Splitter bar between children (not after the last one)
                    if i + 1 < children.len() {
                        let bar = match orientation {
                            Orientation::Horizontal => Rect::new(
                                rect.x + offset,
                                rect.y,
                                config.splitter_size,
                                rect.height,
                            ),
                            Orientation::Vertical => Rect::new(
                                rect.x,
                                rect.y + offset,
                                rect.width,
                                config.splitter_size,
                            ),
                        };
                        splitters.push(SplitterBar {
                            panel: id,
                            index: i,
                            orientation,
                            rect: bar,
                        });
                        offset += config.splitter_size;
                    }
                }
            }
            _ => {}
        }
    }

    /// Move the splitter between children `index` and `index + 1` of a split
    /// container by `delta` pixels
    ///
    /// The move is clamped so neither child drops below its minimum. Each
    /// child keeps its measure type: fixed children get new pixel sizes, star
    /// children get rescaled weights. Returns the delta actually applied; run
    /// [`arrange`](Self::arrange) afterwards to update rectangles.
    pub fn resize_splitter(
        &mut self,
        panel: NodeId,
        index: usize,
        delta: f64,
        config: &DockingConfig,
    ) -> DockResult<f64> {
        let orientation = self.orientation(panel).ok_or_else(|| DockError::UnexpectedKind {
            node: panel,
            found: self.tag(panel).unwrap_or(NodeTag::Root),
            expected: "panel or group",
        })?;
        let children = self.children(panel);
        let (Some(&first), Some(&second)) = (children.get(index), children.get(index + 1)) else {
            return Err(DockError::Unsupported("no splitter at that index"));
        };

        let first_actual = self.node(first)?.actual.along(orientation);
        let second_actual = self.node(second)?.actual.along(orientation);
        let first_min = self.minimum_size(first, config).along(orientation);
        let second_min = self.minimum_size(second, config).along(orientation);

        let delta = delta
            .max(first_min - first_actual)
            .min(second_actual - second_min);
        if delta == 0.0 {
            return Ok(0.0);
        }
        let first_size = first_actual + delta;
        let second_size = second_actual - delta;

        let first_len = self.node(first)?.size.along(orientation);
        let second_len = self.node(second)?.size.along(orientation);
        let (first_len, second_len) =
            resized_lengths(first_len, second_len, first_size, second_size);

        for (child, length, size) in [
            (first, first_len, first_size),
            (second, second_len, second_size),
        ] {
            let node = self.node_mut(child)?;
            node.size.set_along(orientation, length);
            match orientation {
                Orientation::Horizontal => node.actual.width = size,
                Orientation::Vertical => node.actual.height = size,
            }
        }
        tracing::trace!(?panel, index, delta, "splitter moved");
        Ok(delta)
    }
}

fn resized_lengths(
    first: DockLength,
    second: DockLength,
    first_size: f64,
    second_size: f64,
) -> (DockLength, DockLength) {
    let total_size = first_size + second_size;
    match (first, second) {
        (DockLength::Absolute(_), DockLength::Absolute(_)) => (
            DockLength::Absolute(first_size),
            DockLength::Absolute(second_size),
        ),
        (DockLength::Absolute(_), relative) => (DockLength::Absolute(first_size), relative),
        (relative, DockLength::Absolute(_)) => (relative, DockLength::Absolute(second_size)),
        (a, b) => {
            let weight = a.weight() + b.weight();
            if total_size <= 0.0 || weight <= 0.0 {
                return (a, b);
            }
            (
                DockLength::Star(weight * first_size / total_size),
                DockLength::Star(weight * second_size / total_size),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentData, ContentKind};

    fn two_panes() -> (LayoutTree, NodeId, NodeId) {
        let mut tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        let left = tree.add_pane(root_panel, ContentKind::Anchorable).unwrap();
        tree.add_content(left, ContentData::anchorable("l", "L")).unwrap();
        let right = tree.add_pane(root_panel, ContentKind::Document).unwrap();
        tree.add_content(right, ContentData::document("r", "R")).unwrap();
        (tree, left, right)
    }

    #[test]
    fn test_arrange_fixed_and_star() {
        let (mut tree, left, right) = two_panes();
        tree.get_mut(left).unwrap().size.width = DockLength::Absolute(200.0);
        let config = DockingConfig::default();

        let splitters = tree.arrange(Rect::new(0.0, 0.0, 806.0, 600.0), &config);

        assert_eq!(tree.get(left).unwrap().rect, Rect::new(0.0, 0.0, 200.0, 600.0));
        assert_eq!(tree.get(right).unwrap().rect, Rect::new(206.0, 0.0, 600.0, 600.0));
        assert_eq!(splitters.len(), 1);
        assert_eq!(splitters[0].rect, Rect::new(200.0, 0.0, 6.0, 600.0));
    }

    #[test]
    fn test_minimum_size_sums_along_axis() {
        let (tree, _, _) = two_panes();
        let config = DockingConfig::default();
        let min = tree.minimum_size(tree.root_panel(), &config);
        assert_eq!(min, Size::new(25.0 + 6.0 + 25.0, 25.0));
    }

    #[test]
    fn test_resize_splitter_clamps_to_minimum() {
        let (mut tree, left, right) = two_panes();
        tree.get_mut(left).unwrap().size.width = DockLength::Absolute(200.0);
        let config = DockingConfig::default();
        tree.arrange(Rect::new(0.0, 0.0, 806.0, 600.0), &config);

        let applied = tree
            .resize_splitter(tree.root_panel(), 0, -500.0, &config)
            .unwrap();

        assert_eq!(applied, -175.0);
        assert_eq!(tree.get(left).unwrap().size.width, DockLength::Absolute(25.0));
        assert_eq!(tree.get(right).unwrap().size.width, DockLength::Star(1.0));
    }

    #[test]
    fn test_resize_between_stars_rescales_weights() {
        let (mut tree, left, right) = two_panes();
        let config = DockingConfig::default();
        tree.arrange(Rect::new(0.0, 0.0, 406.0, 300.0), &config);

        tree.resize_splitter(tree.root_panel(), 0, 100.0, &config)
            .unwrap();

        assert_eq!(tree.get(left).unwrap().size.width, DockLength::Star(1.5));
        assert_eq!(tree.get(right).unwrap().size.width, DockLength::Star(0.5));
    }
}
