//! Drop areas, drop targets and their preview geometry

use crate::dock::{DockDirection, DropCommand, DropTargetKind};
use crate::geometry::{Point, Polygon, Rect};
use crate::model::NodeId;

/// What an area stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaKind {
    /// A whole host surface (edge targets of its root panel)
    Host,
    /// One pane (cross, tab slots, dock-as-anchorable edges)
    Pane,
    /// An empty group placeholder
    Group,
}

/// A rectangular region of a host that offers a set of drop targets while
/// the cursor is inside it
#[derive(Debug, Clone, PartialEq)]
pub struct DropArea {
    pub kind: AreaKind,
    pub node: NodeId,
    pub rect: Rect,
    pub targets: Vec<DropTarget>,
}

impl DropArea {
    pub fn new(kind: AreaKind, node: NodeId, rect: Rect) -> Self {
        Self {
            kind,
            node,
            rect,
            targets: Vec::new(),
        }
    }
}

/// One overlay button (or tab slot) and the docking it performs
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub command: DropCommand,
    /// Screen rectangle the cursor must be in
    pub rect: Rect,
    /// Screen rectangle the preview highlights a part of
    pub target_rect: Rect,
    /// Tab slot for tab-index targets
    pub tab_rect: Option<Rect>,
}

impl DropTarget {
    pub fn new(command: DropCommand, rect: Rect, target_rect: Rect) -> Self {
        Self {
            command,
            rect,
            target_rect,
            tab_rect: None,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Highlight shape in overlay coordinates (`origin` is the overlay's
    /// top-left corner on screen)
    pub fn preview(&self, origin: Point) -> Polygon {
        let area = self.target_rect.relative_to(origin);
        match self.command.kind {
            DropTargetKind::RootEdge(direction) | DropTargetKind::PaneEdge(direction) => {
                Polygon::from_rect(edge_slice(area, direction, 2.0))
            }
            DropTargetKind::PaneEdgeAsAnchorable(direction) => {
                Polygon::from_rect(edge_slice(area, direction, 3.0))
            }
            DropTargetKind::PaneInside {
                tab_index: Some(_),
            } => match self.tab_rect {
                Some(tab) => tab_outline(tab.relative_to(origin), area),
                None => Polygon::from_rect(area),
            },
            DropTargetKind::PaneInside { tab_index: None } | DropTargetKind::GroupInside => {
                Polygon::from_rect(area)
            }
        }
    }
}

/// The `1/divisor` slice of `rect` along the side a direction points to
fn edge_slice(rect: Rect, direction: DockDirection, divisor: f64) -> Rect {
    let width = rect.width / divisor;
    let height = rect.height / divisor;
    match direction {
        DockDirection::Left => Rect::new(rect.x, rect.y, width, rect.height),
        DockDirection::Right => Rect::new(rect.right() - width, rect.y, width, rect.height),
        DockDirection::Top => Rect::new(rect.x, rect.y, rect.width, height),
        DockDirection::Bottom => Rect::new(rect.x, rect.bottom() - height, rect.width, height),
    }
}

/// Pane body with the tab slot raised above it
///
/// Eight corners in general; seven when the slot is flush with the pane's
/// left or right edge.
fn tab_outline(tab: Rect, pane: Rect) -> Polygon {
    let strip_bottom = tab.bottom();
    Polygon::from_points([
        tab.top_left(),
        tab.top_right(),
        tab.bottom_right(),
        Point::new(pane.right(), strip_bottom),
        pane.bottom_right(),
        pane.bottom_left(),
        Point::new(pane.x, strip_bottom),
        tab.bottom_left(),
    ])
}
