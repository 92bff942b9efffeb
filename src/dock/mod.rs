//! Docking insertion: turning a drop classification into tree mutations
//!
//! [`apply_drop`] never prunes; callers run
//! [`LayoutTree::collect_garbage`](crate::model::LayoutTree::collect_garbage)
//! afterwards, whether the drop succeeded or not.

mod insert;

pub use insert::apply_drop;

use crate::model::{AnchorSide, NodeId, Orientation};

/// Edge of a target a dragged subtree docks against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DockDirection {
    Left,
    Top,
    Right,
    Bottom,
}

impl DockDirection {
    pub const ALL: [DockDirection; 4] = [
        DockDirection::Left,
        DockDirection::Top,
        DockDirection::Right,
        DockDirection::Bottom,
    ];

    /// Split axis implied by the direction
    pub fn orientation(self) -> Orientation {
        match self {
            DockDirection::Left | DockDirection::Right => Orientation::Horizontal,
            DockDirection::Top | DockDirection::Bottom => Orientation::Vertical,
        }
    }

    /// Left and Top insert before the target, Right and Bottom after it
    pub fn is_leading(self) -> bool {
        matches!(self, DockDirection::Left | DockDirection::Top)
    }
}

impl From<AnchorSide> for DockDirection {
    fn from(side: AnchorSide) -> Self {
        match side {
            AnchorSide::Left => DockDirection::Left,
            AnchorSide::Top => DockDirection::Top,
            AnchorSide::Right => DockDirection::Right,
            AnchorSide::Bottom => DockDirection::Bottom,
        }
    }
}

/// What kind of docking a drop target performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DropTargetKind {
    /// Outer edge of a whole host; the target is its root panel
    RootEdge(DockDirection),
    /// Beside a pane
    PaneEdge(DockDirection),
    /// Tool windows beside the document area containing a document pane
    PaneEdgeAsAnchorable(DockDirection),
    /// Tabbed into a pane, optionally at an explicit tab index
    PaneInside { tab_index: Option<usize> },
    /// Into an empty group or an empty root panel
    GroupInside,
}

/// A resolved drop: target node plus classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropCommand {
    pub target: NodeId,
    pub kind: DropTargetKind,
}

impl DropCommand {
    pub fn new(target: NodeId, kind: DropTargetKind) -> Self {
        Self { target, kind }
    }
}
