//! Node types for the layout tree
//!
//! Every node lives in the [`LayoutTree`](super::LayoutTree) arena and is
//! addressed by a [`NodeId`]. The node kind is a closed sum type so that the
//! docking algorithm can match exhaustively instead of probing types at
//! runtime.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

slotmap::new_key_type! {
    /// Handle to a node in the layout tree arena
    ///
    /// Handles are versioned: a handle to a destroyed node never aliases a
    /// node created later, so remembered containers can be checked for
    /// liveness instead of dangling.
    pub struct NodeId;
}

// ============================================================================
// Enums
// ============================================================================

/// Axis along which a split container lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Which family of content a pane, group or floating window holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// Editor-like documents, hosted in the central document area
    Document,
    /// Tool windows that can be docked at the edges, floated or auto-hidden
    Anchorable,
}

/// Sizing mode of a child within its split container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DockLength {
    /// Proportional share of the space left after fixed children
    Star(f64),
    /// Fixed size in pixels
    Absolute(f64),
    /// Content-driven; distributed like `Star(1.0)`
    Auto,
}

impl Default for DockLength {
    fn default() -> Self {
        DockLength::Star(1.0)
    }
}

impl DockLength {
    #[inline]
    pub fn is_absolute(&self) -> bool {
        matches!(self, DockLength::Absolute(_))
    }

    /// Star and Auto lengths share whatever the fixed children leave over
    #[inline]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Weight for proportional distribution
    pub fn weight(&self) -> f64 {
        match self {
            DockLength::Star(w) => w.max(0.0),
            DockLength::Auto => 1.0,
            DockLength::Absolute(_) => 0.0,
        }
    }

    /// Declared pixel size of a fixed length
    pub fn pixels(&self) -> Option<f64> {
        match self {
            DockLength::Absolute(px) => Some(*px),
            _ => None,
        }
    }
}

/// Screen edge of an auto-hide strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl AnchorSide {
    pub const ALL: [AnchorSide; 4] = [
        AnchorSide::Left,
        AnchorSide::Top,
        AnchorSide::Right,
        AnchorSide::Bottom,
    ];
}

/// Discriminant of [`NodeKind`], used for type queries and error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Root,
    Panel,
    Group,
    Pane,
    Content,
    FloatingWindow,
    AnchorSide,
}

// ============================================================================
// Node payloads
// ============================================================================

/// Requested sizes of a node inside its parent container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockSize {
    pub width: DockLength,
    pub height: DockLength,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for DockSize {
    fn default() -> Self {
        Self {
            width: DockLength::default(),
            height: DockLength::default(),
            min_width: 0.0,
            min_height: 0.0,
        }
    }
}

impl DockSize {
    /// Length along the axis of a container orientation
    pub fn along(&self, orientation: Orientation) -> DockLength {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    pub fn set_along(&mut self, orientation: Orientation, length: DockLength) {
        match orientation {
            Orientation::Horizontal => self.width = length,
            Orientation::Vertical => self.height = length,
        }
    }

    pub fn min(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

/// Pane + tab index a content last lived at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousContainer {
    pub pane: NodeId,
    pub index: usize,
}

/// A dockable leaf: a document or a tool window
#[derive(Debug, Clone)]
pub struct ContentData {
    pub content_id: String,
    pub title: String,
    pub kind: ContentKind,
    pub is_active: bool,
    pub is_selected: bool,
    pub can_close: bool,
    pub can_float: bool,
    /// Where the content was docked before it was floated
    pub previous: Option<PreviousContainer>,
    /// Where the content was docked before it was moved to an auto-hide strip
    pub auto_hide_origin: Option<PreviousContainer>,
}

impl ContentData {
    pub fn new(kind: ContentKind, content_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            title: title.into(),
            kind,
            is_active: false,
            is_selected: false,
            can_close: true,
            can_float: true,
            previous: None,
            auto_hide_origin: None,
        }
    }

    pub fn document(content_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(ContentKind::Document, content_id, title)
    }

    pub fn anchorable(content_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(ContentKind::Anchorable, content_id, title)
    }
}

/// Tab container state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneData {
    pub kind: ContentKind,
    pub selected_index: Option<usize>,
}

/// Split container restricted to panes (and groups) of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupData {
    pub kind: ContentKind,
    pub orientation: Orientation,
}

/// Floating window state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingWindowData {
    pub kind: ContentKind,
    pub rect: Rect,
    pub is_maximized: bool,
}

/// Auto-hide strip state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSideData {
    pub side: AnchorSide,
    /// Strip item currently shown as a pop-out, if any
    pub popped_out: Option<NodeId>,
}

/// The payload of a tree node
#[derive(Debug, Clone)]
pub enum NodeKind {
    Root,
    Panel { orientation: Orientation },
    Group(GroupData),
    Pane(PaneData),
    Content(ContentData),
    FloatingWindow(FloatingWindowData),
    AnchorSide(AnchorSideData),
}

impl NodeKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Root => NodeTag::Root,
            NodeKind::Panel { .. } => NodeTag::Panel,
            NodeKind::Group(_) => NodeTag::Group,
            NodeKind::Pane(_) => NodeTag::Pane,
            NodeKind::Content(_) => NodeTag::Content,
            NodeKind::FloatingWindow(_) => NodeTag::FloatingWindow,
            NodeKind::AnchorSide(_) => NodeTag::AnchorSide,
        }
    }

    /// Orientation of split containers (panels and groups)
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            NodeKind::Panel { orientation } => Some(*orientation),
            NodeKind::Group(group) => Some(group.orientation),
            _ => None,
        }
    }

    /// Content kind of kind-restricted nodes
    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            NodeKind::Group(group) => Some(group.kind),
            NodeKind::Pane(pane) => Some(pane.kind),
            NodeKind::Content(content) => Some(content.kind),
            NodeKind::FloatingWindow(window) => Some(window.kind),
            _ => None,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, NodeKind::Panel { .. } | NodeKind::Group(_))
    }
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Requested size inside the parent container
    pub size: DockSize,
    /// Size resolved by the last layout pass
    pub actual: Size,
    /// Screen rectangle assigned by the last layout pass
    pub rect: Rect,
    pub kind: NodeKind,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            size: DockSize::default(),
            actual: Size::default(),
            rect: Rect::default(),
            kind,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }

    pub fn as_content(&self) -> Option<&ContentData> {
        match &self.kind {
            NodeKind::Content(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_content_mut(&mut self) -> Option<&mut ContentData> {
        match &mut self.kind {
            NodeKind::Content(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_pane(&self) -> Option<&PaneData> {
        match &self.kind {
            NodeKind::Pane(pane) => Some(pane),
            _ => None,
        }
    }
}
