//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::geometry::{Point, Rect};
use crate::model::{AutoHideTicket, ContentData, NodeId};

/// Layout messages (size, splitters, tabs)
#[derive(Debug, Clone)]
pub enum LayoutMsg {
    /// The main surface was resized or moved
    SetBounds(Rect),
    /// Drag a splitter by a pixel delta
    MoveSplitter {
        panel: NodeId,
        index: usize,
        delta: f64,
    },
    /// Click on a tab
    SelectTab { pane: NodeId, index: usize },
    /// Focus a content
    Activate(NodeId),
    /// Append a new content to a pane
    AddContent { pane: NodeId, content: ContentData },
    /// Move or resize a floating window
    MoveFloatingWindow { window: NodeId, rect: Rect },
}

/// Drag-and-drop messages, driven by host mouse capture
#[derive(Debug, Clone, Copy)]
pub enum DragMsg {
    /// Start dragging a floating window
    Begin { window: NodeId },
    /// Cursor moved (screen coordinates)
    Move(Point),
    /// Button released
    Drop(Point),
    /// Escape or capture lost
    Abort,
}

/// Per-content commands (tab context menu, title bar buttons)
#[derive(Debug, Clone, Copy)]
pub enum ContentMsg {
    Float(NodeId),
    DockBack(NodeId),
    Close(NodeId),
    AutoHide(NodeId),
    RestoreFromAutoHide(NodeId),
}

/// Auto-hide pop-out messages
#[derive(Debug, Clone, Copy)]
pub enum AutoHideMsg {
    /// Pop out a strip item
    Show(NodeId),
    /// Pointer or focus entered the pop-out: keep it open
    Hold,
    /// Pointer and focus left the pop-out: start the collapse delay
    Release,
    /// The host timer for a ticket fired
    Elapsed(AutoHideTicket),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum DockMsg {
    Layout(LayoutMsg),
    Drag(DragMsg),
    Content(ContentMsg),
    AutoHide(AutoHideMsg),
}

impl DockMsg {
    pub fn drag_to(point: Point) -> Self {
        DockMsg::Drag(DragMsg::Move(point))
    }

    pub fn drop_at(point: Point) -> Self {
        DockMsg::Drag(DragMsg::Drop(point))
    }
}
