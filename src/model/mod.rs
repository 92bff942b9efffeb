//! Docking model - the complete state of the layout engine
//!
//! This module contains the layout tree and the state types the Elm-style
//! update functions operate on.

mod activation;
pub mod auto_hide;
mod content;
mod gc;
pub mod node;
pub mod tree;

pub use auto_hide::{AutoHideTicket, AutoHideTimer};
pub use node::{
    AnchorSide, AnchorSideData, ContentData, ContentKind, DockLength, DockSize,
    FloatingWindowData, GroupData, Node, NodeId, NodeKind, NodeTag, Orientation, PaneData,
    PreviousContainer,
};
pub use tree::{Descendants, LayoutTree, TreeChange};

use crate::config::DockingConfig;
use crate::drag::DragSession;
use crate::geometry::Rect;
use crate::layout::SplitterBar;

/// The complete docking state
#[derive(Debug)]
pub struct DockingModel {
    pub tree: LayoutTree,
    pub config: DockingConfig,
    /// Drag in progress, if any
    pub drag: Option<DragSession>,
    pub auto_hide: AutoHideTimer,
    /// Screen rectangle of the main docking surface
    pub bounds: Rect,
    /// Splitter bars from the last layout pass
    pub splitters: Vec<SplitterBar>,
}

impl DockingModel {
    /// Create a model with an empty layout
    pub fn new(config: DockingConfig, bounds: Rect) -> Self {
        Self::with_tree(LayoutTree::new(), config, bounds)
    }

    /// Wrap an existing tree and lay it out
    pub fn with_tree(tree: LayoutTree, config: DockingConfig, bounds: Rect) -> Self {
        let mut model = Self {
            tree,
            config,
            drag: None,
            auto_hide: AutoHideTimer::new(),
            bounds,
            splitters: Vec::new(),
        };
        model.relayout();
        model
    }

    /// Re-run the layout pass over the whole tree
    pub fn relayout(&mut self) {
        self.tree.take_changes();
        self.splitters = self.tree.arrange(self.bounds, &self.config);
    }

    /// Relayout only when the tree reported structural changes
    pub fn relayout_if_changed(&mut self) -> bool {
        if self.tree.has_changes() {
            self.relayout();
            true
        } else {
            false
        }
    }

    /// Default rectangle for a content floated out of the layout
    pub fn floating_rect_for(&self, content: NodeId) -> Rect {
        let origin = self
            .tree
            .get(content)
            .map(|n| n.rect.origin())
            .unwrap_or_else(|| self.bounds.origin());
        Rect::new(
            origin.x,
            origin.y,
            self.config.floating_width,
            self.config.floating_height,
        )
    }
}
