//! Content-level operations: float, dock back, close, auto-hide

use tracing::debug;

use super::node::{AnchorSide, ContentKind, NodeId, NodeKind, NodeTag, PreviousContainer};
use super::tree::LayoutTree;
use crate::config::DockingConfig;
use crate::dock::{apply_drop, DropCommand, DropTargetKind};
use crate::error::{DockError, DockResult};
use crate::geometry::Rect;

impl LayoutTree {
    fn content_pane(&self, content: NodeId) -> DockResult<(NodeId, usize)> {
        if self.content(content).is_none() {
            return Err(DockError::UnexpectedKind {
                node: content,
                found: self.node(content)?.tag(),
                expected: "content",
            });
        }
        let pane = self
            .parent(content)
            .filter(|&p| self.tag(p) == Some(NodeTag::Pane))
            .ok_or(DockError::Unsupported("content is not docked in a pane"))?;
        let index = self
            .index_of_child(pane, content)
            .ok_or(DockError::NotDetachable(content))?;
        Ok((pane, index))
    }

    /// Move a docked content into a new floating window at `rect`
    ///
    /// The pane and tab index it leaves are remembered for
    /// [`dock_back`](Self::dock_back). Returns the new window.
    pub fn float_content(&mut self, content: NodeId, rect: Rect) -> DockResult<NodeId> {
        let (pane, index) = self.content_pane(content)?;
        let data = self.content(content).ok_or(DockError::NodeNotFound(content))?;
        if !data.can_float {
            return Err(DockError::Unsupported("content cannot float"));
        }
        let kind = data.kind;

        let window = self.new_floating_window(kind, rect);
        let new_pane = self.add_pane(window, kind)?;
        self.push_child(new_pane, content)?;
        if let Some(data) = self.content_mut(content) {
            data.previous = Some(PreviousContainer { pane, index });
        }

        self.collect_garbage();
        self.activate(content);
        debug!(?content, ?window, "content floated");
        Ok(window)
    }

    /// Return a floating content to where it was docked before
    ///
    /// Falls back to the first docked pane of the same kind, or a new pane
    /// in the root panel, when the remembered pane no longer exists.
    pub fn dock_back(&mut self, content: NodeId) -> DockResult<()> {
        self.content_pane(content)?;
        if self.find_parent_of_type(content, NodeTag::FloatingWindow).is_none() {
            return Err(DockError::Unsupported("content is not floating"));
        }
        let data = self.content(content).ok_or(DockError::NodeNotFound(content))?;
        let kind = data.kind;
        let root_panel = self.root_panel();

        let remembered = data.previous.filter(|previous| {
            matches!(self.kind(previous.pane), Some(NodeKind::Pane(pane))
                if !(pane.kind == ContentKind::Anchorable && kind == ContentKind::Document))
                && self.is_ancestor_or_self(root_panel, previous.pane)
        });

        match remembered {
            Some(previous) => self.insert_child_at(previous.pane, previous.index, content)?,
            None => {
                let existing = self
                    .panes_of(root_panel)
                    .into_iter()
                    .find(|&pane| self.pane(pane).is_some_and(|p| p.kind == kind));
                let pane = match existing {
                    Some(pane) => pane,
                    None => self.add_pane(root_panel, kind)?,
                };
                self.push_child(pane, content)?;
            }
        }

        self.collect_garbage();
        self.activate(content);
        debug!(?content, "content docked back");
        Ok(())
    }

    /// Remove a content for good
    pub fn close_content(&mut self, content: NodeId) -> DockResult<()> {
        let data = self.content(content).ok_or(DockError::NodeNotFound(content))?;
        if !data.can_close {
            return Err(DockError::Unsupported("content cannot be closed"));
        }
        let was_active = data.is_active;
        let pane = self.parent(content);

        self.destroy(content)?;
        self.collect_garbage();

        // Hand activation to the tab that took the closed one's place
        if was_active {
            let successor = pane
                .and_then(|pane| {
                    let index = self.pane(pane)?.selected_index?;
                    self.children(pane).get(index).copied()
                })
                .or_else(|| self.contents_of(self.root_panel()).first().copied());
            if let Some(next) = successor {
                self.activate(next);
            }
        }
        debug!(?content, "content closed");
        Ok(())
    }

    /// Auto-hide strip nearest to where a node was last arranged
    ///
    /// Decided by the offset of the node's center from the surface center,
    /// relative to the surface size, so a full-height pane on the right goes
    /// to the right strip even though it also touches the top edge.
    pub fn nearest_side(&self, id: NodeId) -> AnchorSide {
        let bounds = self.get(self.root()).map(|n| n.rect).unwrap_or_default();
        let rect = self.get(id).map(|n| n.rect).unwrap_or_default();
        if bounds.is_empty() {
            return AnchorSide::Left;
        }
        let (center, middle) = (rect.center(), bounds.center());
        let dx = (center.x - middle.x) / bounds.width;
        let dy = (center.y - middle.y) / bounds.height;
        match (dx.abs() >= dy.abs(), dx > 0.0, dy > 0.0) {
            (true, false, _) => AnchorSide::Left,
            (true, true, _) => AnchorSide::Right,
            (false, _, false) => AnchorSide::Top,
            (false, _, true) => AnchorSide::Bottom,
        }
    }

    /// Move a docked tool window into the auto-hide strip nearest its pane
    pub fn auto_hide(&mut self, content: NodeId) -> DockResult<AnchorSide> {
        let (pane, index) = self.content_pane(content)?;
        if self.content(content).map(|c| c.kind) != Some(ContentKind::Anchorable) {
            return Err(DockError::Unsupported("only tool windows can auto-hide"));
        }
        let side = self.nearest_side(pane);
        let strip = self.anchor_side(side);

        self.push_child(strip, content)?;
        if let Some(data) = self.content_mut(content) {
            data.auto_hide_origin = Some(PreviousContainer { pane, index });
            data.is_active = false;
            data.is_selected = false;
        }
        self.collect_garbage();
        debug!(?content, ?side, "content auto-hidden");
        Ok(side)
    }

    /// Dock an auto-hidden tool window again
    ///
    /// Returns to the remembered pane when it still exists; otherwise a new
    /// pane is docked at the root edge matching the strip.
    pub fn restore_from_auto_hide(
        &mut self,
        content: NodeId,
        config: &DockingConfig,
    ) -> DockResult<()> {
        let strip = self
            .parent(content)
            .filter(|&p| self.tag(p) == Some(NodeTag::AnchorSide))
            .ok_or(DockError::Unsupported("content is not auto-hidden"))?;
        let side = match self.kind(strip) {
            Some(NodeKind::AnchorSide(data)) => data.side,
            _ => return Err(DockError::NodeNotFound(strip)),
        };
        let origin = self.content(content).and_then(|c| c.auto_hide_origin);
        let root_panel = self.root_panel();

        let origin = origin.filter(|o| {
            self.tag(o.pane) == Some(NodeTag::Pane) && self.is_ancestor_or_self(root_panel, o.pane)
        });
        match origin {
            Some(origin) => self.insert_child_at(origin.pane, origin.index, content)?,
            None => {
                let window = self.new_floating_window(ContentKind::Anchorable, Rect::default());
                let pane = self.add_pane(window, ContentKind::Anchorable)?;
                self.push_child(pane, content)?;
                let command = DropCommand::new(root_panel, DropTargetKind::RootEdge(side.into()));
                let result = apply_drop(self, window, command, config);
                self.collect_garbage();
                result?;
            }
        }

        if let Some(data) = self.content_mut(content) {
            data.auto_hide_origin = None;
        }
        self.hide_auto_hide(side);
        self.collect_garbage();
        self.activate(content);
        debug!(?content, ?side, "content restored from auto-hide");
        Ok(())
    }

    /// Pop out an auto-hidden tool window over the layout
    pub fn show_auto_hide(&mut self, content: NodeId) -> DockResult<AnchorSide> {
        let strip = self
            .parent(content)
            .filter(|&p| self.tag(p) == Some(NodeTag::AnchorSide))
            .ok_or(DockError::Unsupported("content is not auto-hidden"))?;
        let mut shown = None;
        for candidate in AnchorSide::ALL {
            let id = self.anchor_side(candidate);
            if let Some(NodeKind::AnchorSide(data)) = self.get_mut(id).map(|n| &mut n.kind) {
                if id == strip {
                    data.popped_out = Some(content);
                    shown = Some(data.side);
                } else {
                    data.popped_out = None;
                }
            }
        }
        shown.ok_or(DockError::NodeNotFound(strip))
    }

    /// Collapse the pop-out of one strip
    pub fn hide_auto_hide(&mut self, side: AnchorSide) {
        let strip = self.anchor_side(side);
        if let Some(NodeKind::AnchorSide(data)) = self.get_mut(strip).map(|n| &mut n.kind) {
            data.popped_out = None;
        }
    }

    /// Collapse every pop-out
    pub fn hide_all_auto_hide(&mut self) {
        for side in AnchorSide::ALL {
            self.hide_auto_hide(side);
        }
    }

    /// The content currently popped out of a strip, if any
    pub fn popped_out(&self) -> Option<NodeId> {
        AnchorSide::ALL.into_iter().find_map(|side| match self.kind(self.anchor_side(side)) {
            Some(NodeKind::AnchorSide(data)) => data.popped_out,
            _ => None,
        })
    }
}
