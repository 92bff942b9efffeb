//! Content activation, applied as one batch per gesture
//!
//! Activation requests are queued and flushed together under a single
//! "update in progress" flag. A request made while a flush is running joins
//! the running flush instead of recursing into it.

use super::node::{NodeId, NodeKind, NodeTag};
use super::tree::LayoutTree;

#[derive(Debug, Clone, Default)]
pub(crate) struct ActivationQueue {
    pending: Vec<NodeId>,
    updating: bool,
}

impl LayoutTree {
    /// Queue `content` to become the active content
    pub fn request_activation(&mut self, content: NodeId) {
        self.activation.pending.push(content);
    }

    /// Apply queued activation requests; the last live request wins
    ///
    /// Returns the content that ended up active, or `None` when nothing was
    /// pending or a flush is already running.
    pub fn flush_activation(&mut self) -> Option<NodeId> {
        if self.activation.updating {
            return None;
        }
        self.activation.updating = true;

        let mut applied = None;
        while !self.activation.pending.is_empty() {
            let pending = std::mem::take(&mut self.activation.pending);
            if let Some(&target) = pending
                .iter()
                .rev()
                .find(|&&id| self.tag(id) == Some(NodeTag::Content))
            {
                self.apply_activation(target);
                applied = Some(target);
            }
        }

        self.activation.updating = false;
        if let Some(active) = applied {
            tracing::trace!(?active, "activation flushed");
        }
        applied
    }

    /// Make `content` the single active content right away
    pub fn activate(&mut self, content: NodeId) -> Option<NodeId> {
        self.request_activation(content);
        self.flush_activation()
    }

    /// The content currently marked active, if any
    pub fn active_content(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&id| self.content(id).is_some_and(|c| c.is_active))
    }

    /// Clear the active flag everywhere
    pub fn deactivate_all(&mut self) {
        let contents = self.contents_of(self.root());
        for id in contents {
            if let Some(content) = self.content_mut(id) {
                content.is_active = false;
            }
        }
    }

    fn apply_activation(&mut self, target: NodeId) {
        self.deactivate_all();
        if let Some(content) = self.content_mut(target) {
            content.is_active = true;
        }

        let Some(parent) = self.parent(target) else {
            return;
        };
        let index = self.index_of_child(parent, target);
        if let Some(NodeKind::Pane(pane)) = self.get_mut(parent).map(|n| &mut n.kind) {
            pane.selected_index = index;
        }
        self.sync_pane_selection(parent);
    }
}
