//! Structural garbage collection
//!
//! Prunes containers a mutation left empty or degenerate:
//! - empty panes, panels and groups are removed
//! - a panel or group with a single child is replaced by that child
//! - a floating window without content is closed
//! - the root panel is kept, but absorbs a lone child panel
//!
//! Passes repeat until nothing changes, so the result is a fixpoint and
//! running it again is a no-op.

use tracing::{debug, trace};

use super::node::{NodeId, NodeTag};
use super::tree::LayoutTree;
use crate::error::DockResult;

impl LayoutTree {
    /// Run reduction passes until the tree stops changing
    ///
    /// Returns the total number of reductions applied.
    pub fn collect_garbage(&mut self) -> usize {
        let mut total = 0;
        loop {
            let reductions = self.gc_pass();
            if reductions == 0 {
                break;
            }
            total += reductions;
        }
        self.forget_stale_popouts();
        if total > 0 {
            debug!(reductions = total, "layout garbage collected");
        }
        total
    }

    fn gc_pass(&mut self) -> usize {
        let root_panel = self.root_panel();
        // Deepest first, so a collapse below is visible to the check above
        let mut order: Vec<NodeId> = self.descendants(self.root()).collect();
        order.reverse();

        let mut reductions = 0;
        for id in order {
            let Some(tag) = self.tag(id) else {
                continue;
            };
            let count = self.children_count(id);
            let reduced = match tag {
                NodeTag::Panel if id == root_panel => count == 1 && self.absorb_lone_panel(id),
                NodeTag::Pane | NodeTag::Panel | NodeTag::Group if count == 0 => {
                    trace!(?id, ?tag, "removing empty container");
                    self.destroy(id).is_ok()
                }
                NodeTag::Panel | NodeTag::Group if count == 1 => self.collapse(id).is_ok(),
                NodeTag::FloatingWindow if self.contents_of(id).is_empty() => {
                    trace!(?id, "closing empty floating window");
                    self.destroy(id).is_ok()
                }
                _ => false,
            };
            if reduced {
                reductions += 1;
            }
        }
        reductions
    }

    /// Replace a single-child container by its child in the grandparent
    fn collapse(&mut self, id: NodeId) -> DockResult<()> {
        let parent = self
            .parent(id)
            .ok_or(crate::error::DockError::NotDetachable(id))?;
        let only = self.children(id)[0];
        // The child takes over the wrapper's slot, including its size there
        let size = self.node(id)?.size;
        self.node_mut(only)?.size = size;
        self.replace_child(parent, id, only)?;
        self.destroy(id)?;
        trace!(?id, ?only, "collapsed single-child container");
        Ok(())
    }

    /// The root panel adopts the children and orientation of a lone child
    /// panel
    fn absorb_lone_panel(&mut self, root_panel: NodeId) -> bool {
        let only = self.children(root_panel)[0];
        if self.tag(only) != Some(NodeTag::Panel) {
            return false;
        }
        let Some(orientation) = self.orientation(only) else {
            return false;
        };
        let grandchildren = self.children(only).to_vec();
        let moved = self.set_orientation(root_panel, orientation).is_ok()
            && grandchildren
                .into_iter()
                .all(|child| self.push_child(root_panel, child).is_ok());
        moved && self.destroy(only).is_ok()
    }

    fn forget_stale_popouts(&mut self) {
        let strips: Vec<NodeId> = crate::model::AnchorSide::ALL
            .iter()
            .map(|&side| self.anchor_side(side))
            .collect();
        for strip in strips {
            let popped = match self.kind(strip) {
                Some(super::NodeKind::AnchorSide(data)) => data.popped_out,
                _ => None,
            };
            if let Some(content) = popped {
                if self.parent(content) != Some(strip) {
                    if let Some(super::NodeKind::AnchorSide(data)) =
                        self.get_mut(strip).map(|n| &mut n.kind)
                    {
                        data.popped_out = None;
                    }
                }
            }
        }
    }

    /// Whether a GC pass would change anything
    pub fn is_collected(&self) -> bool {
        let root_panel = self.root_panel();
        self.descendants(self.root()).all(|id| {
            let count = self.children_count(id);
            match self.tag(id) {
                Some(NodeTag::Panel) if id == root_panel => {
                    !(count == 1 && self.tag(self.children(id)[0]) == Some(NodeTag::Panel))
                }
                Some(NodeTag::Panel | NodeTag::Group) => count >= 2,
                Some(NodeTag::Pane) => count >= 1,
                Some(NodeTag::FloatingWindow) => !self.contents_of(id).is_empty(),
                _ => true,
            }
        })
    }
}
