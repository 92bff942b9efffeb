//! Layout tree arena and structural operations
//!
//! The tree owns every node. Parents store child handles, children store a
//! parent handle; a node is reachable from exactly one parent's `children`
//! list, and re-inserting a node somewhere else detaches it from its old
//! parent first.

use slotmap::SlotMap;

use super::activation::ActivationQueue;
use super::node::{
    AnchorSide, AnchorSideData, ContentData, ContentKind, FloatingWindowData, GroupData, Node,
    NodeId, NodeKind, NodeTag, Orientation, PaneData,
};
use crate::error::{DockError, DockResult};
use crate::geometry::Rect;

/// Structural-change notification for the layout pass and the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeChange {
    ChildrenChanged(NodeId),
    OrientationChanged(NodeId),
}

/// Arena-backed docking layout tree
///
/// Shape: `Root` → [root panel, 4 anchor sides, floating windows...].
/// The root panel is the only split container allowed to hold fewer than
/// two children.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    changes: Vec<TreeChange>,
    pub(crate) activation: ActivationQueue,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    /// Create an empty layout: a horizontal root panel and four empty
    /// auto-hide strips
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(NodeKind::Root));
        let mut tree = Self {
            nodes,
            root,
            changes: Vec::new(),
            activation: ActivationQueue::default(),
        };

        let panel = tree.create(NodeKind::Panel {
            orientation: Orientation::Horizontal,
        });
        tree.attach(root, 0, panel);
        for side in AnchorSide::ALL {
            let strip = tree.create(NodeKind::AnchorSide(AnchorSideData {
                side,
                popped_out: None,
            }));
            let end = tree.children_count(root);
            tree.attach(root, end, strip);
        }
        tree.changes.clear();
        tree
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The docked tree's top-level panel
    pub fn root_panel(&self) -> NodeId {
        self.children(self.root)
            .iter()
            .copied()
            .find(|&id| self.tag(id) == Some(NodeTag::Panel))
            .expect("layout tree root always holds a root panel")
    }

    pub fn floating_windows(&self) -> Vec<NodeId> {
        self.children_of_tag(self.root, NodeTag::FloatingWindow)
    }

    pub fn anchor_side(&self, side: AnchorSide) -> NodeId {
        self.children(self.root)
            .iter()
            .copied()
            .find(|&id| {
                matches!(
                    self.get(id).map(|n| &n.kind),
                    Some(NodeKind::AnchorSide(data)) if data.side == side
                )
            })
            .expect("layout tree root always holds all four anchor sides")
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn node(&self, id: NodeId) -> DockResult<&Node> {
        self.nodes.get(id).ok_or(DockError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> DockResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(DockError::NodeNotFound(id))
    }

    pub fn tag(&self, id: NodeId) -> Option<NodeTag> {
        self.get(id).map(Node::tag)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn children_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    pub fn index_of_child(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    pub fn orientation(&self, id: NodeId) -> Option<Orientation> {
        self.kind(id).and_then(NodeKind::orientation)
    }

    pub fn content_kind(&self, id: NodeId) -> Option<ContentKind> {
        self.kind(id).and_then(NodeKind::content_kind)
    }

    pub fn content(&self, id: NodeId) -> Option<&ContentData> {
        self.get(id).and_then(Node::as_content)
    }

    pub fn content_mut(&mut self, id: NodeId) -> Option<&mut ContentData> {
        self.get_mut(id).and_then(Node::as_content_mut)
    }

    pub fn pane(&self, id: NodeId) -> Option<&PaneData> {
        self.get(id).and_then(Node::as_pane)
    }

    /// Lazy depth-first (pre-order) walk over all descendants of `id`
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Nearest strict ancestor with the given tag
    pub fn find_parent_of_type(&self, id: NodeId, tag: NodeTag) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self.tag(node) == Some(tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// The content leaves under `id` (including `id` itself), in tab order
    pub fn contents_of(&self, id: NodeId) -> Vec<NodeId> {
        if self.tag(id) == Some(NodeTag::Content) {
            return vec![id];
        }
        self.descendants(id)
            .filter(|&d| self.tag(d) == Some(NodeTag::Content))
            .collect()
    }

    /// The panes under `id` (including `id` itself), in depth-first order
    pub fn panes_of(&self, id: NodeId) -> Vec<NodeId> {
        if self.tag(id) == Some(NodeTag::Pane) {
            return vec![id];
        }
        self.descendants(id)
            .filter(|&d| self.tag(d) == Some(NodeTag::Pane))
            .collect()
    }

    fn children_of_tag(&self, id: NodeId, tag: NodeTag) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.tag(c) == Some(tag))
            .collect()
    }

    /// Number of live nodes, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents_of(self.root).is_empty()
    }

    // =========================================================================
    // Structural mutation
    // =========================================================================

    /// Allocate a detached node
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.insert(Node::new(kind))
    }

    /// Insert `child` into `parent` at `index` (clamped to the end)
    ///
    /// A child that is still attached elsewhere is detached first, so it never
    /// stays reachable from its old parent.
    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) -> DockResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root || self.is_ancestor_or_self(child, parent) {
            return Err(DockError::NotDetachable(child));
        }
        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child)?;
        }
        let index = index.min(self.children_count(parent));
        self.attach(parent, index, child);
        Ok(())
    }

    /// Append `child` at the end of `parent`
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) -> DockResult<()> {
        let end = self.children_count(parent);
        self.insert_child_at(parent, end, child)
    }

    /// Detach `child` from `parent`, returning its former index
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DockResult<usize> {
        let index = self
            .index_of_child(parent, child)
            .ok_or(DockError::NotDetachable(child))?;
        self.node_mut(parent)?.children.remove(index);
        self.node_mut(child)?.parent = None;
        self.on_child_removed(parent, index);
        self.changes.push(TreeChange::ChildrenChanged(parent));
        Ok(index)
    }

    /// Detach a node from whatever parent it has
    pub fn detach(&mut self, id: NodeId) -> DockResult<Option<(NodeId, usize)>> {
        match self.parent(id) {
            Some(parent) => Ok(Some((parent, self.remove_child(parent, id)?))),
            None => Ok(None),
        }
    }

    /// Put `new` in the slot `old` occupies inside `parent`; `old` ends up
    /// detached
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> DockResult<()> {
        if old == new {
            return Ok(());
        }
        self.node(new)?;
        if new == self.root || self.is_ancestor_or_self(new, parent) {
            return Err(DockError::NotDetachable(new));
        }
        if self.parent(new).is_some() {
            self.detach(new)?;
        }
        let index = self
            .index_of_child(parent, old)
            .ok_or(DockError::NotDetachable(old))?;
        self.node_mut(parent)?.children[index] = new;
        self.node_mut(old)?.parent = None;
        self.node_mut(new)?.parent = Some(parent);
        self.sync_pane_selection(parent);
        self.changes.push(TreeChange::ChildrenChanged(parent));
        Ok(())
    }

    /// Detach a node and free its whole subtree
    pub fn destroy(&mut self, id: NodeId) -> DockResult<()> {
        if id == self.root {
            return Err(DockError::NotDetachable(id));
        }
        self.detach(id)?;
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if let Some(removed) = self.nodes.remove(node) {
                stack.extend(removed.children);
            }
        }
        Ok(())
    }

    /// Set the orientation of a panel or group
    pub fn set_orientation(&mut self, id: NodeId, orientation: Orientation) -> DockResult<()> {
        let node = self.node_mut(id)?;
        let changed = match &mut node.kind {
            NodeKind::Panel { orientation: o } => std::mem::replace(o, orientation) != orientation,
            NodeKind::Group(group) => {
                std::mem::replace(&mut group.orientation, orientation) != orientation
            }
            other => {
                return Err(DockError::UnexpectedKind {
                    node: id,
                    found: other.tag(),
                    expected: "panel or group",
                })
            }
        };
        if changed {
            self.changes.push(TreeChange::OrientationChanged(id));
        }
        Ok(())
    }

    /// Drain pending structural-change notifications
    pub fn take_changes(&mut self) -> Vec<TreeChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    fn attach(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.insert(index, child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        self.on_child_inserted(parent, index);
        self.changes.push(TreeChange::ChildrenChanged(parent));
    }

    // =========================================================================
    // Pane selection bookkeeping
    // =========================================================================

    fn on_child_inserted(&mut self, parent: NodeId, index: usize) {
        if let Some(Node {
            kind: NodeKind::Pane(pane),
            ..
        }) = self.nodes.get_mut(parent)
        {
            pane.selected_index = match pane.selected_index {
                None => Some(index),
                Some(selected) if selected >= index => Some(selected + 1),
                other => other,
            };
        }
        self.sync_pane_selection(parent);
    }

    fn on_child_removed(&mut self, parent: NodeId, index: usize) {
        let len = self.children_count(parent);
        if let Some(Node {
            kind: NodeKind::Pane(pane),
            ..
        }) = self.nodes.get_mut(parent)
        {
            pane.selected_index = match pane.selected_index {
                _ if len == 0 => None,
                Some(selected) if selected > index => Some(selected - 1),
                Some(selected) if selected == index => Some(index.min(len - 1)),
                other => other,
            };
        }
        self.sync_pane_selection(parent);
    }

    /// Mirror a pane's `selected_index` into its contents' `is_selected`
    pub(crate) fn sync_pane_selection(&mut self, pane: NodeId) {
        let Some(selected) = self.pane(pane).map(|p| p.selected_index) else {
            return;
        };
        let children = self.children(pane).to_vec();
        for (i, child) in children.into_iter().enumerate() {
            if let Some(content) = self.content_mut(child) {
                content.is_selected = selected == Some(i);
            }
        }
    }

    /// Select the tab at `index` in a pane
    pub fn select_tab(&mut self, pane: NodeId, index: usize) -> DockResult<()> {
        let len = self.children_count(pane);
        match &mut self.node_mut(pane)?.kind {
            NodeKind::Pane(data) => {
                if index < len {
                    data.selected_index = Some(index);
                }
            }
            other => {
                return Err(DockError::UnexpectedKind {
                    node: pane,
                    found: other.tag(),
                    expected: "pane",
                })
            }
        }
        self.sync_pane_selection(pane);
        Ok(())
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Create a panel and insert it at the end of `parent`
    pub fn add_panel(&mut self, parent: NodeId, orientation: Orientation) -> DockResult<NodeId> {
        let id = self.create(NodeKind::Panel { orientation });
        self.push_child(parent, id)?;
        Ok(id)
    }

    /// Create a kind-restricted group and insert it at the end of `parent`
    pub fn add_group(
        &mut self,
        parent: NodeId,
        kind: ContentKind,
        orientation: Orientation,
    ) -> DockResult<NodeId> {
        let id = self.create(NodeKind::Group(GroupData { kind, orientation }));
        self.push_child(parent, id)?;
        Ok(id)
    }

    /// Create an empty pane and insert it at the end of `parent`
    pub fn add_pane(&mut self, parent: NodeId, kind: ContentKind) -> DockResult<NodeId> {
        let id = self.create(NodeKind::Pane(PaneData {
            kind,
            selected_index: None,
        }));
        self.push_child(parent, id)?;
        Ok(id)
    }

    /// Create a content item and append it as the last tab of `pane`
    pub fn add_content(&mut self, pane: NodeId, content: ContentData) -> DockResult<NodeId> {
        let pane_kind = match self.kind(pane) {
            Some(NodeKind::Pane(data)) => data.kind,
            Some(other) => {
                return Err(DockError::UnexpectedKind {
                    node: pane,
                    found: other.tag(),
                    expected: "pane",
                })
            }
            None => return Err(DockError::NodeNotFound(pane)),
        };
        if pane_kind == ContentKind::Anchorable && content.kind == ContentKind::Document {
            return Err(DockError::Unsupported("documents cannot live in anchorable panes"));
        }
        let id = self.create(NodeKind::Content(content));
        self.push_child(pane, id)?;
        Ok(id)
    }

    /// Create a floating window (without children) on top of the others
    pub fn new_floating_window(&mut self, kind: ContentKind, rect: Rect) -> NodeId {
        let id = self.create(NodeKind::FloatingWindow(FloatingWindowData {
            kind,
            rect,
            is_maximized: false,
        }));
        let end = self.children_count(self.root);
        self.attach(self.root, end, id);
        id
    }

    /// Turn a panel into a group of `kind`, keeping its orientation
    pub(crate) fn retag_as_group(&mut self, id: NodeId, kind: ContentKind) -> DockResult<()> {
        let node = self.node_mut(id)?;
        if let NodeKind::Panel { orientation } = node.kind {
            node.kind = NodeKind::Group(GroupData { kind, orientation });
        }
        Ok(())
    }
}

/// Depth-first iterator returned by [`LayoutTree::descendants`]
pub struct Descendants<'a> {
    tree: &'a LayoutTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(next).iter().rev().copied());
        Some(next)
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl LayoutTree {
    /// Validate structural invariants in debug builds.
    ///
    /// Checks that parent and child links agree, that every live node is
    /// reachable from the root exactly once, that groups and panes only hold
    /// children of their kind, and that pane selections are in range.
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let mut seen = std::collections::HashSet::new();
        seen.insert(self.root);
        for id in self.descendants(self.root) {
            assert!(seen.insert(id), "node {:?} is reachable twice", id);
            let parent = self
                .parent(id)
                .unwrap_or_else(|| panic!("node {:?} has no parent link", id));
            assert!(
                self.children(parent).contains(&id),
                "node {:?} is not listed by its parent {:?}",
                id,
                parent
            );
        }
        assert_eq!(
            seen.len(),
            self.nodes.len(),
            "arena holds nodes unreachable from the root"
        );

        for id in self.descendants(self.root) {
            match self.kind(id) {
                Some(NodeKind::Group(group)) => {
                    for &child in self.children(id) {
                        let child_kind = self.content_kind(child);
                        assert!(
                            matches!(self.tag(child), Some(NodeTag::Group | NodeTag::Pane))
                                && child_kind == Some(group.kind),
                            "group {:?} holds foreign child {:?}",
                            id,
                            child
                        );
                    }
                }
                Some(NodeKind::Pane(pane)) => {
                    let len = self.children_count(id);
                    if let Some(selected) = pane.selected_index {
                        assert!(
                            selected < len,
                            "pane {:?} selects tab {} of {}",
                            id,
                            selected,
                            len
                        );
                    }
                    for &child in self.children(id) {
                        let content = self
                            .content(child)
                            .unwrap_or_else(|| panic!("pane {:?} holds non-content {:?}", id, child));
                        assert!(
                            !(pane.kind == ContentKind::Anchorable
                                && content.kind == ContentKind::Document),
                            "anchorable pane {:?} holds document {:?}",
                            id,
                            child
                        );
                    }
                }
                _ => {}
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_shape() {
        let tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        assert_eq!(tree.parent(root_panel), Some(tree.root()));
        assert_eq!(tree.children_count(tree.root()), 5);
        assert!(tree.floating_windows().is_empty());
        assert!(tree.is_empty());
        tree.assert_invariants();
    }

    #[test]
    fn test_insert_detaches_from_old_parent() {
        let mut tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        let a = tree.add_pane(root_panel, ContentKind::Anchorable).unwrap();
        let b = tree.add_pane(root_panel, ContentKind::Anchorable).unwrap();
        let c = tree
            .add_content(a, ContentData::anchorable("c", "C"))
            .unwrap();

        tree.insert_child_at(b, 0, c).unwrap();

        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[c]);
        assert_eq!(tree.parent(c), Some(b));
        tree.assert_invariants();
    }

    #[test]
    fn test_insert_rejects_cycles() {
        let mut tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        let group = tree
            .add_group(root_panel, ContentKind::Anchorable, Orientation::Vertical)
            .unwrap();
        let inner = tree
            .add_group(group, ContentKind::Anchorable, Orientation::Horizontal)
            .unwrap();
        assert_eq!(
            tree.insert_child_at(inner, 0, group),
            Err(DockError::NotDetachable(group))
        );
    }

    #[test]
    fn test_selection_follows_removal() {
        let mut tree = LayoutTree::new();
        let pane = tree
            .add_pane(tree.root_panel(), ContentKind::Document)
            .unwrap();
        let a = tree.add_content(pane, ContentData::document("a", "A")).unwrap();
        let b = tree.add_content(pane, ContentData::document("b", "B")).unwrap();
        tree.select_tab(pane, 1).unwrap();
        assert!(tree.content(b).unwrap().is_selected);

        tree.remove_child(pane, b).unwrap();
        assert_eq!(tree.pane(pane).unwrap().selected_index, Some(0));
        assert!(tree.content(a).unwrap().is_selected);
    }

    #[test]
    fn test_descendants_preorder() {
        let mut tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        let p1 = tree.add_pane(root_panel, ContentKind::Document).unwrap();
        let c1 = tree.add_content(p1, ContentData::document("1", "1")).unwrap();
        let p2 = tree.add_pane(root_panel, ContentKind::Document).unwrap();
        let c2 = tree.add_content(p2, ContentData::document("2", "2")).unwrap();

        let order: Vec<NodeId> = tree.descendants(root_panel).collect();
        assert_eq!(order, vec![p1, c1, p2, c2]);
        assert_eq!(tree.find_parent_of_type(c2, NodeTag::Panel), Some(root_panel));
    }

    #[test]
    fn test_destroy_frees_subtree() {
        let mut tree = LayoutTree::new();
        let pane = tree
            .add_pane(tree.root_panel(), ContentKind::Document)
            .unwrap();
        let c = tree.add_content(pane, ContentData::document("a", "A")).unwrap();
        let before = tree.len();

        tree.destroy(pane).unwrap();

        assert_eq!(tree.len(), before - 2);
        assert!(!tree.contains(c));
        tree.assert_invariants();
    }

    #[test]
    fn test_structural_changes_are_queued() {
        let mut tree = LayoutTree::new();
        let root_panel = tree.root_panel();
        tree.take_changes();

        let pane = tree.add_pane(root_panel, ContentKind::Document).unwrap();
        tree.set_orientation(root_panel, Orientation::Vertical).unwrap();
        tree.set_orientation(root_panel, Orientation::Vertical).unwrap();

        let changes = tree.take_changes();
        assert!(changes.contains(&TreeChange::ChildrenChanged(root_panel)));
        assert_eq!(
            changes
                .iter()
                .filter(|c| **c == TreeChange::OrientationChanged(root_panel))
                .count(),
            1
        );
        assert!(!tree.has_changes());
        assert!(tree.set_orientation(pane, Orientation::Horizontal).is_err());
    }
}
