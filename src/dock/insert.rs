use tracing::{debug, trace};

use super::{DockDirection, DropCommand, DropTargetKind};
use crate::config::DockingConfig;
use crate::error::{DockError, DockResult};
use crate::model::{
    ContentKind, GroupData, LayoutTree, NodeId, NodeKind, NodeTag, Orientation, PaneData,
};

/// Move the contents of floating window `window` to the place `command`
/// describes
///
/// Returns the content that was activated. The emptied window and any
/// degenerate containers are left for garbage collection.
pub fn apply_drop(
    tree: &mut LayoutTree,
    window: NodeId,
    command: DropCommand,
    config: &DockingConfig,
) -> DockResult<Option<NodeId>> {
    let kind = match tree.node(window)?.kind {
        NodeKind::FloatingWindow(data) => data.kind,
        ref other => {
            return Err(DockError::UnexpectedKind {
                node: window,
                found: other.tag(),
                expected: "floating window",
            })
        }
    };
    tree.node(command.target)?;
    if tree.is_ancestor_or_self(window, command.target) {
        return Err(DockError::NotDetachable(window));
    }
    let dragged = *tree
        .children(window)
        .first()
        .ok_or(DockError::Unsupported("floating window has no content"))?;

    // Decide before anything moves: the selected tab of the first pane wins
    let to_activate = content_to_activate(tree, dragged);

    debug!(?command, ?kind, "applying drop");
    match command.kind {
        DropTargetKind::PaneInside { tab_index } => {
            dock_inside_pane(tree, command.target, dragged, kind, tab_index)?
        }
        DropTargetKind::PaneEdge(direction) => {
            dock_beside_pane(tree, command.target, dragged, kind, direction)?
        }
        DropTargetKind::RootEdge(direction) => {
            dock_at_root_edge(tree, command.target, dragged, kind, direction)?
        }
        DropTargetKind::PaneEdgeAsAnchorable(direction) => {
            dock_as_anchorable(tree, command.target, dragged, kind, direction, config)?
        }
        DropTargetKind::GroupInside => dock_inside_group(tree, command.target, dragged, kind)?,
    }

    if let Some(content) = to_activate {
        tree.request_activation(content);
    }
    Ok(tree.flush_activation())
}

fn content_to_activate(tree: &LayoutTree, dragged: NodeId) -> Option<NodeId> {
    let selected = tree.panes_of(dragged).first().and_then(|&pane| {
        let index = tree.pane(pane)?.selected_index?;
        tree.children(pane).get(index).copied()
    });
    selected.or_else(|| tree.contents_of(dragged).first().copied())
}

fn expect_pane(tree: &LayoutTree, id: NodeId) -> DockResult<PaneData> {
    match tree.node(id)?.kind {
        NodeKind::Pane(pane) => Ok(pane),
        ref other => Err(DockError::UnexpectedKind {
            node: id,
            found: other.tag(),
            expected: "pane",
        }),
    }
}

fn parent_of(tree: &LayoutTree, id: NodeId) -> DockResult<NodeId> {
    tree.parent(id).ok_or(DockError::NotDetachable(id))
}

/// Tab the dragged contents into a pane
fn dock_inside_pane(
    tree: &mut LayoutTree,
    pane: NodeId,
    dragged: NodeId,
    kind: ContentKind,
    tab_index: Option<usize>,
) -> DockResult<()> {
    let target = expect_pane(tree, pane)?;
    if target.kind == ContentKind::Anchorable && kind == ContentKind::Document {
        return Err(DockError::Unsupported("documents cannot be tabbed into tool panes"));
    }

    for (i, content) in tree.contents_of(dragged).into_iter().enumerate() {
        let remembered = tree
            .content(content)
            .and_then(|c| c.previous)
            .filter(|previous| previous.pane == pane)
            .map(|previous| previous.index);
        let index = match (tab_index, remembered) {
            (Some(tab), _) => tab + i,
            (None, Some(previous)) => previous,
            (None, None) => i,
        };
        tree.insert_child_at(pane, index, content)?;
    }
    trace!(?pane, ?tab_index, "tabbed into pane");
    Ok(())
}

/// Directional dock next to a pane
fn dock_beside_pane(
    tree: &mut LayoutTree,
    pane: NodeId,
    dragged: NodeId,
    kind: ContentKind,
    direction: DockDirection,
) -> DockResult<()> {
    let target = expect_pane(tree, pane)?;
    let node = match (target.kind, kind) {
        (ContentKind::Anchorable, ContentKind::Document) => {
            return Err(DockError::Unsupported("documents cannot dock beside tool panes"));
        }
        // Tool windows dropped beside a document pane become document tabs
        (ContentKind::Document, ContentKind::Anchorable) => {
            collect_into_new_pane(tree, dragged, ContentKind::Document)?
        }
        _ => dragged,
    };
    let parent = parent_of(tree, pane)?;
    dock_beside(tree, parent, pane, node, target.kind, direction)
}

/// Directional dock against the outer edge of a host's root panel
fn dock_at_root_edge(
    tree: &mut LayoutTree,
    root_panel: NodeId,
    dragged: NodeId,
    kind: ContentKind,
    direction: DockDirection,
) -> DockResult<()> {
    if tree.tag(root_panel) != Some(NodeTag::Panel) {
        return Err(DockError::UnexpectedKind {
            node: root_panel,
            found: tree.tag(root_panel).unwrap_or(NodeTag::Root),
            expected: "panel",
        });
    }
    if kind == ContentKind::Document {
        return Err(DockError::Unsupported("documents cannot dock at the layout edge"));
    }

    let orientation = direction.orientation();
    if tree.children_count(root_panel) <= 1 {
        tree.set_orientation(root_panel, orientation)?;
    }

    if tree.orientation(root_panel) == Some(orientation) {
        let index = if direction.is_leading() {
            0
        } else {
            tree.children_count(root_panel)
        };
        insert_flattened(tree, root_panel, index, dragged, orientation)?;
        trace!(?direction, "docked at root edge as sibling");
    } else {
        // A new oriented panel takes over as root panel and wraps the old one
        let holder = parent_of(tree, root_panel)?;
        let panel = tree.create(NodeKind::Panel { orientation });
        tree.replace_child(holder, root_panel, panel)?;
        let ordered = if direction.is_leading() {
            [dragged, root_panel]
        } else {
            [root_panel, dragged]
        };
        for child in ordered {
            tree.push_child(panel, child)?;
        }
        trace!(?direction, "wrapped root panel for edge dock");
    }
    Ok(())
}

/// Tool windows beside the document area that contains `pane`
fn dock_as_anchorable(
    tree: &mut LayoutTree,
    pane: NodeId,
    dragged: NodeId,
    kind: ContentKind,
    direction: DockDirection,
    config: &DockingConfig,
) -> DockResult<()> {
    let target = expect_pane(tree, pane)?;
    if target.kind != ContentKind::Document || kind != ContentKind::Anchorable {
        return Err(DockError::Unsupported("dock as anchorable needs tools over a document pane"));
    }

    // Anchor on the outermost document group above the pane
    let mut anchor = pane;
    while let Some(parent) = tree.parent(anchor) {
        match tree.kind(parent) {
            Some(NodeKind::Group(group)) if group.kind == ContentKind::Document => anchor = parent,
            _ => break,
        }
    }

    let tools = collect_into_new_pane(tree, dragged, ContentKind::Anchorable)?;
    let parent = parent_of(tree, anchor)?;
    let orientation = direction.orientation();
    let leading = direction.is_leading();

    let parent_is_panel = tree.tag(parent) == Some(NodeTag::Panel);
    if parent_is_panel && (!config.allow_mixed_orientation || tree.children_count(parent) == 1) {
        tree.set_orientation(parent, orientation)?;
    }

    if parent_is_panel && tree.orientation(parent) == Some(orientation) {
        let index = tree
            .index_of_child(parent, anchor)
            .ok_or(DockError::NotDetachable(anchor))?;
        tree.insert_child_at(parent, if leading { index } else { index + 1 }, tools)?;
    } else {
        let panel = tree.create(NodeKind::Panel { orientation });
        let size = tree.node(anchor)?.size;
        tree.node_mut(panel)?.size = size;
        tree.replace_child(parent, anchor, panel)?;
        let ordered = if leading { [tools, anchor] } else { [anchor, tools] };
        for child in ordered {
            tree.push_child(panel, child)?;
        }
    }
    trace!(?pane, ?anchor, ?direction, "docked tools beside documents");
    Ok(())
}

/// Drop into an empty group (or an empty root panel)
fn dock_inside_group(
    tree: &mut LayoutTree,
    group: NodeId,
    dragged: NodeId,
    kind: ContentKind,
) -> DockResult<()> {
    let group_kind = match tree.node(group)?.kind {
        NodeKind::Group(data) => Some(data.kind),
        NodeKind::Panel { .. } => None,
        ref other => {
            return Err(DockError::UnexpectedKind {
                node: group,
                found: other.tag(),
                expected: "group or panel",
            })
        }
    };

    match group_kind {
        None => tree.push_child(group, dragged),
        Some(group_kind) if group_kind == kind => {
            coerce_to_group(tree, dragged, group_kind)?;
            tree.push_child(group, dragged)
        }
        Some(ContentKind::Anchorable) => Err(DockError::Unsupported(
            "documents cannot be dropped into a tool group",
        )),
        Some(ContentKind::Document) => {
            let first_pane = tree
                .children(group)
                .iter()
                .copied()
                .find(|&c| tree.tag(c) == Some(NodeTag::Pane));
            let pane = match first_pane {
                Some(pane) => pane,
                None => {
                    let pane = new_pane(tree, ContentKind::Document);
                    tree.insert_child_at(group, 0, pane)?;
                    pane
                }
            };
            for content in tree.contents_of(dragged) {
                tree.push_child(pane, content)?;
            }
            Ok(())
        }
    }
}

/// Insert `node` beside `target` inside `parent`, splitting when the axis
/// differs
fn dock_beside(
    tree: &mut LayoutTree,
    parent: NodeId,
    target: NodeId,
    node: NodeId,
    kind: ContentKind,
    direction: DockDirection,
) -> DockResult<()> {
    let orientation = direction.orientation();
    let splittable = tree.kind(parent).is_some_and(NodeKind::is_split);

    if splittable && tree.children_count(parent) == 1 {
        tree.set_orientation(parent, orientation)?;
    }

    if splittable && tree.orientation(parent) == Some(orientation) {
        let index = tree
            .index_of_child(parent, target)
            .ok_or(DockError::NotDetachable(target))?;
        let index = if direction.is_leading() { index } else { index + 1 };
        insert_flattened(tree, parent, index, node, orientation)?;
        trace!(?target, ?direction, "docked as sibling");
        return Ok(());
    }

    let group = tree.create(NodeKind::Group(GroupData { kind, orientation }));
    let size = tree.node(target)?.size;
    tree.node_mut(group)?.size = size;
    tree.replace_child(parent, target, group)?;
    tree.push_child(group, target)?;
    let index = if direction.is_leading() { 0 } else { 1 };
    insert_flattened(tree, group, index, node, orientation)?;
    trace!(?target, ?direction, "split target into new group");
    Ok(())
}

/// Insert `node` at `index`, splicing its children instead when it is a
/// split container that would only repeat the parent's axis
fn insert_flattened(
    tree: &mut LayoutTree,
    parent: NodeId,
    index: usize,
    node: NodeId,
    orientation: Orientation,
) -> DockResult<()> {
    let group_kind = match tree.kind(parent) {
        Some(NodeKind::Group(group)) => Some(group.kind),
        _ => None,
    };
    let redundant = tree
        .orientation(node)
        .is_some_and(|o| o == orientation || tree.children_count(node) == 1);
    let same_kind = match (group_kind, tree.content_kind(node)) {
        (Some(parent_kind), Some(node_kind)) => parent_kind == node_kind,
        _ => true,
    };

    let nodes = if redundant && same_kind {
        tree.children(node).to_vec()
    } else {
        vec![node]
    };
    for (offset, child) in nodes.into_iter().enumerate() {
        if let Some(kind) = group_kind {
            coerce_to_group(tree, child, kind)?;
        }
        tree.insert_child_at(parent, index + offset, child)?;
    }
    Ok(())
}

/// Groups only hold groups and panes: retag any panel in the subtree
fn coerce_to_group(tree: &mut LayoutTree, id: NodeId, kind: ContentKind) -> DockResult<()> {
    let panels: Vec<NodeId> = std::iter::once(id)
        .chain(tree.descendants(id))
        .filter(|&n| tree.tag(n) == Some(NodeTag::Panel))
        .collect();
    for panel in panels {
        tree.retag_as_group(panel, kind)?;
    }
    Ok(())
}

fn new_pane(tree: &mut LayoutTree, kind: ContentKind) -> NodeId {
    tree.create(NodeKind::Pane(PaneData {
        kind,
        selected_index: None,
    }))
}

/// Move every content under `dragged` into a new detached pane of `kind`
fn collect_into_new_pane(
    tree: &mut LayoutTree,
    dragged: NodeId,
    kind: ContentKind,
) -> DockResult<NodeId> {
    let pane = new_pane(tree, kind);
    for content in tree.contents_of(dragged) {
        tree.push_child(pane, content)?;
    }
    Ok(pane)
}
