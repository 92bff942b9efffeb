//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockyard::config::DockingConfig;
use dockyard::geometry::Rect;
use dockyard::model::{
    ContentData, ContentKind, DockLength, DockingModel, LayoutTree, NodeId, Orientation,
};

/// Main surface used by every layout test
pub fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 800.0)
}

/// Add a pane holding one content per title
pub fn pane_with(
    tree: &mut LayoutTree,
    parent: NodeId,
    kind: ContentKind,
    titles: &[&str],
) -> (NodeId, Vec<NodeId>) {
    let pane = tree.add_pane(parent, kind).unwrap();
    let contents = titles
        .iter()
        .map(|title| {
            tree.add_content(pane, ContentData::new(kind, *title, *title))
                .unwrap()
        })
        .collect();
    (pane, contents)
}

/// Floating window → pane → one content, as left behind by floating a tab
pub fn floating(tree: &mut LayoutTree, kind: ContentKind, title: &str, rect: Rect) -> (NodeId, NodeId) {
    let window = tree.new_floating_window(kind, rect);
    let (_, contents) = pane_with(tree, window, kind, &[title]);
    (window, contents[0])
}

pub fn floating_tool(tree: &mut LayoutTree, title: &str) -> (NodeId, NodeId) {
    floating(tree, ContentKind::Anchorable, title, Rect::new(600.0, 500.0, 200.0, 150.0))
}

pub fn floating_document(tree: &mut LayoutTree, title: &str) -> (NodeId, NodeId) {
    floating(tree, ContentKind::Document, title, Rect::new(600.0, 500.0, 200.0, 150.0))
}

/// Horizontal root panel with two tool panes `[P1, P2]`
pub fn two_tool_panes() -> (LayoutTree, NodeId, NodeId) {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    let (p1, _) = pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Explorer"]);
    let (p2, _) = pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Outline"]);
    (tree, p1, p2)
}

/// Handles into [`ide_layout`]
pub struct Ide {
    pub tree: LayoutTree,
    pub tools: NodeId,
    pub documents: NodeId,
    pub explorer: NodeId,
    pub main_rs: NodeId,
    pub lib_rs: NodeId,
}

/// `[tools (200px) | documents (*)]` in a horizontal root panel
pub fn ide_layout() -> Ide {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    tree.set_orientation(root_panel, Orientation::Horizontal).unwrap();

    let (tools, tool_contents) =
        pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Explorer"]);
    tree.get_mut(tools).unwrap().size.width = DockLength::Absolute(200.0);
    let (documents, docs) = pane_with(
        &mut tree,
        root_panel,
        ContentKind::Document,
        &["main.rs", "lib.rs"],
    );

    Ide {
        tree,
        tools,
        documents,
        explorer: tool_contents[0],
        main_rs: docs[0],
        lib_rs: docs[1],
    }
}

/// Lay the tree out on [`bounds`] with the default config
pub fn arranged(mut tree: LayoutTree) -> LayoutTree {
    tree.arrange(bounds(), &DockingConfig::default());
    tree
}

pub fn test_model(tree: LayoutTree) -> DockingModel {
    DockingModel::with_tree(tree, DockingConfig::default(), bounds())
}
