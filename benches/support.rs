//! Shared helpers for benchmarks

use dockyard::geometry::Rect;
use dockyard::model::{ContentData, ContentKind, LayoutTree, NodeId, Orientation};

pub fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 1920.0, 1080.0)
}

/// Alternating rows and columns, `depth` levels deep, each level holding a
/// document pane with `tabs` tabs next to the next level
#[allow(dead_code)]
pub fn make_tree(depth: usize, tabs: usize) -> LayoutTree {
    let mut tree = LayoutTree::new();
    let mut parent = tree.root_panel();
    let mut orientation = Orientation::Horizontal;

    for level in 0..depth {
        let pane = tree.add_pane(parent, ContentKind::Document).unwrap();
        for tab in 0..tabs {
            let name = format!("doc-{}-{}", level, tab);
            tree.add_content(pane, ContentData::document(name.clone(), name))
                .unwrap();
        }
        orientation = orientation.flipped();
        parent = tree.add_panel(parent, orientation).unwrap();
    }
    let pane = tree.add_pane(parent, ContentKind::Anchorable).unwrap();
    tree.add_content(pane, ContentData::anchorable("tools", "Tools"))
        .unwrap();
    tree
}

/// A floating tool window to drag over the layout
#[allow(dead_code)]
pub fn add_floating_tool(tree: &mut LayoutTree) -> NodeId {
    let window = tree.new_floating_window(ContentKind::Anchorable, Rect::new(50.0, 50.0, 300.0, 200.0));
    let pane = tree.add_pane(window, ContentKind::Anchorable).unwrap();
    tree.add_content(pane, ContentData::anchorable("dragged", "Dragged"))
        .unwrap();
    window
}
