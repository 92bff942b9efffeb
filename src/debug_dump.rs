//! Layout state dump for diagnostics
//!
//! Serializes the layout tree to JSON, or renders it as an indented text
//! outline.

use std::fmt::Write as _;

use serde::Serialize;

use crate::geometry::Rect;
use crate::model::{DockLength, LayoutTree, NodeId, NodeKind, Orientation};

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub bounds: RectDump,
    pub node_count: usize,
    pub active: Option<String>,
    pub root: NodeDump,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_selected: bool,
    pub width: String,
    pub height: String,
    pub rect: RectDump,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDump>,
}

#[derive(Debug, Serialize)]
pub struct RectDump {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for RectDump {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl LayoutDump {
    pub fn from_tree(tree: &LayoutTree) -> Self {
        let root = tree.root();
        Self {
            bounds: tree.get(root).map(|n| n.rect).unwrap_or_default().into(),
            node_count: tree.len(),
            active: tree
                .active_content()
                .and_then(|id| tree.content(id))
                .map(|c| c.content_id.clone()),
            root: node_dump(tree, root),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

fn node_dump(tree: &LayoutTree, id: NodeId) -> NodeDump {
    let node = tree.get(id);
    let kind = tree.kind(id);
    let content = tree.content(id);
    let size = node.map(|n| n.size).unwrap_or_default();
    NodeDump {
        kind: kind.map(kind_label).unwrap_or_else(|| "missing".to_string()),
        orientation: kind
            .and_then(NodeKind::orientation)
            .map(|o| orientation_label(o).to_string()),
        title: content.map(|c| c.title.clone()),
        is_active: content.is_some_and(|c| c.is_active),
        is_selected: content.is_some_and(|c| c.is_selected),
        width: length_label(size.width),
        height: length_label(size.height),
        rect: node.map(|n| n.rect).unwrap_or_default().into(),
        children: tree
            .children(id)
            .iter()
            .map(|&child| node_dump(tree, child))
            .collect(),
    }
}

fn kind_label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Root => "root".to_string(),
        NodeKind::Panel { .. } => "panel".to_string(),
        NodeKind::Group(group) => format!("{:?} group", group.kind).to_lowercase(),
        NodeKind::Pane(pane) => format!("{:?} pane", pane.kind).to_lowercase(),
        NodeKind::Content(content) => format!("{:?}", content.kind).to_lowercase(),
        NodeKind::FloatingWindow(window) => {
            format!("{:?} floating window", window.kind).to_lowercase()
        }
        NodeKind::AnchorSide(strip) => format!("{:?} auto-hide strip", strip.side).to_lowercase(),
    }
}

fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    }
}

fn length_label(length: DockLength) -> String {
    match length {
        DockLength::Star(w) if w == 1.0 => "*".to_string(),
        DockLength::Star(w) => format!("{}*", w),
        DockLength::Absolute(px) => format!("{}px", px),
        DockLength::Auto => "auto".to_string(),
    }
}

/// Indented one-line-per-node outline of the whole tree
///
/// Empty auto-hide strips are left out.
pub fn outline(tree: &LayoutTree) -> String {
    let mut out = String::new();
    outline_node(tree, tree.root(), 0, &mut out);
    out
}

fn outline_node(tree: &LayoutTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(kind) = tree.kind(id) else {
        return;
    };
    if matches!(kind, NodeKind::AnchorSide(_)) && tree.children_count(id) == 0 {
        return;
    }

    let _ = write!(out, "{:indent$}{}", "", kind_label(kind), indent = depth * 2);
    if let Some(orientation) = kind.orientation() {
        let _ = write!(out, " ({})", orientation_label(orientation));
    }
    if let Some(content) = tree.content(id) {
        let _ = write!(out, " \"{}\"", content.title);
        if content.is_active {
            out.push_str(" [active]");
        } else if content.is_selected {
            out.push_str(" [selected]");
        }
    }
    out.push('\n');

    for &child in tree.children(id) {
        outline_node(tree, child, depth + 1, out);
    }
}
