//! Drop hosts and the areas/targets they offer for a given drag

use super::target::{AreaKind, DropArea, DropTarget};
use crate::config::DockingConfig;
use crate::dock::{DockDirection, DropCommand, DropTargetKind};
use crate::geometry::{Point, Rect};
use crate::model::{ContentKind, LayoutTree, NodeId, NodeKind};

/// Gap between a host or pane edge and its edge buttons
const EDGE_INSET: f64 = 4.0;

/// A top-level drop surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostId {
    /// The main docking surface
    Main,
    /// Another floating window
    Floating(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropHost {
    pub id: HostId,
    pub rect: Rect,
}

/// Candidate hosts for dragging `dragged`, topmost first
///
/// Floating windows sit above the main surface, later ones above earlier
/// ones. The dragged window itself is never a host.
pub fn collect_hosts(tree: &LayoutTree, dragged: NodeId) -> Vec<DropHost> {
    let mut hosts: Vec<DropHost> = tree
        .floating_windows()
        .into_iter()
        .rev()
        .filter(|&window| window != dragged)
        .filter_map(|window| match tree.kind(window) {
            Some(NodeKind::FloatingWindow(data)) if !data.rect.is_empty() => Some(DropHost {
                id: HostId::Floating(window),
                rect: data.rect,
            }),
            _ => None,
        })
        .collect();
    let main = tree.get(tree.root()).map(|n| n.rect).unwrap_or_default();
    hosts.push(DropHost {
        id: HostId::Main,
        rect: main,
    });
    hosts
}

/// The topmost host under `point`
pub fn hit_test_screen(hosts: &[DropHost], point: Point) -> Option<HostId> {
    hosts
        .iter()
        .find(|host| host.rect.contains(point))
        .map(|host| host.id)
}

/// Areas of `host` offering targets for content of `kind`
pub fn collect_areas(
    tree: &LayoutTree,
    host: &DropHost,
    kind: ContentKind,
    config: &DockingConfig,
) -> Vec<DropArea> {
    let subtree = match host.id {
        HostId::Main => tree.root_panel(),
        HostId::Floating(window) => window,
    };

    let mut areas = Vec::new();
    if host.id == HostId::Main {
        areas.push(host_area(tree, host.rect, kind, config));
    }

    for id in tree.descendants(subtree) {
        match tree.kind(id) {
            Some(NodeKind::Pane(pane)) => {
                if pane.kind == ContentKind::Anchorable && kind == ContentKind::Document {
                    continue;
                }
                areas.push(pane_area(tree, id, pane.kind, kind, config));
            }
            Some(NodeKind::Group(group)) if tree.contents_of(id).is_empty() => {
                if group.kind == ContentKind::Anchorable && kind == ContentKind::Document {
                    continue;
                }
                let rect = tree.get(id).map(|n| n.rect).unwrap_or_default();
                let mut area = DropArea::new(AreaKind::Group, id, rect);
                area.targets.push(DropTarget::new(
                    DropCommand::new(id, DropTargetKind::GroupInside),
                    Rect::centered(rect.center(), config.drop_button_size),
                    rect,
                ));
                areas.push(area);
            }
            _ => {}
        }
    }
    areas
}

fn host_area(tree: &LayoutTree, rect: Rect, kind: ContentKind, config: &DockingConfig) -> DropArea {
    let root_panel = tree.root_panel();
    let mut area = DropArea::new(AreaKind::Host, root_panel, rect);

    if tree.children_count(root_panel) == 0 {
        area.targets.push(DropTarget::new(
            DropCommand::new(root_panel, DropTargetKind::GroupInside),
            Rect::centered(rect.center(), config.drop_button_size),
            rect,
        ));
    } else if kind == ContentKind::Anchorable {
        for direction in DockDirection::ALL {
            area.targets.push(DropTarget::new(
                DropCommand::new(root_panel, DropTargetKind::RootEdge(direction)),
                edge_button(rect, direction, config.drop_button_size, EDGE_INSET),
                rect,
            ));
        }
    }
    area
}

fn pane_area(
    tree: &LayoutTree,
    pane: NodeId,
    pane_kind: ContentKind,
    kind: ContentKind,
    config: &DockingConfig,
) -> DropArea {
    let rect = tree.get(pane).map(|n| n.rect).unwrap_or_default();
    let mut area = DropArea::new(AreaKind::Pane, pane, rect);
    let button = config.drop_button_size;
    let center = rect.center();

    // Cross of five buttons around the pane center
    area.targets.push(DropTarget::new(
        DropCommand::new(pane, DropTargetKind::PaneInside { tab_index: None }),
        Rect::centered(center, button),
        rect,
    ));
    for direction in DockDirection::ALL {
        let (dx, dy) = match direction {
            DockDirection::Left => (-button, 0.0),
            DockDirection::Top => (0.0, -button),
            DockDirection::Right => (button, 0.0),
            DockDirection::Bottom => (0.0, button),
        };
        area.targets.push(DropTarget::new(
            DropCommand::new(pane, DropTargetKind::PaneEdge(direction)),
            Rect::centered(Point::new(center.x + dx, center.y + dy), button),
            rect,
        ));
    }

    // Tab slots, plus the free space after the last tab
    let strip = config.tab_strip_height.min(rect.height);
    let count = tree.children_count(pane);
    for index in 0..=count {
        let x = rect.x + index as f64 * config.tab_width;
        let width = if index == count {
            rect.right() - x
        } else {
            config.tab_width.min(rect.right() - x)
        };
        if width <= 0.0 {
            break;
        }
        let slot = Rect::new(x, rect.y, width, strip);
        let mut target = DropTarget::new(
            DropCommand::new(
                pane,
                DropTargetKind::PaneInside {
                    tab_index: Some(index),
                },
            ),
            slot,
            rect,
        );
        target.tab_rect = Some(Rect::new(x, rect.y, width.min(config.tab_width), strip));
        area.targets.push(target);
    }

    if pane_kind == ContentKind::Document && kind == ContentKind::Anchorable {
        let documents = document_area_rect(tree, pane);
        let body = Rect::new(rect.x, rect.y + strip, rect.width, rect.height - strip);
        for direction in DockDirection::ALL {
            area.targets.push(DropTarget::new(
                DropCommand::new(pane, DropTargetKind::PaneEdgeAsAnchorable(direction)),
                edge_button(body, direction, button, EDGE_INSET),
                documents,
            ));
        }
    }
    area
}

/// Rectangle of the outermost document group around `pane`
fn document_area_rect(tree: &LayoutTree, pane: NodeId) -> Rect {
    let mut anchor = pane;
    while let Some(parent) = tree.parent(anchor) {
        match tree.kind(parent) {
            Some(NodeKind::Group(group)) if group.kind == ContentKind::Document => anchor = parent,
            _ => break,
        }
    }
    tree.get(anchor).map(|n| n.rect).unwrap_or_default()
}

/// Button centered on one edge of `rect`, `inset` pixels inside it
fn edge_button(rect: Rect, direction: DockDirection, size: f64, inset: f64) -> Rect {
    let center = rect.center();
    let half = size / 2.0;
    let at = match direction {
        DockDirection::Left => Point::new(rect.x + inset + half, center.y),
        DockDirection::Top => Point::new(center.x, rect.y + inset + half),
        DockDirection::Right => Point::new(rect.right() - inset - half, center.y),
        DockDirection::Bottom => Point::new(center.x, rect.bottom() - inset - half),
    };
    Rect::centered(at, size)
}
