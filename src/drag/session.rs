//! Drag state machine: host → area → target narrowing per cursor move

use tracing::{debug, trace, warn};

use super::host::{collect_areas, collect_hosts, hit_test_screen, DropHost, HostId};
use super::target::{AreaKind, DropArea, DropTarget};
use crate::config::DockingConfig;
use crate::dock::{apply_drop, DropCommand};
use crate::error::{DockError, DockResult};
use crate::geometry::{Point, Polygon};
use crate::model::{ContentKind, LayoutTree, NodeId, NodeKind};

/// Coarse state of a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    NoHost,
    HostActive,
    AreaActive,
    TargetActive,
}

/// What the host UI should show or hide on its overlay
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    HostEntered(HostId),
    ShowOverlay(HostId),
    HideOverlay(HostId),
    HostExited(HostId),
    AreaEntered { kind: AreaKind, node: NodeId },
    AreaExited { kind: AreaKind, node: NodeId },
    TargetEntered { command: DropCommand, preview: Polygon },
    TargetExited { command: DropCommand },
}

#[derive(Debug)]
struct ActiveHost {
    host: DropHost,
    areas: Vec<DropArea>,
    /// Indices into `areas`, in entry order
    entered: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTarget {
    area: usize,
    index: usize,
}

/// One drag of a floating window, from pick-up to drop or abort
#[derive(Debug)]
pub struct DragSession {
    window: NodeId,
    kind: ContentKind,
    config: DockingConfig,
    hosts: Vec<DropHost>,
    active: Option<ActiveHost>,
    target: Option<ActiveTarget>,
    events: Vec<OverlayEvent>,
}

impl DragSession {
    /// Start dragging floating window `window`
    ///
    /// The host list is captured now; the tree is expected to be arranged.
    pub fn begin(tree: &LayoutTree, window: NodeId, config: &DockingConfig) -> DockResult<Self> {
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
        let hosts = collect_hosts(tree, window);
        debug!(?window, ?kind, hosts = hosts.len(), "drag started");
        Ok(Self {
            window,
            kind,
            config: config.clone(),
            hosts,
            active: None,
            target: None,
            events: Vec::new(),
        })
    }

    pub fn window(&self) -> NodeId {
        self.window
    }

    pub fn state(&self) -> DragState {
        match (&self.active, &self.target) {
            (None, _) => DragState::NoHost,
            (Some(_), Some(_)) => DragState::TargetActive,
            (Some(active), None) if active.entered.is_empty() => DragState::HostActive,
            (Some(_), None) => DragState::AreaActive,
        }
    }

    pub fn active_host(&self) -> Option<HostId> {
        self.active.as_ref().map(|a| a.host.id)
    }

    pub fn active_target(&self) -> Option<&DropTarget> {
        let target = self.target?;
        self.active
            .as_ref()
            .and_then(|a| a.areas.get(target.area))
            .and_then(|area| area.targets.get(target.index))
    }

    /// Areas the cursor is currently in, in entry order
    pub fn entered_areas(&self) -> Vec<&DropArea> {
        match &self.active {
            Some(active) => active.entered.iter().map(|&i| &active.areas[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Drain overlay events produced since the last call
    pub fn take_events(&mut self) -> Vec<OverlayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Track the cursor: resolve the host, then areas, then the target
    pub fn update_cursor_position(&mut self, tree: &LayoutTree, point: Point) {
        // Host
        let hit = hit_test_screen(&self.hosts, point);
        if hit != self.active_host() {
            self.exit_all();
            if let Some(id) = hit {
                self.enter_host(tree, id);
            }
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        // Areas
        for index in 0..active.areas.len() {
            let inside = active.areas[index].rect.contains(point);
            let position = active.entered.iter().position(|&i| i == index);
            match (inside, position) {
                (false, Some(position)) => {
                    if self.target.is_some_and(|t| t.area == index) {
                        exit_target(&mut self.events, active, &mut self.target);
                    }
                    active.entered.remove(position);
                    let area = &active.areas[index];
                    self.events.push(OverlayEvent::AreaExited {
                        kind: area.kind,
                        node: area.node,
                    });
                }
                (true, None) => {
                    active.entered.push(index);
                    let area = &active.areas[index];
                    trace!(kind = ?area.kind, node = ?area.node, "area entered");
                    self.events.push(OverlayEvent::AreaEntered {
                        kind: area.kind,
                        node: area.node,
                    });
                }
                _ => {}
            }
        }

        // Target
        if let Some(target) = self.target {
            if !active.areas[target.area].targets[target.index].contains(point) {
                exit_target(&mut self.events, active, &mut self.target);
            }
        }
        if self.target.is_none() {
            let found = active.entered.iter().find_map(|&area| {
                active.areas[area]
                    .targets
                    .iter()
                    .position(|t| t.contains(point))
                    .map(|index| ActiveTarget { area, index })
            });
            if let Some(found) = found {
                let target = &active.areas[found.area].targets[found.index];
                trace!(command = ?target.command, "target entered");
                self.events.push(OverlayEvent::TargetEntered {
                    command: target.command,
                    preview: target.preview(active.host.rect.origin()),
                });
                self.target = Some(found);
            }
        }
    }

    /// Commit the drag at `point`
    ///
    /// Returns whether the drop was handled. When it was not, the dragged
    /// window stays floating where it is. Garbage collection runs whenever a
    /// docking attempt was made, successful or not.
    pub fn drop(&mut self, tree: &mut LayoutTree, point: Point) -> bool {
        self.update_cursor_position(tree, point);
        let command = self.active_target().map(|t| t.command);
        self.exit_all();

        let Some(command) = command else {
            debug!(?point, "drop outside any target");
            return false;
        };

        let result = apply_drop(tree, self.window, command, &self.config);
        tree.collect_garbage();
        match result {
            Ok(active) => {
                debug!(?command, ?active, "drop handled");
                true
            }
            Err(e) if e.is_unsupported() => {
                debug!(?command, "drop not handled: {}", e);
                false
            }
            Err(e) => {
                warn!(?command, "drop failed: {}", e);
                false
            }
        }
    }

    /// Cancel the drag; the window stays floating
    pub fn abort(&mut self) {
        self.exit_all();
        debug!(window = ?self.window, "drag aborted");
    }

    fn enter_host(&mut self, tree: &LayoutTree, id: HostId) {
        let Some(host) = self.hosts.iter().copied().find(|h| h.id == id) else {
            return;
        };
        let areas = collect_areas(tree, &host, self.kind, &self.config);
        trace!(?id, areas = areas.len(), "host entered");
        self.events.push(OverlayEvent::HostEntered(id));
        self.events.push(OverlayEvent::ShowOverlay(id));
        self.active = Some(ActiveHost {
            host,
            areas,
            entered: Vec::new(),
        });
    }

    /// Leave target, then areas (newest first), then the host
    fn exit_all(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        exit_target(&mut self.events, &active, &mut self.target);
        while let Some(index) = active.entered.pop() {
            let area = &active.areas[index];
            self.events.push(OverlayEvent::AreaExited {
                kind: area.kind,
                node: area.node,
            });
        }
        self.events.push(OverlayEvent::HideOverlay(active.host.id));
        self.events.push(OverlayEvent::HostExited(active.host.id));
    }
}

fn exit_target(
    events: &mut Vec<OverlayEvent>,
    active: &ActiveHost,
    target: &mut Option<ActiveTarget>,
) {
    if let Some(t) = target.take() {
        events.push(OverlayEvent::TargetExited {
            command: active.areas[t.area].targets[t.index].command,
        });
    }
}
