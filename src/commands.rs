//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::drag::OverlayEvent;
use crate::model::{AutoHideTicket, NodeId};

/// Side effects to perform after an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the layout
    Redraw,
    /// Show/hide overlay buttons and previews, in order
    Overlay(Vec<OverlayEvent>),
    /// Start a single-shot timer; after delay_ms, send
    /// `DockMsg::AutoHide(AutoHideMsg::Elapsed(ticket))`
    ScheduleAutoHide { ticket: AutoHideTicket, delay_ms: u64 },
    /// Drop the timer for a ticket (firing it anyway is harmless)
    CancelAutoHide { ticket: AutoHideTicket },
    /// The drop was not handled; the window stays floating where it is
    KeepFloating { window: NodeId },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Overlay(events) => !events.is_empty(),
            // Timers change nothing visible until they fire
            Cmd::ScheduleAutoHide { .. } | Cmd::CancelAutoHide { .. } => false,
            Cmd::KeepFloating { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
