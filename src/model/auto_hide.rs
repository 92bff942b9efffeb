//! Auto-hide collapse delay
//!
//! The core never owns a live timer. Starting the delay hands out a ticket
//! that the host schedules on its event loop; when the host reports the
//! ticket back, the pop-out collapses only if that ticket is still the
//! current one. Cancelling or restarting invalidates older tickets.

use serde::Serialize;

/// Identifies one scheduled collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AutoHideTicket(pub u64);

/// Single-shot, cancellable collapse delay
#[derive(Debug, Clone, Default)]
pub struct AutoHideTimer {
    next: u64,
    current: Option<AutoHideTicket>,
}

impl AutoHideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the delay, returning the ticket to schedule
    pub fn start_delay(&mut self) -> AutoHideTicket {
        self.next += 1;
        let ticket = AutoHideTicket(self.next);
        self.current = Some(ticket);
        ticket
    }

    /// Invalidate the pending ticket, if any
    pub fn cancel_delay(&mut self) -> Option<AutoHideTicket> {
        self.current.take()
    }

    /// Consume `ticket`; true when it was still current and the pop-out
    /// should collapse now
    pub fn fire(&mut self, ticket: AutoHideTicket) -> bool {
        if self.current == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}
