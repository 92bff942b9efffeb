//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod auto_hide;
mod content;
mod drag;
mod layout;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockingModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use auto_hide::update_auto_hide;
pub use content::update_content;
pub use drag::update_drag;
pub use layout::update_layout;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch.
#[inline]
pub fn update(model: &mut DockingModel, msg: DockMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DockingModel, msg: DockMsg) -> Option<Cmd> {
    let result = match msg {
        DockMsg::Layout(m) => layout::update_layout(model, m),
        DockMsg::Drag(m) => drag::update_drag(model, m),
        DockMsg::Content(m) => content::update_content(model, m),
        DockMsg::AutoHide(m) => auto_hide::update_auto_hide(model, m),
    };

    // Structural changes invalidate rectangles and splitters
    if model.relayout_if_changed() {
        return Some(match result {
            Some(cmd) if cmd.needs_redraw() => cmd,
            Some(cmd) => Cmd::batch(vec![cmd, Cmd::Redraw]),
            None => Cmd::Redraw,
        });
    }
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs the diff and checks tree
/// invariants. Cursor moves during a drag are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut DockingModel, msg: DockMsg) -> Option<Cmd> {
    use crate::messages::DragMsg;

    let is_noisy = matches!(&msg, DockMsg::Drag(DragMsg::Move(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::capture(&model.tree);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::capture(&model.tree);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }
    model.tree.assert_invariants();

    result
}

/// Display name for a message, including variant and arguments
#[cfg(debug_assertions)]
fn msg_type_name(msg: &DockMsg) -> String {
    match msg {
        DockMsg::Layout(m) => format!("Layout::{:?}", m),
        DockMsg::Drag(m) => format!("Drag::{:?}", m),
        DockMsg::Content(m) => format!("Content::{:?}", m),
        DockMsg::AutoHide(m) => format!("AutoHide::{:?}", m),
    }
}
