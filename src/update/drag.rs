//! Drag message handlers

use tracing::warn;

use crate::commands::Cmd;
use crate::drag::DragSession;
use crate::messages::DragMsg;
use crate::model::DockingModel;

pub fn update_drag(model: &mut DockingModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Begin { window } => {
            if let Some(mut previous) = model.drag.take() {
                previous.abort();
            }
            match DragSession::begin(&model.tree, window, &model.config) {
                Ok(session) => {
                    model.drag = Some(session);
                    None
                }
                Err(e) => {
                    warn!("Cannot drag {:?}: {}", window, e);
                    None
                }
            }
        }

        DragMsg::Move(point) => {
            let session = model.drag.as_mut()?;
            session.update_cursor_position(&model.tree, point);
            overlay(session.take_events())
        }

        DragMsg::Drop(point) => {
            let mut session = model.drag.take()?;
            let handled = session.drop(&mut model.tree, point);
            let mut cmds = vec![Cmd::Overlay(session.take_events())];
            if handled {
                cmds.push(Cmd::Redraw);
            } else {
                cmds.push(Cmd::KeepFloating {
                    window: session.window(),
                });
            }
            Some(Cmd::batch(cmds))
        }

        DragMsg::Abort => {
            let mut session = model.drag.take()?;
            session.abort();
            overlay(session.take_events())
        }
    }
}

fn overlay(events: Vec<crate::drag::OverlayEvent>) -> Option<Cmd> {
    if events.is_empty() {
        None
    } else {
        Some(Cmd::Overlay(events))
    }
}
