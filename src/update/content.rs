//! Content message handlers: float, dock back, close, auto-hide

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::error::{DockError, DockResult};
use crate::messages::ContentMsg;
use crate::model::DockingModel;

pub fn update_content(model: &mut DockingModel, msg: ContentMsg) -> Option<Cmd> {
    let result: DockResult<()> = match msg {
        ContentMsg::Float(content) => {
            let rect = model.floating_rect_for(content);
            model.tree.float_content(content, rect).map(|_| ())
        }
        ContentMsg::DockBack(content) => model.tree.dock_back(content),
        ContentMsg::Close(content) => model.tree.close_content(content),
        ContentMsg::AutoHide(content) => model.tree.auto_hide(content).map(|_| ()),
        ContentMsg::RestoreFromAutoHide(content) => {
            let result = model.tree.restore_from_auto_hide(content, &model.config);
            if result.is_ok() {
                if let Some(ticket) = model.auto_hide.cancel_delay() {
                    model.relayout();
                    return Some(Cmd::batch(vec![
                        Cmd::CancelAutoHide { ticket },
                        Cmd::Redraw,
                    ]));
                }
            }
            result
        }
    };

    match result {
        Ok(()) => Some(Cmd::Redraw),
        Err(DockError::Unsupported(reason)) => {
            debug!(?msg, "ignored: {}", reason);
            None
        }
        Err(e) => {
            warn!(?msg, "content operation failed: {}", e);
            None
        }
    }
}
