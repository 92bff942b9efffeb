//! Auto-hide pop-out handlers
//!
//! The collapse delay is a ticket the host schedules; see
//! [`AutoHideTimer`](crate::model::AutoHideTimer).

use tracing::{trace, warn};

use crate::commands::Cmd;
use crate::messages::AutoHideMsg;
use crate::model::DockingModel;

pub fn update_auto_hide(model: &mut DockingModel, msg: AutoHideMsg) -> Option<Cmd> {
    match msg {
        AutoHideMsg::Show(content) => {
            if let Err(e) = model.tree.show_auto_hide(content) {
                warn!("Cannot pop out {:?}: {}", content, e);
                return None;
            }
            model.tree.activate(content);
            match model.auto_hide.cancel_delay() {
                Some(ticket) => Some(Cmd::batch(vec![
                    Cmd::CancelAutoHide { ticket },
                    Cmd::Redraw,
                ])),
                None => Some(Cmd::Redraw),
            }
        }

        AutoHideMsg::Hold => model
            .auto_hide
            .cancel_delay()
            .map(|ticket| Cmd::CancelAutoHide { ticket }),

        AutoHideMsg::Release => {
            model.tree.popped_out()?;
            let ticket = model.auto_hide.start_delay();
            Some(Cmd::ScheduleAutoHide {
                ticket,
                delay_ms: model.config.auto_hide_delay_ms,
            })
        }

        AutoHideMsg::Elapsed(ticket) => {
            if !model.auto_hide.fire(ticket) {
                trace!(?ticket, "stale auto-hide ticket");
                return None;
            }
            model.tree.hide_all_auto_hide();
            Some(Cmd::Redraw)
        }
    }
}
