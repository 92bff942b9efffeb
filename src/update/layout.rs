//! Layout message handlers: bounds, splitters, tabs, activation

use tracing::warn;

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{DockingModel, NodeKind};

pub fn update_layout(model: &mut DockingModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SetBounds(rect) => {
            model.bounds = rect;
            model.relayout();
            Some(Cmd::Redraw)
        }

        LayoutMsg::MoveSplitter {
            panel,
            index,
            delta,
        } => match model
            .tree
            .resize_splitter(panel, index, delta, &model.config)
        {
            Ok(applied) if applied != 0.0 => {
                model.relayout();
                Some(Cmd::Redraw)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("Cannot move splitter {} of {:?}: {}", index, panel, e);
                None
            }
        },

        LayoutMsg::SelectTab { pane, index } => {
            let content = model.tree.children(pane).get(index).copied();
            match content {
                Some(content) => {
                    model.tree.activate(content);
                    Some(Cmd::Redraw)
                }
                None => None,
            }
        }

        LayoutMsg::Activate(content) => {
            model.tree.content(content)?;
            model.tree.activate(content);
            Some(Cmd::Redraw)
        }

        LayoutMsg::AddContent { pane, content } => {
            match model.tree.add_content(pane, content) {
                Ok(id) => {
                    model.tree.activate(id);
                    Some(Cmd::Redraw)
                }
                Err(e) => {
                    warn!("Cannot add content to {:?}: {}", pane, e);
                    None
                }
            }
        }

        LayoutMsg::MoveFloatingWindow { window, rect } => {
            let node = model.tree.get_mut(window)?;
            let NodeKind::FloatingWindow(data) = &mut node.kind else {
                return None;
            };
            data.rect = rect;
            model.relayout();
            Some(Cmd::Redraw)
        }
    }
}
