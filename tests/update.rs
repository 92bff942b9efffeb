//! Tests for the update entry point and the commands it returns

mod common;

use common::{ide_layout, pane_with, test_model};
use dockyard::commands::Cmd;
use dockyard::drag::OverlayEvent;
use dockyard::geometry::Point;
use dockyard::messages::{AutoHideMsg, ContentMsg, DockMsg, DragMsg, LayoutMsg};
use dockyard::model::{AutoHideTicket, ContentData, ContentKind, LayoutTree, NodeTag};
use dockyard::update::update;

fn has_overlay(cmd: &Cmd) -> bool {
    cmd.clone()
        .flatten()
        .iter()
        .any(|c| matches!(c, Cmd::Overlay(events) if !events.is_empty()))
}

// ============================================================================
// Content and layout messages
// ============================================================================

#[test]
fn test_float_redraws_and_places_window() {
    let ide = ide_layout();
    let explorer = ide.explorer;
    let mut model = test_model(ide.tree);

    let cmd = update(&mut model, DockMsg::Content(ContentMsg::Float(explorer)));

    assert!(cmd.unwrap().needs_redraw());
    let window = model
        .tree
        .find_parent_of_type(explorer, NodeTag::FloatingWindow)
        .unwrap();
    let rect = model.tree.get(window).unwrap().rect;
    assert_eq!((rect.width, rect.height), (300.0, 200.0));
}

#[test]
fn test_rejected_operation_returns_none() {
    let ide = ide_layout();
    let main_rs = ide.main_rs;
    let mut model = test_model(ide.tree);

    let cmd = update(&mut model, DockMsg::Content(ContentMsg::AutoHide(main_rs)));

    assert_eq!(cmd, None);
}

#[test]
fn test_select_tab_activates_content() {
    let ide = ide_layout();
    let (documents, lib_rs) = (ide.documents, ide.lib_rs);
    let mut model = test_model(ide.tree);

    let cmd = update(
        &mut model,
        DockMsg::Layout(LayoutMsg::SelectTab {
            pane: documents,
            index: 1,
        }),
    );

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.tree.active_content(), Some(lib_rs));
    assert_eq!(model.tree.pane(documents).unwrap().selected_index, Some(1));
}

#[test]
fn test_add_content_activates_new_tab() {
    let ide = ide_layout();
    let documents = ide.documents;
    let mut model = test_model(ide.tree);

    update(
        &mut model,
        DockMsg::Layout(LayoutMsg::AddContent {
            pane: documents,
            content: ContentData::document("mod.rs", "mod.rs"),
        }),
    );

    let active = model.tree.active_content().unwrap();
    assert_eq!(model.tree.content(active).unwrap().content_id, "mod.rs");
    assert_eq!(model.tree.children(documents).last(), Some(&active));
    // New content gets a body rectangle from the relayout
    assert_eq!(model.tree.get(active).unwrap().rect.y, 24.0);
}

// ============================================================================
// Drag messages
// ============================================================================

#[test]
fn test_drag_move_and_drop_through_update() {
    let ide = ide_layout();
    let (explorer, documents) = (ide.explorer, ide.documents);
    let mut model = test_model(ide.tree);
    update(&mut model, DockMsg::Content(ContentMsg::Float(explorer)));
    let window = model
        .tree
        .find_parent_of_type(explorer, NodeTag::FloatingWindow)
        .unwrap();
    let target = model.tree.get(documents).unwrap().rect.center();

    assert_eq!(update(&mut model, DockMsg::Drag(DragMsg::Begin { window })), None);
    assert!(model.drag.is_some());

    let moved = update(&mut model, DockMsg::drag_to(target)).unwrap();
    assert!(has_overlay(&moved));

    let dropped = update(&mut model, DockMsg::drop_at(target)).unwrap();
    assert!(dropped.needs_redraw());
    assert!(model.drag.is_none());
    assert!(!model.tree.contains(window));
    assert_eq!(model.tree.parent(explorer), Some(documents));
}

#[test]
fn test_drop_nowhere_keeps_floating() {
    let ide = ide_layout();
    let explorer = ide.explorer;
    let mut model = test_model(ide.tree);
    update(&mut model, DockMsg::Content(ContentMsg::Float(explorer)));
    let window = model
        .tree
        .find_parent_of_type(explorer, NodeTag::FloatingWindow)
        .unwrap();

    update(&mut model, DockMsg::Drag(DragMsg::Begin { window }));
    let cmd = update(&mut model, DockMsg::drop_at(Point::new(-10.0, -10.0))).unwrap();

    assert!(cmd
        .flatten()
        .contains(&Cmd::KeepFloating { window }));
    assert!(model.tree.contains(window));
}

#[test]
fn test_abort_emits_exit_events() {
    let ide = ide_layout();
    let (explorer, documents) = (ide.explorer, ide.documents);
    let mut model = test_model(ide.tree);
    update(&mut model, DockMsg::Content(ContentMsg::Float(explorer)));
    let window = model
        .tree
        .find_parent_of_type(explorer, NodeTag::FloatingWindow)
        .unwrap();
    let target = model.tree.get(documents).unwrap().rect.center();
    update(&mut model, DockMsg::Drag(DragMsg::Begin { window }));
    update(&mut model, DockMsg::drag_to(target));

    let cmd = update(&mut model, DockMsg::Drag(DragMsg::Abort)).unwrap();

    match cmd {
        Cmd::Overlay(events) => {
            assert!(matches!(events.last(), Some(OverlayEvent::HostExited(_))))
        }
        other => panic!("expected overlay events, got {:?}", other),
    }
    assert!(model.drag.is_none());
}

#[test]
fn test_drag_messages_without_session_are_ignored() {
    let ide = ide_layout();
    let mut model = test_model(ide.tree);

    assert_eq!(update(&mut model, DockMsg::drag_to(Point::new(1.0, 1.0))), None);
    assert_eq!(update(&mut model, DockMsg::Drag(DragMsg::Abort)), None);
}

// ============================================================================
// Auto-hide messages
// ============================================================================

fn auto_hidden_model() -> (dockyard::DockingModel, dockyard::NodeId) {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    let (_, tools) = pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Explorer"]);
    pane_with(&mut tree, root_panel, ContentKind::Document, &["main.rs"]);
    let mut model = test_model(tree);
    update(&mut model, DockMsg::Content(ContentMsg::AutoHide(tools[0])));
    (model, tools[0])
}

#[test]
fn test_release_schedules_and_elapsed_collapses() {
    let (mut model, explorer) = auto_hidden_model();
    update(&mut model, DockMsg::AutoHide(AutoHideMsg::Show(explorer)));
    assert_eq!(model.tree.popped_out(), Some(explorer));

    let cmd = update(&mut model, DockMsg::AutoHide(AutoHideMsg::Release));
    let Some(Cmd::ScheduleAutoHide { ticket, delay_ms }) = cmd else {
        panic!("expected a scheduled collapse, got {:?}", cmd);
    };
    assert_eq!(delay_ms, 400);

    let cmd = update(&mut model, DockMsg::AutoHide(AutoHideMsg::Elapsed(ticket)));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.tree.popped_out(), None);
}

#[test]
fn test_hold_cancels_pending_collapse() {
    let (mut model, explorer) = auto_hidden_model();
    update(&mut model, DockMsg::AutoHide(AutoHideMsg::Show(explorer)));
    let Some(Cmd::ScheduleAutoHide { ticket, .. }) =
        update(&mut model, DockMsg::AutoHide(AutoHideMsg::Release))
    else {
        panic!("expected a scheduled collapse");
    };

    let cmd = update(&mut model, DockMsg::AutoHide(AutoHideMsg::Hold));
    assert_eq!(cmd, Some(Cmd::CancelAutoHide { ticket }));

    // The host timer fires anyway: stale tickets change nothing
    let cmd = update(&mut model, DockMsg::AutoHide(AutoHideMsg::Elapsed(ticket)));
    assert_eq!(cmd, None);
    assert_eq!(model.tree.popped_out(), Some(explorer));
}

#[test]
fn test_release_without_pop_out_does_nothing() {
    let (mut model, _) = auto_hidden_model();
    assert_eq!(update(&mut model, DockMsg::AutoHide(AutoHideMsg::Release)), None);
    assert_eq!(
        update(
            &mut model,
            DockMsg::AutoHide(AutoHideMsg::Elapsed(AutoHideTicket(99)))
        ),
        None
    );
}

#[test]
fn test_restore_from_auto_hide_through_update() {
    let (mut model, explorer) = auto_hidden_model();

    let cmd = update(
        &mut model,
        DockMsg::Content(ContentMsg::RestoreFromAutoHide(explorer)),
    );

    assert!(cmd.unwrap().needs_redraw());
    let pane = model.tree.parent(explorer).unwrap();
    assert_eq!(model.tree.tag(pane), Some(NodeTag::Pane));
    assert_eq!(model.tree.active_content(), Some(explorer));
}
