//! Tests for the layout pass and splitter moves

mod common;

use common::{bounds, floating_tool, ide_layout, pane_with, test_model};
use dockyard::commands::Cmd;
use dockyard::config::DockingConfig;
use dockyard::dock::{apply_drop, DockDirection, DropCommand, DropTargetKind};
use dockyard::geometry::{Rect, Size};
use dockyard::messages::{DockMsg, LayoutMsg};
use dockyard::model::{ContentKind, DockLength, LayoutTree, Orientation};
use dockyard::update::update;

#[test]
fn test_model_lays_out_on_creation() {
    let ide = ide_layout();
    let (tools, documents) = (ide.tools, ide.documents);
    let model = test_model(ide.tree);

    assert_eq!(model.tree.get(tools).unwrap().rect.width, 200.0);
    assert_eq!(model.tree.get(documents).unwrap().rect.x, 206.0);
    assert_eq!(model.splitters.len(), 1);
    assert_eq!(model.splitters[0].rect, Rect::new(200.0, 0.0, 6.0, 800.0));
}

#[test]
fn test_contents_fill_pane_body_below_tab_strip() {
    let ide = ide_layout();
    let main_rs = ide.main_rs;
    let model = test_model(ide.tree);

    assert_eq!(
        model.tree.get(main_rs).unwrap().rect,
        Rect::new(206.0, 24.0, 794.0, 776.0)
    );
}

#[test]
fn test_nested_panels_split_both_axes() {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    tree.set_orientation(root_panel, Orientation::Vertical).unwrap();
    let row = tree.add_panel(root_panel, Orientation::Horizontal).unwrap();
    let (left, _) = pane_with(&mut tree, row, ContentKind::Document, &["a"]);
    let (right, _) = pane_with(&mut tree, row, ContentKind::Document, &["b"]);
    let (bottom, _) = pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Output"]);
    tree.get_mut(bottom).unwrap().size.height = DockLength::Absolute(194.0);

    let splitters = tree.arrange(bounds(), &DockingConfig::default());

    assert_eq!(tree.get(row).unwrap().rect, Rect::new(0.0, 0.0, 1000.0, 600.0));
    assert_eq!(tree.get(bottom).unwrap().rect, Rect::new(0.0, 606.0, 1000.0, 194.0));
    assert_eq!(tree.get(left).unwrap().rect, Rect::new(0.0, 0.0, 497.0, 600.0));
    assert_eq!(tree.get(right).unwrap().rect, Rect::new(503.0, 0.0, 497.0, 600.0));
    assert_eq!(splitters.len(), 2);
}

#[test]
fn test_minimum_size_of_nested_split() {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    let group = tree
        .add_group(root_panel, ContentKind::Anchorable, Orientation::Vertical)
        .unwrap();
    pane_with(&mut tree, group, ContentKind::Anchorable, &["a"]);
    pane_with(&mut tree, group, ContentKind::Anchorable, &["b"]);
    pane_with(&mut tree, root_panel, ContentKind::Document, &["c"]);

    let config = DockingConfig::default();
    assert_eq!(tree.minimum_size(group, &config), Size::new(25.0, 56.0));
    assert_eq!(tree.minimum_size(root_panel, &config), Size::new(56.0, 56.0));
}

#[test]
fn test_narrow_group_split_by_dock_still_fits() {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    let group = tree
        .add_group(root_panel, ContentKind::Anchorable, Orientation::Vertical)
        .unwrap();
    tree.get_mut(group).unwrap().size.width = DockLength::Absolute(30.0);
    let (upper, _) = pane_with(&mut tree, group, ContentKind::Anchorable, &["Explorer"]);
    pane_with(&mut tree, group, ContentKind::Anchorable, &["Outline"]);
    let (tools, _) = pane_with(&mut tree, root_panel, ContentKind::Anchorable, &["Output"]);
    tree.get_mut(tools).unwrap().size.width = DockLength::Absolute(120.0);
    pane_with(&mut tree, root_panel, ContentKind::Document, &["main.rs"]);

    let config = DockingConfig::default();
    let (window, _) = floating_tool(&mut tree, "Properties");
    apply_drop(
        &mut tree,
        window,
        DropCommand::new(upper, DropTargetKind::PaneEdge(DockDirection::Right)),
        &config,
    )
    .unwrap();
    tree.collect_garbage();

    // The group keeps its declared 30px but now needs 56px
    assert_eq!(tree.minimum_size(group, &config).width, 56.0);
    tree.arrange(Rect::new(0.0, 0.0, 190.0, 400.0), &config);

    let widths: Vec<f64> = tree
        .children(root_panel)
        .iter()
        .map(|&c| tree.get(c).unwrap().rect.width)
        .collect();
    assert_eq!(widths.len(), 3);
    assert!(widths[0] >= 56.0);
    assert!((widths.iter().sum::<f64>() + 12.0 - 190.0).abs() < 1e-6);
}

#[test]
fn test_floating_window_arranged_at_its_rect() {
    let mut tree = LayoutTree::new();
    let rect = Rect::new(120.0, 80.0, 300.0, 200.0);
    let window = tree.new_floating_window(ContentKind::Anchorable, rect);
    let (pane, _) = pane_with(&mut tree, window, ContentKind::Anchorable, &["Output"]);

    tree.arrange(bounds(), &DockingConfig::default());

    assert_eq!(tree.get(window).unwrap().rect, rect);
    assert_eq!(tree.get(pane).unwrap().rect, rect);
}

#[test]
fn test_move_splitter_updates_fixed_width() {
    let ide = ide_layout();
    let tools = ide.tools;
    let mut model = test_model(ide.tree);
    let panel = model.tree.root_panel();

    let cmd = update(
        &mut model,
        DockMsg::Layout(LayoutMsg::MoveSplitter {
            panel,
            index: 0,
            delta: 50.0,
        }),
    );

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(
        model.tree.get(tools).unwrap().size.width,
        DockLength::Absolute(250.0)
    );
    assert_eq!(model.tree.get(tools).unwrap().rect.width, 250.0);
    assert_eq!(model.splitters[0].rect.x, 250.0);
}

#[test]
fn test_move_splitter_past_minimum_is_clamped() {
    let ide = ide_layout();
    let tools = ide.tools;
    let mut model = test_model(ide.tree);
    let panel = model.tree.root_panel();

    update(
        &mut model,
        DockMsg::Layout(LayoutMsg::MoveSplitter {
            panel,
            index: 0,
            delta: -1000.0,
        }),
    );

    assert_eq!(
        model.tree.get(tools).unwrap().size.width,
        DockLength::Absolute(25.0)
    );
}

#[test]
fn test_move_splitter_out_of_range_does_nothing() {
    let ide = ide_layout();
    let mut model = test_model(ide.tree);
    let panel = model.tree.root_panel();

    let cmd = update(
        &mut model,
        DockMsg::Layout(LayoutMsg::MoveSplitter {
            panel,
            index: 5,
            delta: 10.0,
        }),
    );

    assert_eq!(cmd, None);
}

#[test]
fn test_set_bounds_relayouts() {
    let ide = ide_layout();
    let documents = ide.documents;
    let mut model = test_model(ide.tree);

    let cmd = update(
        &mut model,
        DockMsg::Layout(LayoutMsg::SetBounds(Rect::new(0.0, 0.0, 606.0, 400.0))),
    );

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(
        model.tree.get(documents).unwrap().rect,
        Rect::new(206.0, 0.0, 400.0, 400.0)
    );
}
