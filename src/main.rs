//! dockyard demo binary
//!
//! Builds a small IDE-like layout, floats one content, drags its window to a
//! screen point and prints the layout before and after the drop.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use dockyard::commands::Cmd;
use dockyard::config::DockingConfig;
use dockyard::debug_dump::{outline, LayoutDump};
use dockyard::geometry::Point;
use dockyard::messages::{ContentMsg, DockMsg, DragMsg};
use dockyard::model::{
    ContentData, ContentKind, DockLength, DockingModel, LayoutTree, NodeId, NodeTag, Orientation,
};
use dockyard::update::update;

mod cli;

use cli::{CliArgs, DemoConfig, OutputFormat};

/// Handles into the demo layout
struct Demo {
    tree: LayoutTree,
    documents: NodeId,
    tool: NodeId,
    document: NodeId,
}

/// Explorer and properties on the left, two documents on the right, an
/// output window along the bottom
fn demo_layout() -> Result<Demo> {
    let mut tree = LayoutTree::new();
    let root = tree.root_panel();
    tree.set_orientation(root, Orientation::Vertical)?;

    let upper = tree.add_panel(root, Orientation::Horizontal)?;
    let tools = tree.add_pane(upper, ContentKind::Anchorable)?;
    tree.node_mut(tools)?.size.width = DockLength::Absolute(240.0);
    tree.add_content(tools, ContentData::anchorable("explorer", "Explorer"))?;
    let tool = tree.add_content(tools, ContentData::anchorable("properties", "Properties"))?;

    let documents = tree.add_pane(upper, ContentKind::Document)?;
    let document = tree.add_content(documents, ContentData::document("main.rs", "main.rs"))?;
    tree.add_content(documents, ContentData::document("lib.rs", "lib.rs"))?;

    let bottom = tree.add_pane(root, ContentKind::Anchorable)?;
    tree.node_mut(bottom)?.size.height = DockLength::Absolute(160.0);
    tree.add_content(bottom, ContentData::anchorable("output", "Output"))?;

    tree.activate(document);
    Ok(Demo {
        tree,
        documents,
        tool,
        document,
    })
}

#[derive(Serialize)]
struct DemoReport {
    drop_point: [f64; 2],
    handled: bool,
    overlay_events: Vec<String>,
    before: LayoutDump,
    after: LayoutDump,
}

fn print_layout(title: &str, tree: &LayoutTree) {
    println!("== {} ==", title);
    print!("{}", outline(tree));
}

fn run(demo_config: DemoConfig) -> Result<()> {
    let config = match &demo_config.config_path {
        Some(path) => DockingConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DockingConfig::load(),
    };

    let demo = demo_layout()?;
    let floated = match demo_config.dragged {
        ContentKind::Anchorable => demo.tool,
        ContentKind::Document => demo.document,
    };
    let mut model = DockingModel::with_tree(demo.tree, config, demo_config.bounds);

    update(&mut model, DockMsg::Content(ContentMsg::Float(floated)));
    let Some(window) = model
        .tree
        .find_parent_of_type(floated, NodeTag::FloatingWindow)
    else {
        bail!("{:?} could not be floated", floated);
    };

    let point = match demo_config.drop_point {
        Some(point) => point,
        None => model.tree.node(demo.documents)?.rect.center(),
    };
    tracing::info!(?window, x = point.x, y = point.y, "simulating drag");

    let before = LayoutDump::from_tree(&model.tree);
    if demo_config.output == OutputFormat::Outline {
        print_layout("before", &model.tree);
    }

    update(&mut model, DockMsg::Drag(DragMsg::Begin { window }));
    let mut overlay_events = Vec::new();
    for msg in [DockMsg::drag_to(point), DockMsg::drop_at(point)] {
        if let Some(cmd) = update(&mut model, msg) {
            for cmd in cmd.flatten() {
                if let Cmd::Overlay(events) = cmd {
                    overlay_events.extend(events.iter().map(|e| format!("{:?}", e)));
                }
            }
        }
    }
    let handled = !model.tree.contains(window);

    match demo_config.output {
        OutputFormat::Outline => {
            println!();
            print_layout("after", &model.tree);
            println!();
            println!(
                "drop at ({}, {}): {}",
                point.x,
                point.y,
                if handled { "docked" } else { "not handled" }
            );
        }
        OutputFormat::Json => {
            let report = DemoReport {
                drop_point: [point.x, point.y],
                handled,
                overlay_events,
                before,
                after: LayoutDump::from_tree(&model.tree),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dockyard::tracing::init();

    let demo_config = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    run(demo_config)
}
