//! Tracing setup and layout state snapshots for diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,dockyard::drag=trace` - scoped filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockyard/logs/dockyard.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{LayoutTree, NodeId, NodeTag};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/dockyard/logs/dockyard.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockyard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Node counts and activation state, cheap enough to take around every
/// update in debug builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub panels: usize,
    pub groups: usize,
    pub panes: usize,
    pub contents: usize,
    pub floating_windows: usize,
    pub auto_hidden: usize,
    pub active: Option<NodeId>,
}

impl LayoutSnapshot {
    pub fn capture(tree: &LayoutTree) -> Self {
        let mut snapshot = Self {
            active: tree.active_content(),
            ..Self::default()
        };
        for id in tree.descendants(tree.root()) {
            match tree.tag(id) {
                Some(NodeTag::Panel) => snapshot.panels += 1,
                Some(NodeTag::Group) => snapshot.groups += 1,
                Some(NodeTag::Pane) => snapshot.panes += 1,
                Some(NodeTag::Content) => {
                    snapshot.contents += 1;
                    let strip = tree.parent(id).and_then(|p| tree.tag(p));
                    if strip == Some(NodeTag::AnchorSide) {
                        snapshot.auto_hidden += 1;
                    }
                }
                Some(NodeTag::FloatingWindow) => snapshot.floating_windows += 1,
                _ => {}
            }
        }
        snapshot
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let counts = [
            ("panels", self.panels, other.panels),
            ("groups", self.groups, other.groups),
            ("panes", self.panes, other.panes),
            ("contents", self.contents, other.contents),
            ("floating", self.floating_windows, other.floating_windows),
            ("auto-hidden", self.auto_hidden, other.auto_hidden),
        ];
        let mut changes: Vec<String> = counts
            .iter()
            .filter(|(_, before, after)| before != after)
            .map(|(name, before, after)| format!("{}: {} → {}", name, before, after))
            .collect();
        if self.active != other.active {
            changes.push(format!("active: {:?} → {:?}", self.active, other.active));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
