//! dockyard - Elm-style docking window layout engine
//!
//! This crate provides the layout tree, the docking and garbage-collection
//! rules, space distribution and the drag-and-drop state machine of an
//! IDE-style docking manager, without any rendering.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod dock;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockingConfig;
pub use error::{DockError, DockResult};
pub use messages::DockMsg;
pub use model::{DockingModel, LayoutTree, NodeId};
