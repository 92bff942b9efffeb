//! Command-line argument parsing for the demo binary
//!
//! Supports:
//! - Loading a config file
//! - Choosing the surface size and the drop point
//! - Dragging a document instead of a tool window
//! - JSON output

use clap::Parser;
use std::path::PathBuf;

use dockyard::geometry::{Point, Rect};
use dockyard::model::ContentKind;

/// Docking layout engine: simulate dragging a floating window onto a layout
#[derive(Parser, Debug)]
#[command(
    name = "dockyard",
    version,
    about = "Simulate a docking drag-and-drop and print the layout"
)]
pub struct CliArgs {
    /// YAML config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Width of the main surface
    #[arg(long, default_value_t = 1024.0)]
    pub width: f64,

    /// Height of the main surface
    #[arg(long, default_value_t = 768.0)]
    pub height: f64,

    /// Drop point X (defaults to the middle of the document area)
    #[arg(short, value_name = "X", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Drop point Y (defaults to the middle of the document area)
    #[arg(short, value_name = "Y", allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Float and drag a document instead of a tool window
    #[arg(short, long)]
    pub document: bool,

    /// Print JSON dumps instead of text outlines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Outline,
    Json,
}

/// Demo run derived from CLI arguments
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub config_path: Option<PathBuf>,
    pub bounds: Rect,
    /// `None` drops onto the center of the document pane
    pub drop_point: Option<Point>,
    pub dragged: ContentKind,
    pub output: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into a demo run
    pub fn into_config(self) -> Result<DemoConfig, String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "Surface size must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        let drop_point = match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            (None, None) => None,
            _ => return Err("Both -x and -y are required for a drop point".to_string()),
        };

        Ok(DemoConfig {
            config_path: self.config,
            bounds: Rect::new(0.0, 0.0, self.width, self.height),
            drop_point,
            dragged: if self.document {
                ContentKind::Document
            } else {
                ContentKind::Anchorable
            },
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Outline
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            width: 1024.0,
            height: 768.0,
            x: None,
            y: None,
            document: false,
            json: false,
        }
    }

    #[test]
    fn test_defaults_drag_a_tool_window() {
        let config = args().into_config().unwrap();
        assert_eq!(config.dragged, ContentKind::Anchorable);
        assert_eq!(config.output, OutputFormat::Outline);
        assert_eq!(config.bounds, Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert!(config.drop_point.is_none());
    }

    #[test]
    fn test_drop_point_needs_both_coordinates() {
        let mut a = args();
        a.x = Some(10.0);
        assert!(a.into_config().is_err());

        let mut a = args();
        a.x = Some(10.0);
        a.y = Some(-4.0);
        let config = a.into_config().unwrap();
        assert_eq!(config.drop_point, Some(Point::new(10.0, -4.0)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut a = args();
        a.width = 0.0;
        assert!(a.into_config().is_err());
    }

    #[test]
    fn test_document_and_json_flags() {
        let mut a = args();
        a.document = true;
        a.json = true;
        let config = a.into_config().unwrap();
        assert_eq!(config.dragged, ContentKind::Document);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_from_command_line() {
        let a = CliArgs::try_parse_from(["dockyard", "--json", "-x", "5", "-y", "6"]).unwrap();
        assert!(a.json);
        assert_eq!(a.x, Some(5.0));
        assert_eq!(a.y, Some(6.0));
    }
}
