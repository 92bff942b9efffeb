//! Docking configuration persistence
//!
//! Stores layout preferences in `~/.config/dockyard/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings the layout engine consults while docking, arranging and dragging
///
/// Every field has a default, so a partial YAML file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockingConfig {
    /// Thickness of the splitter bars between split children (pixels)
    pub splitter_size: f64,
    /// When docking tool windows beside documents, allow a new nested panel
    /// with its own orientation instead of reusing the existing one
    pub allow_mixed_orientation: bool,
    /// Delay before a popped-out auto-hide window collapses again
    pub auto_hide_delay_ms: u64,
    pub pane_min_width: f64,
    pub pane_min_height: f64,
    /// Edge length of the square overlay drop buttons
    pub drop_button_size: f64,
    pub tab_strip_height: f64,
    pub tab_width: f64,
    /// Size of a window created by floating a content
    pub floating_width: f64,
    pub floating_height: f64,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            splitter_size: 6.0,
            allow_mixed_orientation: false,
            auto_hide_delay_ms: 400,
            pane_min_width: 25.0,
            pane_min_height: 25.0,
            drop_button_size: 32.0,
            tab_strip_height: 24.0,
            tab_width: 120.0,
            floating_width: 300.0,
            floating_height: 200.0,
        }
    }
}

impl DockingConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`, falling back to defaults (with a warning) when
    /// the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Strict load: errors instead of falling back
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path =
            crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
