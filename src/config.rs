//! Configuration file support for mover.
//!
//! Configuration is loaded from `~/.config/mover/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/mover/config.toml
//! left_title = "Available"
//! right_title = "Selected"
//! moved_item_location = "bottom"
//! normalize_lists = true
//! show_icons = false
//! events_file = "~/.mover/events.jsonl"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mover::{DropLocation, MoverOptions};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Title of the left (unselected) panel
    pub left_title: Option<String>,

    /// Title of the right (selected) panel
    pub right_title: Option<String>,

    /// Where moved items land in the other panel
    pub moved_item_location: Option<DropLocation>,

    /// Remove items from the left panel that are already on the right
    pub normalize_lists: Option<bool>,

    /// Use unicode arrows on the move controls instead of `>>`, `>`, `<`, `<<`
    pub show_icons: Option<bool>,

    /// Append every reconciler event to this file as JSON lines
    pub events_file: Option<PathBuf>,
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub left_title: Option<String>,
    pub right_title: Option<String>,
    pub moved_item_location: Option<DropLocation>,
    pub normalize_lists: Option<bool>,
    pub events_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mover")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, cli: CliOverrides) -> Self {
        if cli.left_title.is_some() {
            self.left_title = cli.left_title;
        }
        if cli.right_title.is_some() {
            self.right_title = cli.right_title;
        }
        if cli.moved_item_location.is_some() {
            self.moved_item_location = cli.moved_item_location;
        }
        if cli.normalize_lists.is_some() {
            self.normalize_lists = cli.normalize_lists;
        }
        if cli.events_file.is_some() {
            self.events_file = cli.events_file;
        }
        self
    }

    pub fn left_title(&self) -> &str {
        self.left_title.as_deref().unwrap_or("Available")
    }

    pub fn right_title(&self) -> &str {
        self.right_title.as_deref().unwrap_or("Selected")
    }

    /// Get the drop location, falling back to `MOVER_DROP_LOCATION` or `top`.
    pub fn moved_item_location(&self) -> DropLocation {
        self.moved_item_location
            .or_else(|| {
                std::env::var("MOVER_DROP_LOCATION")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or_default()
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons.unwrap_or(true)
    }

    /// Events file with a leading `~` resolved against the home directory.
    pub fn events_file(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand_home)
    }

    /// Reconciler options derived from this configuration.
    pub fn mover_options(&self) -> MoverOptions {
        MoverOptions {
            drop_location: self.moved_item_location(),
            normalize: self.normalize_lists.unwrap_or(true),
        }
    }
}

/// Expand a leading `~` component to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
