//! Item files: the host data source for both panels.
//!
//! ```toml
//! [[unselected]]
//! value = "rust"
//! displayValue = "Rust"
//!
//! [[selected]]
//! value = "go"
//! displayValue = "Go"
//! isSelected = true
//! ```
//!
//! JSON files use the same shape: `{ "unselected": [...], "selected": [...] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SourceError, SourceResult};
use crate::mover::Item;

/// Contents of both panels, as read from or written back to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSet {
    pub unselected: Vec<Item>,
    pub selected: Vec<Item>,
}

impl ItemSet {
    /// Read an item file, picking the format from the extension.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| SourceError::Toml(path.to_path_buf(), e))
            }
            Some("json") => serde_json::from_str(&contents)
                .map_err(|e| SourceError::Json(path.to_path_buf(), e)),
            _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Small built-in list used when no item file is given
    pub fn demo() -> Self {
        let languages = [
            ("rust", "Rust"),
            ("go", "Go"),
            ("zig", "Zig"),
            ("c", "C"),
            ("haskell", "Haskell"),
            ("ocaml", "OCaml"),
            ("python", "Python"),
            ("elixir", "Elixir"),
        ];

        let mut unselected: Vec<Item> = languages
            .iter()
            .map(|(value, label)| Item::new(*value, *label))
            .collect();
        if let Some(first) = unselected.first_mut() {
            first.is_selected = true;
        }

        Self {
            unselected,
            selected: vec![Item::new("go", "Go")],
        }
    }

    /// Pretty JSON for printing the accepted result.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
