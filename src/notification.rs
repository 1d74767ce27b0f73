//! Host notification sink.
//!
//! Every notification the reconciler emits can be mirrored to a file as one
//! JSON object per line, so a host process can follow the widget with
//! `tail -f` or read the history once it exits. View hooks such as
//! `ScrollToEnd` are not written.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::log;
use crate::mover::MoverEvent;

/// Writes reconciler notifications as JSON lines.
pub struct EventSink {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl EventSink {
    /// A sink that drops everything.
    pub fn disabled() -> Self {
        Self {
            file: None,
            path: None,
        }
    }

    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
        })
    }

    /// Write one event. Returns `true` if it was written.
    pub fn send(&mut self, event: &MoverEvent) -> bool {
        if !event.is_notification() {
            return false;
        }
        let Some(file) = self.file.as_mut() else {
            return false;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                log::log(&format!("Failed to serialize event: {}", e));
                return false;
            }
        };

        match writeln!(file, "{}", line).and_then(|_| file.flush()) {
            Ok(()) => true,
            Err(e) => {
                log::log(&format!("Failed to write event: {}", e));
                false
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mover::{Item, Side};

    #[test]
    fn test_disabled_sink() {
        let mut sink = EventSink::disabled();
        assert!(sink.path().is_none());
        assert!(!sink.send(&MoverEvent::AllMoved {
            side: Side::Right,
            count: 1
        }));
    }

    #[test]
    fn test_writes_json_lines_and_skips_view_hooks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let mut sink = EventSink::open(&path).unwrap();

        assert!(sink.send(&MoverEvent::ItemMoved {
            item: Item::new("a", "A"),
            side: Side::Right,
            target: vec![Item::new("a", "A")],
        }));
        assert!(!sink.send(&MoverEvent::ScrollToEnd { side: Side::Right }));
        assert!(sink.send(&MoverEvent::AllMoved {
            side: Side::Left,
            count: 2
        }));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "item_moved");
        assert_eq!(lines[1]["count"], 2);
    }
}
