use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use binairo_core::Difficulty;

/// Best winning time per difficulty, kept across sessions in a small
/// JSON file under the platform data directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    best_secs: HashMap<Difficulty, u64>,
}

impl Records {
    fn file_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("binairo-tui")
            .join("records.json")
    }

    /// Load saved records. A missing or unreadable file starts fresh.
    pub fn load() -> Self {
        match fs::read_to_string(Self::file_path()) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write records to disk, best effort.
    pub fn save(&self) {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }

    pub fn best(&self, difficulty: Difficulty) -> Option<u64> {
        self.best_secs.get(&difficulty).copied()
    }

    /// Note a winning time. Returns true when it beats the stored best.
    pub fn record_win(&mut self, difficulty: Difficulty, secs: u64) -> bool {
        match self.best_secs.get(&difficulty) {
            Some(&best) if best <= secs => false,
            _ => {
                self.best_secs.insert(difficulty, secs);
                true
            }
        }
    }
}
