use crate::error::GameError;
use crate::model::SolvingPolicy;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_names")]
    pub names: Vec<String>,

    #[serde(default = "default_trials")]
    pub trials: usize,

    #[serde(default = "SolvingPolicy::all")]
    pub policies: Vec<SolvingPolicy>,

    #[serde(default)]
    pub stats_dir: Option<PathBuf>,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_trials() -> usize {
    1000
}
fn default_names() -> Vec<String> {
    [
        "Bob", "John", "Mary", "Rick", "Emma", "Ana", "Harry", "Meredith", "Perry", "Rita",
        "Derek", "Paula", "Arthur", "Peter", "Lina", "Samantha",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            names: default_names(),
            trials: default_trials(),
            policies: SolvingPolicy::all(),
            stats_dir: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or can't be parsed
    pub fn load(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(target: "settings", "Ignoring unreadable {}: {}", path.display(), err);
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("SEED").ok()?;
        match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(target: "settings", "Ignoring malformed SEED={:?}", value);
                None
            }
        }
    }
}
