// ============================================================
// Layer 6 — Settings Store
// ============================================================
// Persists the user's training parameters as pretty-printed
// JSON so the next session starts where the last one left off.
//
// File layout:
//   <settings_dir>/trainer_params.json
//
// A missing or unreadable file falls back to the defaults with
// a warning — stale settings must never block a session.
// Training HISTORY is deliberately not persisted, only the
// parameter values.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::domain::params::TrainingParameters;

const SETTINGS_FILE: &str = "trainer_params.json";

/// Saves and restores TrainingParameters under one directory.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store rooted at `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(SETTINGS_FILE),
        })
    }

    /// Load the saved parameters, or the defaults when nothing
    /// (valid) was saved yet.
    pub fn load_or_default(&self) -> TrainingParameters {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(params) => {
                    tracing::debug!("loaded settings from '{}'", self.path.display());
                    params
                }
                Err(err) => {
                    tracing::warn!(
                        "ignoring corrupt settings file '{}': {}",
                        self.path.display(),
                        err,
                    );
                    TrainingParameters::default()
                }
            },
            Err(_) => TrainingParameters::default(),
        }
    }

    /// Write the parameters back to disk.
    pub fn save(&self, params: &TrainingParameters) -> Result<()> {
        let json = serde_json::to_string_pretty(params)?;
        fs::write(&self.path, json)?;
        tracing::debug!("saved settings to '{}'", self.path.display());
        Ok(())
    }
}
