//! Roster management
//!
//! Loads and saves the list of connected athlete names the matcher
//! resolves against. The surrounding app refreshes this between parses;
//! each parse call gets an immutable snapshot.

use crate::error::{ChaiError, ChaiResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The known athlete display names
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a roster from a JSON array of display names
    pub fn load(path: &Path) -> ChaiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| ChaiError::Roster(format!("{}: {}", path.display(), e)))?;
        info!("📖 Loaded {} athletes from {}", names.len(), path.display());
        Ok(Self { names })
    }

    /// Save the roster back to disk
    pub fn save(&self, path: &Path) -> ChaiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.names)?;
        std::fs::write(path, content)?;
        debug!("💾 Saved roster ({} athletes)", self.names.len());
        Ok(())
    }

    /// Add a name if it is not already present
    pub fn add(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Snapshot of names for a parse call
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Default roster location under the config directory
pub fn roster_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chai")
        .join("roster.json")
}
