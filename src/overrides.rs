use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{component_key, OverrideEntry};

/// Default override file, relative to the repository root.
pub const DEFAULT_OVERRIDES_PATH: &str = ".github/license-overrides.json";

/// Root structure of `license-overrides.json`.
#[derive(Debug, Deserialize)]
struct OverridesFile {
    #[serde(default)]
    overrides: Vec<OverrideEntry>,
}

/// Manually verified licenses keyed by `name@version`.
#[derive(Debug, Default)]
pub struct Overrides {
    entries: HashMap<String, OverrideEntry>,
}

impl Overrides {
    /// Build the lookup table; a later entry replaces an earlier one with the same key.
    pub fn from_entries(entries: impl IntoIterator<Item = OverrideEntry>) -> Self {
        let entries = entries.into_iter().map(|e| (e.key(), e)).collect();
        Self { entries }
    }

    /// The manually verified license for a component, if any.
    pub fn license_for(&self, name: &str, version: &str) -> Option<&str> {
        self.entries
            .get(&component_key(name, version))
            .map(|e| e.license.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the override file at `path`.
///
/// Never fails: a missing file yields an empty table silently, and an
/// unreadable or malformed one yields an empty table with a warning.
pub fn load_overrides(path: &Path) -> Overrides {
    if !path.exists() {
        tracing::debug!("No license overrides at {}", path.display());
        return Overrides::default();
    }

    match read_overrides(path) {
        Ok(overrides) => {
            tracing::debug!(
                "Loaded {} license overrides from {}",
                overrides.len(),
                path.display()
            );
            overrides
        }
        Err(e) => {
            tracing::warn!("Could not load license overrides: {e:#}");
            Overrides::default()
        }
    }
}

fn read_overrides(path: &Path) -> Result<Overrides> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: OverridesFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Overrides::from_entries(file.overrides))
}
