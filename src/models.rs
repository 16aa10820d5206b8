use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A component read from the SBOM, with its detected license identifiers.
#[derive(Debug)]
pub struct Component {
    pub name: String,
    pub version: String,
    pub licenses: BTreeSet<String>,
}

/// A third-party component that must be listed in the NOTICE file.
#[derive(Debug, Serialize)]
pub struct AttributionRecord {
    pub name: String,
    pub version: String,
    /// Kept ordered so the rendered license list is already sorted.
    pub licenses: BTreeSet<String>,
    pub source: LicenseSource,
}

impl AttributionRecord {
    pub fn is_manual(&self) -> bool {
        self.source == LicenseSource::Manual
    }

    /// Licenses joined as they appear in the NOTICE, e.g. `Apache-2.0, MIT`.
    pub fn license_list(&self) -> String {
        self.licenses
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Where a record's license set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseSource {
    /// Detected from the SBOM's `licenses` entries.
    Sbom,
    /// Taken from a manually verified override.
    Manual,
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Sbom => write!(f, "sbom"),
            LicenseSource::Manual => write!(f, "manual"),
        }
    }
}

/// One manually verified license, as stored in `license-overrides.json`.
#[derive(Debug, Deserialize)]
pub struct OverrideEntry {
    pub name: String,
    pub version: String,
    pub license: String,
}

impl OverrideEntry {
    pub fn key(&self) -> String {
        component_key(&self.name, &self.version)
    }
}

/// Lookup key shared by components and overrides.
pub fn component_key(name: &str, version: &str) -> String {
    format!("{}@{}", name, version)
}
