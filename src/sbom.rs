use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::license::extractor::extract_licenses;
use crate::models::Component;

/// Read a CycloneDX JSON SBOM and return its components in document order.
pub fn load_components(path: &Path) -> Result<Vec<Component>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read SBOM {}", path.display()))?;
    parse_components(&content).with_context(|| format!("invalid SBOM {}", path.display()))
}

/// Parse the `components` array of a CycloneDX JSON document.
///
/// A missing `components` field is an empty SBOM. Components without a
/// `name` or `version` are reported as `unknown`.
pub fn parse_components(content: &str) -> Result<Vec<Component>> {
    let json: Value = serde_json::from_str(content)?;

    let Some(root) = json.as_object() else {
        bail!("expected a JSON object at the document root");
    };

    let entries = match root.get("components") {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => bail!("`components` must be an array"),
    };

    let mut components = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!("Skipping component #{index}: not a JSON object");
            continue;
        }

        components.push(Component {
            name: string_field(entry, "name"),
            version: string_field(entry, "version"),
            licenses: extract_licenses(entry),
        });
    }

    tracing::debug!("Read {} components from SBOM", components.len());
    Ok(components)
}

fn string_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string()
}
