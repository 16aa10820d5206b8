use std::collections::BTreeSet;

use serde_json::Value;

use crate::license::spdx::flatten_expression;

/// Collect every license identifier declared on a CycloneDX component.
///
/// Each `licenses` entry may carry `{"license": {"id": ..}}`, an
/// `{"expression": ..}`, or both; all are merged into one set. Entries that
/// only name a license (`license.name`) are not identifiers and are ignored.
pub fn extract_licenses(component: &Value) -> BTreeSet<String> {
    let mut licenses = BTreeSet::new();

    let Some(entries) = component.get("licenses").and_then(|v| v.as_array()) else {
        return licenses;
    };

    for entry in entries {
        if let Some(id) = entry
            .get("license")
            .and_then(|l| l.get("id"))
            .and_then(|v| v.as_str())
        {
            licenses.insert(id.to_string());
        }

        if let Some(expr) = entry.get("expression").and_then(|v| v.as_str()) {
            licenses.extend(flatten_expression(expr));
        }
    }

    licenses
}
