use std::collections::BTreeSet;

use crate::license::spdx::requires_attribution;
use crate::models::{AttributionRecord, Component, LicenseSource};
use crate::overrides::Overrides;

/// Select the components whose licenses require attribution.
///
/// An override is consulted only when no license was detected on the
/// component; a component with detected but non-qualifying licenses stays
/// excluded. The result is sorted by lowercase name, preserving SBOM order
/// among equal names.
pub fn collect_attributions(
    components: &[Component],
    overrides: &Overrides,
) -> Vec<AttributionRecord> {
    let mut records: Vec<AttributionRecord> = components
        .iter()
        .filter_map(|component| attribution_for(component, overrides))
        .collect();

    records.sort_by_key(|r| r.name.to_lowercase());
    records
}

fn attribution_for(component: &Component, overrides: &Overrides) -> Option<AttributionRecord> {
    let (licenses, source) = if component.licenses.is_empty() {
        let license = overrides.license_for(&component.name, &component.version)?;
        tracing::debug!(
            "Using manual license {} for {}@{}",
            license,
            component.name,
            component.version
        );
        (BTreeSet::from([license.to_string()]), LicenseSource::Manual)
    } else {
        (component.licenses.clone(), LicenseSource::Sbom)
    };

    if !licenses.iter().any(|id| requires_attribution(id)) {
        return None;
    }

    Some(AttributionRecord {
        name: component.name.clone(),
        version: component.version.clone(),
        licenses,
        source,
    })
}
