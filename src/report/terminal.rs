use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AttributionRecord, LicenseSource};

/// Render the attribution records as a table, one row per component.
pub fn render(records: &[AttributionRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        let source_color = match record.source {
            LicenseSource::Sbom => Color::Green,
            LicenseSource::Manual => Color::Yellow,
        };

        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.version),
            Cell::new(record.license_list()),
            Cell::new(record.source.to_string())
                .fg(source_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    format!(
        "{}\n{} components require attribution ({} manually verified)",
        table,
        records.len(),
        records.iter().filter(|r| r.is_manual()).count()
    )
}
