use crate::models::AttributionRecord;

const HEADER: &[&str] = &[
    "videostream-rs - VideoStream Library Rust Bindings",
    "Copyright 2025 Au-Zone Technologies",
    "",
    "This product includes software developed at Au-Zone Technologies",
    "(https://au-zone.com/).",
    "",
    "This software is part of the EdgeFirst Perception Middleware, an open source",
    "initiative for edge AI and computer vision. For more information, visit:",
    "https://edgefirst.ai",
    "",
];

const INTRO: &[&str] = &[
    "",
    "This software contains components from third-party open source projects that",
    "require attribution under their respective licenses (Apache-2.0, BSD, MIT, etc.).",
    "",
];

const TRAILER: &[&str] = &[
    "",
    "For a complete Software Content Register (SBOM) including all dependencies,",
    "licenses, copyrights, and version information, see the sbom.json file included",
    "in the release artifacts or generated via GitHub Actions in this repository.",
    "",
    "The SBOM provides comprehensive information about:",
    "- All direct and transitive dependencies",
    "- License information for each component",
    "- Copyright notices and attributions",
    "- Source code license scanning results",
    "",
    "To generate the SBOM locally, run:",
    "  .github/scripts/generate_sbom.sh",
    "",
    "To view license policy compliance:",
    "  python3 .github/scripts/check_license_policy.py sbom.json",
    "",
];

pub const NO_COMPONENTS_PLACEHOLDER: &str = "  (No third-party components requiring attribution)";

const SEPARATOR_WIDTH: usize = 80;

/// Render the NOTICE document for already sorted attribution records.
///
/// Lines are joined with `\n` and the document ends with the trailer's blank
/// line, without a final newline.
pub fn render(records: &[AttributionRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.extend(HEADER.iter().map(|l| l.to_string()));
    lines.push("=".repeat(SEPARATOR_WIDTH));
    lines.extend(INTRO.iter().map(|l| l.to_string()));

    if records.is_empty() {
        lines.push(NO_COMPONENTS_PLACEHOLDER.to_string());
    } else {
        lines.push("Third-Party Components:".to_string());
        lines.push(String::new());

        let (manual, detected): (Vec<_>, Vec<_>) = records.iter().partition(|r| r.is_manual());

        lines.extend(detected.iter().map(|r| entry_line(r)));

        if !manual.is_empty() {
            lines.push(String::new());
            lines.push("The following components have been manually verified:".to_string());
            lines.push(String::new());
            lines.extend(
                manual
                    .iter()
                    .map(|r| format!("{} [manually verified]", entry_line(r))),
            );
        }
    }

    lines.extend(TRAILER.iter().map(|l| l.to_string()));
    lines.join("\n")
}

fn entry_line(record: &AttributionRecord) -> String {
    format!(
        "  * {} {} ({})",
        record.name,
        record.version,
        record.license_list()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LicenseSource;

    fn record(
        name: &str,
        version: &str,
        licenses: &[&str],
        source: LicenseSource,
    ) -> AttributionRecord {
        AttributionRecord {
            name: name.to_string(),
            version: version.to_string(),
            licenses: licenses.iter().map(|s| s.to_string()).collect(),
            source,
        }
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let notice = render(&[]);
        assert!(notice.contains(NO_COMPONENTS_PLACEHOLDER));
        assert!(!notice.contains("Third-Party Components:"));
        assert!(!notice.contains("  * "));
    }

    #[test]
    fn test_header_and_separator() {
        let notice = render(&[]);
        let lines: Vec<&str> = notice.lines().collect();
        assert_eq!(lines[0], "videostream-rs - VideoStream Library Rust Bindings");
        assert_eq!(lines[10], "=".repeat(80));
        assert!(notice.ends_with("check_license_policy.py sbom.json\n"));
    }

    #[test]
    fn test_detected_entries() {
        let notice = render(&[
            record("serde", "1.0.150", &["MIT", "Apache-2.0"], LicenseSource::Sbom),
            record("zlib", "1.3", &["Zlib", "MIT"], LicenseSource::Sbom),
        ]);
        assert!(notice.contains(
            "Third-Party Components:\n\n  * serde 1.0.150 (Apache-2.0, MIT)\n  * zlib 1.3 (MIT, Zlib)\n"
        ));
        assert!(!notice.contains("manually verified"));
        assert!(!notice.contains(NO_COMPONENTS_PLACEHOLDER));
    }

    #[test]
    fn test_manual_subsection_follows_detected() {
        let notice = render(&[
            record("aaa", "0.1", &["BSD-2-Clause"], LicenseSource::Manual),
            record("bbb", "0.2", &["MIT"], LicenseSource::Sbom),
        ]);
        let detected = notice.find("  * bbb 0.2 (MIT)\n").unwrap();
        let heading = notice
            .find("\nThe following components have been manually verified:\n\n")
            .unwrap();
        let manual = notice
            .find("  * aaa 0.1 (BSD-2-Clause) [manually verified]\n")
            .unwrap();
        assert!(detected < heading && heading < manual);
    }
}
