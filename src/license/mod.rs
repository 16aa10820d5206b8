//! License identifier extraction and the attribution allow-list.
//!
//! - [`spdx`] — the allow-list of attribution-requiring identifiers and the
//!   simplified SPDX expression flattening.
//! - [`extractor`] — pulls identifiers out of a CycloneDX component's
//!   `licenses` entries.

pub mod extractor;
pub mod spdx;
