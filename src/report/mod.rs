//! Renderers for the attribution records.
//!
//! - [`notice`] — the NOTICE document: fixed header, third-party component list
//!   (auto-detected, then manually verified), fixed trailer.
//! - [`terminal`] — a table view of the same records for reviewing overrides.

pub mod notice;
pub mod terminal;
