//! rulediff Core - validation rule set comparison kernel
//!
//! This crate provides the data structures and operations for auditing drift
//! between two snapshots of a field-validation rule set:
//! - Rule, RuleDiff and PropertyDiff models
//! - A tolerant JSON rule decoder (per-record failures are skipped, not fatal)
//! - The comparator: composite-key identity resolution and per-field policy
//! - CSV, JSON and human-readable report renderers
//! - Error and logging facilities, and TOML configuration

pub mod compare;
pub mod config;
pub mod decode;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-exported so the exported logging macros resolve schema constants
// through `$crate` without callers depending on the types crate directly.
pub use rulediff_core_types;

// Re-export commonly used types
pub use compare::{compare, compare_with, CompareOptions, DuplicatePolicy};
pub use config::RuleDiffConfig;
pub use decode::{decode_rules, DecodeOptions, DecodeWarning, DecodedRules};
pub use errors::{ExError, ExErrorKind, Result, RuleDiffError};
pub use model::{PropertyDiff, Rule, RuleDiff};
pub use render::{render_csv, write_csv, LineEnding, ReportOptions};
