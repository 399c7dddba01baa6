//! Configuration for a comparison run.
//!
//! Every section and key is optional; omitted values take their defaults.
//!
//! ```toml
//! [decode]
//! collection_key = "rules"
//! normalize_enum_values = false
//!
//! [compare]
//! duplicates = "last-wins"   # or "first-wins"
//!
//! [report]
//! include_header = true
//! line_ending = "platform"   # or "lf", "crlf"
//! ```

use crate::compare::CompareOptions;
use crate::decode::DecodeOptions;
use crate::errors::{Result, RuleDiffError};
use crate::render::ReportOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleDiffConfig {
    pub decode: DecodeOptions,
    pub compare: CompareOptions,
    pub report: ReportOptions,
}

impl RuleDiffConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the text is not TOML or does not match the schema
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            RuleDiffError::ConfigParse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RuleDiffError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|e| e.with_path(path.display().to_string()))
    }
}
