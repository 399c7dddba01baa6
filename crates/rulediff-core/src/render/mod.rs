//! Report renderers for rule diffs.
//!
//! - [`csv`]: the flat, escaped tabular report
//! - [`json`]: the structured diff as pretty JSON
//! - [`human_summary`]: a console view for review

pub mod csv;
pub mod human_summary;
pub mod json;

pub use self::csv::{csv_escape, render_csv, write_csv, write_csv_file, CSV_HEADER};
pub use self::human_summary::{render_human_summary, ComparisonSummary, DocumentSide};
pub use self::json::render_json;

use crate::errors::{Result, RuleDiffError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Line terminator used by text reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Platform,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Options controlling text report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// Emit the `FieldName,ContactType,...` header line
    pub include_header: bool,
    pub line_ending: LineEnding,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            line_ending: LineEnding::Platform,
        }
    }
}

/// Write a rendered report to a file, replacing any existing content.
///
/// # Errors
///
/// - `Io` — the file cannot be created or written
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| {
        RuleDiffError::ReportWrite {
            path: Some(path.display().to_string()),
            reason: e.to_string(),
        }
        .into()
    })
}
