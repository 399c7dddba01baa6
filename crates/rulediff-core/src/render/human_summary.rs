//! Human-readable summary renderer for rule diffs.

use crate::compare::DuplicateKey;
use crate::model::RuleDiff;

/// Identity and decode statistics for one input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSide {
    /// Where the document came from (usually a file path)
    pub source: String,
    /// SHA-256 hex digest of the document bytes
    pub digest: String,
    pub rule_count: usize,
    /// Records skipped during decoding
    pub skipped_count: usize,
}

/// Everything the console summary shows for one comparison run
#[derive(Debug, Clone)]
pub struct ComparisonSummary<'a> {
    pub left: DocumentSide,
    pub right: DocumentSide,
    pub diffs: &'a [RuleDiff],
    pub left_duplicates: &'a [DuplicateKey],
    pub right_duplicates: &'a [DuplicateKey],
}

/// Render a human-readable Markdown/text summary of a comparison run.
///
/// The summary is intended for review at the console. It is informational
/// only; the CSV and JSON renderers are the machine-readable outputs.
pub fn render_human_summary(summary: &ComparisonSummary<'_>) -> String {
    let mut out = String::new();

    out.push_str("## Rule Diff\n\n");

    out.push_str("### Documents\n\n");
    out.push_str("| | Source | Digest | Rules | Skipped |\n|---|---|---|---|---|\n");
    for (label, side) in [("Left", &summary.left), ("Right", &summary.right)] {
        out.push_str(&format!(
            "| {} | `{}` | `{}` | {} | {} |\n",
            label,
            side.source,
            short(&side.digest),
            side.rule_count,
            side.skipped_count
        ));
    }
    out.push('\n');

    let duplicates = [
        ("Left", summary.left_duplicates),
        ("Right", summary.right_duplicates),
    ];
    if duplicates.iter().any(|(_, d)| !d.is_empty()) {
        out.push_str("### Duplicate Keys\n\n");
        for (label, dups) in duplicates {
            for dup in dups {
                out.push_str(&format!(
                    "- {}: `{}` kept record {}, ignored record {}\n",
                    label, dup.key, dup.kept_index, dup.discarded_index
                ));
            }
        }
        out.push('\n');
    }

    if summary.diffs.is_empty() {
        out.push_str("_No differences found._\n");
        return out;
    }

    out.push_str(&format!("### Differences ({})\n\n", summary.diffs.len()));
    for diff in summary.diffs {
        out.push_str(&format!(
            "- Rule Key: {} (fieldName='{}', contactType='{}')\n",
            diff.key(),
            diff.field_name().unwrap_or("null"),
            diff.contact_type().unwrap_or("null")
        ));
        for prop in diff.property_differences() {
            out.push_str(&format!(
                "    {}: Left = {}, Right = {}\n",
                prop.property(),
                prop.left_value().unwrap_or("null"),
                prop.right_value().unwrap_or("null")
            ));
        }
    }

    out
}

/// Shorten a hex digest to its first 12 characters for display.
fn short(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
