//! Composite rule identity.

use crate::model::Rule;
use std::cmp::Ordering;

/// Stand-in for a missing field name or contact type
pub const NULL_MARKER: &str = "<null>";

/// Separator between field name and contact type
pub const KEY_DELIMITER: &str = "||";

/// Case-insensitive composite key of a rule: `fieldName||contactType`
///
/// Equality and ordering use the case-folded form; the display form keeps
/// the casing found in the document.
#[derive(Debug, Clone)]
pub struct RuleKey {
    display: String,
    folded: String,
}

impl RuleKey {
    pub fn new(field_name: Option<&str>, contact_type: Option<&str>) -> Self {
        let display = format!(
            "{}{}{}",
            field_name.unwrap_or(NULL_MARKER),
            KEY_DELIMITER,
            contact_type.unwrap_or(NULL_MARKER)
        );
        let folded = display.to_lowercase();
        Self { display, folded }
    }

    pub fn for_rule(rule: &Rule) -> Self {
        Self::new(rule.field_name.as_deref(), rule.contact_type.as_deref())
    }

    /// Key as written in the source document
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Case-folded form used for matching
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialEq for RuleKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for RuleKey {}

impl PartialOrd for RuleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}
