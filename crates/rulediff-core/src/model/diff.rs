//! Rule diff output types.
//!
//! Both types are immutable once built. A [`RuleDiff`] can only be obtained
//! with at least one [`PropertyDiff`], so an empty diff record is never
//! emitted.

use serde::Serialize;

/// Property name used for one-sided presence differences
pub const RULE_PRESENCE: &str = "RulePresence";

/// Value recorded on the side where a rule exists
pub const PRESENT: &str = "present";

/// One property's before/after value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDiff {
    property: String,
    left_value: Option<String>,
    right_value: Option<String>,
}

impl PropertyDiff {
    pub fn new(
        property: impl Into<String>,
        left_value: Option<String>,
        right_value: Option<String>,
    ) -> Self {
        Self {
            property: property.into(),
            left_value,
            right_value,
        }
    }

    /// Presence difference for a rule that exists only on the right side
    pub fn only_right() -> Self {
        Self::new(RULE_PRESENCE, None, Some(PRESENT.to_string()))
    }

    /// Presence difference for a rule that exists only on the left side
    pub fn only_left() -> Self {
        Self::new(RULE_PRESENCE, Some(PRESENT.to_string()), None)
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn left_value(&self) -> Option<&str> {
        self.left_value.as_deref()
    }

    pub fn right_value(&self) -> Option<&str> {
        self.right_value.as_deref()
    }
}

/// All property-level differences found for one composite key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDiff {
    key: String,
    field_name: Option<String>,
    contact_type: Option<String>,
    property_differences: Vec<PropertyDiff>,
}

impl RuleDiff {
    /// Build a diff record, or `None` when there are no property differences
    pub fn new(
        key: impl Into<String>,
        field_name: Option<String>,
        contact_type: Option<String>,
        property_differences: Vec<PropertyDiff>,
    ) -> Option<Self> {
        if property_differences.is_empty() {
            return None;
        }
        Some(Self {
            key: key.into(),
            field_name,
            contact_type,
            property_differences,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    pub fn contact_type(&self) -> Option<&str> {
        self.contact_type.as_deref()
    }

    /// Never empty
    pub fn property_differences(&self) -> &[PropertyDiff] {
        &self.property_differences
    }

    /// True when this record reports a rule present on only one side
    pub fn is_presence_only(&self) -> bool {
        self.property_differences
            .iter()
            .all(|p| p.property == RULE_PRESENCE)
    }
}
