//! Per-field comparison policies.
//!
//! Each policy decides equality on a normalized form but reports the
//! original values, so a difference shows exactly what each document holds.

use crate::model::{PropertyDiff, Rule};

pub const MAX_LENGTH: &str = "maxLength";
pub const MIN_LENGTH: &str = "minLength";
pub const REG_EX: &str = "regEx";
pub const VALIDATION_TYPE: &str = "validationType";

/// Compared properties, in reporting order
pub const COMPARED_PROPERTIES: &[&str] = &[MAX_LENGTH, MIN_LENGTH, REG_EX, VALIDATION_TYPE];

/// Null-aware integer comparison; values are rendered in decimal
pub fn compare_length(
    property: &str,
    left: Option<i32>,
    right: Option<i32>,
) -> Option<PropertyDiff> {
    if left == right {
        return None;
    }
    Some(PropertyDiff::new(
        property,
        left.map(|v| v.to_string()),
        right.map(|v| v.to_string()),
    ))
}

/// Trimmed, case-sensitive comparison
pub fn compare_pattern(left: Option<&str>, right: Option<&str>) -> Option<PropertyDiff> {
    if left.map(str::trim) == right.map(str::trim) {
        return None;
    }
    Some(PropertyDiff::new(
        REG_EX,
        left.map(str::to_string),
        right.map(str::to_string),
    ))
}

/// Trimmed, case-insensitive comparison
pub fn compare_validation_type(left: Option<&str>, right: Option<&str>) -> Option<PropertyDiff> {
    let fold = |s: &str| s.trim().to_lowercase();
    if left.map(fold) == right.map(fold) {
        return None;
    }
    Some(PropertyDiff::new(
        VALIDATION_TYPE,
        left.map(str::to_string),
        right.map(str::to_string),
    ))
}

/// Compare two rules matched on the same key, in [`COMPARED_PROPERTIES`] order
pub fn compare_rules(left: &Rule, right: &Rule) -> Vec<PropertyDiff> {
    [
        compare_length(MAX_LENGTH, left.max_length, right.max_length),
        compare_length(MIN_LENGTH, left.min_length, right.min_length),
        compare_pattern(left.reg_ex.as_deref(), right.reg_ex.as_deref()),
        compare_validation_type(
            left.validation_type.as_deref(),
            right.validation_type.as_deref(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
