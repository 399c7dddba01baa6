//! Rule set comparison engine.
//!
//! Pairs rules across two collections by composite key and reports, per key,
//! either a one-sided presence difference or the property differences of the
//! matched pair.
//!
//! ## Entry point
//!
//! ```
//! use rulediff_core::compare::compare;
//! use rulediff_core::model::Rule;
//!
//! let left = vec![Rule::new("Email", "Primary").with_max_length(50)];
//! let right = vec![Rule::new("Email", "Primary").with_max_length(100)];
//!
//! let diffs = compare(&left, &right);
//! assert_eq!(diffs[0].key(), "Email||Primary");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: keys are visited in ascending case-folded order, so the
//!   same inputs always produce the same diff sequence.
//! - **No empty records**: a key whose rules agree produces nothing.
//! - **Explicit duplicates**: duplicate keys within one side are resolved by
//!   [`DuplicatePolicy`] and reported on [`Comparison`].
//! - **Purity**: inputs are borrowed and never modified; no I/O.

pub mod index;
pub mod key;
pub mod policy;

pub use index::{DuplicateKey, DuplicatePolicy, RuleIndex};
pub use key::RuleKey;

use crate::model::{PropertyDiff, Rule, RuleDiff};
use crate::{log_op_end, log_op_start};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Options controlling rule matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// How duplicate keys within one collection are resolved
    pub duplicates: DuplicatePolicy,
}

/// Full comparison result, including the duplicates each side resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub diffs: Vec<RuleDiff>,
    pub left_duplicates: Vec<DuplicateKey>,
    pub right_duplicates: Vec<DuplicateKey>,
}

/// Compare two rule collections with default options (last duplicate wins).
pub fn compare(left: &[Rule], right: &[Rule]) -> Vec<RuleDiff> {
    compare_with(left, right, &CompareOptions::default())
}

/// Compare two rule collections.
pub fn compare_with(left: &[Rule], right: &[Rule], options: &CompareOptions) -> Vec<RuleDiff> {
    compare_detailed(left, right, options).diffs
}

/// Compare two rule collections, also returning the resolved duplicates.
pub fn compare_detailed(left: &[Rule], right: &[Rule], options: &CompareOptions) -> Comparison {
    log_op_start!(
        "compare_rules",
        left_len = left.len(),
        right_len = right.len()
    );
    let start = std::time::Instant::now();

    let left_index = RuleIndex::build("left", left, options.duplicates);
    let right_index = RuleIndex::build("right", right, options.duplicates);

    // `insert` never replaces an equal element, so a key present on both sides
    // keeps the left casing.
    let mut keys: BTreeSet<&RuleKey> = left_index.keys().collect();
    for key in right_index.keys() {
        keys.insert(key);
    }

    let diffs: Vec<RuleDiff> = keys
        .into_iter()
        .filter_map(|key| diff_key(key, left_index.get(key), right_index.get(key)))
        .collect();

    log_op_end!(
        "compare_rules",
        duration_ms = start.elapsed().as_millis() as u64,
        diff_len = diffs.len(),
        left_duplicate_len = left_index.duplicates().len(),
        right_duplicate_len = right_index.duplicates().len()
    );

    Comparison {
        diffs,
        left_duplicates: left_index.duplicates().to_vec(),
        right_duplicates: right_index.duplicates().to_vec(),
    }
}

fn diff_key(key: &RuleKey, left: Option<&Rule>, right: Option<&Rule>) -> Option<RuleDiff> {
    match (left, right) {
        (None, Some(r)) => RuleDiff::new(
            key.as_str(),
            r.field_name.clone(),
            r.contact_type.clone(),
            vec![PropertyDiff::only_right()],
        ),
        (Some(l), None) => RuleDiff::new(
            key.as_str(),
            l.field_name.clone(),
            l.contact_type.clone(),
            vec![PropertyDiff::only_left()],
        ),
        (Some(l), Some(r)) => RuleDiff::new(
            key.as_str(),
            l.field_name.clone(),
            l.contact_type.clone(),
            policy::compare_rules(l, r),
        ),
        (None, None) => None,
    }
}
