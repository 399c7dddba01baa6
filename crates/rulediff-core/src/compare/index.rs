//! Per-side rule index keyed by composite identity.

use super::key::RuleKey;
use crate::model::Rule;
use rulediff_core_types::schema::EVENT_DUPLICATE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which rule is kept when one side holds several rules with the same key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The rule appearing last in the collection replaces earlier ones
    #[default]
    LastWins,
    /// The rule appearing first is kept; later ones are ignored
    FirstWins,
}

/// A key that occurred more than once on one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    /// Display key of the later occurrence
    pub key: String,
    /// Collection position of the rule that was kept
    pub kept_index: usize,
    /// Collection position of the rule that was discarded
    pub discarded_index: usize,
}

/// One side's rules keyed by composite identity, in ascending key order
#[derive(Debug, Clone)]
pub struct RuleIndex<'a> {
    entries: BTreeMap<RuleKey, (usize, &'a Rule)>,
    duplicates: Vec<DuplicateKey>,
}

impl<'a> RuleIndex<'a> {
    /// Index a rule collection, resolving duplicate keys with `policy`.
    ///
    /// Every resolved duplicate is recorded and logged at `warn`.
    pub fn build(side: &str, rules: &'a [Rule], policy: DuplicatePolicy) -> Self {
        let mut entries: BTreeMap<RuleKey, (usize, &'a Rule)> = BTreeMap::new();
        let mut duplicates = Vec::new();

        for (index, rule) in rules.iter().enumerate() {
            let key = RuleKey::for_rule(rule);
            let Some(&(existing_index, _)) = entries.get(&key) else {
                entries.insert(key, (index, rule));
                continue;
            };

            let (kept_index, discarded_index) = match policy {
                DuplicatePolicy::LastWins => (index, existing_index),
                DuplicatePolicy::FirstWins => (existing_index, index),
            };

            tracing::warn!(
                component = module_path!(),
                op = "compare_rules",
                event = EVENT_DUPLICATE_KEY,
                side = side,
                rule_key = key.as_str(),
                kept_index = kept_index,
                discarded_index = discarded_index,
                "duplicate rule key"
            );
            duplicates.push(DuplicateKey {
                key: key.as_str().to_string(),
                kept_index,
                discarded_index,
            });

            if policy == DuplicatePolicy::LastWins {
                // Re-insert so the stored key carries the winner's casing.
                entries.remove(&key);
                entries.insert(key, (index, rule));
            }
        }

        Self {
            entries,
            duplicates,
        }
    }

    pub fn get(&self, key: &RuleKey) -> Option<&'a Rule> {
        self.entries.get(key).map(|&(_, rule)| rule)
    }

    /// The stored key equal to `key`, carrying the indexed rule's casing
    pub fn key_of(&self, key: &RuleKey) -> Option<&RuleKey> {
        self.entries.get_key_value(key).map(|(k, _)| k)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RuleKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Duplicates resolved while building, in collection order
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }
}
