//! Case-insensitive attribute matching for rule records.
//!
//! Rule documents are produced by several tools that disagree on attribute
//! casing (`fieldName`, `FieldName`, `FIELDNAME`). Before typed decoding, each
//! attribute name is mapped onto its canonical camel-case name; attributes
//! that match no known name are dropped.

use serde_json::{Map, Value};

/// Canonical attribute names of a rule record
pub const RULE_FIELDS: &[&str] = &[
    "fieldName",
    "contactType",
    "maxLength",
    "minLength",
    "regEx",
    "validationType",
    "required",
    "requiredErrorMessage",
    "errorMessage",
    "alwaysCheck",
];

/// Resolve an attribute name to its canonical form, if it is a known attribute
pub fn canonical_field(name: &str) -> Option<&'static str> {
    RULE_FIELDS
        .iter()
        .copied()
        .find(|canonical| canonical.eq_ignore_ascii_case(name))
}

/// Rewrite a raw record's attribute names to canonical form.
///
/// When two attributes resolve to the same canonical name the later one in
/// document order wins.
pub fn canonicalize_record(record: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (name, value) in record {
        if let Some(canonical) = canonical_field(name) {
            out.insert(canonical.to_string(), value.clone());
        }
    }
    out
}
