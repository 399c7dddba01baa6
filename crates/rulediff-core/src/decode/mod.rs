//! Rule document decoder.
//!
//! Turns a raw JSON document into an ordered sequence of [`Rule`]s. Decoding
//! is tolerant per record: a malformed record is skipped and reported as a
//! [`DecodeWarning`], and the rest of the batch is still decoded.
//!
//! Only document-level problems are errors: bytes that are not UTF-8 JSON, a
//! root that is not an object, or a rule collection that is not an array. A
//! document without the rule collection decodes to an empty rule set.

pub mod enum_case;
pub mod fields;

use crate::errors::{ExError, ExErrorKind, Result, RuleDiffError};
use crate::model::Rule;
use crate::{log_op_end, log_op_error, log_op_start};
use rulediff_core_types::schema::EVENT_RECORD_SKIPPED;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest as _, Sha256};
use std::path::Path;

/// Options controlling how rule documents are decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Top-level key holding the rule collection (exact match)
    pub collection_key: String,

    /// Rewrite `validationType` values to camel-case word form
    pub normalize_enum_values: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            collection_key: "rules".to_string(),
            normalize_enum_values: false,
        }
    }
}

/// A record that was skipped during decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeWarning {
    /// Position of the record within the rule collection
    pub index: usize,
    /// Why the record could not be decoded
    pub message: String,
}

impl From<&DecodeWarning> for ExError {
    fn from(warning: &DecodeWarning) -> Self {
        RuleDiffError::RecordDecode {
            index: warning.index,
            reason: warning.message.clone(),
        }
        .into()
    }
}

/// Result of decoding one rule document
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRules {
    /// Successfully decoded rules, in document order
    pub rules: Vec<Rule>,
    /// Records that were skipped, in document order
    pub warnings: Vec<DecodeWarning>,
    /// SHA-256 hex digest of the raw document bytes
    pub digest: String,
}

/// Decode a rule document from raw bytes.
///
/// # Errors
///
/// - `InvalidDocument` — bytes are not UTF-8, not JSON, the root is not an
///   object, or the rule collection is present but not an array
pub fn decode_rules(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedRules> {
    log_op_start!("decode_rules", byte_len = bytes.len());
    let start = std::time::Instant::now();

    let result = decode_rules_impl(bytes, options).map_err(|e| {
        log_op_error!(
            "decode_rules",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        ExError::from(e)
    })?;

    log_op_end!(
        "decode_rules",
        duration_ms = start.elapsed().as_millis() as u64,
        rule_len = result.rules.len(),
        warning_len = result.warnings.len()
    );

    Ok(result)
}

/// Read and decode a rule document from a file.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - any error of [`decode_rules`], annotated with the file path
pub fn decode_rule_file(path: &Path, options: &DecodeOptions) -> Result<DecodedRules> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_rule_file")
            .with_path(display.clone())
            .with_message(e.to_string())
    })?;
    decode_rules(&bytes, options).map_err(|e| e.with_path(display))
}

fn decode_rules_impl(
    bytes: &[u8],
    options: &DecodeOptions,
) -> std::result::Result<DecodedRules, RuleDiffError> {
    let digest = hex::encode(Sha256::digest(bytes));

    let text = std::str::from_utf8(bytes).map_err(|e| RuleDiffError::DocumentNotUtf8 {
        reason: e.to_string(),
    })?;

    let root: Value = serde_json::from_str(text).map_err(|e| RuleDiffError::DocumentNotJson {
        reason: e.to_string(),
    })?;

    let obj = root
        .as_object()
        .ok_or(RuleDiffError::DocumentRootNotObject)?;

    let Some(collection) = obj.get(&options.collection_key) else {
        tracing::debug!(
            op = "decode_rules",
            collection_key = %options.collection_key,
            "rule collection absent, treating as empty"
        );
        return Ok(DecodedRules {
            rules: Vec::new(),
            warnings: Vec::new(),
            digest,
        });
    };

    let records = collection
        .as_array()
        .ok_or_else(|| RuleDiffError::CollectionNotArray {
            key: options.collection_key.clone(),
        })?;

    let mut rules = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match decode_record(record, options) {
            Ok(Some(rule)) => rules.push(rule),
            // A null entry carries no rule and is not a fault.
            Ok(None) => {}
            Err(message) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "decode_rules",
                    event = EVENT_RECORD_SKIPPED,
                    index = index,
                    reason = %message,
                    "failed to deserialize a rule, skipping"
                );
                warnings.push(DecodeWarning { index, message });
            }
        }
    }

    Ok(DecodedRules {
        rules,
        warnings,
        digest,
    })
}

fn decode_record(
    record: &Value,
    options: &DecodeOptions,
) -> std::result::Result<Option<Rule>, String> {
    let fields = match record {
        Value::Null => return Ok(None),
        Value::Object(fields) => fields,
        other => {
            return Err(format!(
                "expected a rule object, found {}",
                json_type_name(other)
            ))
        }
    };

    let canonical = fields::canonicalize_record(fields);
    let mut rule: Rule =
        serde_json::from_value(Value::Object(canonical)).map_err(|e| e.to_string())?;

    if options.normalize_enum_values {
        rule.validation_type = rule
            .validation_type
            .as_deref()
            .map(enum_case::to_camel_case);
    }

    Ok(Some(rule))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(doc: Value) -> DecodedRules {
        decode_rules(&serde_json::to_vec(&doc).unwrap(), &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let decoded = decode(json!({"other": []}));
        assert!(decoded.rules.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_collection_key_is_case_sensitive() {
        let decoded = decode(json!({"Rules": [{"fieldName": "Email"}]}));
        assert!(decoded.rules.is_empty());
    }

    #[test]
    fn test_null_record_skipped_without_warning() {
        let decoded = decode(json!({"rules": [null, {"fieldName": "Email"}]}));
        assert_eq!(decoded.rules.len(), 1);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_non_object_record_is_warning() {
        let decoded = decode(json!({"rules": [42, {"fieldName": "Email"}]}));
        assert_eq!(decoded.rules.len(), 1);
        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].index, 0);
        assert!(decoded.warnings[0].message.contains("a number"));
    }

    #[test]
    fn test_string_length_is_record_failure() {
        let decoded = decode(json!({"rules": [{"fieldName": "Email", "maxLength": "50"}]}));
        assert!(decoded.rules.is_empty());
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn test_out_of_range_length_is_record_failure() {
        let decoded = decode(json!({"rules": [{"maxLength": 3_000_000_000u64}]}));
        assert!(decoded.rules.is_empty());
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn test_folded_attribute_collision_uses_later_value() {
        let bytes = br#"{"rules": [{"fieldName": "Email", "MaxLength": 9, "maxlength": 5}]}"#;
        let decoded = decode_rules(bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.rules[0].max_length, Some(5));

        let bytes = br#"{"rules": [{"maxlength": 5, "fieldName": "Email", "MaxLength": 9}]}"#;
        let decoded = decode_rules(bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.rules[0].max_length, Some(9));
    }

    #[test]
    fn test_enum_normalization_is_opt_in() {
        let doc = json!({"rules": [{"fieldName": "Email", "validationType": "EMAIL_ADDRESS"}]});
        let bytes = serde_json::to_vec(&doc).unwrap();

        let plain = decode_rules(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(
            plain.rules[0].validation_type.as_deref(),
            Some("EMAIL_ADDRESS")
        );

        let options = DecodeOptions {
            normalize_enum_values: true,
            ..DecodeOptions::default()
        };
        let normalized = decode_rules(&bytes, &options).unwrap();
        assert_eq!(
            normalized.rules[0].validation_type.as_deref(),
            Some("emailAddress")
        );
    }

    #[test]
    fn test_digest_is_stable_per_document() {
        let a = decode(json!({"rules": []}));
        let b = decode(json!({"rules": []}));
        let c = decode(json!({"rules": [null]}));
        assert_eq!(a.digest, b.digest);
        assert_ne!(a.digest, c.digest);
        assert_eq!(a.digest.len(), 64);
    }

    #[test]
    fn test_warning_converts_to_record_error() {
        let warning = DecodeWarning {
            index: 2,
            message: "bad".to_string(),
        };
        let err = ExError::from(&warning);
        assert_eq!(err.kind(), ExErrorKind::InvalidRecord);
        assert_eq!(err.index(), Some(2));
    }
}
