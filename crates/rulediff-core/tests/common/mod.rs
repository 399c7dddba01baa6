use rulediff_core::decode::{decode_rules, DecodeOptions, DecodedRules};
use serde_json::Value;

/// Serialize a JSON value to bytes (the "document bytes").
#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}

/// Decode a JSON document with default options.
#[allow(dead_code)]
pub fn decode(v: &Value) -> DecodedRules {
    decode_rules(&to_bytes(v), &DecodeOptions::default()).unwrap()
}
