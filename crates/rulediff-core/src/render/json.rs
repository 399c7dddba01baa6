//! JSON renderer for rule diffs.

use crate::errors::{Result, RuleDiffError};
use crate::model::RuleDiff;

/// Render diffs as a pretty-printed JSON array with camel-case field names.
///
/// # Errors
///
/// - `Serialization` — the diff could not be encoded
pub fn render_json(diffs: &[RuleDiff]) -> Result<String> {
    serde_json::to_string_pretty(diffs).map_err(|e| {
        RuleDiffError::Serialization {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyDiff;
    use serde_json::{json, Value};

    #[test]
    fn test_render_json_shape() {
        let diff = RuleDiff::new(
            "Phone||Mobile",
            Some("Phone".to_string()),
            Some("Mobile".to_string()),
            vec![PropertyDiff::only_right()],
        )
        .unwrap();

        let text = render_json(&[diff]).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!([{
                "key": "Phone||Mobile",
                "fieldName": "Phone",
                "contactType": "Mobile",
                "propertyDifferences": [
                    {"property": "RulePresence", "leftValue": null, "rightValue": "present"}
                ]
            }])
        );
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
