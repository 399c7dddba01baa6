//! Validation rule domain model
//!
//! A rule describes the constraints applied to one field in one contact-type
//! context. Every attribute is optional: a missing attribute is a legitimate
//! value, not a decoding fault.

use serde::{Deserialize, Serialize};

/// One validation rule for a field/contact-type combination
///
/// Only `max_length`, `min_length`, `reg_ex` and `validation_type` take part
/// in comparison. The remaining attributes are carried so that decoded rule
/// sets round-trip without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    /// Logical field the rule applies to
    pub field_name: Option<String>,

    /// Context/category the rule applies to
    pub contact_type: Option<String>,

    pub max_length: Option<i32>,

    pub min_length: Option<i32>,

    /// Pattern text, compared literally after trimming
    pub reg_ex: Option<String>,

    /// Compared case-insensitively after trimming
    pub validation_type: Option<String>,

    pub required: Option<bool>,

    pub required_error_message: Option<String>,

    pub error_message: Option<String>,

    pub always_check: Option<bool>,
}

impl Rule {
    /// Create a rule identified by field name and contact type, with every
    /// other attribute unset
    pub fn new(field_name: impl Into<String>, contact_type: impl Into<String>) -> Self {
        Self {
            field_name: Some(field_name.into()),
            contact_type: Some(contact_type.into()),
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: i32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min_length(mut self, min_length: i32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_reg_ex(mut self, reg_ex: impl Into<String>) -> Self {
        self.reg_ex = Some(reg_ex.into());
        self
    }

    pub fn with_validation_type(mut self, validation_type: impl Into<String>) -> Self {
        self.validation_type = Some(validation_type.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}
