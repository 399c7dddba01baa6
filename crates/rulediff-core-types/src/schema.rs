//! Canonical schema constants for structured logging and events
//!
//! `tracing` takes field names as identifiers, so emitting code spells them
//! out; these constants are the names log consumers and tests read back.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Rule identity
pub const FIELD_RULE_KEY: &str = "rule_key";
pub const FIELD_RECORD_INDEX: &str = "index";

// Collection sizes
pub const FIELD_LEFT_LEN: &str = "left_len";
pub const FIELD_RIGHT_LEN: &str = "right_len";
pub const FIELD_DIFF_LEN: &str = "diff_len";
pub const FIELD_WARNING_LEN: &str = "warning_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_RECORD_SKIPPED: &str = "record_skipped";
pub const EVENT_DUPLICATE_KEY: &str = "duplicate_key";
