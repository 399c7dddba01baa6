//! Logging for decode, compare and report runs.
//!
//! Binaries call [`init`] once with a [`Profile`]; library code only emits
//! events through `tracing` and the `log_op_*` macros, whose field names come
//! from `rulediff_core_types::schema`. Tests install
//! [`test_capture::init_test_capture`] instead of a real subscriber.
//!
//! ```rust
//! use rulediff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
