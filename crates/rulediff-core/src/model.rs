pub mod diff;
pub mod rule;

pub use diff::{PropertyDiff, RuleDiff};
pub use rule::Rule;
