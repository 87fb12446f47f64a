//! Error types for Impromptu
//!
//! Every fallible operation in the crate returns [`ImpromptuResult`]. Variants carry a
//! human-readable `message` plus an optional `context` describing where the failure
//! happened, and [`ImpromptuError::error_code`] gives a stable code for programmatic use.

mod constructors;
mod conversions;
mod types;

pub use types::{ImpromptuError, ImpromptuResult};
