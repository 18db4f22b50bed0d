//! Error types for the catalog engine
//!
//! One error enum is shared across the workspace. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations. User-facing banner
//! text is not part of `Display`; the presentation layer owns it.

use crate::axes::AxisName;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog engine
#[derive(Debug, Error)]
pub enum Error {
    /// A code string does not exist on the named axis
    #[error("unknown code {code:?} on axis {axis}")]
    UnknownCode {
        /// Axis the lookup was made against
        axis: AxisName,
        /// The offending code
        code: String,
    },

    /// A configuration was rejected by a validation rule
    #[error("configuration violates rule {rule}")]
    RuleViolation {
        /// Name of the first failing rule
        rule: &'static str,
    },

    /// The cooperative rate limiter refused the action
    #[error("rate limit exceeded")]
    Throttled,

    /// Too few recorded user interactions to accept a submission
    #[error("suspected automated submission")]
    SuspectedAutomation,

    /// Inquiry submission failed (transport error or non-success status)
    #[error("inquiry submission failed{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    SubmissionFailed {
        /// HTTP status, if a response was received at all
        status: Option<u16>,
        /// Transport or server error detail
        message: String,
    },
}
