//! User-facing banner text
//!
//! The port shows these verbatim; keeping them in one place keeps the
//! controller and the inquiry flow consistent with the site copy.

/// Shown when the cooperative rate limiter refuses an action
pub const THROTTLED: &str = "Too many requests. Please wait a moment.";

/// Shown when a submission is refused for too few recorded interactions
pub const INTERACT_FIRST: &str = "Please interact with the page normally.";

/// Shown on any inquiry submission failure (retryable by resubmitting)
pub const SUBMISSION_FAILED: &str =
    "There was an error submitting your inquiry. Please try again or email us directly.";

/// Shown after a successful inquiry submission
pub const SUBMISSION_CONFIRMED: &str =
    "Thank you! Your inquiry has been submitted. We will contact you soon.";
