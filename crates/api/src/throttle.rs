//! Cooperative throttling heuristics
//!
//! A page-lifetime rate limiter and a pointer-interaction counter. Both are
//! cooperative UX niceties, not security controls: everything runs
//! client-side and is trivially bypassable.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// Attempts allowed per window
pub const MAX_ATTEMPTS: u32 = 100;

/// Length of the rate-limit window
pub const WINDOW: Duration = Duration::from_secs(60);

/// Interactions below which a display call is logged as suspicious
pub const MIN_INTERACTIONS_DISPLAY: u32 = 5;

/// Interactions below which an inquiry submission is refused
pub const MIN_INTERACTIONS_SUBMIT: u32 = 3;

#[derive(Debug)]
struct WindowState {
    attempts: u32,
    window_start: Instant,
}

/// Fixed-window rate limiter
///
/// Counts attempts; when the window has elapsed the count resets. `check`
/// both records an attempt and reports whether it is still within budget.
#[derive(Debug)]
pub struct RateLimiter {
    max_attempts: u32,
    window: Duration,
    state: Mutex<WindowState>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        RateLimiter::new(MAX_ATTEMPTS, WINDOW)
    }
}

impl RateLimiter {
    /// Limiter allowing `max_attempts` per `window`
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        RateLimiter {
            max_attempts,
            window,
            state: Mutex::new(WindowState {
                attempts: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Record an attempt; true while within budget
    pub fn check(&self) -> bool {
        let mut state = self.state.lock();
        let now = Instant::now();
        if now.duration_since(state.window_start) > self.window {
            state.attempts = 0;
            state.window_start = now;
        }
        state.attempts += 1;
        state.attempts <= self.max_attempts
    }

    /// Attempts recorded in the current window
    pub fn attempts(&self) -> u32 {
        self.state.lock().attempts
    }
}

/// Counter for user pointer events
///
/// Stands in for the page's mouse-movement listener; a port implementation
/// forwards pointer events here.
#[derive(Debug, Default)]
pub struct InteractionTracker {
    events: AtomicU32,
}

impl InteractionTracker {
    /// Tracker with no recorded interactions
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pointer event
    pub fn record(&self) {
        self.events.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of recorded pointer events
    pub fn count(&self) -> u32 {
        self.events.load(Ordering::Relaxed)
    }
}
