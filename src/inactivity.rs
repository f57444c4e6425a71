//! Menu inactivity policy.

/// Tracks the time of the last user action against a timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InactivityTimer {
    timeout_ms: u32,
    last_activity_ms: u64,
}

impl InactivityTimer {
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            last_activity_ms: 0,
        }
    }

    /// Change the timeout. 0 disables it.
    pub fn set_timeout(&mut self, timeout_ms: u32) {
        self.timeout_ms = timeout_ms;
    }

    pub fn timeout(&self) -> u32 {
        self.timeout_ms
    }

    /// Record user activity at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
    }

    /// Returns `true` once `timeout` has fully elapsed since the last activity.
    pub fn expired(&self, now_ms: u64) -> bool {
        timed_out(self.timeout_ms, self.last_activity_ms, now_ms)
    }
}

/// Decide whether an inactivity timeout has elapsed. A zero timeout never expires.
pub fn timed_out(timeout_ms: u32, last_activity_ms: u64, now_ms: u64) -> bool {
    if timeout_ms == 0 {
        return false;
    }

    now_ms.saturating_sub(last_activity_ms) >= u64::from(timeout_ms)
}
