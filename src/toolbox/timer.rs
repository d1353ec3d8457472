//! Single-slot auto-hide timer
//!
//! The toolbox tracks at most one pending auto-hide. Arming replaces the
//! previous timeout and clearing drops it; either way the old handle stops
//! matching, so a stale expiry can never hide the toolbox after a later show.

use std::time::{Duration, Instant};

/// Deadline used when `now + delay` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Identifies one armed auto-hide timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeoutHandle(u64);

impl TimeoutHandle {
    /// Raw id, increasing with every arm
    pub fn id(self) -> u64 {
        self.0
    }
}

/// The timeout currently waiting to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimeout {
    /// Handle delivered back on expiry
    pub handle: TimeoutHandle,
    /// Delay the timeout was armed with
    pub delay: Duration,
    /// Instant at which the timeout expires
    pub deadline: Instant,
}

/// Auto-hide timer slot
#[derive(Debug, Clone, Default)]
pub struct AutoHideTimer {
    next_id: u64,
    pending: Option<PendingTimeout>,
}

impl AutoHideTimer {
    /// Arm a new timeout, cancelling any pending one
    pub fn arm(&mut self, delay: Duration, now: Instant) -> TimeoutHandle {
        self.next_id += 1;
        let handle = TimeoutHandle(self.next_id);
        self.pending = Some(PendingTimeout {
            handle,
            delay,
            deadline: now
                .checked_add(delay)
                .unwrap_or_else(|| now + FAR_FUTURE),
        });
        handle
    }

    /// Cancel the pending timeout, returning its handle if there was one
    pub fn clear(&mut self) -> Option<TimeoutHandle> {
        self.pending.take().map(|pending| pending.handle)
    }

    /// The pending timeout, if any
    pub fn pending(&self) -> Option<&PendingTimeout> {
        self.pending.as_ref()
    }

    /// Whether `handle` is the timeout currently pending
    pub fn is_current(&self, handle: TimeoutHandle) -> bool {
        self.pending.is_some_and(|pending| pending.handle == handle)
    }

    /// Consume the pending timeout if `handle` still matches it
    pub fn take_if_current(&mut self, handle: TimeoutHandle) -> bool {
        if self.is_current(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Consume and return the pending handle if its deadline has passed
    pub fn take_expired(&mut self, now: Instant) -> Option<TimeoutHandle> {
        match self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending = None;
                Some(pending.handle)
            }
            _ => None,
        }
    }

    /// Time left until the pending timeout fires (zero when overdue)
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}
