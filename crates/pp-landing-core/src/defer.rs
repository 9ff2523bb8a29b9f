//! Debounce primitive.
//!
//! Resize storms are coalesced by a last-write-wins debounce: every new
//! trigger supersedes the pending one, and only the most recent ticket is
//! allowed to fire once its quiet period elapses. The host owns the actual
//! timer; this type only decides whether an expired timer still counts.
//!
//! ```ignore
//! let ticket = debouncer.schedule();
//! spawn(async move {
//!     sleep(ticket.delay()).await;
//!     if debouncer.fire(&ticket) {
//!         recompute();
//!     }
//! });
//! ```

use std::time::Duration;

/// Whole milliseconds for a browser timer, saturating at `u32::MAX`.
pub fn timer_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Handle for one scheduled deferred run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    delay: Duration,
}

impl DebounceTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Delay in whole milliseconds, as browser timers take it.
    pub fn delay_ms(&self) -> u32 {
        timer_ms(self.delay)
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: false,
        }
    }

    /// Schedule a run, cancelling any pending one.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        DebounceTicket {
            generation: self.generation,
            delay: self.window,
        }
    }

    /// Called when a ticket's timer expires. Returns `true` if this ticket
    /// is still the latest one, consuming the pending run.
    pub fn fire(&mut self, ticket: &DebounceTicket) -> bool {
        if self.pending && ticket.generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop the pending run, if any.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
