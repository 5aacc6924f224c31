//! Cancellable single-slot transition timers.
//!
//! A widget owns exactly one [`TimerSlot`]. Scheduling replaces whatever was
//! pending, so at most one delayed transition exists at any instant. Each
//! schedule bumps a generation counter; callbacks carrying an older
//! [`TimerId`] are ignored when they fire.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// Identifies one scheduled timer. Stale ids never match the slot again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending<T> {
    id: TimerId,
    deadline: Instant,
    payload: T,
}

/// Holds at most one pending delayed payload.
#[derive(Debug, Clone)]
pub struct TimerSlot<T> {
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T: Copy> TimerSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire at `deadline`, cancelling any pending timer.
    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerId {
        self.generation += 1;
        let id = TimerId(self.generation);
        self.pending = Some(Pending {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Cancel the pending timer. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Check if a timer is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Id and deadline of the pending timer, if any.
    pub fn pending(&self) -> Option<(TimerId, Instant)> {
        self.pending.map(|p| (p.id, p.deadline))
    }

    /// Take the payload if its deadline has passed.
    ///
    /// Returns the payload together with the deadline it was due at.
    pub fn poll(&mut self, now: Instant) -> Option<(T, Instant)> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some((p.payload, p.deadline))
            }
            _ => None,
        }
    }

    /// Take the payload for a specific timer regardless of the clock.
    ///
    /// Used by hosts that drive real callbacks. Ids that were superseded or
    /// cancelled return `None`.
    pub fn fire(&mut self, id: TimerId) -> Option<(T, Instant)> {
        match self.pending {
            Some(p) if p.id == id => {
                self.pending = None;
                Some((p.payload, p.deadline))
            }
            _ => None,
        }
    }
}
