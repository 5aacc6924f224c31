//! Timer-driven indicator state machine.

use super::state::IndicatorState;
use crate::config::TimingConfig;
use crate::timer::{Duration, Instant, TimerId, TimerSlot};

/// Drives one indicator through `Resting → Listening → Processing → Feedback`.
///
/// Only the first two edges are triggered by key events. The last two are
/// timed and owned by a single [`TimerSlot`], so entering a timed state always
/// replaces whatever transition was pending. Invalid triggers are dropped
/// without effect.
#[derive(Debug, Clone)]
pub struct IndicatorMachine {
    state: IndicatorState,
    timer: TimerSlot<IndicatorState>,
    processing_delay: Duration,
    feedback_delay: Duration,
    torn_down: bool,
}

impl IndicatorMachine {
    /// Create a resting machine with the given delays.
    pub fn new(processing_delay: Duration, feedback_delay: Duration) -> Self {
        Self {
            state: IndicatorState::Resting,
            timer: TimerSlot::new(),
            processing_delay,
            feedback_delay,
            torn_down: false,
        }
    }

    /// Create a machine from the timing section of the config.
    pub fn from_timing(timing: &TimingConfig) -> Self {
        Self::new(timing.processing_delay(), timing.feedback_delay())
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The pending timed transition, if any.
    pub fn pending_timer(&self) -> Option<(TimerId, Instant)> {
        self.timer.pending()
    }

    /// Activate key pressed. Only valid while resting.
    pub fn on_activate_key_down(&mut self, now: Instant) -> Option<IndicatorState> {
        if self.torn_down || self.state != IndicatorState::Resting {
            return None;
        }
        self.enter(IndicatorState::Listening, now);
        Some(self.state)
    }

    /// Activate key released. Only valid while listening.
    pub fn on_activate_key_up(&mut self, now: Instant) -> Option<IndicatorState> {
        if self.torn_down || self.state != IndicatorState::Listening {
            return None;
        }
        self.enter(IndicatorState::Processing, now);
        Some(self.state)
    }

    /// Assign a state directly and (re)arm the timer that belongs to it.
    ///
    /// `at` is the instant the state is considered entered; timed states
    /// schedule their exit relative to it.
    pub fn enter(&mut self, state: IndicatorState, at: Instant) {
        if self.torn_down {
            return;
        }
        if self.state != state {
            log::debug!("indicator {} -> {}", self.state, state);
        }
        self.state = state;
        match state {
            IndicatorState::Processing => {
                self.timer
                    .schedule(at + self.processing_delay, IndicatorState::Feedback);
            }
            IndicatorState::Feedback => {
                self.timer
                    .schedule(at + self.feedback_delay, IndicatorState::Resting);
            }
            IndicatorState::Resting | IndicatorState::Listening => {
                self.timer.cancel();
            }
        }
    }

    /// Fire the pending transition if it is due.
    ///
    /// At most one transition fires per call. The next timer is measured from
    /// the fired deadline, so a late frame does not stretch the cycle.
    pub fn poll(&mut self, now: Instant) -> Option<IndicatorState> {
        if self.torn_down {
            return None;
        }
        let (target, due) = self.timer.poll(now)?;
        self.enter(target, due);
        Some(target)
    }

    /// Fire a specific timer, for hosts that run real timer callbacks.
    /// Superseded or cancelled ids do nothing.
    pub fn fire(&mut self, id: TimerId) -> Option<IndicatorState> {
        if self.torn_down {
            return None;
        }
        let (target, due) = self.timer.fire(id)?;
        self.enter(target, due);
        Some(target)
    }

    /// Cancel any pending timer and stop reacting to input.
    pub fn teardown(&mut self) {
        if self.timer.cancel() {
            log::debug!("indicator torn down in {}, pending timer cancelled", self.state);
        }
        self.torn_down = true;
    }
}
