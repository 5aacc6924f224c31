//! Indicator lifecycle states.

use serde::{Deserialize, Serialize};

/// The lifecycle state of an indicator widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndicatorState {
    /// Idle, waiting for the activate key.
    #[default]
    Resting,
    /// Activate key is held.
    Listening,
    /// Activate key was released; simulated work in progress.
    Processing,
    /// Confirmation shown before returning to rest.
    Feedback,
}

impl IndicatorState {
    /// All states in cycle order.
    pub const CYCLE: [IndicatorState; 4] = [
        IndicatorState::Resting,
        IndicatorState::Listening,
        IndicatorState::Processing,
        IndicatorState::Feedback,
    ];

    /// The state that follows this one in the cycle.
    pub fn next(self) -> Self {
        match self {
            IndicatorState::Resting => IndicatorState::Listening,
            IndicatorState::Listening => IndicatorState::Processing,
            IndicatorState::Processing => IndicatorState::Feedback,
            IndicatorState::Feedback => IndicatorState::Resting,
        }
    }

    pub fn is_resting(self) -> bool {
        self == IndicatorState::Resting
    }

    /// Listening and processing share the "busy" visuals.
    pub fn is_busy(self) -> bool {
        matches!(self, IndicatorState::Listening | IndicatorState::Processing)
    }

    /// States left by a timer rather than by a key event.
    pub fn is_timed(self) -> bool {
        matches!(self, IndicatorState::Processing | IndicatorState::Feedback)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorState::Resting => "resting",
            IndicatorState::Listening => "listening",
            IndicatorState::Processing => "processing",
            IndicatorState::Feedback => "feedback",
        }
    }
}

impl std::fmt::Display for IndicatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
