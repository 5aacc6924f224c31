//! A mounted indicator: state machine plus the values its renderer reads.

use super::machine::IndicatorMachine;
use super::state::IndicatorState;
use super::variant::{IndicatorPreset, VariantKind};
use crate::config::TimingConfig;
use crate::timer::Instant;

/// One mounted gallery widget.
///
/// The renderer measures the current label and reports its width back through
/// [`IndicatorWidget::set_label_width`]; the pill width is derived from it.
#[derive(Debug, Clone)]
pub struct IndicatorWidget {
    kind: VariantKind,
    preset: IndicatorPreset,
    machine: IndicatorMachine,
    label_width: f32,
    hovered: bool,
}

impl IndicatorWidget {
    /// Mount a resting widget for a variant.
    pub fn new(kind: VariantKind, timing: &TimingConfig) -> Self {
        Self {
            kind,
            preset: kind.preset(),
            machine: IndicatorMachine::from_timing(timing),
            label_width: 0.0,
            hovered: false,
        }
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    pub fn preset(&self) -> &IndicatorPreset {
        &self.preset
    }

    pub fn machine(&self) -> &IndicatorMachine {
        &self.machine
    }

    pub fn state(&self) -> IndicatorState {
        self.machine.state()
    }

    /// Label for the current state, if the variant writes one.
    pub fn label(&self) -> Option<&str> {
        self.preset.labels.for_state(self.state())
    }

    /// Record the on-screen width of the current label.
    pub fn set_label_width(&mut self, width: f32) {
        self.label_width = width.max(0.0);
    }

    /// Last measured label width. The draggable dot only keeps it while
    /// showing feedback.
    pub fn label_width(&self) -> f32 {
        if self.kind.is_draggable() && self.state() != IndicatorState::Feedback {
            0.0
        } else {
            self.label_width
        }
    }

    /// Target width of the pill for the current state.
    pub fn pill_width(&self) -> f32 {
        self.preset.pill.width_for(self.state(), self.label_width())
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the "press P" tooltip should show on the draggable dot.
    pub fn tooltip_visible(&self, dragging: bool) -> bool {
        self.kind.is_draggable() && self.hovered && self.state().is_resting() && !dragging
    }

    pub fn on_activate_key_down(&mut self, now: Instant) -> Option<IndicatorState> {
        self.machine.on_activate_key_down(now)
    }

    pub fn on_activate_key_up(&mut self, now: Instant) -> Option<IndicatorState> {
        self.machine.on_activate_key_up(now)
    }

    pub fn poll(&mut self, now: Instant) -> Option<IndicatorState> {
        self.machine.poll(now)
    }

    pub fn teardown(&mut self) {
        self.machine.teardown();
    }
}
