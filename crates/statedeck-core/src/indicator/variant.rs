//! Gallery variants and their presentation presets.
//!
//! Variants differ only in data: labels, pill geometry and visual style. They
//! all share one [`IndicatorMachine`](super::IndicatorMachine).

use serde::{Deserialize, Serialize};

use super::state::IndicatorState;
use crate::spring::SpringParams;

/// Text shown once the simulated work completes.
pub const FEEDBACK_LABEL: &str = "Copied to clipboard";

/// Tooltip shown when hovering the resting draggable dot.
pub const DRAGGABLE_TOOLTIP: &str = "Press P to start recording";

/// Every widget in the gallery, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    TextBlink,
    TextBlinkFeedback2,
    TextShimmer,
    SmWaveAndSpinner,
    LgWaveAndSpinner,
    SmDotAndTyping,
    LgDotAndTyping,
    Draggable,
}

impl VariantKind {
    pub const ALL: [VariantKind; 8] = [
        VariantKind::TextBlink,
        VariantKind::TextBlinkFeedback2,
        VariantKind::TextShimmer,
        VariantKind::SmWaveAndSpinner,
        VariantKind::LgWaveAndSpinner,
        VariantKind::SmDotAndTyping,
        VariantKind::LgDotAndTyping,
        VariantKind::Draggable,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::TextBlink => "TextBlink",
            VariantKind::TextBlinkFeedback2 => "TextBlinkFeedback2",
            VariantKind::TextShimmer => "TextShimmer",
            VariantKind::SmWaveAndSpinner => "SMWaveAndSpinner",
            VariantKind::LgWaveAndSpinner => "LGWaveAndSpinner",
            VariantKind::SmDotAndTyping => "SMDotAndTyping",
            VariantKind::LgDotAndTyping => "LGDotAndTyping",
            VariantKind::Draggable => "Draggable",
        }
    }

    /// Position in [`VariantKind::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn is_draggable(self) -> bool {
        self == VariantKind::Draggable
    }

    /// Presentation preset for this variant.
    pub fn preset(self) -> IndicatorPreset {
        let text = |style, feedback_effect| IndicatorPreset {
            style,
            feedback_effect,
            labels: Labels::text(),
            pill: PillGeometry::text(),
        };
        match self {
            VariantKind::TextBlink => text(VisualStyle::Blink, FeedbackEffect::ProgressLine),
            VariantKind::TextBlinkFeedback2 => text(VisualStyle::Blink, FeedbackEffect::Glow),
            VariantKind::TextShimmer => text(VisualStyle::Shimmer, FeedbackEffect::None),
            VariantKind::SmWaveAndSpinner => IndicatorPreset {
                style: VisualStyle::WaveAndSpinner,
                feedback_effect: FeedbackEffect::None,
                labels: Labels::feedback_only(),
                pill: PillGeometry::small(),
            },
            VariantKind::LgWaveAndSpinner => IndicatorPreset {
                style: VisualStyle::WaveAndSpinner,
                feedback_effect: FeedbackEffect::None,
                labels: Labels::feedback_only(),
                pill: PillGeometry::large(),
            },
            VariantKind::SmDotAndTyping => IndicatorPreset {
                style: VisualStyle::DotAndTyping,
                feedback_effect: FeedbackEffect::None,
                labels: Labels::feedback_only(),
                pill: PillGeometry::small(),
            },
            VariantKind::LgDotAndTyping => IndicatorPreset {
                style: VisualStyle::DotAndTyping,
                feedback_effect: FeedbackEffect::None,
                labels: Labels::feedback_only(),
                pill: PillGeometry::large(),
            },
            VariantKind::Draggable => IndicatorPreset {
                style: VisualStyle::Dot,
                feedback_effect: FeedbackEffect::None,
                labels: Labels::feedback_only(),
                pill: PillGeometry::dot(),
            },
        }
    }
}

/// How the busy states are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStyle {
    /// Label text pulses in opacity.
    Blink,
    /// A highlight sweeps across the label text.
    Shimmer,
    /// Audio-style bars while listening, a spinner while processing.
    WaveAndSpinner,
    /// A breathing dot while listening, typing dots while processing.
    DotAndTyping,
    /// Plain dot with a tooltip, used by the draggable variant.
    Dot,
}

/// Extra decoration drawn during feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackEffect {
    None,
    /// A line filling the bottom edge over the feedback delay.
    ProgressLine,
    /// A soft glow expanding around the pill.
    Glow,
}

/// Labels per state. `None` means nothing is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub listening: Option<String>,
    pub processing: Option<String>,
    pub feedback: Option<String>,
}

impl Labels {
    fn text() -> Self {
        Self {
            listening: Some("Listening".to_string()),
            processing: Some("Processing".to_string()),
            feedback: Some(FEEDBACK_LABEL.to_string()),
        }
    }

    fn feedback_only() -> Self {
        Self {
            listening: None,
            processing: None,
            feedback: Some(FEEDBACK_LABEL.to_string()),
        }
    }

    pub fn for_state(&self, state: IndicatorState) -> Option<&str> {
        match state {
            IndicatorState::Resting => None,
            IndicatorState::Listening => self.listening.as_deref(),
            IndicatorState::Processing => self.processing.as_deref(),
            IndicatorState::Feedback => self.feedback.as_deref(),
        }
    }
}

/// Width of the pill while listening or processing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActiveWidth {
    /// Measured label width plus padding.
    FitLabel,
    Fixed(f32),
}

/// Size rules for the indicator pill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillGeometry {
    pub resting_width: f32,
    pub resting_height: f32,
    pub active_width: ActiveWidth,
    /// Horizontal padding added around a measured label.
    pub label_padding: f32,
    pub font_size: f32,
    /// Upward shift of the pill while not resting.
    pub lift: f32,
    pub resize_spring: SpringParams,
}

impl PillGeometry {
    fn text() -> Self {
        Self {
            resting_width: 24.0,
            resting_height: 6.0,
            active_width: ActiveWidth::FitLabel,
            label_padding: 48.0,
            font_size: 15.0,
            lift: 24.0,
            resize_spring: SpringParams::PILL,
        }
    }

    fn small() -> Self {
        Self {
            resting_width: 6.0,
            resting_height: 6.0,
            active_width: ActiveWidth::Fixed(32.0),
            label_padding: 48.0,
            font_size: 12.0,
            lift: 0.0,
            resize_spring: SpringParams::PILL,
        }
    }

    fn large() -> Self {
        Self {
            resting_width: 24.0,
            resting_height: 6.0,
            active_width: ActiveWidth::Fixed(100.0),
            label_padding: 48.0,
            font_size: 15.0,
            lift: 0.0,
            resize_spring: SpringParams::PILL,
        }
    }

    fn dot() -> Self {
        Self {
            resting_width: 16.0,
            resting_height: 16.0,
            active_width: ActiveWidth::Fixed(32.0),
            label_padding: 48.0,
            font_size: 12.0,
            lift: 0.0,
            resize_spring: SpringParams::PILL,
        }
    }

    /// Target pill width for a state given the measured label width.
    pub fn width_for(&self, state: IndicatorState, label_width: f32) -> f32 {
        match state {
            IndicatorState::Resting => self.resting_width,
            IndicatorState::Listening | IndicatorState::Processing => match self.active_width {
                ActiveWidth::FitLabel => label_width + self.label_padding,
                ActiveWidth::Fixed(width) => width,
            },
            IndicatorState::Feedback => label_width + self.label_padding,
        }
    }
}

/// Everything the presentation layer needs to draw one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPreset {
    pub style: VisualStyle,
    pub feedback_effect: FeedbackEffect,
    pub labels: Labels,
    pub pill: PillGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order() {
        assert_eq!(VariantKind::ALL[0], VariantKind::TextBlink);
        assert_eq!(VariantKind::ALL[7], VariantKind::Draggable);
        for (i, v) in VariantKind::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
        assert!(VariantKind::Draggable.is_draggable());
        assert!(!VariantKind::TextShimmer.is_draggable());
    }

    #[test]
    fn test_text_labels() {
        let preset = VariantKind::TextBlink.preset();
        assert_eq!(preset.labels.for_state(IndicatorState::Resting), None);
        assert_eq!(preset.labels.for_state(IndicatorState::Listening), Some("Listening"));
        assert_eq!(preset.labels.for_state(IndicatorState::Processing), Some("Processing"));
        assert_eq!(preset.labels.for_state(IndicatorState::Feedback), Some(FEEDBACK_LABEL));
    }

    #[test]
    fn test_spinner_labels() {
        let preset = VariantKind::SmWaveAndSpinner.preset();
        assert_eq!(preset.labels.for_state(IndicatorState::Listening), None);
        assert_eq!(preset.labels.for_state(IndicatorState::Feedback), Some(FEEDBACK_LABEL));
    }

    #[test]
    fn test_text_pill_width() {
        let pill = VariantKind::TextShimmer.preset().pill;
        assert_eq!(pill.width_for(IndicatorState::Resting, 70.0), 24.0);
        assert_eq!(pill.width_for(IndicatorState::Listening, 70.0), 118.0);
        assert_eq!(pill.width_for(IndicatorState::Feedback, 130.0), 178.0);
    }

    #[test]
    fn test_fixed_pill_width() {
        let small = VariantKind::SmDotAndTyping.preset().pill;
        assert_eq!(small.width_for(IndicatorState::Resting, 0.0), 6.0);
        assert_eq!(small.width_for(IndicatorState::Processing, 90.0), 32.0);
        let large = VariantKind::LgWaveAndSpinner.preset().pill;
        assert_eq!(large.width_for(IndicatorState::Listening, 0.0), 100.0);
        assert_eq!(large.width_for(IndicatorState::Feedback, 100.0), 148.0);
    }

    #[test]
    fn test_feedback_effects() {
        assert_eq!(
            VariantKind::TextBlink.preset().feedback_effect,
            FeedbackEffect::ProgressLine
        );
        assert_eq!(
            VariantKind::TextBlinkFeedback2.preset().feedback_effect,
            FeedbackEffect::Glow
        );
    }
}
