//! The animated indicator pill.

use std::f32::consts::{PI, TAU};
use std::sync::Arc;

use egui::{
    Color32, CornerRadius, FontId, Galley, Painter, Pos2, Rect, Stroke, StrokeKind, Ui, vec2,
};
use statedeck_core::indicator::{
    FeedbackEffect, IndicatorPreset, IndicatorState, IndicatorWidget, VariantKind, VisualStyle,
};
use statedeck_core::{Duration, Spring, TimingConfig};

use crate::{sizing, theme};

/// Animated pill geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillFrame {
    pub width: f32,
    pub height: f32,
    pub lift: f32,
    /// Seconds since the current state was entered.
    pub age: f32,
}

/// Springs that carry the pill between the sizes of each state.
#[derive(Debug, Clone)]
pub struct PillAnimator {
    kind: VariantKind,
    state: IndicatorState,
    entered_at: f64,
    feedback_delay: Duration,
    width: Spring,
    height: Spring,
    lift: Spring,
    last_time: Option<f64>,
}

impl PillAnimator {
    pub fn new(widget: &IndicatorWidget, timing: &TimingConfig) -> Self {
        Self::with_feedback_delay(widget, timing.feedback_delay())
    }

    fn with_feedback_delay(widget: &IndicatorWidget, feedback_delay: Duration) -> Self {
        let pill = widget.preset().pill;
        let params = pill.resize_spring;
        Self {
            kind: widget.kind(),
            state: widget.state(),
            entered_at: 0.0,
            feedback_delay,
            width: Spring::new(widget.pill_width() as f64, params),
            height: Spring::new(target_height(widget) as f64, params),
            lift: Spring::new(target_lift(widget) as f64, params),
            last_time: None,
        }
    }

    /// Advance the springs to `time` (seconds, from egui input).
    pub fn step(&mut self, widget: &IndicatorWidget, time: f64) -> PillFrame {
        if widget.kind() != self.kind {
            *self = Self::with_feedback_delay(widget, self.feedback_delay);
        }
        if widget.state() != self.state {
            self.state = widget.state();
            self.entered_at = time;
        }

        self.width.set_target(widget.pill_width() as f64);
        self.height.set_target(target_height(widget) as f64);
        self.lift.set_target(target_lift(widget) as f64);

        let dt = match self.last_time {
            Some(last) => (time - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(time);

        PillFrame {
            width: self.width.step(dt) as f32,
            height: self.height.step(dt) as f32,
            lift: self.lift.step(dt) as f32,
            age: (time - self.entered_at).max(0.0) as f32,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.width.is_at_rest() && self.height.is_at_rest() && self.lift.is_at_rest()
    }

    /// Duration the feedback decoration spans.
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

fn target_height(widget: &IndicatorWidget) -> f32 {
    let pill = widget.preset().pill;
    if widget.state().is_resting() {
        pill.resting_height
    } else {
        sizing::PILL_HEIGHT
    }
}

fn target_lift(widget: &IndicatorWidget) -> f32 {
    if widget.state().is_resting() {
        0.0
    } else {
        widget.preset().pill.lift
    }
}

fn corner(height: f32) -> CornerRadius {
    CornerRadius::same((height / 2.0).round().clamp(0.0, 255.0) as u8)
}

/// Paint the mounted indicator centered on `center` and report its measured
/// label width back to the widget.
pub fn show_indicator(
    ui: &mut Ui,
    center: Pos2,
    widget: &mut IndicatorWidget,
    anim: &mut PillAnimator,
) -> Rect {
    let time = ui.input(|i| i.time);
    let preset = widget.preset().clone();
    let state = widget.state();
    let font_id = FontId::proportional(preset.pill.font_size);

    let galley = widget
        .label()
        .map(|label| ui.painter().layout_no_wrap(label.to_string(), font_id, theme::TEXT));
    if let Some(galley) = &galley {
        widget.set_label_width(galley.size().x);
    }

    let frame = anim.step(widget, time);
    let rect = Rect::from_center_size(
        center - vec2(0.0, frame.lift),
        vec2(frame.width, frame.height),
    );
    let painter = ui.painter();
    let radius = corner(frame.height);

    if state == IndicatorState::Feedback && preset.feedback_effect == FeedbackEffect::Glow {
        paint_glow(painter, rect, frame.age);
    }

    let fill = if state == IndicatorState::Feedback {
        theme::PILL_BG_FEEDBACK
    } else {
        theme::PILL_BG
    };
    painter.rect_filled(rect, radius, fill);
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(1.0, theme::PILL_BORDER),
        StrokeKind::Inside,
    );

    match state {
        IndicatorState::Resting => {}
        IndicatorState::Listening | IndicatorState::Processing => {
            paint_busy(painter, rect, &preset, state, time as f32, galley);
        }
        IndicatorState::Feedback => {
            if let Some(galley) = galley {
                let pos = rect.center() - galley.size() / 2.0;
                painter.galley_with_override_text_color(pos, galley, theme::TEXT_FEEDBACK);
            }
            if preset.feedback_effect == FeedbackEffect::ProgressLine {
                let span = anim.feedback_delay().as_secs_f32().max(1e-3);
                paint_progress(painter, rect, frame.age / span);
            }
        }
    }

    if !state.is_resting() || !anim.is_settled() {
        ui.ctx().request_repaint();
    }
    rect
}

fn paint_busy(
    painter: &Painter,
    rect: Rect,
    preset: &IndicatorPreset,
    state: IndicatorState,
    time: f32,
    galley: Option<Arc<Galley>>,
) {
    let unit = if preset.pill.font_size < 14.0 { 0.6 } else { 1.0 };
    match preset.style {
        VisualStyle::Blink => {
            if let Some(galley) = galley {
                let pulse = 0.5 + 0.5 * (TAU * time / 1.2).cos();
                let color = theme::TEXT.gamma_multiply(0.35 + 0.65 * pulse);
                let pos = rect.center() - galley.size() / 2.0;
                painter.galley_with_override_text_color(pos, galley, color);
            }
        }
        VisualStyle::Shimmer => {
            if let Some(galley) = galley {
                let pos = rect.center() - galley.size() / 2.0;
                let text_rect = Rect::from_min_size(pos, galley.size());
                painter.galley_with_override_text_color(
                    pos,
                    galley.clone(),
                    theme::TEXT.gamma_multiply(0.45),
                );

                // A bright band sweeps left to right across the text.
                let band = 24.0;
                let travel = text_rect.width() + 2.0 * band;
                let x = text_rect.left() - band + (time / 1.6).fract() * travel;
                let band_rect = Rect::from_min_max(
                    Pos2::new(x, text_rect.top()),
                    Pos2::new(x + band, text_rect.bottom()),
                );
                painter
                    .with_clip_rect(band_rect.intersect(text_rect))
                    .galley_with_override_text_color(pos, galley, theme::TEXT);
            }
        }
        VisualStyle::WaveAndSpinner => {
            if state == IndicatorState::Listening {
                paint_wave(painter, rect.center(), unit, time);
            } else {
                paint_spinner(painter, rect.center(), unit, time);
            }
        }
        VisualStyle::DotAndTyping => {
            if state == IndicatorState::Listening {
                paint_breathing_dot(painter, rect.center(), 3.0 * unit, time);
            } else {
                paint_typing(painter, rect.center(), unit, time);
            }
        }
        VisualStyle::Dot => {
            paint_breathing_dot(painter, rect.center(), 3.0, time);
        }
    }
}

fn paint_wave(painter: &Painter, center: Pos2, unit: f32, time: f32) {
    let bars = if unit < 1.0 { 4 } else { 5 };
    let gap = 5.0 * unit;
    let max_height = 18.0 * unit;
    let start = center.x - gap * (bars - 1) as f32 / 2.0;
    for i in 0..bars {
        let phase = TAU * time + i as f32 * 0.7;
        let height = max_height * (0.35 + 0.65 * phase.sin().abs());
        let x = start + i as f32 * gap;
        let bar = Rect::from_center_size(Pos2::new(x, center.y), vec2(2.0 * unit.max(0.8), height));
        painter.rect_filled(bar, CornerRadius::same(1), theme::MARK);
    }
}

fn paint_spinner(painter: &Painter, center: Pos2, unit: f32, time: f32) {
    let spokes = 8;
    let radius = 8.0 * unit;
    let head = (time / 0.8).fract() * spokes as f32;
    for i in 0..spokes {
        let angle = TAU * i as f32 / spokes as f32 - PI / 2.0;
        let behind = (head - i as f32).rem_euclid(spokes as f32);
        let alpha = 1.0 - behind / spokes as f32;
        let pos = center + vec2(angle.cos(), angle.sin()) * radius;
        painter.circle_filled(pos, 1.5 * unit.max(0.8), theme::MARK.gamma_multiply(alpha));
    }
}

fn paint_breathing_dot(painter: &Painter, center: Pos2, radius: f32, time: f32) {
    let s = (PI * time / 1.5).sin();
    let scale = 1.0 + 1.25 * s * s;
    painter.circle_filled(center, radius * scale, theme::MARK);
}

fn paint_typing(painter: &Painter, center: Pos2, unit: f32, time: f32) {
    let spacing = 10.0 * unit;
    for i in 0..3 {
        let local = ((time - i as f32 * 0.15) / 0.8).rem_euclid(1.0);
        let opacity = 0.6 + 0.4 * (PI * local).sin();
        let pos = Pos2::new(center.x + (i as f32 - 1.0) * spacing, center.y);
        painter.circle_filled(pos, 3.0 * unit, theme::MARK.gamma_multiply(opacity));
    }
}

fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn paint_progress(painter: &Painter, rect: Rect, progress: f32) {
    let width = rect.width() * ease_out_quad(progress);
    let line = Rect::from_min_size(
        Pos2::new(rect.left(), rect.bottom() - 3.0),
        vec2(width, 3.0),
    );
    painter
        .with_clip_rect(rect)
        .rect_filled(line, CornerRadius::same(2), theme::PROGRESS);
}

fn paint_glow(painter: &Painter, rect: Rect, age: f32) {
    let t = ease_out_quad(age / 0.45);
    let glow = rect.expand(12.0 * t);
    let alpha = (255.0 * 0.12 * t).round() as u8;
    painter.rect_filled(glow, corner(glow.height()), Color32::from_white_alpha(alpha));
}

#[cfg(test)]
mod tests {
    use super::*;
    use statedeck_core::Instant;

    #[test]
    fn test_animator_tracks_state_entry() {
        let t0 = Instant::now();
        let timing = TimingConfig::default();
        let mut widget = IndicatorWidget::new(VariantKind::LgDotAndTyping, &timing);
        let mut anim = PillAnimator::new(&widget, &timing);

        let frame = anim.step(&widget, 1.0);
        assert_eq!(frame.width, 24.0);
        assert!(anim.is_settled());

        widget.on_activate_key_down(t0);
        anim.step(&widget, 1.0);
        let mut frame = anim.step(&widget, 1.0 + 1.0 / 60.0);
        assert!(!anim.is_settled());
        assert!(frame.width > 24.0 && frame.width < 100.0);
        assert!((frame.age - 1.0 / 60.0).abs() < 1e-4);
        for i in 2..180 {
            frame = anim.step(&widget, 1.0 + i as f64 / 60.0);
        }
        assert_eq!(frame.width, 100.0);
        assert_eq!(frame.height, sizing::PILL_HEIGHT);
    }

    #[test]
    fn test_animator_resets_on_variant_change() {
        let timing = TimingConfig {
            feedback_delay_ms: 2500,
            ..TimingConfig::default()
        };
        let text = IndicatorWidget::new(VariantKind::TextBlink, &timing);
        let small = IndicatorWidget::new(VariantKind::SmWaveAndSpinner, &timing);
        let mut anim = PillAnimator::new(&text, &timing);
        let frame = anim.step(&small, 0.0);
        assert_eq!(frame.width, 6.0);
        assert_eq!(anim.feedback_delay(), Duration::from_millis(2500));
    }

    #[test]
    fn test_ease_out_quad_bounds() {
        assert_eq!(ease_out_quad(-1.0), 0.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_out_quad(3.0), 1.0);
    }
}
