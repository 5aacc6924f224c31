//! Keyboard hint badges and the dot navigation strip.

use egui::{
    Align2, Color32, CornerRadius, FontId, Id, Rect, Sense, Stroke, StrokeKind, Ui, vec2,
};
use statedeck_core::KeyHints;

use crate::{sizing, theme};

/// Draw one key badge, scaled up while its key is held.
fn badge(ui: &mut Ui, id: &str, label: &str, pressed: bool) {
    let (rect, _) = ui.allocate_exact_size(vec2(sizing::BADGE, sizing::BADGE), Sense::hover());
    let t = ui
        .ctx()
        .animate_bool_with_time(Id::new(("statedeck_badge", id)), pressed, 0.12);
    let scaled = Rect::from_center_size(rect.center(), rect.size() * (1.0 + 0.2 * t));
    let painter = ui.painter();
    painter.rect_filled(scaled, CornerRadius::same(6), theme::BADGE_BG);
    painter.rect_stroke(
        scaled,
        CornerRadius::same(6),
        Stroke::new(1.0, Color32::from_black_alpha(20)),
        StrokeKind::Inside,
    );
    painter.text(
        scaled.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(13.0),
        theme::BADGE_TEXT,
    );
}

fn hint_text(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(13.0).color(theme::HINT_TEXT));
}

/// Render the hint row under the arena.
///
/// `activate` is the configured activate key, shown upper-cased in its badge.
pub fn key_hints(ui: &mut Ui, hints: KeyHints, activate: &str, draggable: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        hint_text(ui, "Press");
        badge(ui, "activate", &activate.to_uppercase(), hints.activate);
        hint_text(ui, "to start recording");
        ui.add_space(16.0);
        badge(ui, "previous", "◀", hints.previous);
        badge(ui, "next", "▶", hints.next);
        hint_text(ui, "to switch");
        if draggable {
            ui.add_space(16.0);
            hint_text(ui, "Try to drag the component!");
        }
    });
}

/// Dot strip showing which variant is selected. Returns the clicked index.
pub fn dot_navigation(ui: &mut Ui, count: usize, selected: usize) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for i in 0..count {
            let size = vec2(sizing::NAV_DOT + 4.0, sizing::NAV_DOT + 4.0);
            let (rect, response) = ui.allocate_exact_size(size, Sense::click());
            let color = if i == selected {
                theme::NAV_ACTIVE
            } else if response.hovered() {
                Color32::from_gray(160)
            } else {
                theme::NAV_IDLE
            };
            ui.painter()
                .circle_filled(rect.center(), sizing::NAV_DOT / 2.0, color);
            if response.clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}
