//! The dark arena canvas and the draggable variant's overlays.

use egui::{
    Align2, Color32, CornerRadius, FontId, Id, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui,
    vec2,
};
use kurbo::Point;
use statedeck_core::indicator::DRAGGABLE_TOOLTIP;
use statedeck_core::{AnchorKey, ArenaConfig, Gallery};

use crate::{sizing, theme, to_kurbo_rect, to_pos};

/// Anchor ring color while dragging but not closest.
const ANCHOR_IDLE: Color32 = Color32::from_rgba_premultiplied(54, 57, 64, 128);

/// The arena rectangle allocated for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaView {
    pub rect: Rect,
}

impl ArenaView {
    /// Allocate the arena at its configured size and paint the background.
    pub fn allocate(ui: &mut Ui, config: &ArenaConfig) -> Self {
        let size = vec2(config.width as f32, config.height as f32);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        paint_arena_background(ui.painter(), rect);
        Self { rect }
    }

    /// Bounding box in the coordinate space pointer events use.
    pub fn container(&self) -> kurbo::Rect {
        to_kurbo_rect(self.rect)
    }

    /// Screen position of an arena-local point.
    pub fn to_screen(&self, local: Point) -> Pos2 {
        self.rect.min + to_pos(local).to_vec2()
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }
}

/// Fill the arena with its rounded dark background.
pub fn paint_arena_background(painter: &Painter, rect: Rect) {
    let radius = CornerRadius::same(sizing::ARENA_RADIUS);
    painter.rect_filled(rect, radius, theme::ARENA_BG);
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(1.0, theme::ARENA_BORDER),
        StrokeKind::Inside,
    );
}

/// Paint the draggable variant's title, anchor rings and tooltip.
///
/// The dot itself is an ordinary indicator drawn at the controller's center.
pub fn show_drag_arena(ui: &mut Ui, view: &ArenaView, gallery: &Gallery) {
    let drag = gallery.drag();
    let painter = ui.painter();

    painter.text(
        view.rect.center_top() + vec2(0.0, 40.0),
        Align2::CENTER_CENTER,
        "draggable",
        FontId::proportional(14.0),
        theme::HINT_TEXT,
    );

    let opacity = ui
        .ctx()
        .animate_bool_with_time(Id::new("statedeck_anchors"), drag.is_dragging(), 0.1);
    if opacity > 0.0 {
        for anchor in drag.anchors().anchors() {
            let closest = drag.highlighted() == Some(anchor.key);
            let color = if closest { Color32::WHITE } else { ANCHOR_IDLE };
            let radius = gallery.config().arena.anchor_radius as f32;
            painter.circle_stroke(
                view.to_screen(anchor.point),
                radius,
                Stroke::new(1.5, color.gamma_multiply(opacity)),
            );
        }
    }

    let center = view.to_screen(drag.center());
    if gallery.widget().is_hovered() && !drag.is_dragging() {
        let half = drag.anchors().element_half_size() as f32;
        painter.circle_filled(center, half + 4.0, Color32::from_white_alpha(51));
    }

    if gallery.tooltip_visible() {
        paint_tooltip(painter, center, drag.resting_anchor());
    }
}

fn paint_tooltip(painter: &Painter, dot: Pos2, resting: AnchorKey) {
    let font_id = FontId::proportional(12.0);
    let galley = painter.layout_no_wrap(DRAGGABLE_TOOLTIP.to_string(), font_id, theme::TEXT);
    let size = galley.size() + vec2(16.0, 8.0);

    // Open toward the middle of the arena.
    let gap = 20.0;
    let (offset, align) = match resting {
        AnchorKey::Top => (vec2(0.0, gap), Align2::CENTER_TOP),
        AnchorKey::Bottom => (vec2(0.0, -gap), Align2::CENTER_BOTTOM),
        AnchorKey::Left => (vec2(gap, 0.0), Align2::LEFT_CENTER),
        AnchorKey::Right => (vec2(-gap, 0.0), Align2::RIGHT_CENTER),
    };
    let rect = align.anchor_size(dot + offset, size);
    painter.rect_filled(rect, CornerRadius::same(6), Color32::from_white_alpha(51));
    painter.galley(rect.center() - galley.size() / 2.0, galley, theme::TEXT);
}
