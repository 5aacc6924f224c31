//! egui painters for the StateDeck gallery.
//!
//! Every painter is a function of core state plus the variant preset:
//!
//! - **Indicator**: the animated pill for each variant
//! - **Arena**: the dark canvas, drag anchors and the draggable dot
//! - **Hints**: keyboard hint badges and dot navigation

pub mod arena;
pub mod hints;
pub mod indicator;

pub use arena::{ArenaView, paint_arena_background, show_drag_arena};
pub use hints::{dot_navigation, key_hints};
pub use indicator::{PillAnimator, show_indicator};

use egui::Pos2;
use kurbo::Point;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Arena corner radius
    pub const ARENA_RADIUS: u8 = 32;
    /// Height of a busy or feedback pill
    pub const PILL_HEIGHT: f32 = 32.0;
    /// Key hint badge side
    pub const BADGE: f32 = 30.0;
    /// Navigation dot diameter
    pub const NAV_DOT: f32 = 8.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Page background
    pub const PAGE_BG: Color32 = Color32::from_rgb(0xF7, 0xF7, 0xF2);
    /// Arena background
    pub const ARENA_BG: Color32 = Color32::from_rgb(0x1A, 0x18, 0x15);
    /// Arena inner border (white, 16%)
    pub const ARENA_BORDER: Color32 = Color32::from_rgba_premultiplied(41, 41, 41, 41);
    /// Pill fill while busy (black, 28%)
    pub const PILL_BG: Color32 = Color32::from_black_alpha(71);
    /// Pill fill during feedback (black, 16%)
    pub const PILL_BG_FEEDBACK: Color32 = Color32::from_black_alpha(41);
    /// Pill inner border (white, 30%)
    pub const PILL_BORDER: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);
    /// Indicator text
    pub const TEXT: Color32 = Color32::from_rgb(0xF7, 0xF7, 0xF7);
    /// Indicator text during feedback (60%)
    pub const TEXT_FEEDBACK: Color32 = Color32::from_rgba_premultiplied(148, 148, 148, 153);
    /// Dots and bars
    pub const MARK: Color32 = Color32::from_rgb(0xD9, 0xD9, 0xD9);
    /// Feedback progress line
    pub const PROGRESS: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
    /// Hint text on the page
    pub const HINT_TEXT: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
    /// Hint badge label
    pub const BADGE_TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    /// Hint badge fill (black, 12%)
    pub const BADGE_BG: Color32 = Color32::from_black_alpha(31);
    /// Selected navigation dot
    pub const NAV_ACTIVE: Color32 = Color32::BLACK;
    /// Unselected navigation dot
    pub const NAV_IDLE: Color32 = Color32::from_rgb(0xD6, 0xD6, 0xC6);
}

/// Convert a core point to an egui position.
pub fn to_pos(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Convert an egui position to a core point.
pub fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

/// Convert an egui rect to a core rect.
pub fn to_kurbo_rect(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}
