//! The gallery application: input routing, frame loop and layout.

use egui::{Context, RichText, vec2};
use statedeck_core::{Gallery, GalleryConfig, Instant};
use statedeck_widgets::{
    ArenaView, PillAnimator, dot_navigation, key_hints, show_drag_arena, show_indicator, theme,
};

use crate::events::{key_event, pointer_event};

/// Environment variable naming a JSON gallery config file.
pub const CONFIG_ENV: &str = "STATEDECK_CONFIG";

/// Distance of the pill's resting center above the arena's bottom edge.
const PILL_BASELINE: f32 = 48.0;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub gallery: GalleryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "StateDeck".to_string(),
            width: 960.0,
            height: 720.0,
            gallery: GalleryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration, reading the gallery config from
    /// [`CONFIG_ENV`] when it is set. A file that fails to load falls back to
    /// the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            match GalleryConfig::load(&path) {
                Ok(gallery) => config.gallery = gallery,
                Err(e) => log::warn!("Ignoring {}: {}", path, e),
            }
        }
        config
    }
}

/// Main application struct.
pub struct GalleryApp {
    gallery: Gallery,
    pill: PillAnimator,
    /// Arena bounds from the previous frame, used to localize pointer input.
    arena: Option<kurbo::Rect>,
}

impl GalleryApp {
    pub fn new(config: GalleryConfig) -> Self {
        let gallery = Gallery::new(config);
        let pill = PillAnimator::new(gallery.widget(), &gallery.config().timing);
        Self {
            gallery,
            pill,
            arena: None,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    fn handle_input(&mut self, ctx: &Context, now: Instant) {
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            if let Some(key) = key_event(event) {
                self.gallery.handle_key_event(&key, now);
            }
            if let (Some(pointer), Some(container)) = (pointer_event(event), self.arena) {
                self.gallery.handle_pointer_event(&pointer, container, now);
            }
        }
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(self.gallery.current().name())
                    .size(18.0)
                    .color(theme::BADGE_TEXT),
            );
            ui.add_space(12.0);

            let view = ArenaView::allocate(ui, &self.gallery.config().arena);
            self.arena = Some(view.container());

            let center = if self.gallery.current().is_draggable() {
                show_drag_arena(ui, &view, &self.gallery);
                view.to_screen(self.gallery.drag().center())
            } else {
                view.rect.center_bottom() - vec2(0.0, PILL_BASELINE)
            };
            show_indicator(ui, center, self.gallery.widget_mut(), &mut self.pill);

            ui.add_space(16.0);
            if let Some(index) = dot_navigation(ui, self.gallery.len(), self.gallery.index()) {
                self.gallery.select(index);
            }
            ui.add_space(12.0);
            key_hints(
                ui,
                self.gallery.hints(),
                &self.gallery.config().activate_key,
                self.gallery.current().is_draggable(),
            );
        });
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_input(ctx, now);
        if let Some(state) = self.gallery.tick(now) {
            log::debug!("{} -> {}", self.gallery.current().name(), state);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::PAGE_BG))
            .show(ctx, |ui| self.show(ui));

        let drag = self.gallery.drag();
        if drag.is_dragging() || drag.is_animating() {
            ctx.request_repaint();
        }
        if let Some((_, deadline)) = self.gallery.widget().machine().pending_timer() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statedeck_core::{IndicatorState, VariantKind};

    #[test]
    fn test_new_app_mounts_first_variant() {
        let app = GalleryApp::new(GalleryConfig::default());
        assert_eq!(app.gallery().current(), VariantKind::TextBlink);
        assert_eq!(app.gallery().widget().state(), IndicatorState::Resting);
        assert!(app.arena.is_none());
    }

    #[test]
    fn test_default_config_uses_reference_arena() {
        let config = AppConfig::default();
        assert_eq!(config.gallery.arena.width, 640.0);
        assert_eq!(config.gallery.arena.height, 480.0);
        assert!(config.width >= config.gallery.arena.width as f32);
    }
}
