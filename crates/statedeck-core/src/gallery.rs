//! Gallery host: owns the key subscription, the mounted widget and the drag
//! controller.

use kurbo::{Point, Rect};

use crate::config::GalleryConfig;
use crate::drag::DragController;
use crate::indicator::{IndicatorState, IndicatorWidget, VariantKind};
use crate::input::{KEY_NEXT, KEY_PREVIOUS, KeyEvent, PointerEvent, key_matches, to_local};
use crate::timer::Instant;

/// Which hint badges are currently pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyHints {
    pub activate: bool,
    pub previous: bool,
    pub next: bool,
}

/// The gallery of indicator variants.
///
/// Exactly one widget is mounted at a time. Key events go through
/// [`Gallery::handle_key_event`], which routes the activate key to whichever
/// widget is mounted.
#[derive(Debug, Clone)]
pub struct Gallery {
    config: GalleryConfig,
    index: usize,
    widget: IndicatorWidget,
    drag: DragController,
    hints: KeyHints,
}

impl Gallery {
    /// Create a gallery showing the first variant.
    pub fn new(config: GalleryConfig) -> Self {
        let kind = VariantKind::TextBlink;
        Self {
            index: kind.index(),
            widget: IndicatorWidget::new(kind, &config.timing),
            drag: DragController::from_config(&config),
            hints: KeyHints::default(),
            config,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        VariantKind::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> VariantKind {
        self.widget.kind()
    }

    pub fn widget(&self) -> &IndicatorWidget {
        &self.widget
    }

    /// Mutable access for renderer feedback (label width, hover).
    pub fn widget_mut(&mut self) -> &mut IndicatorWidget {
        &mut self.widget
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn hints(&self) -> KeyHints {
        self.hints
    }

    /// Mount the variant at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(&kind) = VariantKind::ALL.get(index) else {
            return false;
        };
        if index == self.index {
            return true;
        }

        self.widget.teardown();
        if self.widget.kind().is_draggable() {
            self.drag.cancel_drag();
        }
        self.widget = IndicatorWidget::new(kind, &self.config.timing);
        self.index = index;
        log::info!("Showing {}", kind.name());
        true
    }

    /// Mount the next variant, wrapping around.
    pub fn next(&mut self) {
        self.select((self.index + 1) % self.len());
    }

    /// Mount the previous variant, wrapping around.
    pub fn previous(&mut self) {
        self.select((self.index + self.len() - 1) % self.len());
    }

    /// Handle a global key event.
    pub fn handle_key_event(&mut self, event: &KeyEvent, now: Instant) {
        let key = event.key();
        let pressed = event.is_pressed();

        if key_matches(key, KEY_PREVIOUS) {
            self.hints.previous = pressed;
            if pressed {
                self.previous();
            }
        } else if key_matches(key, KEY_NEXT) {
            self.hints.next = pressed;
            if pressed {
                self.next();
            }
        } else if key_matches(key, &self.config.activate_key) {
            self.hints.activate = pressed;
            if pressed {
                self.widget.on_activate_key_down(now);
            } else {
                self.widget.on_activate_key_up(now);
            }
        }
    }

    /// Handle a pointer event in absolute coordinates. `container` is the
    /// arena's current bounding box in the same coordinate space.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent, container: Rect, now: Instant) {
        if !self.current().is_draggable() {
            return;
        }
        let local = to_local(event.position(), container);
        match *event {
            PointerEvent::Down { .. } => {
                if self.drag.hit_test(local) {
                    self.drag.begin_drag(local, now);
                }
            }
            PointerEvent::Move { .. } => {
                if self.drag.session().is_some() {
                    self.drag.update_drag(local, now);
                }
            }
            PointerEvent::Up { .. } => {
                if self.drag.session().is_some() {
                    self.drag.end_drag(local, now);
                }
            }
        }
        let hovered = self.drag.hit_test(local);
        self.widget.set_hovered(hovered);
    }

    /// Whether the draggable tooltip should show.
    pub fn tooltip_visible(&self) -> bool {
        self.widget.tooltip_visible(self.drag.is_dragging())
    }

    /// Advance timers and animations. Returns the indicator's new state if a
    /// timed transition fired.
    pub fn tick(&mut self, now: Instant) -> Option<IndicatorState> {
        self.drag.tick(now);
        self.widget.poll(now)
    }

    /// Element top-left in absolute coordinates for a given container.
    pub fn drag_position_in(&self, container: Rect) -> Point {
        let local = self.drag.position();
        Point::new(local.x + container.x0, local.y + container.y0)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}
