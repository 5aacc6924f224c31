//! Drag-snap controller for the draggable dot.
//!
//! While dragging, the element follows the pointer (clamped so it never
//! leaves the arena) and the nearest anchor is highlighted. On release the
//! nearest anchor becomes the resting anchor and a spring carries the element
//! onto it. The highlight lingers for a short grace period so hover visuals do
//! not flash on at release.

use kurbo::{Point, Vec2};

use crate::config::GalleryConfig;
use crate::snap::{AnchorKey, AnchorSet};
use crate::spring::{SpringParams, SpringPoint};
use crate::timer::{Duration, Instant, TimerSlot};

/// State that exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Clamped element top-left in arena coordinates.
    pub position: Point,
    /// Anchor nearest to the element center, once the pointer has moved.
    pub nearest: Option<AnchorKey>,
    /// Offset from the pointer to the element center at grab time.
    pub grab: Vec2,
}

/// Tracks the draggable element and its snapping.
#[derive(Debug, Clone)]
pub struct DragController {
    anchors: AnchorSet,
    resting: AnchorKey,
    position: SpringPoint,
    session: Option<DragSession>,
    dragging: bool,
    highlight: Option<AnchorKey>,
    release: TimerSlot<()>,
    release_grace: Duration,
    last_tick: Option<Instant>,
}

impl DragController {
    /// Create a controller resting on `initial`.
    pub fn new(
        anchors: AnchorSet,
        initial: AnchorKey,
        spring: SpringParams,
        release_grace: Duration,
    ) -> Self {
        Self {
            anchors,
            resting: initial,
            position: SpringPoint::new(anchors.snap_position(initial), spring),
            session: None,
            dragging: false,
            highlight: None,
            release: TimerSlot::new(),
            release_grace,
            last_tick: None,
        }
    }

    /// Create a controller for the configured arena, resting on the bottom
    /// anchor.
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(
            AnchorSet::from_arena(&config.arena),
            AnchorKey::Bottom,
            config.snap_spring,
            config.timing.release_grace(),
        )
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Anchor the element rests on (or is springing towards).
    pub fn resting_anchor(&self) -> AnchorKey {
        self.resting
    }

    /// Current animated top-left of the element.
    pub fn position(&self) -> Point {
        self.position.value()
    }

    /// Current element center.
    pub fn center(&self) -> Point {
        self.anchors.center_of(self.position())
    }

    /// True from drag start until the release grace has passed.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Anchor to highlight while dragging.
    pub fn highlighted(&self) -> Option<AnchorKey> {
        self.highlight
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether the snap spring is still moving.
    pub fn is_animating(&self) -> bool {
        !self.position.is_at_rest()
    }

    /// Check if an arena-local point is over the element.
    pub fn hit_test(&self, local: Point) -> bool {
        self.anchors.element_rect(self.position()).contains(local)
    }

    /// Start a drag session with the pointer (arena-local) at `pointer`.
    ///
    /// The element does not move and nothing is highlighted until the
    /// pointer moves.
    pub fn begin_drag(&mut self, pointer: Point, now: Instant) {
        let current = self.position();
        self.release.cancel();
        self.position.jump_to(current);
        self.dragging = true;
        self.highlight = None;
        self.session = Some(DragSession {
            position: current,
            nearest: None,
            grab: self.anchors.center_of(current) - pointer,
        });
        self.last_tick = Some(now);
        log::debug!("drag started at ({:.1}, {:.1})", current.x, current.y);
    }

    /// Track the pointer (arena-local) and return the nearest anchor.
    ///
    /// The element keeps the offset it was grabbed with.
    pub fn update_drag(&mut self, pointer: Point, now: Instant) -> AnchorKey {
        let grab = match self.session {
            Some(session) => session.grab,
            None => {
                self.begin_drag(pointer, now);
                self.anchors.center_of(self.position()) - pointer
            }
        };
        let top_left = self.anchors.position_for_pointer(pointer + grab);
        let nearest = self.anchors.nearest(self.anchors.center_of(top_left));
        self.position.jump_to(top_left);
        self.session = Some(DragSession {
            position: top_left,
            nearest: Some(nearest),
            grab,
        });
        self.highlight = Some(nearest);
        nearest
    }

    /// Release the element: rest on the nearest anchor and spring onto it.
    pub fn end_drag(&mut self, pointer: Point, now: Instant) -> AnchorKey {
        let nearest = self.update_drag(pointer, now);
        self.session = None;
        self.resting = nearest;
        self.position.set_target(self.anchors.snap_position(nearest));
        self.release.schedule(now + self.release_grace, ());
        self.last_tick = Some(now);
        log::debug!("drag released, snapping to {}", nearest);
        nearest
    }

    /// Abort a drag without choosing a new anchor; the element springs back.
    pub fn cancel_drag(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag cancelled, returning to {}", self.resting);
        }
        self.release.cancel();
        self.dragging = false;
        self.highlight = None;
        self.position.set_target(self.anchors.snap_position(self.resting));
    }

    /// Advance the snap spring and expire the release grace.
    pub fn tick(&mut self, now: Instant) -> Point {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        if self.release.poll(now).is_some() {
            self.dragging = false;
            self.highlight = None;
        }

        if self.session.is_some() {
            self.position.value()
        } else {
            self.position.step(dt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> DragController {
        DragController::from_config(&GalleryConfig::default())
    }

    fn settle(drag: &mut DragController, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..180 {
            now += ms(16);
            drag.tick(now);
        }
        now
    }

    #[test]
    fn test_initial_rest_on_bottom() {
        let drag = controller();
        assert_eq!(drag.resting_anchor(), AnchorKey::Bottom);
        assert_eq!(drag.position(), Point::new(312.0, 448.0));
        assert_eq!(drag.center(), Point::new(320.0, 456.0));
        assert!(!drag.is_dragging());
        assert!(drag.highlighted().is_none());
    }

    #[test]
    fn test_begin_clears_highlight() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.update_drag(Point::new(40.0, 240.0), t0);
        assert_eq!(drag.highlighted(), Some(AnchorKey::Left));
        drag.begin_drag(drag.center(), t0 + ms(5));
        assert!(drag.highlighted().is_none());
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_update_is_idempotent() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        let pointer = Point::new(500.0, 260.0);
        let first = drag.update_drag(pointer, t0);
        for i in 1..10 {
            assert_eq!(drag.update_drag(pointer, t0 + ms(i)), first);
        }
        assert_eq!(first, AnchorKey::Right);
        assert_eq!(drag.position(), Point::new(492.0, 252.0));
    }

    #[test]
    fn test_grab_keeps_offset_and_highlight_waits_for_move() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(Point::new(323.0, 458.0), t0);
        assert_eq!(drag.position(), Point::new(312.0, 448.0));
        assert!(drag.highlighted().is_none());
        assert_eq!(drag.session().unwrap().nearest, None);

        drag.update_drag(Point::new(503.0, 252.0), t0 + ms(16));
        assert_eq!(drag.center(), Point::new(500.0, 250.0));
        assert_eq!(drag.highlighted(), Some(AnchorKey::Right));

        let key = drag.end_drag(Point::new(93.0, 242.0), t0 + ms(32));
        assert_eq!(key, AnchorKey::Left);
        assert_eq!(drag.position(), Point::new(82.0, 232.0));
    }

    #[test]
    fn test_drag_outside_is_clamped_before_snapping() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.update_drag(Point::new(-300.0, 250.0), t0);
        assert_eq!(drag.position(), Point::new(0.0, 242.0));
        let session = drag.session().unwrap();
        assert_eq!(session.nearest, Some(AnchorKey::Left));
    }

    #[test]
    fn test_end_drag_snaps_to_nearest() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.update_drag(Point::new(300.0, 100.0), t0 + ms(10));
        let key = drag.end_drag(Point::new(300.0, 60.0), t0 + ms(20));

        assert_eq!(key, AnchorKey::Top);
        assert_eq!(drag.resting_anchor(), AnchorKey::Top);
        assert!(drag.session().is_none());
        assert!(drag.is_animating());

        settle(&mut drag, t0 + ms(20));
        assert!(!drag.is_animating());
        assert_eq!(drag.center(), Point::new(320.0, 24.0));
    }

    #[test]
    fn test_release_grace_delay() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.end_drag(Point::new(600.0, 240.0), t0 + ms(50));

        drag.tick(t0 + ms(149));
        assert!(drag.is_dragging());
        assert_eq!(drag.highlighted(), Some(AnchorKey::Right));

        drag.tick(t0 + ms(150));
        assert!(!drag.is_dragging());
        assert!(drag.highlighted().is_none());
    }

    #[test]
    fn test_new_drag_during_grace_keeps_dragging() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.end_drag(Point::new(600.0, 240.0), t0);
        drag.begin_drag(drag.center(), t0 + ms(50));
        drag.update_drag(Point::new(40.0, 240.0), t0 + ms(60));

        drag.tick(t0 + ms(200));
        assert!(drag.is_dragging());
        assert_eq!(drag.highlighted(), Some(AnchorKey::Left));
    }

    #[test]
    fn test_spring_starts_from_release_point() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.end_drag(Point::new(100.0, 240.0), t0);
        assert_eq!(drag.position(), Point::new(92.0, 232.0));

        let after = drag.tick(t0 + ms(16));
        assert!(after.x < 92.0);
        assert!(after.x > 16.0);
    }

    #[test]
    fn test_cancel_returns_to_resting_anchor() {
        let t0 = Instant::now();
        let mut drag = controller();
        drag.begin_drag(drag.center(), t0);
        drag.update_drag(Point::new(40.0, 240.0), t0);
        drag.cancel_drag();
        assert!(!drag.is_dragging());
        assert_eq!(drag.resting_anchor(), AnchorKey::Bottom);
        settle(&mut drag, t0);
        assert_eq!(drag.position(), Point::new(312.0, 448.0));
    }

    #[test]
    fn test_hit_test() {
        let drag = controller();
        assert!(drag.hit_test(Point::new(320.0, 456.0)));
        assert!(!drag.hit_test(Point::new(320.0, 400.0)));
    }
}
