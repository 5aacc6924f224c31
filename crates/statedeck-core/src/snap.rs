//! Anchor points and nearest-anchor snapping for the drag arena.

use std::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;

/// Stable key of one of the four edge anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKey {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnchorKey {
    /// Iteration order. Ties go to the earliest key.
    pub const ALL: [AnchorKey; 4] = [
        AnchorKey::Top,
        AnchorKey::Bottom,
        AnchorKey::Left,
        AnchorKey::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorKey::Top => "top",
            AnchorKey::Bottom => "bottom",
            AnchorKey::Left => "left",
            AnchorKey::Right => "right",
        }
    }

    fn index(self) -> usize {
        match self {
            AnchorKey::Top => 0,
            AnchorKey::Bottom => 1,
            AnchorKey::Left => 2,
            AnchorKey::Right => 3,
        }
    }
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed snap point in arena coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub key: AnchorKey,
    pub point: Point,
}

impl Anchor {
    pub const fn new(key: AnchorKey, point: Point) -> Self {
        Self { key, point }
    }
}

/// Find the anchor closest to `center`.
///
/// Uses plain Euclidean distance. The first anchor reaching the minimum wins,
/// so ties resolve in top, bottom, left, right order.
pub fn nearest_anchor(center: Point, anchors: &[Anchor; 4]) -> AnchorKey {
    let mut best = anchors[0].key;
    let mut best_dist = center.distance(anchors[0].point);

    for anchor in &anchors[1..] {
        let dist = center.distance(anchor.point);
        if dist < best_dist {
            best_dist = dist;
            best = anchor.key;
        }
    }

    best
}

/// The four anchors of an arena plus the geometry of the element snapped to
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    anchors: [Anchor; 4],
    size: Size,
    element_half_size: f64,
}

impl AnchorSet {
    /// Place the anchors for an arena: each sits `inset + radius` from its
    /// edge, centered on the other axis.
    pub fn from_arena(arena: &ArenaConfig) -> Self {
        let (w, h) = (arena.width, arena.height);
        let edge = arena.anchor_edge_distance();
        let anchors = [
            Anchor::new(AnchorKey::Top, Point::new(w / 2.0, edge)),
            Anchor::new(AnchorKey::Bottom, Point::new(w / 2.0, h - edge)),
            Anchor::new(AnchorKey::Left, Point::new(edge, h / 2.0)),
            Anchor::new(AnchorKey::Right, Point::new(w - edge, h / 2.0)),
        ];
        Self {
            anchors,
            size: arena.size(),
            element_half_size: arena.element_half_size,
        }
    }

    pub fn anchors(&self) -> &[Anchor; 4] {
        &self.anchors
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn element_half_size(&self) -> f64 {
        self.element_half_size
    }

    /// Center of an anchor.
    pub fn point(&self, key: AnchorKey) -> Point {
        self.anchors[key.index()].point
    }

    /// Element top-left that puts the element's center on the anchor.
    pub fn snap_position(&self, key: AnchorKey) -> Point {
        self.point(key) - self.half_vec()
    }

    /// Nearest anchor to an element center.
    pub fn nearest(&self, center: Point) -> AnchorKey {
        nearest_anchor(center, &self.anchors)
    }

    /// Range the element's top-left may occupy so it stays fully inside.
    pub fn movement_bounds(&self) -> Rect {
        let footprint = 2.0 * self.element_half_size;
        Rect::new(
            0.0,
            0.0,
            (self.size.width - footprint).max(0.0),
            (self.size.height - footprint).max(0.0),
        )
    }

    /// Clamp an element top-left into the movement bounds.
    pub fn clamp_position(&self, top_left: Point) -> Point {
        let bounds = self.movement_bounds();
        Point::new(
            top_left.x.max(bounds.x0).min(bounds.x1),
            top_left.y.max(bounds.y0).min(bounds.y1),
        )
    }

    /// Element top-left for a pointer at the element center, clamped.
    pub fn position_for_pointer(&self, pointer: Point) -> Point {
        self.clamp_position(pointer - self.half_vec())
    }

    pub fn center_of(&self, top_left: Point) -> Point {
        top_left + self.half_vec()
    }

    /// Element rectangle for a top-left position.
    pub fn element_rect(&self, top_left: Point) -> Rect {
        let footprint = 2.0 * self.element_half_size;
        Rect::from_origin_size(top_left, Size::new(footprint, footprint))
    }

    fn half_vec(&self) -> Vec2 {
        Vec2::new(self.element_half_size, self.element_half_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> AnchorSet {
        AnchorSet::from_arena(&ArenaConfig::default())
    }

    #[test]
    fn test_reference_anchor_positions() {
        let set = reference();
        assert_eq!(set.point(AnchorKey::Top), Point::new(320.0, 24.0));
        assert_eq!(set.point(AnchorKey::Bottom), Point::new(320.0, 456.0));
        assert_eq!(set.point(AnchorKey::Left), Point::new(24.0, 240.0));
        assert_eq!(set.point(AnchorKey::Right), Point::new(616.0, 240.0));
    }

    #[test]
    fn test_snap_position_centers_element() {
        let set = reference();
        assert_eq!(set.snap_position(AnchorKey::Bottom), Point::new(312.0, 448.0));
        assert_eq!(
            set.center_of(set.snap_position(AnchorKey::Left)),
            set.point(AnchorKey::Left)
        );
    }

    #[test]
    fn test_nearest_left() {
        let set = reference();
        assert_eq!(set.nearest(Point::new(100.0, 240.0)), AnchorKey::Left);
        assert_eq!(set.nearest(Point::new(30.0, 200.0)), AnchorKey::Left);
    }

    #[test]
    fn test_nearest_each_edge() {
        let set = reference();
        assert_eq!(set.nearest(Point::new(320.0, 60.0)), AnchorKey::Top);
        assert_eq!(set.nearest(Point::new(320.0, 420.0)), AnchorKey::Bottom);
        assert_eq!(set.nearest(Point::new(600.0, 250.0)), AnchorKey::Right);
    }

    #[test]
    fn test_tie_resolves_to_first_in_order() {
        let set = reference();
        // Equidistant from top and bottom (216 each), closer than left/right.
        let center = Point::new(310.0, 240.0);
        let top = center.distance(set.point(AnchorKey::Top));
        let bottom = center.distance(set.point(AnchorKey::Bottom));
        assert_eq!(top, bottom);
        assert_eq!(set.nearest(center), AnchorKey::Top);

        // All four anchors tie at the center of a square arena.
        let square = AnchorSet::from_arena(&ArenaConfig {
            width: 400.0,
            height: 400.0,
            ..ArenaConfig::default()
        });
        assert_eq!(square.nearest(Point::new(200.0, 200.0)), AnchorKey::Top);
        assert_eq!(square.nearest(Point::new(200.0, 250.0)), AnchorKey::Bottom);
        assert_eq!(square.nearest(Point::new(250.0, 200.0)), AnchorKey::Right);
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        let set = reference();
        for xi in 0..=32 {
            for yi in 0..=24 {
                let p = Point::new(xi as f64 * 20.0, yi as f64 * 20.0);
                let min = set
                    .anchors()
                    .iter()
                    .map(|a| p.distance(a.point))
                    .fold(f64::INFINITY, f64::min);
                let key = set.nearest(p);
                assert_eq!(p.distance(set.point(key)), min);
                let first = set
                    .anchors()
                    .iter()
                    .find(|a| p.distance(a.point) == min)
                    .map(|a| a.key);
                assert_eq!(Some(key), first);
            }
        }
    }

    #[test]
    fn test_clamp_position() {
        let set = reference();
        assert_eq!(set.movement_bounds(), Rect::new(0.0, 0.0, 624.0, 464.0));
        assert_eq!(set.clamp_position(Point::new(-50.0, 900.0)), Point::new(0.0, 464.0));
        assert_eq!(set.clamp_position(Point::new(100.0, 100.0)), Point::new(100.0, 100.0));
        assert_eq!(
            set.position_for_pointer(Point::new(700.0, -10.0)),
            Point::new(624.0, 0.0)
        );
    }
}
