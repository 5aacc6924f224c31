//! Damped spring animation for snapping and pill resizing.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Largest integration step in seconds. Longer frames are sub-stepped.
pub const MAX_STEP: f64 = 1.0 / 240.0;

/// Displacement below which the spring may come to rest.
pub const REST_DELTA: f64 = 0.01;

/// Speed below which the spring may come to rest.
pub const REST_SPEED: f64 = 0.01;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParams {
    /// Drag release snap (stiffness 500, damping 30).
    pub const SNAP: Self = Self::new(500.0, 30.0);

    /// Indicator pill resize (stiffness 300, damping 25).
    pub const PILL: Self = Self::new(300.0, 25.0);

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Ratio of damping to critical damping. 1.0 means critically damped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SNAP
    }
}

/// A one-dimensional spring-driven value.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
    at_rest: bool,
}

impl Spring {
    /// Create a spring resting at `value`.
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Start animating towards a new target, keeping the current velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        if self.value != target || self.velocity != 0.0 {
            self.at_rest = false;
        }
    }

    /// Place the value immediately and stop any motion.
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance the simulation by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest {
            return self.value;
        }

        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;

        // Semi-implicit Euler, sub-stepped for stability on long frames
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        self.value
    }
}

/// A 2-D point animated by a pair of springs sharing the same parameters.
#[derive(Debug, Clone, Copy)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    pub fn new(point: Point, params: SpringParams) -> Self {
        Self {
            x: Spring::new(point.x, params),
            y: Spring::new(point.y, params),
        }
    }

    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, point: Point) {
        self.x.jump_to(point.x);
        self.y.jump_to(point.y);
    }

    pub fn step(&mut self, dt: f64) -> Point {
        Point::new(self.x.step(dt), self.y.step(dt))
    }
}
