//! Capabilities the host injects: the scroll container and the viewport.

use crate::layout::Rect;

/// The scrollable content container.
///
/// The carousel reads and writes the content's horizontal offset and the
/// container's inertial velocity through this trait and nothing else.
pub trait ScrollSurface {
    /// Horizontal content offset.
    fn offset(&self) -> f32;

    /// Moves the content to `offset`.
    fn set_offset(&mut self, offset: f32);

    /// Inertial velocity (x, y).
    fn velocity(&self) -> (f32, f32);

    /// Replaces the inertial velocity.
    fn set_velocity(&mut self, velocity: (f32, f32));

    /// Magnitude of the inertial velocity.
    fn speed(&self) -> f32 {
        let (vx, vy) = self.velocity();
        (vx * vx + vy * vy).sqrt()
    }
}

/// The visible window onto the strip, in the same space as placeholder
/// world positions.
pub trait Viewport {
    /// Horizontal center.
    fn center_x(&self) -> f32;

    /// Width.
    fn width(&self) -> f32;
}

impl Viewport for Rect {
    fn center_x(&self) -> f32 {
        self.center().0
    }

    fn width(&self) -> f32 {
        self.width
    }
}

/// A self-contained scroll container with inertia.
///
/// Drags move the content directly and record a release velocity; between
/// drags the velocity decays exponentially and is integrated into the
/// offset. Hosts without their own scroll container can drive the carousel
/// with this.
#[derive(Debug, Clone, PartialEq)]
pub struct InertialScroll {
    offset: f32,
    velocity: (f32, f32),
    deceleration_rate: f32,
    dragging: bool,
}

impl InertialScroll {
    /// Fraction of velocity kept after one second of free motion.
    pub const DEFAULT_DECELERATION_RATE: f32 = 0.135;

    /// Velocity below which free motion stops.
    pub const REST_SPEED: f32 = 1.0;

    /// Creates a container at rest at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            velocity: (0.0, 0.0),
            deceleration_rate: Self::DEFAULT_DECELERATION_RATE,
            dragging: false,
        }
    }

    /// Sets the deceleration rate (clamped to 0-1).
    #[must_use]
    pub fn with_deceleration_rate(mut self, rate: f32) -> Self {
        self.deceleration_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a drag; inertia stops.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.velocity = (0.0, 0.0);
    }

    /// Moves the content by `dx` over `dt` seconds of dragging.
    pub fn drag_by(&mut self, dx: f32, dt: f32) {
        self.offset += dx;
        if dt > 0.0 {
            self.velocity = (dx / dt, 0.0);
        }
    }

    /// Ends the drag, keeping the last drag velocity as inertia.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Applies one frame of free motion.
    pub fn integrate(&mut self, dt: f32) {
        if self.dragging || dt <= 0.0 {
            return;
        }

        let decay = self.deceleration_rate.powf(dt);
        self.velocity.0 *= decay;
        self.velocity.1 *= decay;
        if self.velocity.0.abs() < Self::REST_SPEED {
            self.velocity.0 = 0.0;
        }
        if self.velocity.1.abs() < Self::REST_SPEED {
            self.velocity.1 = 0.0;
        }

        self.offset += self.velocity.0 * dt;
    }
}

impl Default for InertialScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSurface for InertialScroll {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: (f32, f32)) {
        self.velocity = velocity;
    }
}
