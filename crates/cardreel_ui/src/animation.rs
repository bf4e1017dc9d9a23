//! Time-boxed linear tweens.
//!
//! A [`Tween`] carries its own start, target, elapsed time and duration, so
//! it can be advanced one frame at a time and dropped at any point.

/// Linear interpolation between `a` and `b`, `t` clamped to 0-1.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// One value moving from `start` to `target` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
    current: f32,
}

impl Tween {
    /// Creates a tween at its start value.
    #[must_use]
    pub fn new(start: f32, target: f32, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
            current: start,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Value the tween started from.
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Value the tween ends on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Seconds advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total length in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Returns true once the target has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances by `dt` seconds and returns the new value.
    ///
    /// The frame that crosses `duration` lands exactly on the target.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.is_complete() {
            self.current = self.target;
            return self.current;
        }

        self.elapsed += dt.max(0.0);
        self.current = if self.is_complete() {
            self.target
        } else {
            lerp(self.start, self.target, self.elapsed / self.duration)
        };
        self.current
    }
}
