//! Pointer input the carousel reacts to.
//!
//! The host translates its own drag and wheel callbacks into
//! [`PointerEvent`]s; positions are in viewport space.

/// Horizontal direction of the most recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Content moving right (pointer dragged right, or wheel turned down).
    Positive,
    /// Content moving left. This is the direction before any input.
    #[default]
    Negative,
}

impl ScrollDirection {
    /// Direction of a drag from `previous_x` to `x`.
    ///
    /// A move with no horizontal change counts as negative.
    #[must_use]
    pub fn from_drag(previous_x: f32, x: f32) -> Self {
        if x > previous_x {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Direction of a wheel notch from its vertical delta.
    ///
    /// Returns `None` for a zero delta.
    #[must_use]
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::Positive)
        } else if delta_y > 0.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Returns true for [`ScrollDirection::Positive`].
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    /// `+1.0` or `-1.0`.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A pointer event routed to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A drag started at this position.
    BeginDrag {
        /// Pointer position (x, y).
        position: (f32, f32),
    },
    /// The pointer moved during a drag.
    Drag {
        /// Pointer position (x, y).
        position: (f32, f32),
    },
    /// The drag ended.
    EndDrag,
    /// A discrete scroll (mouse wheel notch).
    Scroll {
        /// Scroll delta (x, y). Only the sign of `y` is used.
        delta: (f32, f32),
    },
}
