//! Carousel settings.
//!
//! Loaded once at startup, usually from TOML:
//!
//! ```toml
//! card_width = 140.0
//! card_spacing = 45.0
//! snap_speed = 1200.0
//! bounds_threshold = 40.0
//! fold_duration = 0.2
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// Smallest snap step the controller will divide by.
pub const MIN_STEP: f32 = 1e-3;

/// Serialized carousel settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Width of one card visual.
    pub card_width: f32,
    /// Gap between adjacent cards.
    pub card_spacing: f32,
    /// Snap easing speed, in offset units per second.
    pub snap_speed: f32,
    /// Slack past the viewport edge before a card wraps.
    pub bounds_threshold: f32,
    /// Inertial speed below which a pending snap starts moving.
    pub snap_velocity_threshold: f32,
    /// Distance to target at which a snap counts as settled.
    pub snap_epsilon: f32,
    /// Cards' worth of margin left of the centered strip at layout.
    pub leading_margin_cards: f32,
    /// Deck fold duration in seconds.
    pub fold_duration: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: 140.0,
            card_spacing: 45.0,
            snap_speed: 1200.0,
            bounds_threshold: 40.0,
            snap_velocity_threshold: 100.0,
            snap_epsilon: 0.01,
            leading_margin_cards: 2.0,
            fold_duration: 0.2,
        }
    }
}

impl CarouselConfig {
    /// Distance between adjacent card positions.
    #[inline]
    #[must_use]
    pub fn step(&self) -> f32 {
        self.card_width + self.card_spacing
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidConfig`] on a parse or range failure.
    pub fn from_toml_str(text: &str) -> CarouselResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CarouselError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidConfig`] if the file cannot be read,
    /// parsed or validated.
    pub fn from_toml_file(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CarouselError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every setting is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidConfig`] naming the first bad setting.
    pub fn validate(&self) -> CarouselResult<()> {
        let fields = [
            ("card_width", self.card_width),
            ("card_spacing", self.card_spacing),
            ("snap_speed", self.snap_speed),
            ("bounds_threshold", self.bounds_threshold),
            ("snap_velocity_threshold", self.snap_velocity_threshold),
            ("snap_epsilon", self.snap_epsilon),
            ("leading_margin_cards", self.leading_margin_cards),
            ("fold_duration", self.fold_duration),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }

        if self.card_width <= 0.0 {
            return Err(invalid(format!("card_width must be positive, got {}", self.card_width)));
        }
        if self.card_spacing < 0.0 {
            return Err(invalid(format!("card_spacing must not be negative, got {}", self.card_spacing)));
        }
        if self.step() < MIN_STEP {
            return Err(invalid(format!("card step {} is below {MIN_STEP}", self.step())));
        }
        if self.snap_speed <= 0.0 {
            return Err(invalid(format!("snap_speed must be positive, got {}", self.snap_speed)));
        }
        if self.snap_velocity_threshold < 0.0 {
            return Err(invalid("snap_velocity_threshold must not be negative".to_owned()));
        }
        if self.snap_epsilon <= 0.0 {
            return Err(invalid("snap_epsilon must be positive".to_owned()));
        }
        if self.fold_duration < 0.0 {
            return Err(invalid("fold_duration must not be negative".to_owned()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CarouselError {
    CarouselError::InvalidConfig(message)
}
