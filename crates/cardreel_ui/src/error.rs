//! # Carousel Error Types

use cardreel_cards::CardError;
use thiserror::Error;

/// Errors that can occur while setting up the carousel.
///
/// Nothing fails once the carousel is running; per-frame and per-event
/// operations are infallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// A setting is out of range or not finite.
    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(String),

    /// Panel geometry handed over by the host is unusable.
    #[error("invalid panel geometry: {0}")]
    InvalidGeometry(String),

    /// The hand model rejected an operation during layout.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Result type for carousel setup.
pub type CarouselResult<T> = Result<T, CarouselError>;
