//! # Cardreel
//!
//! A card hand shown as a snapping, endlessly looping carousel.
//!
//! ## Crates
//!
//! - [`cards`]: card identity, hand order, appearance registry
//! - [`ui`]: the carousel motion controller
//! - [`session`]: startup wiring for hosts
//!
//! ## Example
//!
//! ```rust,ignore
//! use cardreel::{HandSession, InertialScroll, PanelGeometry};
//!
//! let mut session = HandSession::from_files(
//!     "config/cards.toml",
//!     "config/carousel.toml",
//!     InertialScroll::new(),
//!     PanelGeometry::new(740.0, 900.0),
//! )?;
//!
//! // Every frame:
//! session.frame(dt, &viewport);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod session;

pub use cardreel_cards as cards;
pub use cardreel_ui as ui;

pub use cardreel_cards::{AppearanceManifest, AppearanceRegistry, Card, Hand, Suit};
pub use cardreel_ui::{
    CardCarousel, CarouselConfig, InertialScroll, PanelGeometry, PointerEvent, Rect, ScrollSurface,
    Viewport, WrapEvent,
};
pub use session::{HandSession, SessionError, SessionResult};
