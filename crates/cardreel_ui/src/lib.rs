//! # Cardreel Carousel
//!
//! A horizontally scrolling strip of card placeholders that snaps to card
//! positions and wraps around forever, built from a fixed pool.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      CAROUSEL PIPELINE                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  Pointer Events → Direction / Snap Flag → Tick → Surface   │
//! │        ↓                  ↓                ↓        ↓      │
//! │   Drag Anchor       Wheel Step        Snap Ease   Offset   │
//! │                                                     ↓      │
//! │                      Viewport Bounds → Infinite Wrap       │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns rendering, input dispatch and the scroll container. It
//! injects the container as a [`ScrollSurface`] and the visible area as a
//! [`Viewport`], then calls [`CardCarousel::tick`] once per frame.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod carousel;
pub mod config;
pub mod error;
pub mod fold;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod widget;

pub use animation::{lerp, Tween};
pub use carousel::{snap_target, CardCarousel, WrapEvent};
pub use config::CarouselConfig;
pub use error::{CarouselError, CarouselResult};
pub use fold::{DeckFold, FoldTask};
pub use input::{PointerEvent, ScrollDirection};
pub use layout::{PanelGeometry, Rect, StripLayout};
pub use scroll::{InertialScroll, ScrollSurface, Viewport};
pub use widget::{Placeholder, PlaceholderPool};
