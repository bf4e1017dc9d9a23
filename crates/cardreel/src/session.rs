//! # Hand Session
//!
//! Startup order, made explicit:
//!
//! ```text
//! 1. LOAD      manifest → AppearanceRegistry (must be complete)
//! 2. DEAL      registry → starting Hand, sorted once
//! 3. LAY OUT   Hand → CardCarousel placeholders, transforms bound
//! 4. RUN       frame(dt) + pointer events for the rest of the session
//! ```
//!
//! Any failure in steps 1-3 is a configuration error and ends startup.

use std::path::Path;

use cardreel_cards::{AppearanceManifest, AppearanceRegistry, Card, CardError, Hand, TransformId};
use cardreel_ui::{
    CardCarousel, CarouselConfig, CarouselError, PanelGeometry, Placeholder, PointerEvent,
    ScrollSurface, Viewport, WrapEvent,
};
use thiserror::Error;

/// Errors that abort session startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The hand model could not be built.
    #[error("card setup failed: {0}")]
    Cards(#[from] CardError),

    /// The carousel could not be laid out.
    #[error("carousel setup failed: {0}")]
    Carousel(#[from] CarouselError),
}

/// Result type for session startup.
pub type SessionResult<T> = Result<T, SessionError>;

/// The registry, the hand and the carousel showing it.
#[derive(Debug)]
pub struct HandSession<S> {
    registry: AppearanceRegistry,
    hand: Hand,
    carousel: CardCarousel<S>,
    last_offset: f32,
}

impl<S: ScrollSurface> HandSession<S> {
    /// Runs startup from an in-memory manifest and config.
    ///
    /// # Errors
    ///
    /// Returns the first startup failure.
    pub fn start(
        manifest: &AppearanceManifest,
        config: CarouselConfig,
        surface: S,
        geometry: PanelGeometry,
    ) -> SessionResult<Self> {
        let registry = AppearanceRegistry::from_manifest(manifest)?;
        registry.ensure_complete()?;

        let hand = Hand::starting(&registry)?;
        let carousel = CardCarousel::new(config, surface, &hand, geometry)?;
        let last_offset = carousel.offset();

        tracing::info!("Hand session started with {} cards", hand.cards().len());

        Ok(Self {
            registry,
            hand,
            carousel,
            last_offset,
        })
    }

    /// Runs startup from a manifest file and a config file.
    ///
    /// # Errors
    ///
    /// Returns the first read, parse or startup failure.
    pub fn from_files(
        manifest_path: impl AsRef<Path>,
        config_path: impl AsRef<Path>,
        surface: S,
        geometry: PanelGeometry,
    ) -> SessionResult<Self> {
        let manifest = AppearanceManifest::from_toml_file(manifest_path)?;
        let config = CarouselConfig::from_toml_file(config_path)?;
        Self::start(&manifest, config, surface, geometry)
    }

    /// One host frame: controller tick, then wrap checks if the content moved.
    ///
    /// Returns the last wrap of the frame, if any.
    pub fn frame(&mut self, dt: f32, viewport: &impl Viewport) -> Option<WrapEvent> {
        self.carousel.tick(dt);
        self.after_movement(viewport)
    }

    /// Routes a pointer event, then checks for wraps if the content moved.
    pub fn handle_event(&mut self, event: PointerEvent, viewport: &impl Viewport) -> Option<WrapEvent> {
        self.carousel.handle_event(event);
        self.after_movement(viewport)
    }

    /// Lets the host report that its scroll container moved the content.
    pub fn content_moved(&mut self, viewport: &impl Viewport) -> Option<WrapEvent> {
        self.after_movement(viewport)
    }

    /// Recycles placeholders until the leading one is back in view.
    ///
    /// A move of several steps needs several wraps. One full rotation of the
    /// pool is the most a single move can use.
    fn after_movement(&mut self, viewport: &impl Viewport) -> Option<WrapEvent> {
        let offset = self.carousel.offset();
        if offset == self.last_offset {
            return None;
        }
        self.last_offset = offset;

        let mut last = None;
        for _ in 0..self.carousel.placeholders().len() {
            match self.carousel.handle_infinite_scrolling(viewport) {
                Some(wrap) => last = Some(wrap),
                None => break,
            }
        }
        last
    }

    /// The appearance registry.
    #[must_use]
    pub fn registry(&self) -> &AppearanceRegistry {
        &self.registry
    }

    /// The sorted hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The carousel.
    #[must_use]
    pub fn carousel(&self) -> &CardCarousel<S> {
        &self.carousel
    }

    /// Mutable carousel access, for host-driven inertia and deck folds.
    pub fn carousel_mut(&mut self) -> &mut CardCarousel<S> {
        &mut self.carousel
    }

    /// The card shown by a placeholder.
    #[must_use]
    pub fn card_for(&self, id: TransformId) -> Option<&Card> {
        self.hand.iter().find(|card| card.transform().ok() == Some(id))
    }

    /// Asset key a placeholder should draw.
    #[must_use]
    pub fn asset_key(&self, placeholder: &Placeholder) -> Option<&str> {
        self.registry.asset_key(placeholder.appearance())
    }
}
