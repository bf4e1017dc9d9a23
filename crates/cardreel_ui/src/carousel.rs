//! # Card Carousel
//!
//! The motion controller. Continuous state is the content offset and
//! velocity (held by the injected [`ScrollSurface`]), the last drag anchor,
//! the direction of the latest movement and a latched snap flag.
//!
//! ```text
//!            BeginDrag / Scroll
//!   ┌──────────────────────────────────┐
//!   ▼                                  │
//! ┌──────────┐   EndDrag   ┌──────────────┐
//! │  FREE    │ ──────────> │ SNAP PENDING │
//! │  SCROLL  │ <────────── │              │
//! └──────────┘   settled   └──────────────┘
//! ```
//!
//! While a snap is pending, each tick waits for inertia to drop below the
//! velocity threshold, then eases the offset toward the nearest multiple of
//! the card step.
//!
//! Wrapping is independent of snapping: the host calls
//! [`CardCarousel::handle_infinite_scrolling`] whenever the content moves,
//! and the leading placeholder is recycled to the far end once it leaves
//! the viewport.

use cardreel_cards::{Hand, TransformId};

use crate::config::{CarouselConfig, MIN_STEP};
use crate::error::CarouselResult;
use crate::fold::DeckFold;
use crate::input::{PointerEvent, ScrollDirection};
use crate::layout::{PanelGeometry, StripLayout};
use crate::scroll::{ScrollSurface, Viewport};
use crate::widget::PlaceholderPool;

/// Nearest multiple of `step` to `offset`.
///
/// Returns `offset` unchanged when `step` is too small to divide by.
#[inline]
#[must_use]
pub fn snap_target(offset: f32, step: f32) -> f32 {
    if !step.is_finite() || step.abs() < MIN_STEP {
        return offset;
    }
    (offset / step).round() * step
}

/// A placeholder recycled from one end of the strip to the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapEvent {
    /// The placeholder that moved.
    pub placeholder: TransformId,
    /// Scroll direction that pushed it out of view.
    pub direction: ScrollDirection,
    /// Its new local x.
    pub new_local_x: f32,
    /// Its new sibling index (0 or the last index).
    pub new_index: usize,
}

/// Snapping, infinitely wrapping card strip.
#[derive(Debug)]
pub struct CardCarousel<S> {
    config: CarouselConfig,
    surface: S,
    pool: PlaceholderPool,
    fold: DeckFold,
    closest_position: f32,
    snap_pending: bool,
    direction: ScrollDirection,
    last_drag_pos: (f32, f32),
}

impl<S: ScrollSurface> CardCarousel<S> {
    /// Lays out the hand and resets the content offset to 0.
    ///
    /// Each card's transform is pointed at its new placeholder.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or geometry, or if the hand has already
    /// been laid out.
    pub fn new(
        config: CarouselConfig,
        mut surface: S,
        hand: &Hand,
        geometry: PanelGeometry,
    ) -> CarouselResult<Self> {
        config.validate()?;
        geometry.validate()?;

        surface.set_offset(0.0);
        let pool = PlaceholderPool::layout(hand, &StripLayout::from_config(&config), geometry.content_width)?;
        let fold = DeckFold::new(geometry.layout_width, config.fold_duration);

        tracing::info!(
            "Card carousel laid out: {} placeholders, step {:.1}",
            pool.len(),
            config.step()
        );

        Ok(Self {
            config,
            surface,
            pool,
            fold,
            closest_position: 0.0,
            snap_pending: false,
            direction: ScrollDirection::default(),
            last_drag_pos: (0.0, 0.0),
        })
    }

    /// Per-frame update. `dt` is seconds since the last tick.
    pub fn tick(&mut self, dt: f32) {
        self.closest_position = snap_target(self.surface.offset(), self.config.step());
        if self.snap_pending {
            self.snap_step(dt);
        }
        self.fold.advance(dt);
    }

    /// One frame of snap easing.
    fn snap_step(&mut self, dt: f32) {
        if self.surface.speed() >= self.config.snap_velocity_threshold {
            return;
        }
        self.surface.set_velocity((0.0, 0.0));

        let offset = self.surface.offset();
        let distance = (self.closest_position - offset).abs();
        if distance > f32::EPSILON {
            let t = (self.config.snap_speed * dt / distance).clamp(0.0, 1.0);
            self.surface.set_offset(offset + (self.closest_position - offset) * t);
        }

        if (self.surface.offset() - self.closest_position).abs() < self.config.snap_epsilon {
            self.snap_pending = false;
            tracing::debug!("Snap settled at {:.2}", self.closest_position);
        }
    }

    /// Routes a pointer event to its handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::BeginDrag { position } => self.on_begin_drag(position),
            PointerEvent::Drag { position } => self.on_drag(position),
            PointerEvent::EndDrag => self.on_end_drag(),
            PointerEvent::Scroll { delta } => self.on_scroll(delta),
        }
    }

    /// A drag started: cancel any pending snap and anchor the pointer.
    pub fn on_begin_drag(&mut self, position: (f32, f32)) {
        self.snap_pending = false;
        self.last_drag_pos = position;
    }

    /// The pointer moved during a drag.
    pub fn on_drag(&mut self, position: (f32, f32)) {
        self.direction = ScrollDirection::from_drag(self.last_drag_pos.0, position.0);
        self.last_drag_pos = position;
    }

    /// The drag ended: arm the snap and let inertia run out first.
    pub fn on_end_drag(&mut self) {
        self.snap_pending = true;
        tracing::debug!("Snap armed at offset {:.2}", self.surface.offset());
    }

    /// A wheel notch: jump one card step, no animation.
    ///
    /// Wheel down (negative y) steps positive. A zero delta is ignored.
    pub fn on_scroll(&mut self, delta: (f32, f32)) {
        let Some(direction) = ScrollDirection::from_wheel(delta.1) else {
            return;
        };

        self.direction = direction;
        self.snap_pending = false;
        self.surface.set_velocity((0.0, 0.0));

        let step = self.config.step();
        let target = snap_target(self.surface.offset(), step) + direction.sign() * step;
        self.surface.set_offset(target);
        self.closest_position = target;

        tracing::debug!("Wheel step {:?} to {:.2}", direction, target);
    }

    /// Recycles the leading placeholder if it has left the viewport.
    ///
    /// Scrolling positive, the last placeholder is checked against the right
    /// bound and moves one step left of the first; scrolling negative, the
    /// first is checked against the left bound and moves one step right of
    /// the last. At most one placeholder moves per call.
    pub fn handle_infinite_scrolling(&mut self, viewport: &impl Viewport) -> Option<WrapEvent> {
        let positive = self.direction.is_positive();
        let leading = if positive { self.pool.last()? } else { self.pool.first()? };

        if !self.is_out_of_view(leading.world_x(self.surface.offset()), viewport) {
            return None;
        }

        let step = self.config.step();
        let (placeholder, new_local_x, new_index) = if positive {
            let new_x = self.pool.first()?.local_x() - step;
            (self.pool.wrap_last_to_front(new_x)?, new_x, 0)
        } else {
            let new_x = self.pool.last()?.local_x() + step;
            (self.pool.wrap_first_to_back(new_x)?, new_x, self.pool.len() - 1)
        };

        tracing::debug!(
            "Wrapped placeholder {} to x {:.1} (index {})",
            placeholder.raw(),
            new_local_x,
            new_index
        );

        Some(WrapEvent {
            placeholder,
            direction: self.direction,
            new_local_x,
            new_index,
        })
    }

    /// True if a card centered at `world_x` is fully past the viewport
    /// bound (plus slack) on the side the strip is moving toward.
    fn is_out_of_view(&self, world_x: f32, viewport: &impl Viewport) -> bool {
        let half_card = self.config.card_width * 0.5;
        let reach = viewport.width() * 0.5 + self.config.bounds_threshold;

        if self.direction.is_positive() {
            world_x - half_card > viewport.center_x() + reach
        } else {
            world_x + half_card < viewport.center_x() - reach
        }
    }

    /// Flips the deck fold. The host decides when, if ever, to call this.
    pub fn on_toggle_deck(&mut self) {
        self.fold.toggle();
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The injected scroll container.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the scroll container, for the host's own inertia.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current content offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.surface.offset()
    }

    /// Snap target computed by the last tick or wheel step.
    #[must_use]
    pub fn closest_position(&self) -> f32 {
        self.closest_position
    }

    /// True while a snap is pending.
    #[must_use]
    pub fn is_snap_pending(&self) -> bool {
        self.snap_pending
    }

    /// Direction of the most recent movement.
    #[must_use]
    pub fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    /// True if the most recent movement was positive.
    #[must_use]
    pub fn is_positive_scroll(&self) -> bool {
        self.direction.is_positive()
    }

    /// Last recorded drag pointer position.
    #[must_use]
    pub fn last_drag_position(&self) -> (f32, f32) {
        self.last_drag_pos
    }

    /// The placeholder pool in sibling order.
    #[must_use]
    pub fn placeholders(&self) -> &PlaceholderPool {
        &self.pool
    }

    /// Viewport-space x of the placeholder at sibling `index`.
    #[must_use]
    pub fn world_x(&self, index: usize) -> Option<f32> {
        self.pool.get(index).map(|p| p.world_x(self.surface.offset()))
    }

    /// Deck fold state.
    #[must_use]
    pub fn fold(&self) -> &DeckFold {
        &self.fold
    }

    /// Current width of the deck layout panel.
    #[must_use]
    pub fn layout_width(&self) -> f32 {
        self.fold.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::scroll::InertialScroll;
    use cardreel_cards::{AppearanceManifest, AppearanceRegistry};

    const DT: f32 = 1.0 / 60.0;

    fn carousel() -> CardCarousel<InertialScroll> {
        let registry = AppearanceRegistry::from_manifest(&AppearanceManifest::conventional("s")).unwrap();
        let hand = Hand::starting(&registry).unwrap();
        let config = CarouselConfig {
            card_width: 100.0,
            card_spacing: 20.0,
            snap_speed: 600.0,
            bounds_threshold: 10.0,
            ..CarouselConfig::default()
        };
        CardCarousel::new(config, InertialScroll::new(), &hand, PanelGeometry::new(0.0, 800.0)).unwrap()
    }

    #[test]
    fn test_snap_target_idempotent() {
        for offset in [-1000.3, -60.0, -59.9, 0.0, 0.4, 59.99, 60.0, 181.0, 12_345.6] {
            let once = snap_target(offset, 120.0);
            assert_eq!(snap_target(once, 120.0), once);
        }
    }

    #[test]
    fn test_snap_target_guards_zero_step() {
        assert_eq!(snap_target(42.0, 0.0), 42.0);
        assert_eq!(snap_target(42.0, f32::NAN), 42.0);
    }

    #[test]
    fn test_snap_at_target_does_not_move() {
        let mut c = carousel();
        c.surface_mut().set_offset(240.0);
        c.on_end_drag();
        c.tick(DT);

        assert_eq!(c.offset(), 240.0);
        assert!(c.offset().is_finite());
        assert!(!c.is_snap_pending());
    }

    #[test]
    fn test_snap_waits_for_inertia() {
        let mut c = carousel();
        c.surface_mut().set_offset(50.0);
        c.surface_mut().set_velocity((150.0, 0.0));
        c.on_end_drag();
        c.tick(DT);

        assert_eq!(c.offset(), 50.0);
        assert!(c.is_snap_pending());

        c.surface_mut().set_velocity((99.0, 0.0));
        c.tick(DT);
        assert_eq!(c.surface().velocity(), (0.0, 0.0));
        // Target 0, distance 50, 10 units this frame.
        assert!((c.offset() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_snap_settles_on_step_multiple() {
        let mut c = carousel();
        c.surface_mut().set_offset(-170.0);
        c.on_end_drag();

        for _ in 0..120 {
            c.tick(DT);
        }

        assert!(!c.is_snap_pending());
        assert!((c.offset() + 120.0).abs() < 0.01);
    }

    #[test]
    fn test_begin_drag_cancels_snap() {
        let mut c = carousel();
        c.surface_mut().set_offset(30.0);
        c.on_end_drag();
        c.on_begin_drag((5.0, 5.0));
        c.tick(DT);

        assert!(!c.is_snap_pending());
        assert_eq!(c.offset(), 30.0);
        assert_eq!(c.last_drag_position(), (5.0, 5.0));
    }

    #[test]
    fn test_drag_tracks_direction() {
        let mut c = carousel();
        c.handle_event(PointerEvent::BeginDrag { position: (100.0, 0.0) });
        c.handle_event(PointerEvent::Drag { position: (120.0, 3.0) });
        assert!(c.is_positive_scroll());

        c.handle_event(PointerEvent::Drag { position: (90.0, 3.0) });
        assert_eq!(c.scroll_direction(), ScrollDirection::Negative);
        assert_eq!(c.last_drag_position(), (90.0, 3.0));
    }

    #[test]
    fn test_wheel_steps_from_snap_target() {
        let mut c = carousel();
        c.surface_mut().set_offset(130.0);
        c.surface_mut().set_velocity((400.0, 0.0));
        c.on_end_drag();

        c.on_scroll((0.0, -1.0));
        assert_eq!(c.offset(), 240.0);
        assert!(c.is_positive_scroll());
        assert!(!c.is_snap_pending());
        assert_eq!(c.surface().velocity(), (0.0, 0.0));

        c.on_scroll((0.0, 1.0));
        assert_eq!(c.offset(), 120.0);
        assert!(!c.is_positive_scroll());
    }

    #[test]
    fn test_zero_wheel_delta_ignored() {
        let mut c = carousel();
        c.surface_mut().set_offset(17.0);
        c.on_scroll((3.0, 0.0));
        assert_eq!(c.offset(), 17.0);
    }

    #[test]
    fn test_wrap_positive_moves_last_to_front() {
        let mut c = carousel();
        // Bounds at +/-610 once the slack is added.
        let viewport = Rect::centered(0.0, 0.0, 1200.0, 200.0);
        c.on_begin_drag((0.0, 0.0));
        c.on_drag((10.0, 0.0));

        // Layout runs -210 to 630; the last card's left edge sits at 580.
        assert_eq!(c.handle_infinite_scrolling(&viewport), None);

        let last = c.placeholders().last().unwrap().id();
        c.surface_mut().set_offset(100.0);
        let wrap = c.handle_infinite_scrolling(&viewport).unwrap();

        assert_eq!(wrap.placeholder, last);
        assert_eq!(wrap.direction, ScrollDirection::Positive);
        assert_eq!(wrap.new_index, 0);
        assert_eq!(wrap.new_local_x, -330.0);
        assert_eq!(c.placeholders().first().unwrap().id(), last);
        assert_eq!(c.placeholders().len(), 8);

        // The new last card (510 + 100 - 50) is still inside.
        assert_eq!(c.handle_infinite_scrolling(&viewport), None);
    }

    #[test]
    fn test_wrap_negative_moves_first_to_back() {
        let mut c = carousel();
        let viewport = Rect::centered(0.0, 0.0, 1200.0, 200.0);
        assert_eq!(c.handle_infinite_scrolling(&viewport), None);

        // Default direction is negative; first card's right edge -210 - 520 + 50.
        c.surface_mut().set_offset(-520.0);
        let first = c.placeholders().first().unwrap().id();
        let wrap = c.handle_infinite_scrolling(&viewport).unwrap();

        assert_eq!(wrap.placeholder, first);
        assert_eq!(wrap.direction, ScrollDirection::Negative);
        assert_eq!(wrap.new_index, 7);
        assert_eq!(wrap.new_local_x, 750.0);
        assert_eq!(c.placeholders().last().unwrap().id(), first);
        assert_eq!(c.world_x(7), Some(230.0));
    }

    #[test]
    fn test_toggle_deck_runs_fold() {
        let mut c = carousel();
        assert_eq!(c.layout_width(), 800.0);

        c.on_toggle_deck();
        for _ in 0..30 {
            c.tick(DT);
        }
        assert_eq!(c.layout_width(), 0.0);
        assert!(!c.fold().is_out());
    }
}
