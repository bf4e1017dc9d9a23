//! Deck fold in/out.
//!
//! Animates the deck layout panel's width between zero and its full size.
//! A fold is a [`FoldTask`] advanced once per frame; requesting another fold
//! replaces the running one, starting from wherever the width currently is.

use crate::animation::Tween;

/// A fold in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldTask {
    tween: Tween,
    fold_out: bool,
}

impl FoldTask {
    /// Starts a fold from `start_width` toward fully out or fully in.
    #[must_use]
    pub fn new(start_width: f32, full_width: f32, fold_out: bool, duration: f32) -> Self {
        let target = if fold_out { full_width } else { 0.0 };
        Self {
            tween: Tween::new(start_width, target, duration),
            fold_out,
        }
    }

    /// True if this task folds the deck out.
    #[must_use]
    pub fn is_fold_out(&self) -> bool {
        self.fold_out
    }

    /// The underlying tween.
    #[must_use]
    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    /// Advances by `dt` seconds and returns the width for this frame.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.tween.advance(dt)
    }

    /// True once the width has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tween.is_complete()
    }
}

/// Fold state of the deck layout panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckFold {
    full_width: f32,
    width: f32,
    deck_is_out: bool,
    duration: f32,
    task: Option<FoldTask>,
}

impl DeckFold {
    /// Creates a folded-out deck at full width.
    #[must_use]
    pub fn new(full_width: f32, duration: f32) -> Self {
        Self {
            full_width,
            width: full_width,
            deck_is_out: true,
            duration,
            task: None,
        }
    }

    /// Current panel width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Width when fully out.
    #[must_use]
    pub fn full_width(&self) -> f32 {
        self.full_width
    }

    /// Whether the deck is out, or folding out.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.deck_is_out
    }

    /// The running fold, if any.
    #[must_use]
    pub fn task(&self) -> Option<&FoldTask> {
        self.task.as_ref()
    }

    /// Returns true while a fold is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    /// Flips the deck, superseding any running fold.
    pub fn toggle(&mut self) {
        self.fold(!self.deck_is_out);
    }

    /// Folds the deck out or in, superseding any running fold.
    pub fn fold(&mut self, fold_out: bool) {
        if self.task.is_some() {
            tracing::debug!("Deck fold superseded at width {:.1}", self.width);
        }
        self.deck_is_out = fold_out;
        self.task = Some(FoldTask::new(self.width, self.full_width, fold_out, self.duration));
        tracing::info!("Deck folding {}", if fold_out { "out" } else { "in" });
    }

    /// Advances the running fold, if any, and returns the current width.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if let Some(task) = self.task.as_mut() {
            self.width = task.advance(dt);
            if task.is_finished() {
                self.task = None;
            }
        }
        self.width
    }
}
