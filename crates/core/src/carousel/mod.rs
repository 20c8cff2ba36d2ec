//! Carousel controller: slide index, transition lock and drag-to-slide logic.
//!
//! The controller never touches a rendering backend directly. It drives a
//! [`PresentationSurface`] and a [`SlideInfoPanel`] that are injected when the
//! widget is mounted, and it learns about animation progress only through
//! [`Carousel::on_transition_start`] and [`Carousel::on_transition_end`].

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::{
    PresentationSurface, Result, ShowcaseError, Slide, SlideDeck, SlideInfoPanel, SliderConfig,
};

/// Effective state derived from the two controller flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
    Transitioning,
}

/// Mutable state of a single carousel instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    /// Set between surface-reported animation start and end.
    pub is_transitioning: bool,
    pub is_dragging: bool,
    pub drag_start_x: f32,
    pub drag_current_x: f32,
    pub transition_started_at: Option<Instant>,
}

impl CarouselState {
    fn reset_drag(&mut self) {
        self.is_dragging = false;
        self.drag_start_x = 0.0;
        self.drag_current_x = 0.0;
    }
}

/// Controller for one carousel widget.
#[derive(Debug)]
pub struct Carousel<S, P> {
    deck: SlideDeck,
    config: SliderConfig,
    surface: S,
    panel: P,
    state: CarouselState,
}

impl<S, P> Carousel<S, P>
where
    S: PresentationSurface,
    P: SlideInfoPanel,
{
    pub fn builder(deck: SlideDeck) -> CarouselBuilder<S, P> {
        CarouselBuilder::new(deck)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        // The index is only ever assigned from a successful deck lookup.
        &self.deck[self.state.current_index]
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.state.is_transitioning {
            CarouselPhase::Transitioning
        } else if self.state.is_dragging {
            CarouselPhase::Dragging
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Moves to `index`, animated when `smooth` is set.
    ///
    /// Ignored while a transition or a drag is in progress and for indices
    /// outside the deck.
    pub fn go_to_slide(&mut self, index: usize, smooth: bool) {
        if self.state.is_transitioning {
            trace!(index, "slide change ignored while transitioning");
            return;
        }
        if self.state.is_dragging {
            trace!(index, "slide change ignored while dragging");
            return;
        }
        let Some(slide) = self.deck.get(index) else {
            trace!(index, count = self.deck.len(), "slide index out of range");
            return;
        };

        self.state.current_index = index;
        let offset = slide_offset(index);
        if smooth {
            self.surface.set_transition(Some(self.config.transition()));
            self.surface.set_offset_percent(offset);
        } else {
            // The jump must land before animation is re-enabled.
            self.surface.set_transition(None);
            self.surface.set_offset_percent(offset);
            self.surface.flush_layout();
            self.surface.set_transition(Some(self.config.transition()));
        }
        self.panel.show(slide);
        debug!(index, smooth, title = %slide.title, "moved to slide");
    }

    pub fn next_slide(&mut self) {
        if self.state.is_transitioning {
            trace!("next ignored while transitioning");
            return;
        }
        let next = (self.state.current_index + 1) % self.deck.len();
        self.go_to_slide(next, true);
    }

    pub fn prev_slide(&mut self) {
        if self.state.is_transitioning {
            trace!("prev ignored while transitioning");
            return;
        }
        let count = self.deck.len();
        let prev = (self.state.current_index + count - 1) % count;
        self.go_to_slide(prev, true);
    }

    pub fn begin_drag(&mut self, x: f32) {
        if self.state.is_transitioning || self.state.is_dragging {
            trace!(x, "drag start ignored");
            return;
        }
        self.state.is_dragging = true;
        self.state.drag_start_x = x;
        self.state.drag_current_x = x;
        self.surface.set_transition(None);
    }

    /// Renders a live preview that follows the pointer without committing.
    pub fn update_drag(&mut self, x: f32) {
        if !self.state.is_dragging {
            return;
        }
        self.state.drag_current_x = x;
        let width = self.surface.width();
        let delta_percent = if width > 0.0 {
            (x - self.state.drag_start_x) / width * 100.0
        } else {
            0.0
        };
        self.surface
            .set_offset_percent(slide_offset(self.state.current_index) + delta_percent);
    }

    /// Resolves the drag to the previous, next or current slide.
    pub fn end_drag(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        let delta = self.state.drag_current_x - self.state.drag_start_x;
        let threshold = self.surface.width() * self.config.drag_threshold_ratio;
        self.state.reset_drag();
        self.surface.set_transition(Some(self.config.transition()));

        if delta.abs() > threshold {
            debug!(delta, threshold, "drag committed");
            if delta > 0.0 {
                self.prev_slide();
            } else {
                self.next_slide();
            }
        } else {
            debug!(delta, threshold, "drag below threshold, snapping back");
            self.go_to_slide(self.state.current_index, true);
        }
    }

    /// The surface started animating; index changes are locked until it ends.
    pub fn on_transition_start(&mut self, now: Instant) {
        self.state.is_transitioning = true;
        self.state.transition_started_at = Some(now);
    }

    pub fn on_transition_end(&mut self) {
        self.state.is_transitioning = false;
        self.state.transition_started_at = None;
    }

    /// Releases a transition lock held past the configured timeout.
    ///
    /// Returns `true` when the lock was forced open.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (Some(timeout), Some(started)) =
            (self.config.lock_timeout(), self.state.transition_started_at)
        else {
            return false;
        };
        if !self.state.is_transitioning {
            return false;
        }
        let held = now.saturating_duration_since(started);
        if held < timeout {
            return false;
        }
        warn!(
            held_ms = held.as_millis() as u64,
            "transition end never reported, releasing slide lock"
        );
        self.on_transition_end();
        true
    }
}

fn slide_offset(index: usize) -> f32 {
    -(index as f32) * 100.0
}

/// Collects the collaborators a carousel needs before it can be mounted.
#[derive(Debug)]
pub struct CarouselBuilder<S, P> {
    deck: SlideDeck,
    config: SliderConfig,
    surface: Option<S>,
    panel: Option<P>,
}

impl<S, P> CarouselBuilder<S, P>
where
    S: PresentationSurface,
    P: SlideInfoPanel,
{
    pub fn new(deck: SlideDeck) -> Self {
        Self {
            deck,
            config: SliderConfig::default(),
            surface: None,
            panel: None,
        }
    }

    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn panel(mut self, panel: P) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Builds the controller and places it on the first slide without
    /// animation.
    pub fn mount(self) -> Result<Carousel<S, P>> {
        self.config.validate()?;
        let surface = self
            .surface
            .ok_or(ShowcaseError::MissingElement("slider track"))?;
        let panel = self
            .panel
            .ok_or(ShowcaseError::MissingElement("product title"))?;

        let mut carousel = Carousel {
            deck: self.deck,
            config: self.config,
            surface,
            panel,
            state: CarouselState::default(),
        };
        carousel.go_to_slide(0, false);
        info!(slides = carousel.slide_count(), "product slider initialized");
        Ok(carousel)
    }
}
