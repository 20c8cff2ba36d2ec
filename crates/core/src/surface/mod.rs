use std::time::Duration;

use crate::Slide;

/// The visual track the carousel translates horizontally.
///
/// Offsets are percentages of the surface width; `-100.0` shows the second
/// slide. Implementations wrap whatever the host renders with.
pub trait PresentationSurface {
    /// Current width in the same coordinate space as pointer `x` values.
    fn width(&self) -> f32;

    fn set_offset_percent(&mut self, offset: f32);

    /// Sets the animation used for subsequent offset changes. `None` makes
    /// offset changes take effect immediately.
    fn set_transition(&mut self, transition: Option<Duration>);

    /// Commits pending style changes so the next change is not merged with
    /// the previous one.
    fn flush_layout(&mut self);

    /// Cursor feedback for mouse drags.
    fn set_grabbing(&mut self, _grabbing: bool) {}
}

/// Text block that mirrors the active slide.
pub trait SlideInfoPanel {
    fn show(&mut self, slide: &Slide);
}

/// Single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Offset(f32),
    Transition(Option<Duration>),
    Flush,
    Grabbing(bool),
}

/// In-memory surface that keeps its latest state and every call it received.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    offset: f32,
    transition: Option<Duration>,
    grabbing: bool,
    log: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            offset: 0.0,
            transition: None,
            grabbing: false,
            log: Vec::new(),
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animated(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<Duration> {
        self.transition
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    pub fn log(&self) -> &[SurfaceCommand] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl PresentationSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn set_offset_percent(&mut self, offset: f32) {
        self.offset = offset;
        self.log.push(SurfaceCommand::Offset(offset));
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        self.transition = transition;
        self.log.push(SurfaceCommand::Transition(transition));
    }

    fn flush_layout(&mut self) {
        self.log.push(SurfaceCommand::Flush);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
        self.log.push(SurfaceCommand::Grabbing(grabbing));
    }
}

/// Panel that remembers which slides it was asked to display.
#[derive(Debug, Clone, Default)]
pub struct RecordingPanel {
    shown: Vec<Slide>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.shown.last()
    }

    pub fn history(&self) -> &[Slide] {
        &self.shown
    }
}

impl SlideInfoPanel for RecordingPanel {
    fn show(&mut self, slide: &Slide) {
        self.shown.push(slide.clone());
    }
}
