//! Core library for the product showcase widgets.
//!
//! The crate holds the platform-agnostic controllers behind the site's
//! product carousel and burger navigation menu. Rendering and raw input stay
//! with the host: controllers drive injected surfaces and react to
//! normalized events, so every widget can be exercised without a browser.

pub mod carousel;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod page;
pub mod script;
pub mod slides;
pub mod surface;

pub use carousel::{Carousel, CarouselBuilder, CarouselPhase, CarouselState};
pub use config::{AppConfig, MenuConfig, SliderConfig};
pub use error::{Result, ShowcaseError};
pub use input::{Key, SliderEvent};
pub use menu::{BurgerMenu, MenuEvent, MenuView, RecordingMenuView};
pub use page::{DocumentEvent, Page, PageEvent};
pub use script::{replay, ReplayReport, Script, ScriptStep};
pub use slides::{Slide, SlideDeck};
pub use surface::{
    PresentationSurface, RecordingPanel, RecordingSurface, SlideInfoPanel, SurfaceCommand,
};
