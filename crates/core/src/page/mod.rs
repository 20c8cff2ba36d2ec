use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{
    input::{apply_slider_event, apply_slider_key},
    BurgerMenu, Carousel, Key, MenuEvent, MenuView, PresentationSurface, SlideInfoPanel,
    SliderEvent,
};

/// Listeners registered on the document or window rather than a widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentEvent {
    Key { key: Key },
    Resize { viewport_width: f32 },
}

/// Any event the page forwards to its widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageEvent {
    Slider(SliderEvent),
    Menu(MenuEvent),
    Document(DocumentEvent),
}

/// Integration layer owning the widgets of one page.
#[derive(Debug)]
pub struct Page<S, P, V> {
    carousel: Carousel<S, P>,
    menu: BurgerMenu<V>,
}

impl<S, P, V> Page<S, P, V>
where
    S: PresentationSurface,
    P: SlideInfoPanel,
    V: MenuView,
{
    pub fn new(carousel: Carousel<S, P>, menu: BurgerMenu<V>) -> Self {
        Self { carousel, menu }
    }

    pub fn carousel(&self) -> &Carousel<S, P> {
        &self.carousel
    }

    pub fn menu(&self) -> &BurgerMenu<V> {
        &self.menu
    }

    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::Slider(event) => apply_slider_event(&mut self.carousel, event, now),
            PageEvent::Menu(event) => self.menu.handle_event(event),
            PageEvent::Document(DocumentEvent::Key { key }) => {
                apply_slider_key(&mut self.carousel, key);
                self.menu.handle_key(key);
            }
            PageEvent::Document(DocumentEvent::Resize { viewport_width }) => {
                self.menu.handle_resize(viewport_width)
            }
        }
    }

    /// Drives time-based housekeeping. Returns `true` if a stale slide lock
    /// was released.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuConfig, RecordingMenuView, RecordingPanel, RecordingSurface, SlideDeck};

    fn page() -> Page<RecordingSurface, RecordingPanel, RecordingMenuView> {
        let carousel = Carousel::builder(SlideDeck::default())
            .surface(RecordingSurface::new(320.0))
            .panel(RecordingPanel::new())
            .mount()
            .unwrap();
        let menu =
            BurgerMenu::mount(Some(RecordingMenuView::default()), MenuConfig::default()).unwrap();
        Page::new(carousel, menu)
    }

    #[test]
    fn keys_reach_both_widgets() {
        let mut page = page();
        let now = Instant::now();
        page.handle(PageEvent::Menu(MenuEvent::BurgerClick), now);
        page.handle(
            PageEvent::Document(DocumentEvent::Key {
                key: Key::ArrowRight,
            }),
            now,
        );
        assert_eq!(page.carousel().current_index(), 1);
        assert!(page.menu().is_open());

        page.handle(PageEvent::Document(DocumentEvent::Key { key: Key::Escape }), now);
        assert!(!page.menu().is_open());
        assert_eq!(page.carousel().current_index(), 1);
    }

    #[test]
    fn resize_only_affects_the_menu() {
        let mut page = page();
        let now = Instant::now();
        page.handle(PageEvent::Menu(MenuEvent::BurgerClick), now);
        page.handle(
            PageEvent::Document(DocumentEvent::Resize {
                viewport_width: 1440.0,
            }),
            now,
        );
        assert!(!page.menu().is_open());
        assert_eq!(page.carousel().current_index(), 0);
    }

    #[test]
    fn untagged_events_resolve_to_their_widget() {
        let parse = |raw: &str| serde_json::from_str::<PageEvent>(raw).unwrap();
        assert_eq!(
            parse(r#"{"type": "touch_move", "x": 3.0}"#),
            PageEvent::Slider(SliderEvent::TouchMove { x: 3.0 })
        );
        assert_eq!(
            parse(r#"{"type": "overlay_click"}"#),
            PageEvent::Menu(MenuEvent::OverlayClick)
        );
        assert_eq!(
            parse(r#"{"type": "key", "key": "ArrowLeft"}"#),
            PageEvent::Document(DocumentEvent::Key { key: Key::ArrowLeft })
        );
        assert!(serde_json::from_str::<PageEvent>(r#"{"type": "scroll"}"#).is_err());
    }
}
