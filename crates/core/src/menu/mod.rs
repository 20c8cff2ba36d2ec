use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Key, MenuConfig, Result, ShowcaseError};

/// Elements toggled by the burger menu: the button, the nav list, the
/// optional overlay and the page scroll lock.
pub trait MenuView {
    fn set_active(&mut self, active: bool);
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEvent {
    BurgerClick,
    OverlayClick,
    LinkClick,
}

/// Collapsible navigation for narrow viewports.
#[derive(Debug)]
pub struct BurgerMenu<V> {
    view: V,
    config: MenuConfig,
    is_open: bool,
}

impl<V: MenuView> BurgerMenu<V> {
    /// Attaches the menu to its view. A missing view leaves the page without
    /// a menu and is reported as an error.
    pub fn mount(view: Option<V>, config: MenuConfig) -> Result<Self> {
        let view = view.ok_or(ShowcaseError::MissingElement("burger menu"))?;
        info!("burger menu initialized");
        Ok(Self {
            view,
            config,
            is_open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.view.set_active(true);
        self.view.set_scroll_locked(true);
        debug!("menu opened");
    }

    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.view.set_active(false);
        self.view.set_scroll_locked(false);
        debug!("menu closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn handle_event(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::BurgerClick => self.toggle(),
            MenuEvent::OverlayClick | MenuEvent::LinkClick => self.close(),
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }

    /// Desktop layouts show the full navigation, so an open menu is closed.
    pub fn handle_resize(&mut self, viewport_width: f32) {
        if viewport_width > self.config.desktop_breakpoint {
            self.close();
        }
    }
}

/// View that records the state it was last put in.
#[derive(Debug, Clone, Default)]
pub struct RecordingMenuView {
    pub active: bool,
    pub scroll_locked: bool,
    pub changes: usize,
}

impl MenuView for RecordingMenuView {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.changes += 1;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount() -> BurgerMenu<RecordingMenuView> {
        BurgerMenu::mount(Some(RecordingMenuView::default()), MenuConfig::default()).unwrap()
    }

    #[test]
    fn missing_view_fails_to_mount() {
        let err = BurgerMenu::<RecordingMenuView>::mount(None, MenuConfig::default()).unwrap_err();
        assert!(matches!(err, ShowcaseError::MissingElement("burger menu")));
    }

    #[test]
    fn burger_click_toggles_and_locks_scroll() {
        let mut menu = mount();
        menu.handle_event(MenuEvent::BurgerClick);
        assert!(menu.is_open());
        assert!(menu.view().active);
        assert!(menu.view().scroll_locked);

        menu.handle_event(MenuEvent::BurgerClick);
        assert!(!menu.is_open());
        assert!(!menu.view().scroll_locked);
    }

    #[test]
    fn redundant_open_and_close_do_not_touch_the_view() {
        let mut menu = mount();
        menu.close();
        menu.open();
        menu.open();
        assert_eq!(menu.view().changes, 1);
    }

    #[test]
    fn overlay_link_and_escape_close() {
        let mut menu = mount();
        for close in [MenuEvent::OverlayClick, MenuEvent::LinkClick] {
            menu.open();
            menu.handle_event(close);
            assert!(!menu.is_open());
        }

        menu.open();
        menu.handle_key(Key::ArrowLeft);
        assert!(menu.is_open());
        menu.handle_key(Key::Escape);
        assert!(!menu.is_open());
    }

    #[test]
    fn widening_past_breakpoint_closes() {
        let mut menu = mount();
        menu.open();
        menu.handle_resize(1024.0);
        assert!(menu.is_open());
        menu.handle_resize(1280.0);
        assert!(!menu.is_open());
    }
}
