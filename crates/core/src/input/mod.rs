use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{Carousel, PresentationSurface, SlideInfoPanel};

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Raw platform events aimed at the carousel, already reduced to an `x`
/// coordinate where a pointer is involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SliderEvent {
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    MouseDown { x: f32 },
    MouseMove { x: f32 },
    MouseUp,
    MouseLeave,
    PrevButton,
    NextButton,
    TransitionStart,
    TransitionEnd,
}

/// Translates a raw slider event into controller calls.
pub fn apply_slider_event<S, P>(carousel: &mut Carousel<S, P>, event: SliderEvent, now: Instant)
where
    S: PresentationSurface,
    P: SlideInfoPanel,
{
    match event {
        SliderEvent::TouchStart { x } => carousel.begin_drag(x),
        SliderEvent::TouchMove { x } => carousel.update_drag(x),
        SliderEvent::TouchEnd => carousel.end_drag(),
        SliderEvent::MouseDown { x } => {
            carousel.begin_drag(x);
            if carousel.is_dragging() {
                carousel.surface_mut().set_grabbing(true);
            }
        }
        SliderEvent::MouseMove { x } => {
            if carousel.is_dragging() {
                carousel.update_drag(x);
            }
        }
        SliderEvent::MouseUp | SliderEvent::MouseLeave => {
            if carousel.is_dragging() {
                carousel.end_drag();
                carousel.surface_mut().set_grabbing(false);
            }
        }
        SliderEvent::PrevButton => carousel.prev_slide(),
        SliderEvent::NextButton => carousel.next_slide(),
        SliderEvent::TransitionStart => carousel.on_transition_start(now),
        SliderEvent::TransitionEnd => carousel.on_transition_end(),
    }
}

/// Arrow keys page through the carousel; other keys are not its concern.
pub fn apply_slider_key<S, P>(carousel: &mut Carousel<S, P>, key: Key)
where
    S: PresentationSurface,
    P: SlideInfoPanel,
{
    match key {
        Key::ArrowLeft => carousel.prev_slide(),
        Key::ArrowRight => carousel.next_slide(),
        Key::Escape => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingPanel, RecordingSurface, SlideDeck};

    fn mount() -> Carousel<RecordingSurface, RecordingPanel> {
        Carousel::builder(SlideDeck::default())
            .surface(RecordingSurface::new(300.0))
            .panel(RecordingPanel::new())
            .mount()
            .unwrap()
    }

    #[test]
    fn touch_swipe_advances() {
        let mut carousel = mount();
        let now = Instant::now();
        apply_slider_event(&mut carousel, SliderEvent::TouchStart { x: 250.0 }, now);
        apply_slider_event(&mut carousel, SliderEvent::TouchMove { x: 120.0 }, now);
        apply_slider_event(&mut carousel, SliderEvent::TouchEnd, now);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.current_slide().title, "EcoPower Pro");
    }

    #[test]
    fn mouse_drag_toggles_grab_cursor() {
        let mut carousel = mount();
        let now = Instant::now();
        apply_slider_event(&mut carousel, SliderEvent::MouseDown { x: 10.0 }, now);
        assert!(carousel.surface().is_grabbing());

        apply_slider_event(&mut carousel, SliderEvent::MouseMove { x: 200.0 }, now);
        apply_slider_event(&mut carousel, SliderEvent::MouseLeave, now);
        assert!(!carousel.surface().is_grabbing());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn mouse_moves_without_a_drag_are_ignored() {
        let mut carousel = mount();
        carousel.surface_mut().clear_log();
        let now = Instant::now();
        apply_slider_event(&mut carousel, SliderEvent::MouseMove { x: 200.0 }, now);
        apply_slider_event(&mut carousel, SliderEvent::MouseUp, now);
        assert!(carousel.surface().log().is_empty());
    }

    #[test]
    fn buttons_keys_and_transition_lock() {
        let mut carousel = mount();
        let now = Instant::now();
        apply_slider_event(&mut carousel, SliderEvent::NextButton, now);
        apply_slider_event(&mut carousel, SliderEvent::TransitionStart, now);
        apply_slider_key(&mut carousel, Key::ArrowRight);
        assert_eq!(carousel.current_index(), 1);

        apply_slider_event(&mut carousel, SliderEvent::TransitionEnd, now);
        apply_slider_key(&mut carousel, Key::ArrowLeft);
        apply_slider_key(&mut carousel, Key::Escape);
        apply_slider_event(&mut carousel, SliderEvent::PrevButton, now);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn events_parse_from_snake_case_tags() {
        let event: SliderEvent = serde_json::from_str(r#"{"type": "mouse_down", "x": 12.5}"#).unwrap();
        assert_eq!(event, SliderEvent::MouseDown { x: 12.5 });
        let event: SliderEvent = serde_json::from_str(r#"{"type": "transition_end"}"#).unwrap();
        assert_eq!(event, SliderEvent::TransitionEnd);
    }
}
