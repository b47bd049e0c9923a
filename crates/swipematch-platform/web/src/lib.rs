//! Browser adapter: DOM events in, CSS styles out.

mod listeners;
mod style;

pub use listeners::{CardInputBinding, DragCapture, WindowKeyListener};
pub use style::{apply_card_visuals, apply_slot_visual, css_opacity, css_transform};

use swipematch_foundation::{
    KeyCode, KeyEvent, KeyEventType, PointerEvent, PointerEventKind, PointerId, PointerSource,
};
use swipematch_ui_graphics::Point;

/// `pointerId` the DOM assigns to the mouse.
pub const DOM_MOUSE_POINTER_ID: i32 = 1;

pub struct WebPlatform {
    scale_factor: f64,
}

impl WebPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, x: f64, y: f64) -> Point {
        // client_x/client_y are already CSS pixels, so no scale_factor here.
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    /// Map a DOM `PointerEvent`. Returns `None` for event types the cards
    /// do not track, such as `pointerover`.
    pub fn pointer_event(&self, event: &web_sys::PointerEvent) -> Option<PointerEvent> {
        let kind = pointer_kind_from_type(&event.type_())?;
        let position = self.pointer_position(event.client_x().into(), event.client_y().into());
        Some(
            PointerEvent::new(kind, position)
                .with_id(pointer_id_from_dom(event.pointer_id()))
                .with_source(pointer_source_from_type(&event.pointer_type())),
        )
    }

    pub fn key_event(&self, event: &web_sys::KeyboardEvent) -> KeyEvent {
        let event_type = if event.type_() == "keyup" {
            KeyEventType::KeyUp
        } else {
            KeyEventType::KeyDown
        };
        KeyEvent::new(key_code_from_key(&event.key()), event_type).with_repeat(event.repeat())
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// DOM pointer ids are non-negative; a negative id (synthetic events) maps
/// to an id no DOM pointer uses.
pub fn pointer_id_from_dom(pointer_id: i32) -> PointerId {
    u64::try_from(pointer_id).unwrap_or(u64::MAX)
}

/// The DOM `pointerId` for capture calls, if `pointer` came from the DOM.
pub fn dom_pointer_id(pointer: PointerId) -> Option<i32> {
    i32::try_from(pointer).ok()
}

pub fn key_code_from_key(key: &str) -> KeyCode {
    match key {
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
        "ArrowRight" | "Right" => KeyCode::ArrowRight,
        _ => KeyCode::Unknown,
    }
}

pub fn pointer_kind_from_type(event_type: &str) -> Option<PointerEventKind> {
    match event_type {
        "pointerdown" => Some(PointerEventKind::Down),
        "pointermove" => Some(PointerEventKind::Move),
        "pointerup" => Some(PointerEventKind::Up),
        "pointercancel" => Some(PointerEventKind::Cancel),
        _ => None,
    }
}

pub fn pointer_source_from_type(pointer_type: &str) -> PointerSource {
    match pointer_type {
        "touch" => PointerSource::Touch,
        "pen" => PointerSource::Pen,
        _ => PointerSource::Mouse,
    }
}

/// Whether the user asked the browser for reduced motion.
pub fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
    match window.match_media("(prefers-reduced-motion: reduce)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::warn!("prefers-reduced-motion query failed: {err:?}");
            false
        }
    }
}
