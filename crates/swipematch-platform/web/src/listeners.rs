//! DOM listeners bound for the lifetime of a guard value.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipematch_foundation::{InputHandler, PointerCaptureHost, PointerId, SwipeGestureTracker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::{dom_pointer_id, WebPlatform};

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Removes its listeners from `target` on drop.
struct ListenerSet {
    target: EventTarget,
    listeners: Vec<(&'static str, Listener)>,
    attached: bool,
}

impl ListenerSet {
    fn new(target: EventTarget) -> Self {
        Self {
            target,
            listeners: Vec::new(),
            attached: true,
        }
    }

    fn add(
        &mut self,
        event_type: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        self.target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        self.listeners.push((event_type, closure));
        Ok(())
    }

    /// Unsubscribe without freeing the closures, which may still be running.
    fn detach(&mut self) {
        if !std::mem::replace(&mut self.attached, false) {
            return;
        }
        for (event_type, closure) in &self.listeners {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {event_type} listener: {err:?}");
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Window-level `keydown` listener forwarding to an [`InputHandler`].
///
/// Handled keys have their default action prevented, which stops arrow keys
/// from scrolling the page.
pub struct WindowKeyListener {
    _listeners: ListenerSet,
}

impl WindowKeyListener {
    pub fn bind(window: &Window, handler: Rc<dyn InputHandler>) -> Result<Self, JsValue> {
        let platform = WebPlatform::default();
        let mut listeners = ListenerSet::new(window.clone().into());
        listeners.add("keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if handler.handle_key_event(&platform.key_event(event)) {
                event.prevent_default();
            }
        })?;
        Ok(Self {
            _listeners: listeners,
        })
    }
}

/// `pointerdown` on a card element.
///
/// Move, up and cancel are only listened to while a drag holds the pointer,
/// through the [`DragCapture`] this binding installs on the tracker.
pub struct CardInputBinding {
    _card: ListenerSet,
}

impl CardInputBinding {
    pub fn bind(
        window: &Window,
        card: &HtmlElement,
        tracker: &SwipeGestureTracker,
        handler: Rc<dyn InputHandler>,
    ) -> Result<Self, JsValue> {
        // Touch pointers would otherwise be cancelled by page panning.
        card.style().set_property("touch-action", "none")?;

        let capture = DragCapture::new(window.clone(), card.clone().into(), &handler);
        tracker.set_pointer_capture(Rc::new(capture));

        let platform = WebPlatform::default();
        let mut card_listeners = ListenerSet::new(card.clone().into());
        card_listeners.add("pointerdown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
                return;
            };
            let Some(pointer) = platform.pointer_event(event) else {
                return;
            };
            if handler.handle_pointer_event(&pointer) {
                event.prevent_default();
            }
        })?;

        Ok(Self {
            _card: card_listeners,
        })
    }
}

/// Pointer capture for a drag session.
///
/// Acquiring captures the pointer on the card element and subscribes to
/// window `pointermove`/`pointerup`/`pointercancel`; releasing undoes both.
/// The tracker acquires on drag start and releases on every way out of the
/// drag, so the window listeners live exactly as long as the drag.
pub struct DragCapture {
    window: Window,
    element: Element,
    handler: Weak<dyn InputHandler>,
    active: RefCell<Option<ListenerSet>>,
    // Detached listeners from the last drag. The release usually runs inside
    // one of their callbacks, so they are freed on the next acquire instead.
    retired: RefCell<Option<ListenerSet>>,
}

impl DragCapture {
    pub fn new(window: Window, element: Element, handler: &Rc<dyn InputHandler>) -> Self {
        Self {
            window,
            element,
            handler: Rc::downgrade(handler),
            active: RefCell::new(None),
            retired: RefCell::new(None),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.active.borrow().is_some()
    }

    fn subscribe(&self, pointer: PointerId) -> Result<ListenerSet, JsValue> {
        let mut listeners = ListenerSet::new(self.window.clone().into());
        for event_type in ["pointermove", "pointerup", "pointercancel"] {
            let handler = Weak::clone(&self.handler);
            let platform = WebPlatform::default();
            listeners.add(event_type, move |event| {
                let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
                    return;
                };
                let Some(pointer_event) = platform.pointer_event(event) else {
                    return;
                };
                if pointer_event.id != pointer {
                    return;
                }
                if let Some(handler) = handler.upgrade() {
                    handler.handle_pointer_event(&pointer_event);
                }
            })?;
        }
        Ok(listeners)
    }
}

impl PointerCaptureHost for DragCapture {
    fn acquire(&self, pointer: PointerId) {
        self.retired.borrow_mut().take();
        match self.subscribe(pointer) {
            Ok(listeners) => {
                if let Some(mut previous) = self.active.borrow_mut().replace(listeners) {
                    previous.detach();
                }
            }
            Err(err) => log::warn!("drag listeners for pointer {pointer} failed: {err:?}"),
        }

        let Some(id) = dom_pointer_id(pointer) else {
            log::debug!("pointer {pointer} is not a DOM pointer, not capturing");
            return;
        };
        if let Err(err) = self.element.set_pointer_capture(id) {
            log::warn!("pointer {pointer} could not be captured: {err:?}");
        }
    }

    fn release(&self, pointer: PointerId) {
        if let Some(mut listeners) = self.active.borrow_mut().take() {
            listeners.detach();
            self.retired.replace(Some(listeners));
        }

        let Some(id) = dom_pointer_id(pointer) else {
            return;
        };
        // Already released by the browser after pointerup.
        if !self.element.has_pointer_capture(id) {
            return;
        }
        if let Err(err) = self.element.release_pointer_capture(id) {
            log::debug!("pointer {pointer} could not be released: {err:?}");
        }
    }
}
