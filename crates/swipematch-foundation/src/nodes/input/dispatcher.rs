//! Input queue between platform callbacks and the frame loop.
//!
//! Platform integrations push events as they arrive and flush the queue at
//! the start of each frame, before the frame clock is drained. This keeps
//! input and animation callbacks from interleaving mid-frame.

use smallvec::SmallVec;

use super::key_event::KeyEvent;
use super::types::PointerEvent;

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

/// Receiver of dispatched input. Returns whether the event was handled.
pub trait InputHandler {
    fn handle_pointer_event(&self, event: &PointerEvent) -> bool;
    fn handle_key_event(&self, event: &KeyEvent) -> bool;
}

#[derive(Default)]
pub struct InputDispatcher {
    queue: SmallVec<[InputEvent; 8]>,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.queue.push(InputEvent::Pointer(event));
    }

    pub fn push_key(&mut self, event: KeyEvent) {
        self.queue.push(InputEvent::Key(event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(InputEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }

    /// Deliver queued events in arrival order. Returns how many were handled.
    pub fn dispatch_to(&mut self, target: &dyn InputHandler) -> usize {
        let mut handled = 0;
        self.drain(|event| {
            let accepted = match &event {
                InputEvent::Pointer(pointer) => target.handle_pointer_event(pointer),
                InputEvent::Key(key) => target.handle_key_event(key),
            };
            if accepted {
                handled += 1;
            }
        });
        handled
    }
}
