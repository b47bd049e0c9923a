//! Test doubles for the host capabilities a tracker is given.

use std::cell::RefCell;

use swipematch_foundation::{Announcer, PointerCaptureHost, PointerId};

/// Keeps every announcement instead of reading it out.
#[derive(Default)]
pub struct RecordingAnnouncer {
    messages: RefCell<Vec<String>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureEvent {
    Acquired(PointerId),
    Released(PointerId),
}

#[derive(Default)]
pub struct RecordingCaptureHost {
    events: RefCell<Vec<CaptureEvent>>,
}

impl RecordingCaptureHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CaptureEvent> {
        self.events.borrow().clone()
    }

    /// Whether `pointer` was acquired more recently than it was released.
    pub fn is_captured(&self, pointer: PointerId) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match *event {
                CaptureEvent::Acquired(id) if id == pointer => Some(true),
                CaptureEvent::Released(id) if id == pointer => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl PointerCaptureHost for RecordingCaptureHost {
    fn acquire(&self, pointer: PointerId) {
        self.events.borrow_mut().push(CaptureEvent::Acquired(pointer));
    }

    fn release(&self, pointer: PointerId) {
        self.events.borrow_mut().push(CaptureEvent::Released(pointer));
    }
}
