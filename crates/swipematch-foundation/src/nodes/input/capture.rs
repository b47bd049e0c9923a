//! Pointer capture held for the lifetime of a drag.

use std::fmt;
use std::rc::Rc;

use super::types::PointerId;

/// Host side of pointer capture.
///
/// While a pointer is captured the host keeps routing its move/up events to
/// the card even after the pointer leaves the card's bounds.
pub trait PointerCaptureHost {
    fn acquire(&self, pointer: PointerId);
    fn release(&self, pointer: PointerId);
}

/// Capture of a single pointer, released on drop.
///
/// A drag session owns one of these, so leaving the dragging state in any
/// way (release, cancel, tracker teardown) gives the pointer back.
pub struct PointerCapture {
    host: Rc<dyn PointerCaptureHost>,
    pointer: PointerId,
}

impl PointerCapture {
    pub fn acquire(host: Rc<dyn PointerCaptureHost>, pointer: PointerId) -> Self {
        host.acquire(pointer);
        log::trace!("captured pointer {pointer}");
        Self { host, pointer }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        log::trace!("released pointer {}", self.pointer);
        self.host.release(self.pointer);
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}
