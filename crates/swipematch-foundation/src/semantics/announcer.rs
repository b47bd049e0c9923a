use std::cell::RefCell;
use std::rc::Rc;

use swipematch_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};

use crate::gesture_constants::ANNOUNCEMENT_DURATION_MS;

/// Sink for short messages read out by assistive technology.
pub trait Announcer {
    fn announce(&self, message: &str);
}

/// A visually hidden, polite live region that holds one message at a time.
///
/// Each message is cleared on the first frame at least
/// [`ANNOUNCEMENT_DURATION_MS`] after it was posted. A newer message replaces
/// the previous one and restarts the timer.
#[derive(Clone)]
pub struct LiveRegion {
    clock: FrameClock,
    state: Rc<RefCell<LiveRegionState>>,
}

#[derive(Default)]
struct LiveRegionState {
    current: Option<String>,
    posted_at_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl LiveRegion {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            state: Rc::new(RefCell::new(LiveRegionState::default())),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    /// Message text, or an empty string when the region is clear.
    pub fn text(&self) -> String {
        self.current().unwrap_or_default()
    }

    fn schedule(state: &Rc<RefCell<LiveRegionState>>, clock: &FrameClock) {
        let weak = Rc::downgrade(state);
        let next_clock = clock.clone();
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(state) = weak.upgrade() {
                Self::on_frame(&state, &next_clock, time);
            }
        });
        state.borrow_mut().registration = Some(registration);
    }

    fn on_frame(state: &Rc<RefCell<LiveRegionState>>, clock: &FrameClock, frame_time_nanos: u64) {
        let expired = {
            let mut inner = state.borrow_mut();
            inner.registration = None;
            let posted_at = *inner.posted_at_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(posted_at);
            if elapsed >= ANNOUNCEMENT_DURATION_MS * NANOS_PER_MILLI {
                inner.current = None;
                inner.posted_at_nanos = None;
                true
            } else {
                false
            }
        };

        if expired {
            log::trace!("live region cleared");
        } else {
            Self::schedule(state, clock);
        }
    }
}

impl Announcer for LiveRegion {
    fn announce(&self, message: &str) {
        {
            let mut state = self.state.borrow_mut();
            if let Some(registration) = state.registration.take() {
                registration.cancel();
            }
            state.current = Some(message.to_owned());
            state.posted_at_nanos = None;
        }
        log::info!("announce: {message}");
        Self::schedule(&self.state, &self.clock);
    }
}
