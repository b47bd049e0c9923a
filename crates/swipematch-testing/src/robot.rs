//! Robot-style driver for a swipe tracker.
//!
//! The robot owns a [`FrameClock`], a tracker wired to recording callbacks,
//! and a simulated frame time. Interactions go through the same
//! [`InputHandler`] entry points a platform layer uses.
//!
//! # Example
//!
//! ```
//! use swipematch_foundation::{SwipeConfig, SwipeDirection};
//! use swipematch_testing::SwipeRobot;
//!
//! let mut robot = SwipeRobot::new(SwipeConfig::new(80.0)).unwrap();
//! robot.drag(200.0, 100.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.swipes(), vec![SwipeDirection::Left]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipematch_core::{FrameClock, NANOS_PER_MILLI};
use swipematch_foundation::{
    CardPairVisual, InputHandler, KeyCode, KeyEvent, PointerEvent, PointerId, PointerSource,
    SwipeCallbacks, SwipeConfig, SwipeConfigError, SwipeDirection, SwipeGestureTracker,
    SwipePhase, PRIMARY_POINTER,
};

use crate::recording::{CaptureEvent, RecordingAnnouncer, RecordingCaptureHost};

/// Simulated display refresh interval.
pub const FRAME_INTERVAL_NANOS: u64 = 16 * NANOS_PER_MILLI;

/// Upper bound on frames pumped by [`SwipeRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 600;

pub struct SwipeRobot {
    clock: FrameClock,
    tracker: SwipeGestureTracker,
    swipes: Rc<RefCell<Vec<SwipeDirection>>>,
    completions: Rc<Cell<usize>>,
    announcer: Rc<RecordingAnnouncer>,
    capture: Rc<RecordingCaptureHost>,
    frame_time_nanos: u64,
    pointer: PointerId,
    source: PointerSource,
    cursor: (f32, f32),
}

impl SwipeRobot {
    pub fn new(config: SwipeConfig) -> Result<Self, SwipeConfigError> {
        let clock = FrameClock::new();
        let swipes = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));
        let announcer = Rc::new(RecordingAnnouncer::new());
        let capture = Rc::new(RecordingCaptureHost::new());

        let sink = Rc::clone(&swipes);
        let counter = Rc::clone(&completions);
        let callbacks = SwipeCallbacks::new(move |direction| sink.borrow_mut().push(direction))
            .on_animation_complete(move || counter.set(counter.get() + 1));
        let tracker = SwipeGestureTracker::new(config, callbacks, clock.clone())?
            .with_announcer(announcer.clone())
            .with_pointer_capture(capture.clone());

        Ok(Self {
            clock,
            tracker,
            swipes,
            completions,
            announcer,
            capture,
            frame_time_nanos: 0,
            pointer: PRIMARY_POINTER,
            source: PointerSource::Mouse,
            cursor: (0.0, 0.0),
        })
    }

    pub fn tracker(&self) -> &SwipeGestureTracker {
        &self.tracker
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Route subsequent pointer interactions through another pointer.
    pub fn use_pointer(&mut self, pointer: PointerId, source: PointerSource) {
        self.pointer = pointer;
        self.source = source;
    }

    fn pointer_event(&self, event: PointerEvent) -> PointerEvent {
        event.with_id(self.pointer).with_source(self.source)
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.cursor = (x, y);
        let event = self.pointer_event(PointerEvent::down(x, y));
        self.tracker.handle_pointer_event(&event)
    }

    pub fn move_to(&mut self, x: f32) -> bool {
        self.cursor.0 = x;
        let event = self.pointer_event(PointerEvent::moved(x, self.cursor.1));
        self.tracker.handle_pointer_event(&event)
    }

    pub fn release(&mut self) -> bool {
        let (x, y) = self.cursor;
        let event = self.pointer_event(PointerEvent::up(x, y));
        self.tracker.handle_pointer_event(&event)
    }

    pub fn cancel_pointer(&mut self) -> bool {
        let event = self.pointer_event(PointerEvent::cancel());
        self.tracker.handle_pointer_event(&event)
    }

    /// Press at `from_x`, move to `to_x` in a few steps, release.
    ///
    /// Returns whether the release was handled.
    pub fn drag(&mut self, from_x: f32, to_x: f32) -> bool {
        const STEPS: usize = 4;
        self.press(from_x, 0.0);
        for step in 1..=STEPS {
            let fraction = step as f32 / STEPS as f32;
            self.move_to(from_x + (to_x - from_x) * fraction);
        }
        self.release()
    }

    pub fn press_key(&mut self, key_code: KeyCode) -> bool {
        self.tracker.handle_key_event(&KeyEvent::key_down(key_code))
    }

    /// Press the PASS button.
    pub fn click_pass(&mut self) -> bool {
        self.tracker.trigger_action(SwipeDirection::Left)
    }

    /// Press the INTERESTED button.
    pub fn click_interested(&mut self) -> bool {
        self.tracker.trigger_action(SwipeDirection::Right)
    }

    /// Run one frame at the current frame time, then step the time forward.
    pub fn frame(&mut self) {
        self.clock.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
    }

    /// Run frames covering the next `millis` milliseconds, inclusive.
    pub fn advance_time(&mut self, millis: u64) {
        let end = self.frame_time_nanos + millis * NANOS_PER_MILLI;
        while self.frame_time_nanos <= end {
            self.frame();
        }
    }

    /// Pump frames until no animation is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.clock.has_frame_callbacks() {
                return;
            }
            self.frame();
        }
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn phase(&self) -> SwipePhase {
        self.tracker.phase()
    }

    pub fn visuals(&self) -> CardPairVisual {
        self.tracker.card_visuals()
    }

    pub fn swipes(&self) -> Vec<SwipeDirection> {
        self.swipes.borrow().clone()
    }

    pub fn completions(&self) -> usize {
        self.completions.get()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.announcer.messages()
    }

    pub fn capture_events(&self) -> Vec<CaptureEvent> {
        self.capture.events()
    }

    pub fn is_captured(&self, pointer: PointerId) -> bool {
        self.capture.is_captured(pointer)
    }
}
