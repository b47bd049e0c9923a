//! Horizontal swipe recogniser for a stack of cards.
//!
//! The tracker is an explicit state machine:
//!
//! ```text
//! Idle ──begin──▶ Dragging ──end (|d| > threshold)──▶ Animating ──exit done──▶ Idle
//!                    │                                    ▲
//!                    └──end (|d| ≤ threshold) / cancel──▶ Idle (snap back)
//! Idle ──trigger_action──────────────────────────────────┘
//! ```
//!
//! While `Animating`, every input is ignored. The guard is checked before
//! anything is mutated, so a second action arriving in the same tick as the
//! first cannot double-fire.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use swipematch_animation::Animatable;
use swipematch_core::FrameClock;
use swipematch_ui_graphics::Point;

use crate::card_visuals::{direction_hint, CardPairVisual, DragFeedback};
use crate::nodes::input::capture::{PointerCapture, PointerCaptureHost};
use crate::nodes::input::dispatcher::InputHandler;
use crate::nodes::input::key_event::{KeyCode, KeyEvent};
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId, PRIMARY_POINTER};
use crate::semantics::Announcer;
use crate::{SwipeConfig, SwipeConfigError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    /// The committed direction for a released drag, if any.
    ///
    /// The threshold is exclusive: a drag of exactly `threshold` pixels
    /// snaps back.
    pub fn resolve(distance: f32, threshold: f32) -> Option<Self> {
        if distance < -threshold {
            Some(SwipeDirection::Left)
        } else if distance > threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Coarse tracker state, for hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Animating(SwipeDirection),
}

/// An in-progress drag. Owns the pointer capture, if the host provides one.
#[derive(Debug)]
pub struct DragSession {
    origin: Point,
    pointer: PointerId,
    distance: f32,
    capture: Option<PointerCapture>,
}

impl DragSession {
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Horizontal distance from the press position. Negative is left.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }
}

#[derive(Debug)]
enum SwipeState {
    Idle,
    Dragging(DragSession),
    Animating(SwipeDirection),
}

/// Which direction label the card should be showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwipeFeedbackLabels {
    pub pass: bool,
    pub interested: bool,
}

pub struct SwipeCallbacks {
    on_swipe: Box<dyn FnMut(SwipeDirection)>,
    on_animation_complete: Option<Box<dyn FnMut()>>,
}

impl SwipeCallbacks {
    /// `on_swipe` runs synchronously when a swipe commits, before the exit
    /// animation plays.
    pub fn new(on_swipe: impl FnMut(SwipeDirection) + 'static) -> Self {
        Self {
            on_swipe: Box::new(on_swipe),
            on_animation_complete: None,
        }
    }

    /// Runs once the exit animation has finished and the cards are back at
    /// rest.
    pub fn on_animation_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_animation_complete = Some(Box::new(callback));
        self
    }
}

struct TrackerShared {
    config: SwipeConfig,
    state: RefCell<SwipeState>,
    // Callbacks live in their own cells so they can call back into the
    // tracker while running.
    on_swipe: RefCell<Box<dyn FnMut(SwipeDirection)>>,
    on_animation_complete: RefCell<Option<Box<dyn FnMut()>>>,
    announcer: RefCell<Option<Rc<dyn Announcer>>>,
    capture_host: RefCell<Option<Rc<dyn PointerCaptureHost>>>,
    visuals: Animatable<CardPairVisual>,
}

impl TrackerShared {
    fn finish_exit(&self) {
        let direction = {
            let mut state = self.state.borrow_mut();
            let SwipeState::Animating(direction) = *state else {
                return;
            };
            *state = SwipeState::Idle;
            direction
        };
        self.visuals.snap_to(CardPairVisual::at_rest());
        log::debug!("exit to the {direction:?} finished, cards reset");

        if let Some(callback) = self.on_animation_complete.borrow_mut().as_mut() {
            callback();
        }
    }
}

/// Interprets pointer and keyboard input on the top card of a deck.
///
/// Cloning yields another handle to the same tracker. The drag session and
/// its pointer capture are released when the last handle is dropped.
#[derive(Clone)]
pub struct SwipeGestureTracker {
    shared: Rc<TrackerShared>,
}

impl SwipeGestureTracker {
    pub fn new(
        config: SwipeConfig,
        callbacks: SwipeCallbacks,
        clock: FrameClock,
    ) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        let shared = TrackerShared {
            config,
            state: RefCell::new(SwipeState::Idle),
            on_swipe: RefCell::new(callbacks.on_swipe),
            on_animation_complete: RefCell::new(callbacks.on_animation_complete),
            announcer: RefCell::new(None),
            capture_host: RefCell::new(None),
            visuals: Animatable::new(CardPairVisual::at_rest(), clock),
        };
        Ok(Self {
            shared: Rc::new(shared),
        })
    }

    pub fn with_announcer(self, announcer: Rc<dyn Announcer>) -> Self {
        self.shared.announcer.replace(Some(announcer));
        self
    }

    pub fn with_pointer_capture(self, host: Rc<dyn PointerCaptureHost>) -> Self {
        self.set_pointer_capture(host);
        self
    }

    /// Install the capture host used by drags started from now on.
    pub fn set_pointer_capture(&self, host: Rc<dyn PointerCaptureHost>) {
        self.shared.capture_host.replace(Some(host));
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.shared.config
    }

    /// Start a drag with the primary pointer.
    pub fn begin_drag(&self, x: f32, y: f32) -> bool {
        self.begin(PRIMARY_POINTER, Point::new(x, y))
    }

    pub fn update_drag(&self, x: f32) -> bool {
        self.update(None, x)
    }

    pub fn end_drag(&self) -> bool {
        self.end(None)
    }

    /// Abandon the current drag and snap the cards back to rest.
    ///
    /// No callback fires. Does nothing outside a drag.
    pub fn cancel(&self) -> bool {
        let session = {
            let mut state = self.shared.state.borrow_mut();
            if !matches!(*state, SwipeState::Dragging(_)) {
                return false;
            }
            mem::replace(&mut *state, SwipeState::Idle)
        };
        drop(session);

        self.shared
            .visuals
            .animate_to(CardPairVisual::at_rest(), self.shared.config.snap_back_spec());
        log::debug!("drag cancelled, snapping back");
        true
    }

    /// Commit a swipe without a drag, as a keyboard shortcut or button does.
    ///
    /// Ignored while a previous swipe is still animating. A drag in progress
    /// is abandoned in favour of the action.
    pub fn trigger_action(&self, direction: SwipeDirection) -> bool {
        self.commit(direction)
    }

    /// Post a message for assistive technology.
    pub fn announce(&self, message: &str) {
        let announcer = self.shared.announcer.borrow().clone();
        match announcer {
            Some(announcer) => announcer.announce(message),
            None => log::debug!("no announcer attached, dropping {message:?}"),
        }
    }

    pub fn phase(&self) -> SwipePhase {
        match &*self.shared.state.borrow() {
            SwipeState::Idle => SwipePhase::Idle,
            SwipeState::Dragging(_) => SwipePhase::Dragging,
            SwipeState::Animating(direction) => SwipePhase::Animating(*direction),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == SwipePhase::Dragging
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), SwipePhase::Animating(_))
    }

    /// Current drag distance; zero when no drag is in progress.
    pub fn drag_distance(&self) -> f32 {
        match &*self.shared.state.borrow() {
            SwipeState::Dragging(session) => session.distance,
            _ => 0.0,
        }
    }

    pub fn has_pointer_capture(&self) -> bool {
        match &*self.shared.state.borrow() {
            SwipeState::Dragging(session) => session.has_capture(),
            _ => false,
        }
    }

    /// Feedback for the drag in progress, or the neutral value otherwise.
    pub fn feedback(&self) -> DragFeedback {
        match &*self.shared.state.borrow() {
            SwipeState::Dragging(session) => {
                DragFeedback::compute(session.distance, &self.shared.config)
            }
            _ => DragFeedback::default(),
        }
    }

    /// The direction currently being shown to the user: the drag's lean
    /// while dragging, the committed direction while animating.
    pub fn active_direction(&self) -> Option<SwipeDirection> {
        match &*self.shared.state.borrow() {
            SwipeState::Idle => None,
            SwipeState::Dragging(session) => direction_hint(session.distance),
            SwipeState::Animating(direction) => Some(*direction),
        }
    }

    pub fn labels(&self) -> SwipeFeedbackLabels {
        let direction = self.active_direction();
        SwipeFeedbackLabels {
            pass: direction == Some(SwipeDirection::Left),
            interested: direction == Some(SwipeDirection::Right),
        }
    }

    /// Current visuals of both card slots, including any running animation.
    pub fn card_visuals(&self) -> CardPairVisual {
        self.shared.visuals.value()
    }

    fn begin(&self, pointer: PointerId, origin: Point) -> bool {
        match &*self.shared.state.borrow() {
            SwipeState::Idle => {}
            SwipeState::Dragging(session) => {
                log::trace!(
                    "pointer {pointer} down ignored, pointer {} is dragging",
                    session.pointer
                );
                return false;
            }
            SwipeState::Animating(_) => {
                log::trace!("pointer {pointer} down ignored while animating");
                return false;
            }
        }

        let host = self.shared.capture_host.borrow().clone();
        let capture = host.map(|host| PointerCapture::acquire(host, pointer));
        let session = DragSession {
            origin,
            pointer,
            distance: 0.0,
            capture,
        };

        let mut state = self.shared.state.borrow_mut();
        if !matches!(*state, SwipeState::Idle) {
            drop(state);
            drop(session);
            return false;
        }
        *state = SwipeState::Dragging(session);
        drop(state);

        // Interrupts a snap-back still in flight.
        self.shared
            .visuals
            .snap_to(DragFeedback::compute(0.0, &self.shared.config).card_visuals());
        log::debug!("drag started by pointer {pointer} at {origin:?}");
        true
    }

    fn update(&self, pointer: Option<PointerId>, x: f32) -> bool {
        let feedback = {
            let mut state = self.shared.state.borrow_mut();
            let SwipeState::Dragging(session) = &mut *state else {
                return false;
            };
            if pointer.is_some_and(|pointer| pointer != session.pointer) {
                return false;
            }
            session.distance = x - session.origin.x;
            DragFeedback::compute(session.distance, &self.shared.config)
        };
        self.shared.visuals.snap_to(feedback.card_visuals());
        log::trace!(
            "drag at {:.1}px, progress {:.2}",
            feedback.distance,
            feedback.progress
        );
        true
    }

    fn end(&self, pointer: Option<PointerId>) -> bool {
        let distance = match &*self.shared.state.borrow() {
            SwipeState::Dragging(session)
                if pointer.map_or(true, |pointer| pointer == session.pointer) =>
            {
                session.distance
            }
            _ => return false,
        };

        match SwipeDirection::resolve(distance, self.shared.config.threshold) {
            Some(direction) => self.commit(direction),
            None => self.cancel(),
        }
    }

    fn cancel_pointer(&self, pointer: PointerId) -> bool {
        let owns_drag = matches!(
            &*self.shared.state.borrow(),
            SwipeState::Dragging(session) if session.pointer == pointer
        );
        owns_drag && self.cancel()
    }

    fn commit(&self, direction: SwipeDirection) -> bool {
        let previous = {
            let mut state = self.shared.state.borrow_mut();
            if let SwipeState::Animating(running) = *state {
                log::trace!("{direction:?} ignored, still animating {running:?}");
                return false;
            }
            mem::replace(&mut *state, SwipeState::Animating(direction))
        };
        drop(previous);
        log::debug!("swipe committed to the {direction:?}");

        let shared = Rc::downgrade(&self.shared);
        self.shared.visuals.animate_to_then(
            CardPairVisual::exit(direction),
            self.shared.config.exit_spec(),
            move || {
                if let Some(shared) = shared.upgrade() {
                    shared.finish_exit();
                }
            },
        );

        let mut on_swipe = self.shared.on_swipe.borrow_mut();
        let on_swipe: &mut dyn FnMut(SwipeDirection) = &mut **on_swipe;
        on_swipe(direction);
        true
    }
}

impl InputHandler for SwipeGestureTracker {
    /// Route a pointer event. Handled events are consumed.
    ///
    /// Only the pointer that started the drag can move, release or cancel
    /// it; other pointers are ignored until it ends.
    fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        let handled = match event.kind {
            PointerEventKind::Down => self.begin(event.id, event.position),
            PointerEventKind::Move => self.update(Some(event.id), event.position.x),
            PointerEventKind::Up => self.end(Some(event.id)),
            PointerEventKind::Cancel => self.cancel_pointer(event.id),
        };
        if handled {
            event.consume();
        }
        handled
    }

    /// Left/right arrows swipe. Returns true for arrow keys even when the
    /// action is ignored, so hosts keep suppressing page scrolling.
    ///
    /// Auto-repeated key downs are swallowed: holding an arrow swipes one
    /// card, not one card per exit animation.
    fn handle_key_event(&self, event: &KeyEvent) -> bool {
        if !event.is_key_down() {
            return false;
        }
        let direction = match event.key_code {
            KeyCode::ArrowLeft => SwipeDirection::Left,
            KeyCode::ArrowRight => SwipeDirection::Right,
            KeyCode::Unknown => return false,
        };
        if event.repeat {
            log::trace!("repeated {direction:?} key ignored");
        } else {
            self.trigger_action(direction);
        }
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/swipe_tests.rs"]
mod tests;
