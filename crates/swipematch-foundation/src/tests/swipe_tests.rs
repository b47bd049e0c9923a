use super::*;

use std::cell::Cell;

use swipematch_core::NANOS_PER_MILLI;

use crate::nodes::input::types::PointerSource;

const FRAME_NANOS: u64 = 16 * NANOS_PER_MILLI;

struct Harness {
    clock: FrameClock,
    tracker: SwipeGestureTracker,
    swipes: Rc<RefCell<Vec<SwipeDirection>>>,
    completions: Rc<Cell<usize>>,
    now: Cell<u64>,
}

impl Harness {
    fn new(threshold: f32) -> Self {
        Self::with_config(SwipeConfig::new(threshold))
    }

    fn with_config(config: SwipeConfig) -> Self {
        let clock = FrameClock::new();
        let swipes = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));

        let sink = Rc::clone(&swipes);
        let counter = Rc::clone(&completions);
        let callbacks = SwipeCallbacks::new(move |direction| sink.borrow_mut().push(direction))
            .on_animation_complete(move || counter.set(counter.get() + 1));
        let tracker = SwipeGestureTracker::new(config, callbacks, clock.clone())
            .expect("valid config");

        Self {
            clock,
            tracker,
            swipes,
            completions,
            now: Cell::new(0),
        }
    }

    fn advance_ms(&self, millis: u64) {
        let end = self.now.get() + millis * NANOS_PER_MILLI;
        while self.now.get() <= end {
            self.clock.drain_frame_callbacks(self.now.get());
            self.now.set(self.now.get() + FRAME_NANOS);
        }
    }

    fn swipes(&self) -> Vec<SwipeDirection> {
        self.swipes.borrow().clone()
    }
}

#[derive(Default)]
struct CaptureLog(RefCell<Vec<String>>);

impl PointerCaptureHost for CaptureLog {
    fn acquire(&self, pointer: PointerId) {
        self.0.borrow_mut().push(format!("acquire {pointer}"));
    }

    fn release(&self, pointer: PointerId) {
        self.0.borrow_mut().push(format!("release {pointer}"));
    }
}

#[derive(Default)]
struct Messages(RefCell<Vec<String>>);

impl Announcer for Messages {
    fn announce(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn short_drag_snaps_back_without_callback() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    assert!(tracker.begin_drag(200.0, 300.0));
    assert!(tracker.update_drag(130.0));
    assert_eq!(tracker.drag_distance(), -70.0);
    assert!(tracker.end_drag());

    assert_eq!(tracker.phase(), SwipePhase::Idle);
    assert_eq!(tracker.drag_distance(), 0.0);
    assert!(harness.swipes().is_empty());
    assert!(!tracker.card_visuals().is_at_rest(), "snap back is animated");

    harness.advance_ms(320);
    assert!(tracker.card_visuals().is_at_rest());
    assert_eq!(harness.completions.get(), 0);
}

#[test]
fn new_drag_interrupts_snap_back() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    tracker.begin_drag(400.0, 0.0);
    tracker.update_drag(340.0);
    tracker.end_drag();
    harness.advance_ms(16);
    assert!(!tracker.card_visuals().is_at_rest(), "snap back under way");

    assert!(tracker.begin_drag(400.0, 0.0));
    let pressed = tracker.card_visuals();
    assert!(pressed.is_at_rest(), "zero-distance drag pose is the rest pose");
    assert!(!harness.clock.has_frame_callbacks());

    harness.advance_ms(32);
    assert_eq!(tracker.card_visuals(), pressed);
    assert_eq!(tracker.phase(), SwipePhase::Dragging);

    tracker.update_drag(380.0);
    assert_eq!(tracker.card_visuals().current.layer.translation_x, -20.0);
}

#[test]
fn long_drag_commits_once_then_settles() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    tracker.begin_drag(200.0, 300.0);
    tracker.update_drag(100.0);
    tracker.end_drag();

    assert_eq!(harness.swipes(), vec![SwipeDirection::Left]);
    assert_eq!(tracker.phase(), SwipePhase::Animating(SwipeDirection::Left));

    harness.advance_ms(480);
    assert!(tracker.is_animating());
    assert_eq!(harness.completions.get(), 0);

    harness.advance_ms(40);
    assert_eq!(tracker.phase(), SwipePhase::Idle);
    assert_eq!(harness.completions.get(), 1);
    assert!(tracker.card_visuals().is_at_rest());
    assert_eq!(harness.swipes().len(), 1);
}

#[test]
fn drag_of_exactly_threshold_snaps_back() {
    let harness = Harness::new(50.0);
    harness.tracker.begin_drag(0.0, 0.0);
    harness.tracker.update_drag(50.0);
    harness.tracker.end_drag();
    assert!(harness.swipes().is_empty());
    assert_eq!(harness.tracker.phase(), SwipePhase::Idle);
}

#[test]
fn arrow_key_swipes_from_idle() {
    let harness = Harness::new(80.0);
    let handled = harness
        .tracker
        .handle_key_event(&KeyEvent::key_down(KeyCode::ArrowRight));

    assert!(handled);
    assert_eq!(harness.swipes(), vec![SwipeDirection::Right]);
    assert!(harness.tracker.is_animating());
    assert!(harness.tracker.labels().interested);
    assert!(!harness.tracker.labels().pass);
}

#[test]
fn second_action_while_animating_is_ignored() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    tracker.handle_key_event(&KeyEvent::key_down(KeyCode::ArrowRight));
    assert!(tracker.handle_key_event(&KeyEvent::key_down(KeyCode::ArrowRight)));
    assert!(!tracker.trigger_action(SwipeDirection::Left));
    assert!(!tracker.begin_drag(10.0, 10.0));
    assert!(!tracker.update_drag(-300.0));
    assert!(!tracker.end_drag());
    assert!(!tracker.cancel());

    assert_eq!(harness.swipes(), vec![SwipeDirection::Right]);
    assert_eq!(tracker.phase(), SwipePhase::Animating(SwipeDirection::Right));

    harness.advance_ms(520);
    assert!(tracker.trigger_action(SwipeDirection::Left));
    assert_eq!(
        harness.swipes(),
        vec![SwipeDirection::Right, SwipeDirection::Left]
    );
}

#[test]
fn key_up_and_other_keys_are_not_handled() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    assert!(!tracker.handle_key_event(&KeyEvent::key_up(KeyCode::ArrowLeft)));
    assert!(!tracker.handle_key_event(&KeyEvent::key_down(KeyCode::Unknown)));
    assert!(harness.swipes().is_empty());
}

#[test]
fn held_arrow_key_swipes_once() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    let held = KeyEvent::key_down(KeyCode::ArrowRight).with_repeat(true);

    assert!(tracker.handle_key_event(&KeyEvent::key_down(KeyCode::ArrowRight)));
    harness.advance_ms(520);
    assert_eq!(tracker.phase(), SwipePhase::Idle);

    assert!(tracker.handle_key_event(&held), "still suppresses scrolling");
    harness.advance_ms(520);
    assert!(tracker.handle_key_event(&held));

    assert_eq!(harness.swipes(), vec![SwipeDirection::Right]);
    assert_eq!(tracker.phase(), SwipePhase::Idle);
}

#[test]
fn progress_saturates_past_cap() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    tracker.begin_drag(300.0, 0.0);

    tracker.update_drag(200.0);
    assert_eq!(tracker.feedback().progress, 0.5);

    tracker.update_drag(50.0);
    assert_eq!(tracker.feedback().progress, 1.0);
}

#[test]
fn labels_follow_drag_direction_outside_dead_zone() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    tracker.begin_drag(100.0, 0.0);

    tracker.update_drag(95.0);
    assert_eq!(tracker.labels(), SwipeFeedbackLabels::default());

    tracker.update_drag(80.0);
    assert!(tracker.labels().pass);
    assert!(!tracker.labels().interested);

    tracker.update_drag(130.0);
    assert!(tracker.labels().interested);
}

#[test]
fn drag_visuals_track_pointer() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    tracker.begin_drag(100.0, 0.0);
    tracker.update_drag(200.0);

    let visuals = tracker.card_visuals();
    assert_eq!(visuals.current.layer.translation_x, 100.0);
    assert_eq!(visuals.current.layer.alpha, 0.75);
    assert_eq!(visuals.next.layer.translation_x, 10.0);
}

#[test]
fn exit_moves_both_cards_in_lockstep() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    tracker.trigger_action(SwipeDirection::Left);

    harness.advance_ms(240);
    let midway = tracker.card_visuals();
    assert!(midway.current.layer.translation_x_fraction < 0.0);
    assert!(midway.current.layer.translation_x_fraction > -1.2);
    assert!(midway.current.layer.alpha < 1.0);
    assert!(midway.next.layer.scale > 0.95);
    assert!(midway.next.layer.scale < 1.0);
    assert_eq!(midway.next.z_index, 15);
}

#[test]
fn exit_animation_ignores_reduced_motion() {
    let harness = Harness::with_config(SwipeConfig::new(80.0).with_reduced_motion(true));
    harness.tracker.trigger_action(SwipeDirection::Right);
    harness.advance_ms(240);
    assert!(harness.tracker.card_visuals().current.layer.rotation_z > 0.0);
}

#[test]
fn pointer_capture_is_held_for_the_drag() {
    let harness = Harness::new(80.0);
    let log = Rc::new(CaptureLog::default());
    let tracker = harness.tracker.clone().with_pointer_capture(log.clone());

    let down = PointerEvent::down(100.0, 0.0)
        .with_id(3)
        .with_source(PointerSource::Touch);
    assert!(tracker.handle_pointer_event(&down));
    assert!(down.is_consumed());
    assert!(tracker.has_pointer_capture());
    assert_eq!(log.0.borrow().as_slice(), &["acquire 3"]);

    tracker.handle_pointer_event(&PointerEvent::moved(10.0, 0.0).with_id(3));
    tracker.handle_pointer_event(&PointerEvent::up(10.0, 0.0).with_id(3));
    assert!(!tracker.has_pointer_capture());
    assert_eq!(log.0.borrow().as_slice(), &["acquire 3", "release 3"]);
    assert_eq!(harness.swipes(), vec![SwipeDirection::Left]);
}

#[test]
fn capture_host_installed_later_applies_to_every_handle() {
    let harness = Harness::new(80.0);
    let log = Rc::new(CaptureLog::default());
    let handle = harness.tracker.clone();
    handle.set_pointer_capture(log.clone());

    assert!(harness.tracker.begin_drag(0.0, 0.0));
    assert!(harness.tracker.has_pointer_capture());
    harness.tracker.cancel();
    assert_eq!(log.0.borrow().as_slice(), &["acquire 0", "release 0"]);
}

#[test]
fn capture_released_on_cancel_and_on_drop() {
    let clock = FrameClock::new();
    let log = Rc::new(CaptureLog::default());
    let tracker = SwipeGestureTracker::new(
        SwipeConfig::new(80.0),
        SwipeCallbacks::new(|_| {}),
        clock,
    )
    .expect("valid config")
    .with_pointer_capture(log.clone());

    tracker.begin_drag(0.0, 0.0);
    tracker.cancel();
    assert_eq!(log.0.borrow().len(), 2);

    tracker.begin_drag(0.0, 0.0);
    drop(tracker);
    assert_eq!(
        log.0.borrow().as_slice(),
        &["acquire 0", "release 0", "acquire 0", "release 0"]
    );
}

#[test]
fn action_during_drag_abandons_the_drag() {
    let harness = Harness::new(80.0);
    let log = Rc::new(CaptureLog::default());
    let tracker = harness.tracker.clone().with_pointer_capture(log.clone());

    tracker.begin_drag(0.0, 0.0);
    tracker.update_drag(30.0);
    assert!(tracker.trigger_action(SwipeDirection::Left));

    assert_eq!(tracker.phase(), SwipePhase::Animating(SwipeDirection::Left));
    assert_eq!(log.0.borrow().last().map(String::as_str), Some("release 0"));
    assert!(!tracker.end_drag());
    assert_eq!(harness.swipes(), vec![SwipeDirection::Left]);
}

#[test]
fn other_pointers_are_ignored_during_drag() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    tracker.handle_pointer_event(&PointerEvent::down(100.0, 0.0).with_id(1));
    let second_down = PointerEvent::down(300.0, 0.0).with_id(2);
    assert!(!tracker.handle_pointer_event(&second_down));
    assert!(!second_down.is_consumed());

    assert!(!tracker.handle_pointer_event(&PointerEvent::moved(0.0, 0.0).with_id(2)));
    assert!(!tracker.handle_pointer_event(&PointerEvent::up(0.0, 0.0).with_id(2)));
    assert!(!tracker.handle_pointer_event(&PointerEvent::cancel().with_id(2)));
    assert_eq!(tracker.phase(), SwipePhase::Dragging);
    assert_eq!(tracker.drag_distance(), 0.0);

    tracker.handle_pointer_event(&PointerEvent::moved(190.0, 0.0).with_id(1));
    tracker.handle_pointer_event(&PointerEvent::up(190.0, 0.0).with_id(1));
    assert_eq!(harness.swipes(), vec![SwipeDirection::Right]);
}

#[test]
fn pointer_cancel_snaps_back() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;

    tracker.handle_pointer_event(&PointerEvent::down(100.0, 0.0));
    tracker.handle_pointer_event(&PointerEvent::moved(0.0, 0.0));
    assert!(tracker.handle_pointer_event(&PointerEvent::cancel()));

    assert_eq!(tracker.phase(), SwipePhase::Idle);
    assert!(harness.swipes().is_empty());
    harness.advance_ms(320);
    assert!(tracker.card_visuals().is_at_rest());
}

#[test]
fn move_and_release_without_press_do_nothing() {
    let harness = Harness::new(80.0);
    let tracker = &harness.tracker;
    let stray_move = PointerEvent::moved(40.0, 0.0);
    assert!(!tracker.handle_pointer_event(&stray_move));
    assert!(!stray_move.is_consumed());
    assert!(!tracker.end_drag());
    assert!(!tracker.cancel());
    assert!(tracker.card_visuals().is_at_rest());
}

#[test]
fn swipe_callback_may_reenter_tracker() {
    let clock = FrameClock::new();
    let slot: Rc<RefCell<Option<SwipeGestureTracker>>> = Rc::new(RefCell::new(None));
    let reentry_results = Rc::new(RefCell::new(Vec::new()));

    let handle = Rc::clone(&slot);
    let results = Rc::clone(&reentry_results);
    let callbacks = SwipeCallbacks::new(move |_| {
        if let Some(tracker) = handle.borrow().as_ref() {
            results
                .borrow_mut()
                .push(tracker.trigger_action(SwipeDirection::Right));
        }
    });
    let tracker =
        SwipeGestureTracker::new(SwipeConfig::new(80.0), callbacks, clock).expect("valid config");
    slot.replace(Some(tracker.clone()));

    assert!(tracker.trigger_action(SwipeDirection::Left));
    assert_eq!(reentry_results.borrow().as_slice(), &[false]);
    assert_eq!(tracker.phase(), SwipePhase::Animating(SwipeDirection::Left));
    slot.replace(None);
}

#[test]
fn completion_callback_may_start_next_swipe() {
    let clock = FrameClock::new();
    let slot: Rc<RefCell<Option<SwipeGestureTracker>>> = Rc::new(RefCell::new(None));
    let swipes = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&swipes);
    let handle = Rc::clone(&slot);
    let callbacks = SwipeCallbacks::new(move |direction| sink.borrow_mut().push(direction))
        .on_animation_complete(move || {
            if let Some(tracker) = handle.borrow().as_ref() {
                tracker.trigger_action(SwipeDirection::Right);
            }
        });
    let tracker = SwipeGestureTracker::new(SwipeConfig::new(80.0), callbacks, clock.clone())
        .expect("valid config");
    slot.replace(Some(tracker.clone()));

    tracker.trigger_action(SwipeDirection::Left);
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(500 * NANOS_PER_MILLI);

    assert_eq!(
        swipes.borrow().as_slice(),
        &[SwipeDirection::Left, SwipeDirection::Right]
    );
    assert_eq!(tracker.phase(), SwipePhase::Animating(SwipeDirection::Right));
    slot.replace(None);
}

#[test]
fn invalid_config_is_rejected() {
    let result = SwipeGestureTracker::new(
        SwipeConfig::new(-5.0),
        SwipeCallbacks::new(|_| {}),
        FrameClock::new(),
    );
    assert!(matches!(
        result.err(),
        Some(SwipeConfigError::InvalidThreshold(_))
    ));
}

#[test]
fn announce_forwards_to_attached_announcer() {
    let harness = Harness::new(80.0);
    let messages = Rc::new(Messages::default());
    let tracker = harness.tracker.clone().with_announcer(messages.clone());

    tracker.announce("Passed Taco Truck");
    assert_eq!(messages.0.borrow().as_slice(), &["Passed Taco Truck"]);
}

#[test]
fn dropping_tracker_mid_exit_cancels_animation() {
    let harness = Harness::new(80.0);
    harness.tracker.trigger_action(SwipeDirection::Right);
    let Harness {
        clock,
        tracker,
        completions,
        ..
    } = harness;
    drop(tracker);

    assert!(!clock.has_frame_callbacks());
    clock.drain_frame_callbacks(1_000 * NANOS_PER_MILLI);
    assert_eq!(completions.get(), 0);
}
