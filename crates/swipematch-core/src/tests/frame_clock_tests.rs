use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn drained_callbacks_receive_frame_time() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _first = clock.with_frame_nanos(move |time| sink.borrow_mut().push(time));
    let sink = Rc::clone(&seen);
    let _second = clock.with_frame_millis(move |millis| sink.borrow_mut().push(millis));

    clock.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[32_000_000, 32]);
    assert!(!clock.has_frame_callbacks());
    assert_eq!(clock.last_frame_nanos(), Some(32_000_000));
}

#[test]
fn dropping_registration_cancels_callback() {
    let clock = FrameClock::new();
    let fired = Rc::new(RefCell::new(false));

    let flag = Rc::clone(&fired);
    let registration = clock.with_frame_nanos(move |_| *flag.borrow_mut() = true);
    assert!(clock.has_frame_callbacks());
    drop(registration);

    clock.drain_frame_callbacks(1);
    assert!(!*fired.borrow());
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn explicit_cancel_only_removes_its_own_callback() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let cancelled = clock.with_frame_nanos(move |_| sink.borrow_mut().push("cancelled"));
    let sink = Rc::clone(&seen);
    let _kept = clock.with_frame_nanos(move |_| sink.borrow_mut().push("kept"));

    cancelled.cancel();
    clock.drain_frame_callbacks(1);

    assert_eq!(seen.borrow().as_slice(), &["kept"]);
}

#[test]
fn callbacks_registered_during_drain_run_next_frame() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let follow_up = Rc::new(RefCell::new(None));

    let sink = Rc::clone(&seen);
    let slot = Rc::clone(&follow_up);
    let inner_clock = clock.clone();
    let _registration = clock.with_frame_nanos(move |time| {
        sink.borrow_mut().push(time);
        let sink = Rc::clone(&sink);
        let registration = inner_clock.with_frame_nanos(move |time| sink.borrow_mut().push(time));
        slot.borrow_mut().replace(registration);
    });

    clock.drain_frame_callbacks(10);
    assert_eq!(seen.borrow().as_slice(), &[10]);
    assert!(clock.has_frame_callbacks());

    clock.drain_frame_callbacks(20);
    assert_eq!(seen.borrow().as_slice(), &[10, 20]);
}
