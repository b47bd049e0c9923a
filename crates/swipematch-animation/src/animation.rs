//! Tween animations driven by [`FrameClock`] callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use swipematch_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};
use swipematch_ui_graphics::GraphicsLayer;

/// Types a tween can move between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for GraphicsLayer {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        GraphicsLayer {
            alpha: self.alpha.lerp(&target.alpha, fraction),
            scale: self.scale.lerp(&target.scale, fraction),
            translation_x: self.translation_x.lerp(&target.translation_x, fraction),
            translation_x_fraction: self
                .translation_x_fraction
                .lerp(&target.translation_x_fraction, fraction),
            translation_y: self.translation_y.lerp(&target.translation_y, fraction),
            rotation_z: self.rotation_z.lerp(&target.rotation_z, fraction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress. The result may
    /// leave `[0, 1]` for overshooting curves but is exactly 0 and 1 at the
    /// ends.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::CubicBezier(curve) => curve.ease(fraction),
        }
    }
}

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing curve.
///
/// `y1`/`y2` outside `[0, 1]` overshoot, which is how the snap-back curve
/// bounces past rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

const SOLVE_EPSILON: f32 = 1e-6;

/// Power-basis coefficients of one axis of a bezier anchored at 0 and 1.
fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    [a, b, c]
}

fn sample([a, b, c]: [f32; 3], t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.parameter_for(x);
        sample(coefficients(self.y1, self.y2), t)
    }

    /// Curve parameter `t` whose x coordinate is `x`.
    ///
    /// Newton steps converge in a few iterations on well-behaved curves;
    /// bisection covers flat spots where the slope vanishes.
    fn parameter_for(&self, x: f32) -> f32 {
        let xs = coefficients(self.x1, self.x2);

        let mut t = x;
        for _ in 0..8 {
            let error = sample(xs, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let derivative = slope(xs, t);
            if derivative.abs() < SOLVE_EPSILON {
                break;
            }
            t = (t - error / derivative).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..24 {
            let error = sample(xs, t) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    fn duration_nanos(&self) -> u64 {
        self.duration_millis * NANOS_PER_MILLI
    }
}

/// A value that tweens toward a target on frame clock callbacks.
///
/// The start time is anchored on the first frame after [`Animatable::animate_to`],
/// so a tween of `duration_millis` finishes on the first frame at least that
/// long after the anchoring frame.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_finished: Option<Box<dyn FnOnce()>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::linear(0),
            start_time_nanos: None,
            registration: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    ///
    /// A running animation is interrupted; its completion callback is dropped
    /// without being called.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        self.start_animation(target, spec, None);
    }

    /// Like [`Animatable::animate_to`], calling `on_finished` once the value
    /// reaches `target`.
    pub fn animate_to_then(
        &self,
        target: T,
        spec: AnimationSpec,
        on_finished: impl FnOnce() + 'static,
    ) {
        self.start_animation(target, spec, Some(Box::new(on_finished)));
    }

    fn start_animation(
        &self,
        target: T,
        spec: AnimationSpec,
        on_finished: Option<Box<dyn FnOnce()>>,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.on_finished = on_finished;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `target` without animating, interrupting any running tween.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = target.clone();
        inner.start = target.clone();
        inner.target = target;
        inner.start_time_nanos = None;
        inner.on_finished = None;
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

            if elapsed_nanos >= spec.duration_nanos() {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
                Some(inner.on_finished.take())
            } else {
                let linear = elapsed_nanos as f32 / spec.duration_nanos() as f32;
                let eased = spec.easing.transform(linear);
                inner.current = inner.start.lerp(&inner.target, eased);
                None
            }
        };

        match finished {
            Some(on_finished) => {
                log::trace!("tween finished at {frame_time_nanos}ns");
                if let Some(on_finished) = on_finished {
                    on_finished();
                }
            }
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
