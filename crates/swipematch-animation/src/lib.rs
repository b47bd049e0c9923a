//! Animation system for SwipeMatch
//!
//! Time-based tweens with easing curves, advanced by the frame clock.

mod animation;

pub use animation::*;
