//! Core timing runtime for SwipeMatch.
//!
//! Everything in SwipeMatch runs on one UI thread. Animation phases and
//! transient timers are expressed as one-shot frame callbacks registered on a
//! [`FrameClock`]; the host drains them once per rendered frame.

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use ticker::FrameTicker;

pub type FrameCallbackId = u64;

/// Nanoseconds per millisecond, used when converting animation durations.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::ticker::FrameTicker;
}
