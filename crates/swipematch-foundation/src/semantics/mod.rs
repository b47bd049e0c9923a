//! Accessibility announcements.

mod announcer;

pub use announcer::{Announcer, LiveRegion};
