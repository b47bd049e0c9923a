//! Testing utilities and robot harness for SwipeMatch cards

pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use recording::{CaptureEvent, RecordingAnnouncer, RecordingCaptureHost};
pub use robot::*;

pub mod prelude {
    pub use crate::recording::{CaptureEvent, RecordingAnnouncer, RecordingCaptureHost};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
