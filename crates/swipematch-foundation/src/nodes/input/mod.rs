pub mod capture;
pub mod dispatcher;
pub mod gestures;
pub mod key_event;
pub mod types;

pub use capture::{PointerCapture, PointerCaptureHost};
pub use dispatcher::{InputDispatcher, InputEvent, InputHandler};
pub use key_event::{KeyCode, KeyEvent, KeyEventType};
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerSource, PRIMARY_POINTER};

pub mod prelude {
    pub use super::capture::{PointerCapture, PointerCaptureHost};
    pub use super::dispatcher::{InputDispatcher, InputHandler};
    pub use super::key_event::{KeyCode, KeyEvent};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, PointerSource};
}
