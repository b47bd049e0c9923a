//! Swipe-to-match card interaction: gesture tracking, card visuals, deck
//! state and accessibility announcements.
//!
//! Everything here is single-threaded and host-agnostic. A platform layer
//! feeds [`PointerEvent`]s and [`KeyEvent`]s in, drains the shared
//! [`FrameClock`](swipematch_core::FrameClock) once per display frame, and
//! paints [`CardPairVisual`] out.

pub mod card_visuals;
pub mod deck;
pub mod gesture_constants;
pub mod nodes;
pub mod semantics;
mod swipe_config;

pub use card_visuals::{CardPairVisual, DragFeedback, SlotVisual};
pub use deck::{CardDeck, DeckMode, SwipeDeck, SwipeOutcome, SwipeRecord};
pub use nodes::input::gestures::{
    DragSession, SwipeCallbacks, SwipeDirection, SwipeFeedbackLabels, SwipeGestureTracker,
    SwipePhase,
};
pub use nodes::input::{
    InputDispatcher, InputEvent, InputHandler, KeyCode, KeyEvent, KeyEventType, PointerCapture,
    PointerCaptureHost, PointerEvent, PointerEventKind, PointerId, PointerSource,
    PRIMARY_POINTER,
};
pub use semantics::{Announcer, LiveRegion};
pub use swipe_config::{SwipeConfig, SwipeConfigError};

pub mod prelude {
    pub use crate::card_visuals::{CardPairVisual, SlotVisual};
    pub use crate::deck::{CardDeck, DeckMode, SwipeDeck, SwipeOutcome};
    pub use crate::nodes::input::gestures::{SwipeCallbacks, SwipeDirection, SwipeGestureTracker};
    pub use crate::nodes::input::prelude::*;
    pub use crate::semantics::{Announcer, LiveRegion};
    pub use crate::swipe_config::SwipeConfig;
}
