pub mod swipe;

pub use swipe::{
    DragSession, SwipeCallbacks, SwipeDirection, SwipeFeedbackLabels, SwipeGestureTracker,
    SwipePhase,
};
