//! Shared gesture constants for the swipe-to-match cards.
//!
//! All distances are in logical pixels. The commit threshold is deliberately
//! absent: every deck picks its own (see [`crate::SwipeConfig`]).

use swipematch_animation::{CubicBezier, Easing};

/// Horizontal distance at which the next card is fully revealed.
///
/// Independent of the commit threshold: progress keeps growing after a drag
/// has already passed the threshold, and saturates at 1.0 here.
pub const PROGRESS_CAP: f32 = 200.0;

/// Drags closer than this to the origin show no direction hint.
///
/// Suppresses PASS/INTERESTED label flicker from finger jitter around the
/// press position.
pub const DIRECTION_DEAD_ZONE: f32 = 10.0;

/// Degrees of tilt per pixel of drag.
pub const ROTATION_PER_PIXEL: f32 = 0.15;

/// Pixels of drag over which the dragged card fades by 1.0 alpha.
pub const ALPHA_FALLOFF_DISTANCE: f32 = 400.0;

/// Lower bound for the dragged card's alpha.
pub const MIN_DRAG_ALPHA: f32 = 0.7;

/// Horizontal parallax of the next card, as a fraction of the drag distance.
pub const NEXT_CARD_PARALLAX: f32 = 0.1;

/// Resting scale of the next card.
pub const NEXT_CARD_REST_SCALE: f32 = 0.95;

/// Resting alpha of the next card.
pub const NEXT_CARD_REST_ALPHA: f32 = 0.7;

/// Resting downward offset of the next card.
pub const NEXT_CARD_REST_OFFSET_Y: f32 = 8.0;

/// Exit translation as a fraction of the card width.
pub const EXIT_TRANSLATION_FRACTION: f32 = 1.2;

/// Exit rotation in degrees.
pub const EXIT_ROTATION: f32 = 30.0;

/// Z order of the interactive card.
pub const CURRENT_CARD_Z: i32 = 20;

/// Z order of the preview card at rest.
pub const NEXT_CARD_Z: i32 = 0;

/// Z order of the preview card while it is promoted during an exit.
pub const PROMOTED_NEXT_CARD_Z: i32 = 15;

/// Duration of the committed-swipe exit animation.
pub const EXIT_DURATION_MS: u64 = 500;

/// Duration of the cancelled-drag snap-back animation.
pub const SNAP_BACK_DURATION_MS: u64 = 300;

/// `cubic-bezier(0.25, 0.46, 0.45, 0.94)`: decelerating exit.
pub const EXIT_EASING: Easing = Easing::CubicBezier(CubicBezier::new(0.25, 0.46, 0.45, 0.94));

/// `cubic-bezier(0.34, 1.56, 0.64, 1)`: snap-back with a slight overshoot.
pub const SNAP_BACK_EASING: Easing = Easing::CubicBezier(CubicBezier::new(0.34, 1.56, 0.64, 1.0));

/// How long an assistive-technology announcement stays in the live region.
pub const ANNOUNCEMENT_DURATION_MS: u64 = 1_000;
