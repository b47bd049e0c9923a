//! Pure mapping from drag distance to what the two stacked cards look like.
//!
//! The top card follows the pointer. The card underneath ("next") grows
//! and brightens toward its full size as the drag progresses, so the user
//! sees what comes next before committing.

use swipematch_animation::Lerp;
use swipematch_ui_graphics::GraphicsLayer;

use crate::gesture_constants::{
    ALPHA_FALLOFF_DISTANCE, CURRENT_CARD_Z, DIRECTION_DEAD_ZONE, EXIT_ROTATION,
    EXIT_TRANSLATION_FRACTION, MIN_DRAG_ALPHA, NEXT_CARD_PARALLAX, NEXT_CARD_REST_ALPHA,
    NEXT_CARD_REST_OFFSET_Y, NEXT_CARD_REST_SCALE, NEXT_CARD_Z, PROMOTED_NEXT_CARD_Z,
    ROTATION_PER_PIXEL,
};
use crate::nodes::input::gestures::SwipeDirection;
use crate::SwipeConfig;

/// Layer plus stacking order of one card slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotVisual {
    pub layer: GraphicsLayer,
    pub z_index: i32,
}

impl SlotVisual {
    pub fn current_at_rest() -> Self {
        Self {
            layer: GraphicsLayer::default(),
            z_index: CURRENT_CARD_Z,
        }
    }

    pub fn next_at_rest() -> Self {
        Self {
            layer: next_card_layer(0.0, 0.0),
            z_index: NEXT_CARD_Z,
        }
    }
}

/// Stacking order is not interpolated: it switches to the target's value as
/// soon as a transition starts.
impl Lerp for SlotVisual {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            layer: self.layer.lerp(&target.layer, fraction),
            z_index: target.z_index,
        }
    }
}

/// Visual state of the current card and the next card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPairVisual {
    pub current: SlotVisual,
    pub next: SlotVisual,
}

impl CardPairVisual {
    pub fn at_rest() -> Self {
        Self {
            current: SlotVisual::current_at_rest(),
            next: SlotVisual::next_at_rest(),
        }
    }

    /// Where an exit animation ends: the current card off-screen, the next
    /// card promoted to full size above the rest of the stack.
    pub fn exit(direction: SwipeDirection) -> Self {
        let sign = direction.sign();
        Self {
            current: SlotVisual {
                layer: GraphicsLayer {
                    alpha: 0.0,
                    translation_x_fraction: sign * EXIT_TRANSLATION_FRACTION,
                    rotation_z: sign * EXIT_ROTATION,
                    ..GraphicsLayer::default()
                },
                z_index: CURRENT_CARD_Z,
            },
            next: SlotVisual {
                layer: GraphicsLayer::default(),
                z_index: PROMOTED_NEXT_CARD_Z,
            },
        }
    }

    pub fn is_at_rest(&self) -> bool {
        *self == Self::at_rest()
    }
}

impl Default for CardPairVisual {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl Lerp for CardPairVisual {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            current: self.current.lerp(&target.current, fraction),
            next: self.next.lerp(&target.next, fraction),
        }
    }
}

/// Derived feedback for one drag distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragFeedback {
    pub distance: f32,
    /// `|distance| / progress_cap`, saturating at 1.
    pub progress: f32,
    /// Tilt of the dragged card in degrees.
    pub rotation: f32,
    pub alpha: f32,
    /// Direction the drag leans toward, once outside the dead zone.
    pub direction_hint: Option<SwipeDirection>,
    /// Whether releasing now would commit a swipe.
    pub past_threshold: bool,
}

impl DragFeedback {
    pub fn compute(distance: f32, config: &SwipeConfig) -> Self {
        let (rotation, alpha) = if config.reduced_motion {
            (0.0, 1.0)
        } else {
            (drag_rotation(distance), drag_alpha(distance))
        };
        Self {
            distance,
            progress: drag_progress(distance, config.progress_cap),
            rotation,
            alpha,
            direction_hint: direction_hint(distance),
            past_threshold: SwipeDirection::resolve(distance, config.threshold).is_some(),
        }
    }

    pub fn card_visuals(&self) -> CardPairVisual {
        CardPairVisual {
            current: SlotVisual {
                layer: GraphicsLayer {
                    alpha: self.alpha,
                    translation_x: self.distance,
                    rotation_z: self.rotation,
                    ..GraphicsLayer::default()
                },
                z_index: CURRENT_CARD_Z,
            },
            next: SlotVisual {
                layer: next_card_layer(self.progress, self.distance),
                z_index: NEXT_CARD_Z,
            },
        }
    }
}

pub fn drag_progress(distance: f32, progress_cap: f32) -> f32 {
    (distance.abs() / progress_cap).min(1.0)
}

pub fn drag_rotation(distance: f32) -> f32 {
    distance * ROTATION_PER_PIXEL
}

pub fn drag_alpha(distance: f32) -> f32 {
    (1.0 - distance.abs() / ALPHA_FALLOFF_DISTANCE).max(MIN_DRAG_ALPHA)
}

pub fn direction_hint(distance: f32) -> Option<SwipeDirection> {
    if distance < -DIRECTION_DEAD_ZONE {
        Some(SwipeDirection::Left)
    } else if distance > DIRECTION_DEAD_ZONE {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

/// Layer of the card underneath for a given reveal progress.
pub fn next_card_layer(progress: f32, distance: f32) -> GraphicsLayer {
    GraphicsLayer {
        alpha: NEXT_CARD_REST_ALPHA + (1.0 - NEXT_CARD_REST_ALPHA) * progress,
        scale: NEXT_CARD_REST_SCALE + (1.0 - NEXT_CARD_REST_SCALE) * progress,
        translation_x: distance * NEXT_CARD_PARALLAX,
        translation_y: NEXT_CARD_REST_OFFSET_Y * (1.0 - progress),
        ..GraphicsLayer::default()
    }
}

#[cfg(test)]
#[path = "tests/card_visuals_tests.rs"]
mod tests;
