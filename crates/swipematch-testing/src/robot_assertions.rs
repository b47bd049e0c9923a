//! Assertion utilities for robot testing

use swipematch_foundation::{CardPairVisual, SlotVisual};
use swipematch_ui_graphics::GraphicsLayer;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every component of two layers is approximately equal.
pub fn assert_layer_approx_eq(
    actual: &GraphicsLayer,
    expected: &GraphicsLayer,
    tolerance: f32,
    msg: &str,
) {
    let components = [
        ("alpha", actual.alpha, expected.alpha),
        ("scale", actual.scale, expected.scale),
        ("translation_x", actual.translation_x, expected.translation_x),
        (
            "translation_x_fraction",
            actual.translation_x_fraction,
            expected.translation_x_fraction,
        ),
        ("translation_y", actual.translation_y, expected.translation_y),
        ("rotation_z", actual.rotation_z, expected.rotation_z),
    ];
    for (name, actual, expected) in components {
        assert_approx_eq(actual, expected, tolerance, &format!("{} - {}", msg, name));
    }
}

pub fn assert_slot_approx_eq(actual: &SlotVisual, expected: &SlotVisual, tolerance: f32, msg: &str) {
    assert_eq!(actual.z_index, expected.z_index, "{}: z-index", msg);
    assert_layer_approx_eq(&actual.layer, &expected.layer, tolerance, msg);
}

/// Assert both cards are back in their resting positions.
pub fn assert_at_rest(visuals: &CardPairVisual, msg: &str) {
    let rest = CardPairVisual::at_rest();
    assert_slot_approx_eq(&visuals.current, &rest.current, 1e-4, &format!("{} - current", msg));
    assert_slot_approx_eq(&visuals.next, &rest.next, 1e-4, &format!("{} - next", msg));
}

/// Assert that a list contains a specific text fragment.
pub fn assert_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' not found in {:?}",
        msg,
        fragment,
        texts
    );
}

/// Assert that a list does not contain a specific text fragment.
pub fn assert_not_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        !texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' unexpectedly found in {:?}",
        msg,
        fragment,
        texts
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
