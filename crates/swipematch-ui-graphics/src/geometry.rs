//! Points, sizes and the per-card layer transform.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Transform and alpha applied to a card.
///
/// Horizontal translation has two parts: `translation_x` in logical pixels
/// and `translation_x_fraction` as a fraction of the card's own width. The
/// host resolves the sum once it knows the card size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_x_fraction: f32,
    pub translation_y: f32,
    /// Clockwise rotation in degrees.
    pub rotation_z: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            translation_x: 0.0,
            translation_x_fraction: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
        }
    }
}

impl GraphicsLayer {
    /// Horizontal offset in pixels for a card of the given size.
    pub fn resolved_translation_x(&self, size: Size) -> f32 {
        self.translation_x + self.translation_x_fraction * size.width
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
