//! Pure math/data for drawing card layers in SwipeMatch
//!
//! This crate contains the geometry primitives and the layer transform that
//! hosts apply to the two card slots every frame.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point, Size};
}
