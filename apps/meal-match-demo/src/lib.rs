//! Restaurant finder and meal matches built on the SwipeMatch card tracker.

pub mod catalog;
pub mod finder;
pub mod screens;

pub use finder::{MealMatches, RestaurantFinder, Screen};

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
