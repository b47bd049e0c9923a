//! Plain-text rendering of the demo screens.
//!
//! Each screen renders to a list of lines so tests can look for text the way
//! the robot tests look for on-screen labels.

use swipematch_foundation::{CardDeck, SwipeFeedbackLabels, SwipeOutcome};

use crate::catalog::{Meal, Restaurant};

fn feedback_line(labels: SwipeFeedbackLabels) -> Option<String> {
    if labels.pass {
        Some(format!("[{}]", SwipeOutcome::Passed.label()))
    } else if labels.interested {
        Some(format!("[{}]", SwipeOutcome::Interested.label()))
    } else {
        None
    }
}

/// Discovery card for the restaurant on top of the deck.
pub fn restaurant_card(
    restaurant: &Restaurant,
    position: &str,
    labels: SwipeFeedbackLabels,
) -> Vec<String> {
    let mut lines = vec![
        format!("Discover Restaurants ({position})"),
        restaurant.name.to_owned(),
        format!(
            "{} · {} · {:.1}",
            restaurant.cuisine, restaurant.distance, restaurant.rating
        ),
        "Top healthy dishes:".to_owned(),
    ];
    lines.extend(restaurant.top_dishes.iter().map(|dish| {
        format!(
            "  {} {} ({} {})",
            dish.name,
            dish.price,
            dish.health_score,
            dish.health_band()
        )
    }));
    lines.extend(feedback_line(labels));
    lines.push("← Pass   Interested →".to_owned());
    lines
}

pub fn meal_card(meal: &Meal, labels: SwipeFeedbackLabels) -> Vec<String> {
    let mut lines = vec![
        meal.name.to_owned(),
        meal.description.to_owned(),
        format!(
            "{} · {:.1} · {} cal · {} protein",
            meal.cook_time, meal.rating, meal.calories, meal.protein
        ),
        meal.tags.join(", "),
    ];
    lines.extend(feedback_line(labels));
    lines
}

pub fn all_done(interested: usize) -> Vec<String> {
    vec![
        "All Done!".to_owned(),
        "You've reviewed all nearby restaurants. Check your history or start over.".to_owned(),
        format!("Interested: {interested}"),
        "[Start Over]".to_owned(),
        "[View History]".to_owned(),
    ]
}

/// History badge shown on the discovery header.
pub fn history_badge(count: usize) -> String {
    format!("History ({count})")
}

pub fn history<T>(deck: &CardDeck<T>, name: impl Fn(&T) -> &str) -> Vec<String> {
    let mut lines = vec!["Meal History".to_owned()];
    if deck.records().is_empty() {
        lines.push("No decisions yet".to_owned());
        return lines;
    }
    lines.extend(deck.history().map(|(item, outcome)| {
        let badge = match outcome {
            SwipeOutcome::Interested => "Interested",
            SwipeOutcome::Passed => "Passed",
        };
        format!("{} [{badge}]", name(item))
    }));
    lines
}
