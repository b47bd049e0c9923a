//! Mock catalog shown by the demo screens.

use std::fmt;

/// Commit threshold of the restaurant finder cards.
pub const RESTAURANT_SWIPE_THRESHOLD: f32 = 50.0;

/// Commit threshold of the meal match cards.
pub const MEAL_SWIPE_THRESHOLD: f32 = 120.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Dish {
    pub name: &'static str,
    pub health_score: u8,
    pub price: &'static str,
}

impl Dish {
    pub fn health_band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub distance: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
    pub top_dishes: Vec<Dish>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meal {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cook_time: &'static str,
    pub rating: f32,
    pub calories: u32,
    pub protein: &'static str,
    pub tags: Vec<&'static str>,
}

/// Coarse rating of a dish's health score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => HealthBand::Excellent,
            80..=89 => HealthBand::Good,
            _ => HealthBand::Fair,
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthBand::Excellent => "excellent",
            HealthBand::Good => "good",
            HealthBand::Fair => "fair",
        };
        f.write_str(label)
    }
}

fn dish(name: &'static str, health_score: u8, price: &'static str) -> Dish {
    Dish {
        name,
        health_score,
        price,
    }
}

pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1",
            name: "Green Garden Bistro",
            distance: "0.3 miles",
            cuisine: "Mediterranean",
            rating: 4.5,
            top_dishes: vec![
                dish("Quinoa Power Bowl", 95, "$14"),
                dish("Grilled Salmon", 92, "$18"),
                dish("Greek Salad", 88, "$12"),
            ],
        },
        Restaurant {
            id: "2",
            name: "Tokyo Fusion",
            distance: "0.5 miles",
            cuisine: "Japanese",
            rating: 4.7,
            top_dishes: vec![
                dish("Miso Salmon Bowl", 90, "$16"),
                dish("Veggie Sushi Roll", 85, "$13"),
                dish("Seaweed Salad", 93, "$8"),
            ],
        },
        Restaurant {
            id: "3",
            name: "Farm Fresh Kitchen",
            distance: "0.8 miles",
            cuisine: "Farm-to-Table",
            rating: 4.3,
            top_dishes: vec![
                dish("Grass-Fed Steak", 87, "$24"),
                dish("Roasted Veggie Plate", 94, "$15"),
                dish("Herb Crusted Chicken", 89, "$19"),
            ],
        },
    ]
}

pub fn meals() -> Vec<Meal> {
    vec![
        Meal {
            id: "1",
            name: "Mediterranean Quinoa Bowl",
            description: "Fresh quinoa with roasted vegetables, feta cheese, and tahini dressing",
            cook_time: "15 min",
            rating: 4.8,
            calories: 420,
            protein: "18g",
            tags: vec!["Vegetarian", "High Protein", "Mediterranean"],
        },
        Meal {
            id: "2",
            name: "Grilled Salmon with Asparagus",
            description: "Wild-caught salmon with garlic roasted asparagus and lemon herb butter",
            cook_time: "20 min",
            rating: 4.9,
            calories: 380,
            protein: "32g",
            tags: vec!["High Protein", "Omega-3", "Low Carb"],
        },
        Meal {
            id: "3",
            name: "Thai Coconut Curry",
            description: "Creamy coconut curry with fresh vegetables and jasmine rice",
            cook_time: "25 min",
            rating: 4.7,
            calories: 450,
            protein: "14g",
            tags: vec!["Vegan", "Spicy", "Asian"],
        },
    ]
}
