//! Restaurant finder and meal matches, each a deck behind a swipe tracker.

use std::cell::Cell;
use std::rc::Rc;

use swipematch_core::FrameClock;
use swipematch_foundation::{
    CardDeck, CardPairVisual, InputHandler, KeyEvent, LiveRegion, PointerEvent, SwipeConfig,
    SwipeConfigError, SwipeDeck, SwipeOutcome,
};

use crate::catalog::{self, Meal, Restaurant, MEAL_SWIPE_THRESHOLD, RESTAURANT_SWIPE_THRESHOLD};
use crate::screens;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Discovery,
    AllDone,
    History,
}

/// Finite deck of nearby restaurants.
pub struct RestaurantFinder {
    deck: SwipeDeck<Restaurant>,
    live_region: LiveRegion,
    showing_history: Cell<bool>,
}

impl RestaurantFinder {
    pub fn new(clock: FrameClock, reduced_motion: bool) -> Result<Self, SwipeConfigError> {
        Self::with_restaurants(catalog::restaurants(), clock, reduced_motion)
    }

    pub fn with_restaurants(
        restaurants: Vec<Restaurant>,
        clock: FrameClock,
        reduced_motion: bool,
    ) -> Result<Self, SwipeConfigError> {
        let live_region = LiveRegion::new(clock.clone());
        let config =
            SwipeConfig::new(RESTAURANT_SWIPE_THRESHOLD).with_reduced_motion(reduced_motion);
        let deck = SwipeDeck::new(
            CardDeck::finite(restaurants),
            config,
            clock,
            Rc::new(live_region.clone()),
            |restaurant: &Restaurant| restaurant.name.to_owned(),
        )?;
        Ok(Self {
            deck,
            live_region,
            showing_history: Cell::new(false),
        })
    }

    pub fn deck(&self) -> &SwipeDeck<Restaurant> {
        &self.deck
    }

    pub fn screen(&self) -> Screen {
        if self.showing_history.get() {
            Screen::History
        } else if self.deck.is_exhausted() && !self.deck.tracker().is_animating() {
            Screen::AllDone
        } else {
            Screen::Discovery
        }
    }

    pub fn toggle_history(&self) {
        self.showing_history.set(!self.showing_history.get());
    }

    pub fn start_over(&self) {
        self.showing_history.set(false);
        self.deck.restart();
        log::info!("restaurant finder restarted");
    }

    pub fn pass(&self) -> bool {
        self.screen() == Screen::Discovery && self.deck.pass()
    }

    pub fn interested(&self) -> bool {
        self.screen() == Screen::Discovery && self.deck.interested()
    }

    pub fn live_region_text(&self) -> String {
        self.live_region.text()
    }

    pub fn card_visuals(&self) -> CardPairVisual {
        self.deck.card_visuals()
    }

    pub fn render(&self) -> Vec<String> {
        let deck = self.deck.deck();
        let mut lines = vec![screens::history_badge(deck.records().len())];
        match self.screen() {
            Screen::History => {
                lines.extend(screens::history(&*deck, |restaurant| restaurant.name));
            }
            Screen::AllDone => {
                lines.extend(screens::all_done(deck.count(SwipeOutcome::Interested)));
            }
            Screen::Discovery => {
                let position = deck.position_label().unwrap_or_default();
                if let Some(restaurant) = deck.current() {
                    lines.extend(screens::restaurant_card(
                        restaurant,
                        &position,
                        self.deck.labels(),
                    ));
                }
            }
        }
        let announcement = self.live_region.text();
        if !announcement.is_empty() {
            lines.push(format!("(live) {announcement}"));
        }
        lines
    }
}

impl InputHandler for RestaurantFinder {
    fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        self.screen() == Screen::Discovery && self.deck.handle_pointer_event(event)
    }

    fn handle_key_event(&self, event: &KeyEvent) -> bool {
        self.screen() == Screen::Discovery && self.deck.handle_key_event(event)
    }
}

/// Looping deck of suggested meals.
pub struct MealMatches {
    deck: SwipeDeck<Meal>,
    live_region: LiveRegion,
}

impl MealMatches {
    pub fn new(clock: FrameClock, reduced_motion: bool) -> Result<Self, SwipeConfigError> {
        let live_region = LiveRegion::new(clock.clone());
        let config = SwipeConfig::new(MEAL_SWIPE_THRESHOLD).with_reduced_motion(reduced_motion);
        let deck = SwipeDeck::new(
            CardDeck::looping(catalog::meals()),
            config,
            clock,
            Rc::new(live_region.clone()),
            |meal: &Meal| meal.name.to_owned(),
        )?;
        Ok(Self { deck, live_region })
    }

    pub fn deck(&self) -> &SwipeDeck<Meal> {
        &self.deck
    }

    pub fn live_region_text(&self) -> String {
        self.live_region.text()
    }

    pub fn render(&self) -> Vec<String> {
        let deck = self.deck.deck();
        let mut lines = vec![format!(
            "Meal Matches ({} liked)",
            deck.count(SwipeOutcome::Interested)
        )];
        if let Some(meal) = deck.current() {
            lines.extend(screens::meal_card(meal, self.deck.labels()));
        }
        if let Some(next) = deck.next() {
            lines.push(format!("Up next: {}", next.name));
        }
        lines
    }
}

impl InputHandler for MealMatches {
    fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        self.deck.handle_pointer_event(event)
    }

    fn handle_key_event(&self, event: &KeyEvent) -> bool {
        self.deck.handle_key_event(event)
    }
}
