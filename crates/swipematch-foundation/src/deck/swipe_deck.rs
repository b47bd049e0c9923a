use std::cell::{Ref, RefCell};
use std::rc::Rc;

use swipematch_core::FrameClock;

use super::card_deck::{CardDeck, SwipeOutcome, SwipeRecord};
use crate::card_visuals::CardPairVisual;
use crate::nodes::input::dispatcher::InputHandler;
use crate::nodes::input::gestures::{
    SwipeCallbacks, SwipeDirection, SwipeFeedbackLabels, SwipeGestureTracker,
};
use crate::nodes::input::key_event::KeyEvent;
use crate::nodes::input::types::PointerEvent;
use crate::semantics::Announcer;
use crate::{SwipeConfig, SwipeConfigError};

/// A [`CardDeck`] wired to a [`SwipeGestureTracker`].
///
/// Each committed swipe announces the decision, records it and advances the
/// deck. Input is ignored once a finite deck runs out of cards.
pub struct SwipeDeck<T: 'static> {
    deck: Rc<RefCell<CardDeck<T>>>,
    tracker: SwipeGestureTracker,
}

impl<T: 'static> SwipeDeck<T> {
    /// `name` renders an item for announcements.
    pub fn new(
        deck: CardDeck<T>,
        config: SwipeConfig,
        clock: FrameClock,
        announcer: Rc<dyn Announcer>,
        name: impl Fn(&T) -> String + 'static,
    ) -> Result<Self, SwipeConfigError> {
        let deck = Rc::new(RefCell::new(deck));

        let on_swipe = {
            let deck = Rc::clone(&deck);
            let announcer = Rc::clone(&announcer);
            move |direction: SwipeDirection| {
                let mut deck = deck.borrow_mut();
                if let Some(item) = deck.current() {
                    let outcome = SwipeOutcome::from(direction);
                    let message = format!("{} {}", outcome.announcement_prefix(), name(item));
                    announcer.announce(&message);
                }
                deck.record(direction);
            }
        };

        let tracker = SwipeGestureTracker::new(config, SwipeCallbacks::new(on_swipe), clock)?
            .with_announcer(announcer);
        Ok(Self { deck, tracker })
    }

    pub fn tracker(&self) -> &SwipeGestureTracker {
        &self.tracker
    }

    pub fn deck(&self) -> Ref<'_, CardDeck<T>> {
        self.deck.borrow()
    }

    pub fn is_exhausted(&self) -> bool {
        self.deck.borrow().is_exhausted()
    }

    /// Swipe the current card as if by a keyboard shortcut or button.
    pub fn trigger_action(&self, direction: SwipeDirection) -> bool {
        !self.is_exhausted() && self.tracker.trigger_action(direction)
    }

    pub fn pass(&self) -> bool {
        self.trigger_action(SwipeDirection::Left)
    }

    pub fn interested(&self) -> bool {
        self.trigger_action(SwipeDirection::Right)
    }

    /// Back to the first card; earlier decisions stay in the history.
    pub fn restart(&self) {
        self.deck.borrow_mut().restart();
    }

    pub fn last_record(&self) -> Option<SwipeRecord> {
        self.deck.borrow().records().last().copied()
    }

    pub fn labels(&self) -> SwipeFeedbackLabels {
        self.tracker.labels()
    }

    pub fn card_visuals(&self) -> CardPairVisual {
        self.tracker.card_visuals()
    }
}

impl<T: 'static> InputHandler for SwipeDeck<T> {
    fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        !self.is_exhausted() && self.tracker.handle_pointer_event(event)
    }

    fn handle_key_event(&self, event: &KeyEvent) -> bool {
        !self.is_exhausted() && self.tracker.handle_key_event(event)
    }
}

#[cfg(test)]
#[path = "../tests/swipe_deck_tests.rs"]
mod tests;
