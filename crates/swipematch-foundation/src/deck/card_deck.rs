//! Ordered deck of cards with a cursor and a decision history.
//!
//! Two traversal modes exist:
//! - [`DeckMode::Finite`] walks the items once and then reports exhaustion.
//! - [`DeckMode::Looping`] wraps back to the first item forever.

use crate::nodes::input::gestures::SwipeDirection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeckMode {
    #[default]
    Finite,
    Looping,
}

/// What a swipe means for the item it removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    Passed,
    Interested,
}

impl SwipeOutcome {
    /// Verb phrase used in announcements, e.g. "Passed Sushi Place".
    pub fn announcement_prefix(self) -> &'static str {
        match self {
            SwipeOutcome::Passed => "Passed",
            SwipeOutcome::Interested => "Interested in",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SwipeOutcome::Passed => "PASS",
            SwipeOutcome::Interested => "INTERESTED",
        }
    }
}

impl From<SwipeDirection> for SwipeOutcome {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => SwipeOutcome::Passed,
            SwipeDirection::Right => SwipeOutcome::Interested,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeRecord {
    pub item_index: usize,
    pub outcome: SwipeOutcome,
}

// ─────────────────────────────────────────────────────────────────────────────
// CardDeck
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct CardDeck<T> {
    items: Vec<T>,
    index: usize,
    mode: DeckMode,
    history: Vec<SwipeRecord>,
}

impl<T> CardDeck<T> {
    pub fn new(items: Vec<T>, mode: DeckMode) -> Self {
        Self {
            items,
            index: 0,
            mode,
            history: Vec::new(),
        }
    }

    pub fn finite(items: Vec<T>) -> Self {
        Self::new(items, DeckMode::Finite)
    }

    pub fn looping(items: Vec<T>) -> Self {
        Self::new(items, DeckMode::Looping)
    }

    pub fn mode(&self) -> DeckMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the card on top.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// The card shown underneath the current one.
    ///
    /// A looping deck of one card previews that same card.
    pub fn next(&self) -> Option<&T> {
        match self.mode {
            DeckMode::Finite => self.items.get(self.index + 1),
            DeckMode::Looping if self.items.is_empty() => None,
            DeckMode::Looping => self.items.get((self.index + 1) % self.items.len()),
        }
    }

    /// A finite deck is exhausted once every card was swiped. A looping deck
    /// only when it has no cards at all.
    pub fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    /// Record a decision on the current card and advance to the next one.
    ///
    /// Returns `None` without changing anything when the deck is exhausted.
    pub fn record(&mut self, direction: SwipeDirection) -> Option<SwipeRecord> {
        if self.is_exhausted() {
            return None;
        }
        let record = SwipeRecord {
            item_index: self.index,
            outcome: direction.into(),
        };
        self.history.push(record);
        self.index = match self.mode {
            DeckMode::Finite => self.index + 1,
            DeckMode::Looping => (self.index + 1) % self.items.len(),
        };
        log::debug!(
            "card {} {:?}, {} decisions so far",
            record.item_index,
            record.outcome,
            self.history.len()
        );
        Some(record)
    }

    /// Go back to the first card. The decision history is kept.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Decisions in the order they were made.
    pub fn history(&self) -> impl Iterator<Item = (&T, SwipeOutcome)> + '_ {
        self.history
            .iter()
            .filter_map(|record| Some((self.items.get(record.item_index)?, record.outcome)))
    }

    pub fn records(&self) -> &[SwipeRecord] {
        &self.history
    }

    /// Items swiped right, in order, with repeats for a looping deck.
    pub fn interested(&self) -> impl Iterator<Item = &T> + '_ {
        self.history()
            .filter(|(_, outcome)| *outcome == SwipeOutcome::Interested)
            .map(|(item, _)| item)
    }

    pub fn count(&self, outcome: SwipeOutcome) -> usize {
        self.history
            .iter()
            .filter(|record| record.outcome == outcome)
            .count()
    }

    /// "3 of 12" for the current card.
    pub fn position_label(&self) -> Option<String> {
        self.current()
            .map(|_| format!("{} of {}", self.index + 1, self.items.len()))
    }
}

#[cfg(test)]
#[path = "../tests/card_deck_tests.rs"]
mod tests;
