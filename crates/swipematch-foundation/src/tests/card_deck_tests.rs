use super::*;

fn names() -> Vec<&'static str> {
    vec!["Sushi Place", "Taco Truck", "Noodle Bar"]
}

#[test]
fn finite_deck_walks_items_once() {
    let mut deck = CardDeck::finite(names());
    assert_eq!(deck.current(), Some(&"Sushi Place"));
    assert_eq!(deck.next(), Some(&"Taco Truck"));
    assert_eq!(deck.position_label().as_deref(), Some("1 of 3"));

    deck.record(SwipeDirection::Right);
    deck.record(SwipeDirection::Left);
    assert_eq!(deck.current(), Some(&"Noodle Bar"));
    assert_eq!(deck.next(), None);

    let last = deck.record(SwipeDirection::Right);
    assert_eq!(
        last,
        Some(SwipeRecord {
            item_index: 2,
            outcome: SwipeOutcome::Interested,
        })
    );
    assert!(deck.is_exhausted());
    assert_eq!(deck.position_label(), None);
    assert_eq!(deck.record(SwipeDirection::Left), None);
    assert_eq!(deck.records().len(), 3);
}

#[test]
fn looping_deck_wraps() {
    let mut deck = CardDeck::looping(names());
    deck.record(SwipeDirection::Left);
    deck.record(SwipeDirection::Left);
    assert_eq!(deck.current(), Some(&"Noodle Bar"));
    assert_eq!(deck.next(), Some(&"Sushi Place"));

    deck.record(SwipeDirection::Right);
    assert_eq!(deck.index(), 0);
    assert!(!deck.is_exhausted());
}

#[test]
fn looping_deck_of_one_previews_itself() {
    let deck = CardDeck::looping(vec!["Only"]);
    assert_eq!(deck.current(), Some(&"Only"));
    assert_eq!(deck.next(), Some(&"Only"));
}

#[test]
fn empty_decks_are_exhausted() {
    let finite: CardDeck<&str> = CardDeck::finite(Vec::new());
    let mut looping: CardDeck<&str> = CardDeck::looping(Vec::new());
    assert!(finite.is_exhausted());
    assert!(looping.is_exhausted());
    assert_eq!(looping.next(), None);
    assert_eq!(looping.record(SwipeDirection::Right), None);
}

#[test]
fn history_keeps_order_and_survives_restart() {
    let mut deck = CardDeck::finite(names());
    deck.record(SwipeDirection::Right);
    deck.record(SwipeDirection::Left);
    deck.record(SwipeDirection::Right);
    deck.restart();

    assert_eq!(deck.current(), Some(&"Sushi Place"));
    let history: Vec<_> = deck.history().collect();
    assert_eq!(
        history,
        vec![
            (&"Sushi Place", SwipeOutcome::Interested),
            (&"Taco Truck", SwipeOutcome::Passed),
            (&"Noodle Bar", SwipeOutcome::Interested),
        ]
    );
    let interested: Vec<_> = deck.interested().copied().collect();
    assert_eq!(interested, vec!["Sushi Place", "Noodle Bar"]);
    assert_eq!(deck.count(SwipeOutcome::Passed), 1);
}

#[test]
fn outcomes_map_from_directions() {
    assert_eq!(SwipeOutcome::from(SwipeDirection::Left), SwipeOutcome::Passed);
    assert_eq!(
        SwipeOutcome::from(SwipeDirection::Right),
        SwipeOutcome::Interested
    );
    assert_eq!(SwipeOutcome::Passed.label(), "PASS");
    assert_eq!(
        SwipeOutcome::Interested.announcement_prefix(),
        "Interested in"
    );
}
