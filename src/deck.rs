//! The card queue and the swipe session driving it.

use std::collections::VecDeque;
use std::time::Instant;

use crate::error::PawResult;
use crate::models::{Dog, DogFilters, SwipeOutcome};
use crate::services::DogService;
use crate::swipe::{
    card_transform, overlay_label, CardCommand, CardTransform, DragState, GestureTracker,
    OverlayLabel, Point, ReleaseOutcome, SwipeAction, SwipeEngine,
};

/// Refill the deck when fewer cards than this remain.
pub const DEFAULT_REFILL_BELOW: usize = 3;

/// Ordered candidates; the front card is the one shown.
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: VecDeque<Dog>,
    refill_below: usize,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new(DEFAULT_REFILL_BELOW)
    }
}

impl CardDeck {
    pub fn new(refill_below: usize) -> Self {
        Self {
            cards: VecDeque::new(),
            refill_below,
        }
    }

    pub fn replace(&mut self, dogs: Vec<Dog>) {
        self.cards = dogs.into();
    }

    pub fn current(&self) -> Option<&Dog> {
        self.cards.front()
    }

    /// The card under the current one.
    pub fn peek_next(&self) -> Option<&Dog> {
        self.cards.get(1)
    }

    pub fn advance(&mut self) -> Option<Dog> {
        self.cards.pop_front()
    }

    /// Put `dog` back on top, dropping any other copy of it.
    pub fn push_front(&mut self, dog: Dog) {
        self.cards.retain(|d| d.id != dog.id);
        self.cards.push_front(dog);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn needs_refill(&self) -> bool {
        self.cards.len() < self.refill_below
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dog> {
        self.cards.iter()
    }
}

/// A committed swipe after its exit animation finished.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeResolved {
    pub dog: Dog,
    pub action: SwipeAction,
    pub outcome: SwipeOutcome,
}

/// What a discrete card command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The card started leaving; see [`SwipeSession::tick`].
    Committing(SwipeAction),
    /// The dog was put back on top of the deck.
    Restored(Dog),
    /// Nothing to act on.
    Ignored,
}

/// One swiping screen: deck, gesture and matching service together.
#[derive(Debug)]
pub struct SwipeSession {
    deck: CardDeck,
    tracker: GestureTracker,
    engine: SwipeEngine,
    dogs: DogService,
    filters: DogFilters,
}

impl SwipeSession {
    pub fn new(dogs: DogService, engine: SwipeEngine, filters: DogFilters, refill_below: usize) -> Self {
        let mut session = Self {
            deck: CardDeck::new(refill_below),
            tracker: GestureTracker::new(),
            engine,
            dogs,
            filters,
        };
        session.reload();
        session
    }

    /// Rebuild the deck from the matching service.
    pub fn reload(&mut self) {
        let dogs = self.dogs.get_dogs(&self.filters);
        tracing::debug!(count = dogs.len(), "deck reloaded");
        self.deck.replace(dogs);
    }

    pub fn set_filters(&mut self, filters: DogFilters) {
        self.filters = filters;
        self.tracker.cancel();
        self.reload();
    }

    pub fn filters(&self) -> &DogFilters {
        &self.filters
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn current(&self) -> Option<&Dog> {
        self.deck.current()
    }

    pub fn dogs(&self) -> &DogService {
        &self.dogs
    }

    pub fn dogs_mut(&mut self) -> &mut DogService {
        &mut self.dogs
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SwipeEngine {
        &mut self.engine
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn pointer_down(&mut self, at: Point, viewport_width: f64) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        let config = self.engine.config();
        self.tracker.pointer_down(at, &config, viewport_width)
    }

    pub fn pointer_move(&mut self, at: Point, viewport_width: f64) -> bool {
        let config = self.engine.config();
        self.tracker.pointer_move(at, &config, viewport_width)
    }

    pub fn pointer_up(&mut self, now: Instant) -> ReleaseOutcome {
        let config = self.engine.config();
        self.tracker.pointer_up(&config, now)
    }

    /// Apply a key or wheel command. Ignored when no card is shown.
    pub fn command(&mut self, command: CardCommand, now: Instant) -> PawResult<CommandOutcome> {
        if self.deck.is_empty() {
            return Ok(CommandOutcome::Ignored);
        }
        match command {
            CardCommand::Swipe(action) => {
                if self.tracker.commit(action, now) {
                    Ok(CommandOutcome::Committing(action))
                } else {
                    Ok(CommandOutcome::Ignored)
                }
            }
            CardCommand::Undo => Ok(match self.undo()? {
                Some(dog) => CommandOutcome::Restored(dog),
                None => CommandOutcome::Ignored,
            }),
        }
    }

    /// Undo the last swipe, even with an empty deck.
    pub fn undo(&mut self) -> PawResult<Option<Dog>> {
        if self.tracker.is_committing() {
            return Ok(None);
        }
        let restored = self.dogs.undo_last_swipe()?;
        if let Some(dog) = &restored {
            self.tracker.cancel();
            self.deck.push_front(dog.clone());
        }
        Ok(restored)
    }

    /// Advance animations; submits the swipe once a commit finishes.
    pub fn tick(&mut self, now: Instant) -> PawResult<Option<SwipeResolved>> {
        let Some(action) = self.tracker.tick(now) else {
            return Ok(None);
        };
        let Some(dog) = self.deck.current().cloned() else {
            return Ok(None);
        };

        let outcome = self.dogs.submit_swipe(&dog.id, action)?;
        self.deck.advance();
        if self.deck.needs_refill() {
            self.reload();
        }

        Ok(Some(SwipeResolved { dog, action, outcome }))
    }

    pub fn drag_state(&self, now: Instant) -> DragState {
        self.tracker.current(now)
    }

    pub fn transform(&self, now: Instant) -> CardTransform {
        card_transform(&self.drag_state(now))
    }

    pub fn overlay(&self, now: Instant) -> Option<OverlayLabel> {
        overlay_label(self.drag_state(now).direction)
    }

    /// Whether something is animating and needs redraws.
    pub fn is_animating(&self) -> bool {
        !self.tracker.is_idle() && !self.tracker.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::services::catalog;
    use crate::swipe::COMMIT_DELAY;
    use std::sync::Arc;
    use std::time::Duration;

    fn dog(id: &str) -> Dog {
        let mut dog = catalog::all_dogs().remove(0);
        dog.id = id.to_string();
        dog
    }

    fn session(chance: f64) -> SwipeSession {
        let dogs = DogService::new(Arc::new(InMemoryStore::new()))
            .unwrap()
            .with_mutual_like_chance(chance)
            .with_seed(1);
        SwipeSession::new(dogs, SwipeEngine::new(), DogFilters::default(), DEFAULT_REFILL_BELOW)
    }

    #[test]
    fn test_deck_order_and_advance() {
        let mut deck = CardDeck::default();
        deck.replace(vec![dog("a"), dog("b"), dog("c")]);
        assert_eq!(deck.current().unwrap().id, "a");
        assert_eq!(deck.peek_next().unwrap().id, "b");
        assert!(!deck.needs_refill());

        assert_eq!(deck.advance().unwrap().id, "a");
        assert!(deck.needs_refill());
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_push_front_dedups() {
        let mut deck = CardDeck::default();
        deck.replace(vec![dog("a"), dog("b")]);
        deck.push_front(dog("b"));
        let ids: Vec<_> = deck.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_drag_commit_resolves_after_delay() {
        let mut s = session(0.0);
        let first = s.current().unwrap().id.clone();
        let t0 = Instant::now();

        assert!(s.pointer_down(Point::new(100.0, 100.0), 800.0));
        assert!(s.pointer_move(Point::new(300.0, 110.0), 800.0));
        assert_eq!(s.overlay(t0), Some(OverlayLabel::LIKE));
        assert_eq!(s.pointer_up(t0), ReleaseOutcome::Committed(SwipeAction::Like));
        assert!(s.is_animating());

        assert!(s.tick(t0 + Duration::from_millis(100)).unwrap().is_none());
        let resolved = s.tick(t0 + COMMIT_DELAY).unwrap().unwrap();
        assert_eq!(resolved.dog.id, first);
        assert_eq!(resolved.action, SwipeAction::Like);
        assert!(!resolved.outcome.is_match());
        assert_ne!(s.current().unwrap().id, first);
        assert_eq!(s.dogs().swipes().len(), 1);
    }

    #[test]
    fn test_failed_match_write_still_advances() {
        let store = InMemoryStore::new();
        store.fail_set_for(crate::storage::keys::MATCHES);
        let dogs = DogService::new(Arc::new(store.clone()))
            .unwrap()
            .with_mutual_like_chance(1.0)
            .with_seed(1);
        let mut s = SwipeSession::new(dogs, SwipeEngine::new(), DogFilters::default(), DEFAULT_REFILL_BELOW);
        let first = s.current().unwrap().id.clone();

        let t0 = Instant::now();
        s.command(CardCommand::Swipe(SwipeAction::Like), t0).unwrap();
        let resolved = s.tick(t0 + COMMIT_DELAY).unwrap().unwrap();
        assert!(!resolved.outcome.is_match());
        assert_ne!(s.current().unwrap().id, first);

        s.command(CardCommand::Swipe(SwipeAction::Like), t0 + COMMIT_DELAY).unwrap();
        s.tick(t0 + COMMIT_DELAY * 2).unwrap().unwrap();
        let ids: Vec<_> = s.dogs().swipes().iter().map(|r| r.dog_id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut s = session(0.0);
        let t0 = Instant::now();
        s.pointer_down(Point::new(100.0, 100.0), 800.0);
        s.pointer_move(Point::new(130.0, 100.0), 800.0);
        assert_eq!(s.pointer_up(t0), ReleaseOutcome::SnappedBack);

        assert!(s.tick(t0 + Duration::from_secs(1)).unwrap().is_none());
        assert!(s.transform(t0 + Duration::from_secs(1)).is_identity());
        assert!(s.dogs().swipes().is_empty());
    }

    #[test]
    fn test_key_command_and_undo() {
        let mut s = session(1.0);
        let first = s.current().unwrap().id.clone();
        let t0 = Instant::now();

        let out = s
            .command(CardCommand::Swipe(SwipeAction::Favorite), t0)
            .unwrap();
        assert_eq!(out, CommandOutcome::Committing(SwipeAction::Favorite));
        assert_eq!(
            s.command(CardCommand::Swipe(SwipeAction::Pass), t0).unwrap(),
            CommandOutcome::Ignored
        );

        let resolved = s.tick(t0 + COMMIT_DELAY).unwrap().unwrap();
        assert!(resolved.outcome.is_match());

        match s.command(CardCommand::Undo, t0 + COMMIT_DELAY).unwrap() {
            CommandOutcome::Restored(dog) => assert_eq!(dog.id, first),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.current().unwrap().id, first);
        assert_eq!(s.dogs().matches().len(), 1);
    }

    #[test]
    fn test_refills_when_low() {
        let mut filters = DogFilters::default();
        filters.toggle_breed("Golden Retriever");
        filters.toggle_breed("Beagle");
        filters.toggle_breed("Boxer");
        filters.toggle_breed("Poodle");

        let dogs = DogService::new(Arc::new(InMemoryStore::new()))
            .unwrap()
            .with_mutual_like_chance(0.0);
        let mut s = SwipeSession::new(dogs, SwipeEngine::new(), filters, DEFAULT_REFILL_BELOW);
        let start = s.deck().len();
        assert!(start >= 4);

        let mut now = Instant::now();
        while !s.deck().is_empty() {
            s.command(CardCommand::Swipe(SwipeAction::Pass), now).unwrap();
            now += COMMIT_DELAY;
            s.tick(now).unwrap().unwrap();
        }
        assert_eq!(s.dogs().swipes().len(), start);
        assert!(s.current().is_none());
    }

    #[test]
    fn test_empty_deck_ignores_input() {
        let mut filters = DogFilters::default();
        filters.set_age_range(20, 20);
        let dogs = DogService::new(Arc::new(InMemoryStore::new())).unwrap();
        let mut s = SwipeSession::new(dogs, SwipeEngine::new(), filters, DEFAULT_REFILL_BELOW);

        assert!(s.current().is_none());
        assert!(!s.pointer_down(Point::new(1.0, 1.0), 800.0));
        assert_eq!(
            s.command(CardCommand::Swipe(SwipeAction::Like), Instant::now())
                .unwrap(),
            CommandOutcome::Ignored
        );
    }

    #[test]
    fn test_set_filters_reloads() {
        let mut s = session(0.0);
        let all = s.deck().len();
        let mut filters = DogFilters::default();
        filters.toggle_breed("Beagle");
        s.set_filters(filters);
        assert!(s.deck().len() < all);
        assert!(s.deck().iter().all(|d| d.breed == "Beagle"));
    }
}
