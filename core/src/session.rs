use alloc::collections::{BTreeMap, BTreeSet};
use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress, on the first accepted reveal
/// - InProgress -> Completed, when the last pair is matched
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

impl SessionState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One round of play, from the shuffle to the last matched pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    difficulty: Difficulty,
    cards: Vec<Card>,
    pending: SmallVec<[Position; 2]>,
    tries: Count,
    matches_found: Count,
    state: SessionState,
    started_at: Option<Instant>,
    final_elapsed: Option<Duration>,
}

impl Session {
    /// Deals a fresh board for `difficulty` from `generator`.
    pub fn generate<G: BoardGenerator + ?Sized>(
        difficulty: Difficulty,
        catalog: &SymbolCatalog,
        generator: &mut G,
    ) -> Result<Self> {
        let cards = generator.generate(difficulty.pair_count(), catalog)?;
        Ok(Self::new_unchecked(difficulty, cards))
    }

    /// Starts a session over an already laid out board. The board must hold
    /// `2 * difficulty.pair_count()` unmatched cards with distinct ids, two
    /// per symbol.
    pub fn from_cards(difficulty: Difficulty, cards: Vec<Card>) -> Result<Self> {
        if cards.len() != 2 * usize::from(difficulty.pair_count()) {
            return Err(GameError::InvalidBoard);
        }

        let ids: BTreeSet<CardId> = cards.iter().map(|card| card.id).collect();
        if ids.len() != cards.len() {
            return Err(GameError::InvalidBoard);
        }

        let mut per_symbol: BTreeMap<Symbol, u8> = BTreeMap::new();
        for card in &cards {
            if card.matched {
                return Err(GameError::InvalidBoard);
            }
            *per_symbol.entry(card.symbol).or_default() += 1;
        }
        if per_symbol.values().any(|&count| count != 2) {
            return Err(GameError::InvalidBoard);
        }

        Ok(Self::new_unchecked(difficulty, cards))
    }

    fn new_unchecked(difficulty: Difficulty, cards: Vec<Card>) -> Self {
        Self {
            difficulty,
            cards,
            pending: SmallVec::new(),
            tries: 0,
            matches_found: 0,
            state: Default::default(),
            started_at: None,
            final_elapsed: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, position: Position) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Positions revealed and waiting for their partner, in reveal order.
    pub fn pending(&self) -> &[Position] {
        &self.pending
    }

    pub fn tries(&self) -> Count {
        self.tries
    }

    pub fn matches_found(&self) -> Count {
        self.matches_found
    }

    pub fn pair_count(&self) -> Count {
        (self.cards.len() / 2) as Count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_final()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Time spent so far, frozen once the session completes.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.state, self.started_at) {
            (SessionState::Completed, _) => self.final_elapsed.unwrap_or_default(),
            (_, Some(started_at)) => now.saturating_duration_since(started_at),
            (_, None) => Duration::ZERO,
        }
    }

    /// Whether a reveal at `position` would be accepted right now.
    pub fn can_reveal(&self, position: Position) -> bool {
        if self.state.is_final() || self.pending.len() >= 2 {
            return false;
        }

        match self.cards.get(position) {
            Some(card) => !card.matched && !self.pending.contains(&position),
            None => false,
        }
    }

    /// Turns the card at `position` face up, resolving the pair when it is
    /// the second pending card.
    ///
    /// Requests that break the turn rules are not errors: they come back as
    /// [`RevealOutcome::Ignored`] and leave the session untouched.
    pub fn reveal(&mut self, position: Position, now: Instant) -> RevealOutcome {
        if !self.can_reveal(position) {
            log::trace!("Ignored reveal at {} ({:?})", position, self.state);
            return RevealOutcome::Ignored;
        }

        self.mark_started(now);
        self.pending.push(position);

        let &[first, second] = self.pending.as_slice() else {
            log::trace!("Revealed {} ({})", position, self.cards[position].symbol);
            return RevealOutcome::Revealed(position);
        };

        // a try is counted as soon as the second card is up
        self.tries = self.tries.saturating_add(1);
        self.resolve(first, second, now)
    }

    fn resolve(&mut self, first: Position, second: Position, now: Instant) -> RevealOutcome {
        self.pending.clear();

        if !self.cards[first].pairs_with(&self.cards[second]) {
            log::debug!(
                "No match: {} ({}) / {} ({})",
                first,
                self.cards[first].symbol,
                second,
                self.cards[second].symbol
            );
            return RevealOutcome::NoMatch(first, second);
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.matches_found += 1;
        log::debug!(
            "Matched {} at {} / {}, {}/{} pairs",
            self.cards[first].symbol,
            first,
            second,
            self.matches_found,
            self.pair_count()
        );

        if self.matches_found == self.pair_count() {
            let elapsed = self.mark_completed(now);
            RevealOutcome::SessionCompleted {
                tries: self.tries,
                elapsed,
                last_pair: (first, second),
            }
        } else {
            RevealOutcome::Matched(first, second)
        }
    }

    fn mark_started(&mut self, now: Instant) {
        if self.state.is_initial() {
            log::debug!("Session started");
            self.started_at = Some(now);
            self.state = SessionState::InProgress;
        }
    }

    fn mark_completed(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .started_at
            .map_or(Duration::ZERO, |started_at| now.saturating_duration_since(started_at));
        self.final_elapsed = Some(elapsed);
        self.state = SessionState::Completed;
        log::debug!("Session completed in {:?} after {} tries", elapsed, self.tries);
        elapsed
    }
}
