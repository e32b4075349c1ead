use core::time::Duration;

use crate::*;

/// How long a resolved pair stays on screen before it settles.
pub const COMPARE_DELAY: Duration = Duration::from_millis(1000);

/// Pause between the final settle and the victory screen.
pub const VICTORY_DELAY: Duration = Duration::from_millis(500);

/// What the player should see at a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    FaceUp,
    /// Just matched, still being shown off before it settles
    Matching,
    Matched,
}

/// Player-visible layer over a [`Session`].
///
/// The session resolves a pair synchronously, but the player still needs to
/// see both cards for a moment. The view keeps the last resolved pair on
/// screen until [`BoardView::settle`] is called and reports itself locked in
/// the meantime, so the caller can withhold input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardView {
    showing: Option<Showing>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Showing {
    pair: (Position, Position),
    matched: bool,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `outcome` and returns how long to wait before calling
    /// [`BoardView::settle`], if a pair was resolved.
    pub fn apply(&mut self, outcome: RevealOutcome) -> Option<Duration> {
        let pair = outcome.resolved_pair()?;
        self.showing = Some(Showing {
            pair,
            matched: outcome.is_match(),
        });
        Some(COMPARE_DELAY)
    }

    /// Ends the display of the resolved pair, returning it.
    pub fn settle(&mut self) -> Option<(Position, Position)> {
        self.showing.take().map(|showing| showing.pair)
    }

    pub fn is_locked(&self) -> bool {
        self.showing.is_some()
    }

    pub fn clear(&mut self) {
        self.showing = None;
    }

    pub fn face_at(&self, session: &Session, position: Position) -> CardFace {
        let Some(card) = session.card_at(position) else {
            return CardFace::Hidden;
        };

        if let Some(Showing { pair, matched }) = self.showing {
            if pair.0 == position || pair.1 == position {
                return if matched {
                    CardFace::Matching
                } else {
                    CardFace::FaceUp
                };
            }
        }

        if card.matched {
            CardFace::Matched
        } else if session.pending().contains(&position) {
            CardFace::FaceUp
        } else {
            CardFace::Hidden
        }
    }
}
