extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use catalog::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod card;
mod catalog;
mod clock;
mod engine;
mod error;
mod generator;
mod session;
mod types;
mod view;

/// Difficulty tier, selecting the grid shape and how many pairs are dealt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Expert];

    /// Grid shape as `(cols, rows)`; only presentation cares about it.
    pub const fn shape(self) -> Shape {
        use Difficulty::*;
        match self {
            Easy => (4, 3),
            Normal => (4, 4),
            Hard => (6, 4),
            Expert => (6, 6),
        }
    }

    pub const fn pair_count(self) -> Count {
        area(self.shape()) / 2
    }

    pub const fn card_count(self) -> Count {
        area(self.shape())
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Normal => "Normal",
            Hard => "Hard",
            Expert => "Expert",
        }
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Request broke a turn rule, nothing changed
    Ignored,
    /// First card of a pair is up
    Revealed(Position),
    Matched(Position, Position),
    NoMatch(Position, Position),
    /// Last pair matched, carries the final stats
    SessionCompleted {
        tries: Count,
        elapsed: Duration,
        last_pair: (Position, Position),
    },
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// The two positions compared, when this outcome resolved a pair.
    pub const fn resolved_pair(self) -> Option<(Position, Position)> {
        use RevealOutcome::*;
        match self {
            Ignored | Revealed(_) => None,
            Matched(a, b) | NoMatch(a, b) => Some((a, b)),
            SessionCompleted { last_pair, .. } => Some(last_pair),
        }
    }

    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched(..) | Self::SessionCompleted { .. })
    }
}
