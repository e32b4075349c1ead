use core::time::Duration;

use crate::*;

/// Owns the active [`Session`] together with the clock, board generator and
/// catalog needed to start the next one.
#[derive(Debug)]
pub struct MatchEngine<C = SystemClock, G = ShuffledBoardGenerator> {
    session: Session,
    catalog: SymbolCatalog,
    clock: C,
    generator: G,
}

impl MatchEngine<SystemClock, ShuffledBoardGenerator> {
    /// Wall-clock engine over the default catalog, shuffling from `seed`.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::new(
            difficulty,
            SymbolCatalog::default(),
            SystemClock,
            ShuffledBoardGenerator::seeded(seed),
        )
    }
}

impl<C: Clock, G: BoardGenerator> MatchEngine<C, G> {
    pub fn new(
        difficulty: Difficulty,
        catalog: SymbolCatalog,
        clock: C,
        mut generator: G,
    ) -> Result<Self> {
        let session = Session::generate(difficulty, &catalog, &mut generator)?;
        Ok(Self {
            session,
            catalog,
            clock,
            generator,
        })
    }

    pub fn reveal(&mut self, position: Position) -> RevealOutcome {
        let now = self.clock.now();
        self.session.reveal(position, now)
    }

    /// Replaces the active session with a freshly shuffled one. On error the
    /// current session is kept as it was.
    pub fn reset(&mut self, difficulty: Difficulty) -> Result<&Session> {
        let session = Session::generate(difficulty, &self.catalog, &mut self.generator)?;
        log::debug!("New {} session", difficulty.name());
        self.session = session;
        Ok(&self.session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    pub fn tries(&self) -> Count {
        self.session.tries()
    }

    pub fn matches_found(&self) -> Count {
        self.session.matches_found()
    }

    pub fn pair_count(&self) -> Count {
        self.session.pair_count()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn elapsed(&self) -> Duration {
        self.session.elapsed(self.clock.now())
    }
}
