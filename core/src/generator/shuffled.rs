use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Generation strategy that shuffles with its own random source. The source
/// keeps advancing, so successive boards differ while a seed still replays
/// the whole sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledBoardGenerator<R = SmallRng> {
    rng: R,
}

impl ShuffledBoardGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShuffledBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardGenerator for ShuffledBoardGenerator<R> {
    fn generate(&mut self, pair_count: Count, catalog: &SymbolCatalog) -> Result<Vec<Card>> {
        generate(pair_count, catalog, &mut self.rng)
    }
}
