use rand::Rng;

use crate::*;
pub use shuffled::*;

mod shuffled;

/// Source of fresh boards. Each call deals a new layout.
pub trait BoardGenerator {
    fn generate(&mut self, pair_count: Count, catalog: &SymbolCatalog) -> Result<Vec<Card>>;
}

/// Builds two cards for each of the first `pair_count` catalog symbols and
/// shuffles them with `rng`.
///
/// Ids are assigned before shuffling, `2 * i` and `2 * i + 1` for the `i`-th
/// symbol, so they stay unique whatever order the cards end up in.
pub fn generate<R: Rng + ?Sized>(
    pair_count: Count,
    catalog: &SymbolCatalog,
    rng: &mut R,
) -> Result<Vec<Card>> {
    let symbols = catalog.take(pair_count)?;

    let mut cards: Vec<Card> = symbols
        .iter()
        .zip(0..)
        .flat_map(|(&symbol, index): (&Symbol, CardId)| {
            [Card::new(index * 2, symbol), Card::new(index * 2 + 1, symbol)]
        })
        .collect();

    shuffle(&mut cards, rng);
    log::debug!("Generated board with {} pairs", pair_count);
    Ok(cards)
}

/// Fisher-Yates: walk from the last slot down, swapping each with a uniformly
/// chosen slot at or before it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
