use alloc::borrow::Cow;

use crate::*;

/// Feather icon names, in the order pairs are drawn from.
pub static DEFAULT_SYMBOLS: [Symbol; 18] = [
    "heart", "star", "sun", "moon", "cloud", "umbrella", "camera", "music", "anchor", "bell",
    "coffee", "feather", "gift", "key", "zap", "compass", "droplet", "award",
];

/// Ordered list of symbols a board can be built from.
///
/// Boards always use a prefix of the catalog, so the order here decides which
/// symbols appear on the smaller tiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Cow<'static, [Symbol]>,
}

impl SymbolCatalog {
    pub const fn from_static(symbols: &'static [Symbol]) -> Self {
        Self {
            symbols: Cow::Borrowed(symbols),
        }
    }

    pub fn from_vec(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols: Cow::Owned(symbols),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The first `pair_count` symbols, or an error when the catalog is too
    /// short or nothing was asked for.
    pub fn take(&self, pair_count: Count) -> Result<&[Symbol]> {
        let pairs = usize::from(pair_count);
        if pairs == 0 || pairs > self.len() {
            return Err(GameError::InvalidConfiguration {
                pairs: pair_count,
                available: self.len(),
            });
        }
        Ok(&self.symbols[..pairs])
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::from_static(&DEFAULT_SYMBOLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_difficulty() {
        let catalog = SymbolCatalog::default();

        for difficulty in Difficulty::ALL {
            assert!(catalog.take(difficulty.pair_count()).is_ok());
        }
    }

    #[test]
    fn take_keeps_catalog_order() {
        let catalog = SymbolCatalog::default();

        assert_eq!(catalog.take(3).unwrap(), &["heart", "star", "sun"]);
    }

    #[test]
    fn take_rejects_zero_and_oversized_requests() {
        let catalog = SymbolCatalog::from_static(&["a", "b"]);

        assert_eq!(
            catalog.take(0),
            Err(GameError::InvalidConfiguration {
                pairs: 0,
                available: 2
            })
        );
        assert_eq!(
            catalog.take(3),
            Err(GameError::InvalidConfiguration {
                pairs: 3,
                available: 2
            })
        );
    }
}
