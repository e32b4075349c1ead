use crate::*;

/// One card on the board. Two cards share each symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub matched: bool,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            matched: false,
        }
    }

    /// Whether `other` is the distinct partner card of this one.
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_card_does_not_pair_with_itself() {
        let card = Card::new(0, "heart");

        assert!(!card.pairs_with(&card));
        assert!(card.pairs_with(&Card::new(1, "heart")));
        assert!(!card.pairs_with(&Card::new(1, "star")));
    }
}
