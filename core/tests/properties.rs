use std::collections::BTreeMap;
use std::time::Duration;

use memora_core::*;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use web_time::Instant;

fn check_invariants(session: &Session) {
    let pending = session.pending();
    assert!(pending.len() <= 2);
    if let [a, b] = pending {
        assert_ne!(a, b);
    }
    assert!(pending.iter().all(|&p| !session.cards()[p].matched));
    assert_eq!(
        session.matches_found() == session.pair_count(),
        session.state() == SessionState::Completed
    );
    let matched_cards = session.cards().iter().filter(|card| card.matched).count();
    assert_eq!(matched_cards, 2 * usize::from(session.matches_found()));
}

proptest! {
    #[test]
    fn generate_deals_each_symbol_twice(pairs in 1u16..=18, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let catalog = SymbolCatalog::default();
        let cards = generate(pairs, &catalog, &mut rng).unwrap();

        prop_assert_eq!(cards.len(), 2 * usize::from(pairs));
        let mut counts: BTreeMap<Symbol, usize> = BTreeMap::new();
        for card in &cards {
            *counts.entry(card.symbol).or_default() += 1;
        }
        let expected: BTreeMap<Symbol, usize> = catalog.symbols()[..usize::from(pairs)]
            .iter()
            .map(|&symbol| (symbol, 2))
            .collect();
        prop_assert_eq!(counts, expected);
    }

    #[test]
    fn generate_rejects_out_of_catalog_counts(extra in 1u16..100, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let catalog = SymbolCatalog::default();
        let pairs = catalog.len() as u16 + extra;

        prop_assert!(
            matches!(
                generate(pairs, &catalog, &mut rng),
                Err(GameError::InvalidConfiguration { .. })
            ),
            "expected InvalidConfiguration for {} pairs",
            pairs
        );
    }

    #[test]
    fn random_reveals_keep_session_invariants(
        seed in any::<u64>(),
        positions in proptest::collection::vec(0usize..40, 0..400),
    ) {
        let mut generator = ShuffledBoardGenerator::seeded(seed);
        let mut session =
            Session::generate(Difficulty::Normal, &SymbolCatalog::default(), &mut generator).unwrap();
        let start = Instant::now();

        for (step, position) in positions.into_iter().enumerate() {
            let before = (session.tries(), session.matches_found());
            let now = start + Duration::from_millis(step as u64 * 250);
            let outcome = session.reveal(position, now);

            match outcome {
                RevealOutcome::Ignored => {
                    prop_assert_eq!((session.tries(), session.matches_found()), before);
                }
                RevealOutcome::Revealed(p) => {
                    prop_assert_eq!(p, position);
                    prop_assert_eq!(session.tries(), before.0);
                }
                RevealOutcome::Matched(a, b) | RevealOutcome::SessionCompleted { last_pair: (a, b), .. } => {
                    prop_assert_eq!(session.tries(), before.0 + 1);
                    prop_assert_eq!(session.matches_found(), before.1 + 1);
                    prop_assert!(session.cards()[a].pairs_with(&session.cards()[b]));
                }
                RevealOutcome::NoMatch(a, b) => {
                    prop_assert_eq!(session.tries(), before.0 + 1);
                    prop_assert_eq!(session.matches_found(), before.1);
                    prop_assert_ne!(session.cards()[a].symbol, session.cards()[b].symbol);
                }
            }
            check_invariants(&session);
        }
    }
}

#[test]
fn sixteen_card_walkthrough() {
    let mut generator = ShuffledBoardGenerator::seeded(2024);
    let mut session =
        Session::generate(Difficulty::Normal, &SymbolCatalog::default(), &mut generator).unwrap();
    let start = Instant::now();
    assert_eq!(session.cards().len(), 16);

    let mut last = RevealOutcome::Ignored;
    for position in 0..16 {
        if session.cards()[position].matched {
            continue;
        }
        let partner = session
            .cards()
            .iter()
            .position(|other| session.cards()[position].pairs_with(other))
            .unwrap();
        assert_eq!(session.reveal(position, start), RevealOutcome::Revealed(position));
        last = session.reveal(partner, start + Duration::from_secs(30));
        check_invariants(&session);
    }

    assert!(matches!(
        last,
        RevealOutcome::SessionCompleted {
            tries: 8,
            elapsed,
            ..
        } if elapsed == Duration::from_secs(30)
    ));
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.reveal(0, start), RevealOutcome::Ignored);
    assert_eq!(session.reveal(16, start), RevealOutcome::Ignored);
}

#[test]
fn engine_reset_after_completion_is_independent() {
    let clock = ManualClock::new();
    let mut engine = MatchEngine::new(
        Difficulty::Easy,
        SymbolCatalog::default(),
        &clock,
        ShuffledBoardGenerator::seeded(8),
    )
    .unwrap();

    while !engine.session().is_completed() {
        let session = engine.session();
        let position = session.cards().iter().position(|card| !card.matched).unwrap();
        let card = session.cards()[position];
        let partner = session
            .cards()
            .iter()
            .position(|other| card.pairs_with(other))
            .unwrap();
        engine.reveal(position);
        engine.reveal(partner);
    }
    let finished: Vec<Card> = engine.session().cards().to_vec();

    let fresh = engine.reset(Difficulty::Easy).unwrap();

    assert_eq!(fresh.tries(), 0);
    assert_eq!(fresh.matches_found(), 0);
    assert_eq!(fresh.state(), SessionState::NotStarted);
    assert!(fresh.cards().iter().all(|card| !card.matched));
    assert_ne!(
        fresh.cards().iter().map(|card| card.id).collect::<Vec<_>>(),
        finished.iter().map(|card| card.id).collect::<Vec<_>>()
    );
}

#[test]
fn board_with_repeated_ids_is_rejected() {
    let cards = ["a", "a", "b", "b", "c", "c", "d", "d", "e", "e", "f", "f"]
        .into_iter()
        .map(|symbol| Card::new(7, symbol))
        .collect();

    assert_eq!(
        Session::from_cards(Difficulty::Easy, cards),
        Err(GameError::InvalidBoard)
    );
}
