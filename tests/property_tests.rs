//! Property tests for the value types, the board, and the lap game.

use proptest::prelude::*;
use rust_dicegame::board::{Board, TRACK_LENGTH};
use rust_dicegame::core::{DiceRoll, Score};
use rust_dicegame::dice::{FixedSequence, SingleUniform};
use rust_dicegame::games::play_track;
use rust_dicegame::scoring::{BonusOnMax, DoubleOnEven, ScoringStrategy, SimpleScoring};

proptest! {
    /// Adding to a score equals constructing the sum.
    #[test]
    fn prop_score_add(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
        let sum = Score::new(a).unwrap().add(b).unwrap();
        prop_assert_eq!(sum, Score::new(a + b).unwrap());
    }

    /// Negative scores never construct.
    #[test]
    fn prop_negative_score_rejected(value in i64::MIN..0) {
        prop_assert!(Score::new(value).is_err());
    }

    /// Negative amounts never add, and the original is unchanged.
    #[test]
    fn prop_negative_amount_rejected(base in 0i64..1000, amount in i64::MIN..0) {
        let score = Score::new(base).unwrap();
        prop_assert!(score.add(amount).is_err());
        prop_assert_eq!(score.value(), base as u64);
    }

    /// Advancing moves modulo the track and counts exactly one move.
    #[test]
    fn prop_board_advance(start in 0usize..TRACK_LENGTH, moves in 0u32..50, count in 0u32..10_000) {
        let mut board = Board::with_position(start).unwrap();
        for _ in 0..moves {
            board.advance(1).unwrap();
        }
        let old_position = board.position();
        let old_moves = board.moves_taken();

        board.advance(count).unwrap();

        prop_assert_eq!(board.position(), (old_position + count as usize) % TRACK_LENGTH);
        prop_assert_eq!(board.moves_taken(), old_moves + 1);
        prop_assert!(board.position() < TRACK_LENGTH);
    }

    /// One move that is not a multiple of the track length leaves home.
    #[test]
    fn prop_board_leaves_home(count in 1u32..1000) {
        prop_assume!(count as usize % TRACK_LENGTH != 0);
        let mut board = Board::new();
        board.advance(count).unwrap();
        prop_assert!(!board.is_home());
    }

    /// Any fixed table of die faces finishes the lap.
    #[test]
    fn prop_fixed_table_finishes(values in prop::collection::vec(1u32..=6, 1..8)) {
        let mut dice = FixedSequence::new(values).unwrap();
        let outcome = play_track(&mut dice).unwrap();
        prop_assert!(outcome.moves >= 1);
        prop_assert_eq!(outcome.distance % TRACK_LENGTH as u64, 0);
    }

    /// Single-die laps never need more moves than all-ones would.
    #[test]
    fn prop_single_die_lap_bounded_below(seed: u64) {
        let outcome = play_track(&mut SingleUniform::seeded(seed)).unwrap();
        prop_assert!(outcome.moves >= 4);
        prop_assert_eq!(outcome.distance % TRACK_LENGTH as u64, 0);
    }

    /// Every strategy adds at least the face value and never lowers the score.
    #[test]
    fn prop_strategies_monotonic(base in 0i64..10_000, face in 1u32..=6) {
        let current = Score::new(base).unwrap();
        let roll = DiceRoll::new(face).unwrap();
        let strategies: [&dyn ScoringStrategy; 3] = [&SimpleScoring, &BonusOnMax, &DoubleOnEven];

        for strategy in strategies {
            let next = strategy.calculate(current, roll);
            prop_assert!(next.value() >= current.value() + u64::from(face));
            prop_assert!(next.value() <= current.value() + 12);
        }
    }
}
