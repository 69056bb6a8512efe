//! Solver pipeline
//!
//! Coordinates one solve: calls the strategy once, verifies a flat
//! outcome by replay against a clone, applies the accepted moves to
//! the caller's cube, and packages the result as a [`Solution`]. The
//! pipeline never searches and never falls back between strategies;
//! the caller chooses the strategy explicitly.

use super::solution::Solution;
use super::strategy::{SolveError, Strategy, StrategyOutcome};
use crate::core::Cube;

/// The solving pipeline over a chosen strategy
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a pipeline around a strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Solve the cube in place
    ///
    /// On success the returned moves have been applied to `cube`, so
    /// it ends in the strategy's claimed solved state. On failure the
    /// cube is untouched.
    ///
    /// # Errors
    /// Propagates the strategy's typed [`SolveError`]; a flat outcome
    /// whose replay does not reach the solved form fails with
    /// [`SolveError::Unverified`].
    pub fn solve(&self, cube: &mut Cube) -> Result<Solution, SolveError> {
        let outcome = self.strategy.solve(cube)?;

        if let StrategyOutcome::Flat(sequence) = &outcome {
            let mut probe = cube.clone();
            probe.apply_sequence(sequence);
            if !probe.is_solved() {
                return Err(SolveError::Unverified);
            }
        }

        let solution = match outcome {
            StrategyOutcome::Flat(sequence) => Solution::from_flat(sequence),
            StrategyOutcome::Staged {
                align,
                cross,
                first_two_layers,
                orient_last_layer,
                permute_last_layer,
            } => Solution::from_stages(
                align,
                cross,
                first_two_layers,
                orient_last_layer,
                permute_last_layer,
            ),
        };

        cube.apply_sequence(&solution.full());
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::MoveSequence;
    use crate::solver::search::SearchStrategy;
    use crate::solver::solution::Stage;
    use crate::solver::strategy::StrategyType;

    #[test]
    fn search_pipeline_solves_the_callers_cube() {
        let mut cube = Cube::solved();
        cube.apply_notation("F2 U' R").unwrap();

        let solver = Solver::new(StrategyType::from_name("search"));
        let solution = solver.solve(&mut cube).unwrap();

        assert!(cube.is_solved());
        assert!(!solution.is_empty());
        // the whole plan lives in the align stage
        assert!(!solution.segment(Stage::Align).is_empty());
        for stage in &Stage::ALL[1..] {
            assert!(solution.segment(*stage).is_empty());
        }
    }

    #[test]
    fn reversed_operation_restores_the_scramble() {
        let mut cube = Cube::solved();
        cube.apply_notation("L D' B2").unwrap();
        let scrambled = cube.clone();

        let solver = Solver::new(SearchStrategy::default());
        let solution = solver.solve(&mut cube).unwrap();
        assert!(cube.is_solved());

        cube.apply_sequence(&solution.reversed());
        assert_eq!(cube, scrambled);
    }

    #[test]
    fn strategy_failure_passes_through_and_leaves_cube_untouched() {
        let mut cube = Cube::solved();
        cube.apply_notation("x R U").unwrap();
        let before = cube.clone();

        let solver = Solver::new(SearchStrategy::default());
        let result = solver.solve(&mut cube);
        assert!(matches!(
            result,
            Err(SolveError::UnsupportedConfiguration(_))
        ));
        assert_eq!(cube, before);
    }

    /// A strategy whose claimed solution is wrong
    struct LyingStrategy;

    impl Strategy for LyingStrategy {
        fn solve(&self, _cube: &Cube) -> Result<StrategyOutcome, SolveError> {
            Ok(StrategyOutcome::Flat(MoveSequence::parse("R U").unwrap()))
        }
    }

    #[test]
    fn flat_outcomes_are_replay_verified() {
        let mut cube = Cube::solved();
        cube.apply_notation("F D2 L'").unwrap();
        let before = cube.clone();

        let result = Solver::new(LyingStrategy).solve(&mut cube);
        assert_eq!(result, Err(SolveError::Unverified));
        assert_eq!(cube, before);
    }

    #[test]
    fn staged_noop_outcome_is_accepted_without_verification() {
        let mut cube = Cube::solved();
        cube.apply_notation("R U R' U'").unwrap();
        let before = cube.clone();

        let solver = Solver::new(StrategyType::from_name("cfop"));
        let solution = solver.solve(&mut cube).unwrap();

        assert!(solution.is_empty());
        assert_eq!(cube, before);
    }
}
