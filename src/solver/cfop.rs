//! Staged human-method strategy
//!
//! The five stages of a human-style solve, each behind its own planner
//! method so stages can be tested and replaced independently. Stage
//! logic itself is this crate's designated extension point: the
//! shipped [`NoOpPlanner`] plans nothing for every stage, which still
//! satisfies the pipeline's composition contract.

use super::strategy::{SolveError, Strategy, StrategyOutcome};
use crate::core::Cube;
use crate::notation::MoveSequence;

/// Per-stage planning seam for the staged human method
///
/// Each method sees the cube as the preceding stages left it and
/// returns the segment advancing its own stage, without undoing the
/// guarantees already established. Implementations must be pure: same
/// cube in, same segment out.
pub trait StagePlanner {
    /// Bring the cube into the orientation the later stages assume
    fn align(&self, cube: &Cube) -> MoveSequence;

    /// Build the first-layer cross
    fn cross(&self, cube: &Cube) -> MoveSequence;

    /// Finish the first two layers
    fn first_two_layers(&self, cube: &Cube) -> MoveSequence;

    /// Orient the last layer
    fn orient_last_layer(&self, cube: &Cube) -> MoveSequence;

    /// Permute the last layer
    fn permute_last_layer(&self, cube: &Cube) -> MoveSequence;
}

/// Placeholder planner: every stage returns an empty segment
pub struct NoOpPlanner;

impl StagePlanner for NoOpPlanner {
    fn align(&self, _cube: &Cube) -> MoveSequence {
        MoveSequence::new()
    }

    fn cross(&self, _cube: &Cube) -> MoveSequence {
        MoveSequence::new()
    }

    fn first_two_layers(&self, _cube: &Cube) -> MoveSequence {
        MoveSequence::new()
    }

    fn orient_last_layer(&self, _cube: &Cube) -> MoveSequence {
        MoveSequence::new()
    }

    fn permute_last_layer(&self, _cube: &Cube) -> MoveSequence {
        MoveSequence::new()
    }
}

/// Staged human-method strategy over a pluggable planner
pub struct CfopStrategy<P: StagePlanner> {
    planner: P,
}

impl<P: StagePlanner> CfopStrategy<P> {
    /// Create a strategy around a stage planner
    pub const fn new(planner: P) -> Self {
        Self { planner }
    }
}

impl Default for CfopStrategy<NoOpPlanner> {
    fn default() -> Self {
        Self::new(NoOpPlanner)
    }
}

impl<P: StagePlanner> Strategy for CfopStrategy<P> {
    /// Compose the five stages by sequential application against a
    /// working copy; the caller's cube is untouched
    fn solve(&self, cube: &Cube) -> Result<StrategyOutcome, SolveError> {
        let mut working = cube.clone();

        let align = self.planner.align(&working);
        working.apply_sequence(&align);

        let cross = self.planner.cross(&working);
        working.apply_sequence(&cross);

        let first_two_layers = self.planner.first_two_layers(&working);
        working.apply_sequence(&first_two_layers);

        let orient_last_layer = self.planner.orient_last_layer(&working);
        working.apply_sequence(&orient_last_layer);

        let permute_last_layer = self.planner.permute_last_layer(&working);

        Ok(StrategyOutcome::Staged {
            align,
            cross,
            first_two_layers,
            orient_last_layer,
            permute_last_layer,
        })
    }
}
