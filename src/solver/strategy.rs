//! Solving strategies
//!
//! Defines the Strategy trait, the typed failure taxonomy, and the
//! runtime strategy selector.

use super::cfop::{CfopStrategy, NoOpPlanner};
use super::search::SearchStrategy;
use crate::core::Cube;
use crate::notation::MoveSequence;
use std::fmt;

/// Typed failure returned by strategies and the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A strategy precondition on the cube configuration is unmet
    UnsupportedConfiguration(String),
    /// The search exhausted its depth budget without a solution
    NoSolutionFound { max_depth: u8 },
    /// A strategy's claimed solution failed replay verification
    Unverified,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConfiguration(reason) => {
                write!(f, "Unsupported cube configuration: {reason}")
            }
            Self::NoSolutionFound { max_depth } => {
                write!(f, "No solution found within {max_depth} moves")
            }
            Self::Unverified => {
                write!(f, "Strategy returned moves that do not solve the cube")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// What a strategy hands back to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// One flat operation sequence; the pipeline records it as the
    /// ALIGN stage and replay-verifies it
    Flat(MoveSequence),
    /// Five separately labeled stage segments, composed sequentially
    Staged {
        align: MoveSequence,
        cross: MoveSequence,
        first_two_layers: MoveSequence,
        orient_last_layer: MoveSequence,
        permute_last_layer: MoveSequence,
    },
}

/// A solving strategy: maps a cube configuration to an operation plan
///
/// Strategies never mutate the caller's cube; the pipeline applies the
/// accepted plan afterwards.
pub trait Strategy {
    /// Produce a plan for the given cube
    ///
    /// # Errors
    /// Returns a typed [`SolveError`]; strategies never panic on
    /// unsolvable or unsupported input.
    fn solve(&self, cube: &Cube) -> Result<StrategyOutcome, SolveError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static
/// dispatch.
pub enum StrategyType {
    /// Bounded search over outer-face turns (default)
    Search(SearchStrategy),
    /// Staged human method with pluggable per-stage planners
    Cfop(CfopStrategy<NoOpPlanner>),
}

impl Strategy for StrategyType {
    fn solve(&self, cube: &Cube) -> Result<StrategyOutcome, SolveError> {
        match self {
            Self::Search(s) => s.solve(cube),
            Self::Cfop(s) => s.solve(cube),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "search", "cfop". Defaults to search if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "cfop" | "staged" => Self::Cfop(CfopStrategy::default()),
            _ => Self::Search(SearchStrategy::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_selects_cfop() {
        assert!(matches!(StrategyType::from_name("cfop"), StrategyType::Cfop(_)));
        assert!(matches!(
            StrategyType::from_name("staged"),
            StrategyType::Cfop(_)
        ));
    }

    #[test]
    fn from_name_defaults_to_search() {
        assert!(matches!(
            StrategyType::from_name("search"),
            StrategyType::Search(_)
        ));
        assert!(matches!(
            StrategyType::from_name("anything"),
            StrategyType::Search(_)
        ));
    }

    #[test]
    fn errors_display_their_context() {
        let err = SolveError::NoSolutionFound { max_depth: 6 };
        assert!(err.to_string().contains('6'));

        let err = SolveError::UnsupportedConfiguration("centers moved".to_string());
        assert!(err.to_string().contains("centers moved"));
    }
}
