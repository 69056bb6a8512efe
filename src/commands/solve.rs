//! Solve command

use crate::core::Cube;
use crate::solver::{SearchStrategy, Solution, Solver, StrategyType};

/// Configuration for solving a cube state
pub struct SolveConfig {
    /// 54-character state string
    pub state: String,
    /// Strategy name ("search" or "cfop")
    pub strategy: String,
    /// Depth budget override for the search strategy
    pub max_depth: Option<u8>,
}

impl SolveConfig {
    /// Create a config with the default strategy
    #[must_use]
    pub fn new(state: String) -> Self {
        Self {
            state,
            strategy: "search".to_string(),
            max_depth: None,
        }
    }
}

/// Result of solving one cube state
#[derive(Debug)]
pub struct SolveReport {
    /// The state as handed in (normalized)
    pub initial: Cube,
    /// The state after applying the solution
    pub result: Cube,
    /// The staged solution; empty when the cube arrived solved
    pub solution: Solution,
    /// Whether the cube arrived already solved
    pub already_solved: bool,
}

/// Solve a state string with the configured strategy
///
/// # Errors
/// Returns a message for a malformed state string or a typed strategy
/// failure.
pub fn solve_state(config: &SolveConfig) -> Result<SolveReport, String> {
    let mut cube = Cube::from_state(&config.state).map_err(|e| e.to_string())?;
    let initial = cube.clone();

    if cube.is_solved() {
        return Ok(SolveReport {
            result: cube,
            initial,
            solution: Solution::from_flat(crate::notation::MoveSequence::new()),
            already_solved: true,
        });
    }

    let mut strategy = StrategyType::from_name(&config.strategy);
    if let (StrategyType::Search(_), Some(depth)) = (&strategy, config.max_depth) {
        strategy = StrategyType::Search(SearchStrategy::new(depth));
    }

    let solver = Solver::new(strategy);
    let solution = solver.solve(&mut cube).map_err(|e| e.to_string())?;

    Ok(SolveReport {
        result: cube,
        initial,
        solution,
        already_solved: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SOLVED_STATE;

    #[test]
    fn solves_a_scrambled_state() {
        let mut cube = Cube::solved();
        cube.apply_notation("R2 D F'").unwrap();

        let report = solve_state(&SolveConfig::new(cube.state())).unwrap();
        assert!(!report.already_solved);
        assert!(report.result.is_solved());
        assert_eq!(report.initial, cube);
        assert!(!report.solution.is_empty());
    }

    #[test]
    fn reports_an_already_solved_state() {
        let report = solve_state(&SolveConfig::new(SOLVED_STATE.to_string())).unwrap();
        assert!(report.already_solved);
        assert!(report.solution.is_empty());
    }

    #[test]
    fn rejects_a_malformed_state() {
        let err = solve_state(&SolveConfig::new("RGB".to_string())).unwrap_err();
        assert!(err.contains("54"));
    }

    #[test]
    fn depth_override_reaches_the_search() {
        let mut cube = Cube::solved();
        cube.apply_notation("R U F").unwrap();

        let config = SolveConfig {
            state: cube.state(),
            strategy: "search".to_string(),
            max_depth: Some(2),
        };
        let err = solve_state(&config).unwrap_err();
        assert!(err.contains("within 2 moves"));
    }

    #[test]
    fn cfop_placeholder_returns_empty_solution() {
        let mut cube = Cube::solved();
        cube.apply_notation("R U").unwrap();

        let config = SolveConfig {
            state: cube.state(),
            strategy: "cfop".to_string(),
            max_depth: None,
        };
        let report = solve_state(&config).unwrap();
        assert!(report.solution.is_empty());
        assert_eq!(report.result, report.initial);
    }
}
