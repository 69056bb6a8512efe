//! Apply command

use crate::core::Cube;

/// Result of applying notation to a state
#[derive(Debug)]
pub struct ApplyReport {
    /// The resulting cube
    pub cube: Cube,
    /// Whether the result is solved (any orientation)
    pub solved: bool,
}

/// Apply notation text to a state string
///
/// # Errors
/// Returns a message for a malformed state string or unparseable
/// notation.
pub fn apply_notation(state: &str, notation: &str) -> Result<ApplyReport, String> {
    let mut cube = Cube::from_state(state).map_err(|e| e.to_string())?;
    cube.apply_notation(notation).map_err(|e| e.to_string())?;
    let solved = cube.is_solved();
    Ok(ApplyReport { cube, solved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SOLVED_STATE;

    #[test]
    fn applies_notation_to_a_state() {
        let report = apply_notation(SOLVED_STATE, "R U R' U'").unwrap();
        assert!(!report.solved);

        let undone = apply_notation(&report.cube.state(), "U R U' R'").unwrap();
        assert!(undone.solved);
        assert_eq!(undone.cube.state(), SOLVED_STATE);
    }

    #[test]
    fn surfaces_notation_errors() {
        let err = apply_notation(SOLVED_STATE, "R Q").unwrap_err();
        assert!(err.contains("\"Q\""));
    }

    #[test]
    fn surfaces_state_errors() {
        assert!(apply_notation("XYZ", "R").is_err());
    }
}
