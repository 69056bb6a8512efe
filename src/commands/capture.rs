//! Face capture intake
//!
//! The color-extraction collaborator reports one 9-character reading
//! per face, or signals that a face is unavailable. Intake assembles a
//! full state string from the readings, substituting the matching face
//! of a deterministic fallback state for anything unavailable. An
//! unavailable reading is expected input, not an error.

use crate::core::{Cube, Face, ValidationError};

/// Fallback state used when a face reading is unavailable
///
/// A solved cube after `R U R' U'`: scrambled enough to demo with,
/// centers still standard so every strategy accepts it.
pub const FALLBACK_STATE: &str =
    "RRWRRYRRROBBBBBBBBGGYOGGYGGYYBYYRYYRWWGWWWWWWOGGOOOOOO";

/// Assemble a cube from per-face readings, in serialization face order
///
/// `readings[face.index()]` is the 9-character reading for that face,
/// or `None` when extraction reported it unavailable; unavailable
/// faces take the fallback's stickers.
///
/// # Errors
/// Returns [`ValidationError`] if a reading is not 9 characters, any
/// character is outside the color alphabet, or the fallback itself is
/// malformed.
pub fn assemble_cube(
    readings: &[Option<String>; 6],
    fallback: &str,
) -> Result<Cube, ValidationError> {
    let fallback_cube = Cube::from_state(fallback)?;
    let fallback_state = fallback_cube.state();

    let mut state = String::with_capacity(54);
    for face in Face::ALL {
        let start = face.index() * 9;
        match &readings[face.index()] {
            Some(reading) => {
                let len = reading.chars().count();
                if len != 9 {
                    return Err(ValidationError::InvalidLength(len));
                }
                state.push_str(reading);
            }
            None => state.push_str(&fallback_state[start..start + 9]),
        }
    }

    Cube::from_state(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SOLVED_STATE;

    #[test]
    fn fallback_state_is_valid_and_centers_standard() {
        let cube = Cube::from_state(FALLBACK_STATE).unwrap();
        assert!(cube.centers_standard());
        assert!(!cube.is_solved());
    }

    #[test]
    fn all_faces_available_ignores_the_fallback() {
        let readings: [Option<String>; 6] = std::array::from_fn(|i| {
            Some(SOLVED_STATE[i * 9..(i + 1) * 9].to_string())
        });
        let cube = assemble_cube(&readings, FALLBACK_STATE).unwrap();
        assert!(cube.is_solved_oriented());
    }

    #[test]
    fn unavailable_faces_take_fallback_stickers() {
        let mut readings: [Option<String>; 6] = std::array::from_fn(|i| {
            Some(SOLVED_STATE[i * 9..(i + 1) * 9].to_string())
        });
        readings[Face::Up.index()] = None;

        let cube = assemble_cube(&readings, FALLBACK_STATE).unwrap();
        let expected_up = &FALLBACK_STATE[Face::Up.index() * 9..Face::Up.index() * 9 + 9];
        assert_eq!(&cube.state()[27..36], expected_up);
        assert_eq!(&cube.state()[0..9], "RRRRRRRRR");
    }

    #[test]
    fn nothing_available_yields_the_fallback_exactly() {
        let readings: [Option<String>; 6] = std::array::from_fn(|_| None);
        let cube = assemble_cube(&readings, FALLBACK_STATE).unwrap();
        assert_eq!(cube.state(), FALLBACK_STATE);
    }

    #[test]
    fn readings_are_normalized_to_uppercase() {
        let readings: [Option<String>; 6] = std::array::from_fn(|i| {
            Some(SOLVED_STATE[i * 9..(i + 1) * 9].to_lowercase())
        });
        let cube = assemble_cube(&readings, FALLBACK_STATE).unwrap();
        assert_eq!(cube.state(), SOLVED_STATE);
    }

    #[test]
    fn short_reading_is_rejected() {
        let mut readings: [Option<String>; 6] = std::array::from_fn(|_| None);
        readings[0] = Some("RRR".to_string());
        assert_eq!(
            assemble_cube(&readings, FALLBACK_STATE),
            Err(ValidationError::InvalidLength(3))
        );
    }

    #[test]
    fn bad_color_in_reading_is_rejected() {
        let mut readings: [Option<String>; 6] = std::array::from_fn(|_| None);
        readings[0] = Some("RRRRXRRRR".to_string());
        assert!(matches!(
            assemble_cube(&readings, FALLBACK_STATE),
            Err(ValidationError::InvalidColor { found: 'X', .. })
        ));
    }
}
