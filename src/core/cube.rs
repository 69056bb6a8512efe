//! Cube state
//!
//! Six 3×3 sticker grids, one per face, mutated only through move
//! application. A primitive turn is a closed-form sticker permutation:
//! four 3-sticker strips cycle between the faces adjacent to the
//! turning layer, and outer-layer turns additionally rotate the turning
//! face's own grid 90° (transpose, then reverse each row). Composite
//! moves (wide, slice-combined, whole-cube) are expanded by the
//! notation compiler before they reach this layer.
//!
//! The serialized form is a 54-character string in face order FRONT,
//! LEFT, RIGHT, UP, DOWN, BACK, row-major within each face. Grids are
//! read the way the standard unfolded net displays them: UP above
//! FRONT, LEFT/FRONT/RIGHT/BACK left to right, DOWN below FRONT.

use super::{Color, Face};
use crate::notation::{Move, MoveError, MoveSequence, Primitive, Turn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Serialized form of the solved cube in its home orientation
pub const SOLVED_STATE: &str =
    "RRRRRRRRRBBBBBBBBBGGGGGGGGGYYYYYYYYYWWWWWWWWWOOOOOOOOO";

/// Error type for malformed state strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not exactly 54 characters
    InvalidLength(usize),
    /// A character outside the six-letter color alphabet
    InvalidColor { found: char, position: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "State string must be exactly 54 characters, got {len}")
            }
            Self::InvalidColor { found, position } => {
                write!(
                    f,
                    "Invalid color character {found:?} at position {position} (expected one of W, Y, R, O, G, B)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A sticker position, as (face, row, column)
type Pos = (Face, usize, usize);

/// Four 3-sticker strips; stickers in strip `i` move to strip `i + 1`
type StripCycle = [[Pos; 3]; 4];

use Face::{Back, Down, Front, Left, Right, Up};

const UP_CYCLE: StripCycle = [
    [(Front, 0, 0), (Front, 0, 1), (Front, 0, 2)],
    [(Left, 0, 0), (Left, 0, 1), (Left, 0, 2)],
    [(Back, 0, 0), (Back, 0, 1), (Back, 0, 2)],
    [(Right, 0, 0), (Right, 0, 1), (Right, 0, 2)],
];

const DOWN_CYCLE: StripCycle = [
    [(Front, 2, 0), (Front, 2, 1), (Front, 2, 2)],
    [(Right, 2, 0), (Right, 2, 1), (Right, 2, 2)],
    [(Back, 2, 0), (Back, 2, 1), (Back, 2, 2)],
    [(Left, 2, 0), (Left, 2, 1), (Left, 2, 2)],
];

const RIGHT_CYCLE: StripCycle = [
    [(Front, 0, 2), (Front, 1, 2), (Front, 2, 2)],
    [(Up, 0, 2), (Up, 1, 2), (Up, 2, 2)],
    [(Back, 2, 0), (Back, 1, 0), (Back, 0, 0)],
    [(Down, 0, 2), (Down, 1, 2), (Down, 2, 2)],
];

const LEFT_CYCLE: StripCycle = [
    [(Front, 0, 0), (Front, 1, 0), (Front, 2, 0)],
    [(Down, 0, 0), (Down, 1, 0), (Down, 2, 0)],
    [(Back, 2, 2), (Back, 1, 2), (Back, 0, 2)],
    [(Up, 0, 0), (Up, 1, 0), (Up, 2, 0)],
];

const FRONT_CYCLE: StripCycle = [
    [(Up, 2, 0), (Up, 2, 1), (Up, 2, 2)],
    [(Right, 0, 0), (Right, 1, 0), (Right, 2, 0)],
    [(Down, 0, 2), (Down, 0, 1), (Down, 0, 0)],
    [(Left, 2, 2), (Left, 1, 2), (Left, 0, 2)],
];

const BACK_CYCLE: StripCycle = [
    [(Up, 0, 0), (Up, 0, 1), (Up, 0, 2)],
    [(Left, 2, 0), (Left, 1, 0), (Left, 0, 0)],
    [(Down, 2, 2), (Down, 2, 1), (Down, 2, 0)],
    [(Right, 0, 2), (Right, 1, 2), (Right, 2, 2)],
];

const MIDDLE_CYCLE: StripCycle = [
    [(Front, 0, 1), (Front, 1, 1), (Front, 2, 1)],
    [(Down, 0, 1), (Down, 1, 1), (Down, 2, 1)],
    [(Back, 2, 1), (Back, 1, 1), (Back, 0, 1)],
    [(Up, 0, 1), (Up, 1, 1), (Up, 2, 1)],
];

const EQUATOR_CYCLE: StripCycle = [
    [(Front, 1, 0), (Front, 1, 1), (Front, 1, 2)],
    [(Right, 1, 0), (Right, 1, 1), (Right, 1, 2)],
    [(Back, 1, 0), (Back, 1, 1), (Back, 1, 2)],
    [(Left, 1, 0), (Left, 1, 1), (Left, 1, 2)],
];

const STANDING_CYCLE: StripCycle = [
    [(Up, 1, 0), (Up, 1, 1), (Up, 1, 2)],
    [(Right, 0, 1), (Right, 1, 1), (Right, 2, 1)],
    [(Down, 1, 2), (Down, 1, 1), (Down, 1, 0)],
    [(Left, 2, 1), (Left, 1, 1), (Left, 0, 1)],
];

/// A 3×3×3 cube configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    grids: [[[Color; 3]; 3]; 6],
}

impl Cube {
    /// Create a cube in the solved home orientation
    #[must_use]
    pub fn solved() -> Self {
        let mut grids = [[[Color::Red; 3]; 3]; 6];
        for face in Face::ALL {
            grids[face.index()] = [[face.standard_color(); 3]; 3];
        }
        Self { grids }
    }

    /// Create a cube from a 54-character state string
    ///
    /// Input is case-insensitive and normalized to uppercase.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if the length is not 54 or any
    /// character is outside the six-letter color alphabet.
    pub fn from_state(state: &str) -> Result<Self, ValidationError> {
        let chars: Vec<char> = state.chars().collect();
        if chars.len() != 54 {
            return Err(ValidationError::InvalidLength(chars.len()));
        }

        let mut grids = [[[Color::Red; 3]; 3]; 6];
        for (position, &c) in chars.iter().enumerate() {
            let color = Color::from_code(c)
                .ok_or(ValidationError::InvalidColor { found: c, position })?;
            grids[position / 9][position % 9 / 3][position % 3] = color;
        }
        Ok(Self { grids })
    }

    /// Serialize to the 54-character state string
    ///
    /// Total; exact inverse of [`Cube::from_state`] on canonical input.
    #[must_use]
    pub fn state(&self) -> String {
        let mut out = String::with_capacity(54);
        for grid in &self.grids {
            for row in grid {
                for color in row {
                    out.push(color.code());
                }
            }
        }
        out
    }

    /// Return the cube to the solved home orientation
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// Whether every face is uniformly one color, in any orientation
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grids
            .iter()
            .all(|grid| grid.iter().flatten().all(|&c| c == grid[1][1]))
    }

    /// Whether the cube is solved in the home orientation exactly
    #[must_use]
    pub fn is_solved_oriented(&self) -> bool {
        self.state() == SOLVED_STATE
    }

    /// Whether every center occupies its standard face
    #[must_use]
    pub fn centers_standard(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.center(face) == face.standard_color())
    }

    /// The center sticker of a face
    #[inline]
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.grids[face.index()][1][1]
    }

    /// The sticker at (row, col) of a face
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside 0..3.
    #[inline]
    #[must_use]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self.grids[face.index()][row][col]
    }

    /// Apply one primitive turn
    pub fn apply_turn(&mut self, turn: Turn) {
        for _ in 0..turn.quarters() {
            self.turn_once(turn.primitive());
        }
    }

    /// Apply primitive turns in order
    ///
    /// No rollback: callers needing atomicity across a whole sequence
    /// must operate on a clone.
    pub fn apply_turns<I>(&mut self, turns: I)
    where
        I: IntoIterator<Item = Turn>,
    {
        for turn in turns {
            self.apply_turn(turn);
        }
    }

    /// Expand a parsed move sequence and apply it
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) {
        self.apply_turns(sequence.expand());
    }

    /// Parse notation text and apply it
    ///
    /// # Errors
    /// Returns [`MoveError`] if the notation does not parse; the cube
    /// is left untouched in that case.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), MoveError> {
        let sequence = MoveSequence::parse(notation)?;
        self.apply_sequence(&sequence);
        Ok(())
    }

    /// Scramble with `count` moves drawn uniformly from the full
    /// 18-letter move alphabet
    ///
    /// Returns the applied sequence so the scramble can be replayed
    /// exactly. The random source is injected for determinism.
    pub fn scramble<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> MoveSequence {
        self.scramble_with(count, &Move::ALPHABET, rng)
    }

    /// Scramble drawing from a caller-supplied move alphabet
    ///
    /// An empty alphabet yields an empty sequence.
    pub fn scramble_with<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        alphabet: &[Move],
        rng: &mut R,
    ) -> MoveSequence {
        let moves: Vec<Move> = (0..count)
            .filter_map(|_| alphabet.choose(rng).copied())
            .collect();
        let sequence = MoveSequence::from_moves(moves);
        self.apply_sequence(&sequence);
        sequence
    }

    fn turn_once(&mut self, primitive: Primitive) {
        let (cycle, rotated_face) = match primitive {
            Primitive::Up => (&UP_CYCLE, Some(Up)),
            Primitive::Down => (&DOWN_CYCLE, Some(Down)),
            Primitive::Front => (&FRONT_CYCLE, Some(Front)),
            Primitive::Back => (&BACK_CYCLE, Some(Back)),
            Primitive::Left => (&LEFT_CYCLE, Some(Left)),
            Primitive::Right => (&RIGHT_CYCLE, Some(Right)),
            Primitive::Middle => (&MIDDLE_CYCLE, None),
            Primitive::Equator => (&EQUATOR_CYCLE, None),
            Primitive::Standing => (&STANDING_CYCLE, None),
        };
        self.cycle_strips(cycle);
        if let Some(face) = rotated_face {
            self.rotate_face_cw(face);
        }
    }

    fn cycle_strips(&mut self, cycle: &StripCycle) {
        let held: [[Color; 3]; 4] = std::array::from_fn(|i| {
            std::array::from_fn(|j| {
                let (face, row, col) = cycle[i][j];
                self.grids[face.index()][row][col]
            })
        });
        for (i, strip) in held.iter().enumerate() {
            for (j, &color) in strip.iter().enumerate() {
                let (face, row, col) = cycle[(i + 1) % 4][j];
                self.grids[face.index()][row][col] = color;
            }
        }
    }

    /// 90° clockwise: transpose, then reverse each row
    fn rotate_face_cw(&mut self, face: Face) {
        let grid = self.grids[face.index()];
        let transposed: [[Color; 3]; 3] =
            std::array::from_fn(|r| std::array::from_fn(|c| grid[c][r]));
        self.grids[face.index()] =
            std::array::from_fn(|r| std::array::from_fn(|c| transposed[r][2 - c]));
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Layer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::solved();
        assert!(cube.is_solved());
        assert!(cube.is_solved_oriented());
        assert!(cube.centers_standard());
        assert_eq!(cube.state(), SOLVED_STATE);
    }

    #[test]
    fn solved_state_is_nine_of_each_face_color() {
        let expected: String = "RBGYWO".chars().flat_map(|c| [c; 9]).collect();
        assert_eq!(SOLVED_STATE, expected);
    }

    #[test]
    fn from_state_round_trips() {
        let cube = Cube::from_state(SOLVED_STATE).unwrap();
        assert_eq!(cube.state(), SOLVED_STATE);
        assert!(cube.is_solved());
    }

    #[test]
    fn from_state_normalizes_lowercase() {
        let lower = SOLVED_STATE.to_lowercase();
        let cube = Cube::from_state(&lower).unwrap();
        assert_eq!(cube.state(), SOLVED_STATE);
    }

    #[test]
    fn from_state_rejects_wrong_length() {
        assert_eq!(
            Cube::from_state("RGB"),
            Err(ValidationError::InvalidLength(3))
        );
        let long = "R".repeat(55);
        assert_eq!(
            Cube::from_state(&long),
            Err(ValidationError::InvalidLength(55))
        );
    }

    #[test]
    fn from_state_rejects_invalid_color() {
        let mut bad = SOLVED_STATE.to_string();
        bad.replace_range(10..11, "X");
        assert_eq!(
            Cube::from_state(&bad),
            Err(ValidationError::InvalidColor {
                found: 'X',
                position: 10
            })
        );
    }

    #[test]
    fn mixed_scramble_regression() {
        // Exercises every primitive plus wide, slice, and whole-cube
        // expansion in one sequence.
        let mut cube = Cube::solved();
        cube.apply_notation("U2 x' M2' u l L2 R' F2 f' S2' b2 b U z S f b b")
            .unwrap();
        assert_eq!(
            cube.state(),
            "OOOOROBYYYBBGBBBBRGBGGGGOWBRYWWYRWYWYGGYWRRWYRRGROWOOW"
        );
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for layer in Layer::ALL {
            let mut cube = Cube::solved();
            for _ in 0..4 {
                cube.apply_sequence(&MoveSequence::from_moves(vec![Move::quarter(layer)]));
            }
            assert!(cube.is_solved_oriented(), "layer {}", layer.code());
        }
    }

    #[test]
    fn half_turn_equals_two_quarters_either_direction() {
        for layer in Layer::ALL {
            let token = layer.code();
            let mut half = Cube::solved();
            half.apply_notation(&format!("{token}2")).unwrap();

            let mut quarters = Cube::solved();
            quarters.apply_notation(&format!("{token} {token}")).unwrap();
            assert_eq!(half, quarters, "layer {token}");

            let mut reversed = Cube::solved();
            reversed
                .apply_notation(&format!("{token}' {token}'"))
                .unwrap();
            assert_eq!(half, reversed, "layer {token}");
        }
    }

    #[test]
    fn sequence_then_inverse_restores_state() {
        let sequence = MoveSequence::parse("R u' M2 z F' E d2 b y' S L2 x").unwrap();
        let mut cube = Cube::solved();
        cube.apply_sequence(&sequence);
        assert!(!cube.is_solved_oriented());
        cube.apply_sequence(&sequence.inverse());
        assert!(cube.is_solved_oriented());
    }

    #[test]
    fn failed_notation_leaves_cube_untouched() {
        let mut cube = Cube::solved();
        assert!(cube.apply_notation("R U Q' F").is_err());
        assert!(cube.is_solved_oriented());
    }

    #[test]
    fn whole_cube_rotation_stays_solved_but_not_oriented() {
        let mut cube = Cube::solved();
        cube.apply_notation("x").unwrap();
        assert!(cube.is_solved());
        assert!(!cube.is_solved_oriented());
        assert!(!cube.centers_standard());
    }

    #[test]
    fn slice_turn_moves_centers() {
        let mut cube = Cube::solved();
        cube.apply_notation("M").unwrap();
        assert!(!cube.centers_standard());
    }

    #[test]
    fn outer_turns_keep_centers_standard() {
        let mut cube = Cube::solved();
        cube.apply_notation("R U2 F' D L B2").unwrap();
        assert!(cube.centers_standard());
        assert!(!cube.is_solved());
    }

    #[test]
    fn scramble_is_reproducible_from_seed() {
        let mut a = Cube::solved();
        let mut b = Cube::solved();
        let seq_a = a.scramble(40, &mut StdRng::seed_from_u64(7));
        let seq_b = b.scramble(40, &mut StdRng::seed_from_u64(7));
        assert_eq!(seq_a.to_string(), seq_b.to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_notation_replays_exactly() {
        let mut scrambled = Cube::solved();
        let sequence = scrambled.scramble(30, &mut StdRng::seed_from_u64(99));

        let mut replay = Cube::solved();
        replay.apply_notation(&sequence.to_string()).unwrap();
        assert_eq!(scrambled, replay);
    }

    #[test]
    fn scramble_with_empty_alphabet_is_a_no_op() {
        let mut cube = Cube::solved();
        let sequence = cube.scramble_with(10, &[], &mut StdRng::seed_from_u64(0));
        assert!(sequence.is_empty());
        assert!(cube.is_solved_oriented());
    }

    #[test]
    fn sticker_and_center_accessors() {
        let cube = Cube::solved();
        assert_eq!(cube.center(Face::Front), Color::Red);
        assert_eq!(cube.sticker(Face::Back, 2, 2), Color::Orange);
    }
}
