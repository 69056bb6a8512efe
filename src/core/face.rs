//! Cube faces
//!
//! The six physical faces, their fixed serialization order, and the
//! standard center-color binding that defines the cube's home
//! orientation.

use super::Color;
use std::fmt;

/// One of the six cube faces
///
/// The declaration order is the serialization order: a state string is
/// FRONT, LEFT, RIGHT, UP, DOWN, BACK, nine stickers each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Left,
    Right,
    Up,
    Down,
    Back,
}

impl Face {
    /// All faces in serialization order
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Back,
    ];

    /// Fixed index into the serialization order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Up => 3,
            Self::Down => 4,
            Self::Back => 5,
        }
    }

    /// The center color this face carries in the home orientation
    #[must_use]
    pub const fn standard_color(self) -> Color {
        match self {
            Self::Front => Color::Red,
            Self::Left => Color::Blue,
            Self::Right => Color::Green,
            Self::Up => Color::Yellow,
            Self::Down => Color::White,
            Self::Back => Color::Orange,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
