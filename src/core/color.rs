//! Sticker colors
//!
//! The six colors carried by cube stickers, each with a one-character
//! serialization code and a display label.

use std::fmt;

/// One of the six sticker colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Orange,
}

impl Color {
    /// All colors, in no particular order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::White,
        Self::Orange,
    ];

    /// The one-character serialization code
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Orange => 'O',
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Orange => "orange",
        }
    }

    /// Decode a serialization code, case-insensitively
    ///
    /// Returns `None` for characters outside the six-letter alphabet
    /// (including the `X` placeholder some collaborators emit).
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'B' => Some(Self::Blue),
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'W' => Some(Self::White),
            'O' => Some(Self::Orange),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
