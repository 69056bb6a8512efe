//! Move sequences
//!
//! Parsing, canonical emission, and the sequence-level operations the
//! rest of the crate is built on: inversion, pair-merging, and
//! expansion into primitive turns.
//!
//! Two textual forms are accepted by the same scanner: the expanded
//! form separates tokens with whitespace (`U2 R' f`), the compact form
//! concatenates them (`U2R'f`). Primes may sit on either side of a
//! digit (`U2'` and `U'2` are the same request), as both appear in the
//! wild.

use super::moves::{Move, Turn};
use super::Layer;
use std::fmt;
use std::str::FromStr;

/// Error type for unparseable notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A token whose face letter or modifier is not part of the grammar
    UnrecognizedToken { token: String, position: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedToken { token, position } => {
                write!(f, "Unrecognized move token {token:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// An ordered run of move tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// The empty sequence
    #[must_use]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Wrap an already-normalized move list
    #[must_use]
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Parse notation text, expanded or compact
    ///
    /// Net no-op tokens (`U4`, `F0`) are dropped during normalization.
    ///
    /// # Errors
    /// Returns [`MoveError`] naming the first offending token and its
    /// 1-based position in the run.
    pub fn parse(notation: &str) -> Result<Self, MoveError> {
        let mut moves = Vec::new();
        let mut chars = notation.chars().peekable();
        let mut position = 0usize;

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }
            position += 1;

            let mut token = String::new();
            token.push(c);
            chars.next();
            while let Some(&m) = chars.peek() {
                if m == '\'' || m.is_ascii_digit() {
                    token.push(m);
                    chars.next();
                } else {
                    break;
                }
            }

            if let Some(mv) = decode_token(&token, position)? {
                moves.push(mv);
            }
        }

        Ok(Self { moves })
    }

    /// The normalized tokens
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the sequence holds no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a token
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The sequence undoing this one: reversed order, each token
    /// inverted
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            moves: self.moves.iter().rev().map(|m| m.inverse()).collect(),
        }
    }

    /// Fold consecutive identical quarter turns into half turns
    ///
    /// Each token is first reduced to its quarter-turn runs, then
    /// adjacent identical quarters pair up into a half turn carrying
    /// the same direction. Only pairs fold: three identical quarters
    /// render as a half turn followed by a quarter.
    #[must_use]
    pub fn merged(&self) -> Self {
        let mut out: Vec<Move> = Vec::with_capacity(self.moves.len());
        for &mv in &self.moves {
            let repeats = if mv.is_half() { 2 } else { 1 };
            let quarter = if mv.is_prime() {
                Move::quarter(mv.layer()).inverse()
            } else {
                Move::quarter(mv.layer())
            };
            for _ in 0..repeats {
                if out.last() == Some(&quarter) {
                    out.pop();
                    out.push(Move::half(mv.layer(), mv.is_prime()));
                } else {
                    out.push(quarter);
                }
            }
        }
        Self { moves: out }
    }

    /// Expand every token into primitive turns, in order
    #[must_use]
    pub fn expand(&self) -> Vec<Turn> {
        let mut out = Vec::with_capacity(self.moves.len() * 2);
        for mv in &self.moves {
            mv.expand_into(&mut out);
        }
        out
    }

    /// Emit the compact form: tokens concatenated without separators
    #[must_use]
    pub fn compact(&self) -> String {
        self.moves.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for MoveSequence {
    /// Canonical expanded form: tokens separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Decode one scanned token into a normalized move
///
/// Returns `Ok(None)` for net no-ops.
fn decode_token(token: &str, position: usize) -> Result<Option<Move>, MoveError> {
    let unrecognized = || MoveError::UnrecognizedToken {
        token: token.to_string(),
        position,
    };

    let mut chars = token.chars();
    let face = chars.next().ok_or_else(unrecognized)?;
    let layer = Layer::from_code(face).ok_or_else(unrecognized)?;

    let mut digits = String::new();
    let mut prime = false;
    for c in chars {
        if c == '\'' {
            prime = true;
        } else {
            // scanner guarantees ascii digits here
            digits.push(c);
        }
    }

    let count = if digits.is_empty() {
        1
    } else {
        digits.parse::<u32>().map_err(|_| unrecognized())?
    };

    Ok(Move::normalized(layer, count, prime))
}
