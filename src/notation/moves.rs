//! Move tokens
//!
//! A [`Move`] is one notation token: a layer selector, a turn
//! magnitude, and a direction. The nine primitive layers (outer faces
//! and middle slices) act on the cube directly; wide and whole-cube
//! selectors are derived, each a fixed short composition of primitives.
//! Any requested (magnitude, direction) pair normalizes to a net number
//! of clockwise quarter turns in 0..=3, with 0 dropped at parse time.

use std::fmt;

/// One of the nine primitive layers
///
/// Slice directions follow cubing convention: M turns like L, E like D,
/// S like F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
    Middle,
    Equator,
    Standing,
}

impl Primitive {
    /// All nine primitives
    pub const ALL: [Self; 9] = [
        Self::Up,
        Self::Down,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::Equator,
        Self::Standing,
    ];

    /// The notation letter
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Middle => 'M',
            Self::Equator => 'E',
            Self::Standing => 'S',
        }
    }

    /// The layer selector naming this primitive
    #[must_use]
    pub const fn layer(self) -> Layer {
        match self {
            Self::Up => Layer::Up,
            Self::Down => Layer::Down,
            Self::Front => Layer::Front,
            Self::Back => Layer::Back,
            Self::Left => Layer::Left,
            Self::Right => Layer::Right,
            Self::Middle => Layer::Middle,
            Self::Equator => Layer::Equator,
            Self::Standing => Layer::Standing,
        }
    }
}

/// A layer selector: one of the 18 notation letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
    UpWide,
    DownWide,
    FrontWide,
    BackWide,
    LeftWide,
    RightWide,
    Middle,
    Equator,
    Standing,
    RotateX,
    RotateY,
    RotateZ,
}

impl Layer {
    /// The full move alphabet, in notation order
    pub const ALL: [Self; 18] = [
        Self::Up,
        Self::Down,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::UpWide,
        Self::DownWide,
        Self::FrontWide,
        Self::BackWide,
        Self::LeftWide,
        Self::RightWide,
        Self::Middle,
        Self::Equator,
        Self::Standing,
        Self::RotateX,
        Self::RotateY,
        Self::RotateZ,
    ];

    /// The notation letter (case matters: lowercase selects two layers)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::UpWide => 'u',
            Self::DownWide => 'd',
            Self::FrontWide => 'f',
            Self::BackWide => 'b',
            Self::LeftWide => 'l',
            Self::RightWide => 'r',
            Self::Middle => 'M',
            Self::Equator => 'E',
            Self::Standing => 'S',
            Self::RotateX => 'x',
            Self::RotateY => 'y',
            Self::RotateZ => 'z',
        }
    }

    /// Decode a notation letter, case-sensitively
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'F' => Some(Self::Front),
            'B' => Some(Self::Back),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'u' => Some(Self::UpWide),
            'd' => Some(Self::DownWide),
            'f' => Some(Self::FrontWide),
            'b' => Some(Self::BackWide),
            'l' => Some(Self::LeftWide),
            'r' => Some(Self::RightWide),
            'M' => Some(Self::Middle),
            'E' => Some(Self::Equator),
            'S' => Some(Self::Standing),
            'x' => Some(Self::RotateX),
            'y' => Some(Self::RotateY),
            'z' => Some(Self::RotateZ),
            _ => None,
        }
    }

    /// Whether this selector is one of the nine primitives
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Front
                | Self::Back
                | Self::Left
                | Self::Right
                | Self::Middle
                | Self::Equator
                | Self::Standing
        )
    }

    /// Whether this selector turns two outer layers at once
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(
            self,
            Self::UpWide
                | Self::DownWide
                | Self::FrontWide
                | Self::BackWide
                | Self::LeftWide
                | Self::RightWide
        )
    }

    /// Expansion into primitive components with direction signs
    ///
    /// Fixed identities: `r = R M'`, `l = L M`, `u = U E'`, `d = D E`,
    /// `f = F S`, `b = B S'`, `x = R M' L'`, `y = U E' D'`, `z = F S B'`.
    /// A sign of `-1` inverts the component's quarter-turn count.
    pub(crate) const fn components(self) -> &'static [(Primitive, i8)] {
        match self {
            Self::Up => &[(Primitive::Up, 1)],
            Self::Down => &[(Primitive::Down, 1)],
            Self::Front => &[(Primitive::Front, 1)],
            Self::Back => &[(Primitive::Back, 1)],
            Self::Left => &[(Primitive::Left, 1)],
            Self::Right => &[(Primitive::Right, 1)],
            Self::Middle => &[(Primitive::Middle, 1)],
            Self::Equator => &[(Primitive::Equator, 1)],
            Self::Standing => &[(Primitive::Standing, 1)],
            Self::UpWide => &[(Primitive::Up, 1), (Primitive::Equator, -1)],
            Self::DownWide => &[(Primitive::Down, 1), (Primitive::Equator, 1)],
            Self::FrontWide => &[(Primitive::Front, 1), (Primitive::Standing, 1)],
            Self::BackWide => &[(Primitive::Back, 1), (Primitive::Standing, -1)],
            Self::LeftWide => &[(Primitive::Left, 1), (Primitive::Middle, 1)],
            Self::RightWide => &[(Primitive::Right, 1), (Primitive::Middle, -1)],
            Self::RotateX => &[
                (Primitive::Right, 1),
                (Primitive::Middle, -1),
                (Primitive::Left, -1),
            ],
            Self::RotateY => &[
                (Primitive::Up, 1),
                (Primitive::Equator, -1),
                (Primitive::Down, -1),
            ],
            Self::RotateZ => &[
                (Primitive::Front, 1),
                (Primitive::Standing, 1),
                (Primitive::Back, -1),
            ],
        }
    }
}

/// A primitive turn: a primitive layer with a net clockwise
/// quarter-turn count in 1..=3
///
/// The only unit the cube state accepts; produced by move expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    primitive: Primitive,
    quarters: u8,
}

impl Turn {
    /// Create a turn
    ///
    /// # Panics
    /// Panics in debug mode if `quarters` is outside 1..=3.
    #[must_use]
    pub const fn new(primitive: Primitive, quarters: u8) -> Self {
        debug_assert!(quarters >= 1 && quarters <= 3, "quarters must be 1..=3");
        Self { primitive, quarters }
    }

    /// The turning layer
    #[inline]
    #[must_use]
    pub const fn primitive(self) -> Primitive {
        self.primitive
    }

    /// Net clockwise quarter turns (1..=3)
    #[inline]
    #[must_use]
    pub const fn quarters(self) -> u8 {
        self.quarters
    }

    /// The turn undoing this one
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.primitive, 4 - self.quarters)
    }
}

/// One notation token: layer, magnitude, direction
///
/// `times` is 1 (quarter turn) or 2 (half turn); `prime` marks
/// counter-clockwise. A half turn's direction never changes its effect
/// but is preserved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    layer: Layer,
    times: u8,
    prime: bool,
}

impl Move {
    /// A single clockwise quarter turn of a layer
    #[must_use]
    pub const fn quarter(layer: Layer) -> Self {
        Self {
            layer,
            times: 1,
            prime: false,
        }
    }

    /// A half turn of a layer, keeping the written direction
    #[must_use]
    pub const fn half(layer: Layer, prime: bool) -> Self {
        Self {
            layer,
            times: 2,
            prime,
        }
    }

    /// The 18 bare tokens, one per layer; the default scramble alphabet
    pub const ALPHABET: [Self; 18] = [
        Self::quarter(Layer::Up),
        Self::quarter(Layer::Down),
        Self::quarter(Layer::Front),
        Self::quarter(Layer::Back),
        Self::quarter(Layer::Left),
        Self::quarter(Layer::Right),
        Self::quarter(Layer::UpWide),
        Self::quarter(Layer::DownWide),
        Self::quarter(Layer::FrontWide),
        Self::quarter(Layer::BackWide),
        Self::quarter(Layer::LeftWide),
        Self::quarter(Layer::RightWide),
        Self::quarter(Layer::Middle),
        Self::quarter(Layer::Equator),
        Self::quarter(Layer::Standing),
        Self::quarter(Layer::RotateX),
        Self::quarter(Layer::RotateY),
        Self::quarter(Layer::RotateZ),
    ];

    /// Normalize an arbitrary (magnitude, direction) request
    ///
    /// Reduces to net clockwise quarter turns mod 4; returns `None`
    /// for a net no-op. Half turns keep the requested direction for
    /// display.
    #[must_use]
    pub fn normalized(layer: Layer, count: u32, prime: bool) -> Option<Self> {
        let mut net = (count % 4) as u8;
        if prime {
            net = (4 - net) % 4;
        }
        match net {
            0 => None,
            1 => Some(Self {
                layer,
                times: 1,
                prime: false,
            }),
            2 => Some(Self {
                layer,
                times: 2,
                prime,
            }),
            _ => Some(Self {
                layer,
                times: 1,
                prime: true,
            }),
        }
    }

    /// Reconstruct the token form of a primitive turn
    #[must_use]
    pub const fn from_turn(turn: Turn) -> Self {
        let layer = turn.primitive().layer();
        match turn.quarters() {
            1 => Self {
                layer,
                times: 1,
                prime: false,
            },
            2 => Self {
                layer,
                times: 2,
                prime: false,
            },
            _ => Self {
                layer,
                times: 1,
                prime: true,
            },
        }
    }

    /// The selected layer
    #[inline]
    #[must_use]
    pub const fn layer(self) -> Layer {
        self.layer
    }

    /// Whether this is a half turn
    #[inline]
    #[must_use]
    pub const fn is_half(self) -> bool {
        self.times == 2
    }

    /// Whether this turns counter-clockwise
    #[inline]
    #[must_use]
    pub const fn is_prime(self) -> bool {
        self.prime
    }

    /// Net clockwise quarter turns (1..=3)
    #[must_use]
    pub const fn net_quarters(self) -> u8 {
        if self.times == 2 {
            2
        } else if self.prime {
            3
        } else {
            1
        }
    }

    /// The move undoing this one
    ///
    /// Quarter turns flip direction; a half turn is its own inverse.
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.times == 2 {
            self
        } else {
            Self {
                layer: self.layer,
                times: self.times,
                prime: !self.prime,
            }
        }
    }

    /// Append this move's primitive turns to `out`
    pub fn expand_into(self, out: &mut Vec<Turn>) {
        let net = self.net_quarters();
        for &(primitive, sign) in self.layer.components() {
            let quarters = if sign >= 0 { net } else { 4 - net };
            out.push(Turn::new(primitive, quarters));
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer.code())?;
        if self.times == 2 {
            write!(f, "2")?;
        }
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_codes_round_trip() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_code(layer.code()), Some(layer));
        }
        assert_eq!(Layer::from_code('Q'), None);
        assert_eq!(Layer::from_code('m'), None); // only M is a slice
    }

    #[test]
    fn nine_layers_are_primitive() {
        let count = Layer::ALL.iter().filter(|l| l.is_primitive()).count();
        assert_eq!(count, 9);
        assert!(Layer::Middle.is_primitive());
        assert!(!Layer::RightWide.is_primitive());
        assert!(!Layer::RotateX.is_primitive());
    }

    #[test]
    fn normalization_table() {
        let up = Layer::Up;
        assert_eq!(Move::normalized(up, 0, false), None);
        assert_eq!(Move::normalized(up, 4, false), None);
        assert_eq!(Move::normalized(up, 4, true), None);
        assert_eq!(Move::normalized(up, 1, false).unwrap().to_string(), "U");
        assert_eq!(Move::normalized(up, 1, true).unwrap().to_string(), "U'");
        assert_eq!(Move::normalized(up, 2, false).unwrap().to_string(), "U2");
        assert_eq!(Move::normalized(up, 2, true).unwrap().to_string(), "U2'");
        assert_eq!(Move::normalized(up, 3, false).unwrap().to_string(), "U'");
        assert_eq!(Move::normalized(up, 3, true).unwrap().to_string(), "U");
        assert_eq!(Move::normalized(up, 5, false).unwrap().to_string(), "U");
    }

    #[test]
    fn net_quarters_resolves_direction_before_magnitude() {
        for (count, prime, net) in [(1, false, 1), (1, true, 3), (2, false, 2), (2, true, 2)] {
            let mv = Move::normalized(Layer::Front, count, prime).unwrap();
            assert_eq!(mv.net_quarters(), net);
        }
    }

    #[test]
    fn inverse_flips_quarters_and_fixes_halves() {
        let r = Move::quarter(Layer::Right);
        assert_eq!(r.inverse().to_string(), "R'");
        assert_eq!(r.inverse().inverse(), r);

        let half = Move::normalized(Layer::Right, 2, true).unwrap();
        assert_eq!(half.inverse(), half);
    }

    #[test]
    fn turn_inverse_sums_to_four() {
        for q in 1..=3 {
            let turn = Turn::new(Primitive::Front, q);
            assert_eq!(turn.quarters() + turn.inverse().quarters(), 4);
        }
    }

    #[test]
    fn primitive_expansion_is_itself() {
        let mut out = Vec::new();
        Move::normalized(Layer::Middle, 2, true).unwrap().expand_into(&mut out);
        assert_eq!(out, vec![Turn::new(Primitive::Middle, 2)]);
    }

    #[test]
    fn wide_expansion_flips_secondary_sign() {
        let mut out = Vec::new();
        Move::quarter(Layer::RightWide).expand_into(&mut out);
        assert_eq!(
            out,
            vec![
                Turn::new(Primitive::Right, 1),
                Turn::new(Primitive::Middle, 3),
            ]
        );

        out.clear();
        Move::normalized(Layer::RotateY, 1, true).unwrap().expand_into(&mut out);
        assert_eq!(
            out,
            vec![
                Turn::new(Primitive::Up, 3),
                Turn::new(Primitive::Equator, 1),
                Turn::new(Primitive::Down, 1),
            ]
        );
    }

    #[test]
    fn from_turn_reconstructs_tokens() {
        assert_eq!(Move::from_turn(Turn::new(Primitive::Up, 1)).to_string(), "U");
        assert_eq!(Move::from_turn(Turn::new(Primitive::Up, 2)).to_string(), "U2");
        assert_eq!(Move::from_turn(Turn::new(Primitive::Up, 3)).to_string(), "U'");
    }

    #[test]
    fn alphabet_covers_every_layer_once() {
        assert_eq!(Move::ALPHABET.len(), Layer::ALL.len());
        for (mv, layer) in Move::ALPHABET.iter().zip(Layer::ALL) {
            assert_eq!(mv.layer(), layer);
            assert!(!mv.is_half());
            assert!(!mv.is_prime());
        }
    }
}
