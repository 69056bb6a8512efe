//! Color remapping
//!
//! A fixed bijective substitution between the public color alphabet and
//! the internal orientation alphabet. The search strategy keys its
//! tables on the internal form so it can assume one canonical
//! face/letter binding regardless of how callers label colors.
//!
//! Characters outside the six-letter alphabet (such as the `X`
//! placeholder emitted by color extraction when a sticker is unknown)
//! pass through unchanged in both directions.

/// Map one public color code to the internal alphabet
#[inline]
#[must_use]
pub const fn to_internal_char(c: char) -> char {
    match c {
        'W' => 'W',
        'Y' => 'Y',
        'B' => 'R',
        'R' => 'G',
        'G' => 'O',
        'O' => 'B',
        other => other,
    }
}

/// Map one internal color code back to the public alphabet
///
/// Exact inverse of [`to_internal_char`].
#[inline]
#[must_use]
pub const fn from_internal_char(c: char) -> char {
    match c {
        'W' => 'W',
        'Y' => 'Y',
        'B' => 'O',
        'O' => 'G',
        'G' => 'R',
        'R' => 'B',
        other => other,
    }
}

/// Substitute an entire state string into the internal alphabet
#[must_use]
pub fn to_internal(colors: &str) -> String {
    colors.chars().map(to_internal_char).collect()
}

/// Substitute an entire state string back to the public alphabet
#[must_use]
pub fn from_internal(colors: &str) -> String {
    colors.chars().map(from_internal_char).collect()
}
