//! Core cube domain types
//!
//! The color/face model, the cube state with its rotation primitives,
//! and the color remapping layer. All types here are pure and have
//! clear algebraic properties; the only external dependency is the
//! injected random source used for scrambling.

mod color;
mod cube;
mod face;
pub mod remap;

pub use color::Color;
pub use cube::{Cube, SOLVED_STATE, ValidationError};
pub use face::Face;
