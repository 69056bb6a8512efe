//! Terminal output formatting
//!
//! Display utilities for solve reports, walkthroughs, and the cube net.

pub mod describe;
pub mod display;

pub use describe::describe;
pub use display::{print_cube, print_solution, print_walkthrough};
