//! Rubik's Cube Solver
//!
//! Models a 3×3×3 twisty puzzle: a cube state with closed-form
//! rotation primitives, a move-notation compiler that expands wide,
//! slice, and whole-cube moves into primitive turns, and a staged
//! solving pipeline over pluggable strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use cube_solver::core::Cube;
//! use cube_solver::solver::{Solver, StrategyType};
//!
//! let mut cube = Cube::solved();
//! cube.apply_notation("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//!
//! let solver = Solver::new(StrategyType::from_name("search"));
//! let solution = solver.solve(&mut cube).unwrap();
//! assert!(cube.is_solved());
//! println!("{}", solution.full());
//! ```

// Core domain types
pub mod core;

// Move-notation compiler
pub mod notation;

// Solving strategies and pipeline
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
