//! Scramble command

use crate::core::Cube;
use crate::notation::{Move, Primitive};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for scrambling a fresh cube
pub struct ScrambleConfig {
    /// Number of moves to draw
    pub count: usize,
    /// Seed for the random source; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Restrict the alphabet to outer faces, keeping centers standard
    pub outer_only: bool,
}

/// Result of a scramble, with everything needed to replay it
pub struct ScrambleReport {
    /// The seed actually used
    pub seed: u64,
    /// The applied move sequence in canonical notation
    pub notation: String,
    /// The scrambled cube
    pub cube: Cube,
}

/// Scramble a solved cube
#[must_use]
pub fn scramble_new(config: &ScrambleConfig) -> ScrambleReport {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut cube = Cube::solved();
    let sequence = if config.outer_only {
        let alphabet: Vec<Move> = [
            Primitive::Up,
            Primitive::Down,
            Primitive::Front,
            Primitive::Back,
            Primitive::Left,
            Primitive::Right,
        ]
        .iter()
        .map(|&p| Move::quarter(p.layer()))
        .collect();
        cube.scramble_with(config.count, &alphabet, &mut rng)
    } else {
        cube.scramble(config.count, &mut rng)
    };

    ScrambleReport {
        seed,
        notation: sequence.to_string(),
        cube,
    }
}
