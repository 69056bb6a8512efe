//! Move descriptions
//!
//! Renders each move token as a short English instruction for a
//! walkthrough, phrased as the physical motion a person performs while
//! looking at the front face.

use crate::notation::{Layer, Move};

/// Describe one move as a walkthrough instruction
#[must_use]
pub fn describe(mv: Move) -> String {
    let prime = mv.is_prime();
    let text = match mv.layer() {
        Layer::Left => layer_turn("the left layer", prime, "up", "down"),
        Layer::LeftWide => layer_turn("the left two layers", prime, "up", "down"),
        Layer::Right => layer_turn("the right layer", prime, "down", "up"),
        Layer::RightWide => layer_turn("the right two layers", prime, "down", "up"),
        Layer::Up => layer_turn("the top layer", prime, "right", "left"),
        Layer::UpWide => layer_turn("the top two layers", prime, "right", "left"),
        Layer::Down => layer_turn("the bottom layer", prime, "left", "right"),
        Layer::DownWide => layer_turn("the bottom two layers", prime, "left", "right"),
        Layer::Front => layer_turn("the front layer", prime, "right", "left"),
        Layer::FrontWide => layer_turn("the front two layers", prime, "right", "left"),
        Layer::Back => layer_turn("the back layer", prime, "left", "right"),
        Layer::BackWide => layer_turn("the back two layers", prime, "left", "right"),
        Layer::Middle => layer_turn("the middle column", prime, "up", "down"),
        Layer::Equator => layer_turn("the middle row", prime, "left", "right"),
        Layer::Standing => layer_turn("the middle slice", prime, "right", "left"),
        Layer::RotateX => {
            format!("tilt the whole cube {}", if prime { "down" } else { "up" })
        }
        Layer::RotateY => {
            format!("turn the whole cube {}", if prime { "right" } else { "left" })
        }
        Layer::RotateZ => {
            format!("roll the whole cube {}", if prime { "right" } else { "left" })
        }
    };

    if mv.is_half() {
        format!("{text}, twice")
    } else {
        text
    }
}

fn layer_turn(subject: &str, prime: bool, prime_dir: &str, plain_dir: &str) -> String {
    let direction = if prime { prime_dir } else { plain_dir };
    format!("turn {subject} {direction}")
}
