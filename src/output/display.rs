//! Display functions for solve results
//!
//! Renders the staged solution report, the step-by-step walkthrough,
//! and the unfolded cube net.

use super::describe::describe;
use crate::core::{Color, Cube, Face};
use crate::solver::{Solution, Stage};
use colored::{ColoredString, Colorize};

/// Print the staged solution report
///
/// Five labeled stage lines (name, step count, notation) followed by
/// the full operation and its exact reverse.
pub fn print_solution(solution: &Solution) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Cube solved".bright_green().bold());
    println!("{}", "─".repeat(60).cyan());

    for stage in Stage::ALL {
        let segment = solution.segment(stage).merged();
        println!(
            "{:>5} ({} steps): {}",
            stage.label().bright_cyan(),
            segment.len(),
            render_notation(&segment.to_string())
        );
    }

    let full = solution.full();
    let reversed = solution.reversed();
    println!(
        "{:>5} ({} steps): {}",
        "FULL".bright_cyan().bold(),
        full.len(),
        render_notation(&full.to_string())
    );
    println!(
        "{:>5} ({} steps): {}",
        "REV".bright_cyan().bold(),
        reversed.len(),
        render_notation(&reversed.to_string())
    );
}

/// Print the numbered step-by-step walkthrough of the full operation
pub fn print_walkthrough(solution: &Solution) {
    let full = solution.full();
    if full.is_empty() {
        println!("\nNothing to do: the cube is already solved.");
        return;
    }

    println!("\n{}", "Walkthrough:".bright_cyan().bold());
    for (i, &mv) in full.moves().iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            mv.to_string().bright_yellow(),
            describe(mv)
        );
    }
}

/// Print the cube as its unfolded net
///
/// UP above FRONT; LEFT, FRONT, RIGHT, BACK left to right; DOWN below.
pub fn print_cube(cube: &Cube) {
    println!();
    for row in 0..3 {
        println!("        {}", face_row(cube, Face::Up, row));
    }
    for row in 0..3 {
        println!(
            "{} {} {} {}",
            face_row(cube, Face::Left, row),
            face_row(cube, Face::Front, row),
            face_row(cube, Face::Right, row),
            face_row(cube, Face::Back, row),
        );
    }
    for row in 0..3 {
        println!("        {}", face_row(cube, Face::Down, row));
    }
    println!();
}

fn face_row(cube: &Cube, face: Face, row: usize) -> String {
    (0..3)
        .map(|col| colorize_sticker(cube.sticker(face, row, col)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_notation(notation: &str) -> ColoredString {
    if notation.is_empty() {
        "none".dimmed()
    } else {
        notation.bright_yellow()
    }
}

fn colorize_sticker(color: Color) -> ColoredString {
    let code = color.code().to_string();
    match color {
        Color::Red => code.bright_red(),
        Color::Blue => code.bright_blue(),
        Color::Green => code.bright_green(),
        Color::Yellow => code.bright_yellow(),
        Color::White => code.bright_white(),
        Color::Orange => code.truecolor(255, 165, 0),
    }
}
