//! Rubik's Cube Solver - CLI
//!
//! Solves, scrambles, and manipulates 3×3×3 cube states from the
//! command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use cube_solver::{
    commands::{
        FALLBACK_STATE, ScrambleConfig, SolveConfig, apply_notation, assemble_cube,
        scramble_new, solve_state,
    },
    core::Cube,
    output::{print_cube, print_solution, print_walkthrough},
};

#[derive(Parser)]
#[command(
    name = "cube_solver",
    about = "Rubik's cube solver with a staged solving pipeline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: search (default) or cfop
    #[arg(short, long, global = true, default_value = "search")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a cube state
    Solve {
        /// 54-character state string (FRONT,LEFT,RIGHT,UP,DOWN,BACK)
        state: Option<String>,

        /// Per-face 9-character readings; missing faces fall back to
        /// built-in demo data
        #[arg(long)]
        front: Option<String>,
        #[arg(long)]
        left: Option<String>,
        #[arg(long)]
        right: Option<String>,
        #[arg(long)]
        up: Option<String>,
        #[arg(long)]
        down: Option<String>,
        #[arg(long)]
        back: Option<String>,

        /// Depth budget for the search strategy
        #[arg(long)]
        max_depth: Option<u8>,

        /// Print a numbered step-by-step walkthrough
        #[arg(short, long)]
        walkthrough: bool,
    },

    /// Scramble a fresh cube and print the notation used
    Scramble {
        /// Number of moves to draw
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,

        /// Draw only outer-face turns, keeping centers standard
        #[arg(long)]
        outer: bool,
    },

    /// Apply notation to a state and print the result
    Apply {
        /// 54-character state string
        state: String,
        /// Move notation, expanded or compact
        notation: String,
    },

    /// Render a state as its unfolded net
    Show {
        /// 54-character state string
        state: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            state,
            front,
            left,
            right,
            up,
            down,
            back,
            max_depth,
            walkthrough,
        } => {
            let state = match state {
                Some(s) => s,
                None => {
                    let readings = [front, left, right, up, down, back];
                    assemble_cube(&readings, FALLBACK_STATE)?.state()
                }
            };
            run_solve(&state, &cli.strategy, max_depth, walkthrough)
        }
        Commands::Scramble { count, seed, outer } => {
            run_scramble(count, seed, outer);
            Ok(())
        }
        Commands::Apply { state, notation } => run_apply(&state, &notation),
        Commands::Show { state } => {
            let cube = Cube::from_state(&state)?;
            print_cube(&cube);
            Ok(())
        }
    }
}

fn run_solve(
    state: &str,
    strategy: &str,
    max_depth: Option<u8>,
    walkthrough: bool,
) -> Result<()> {
    let config = SolveConfig {
        state: state.to_string(),
        strategy: strategy.to_string(),
        max_depth,
    };
    let report = solve_state(&config).map_err(|e| anyhow::anyhow!(e))?;

    println!("\nInitial state:");
    print_cube(&report.initial);

    if report.already_solved {
        println!("{}", "The cube is already solved.".bright_green().bold());
        return Ok(());
    }

    print_solution(&report.solution);
    if walkthrough {
        print_walkthrough(&report.solution);
    }

    println!("\nFinal state:");
    print_cube(&report.result);
    Ok(())
}

fn run_scramble(count: usize, seed: Option<u64>, outer: bool) {
    let report = scramble_new(&ScrambleConfig {
        count,
        seed,
        outer_only: outer,
    });

    println!("\nSeed:     {}", report.seed);
    println!("Scramble: {}", report.notation.bright_yellow());
    println!("State:    {}", report.cube.state());
    print_cube(&report.cube);
}

fn run_apply(state: &str, notation: &str) -> Result<()> {
    let report = apply_notation(state, notation).map_err(|e| anyhow::anyhow!(e))?;

    println!("\nState: {}", report.cube.state());
    print_cube(&report.cube);
    if report.solved {
        println!("{}", "Solved.".bright_green().bold());
    }
    Ok(())
}
