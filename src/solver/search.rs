//! Bounded search strategy
//!
//! Iterative-deepening depth-first search over outer-face turns, the
//! only turns that keep centers in place. The search assumes the
//! canonical face/letter binding, so it refuses cubes whose centers
//! have left their standard faces rather than produce a solution
//! relative to the wrong orientation.
//!
//! States are keyed in the internal orientation alphabet. A small
//! endgame table of every state within two turns of solved, built once
//! per solve, lets each deepening iteration stop two plies early.
//! Exhausting the depth budget is a normal, typed failure.

use super::strategy::{SolveError, Strategy, StrategyOutcome};
use crate::core::{Cube, remap};
use crate::notation::{Move, MoveSequence, Primitive, Turn};
use rustc_hash::FxHashMap;

/// Plies covered by the endgame table
const ENDGAME_DEPTH: u8 = 2;

/// Outer faces, in pruning-rank order
const OUTER: [Primitive; 6] = [
    Primitive::Up,
    Primitive::Down,
    Primitive::Front,
    Primitive::Back,
    Primitive::Left,
    Primitive::Right,
];

/// Bounded iterative-deepening search over outer-face turns
pub struct SearchStrategy {
    max_depth: u8,
}

impl SearchStrategy {
    /// Default total depth budget, in face turns
    pub const DEFAULT_MAX_DEPTH: u8 = 8;

    /// Create a search bounded to `max_depth` total face turns
    #[must_use]
    pub const fn new(max_depth: u8) -> Self {
        Self { max_depth }
    }

    /// The configured depth budget
    #[must_use]
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

impl Strategy for SearchStrategy {
    fn solve(&self, cube: &Cube) -> Result<StrategyOutcome, SolveError> {
        if !cube.centers_standard() {
            return Err(SolveError::UnsupportedConfiguration(
                "centers are not on their standard faces".to_string(),
            ));
        }

        let table = endgame_table();
        let prefix_budget = self.max_depth.saturating_sub(ENDGAME_DEPTH);

        for depth in 0..=prefix_budget {
            let mut probe = cube.clone();
            let mut path = Vec::with_capacity(usize::from(self.max_depth));
            if dfs(&mut probe, &table, depth, self.max_depth, None, &mut path) {
                let moves: MoveSequence = path.into_iter().map(Move::from_turn).collect();
                return Ok(StrategyOutcome::Flat(moves));
            }
        }

        Err(SolveError::NoSolutionFound {
            max_depth: self.max_depth,
        })
    }
}

/// State key in the internal orientation alphabet
fn state_key(cube: &Cube) -> String {
    remap::to_internal(&cube.state())
}

/// All 18 outer turns (6 faces × 3 quarter-turn counts)
fn outer_turns() -> impl Iterator<Item = Turn> {
    OUTER
        .iter()
        .flat_map(|&face| (1..=3).map(move |q| Turn::new(face, q)))
}

/// Map every state within [`ENDGAME_DEPTH`] turns of solved to the
/// turns that finish it
fn endgame_table() -> FxHashMap<String, Vec<Turn>> {
    let mut table = FxHashMap::default();
    let solved = Cube::solved();
    table.insert(state_key(&solved), Vec::new());

    let mut frontier = vec![(solved, Vec::<Turn>::new())];
    for _ in 0..ENDGAME_DEPTH {
        let mut next_frontier = Vec::new();
        for (cube, path) in frontier {
            for turn in outer_turns() {
                let mut neighbor = cube.clone();
                neighbor.apply_turn(turn);
                let key = state_key(&neighbor);
                if table.contains_key(&key) {
                    continue;
                }
                let mut forward = path.clone();
                forward.push(turn);
                let back: Vec<Turn> = forward.iter().rev().map(|t| t.inverse()).collect();
                table.insert(key, back);
                next_frontier.push((neighbor, forward));
            }
        }
        frontier = next_frontier;
    }
    table
}

/// Never turn the same face twice in a row, and explore opposite-face
/// pairs in one fixed order only
fn skip_face(last: Option<Primitive>, face: Primitive) -> bool {
    let Some(prev) = last else {
        return false;
    };
    prev == face || (axis_partner(prev) == face && rank(face) < rank(prev))
}

const fn axis_partner(face: Primitive) -> Primitive {
    match face {
        Primitive::Up => Primitive::Down,
        Primitive::Down => Primitive::Up,
        Primitive::Front => Primitive::Back,
        Primitive::Back => Primitive::Front,
        Primitive::Left => Primitive::Right,
        Primitive::Right => Primitive::Left,
        // slices never enter the search
        other => other,
    }
}

fn rank(face: Primitive) -> usize {
    OUTER.iter().position(|&f| f == face).unwrap_or(usize::MAX)
}

fn dfs(
    cube: &mut Cube,
    table: &FxHashMap<String, Vec<Turn>>,
    depth_left: u8,
    limit: u8,
    last: Option<Primitive>,
    path: &mut Vec<Turn>,
) -> bool {
    if let Some(tail) = table.get(&state_key(cube)) {
        if path.len() + tail.len() <= usize::from(limit) {
            path.extend(tail.iter().copied());
            return true;
        }
    }
    if depth_left == 0 {
        return false;
    }

    for &face in &OUTER {
        if skip_face(last, face) {
            continue;
        }
        for quarters in 1..=3 {
            let turn = Turn::new(face, quarters);
            cube.apply_turn(turn);
            path.push(turn);
            if dfs(cube, table, depth_left - 1, limit, Some(face), path) {
                return true;
            }
            path.pop();
            cube.apply_turn(turn.inverse());
        }
    }
    false
}
