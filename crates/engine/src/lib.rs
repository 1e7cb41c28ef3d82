//! Engine module - baseline move selection
//!
//! The production search algorithm is an external collaborator behind the
//! [`MoveOracle`] trait. This crate carries [`EngineConfig`], the tuning
//! parameters the CLI hands through verbatim to whatever oracle is plugged
//! in, and [`RandomEngine`], the helper random player: it proposes a
//! uniformly random rook-like move from one of its own pieces across empty
//! cells and leaves legality checking to the server, which is the
//! authoritative rules engine.

use std::time::Duration;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tablut_core::{GameSnapshot, MoveOracle, NumericBoard, OracleError, TERRAIN};
use tablut_types::{Color, Coord, Move, BOARD_SIZE};

/// Hard cap on candidate moves: at most 16 pieces with at most 16 rook
/// destinations each.
const MAX_MOVES: usize = 256;

/// Default search depth for the white seat.
pub const WHITE_DEFAULT_MAX_DEPTH: u32 = 23;

/// Default search depth for the black seat.
pub const BLACK_DEFAULT_MAX_DEPTH: u32 = 35;

/// Oracle tuning handed through from the CLI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Depth cap for tree-search oracles. The baseline engine ignores it.
    pub max_depth: u32,
    /// Exploration constant for tree-search oracles. The baseline engine
    /// ignores it.
    pub exploration: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: WHITE_DEFAULT_MAX_DEPTH,
            exploration: std::f64::consts::SQRT_2,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Per-seat defaults: black searches deeper by default.
    pub fn for_color(color: Color) -> Self {
        Self {
            max_depth: match color {
                Color::White => WHITE_DEFAULT_MAX_DEPTH,
                Color::Black => BLACK_DEFAULT_MAX_DEPTH,
            },
            ..Self::default()
        }
    }
}

/// Uniformly random rook-move oracle.
pub struct RandomEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Occupant delta of a cell: the numeric value minus the terrain bias,
    /// rounded back to the integral piece value (+2 white, +1 king,
    /// -2 black, 0 empty).
    fn occupant(board: &NumericBoard, row: usize, col: usize) -> i32 {
        (board[row][col] - TERRAIN[row][col]).round() as i32
    }

    fn owns(delta: i32, color: Color) -> bool {
        match color {
            Color::White => delta == 2 || delta == 1,
            Color::Black => delta == -2,
        }
    }

    /// All rook-like moves from `color`'s pieces over empty cells.
    ///
    /// Camp and throne restrictions are not modeled here; an illegal
    /// proposal is rejected by the server, never silently patched up.
    fn candidate_moves(board: &NumericBoard, color: Color) -> ArrayVec<Move, MAX_MOVES> {
        let mut moves = ArrayVec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !Self::owns(Self::occupant(board, row, col), color) {
                    continue;
                }
                let from = Coord::new(row, col).expect("loop bounds");
                for (dr, dc) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
                    let (mut r, mut c) = (row as i32 + dr, col as i32 + dc);
                    while (0..BOARD_SIZE as i32).contains(&r)
                        && (0..BOARD_SIZE as i32).contains(&c)
                        && Self::occupant(board, r as usize, c as usize) == 0
                    {
                        let to = Coord::new(r as usize, c as usize).expect("loop bounds");
                        moves.push(Move::new(from, to));
                        r += dr;
                        c += dc;
                    }
                }
            }
        }
        moves
    }
}

impl MoveOracle for RandomEngine {
    fn select_move(
        &mut self,
        snapshot: GameSnapshot,
        color: Color,
        _budget: Duration,
    ) -> Result<Move, OracleError> {
        let moves = Self::candidate_moves(&snapshot.board, color);
        if moves.is_empty() {
            return Err(OracleError::Failed(format!(
                "no candidate moves for {}",
                color.as_str()
            )));
        }
        let index = self.rng.gen_range(0..moves.len());
        Ok(moves[index])
    }
}
