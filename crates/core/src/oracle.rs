//! Move-oracle contract.
//!
//! The search/decision algorithm lives behind this trait so the session loop
//! can drive any engine that selects a move from a state snapshot and a time
//! budget. Implementations check the wall-clock deadline themselves; the
//! session loop does not preempt a running search.

use std::time::Duration;

use thiserror::Error;

use tablut_types::{Color, Move};

use crate::snapshot::GameSnapshot;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("move selection failed: {0}")]
    Failed(String),
    #[error("time budget exhausted before a move was selected")]
    BudgetExceeded,
}

pub trait MoveOracle {
    /// Select a move for `color` from `snapshot` within `budget`.
    ///
    /// An error here is fatal to the session: the client never fabricates a
    /// fallback move.
    fn select_move(
        &mut self,
        snapshot: GameSnapshot,
        color: Color,
        budget: Duration,
    ) -> Result<Move, OracleError>;
}
