//! Core board representation and move-selection contract.
//!
//! This crate owns the numeric board the move oracle consumes and the
//! conversion from the server's symbolic cell labels into that
//! representation. The conversion is parameterized: both the terrain
//! template and the per-label piece values are explicit configuration
//! (`BoardConfig`), so one conversion path covers protocol variants that
//! differ only in their constants.
//!
//! It also defines the [`MoveOracle`] trait, the narrow seam between the
//! protocol/session layer and whatever search algorithm sits behind it.

pub mod board;
pub mod oracle;
pub mod snapshot;

pub use board::{empty_board, BoardConfig, NumericBoard, PieceValues, TERRAIN};
pub use oracle::{MoveOracle, OracleError};
pub use snapshot::GameSnapshot;
