//! Protocol module - JSON message types for the Tablut server
//!
//! Incoming state broadcasts carry `{"board": [[label;9];9], "turn": s}`
//! with uppercase cell labels. Outgoing move frames carry
//! `{"from":"E5","to":"E7"}` in algebraic notation. A `turn` value outside
//! {"white","black"} is the server's end-of-game signal, not a protocol
//! violation; [`decode_state`] surfaces it verbatim (lower-cased) and leaves
//! the interpretation to the session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tablut_core::{BoardConfig, NumericBoard};
use tablut_types::{CellKind, Move, BOARD_SIZE};

use crate::frame::FrameError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
    #[error("malformed frame: payload is not valid UTF-8: {0}")]
    MalformedFrame(#[from] std::str::Utf8Error),
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("external seat does not carry protocol traffic")]
    Detached,
}

/// Cell label as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireCell {
    #[serde(rename = "EMPTY")]
    Empty,
    #[serde(rename = "WHITE")]
    White,
    #[serde(rename = "BLACK")]
    Black,
    #[serde(rename = "KING")]
    King,
    #[serde(rename = "THRONE")]
    Throne,
}

impl From<WireCell> for CellKind {
    fn from(value: WireCell) -> Self {
        match value {
            WireCell::Empty => CellKind::Empty,
            WireCell::White => CellKind::White,
            WireCell::Black => CellKind::Black,
            WireCell::King => CellKind::King,
            WireCell::Throne => CellKind::Throne,
        }
    }
}

impl From<CellKind> for WireCell {
    fn from(value: CellKind) -> Self {
        match value {
            CellKind::Empty => WireCell::Empty,
            CellKind::White => WireCell::White,
            CellKind::Black => WireCell::Black,
            CellKind::King => WireCell::King,
            CellKind::Throne => WireCell::Throne,
        }
    }
}

/// Server state broadcast. The 9x9 dimensions are enforced by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMessage {
    pub board: [[WireCell; BOARD_SIZE]; BOARD_SIZE],
    pub turn: String,
}

/// Outgoing move record, algebraic notation on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    pub from: String,
    pub to: String,
}

impl MovePayload {
    /// Convert a matrix-coordinate move at the serialization boundary.
    ///
    /// No legality check happens here; that is the server's (and the
    /// oracle's) responsibility.
    pub fn new(mv: Move) -> Self {
        Self {
            from: mv.from.to_algebraic(),
            to: mv.to.to_algebraic(),
        }
    }
}

/// Decoded server frame: numeric board plus the verbatim turn label.
#[derive(Debug, Clone)]
pub struct StateUpdate {
    pub board: NumericBoard,
    pub turn: String,
}

/// Decode one server frame payload into the numeric representation.
pub fn decode_state(payload: &[u8], config: &BoardConfig) -> Result<StateUpdate, ProtocolError> {
    let text = std::str::from_utf8(payload)?;
    let msg: StateMessage = serde_json::from_str(text)?;

    let mut cells = [[CellKind::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, wire_row) in cells.iter_mut().zip(msg.board.iter()) {
        for (cell, &wire) in row.iter_mut().zip(wire_row.iter()) {
            *cell = wire.into();
        }
    }

    Ok(StateUpdate {
        board: config.numeric_board(&cells),
        turn: msg.turn.to_lowercase(),
    })
}
