//! Adapter module - Tablut server protocol over TCP
//!
//! This crate talks to the Tablut game server: length-prefixed framing, the
//! JSON state/move messages, the transport seat abstraction, and the
//! turn-driven session state machine.
//!
//! # Protocol Overview
//!
//! The wire protocol is asymmetric, and both directions must be preserved
//! exactly for interoperability with the existing server:
//!
//! 1. **Connection**: the client connects to its seat port (white 5800,
//!    black 5801 by default).
//! 2. **Handshake**: the client sends its player name as raw UTF-8 bytes in
//!    one 4-byte-length-prefixed frame, before anything else.
//! 3. **State broadcasts**: the server pushes
//!    `{"board": [[label;9];9], "turn": "..."}` frames with a 2-byte
//!    big-endian length prefix, optionally preceded by any number of `0x00`
//!    keepalive bytes.
//! 4. **Moves**: when it owns the turn, the client sends
//!    `{"from":"E5","to":"E7"}` (algebraic notation) with a 4-byte prefix.
//! 5. **Game end**: a `turn` value that is not `white`/`black` carries the
//!    result (e.g. a win or draw label) and terminates the session.
//!
//! # Example Frame Flow
//!
//! ```text
//! Client -> Server: [00 00 00 05] "WHITE"
//! Server -> Client: [00 00] [0x01 0x9a] {"board":[["EMPTY",...],...],"turn":"white"}
//! Client -> Server: [00 00 00 19] {"from":"E3","to":"F3"}
//! Server -> Client: [0x01 0x9a] {"board":...,"turn":"whitewin"}
//! ```
//!
//! See [`frame`] for the codec, [`protocol`] for message structures,
//! [`client`] for the transport seats and [`session`] for the state machine.

pub mod client;
pub mod frame;
pub mod protocol;
pub mod session;

pub use client::{DirectClient, GameTransport};
pub use frame::{read_frame, write_frame, FrameError};
pub use protocol::{decode_state, MovePayload, ProtocolError, StateMessage, StateUpdate, WireCell};
pub use session::{Session, SessionOutcome, SessionPhase, SessionState};
