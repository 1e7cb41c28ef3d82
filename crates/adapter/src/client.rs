//! Client module - transport seats for a game session
//!
//! [`GameTransport`] is the capability set a session needs from its seat:
//! handshake, outgoing moves, incoming states, close. [`DirectClient`] owns
//! one TCP connection and does the real protocol I/O. The supervisor crate
//! provides a second implementation backed by an external player process
//! that performs its own I/O, so its send/receive methods carry nothing.

use std::io;
use std::net::{Shutdown, TcpStream};

use tablut_core::BoardConfig;
use tablut_types::Color;

use crate::frame::{read_frame, write_frame};
use crate::protocol::{decode_state, MovePayload, ProtocolError, StateUpdate};

/// The capability set of one player seat.
pub trait GameTransport {
    /// Send the handshake name frame. Must be called exactly once, before
    /// any state exchange.
    fn send_name(&mut self, name: &str) -> Result<(), ProtocolError>;

    /// Send one move frame.
    fn send_move(&mut self, payload: &MovePayload) -> Result<(), ProtocolError>;

    /// Block until the next state frame arrives and decode it.
    fn receive_state(&mut self) -> Result<StateUpdate, ProtocolError>;

    /// Release the seat. Called exactly once, on session exit or fatal
    /// error.
    fn close(&mut self) -> Result<(), ProtocolError>;
}

/// Socket-backed seat talking directly to the server.
pub struct DirectClient {
    stream: TcpStream,
    color: Color,
    board_config: BoardConfig,
}

impl DirectClient {
    /// Connect to the server port for `color`'s seat.
    pub fn connect(
        host: &str,
        port: u16,
        color: Color,
        board_config: BoardConfig,
    ) -> io::Result<Self> {
        let stream = TcpStream::connect((host, port))?;
        stream.set_nodelay(true).ok();
        Ok(Self {
            stream,
            color,
            board_config,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl GameTransport for DirectClient {
    fn send_name(&mut self, name: &str) -> Result<(), ProtocolError> {
        write_frame(&mut self.stream, name.as_bytes())?;
        Ok(())
    }

    fn send_move(&mut self, payload: &MovePayload) -> Result<(), ProtocolError> {
        let encoded = serde_json::to_vec(payload)?;
        write_frame(&mut self.stream, &encoded)?;
        Ok(())
    }

    fn receive_state(&mut self) -> Result<StateUpdate, ProtocolError> {
        let payload = read_frame(&mut self.stream)?;
        decode_state(&payload, &self.board_config)
    }

    fn close(&mut self) -> Result<(), ProtocolError> {
        // Best-effort shutdown; the peer may already be gone.
        let _ = self.stream.shutdown(Shutdown::Both);
        Ok(())
    }
}
