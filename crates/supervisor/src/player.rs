//! External player seat.
//!
//! A helper bot process (the random player) occupies a seat by doing its
//! own socket I/O. The supervisor only owns its lifecycle, so the seat's
//! transport methods carry nothing: sends are no-ops and the external
//! process never surfaces server state to us.

use std::process::Command;

use tablut_adapter::client::GameTransport;
use tablut_adapter::protocol::{MovePayload, ProtocolError, StateUpdate};
use tablut_types::Color;

use crate::config::SupervisorConfig;
use crate::process::{ProcessHandle, SupervisorError};

/// Subprocess-backed seat.
pub struct ExternalPlayer {
    handle: ProcessHandle,
    color: Color,
}

impl ExternalPlayer {
    /// Launch the helper bot for one seat.
    pub fn launch(
        config: &SupervisorConfig,
        color: Color,
        host: &str,
        port: u16,
    ) -> Result<Self, SupervisorError> {
        let mut command = Command::new("java");
        command
            .arg("-jar")
            .arg(&config.random_player_path)
            .arg(color.as_str())
            .arg(host)
            .arg(port.to_string());

        println!(
            "[Supervisor] launching {} player on {host}:{port}",
            color.as_str()
        );
        let handle = ProcessHandle::spawn(command)?;
        Ok(Self { handle, color })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pid(&self) -> u32 {
        self.handle.id()
    }
}

impl GameTransport for ExternalPlayer {
    fn send_name(&mut self, _name: &str) -> Result<(), ProtocolError> {
        // The external process performs its own handshake.
        Ok(())
    }

    fn send_move(&mut self, _payload: &MovePayload) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn receive_state(&mut self) -> Result<StateUpdate, ProtocolError> {
        Err(ProtocolError::Detached)
    }

    fn close(&mut self) -> Result<(), ProtocolError> {
        self.handle.terminate();
        Ok(())
    }
}
