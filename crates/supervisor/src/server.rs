//! Supervised Tablut server instance.

use std::process::Command;

use crate::config::SupervisorConfig;
use crate::ports::find_free_ports;
use crate::process::{spawn_with_readiness, ProcessHandle, SupervisorError};

/// Line the server prints once both seat sockets are about to listen.
pub const READINESS_MARKER: &str = "Waiting for connections...";

/// A running server with its two seat ports.
pub struct TablutServer {
    handle: ProcessHandle,
    white_port: u16,
    black_port: u16,
}

impl TablutServer {
    /// Find two free ports from `config.base_port` and launch the server on
    /// them, returning once it reports readiness.
    pub fn start(config: &SupervisorConfig) -> Result<Self, SupervisorError> {
        let ports = find_free_ports(2, config.base_port)?;
        let (white_port, black_port) = (ports[0], ports[1]);

        let mut command = Command::new("java");
        command
            .arg("-jar")
            .arg(&config.server_path)
            .arg("-wp")
            .arg(white_port.to_string())
            .arg("-bp")
            .arg(black_port.to_string());

        println!(
            "[Supervisor] starting server {} (white {white_port}, black {black_port})",
            config.server_path.display()
        );
        let handle = spawn_with_readiness(
            command,
            READINESS_MARKER,
            config.readiness_timeout,
            config.startup_grace,
        )?;

        Ok(Self {
            handle,
            white_port,
            black_port,
        })
    }

    pub fn white_port(&self) -> u16 {
        self.white_port
    }

    pub fn black_port(&self) -> u16 {
        self.black_port
    }

    /// Block until the server process exits on its own (it does so once a
    /// game finishes).
    pub fn wait(&mut self) -> Result<std::process::ExitStatus, SupervisorError> {
        self.handle.wait()
    }

    /// Stop the server process. Also happens on drop.
    pub fn stop(&mut self) {
        println!("[Supervisor] stopping server (pid {})", self.handle.id());
        self.handle.terminate();
    }
}
