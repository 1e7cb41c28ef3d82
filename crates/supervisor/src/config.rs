//! Supervisor configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tablut_types::DEFAULT_WHITE_PORT;

/// Paths, ports and timing for locally supervised processes.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    pub server_path: PathBuf,
    pub random_player_path: PathBuf,
    /// First port probed when looking for free seats.
    pub base_port: u16,
    /// How long to wait for a spawned server's readiness marker.
    pub readiness_timeout: Duration,
    /// Settle time after the marker, for late-binding listen sockets.
    pub startup_grace: Duration,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self::with_home(PathBuf::from("."))
    }
}

impl SupervisorConfig {
    fn with_home(home: PathBuf) -> Self {
        let tablut_dir = home.join("tablut");
        Self {
            server_path: tablut_dir.join("server.jar"),
            random_player_path: tablut_dir.join("random_player.jar"),
            base_port: DEFAULT_WHITE_PORT,
            readiness_timeout: Duration::from_secs(30),
            startup_grace: Duration::from_secs(1),
        }
    }

    /// Create from environment variables, falling back to the defaults.
    pub fn from_env() -> Self {
        let home = env::var("TABLUT_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Self::with_home(home);

        if let Ok(path) = env::var("TABLUT_SERVER_PATH") {
            config.server_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("TABLUT_RANDOM_PLAYER_PATH") {
            config.random_player_path = PathBuf::from(path);
        }
        if let Some(port) = env::var("TABLUT_BASE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.base_port = port;
        }
        config
    }
}
