//! Supervisor module - local orchestration of server and player processes
//!
//! Everything needed to stand up a full game on one machine for testing:
//! free-port discovery, spawning the external server and helper player
//! binaries with readiness synchronization on their stdout, and clean
//! termination. None of this is production process management; the port
//! probe in particular is a best-effort heuristic.
//!
//! # Environment Variables
//!
//! Paths and ports come from [`SupervisorConfig`], overridable via:
//!
//! - `TABLUT_HOME`: project directory the default jar paths resolve under
//! - `TABLUT_SERVER_PATH`: server executable (default `<home>/tablut/server.jar`)
//! - `TABLUT_RANDOM_PLAYER_PATH`: helper bot executable
//!   (default `<home>/tablut/random_player.jar`)
//! - `TABLUT_BASE_PORT`: first port probed for free seats (default 5800)

pub mod config;
pub mod player;
pub mod ports;
pub mod process;
pub mod server;

pub use config::SupervisorConfig;
pub use player::ExternalPlayer;
pub use ports::find_free_ports;
pub use process::{spawn_with_readiness, ProcessHandle, SupervisorError};
pub use server::{TablutServer, READINESS_MARKER};
