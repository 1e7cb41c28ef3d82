//! Local arena runner.
//!
//! Stands up a full game on one machine: a supervised server plus a helper
//! player process on each seat. Useful for exercising protocol changes end
//! to end without a remote server.

use anyhow::{Context, Result};

use tablut::adapter::GameTransport;
use tablut::supervisor::{ExternalPlayer, SupervisorConfig, TablutServer};
use tablut::types::Color;

fn main() -> Result<()> {
    let config = SupervisorConfig::from_env();
    let mut server = TablutServer::start(&config).context("starting supervised server")?;

    let mut white =
        ExternalPlayer::launch(&config, Color::White, "localhost", server.white_port())
            .context("launching white player")?;
    let mut black =
        ExternalPlayer::launch(&config, Color::Black, "localhost", server.black_port())
            .context("launching black player")?;
    println!(
        "[Arena] players attached (white pid {}, black pid {})",
        white.pid(),
        black.pid()
    );

    let status = server.wait().context("waiting for the game to finish")?;
    println!("[Arena] server exited: {}", status);

    let _ = white.close();
    let _ = black.close();
    Ok(())
}
