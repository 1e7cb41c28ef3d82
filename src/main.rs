//! Tablut client runner (default binary).
//!
//! Connects to one seat of a Tablut server, performs the name handshake and
//! plays the session with the baseline engine until the server reports a
//! result. Unrecoverable protocol or connection errors exit nonzero after
//! printing the failing phase and the last known state.

use std::time::Duration;

use anyhow::{anyhow, Result};

use tablut::adapter::{DirectClient, Session};
use tablut::core::BoardConfig;
use tablut::engine::{EngineConfig, RandomEngine};
use tablut::types::Color;

#[derive(Debug, Clone, PartialEq)]
struct ClientArgs {
    color: Color,
    ip: String,
    timeout_secs: u64,
    name: String,
    engine: EngineConfig,
}

fn parse_args(args: &[String]) -> Result<ClientArgs> {
    let mut color: Option<Color> = None;
    let mut ip = String::from("localhost");
    let mut timeout_secs: u64 = 50;
    let mut name = String::from("tablut-client");
    let mut max_depth: Option<u32> = None;
    let mut exploration: Option<f64> = None;
    let mut seed: Option<u64> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--player" | "-p" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --player"))?;
                color = Some(
                    Color::from_str(v).ok_or_else(|| anyhow!("invalid --player value: {}", v))?,
                );
            }
            "--ip" | "-i" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --ip"))?;
                ip = v.clone();
            }
            "--timeout" | "-t" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --timeout"))?;
                timeout_secs = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --timeout value: {}", v))?;
            }
            "--max-depth" | "-d" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-depth"))?;
                max_depth = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --max-depth value: {}", v))?,
                );
            }
            "--c" | "-c" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --c"))?;
                exploration =
                    Some(v.parse().map_err(|_| anyhow!("invalid --c value: {}", v))?);
            }
            "--name" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --name"))?;
                name = v.clone();
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    let color = color.ok_or_else(|| anyhow!("--player is required (white or black)"))?;

    // Per-seat depth default unless the flag overrides it.
    let mut engine = EngineConfig::for_color(color);
    if let Some(depth) = max_depth {
        engine.max_depth = depth;
    }
    if let Some(c) = exploration {
        engine.exploration = c;
    }
    engine.seed = seed;

    Ok(ClientArgs {
        color,
        ip,
        timeout_secs,
        name,
        engine,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    run(args)
}

fn run(args: ClientArgs) -> Result<()> {
    let port = args.color.default_port();
    println!(
        "[Client] connecting to {}:{} as {}",
        args.ip,
        port,
        args.color.as_str()
    );
    let client = DirectClient::connect(&args.ip, port, args.color, BoardConfig::default())
        .map_err(|e| anyhow!("connect {}:{} failed: {}", args.ip, port, e))?;

    let oracle = RandomEngine::new(args.engine);
    let mut session = Session::new(
        client,
        oracle,
        args.color,
        Duration::from_secs(args.timeout_secs),
    );

    match session.run(&args.name) {
        Ok(outcome) => {
            println!("[Client] result: {}", outcome.result);
            Ok(())
        }
        Err(err) => {
            let state = session.state();
            eprintln!("[Client] session failed: {:#}", err);
            eprintln!(
                "[Client] last known turn: {}",
                state.turn.map(|c| c.as_str()).unwrap_or("none")
            );
            for row in &state.board {
                eprintln!("[Client]   {:?}", row);
            }
            Err(err)
        }
    }
}
