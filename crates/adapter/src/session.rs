//! Session module - the turn-driven state machine
//!
//! Receives state broadcasts, tracks whose turn it is, invokes the move
//! oracle when this client owns the turn, and detects game end. A turn
//! label that is not a color is the server's way of reporting the result
//! (win/draw); the session models it as the terminal `Ended` phase rather
//! than an error.

use std::time::Duration;

use anyhow::{Context, Result};

use tablut_core::{empty_board, GameSnapshot, MoveOracle, NumericBoard};
use tablut_types::Color;

use crate::client::GameTransport;
use crate::protocol::MovePayload;

/// Subtracted from the configured per-move timeout so the outbound write and
/// network latency still fit inside the server's clock.
pub const BUDGET_SAFETY_MARGIN: Duration = Duration::from_secs(5);

/// Smallest budget ever handed to the oracle.
pub const MIN_BUDGET: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingState,
    Deciding,
    Ended,
}

/// Mutable session snapshot, updated in place on every received frame.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub board: NumericBoard,
    pub turn: Option<Color>,
    pub phase: SessionPhase,
}

impl SessionState {
    fn new() -> Self {
        Self {
            board: empty_board(),
            turn: None,
            phase: SessionPhase::AwaitingState,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Final session report.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The non-turn label the server reported, e.g. "whitewin" or "draw".
    pub result: String,
    /// Last known board, kept for post-mortem.
    pub board: NumericBoard,
}

/// One game session over one transport seat.
pub struct Session<T, O> {
    transport: T,
    oracle: O,
    color: Color,
    budget: Duration,
    state: SessionState,
    result: Option<String>,
}

impl<T: GameTransport, O: MoveOracle> Session<T, O> {
    /// Build a session around an already-connected transport.
    ///
    /// `timeout` is the server's per-move clock; the oracle gets that minus
    /// [`BUDGET_SAFETY_MARGIN`], floored at [`MIN_BUDGET`].
    pub fn new(transport: T, oracle: O, color: Color, timeout: Duration) -> Self {
        let budget = timeout.saturating_sub(BUDGET_SAFETY_MARGIN).max(MIN_BUDGET);
        Self {
            transport,
            oracle,
            color,
            budget,
            state: SessionState::new(),
            result: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Handshake, then run the state machine to completion.
    ///
    /// The transport is released exactly once, on both the success and the
    /// error path. Errors carry the failing phase in their context chain.
    pub fn run(&mut self, name: &str) -> Result<SessionOutcome> {
        let outcome = self.drive(name);
        let _ = self.transport.close();
        outcome
    }

    fn drive(&mut self, name: &str) -> Result<SessionOutcome> {
        self.transport
            .send_name(name)
            .context("handshake: sending player name")?;

        loop {
            match self.state.phase {
                SessionPhase::AwaitingState => self.step_awaiting()?,
                SessionPhase::Deciding => self.step_deciding()?,
                SessionPhase::Ended => {
                    let result = self.result.clone().unwrap_or_default();
                    println!("[Client] game ended with result \"{result}\"");
                    return Ok(SessionOutcome {
                        result,
                        board: self.state.board,
                    });
                }
            }
        }
    }

    fn step_awaiting(&mut self) -> Result<()> {
        let update = self
            .transport
            .receive_state()
            .context("read: receiving server state")?;
        self.state.board = update.board;

        match Color::from_str(&update.turn) {
            Some(turn) => {
                self.state.turn = Some(turn);
                if turn == self.color {
                    self.state.phase = SessionPhase::Deciding;
                }
                // Otherwise keep waiting: the opponent's move will trigger
                // the next broadcast.
            }
            None => {
                self.result = Some(update.turn);
                self.state.phase = SessionPhase::Ended;
            }
        }
        Ok(())
    }

    fn step_deciding(&mut self) -> Result<()> {
        let snapshot = GameSnapshot::new(self.state.board, self.color);
        let mv = self
            .oracle
            .select_move(snapshot, self.color, self.budget)
            .context("decide: selecting a move")?;

        let payload = MovePayload::new(mv);
        println!("[Client] playing {} -> {}", payload.from, payload.to);
        self.transport
            .send_move(&payload)
            .context("send: submitting move")?;
        self.state.phase = SessionPhase::AwaitingState;
        Ok(())
    }
}
