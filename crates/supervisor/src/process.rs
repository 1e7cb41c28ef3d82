//! Process spawning with readiness synchronization.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("process did not print {marker:?} within {timeout:?}")]
    ReadinessTimeout { marker: String, timeout: Duration },
    #[error("no {count} free ports available from {starting_from}")]
    PortExhaustion { count: usize, starting_from: u16 },
}

/// Handle to a supervised child process.
///
/// Terminated (and reaped) on drop so a failed test run does not leave
/// stray servers behind.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
}

impl ProcessHandle {
    /// Spawn without waiting for any output.
    pub fn spawn(mut command: Command) -> Result<Self, SupervisorError> {
        let child = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(Self { child })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Block until the child exits on its own.
    pub fn wait(&mut self) -> Result<std::process::ExitStatus, SupervisorError> {
        Ok(self.child.wait()?)
    }

    /// Send the kill signal and reap the child. Safe to call more than
    /// once.
    pub fn terminate(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// Spawn `command` and block until `marker` appears on its stdout.
///
/// Stdout is read line-by-line on a thread; after the marker is observed
/// the caller sleeps `grace` to tolerate a listen socket that binds shortly
/// after the message is printed. The reader thread keeps draining stdout
/// for the life of the process so it can never block on a full pipe.
pub fn spawn_with_readiness(
    mut command: Command,
    marker: &str,
    timeout: Duration,
    grace: Duration,
) -> Result<ProcessHandle, SupervisorError> {
    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;
    let stdout = child.stdout.take().expect("stdout was piped");

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let reader = BufReader::new(stdout);
        for line in reader.lines() {
            match line {
                // Keep draining even after the receiver is gone.
                Ok(line) => {
                    let _ = tx.send(line);
                }
                Err(_) => break,
            }
        }
    });

    let deadline = Instant::now() + timeout;
    let mut handle = ProcessHandle { child };
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            handle.terminate();
            return Err(SupervisorError::ReadinessTimeout {
                marker: marker.to_string(),
                timeout,
            });
        }
        match rx.recv_timeout(remaining) {
            Ok(line) if line.contains(marker) => break,
            Ok(_) => continue,
            Err(_) => {
                // Channel closed (process exited) or deadline hit.
                handle.terminate();
                return Err(SupervisorError::ReadinessTimeout {
                    marker: marker.to_string(),
                    timeout,
                });
            }
        }
    }

    thread::sleep(grace);
    Ok(handle)
}
