//! Free-port discovery.

use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use crate::process::SupervisorError;

const PROBE_TIMEOUT: Duration = Duration::from_millis(200);

/// Probe ports sequentially from `starting_from` and return the first
/// `count` free ones, ascending.
///
/// A port counts as free when a TCP connect to localhost fails, i.e.
/// nothing is listening. Another process can still claim the port between
/// the probe and the spawned server's bind; that race is acceptable for
/// local test orchestration.
pub fn find_free_ports(count: usize, starting_from: u16) -> Result<Vec<u16>, SupervisorError> {
    let mut ports = Vec::with_capacity(count);
    let mut port = starting_from;

    while ports.len() < count {
        if !is_listening(port) {
            ports.push(port);
        }
        port = match port.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    if ports.len() < count {
        return Err(SupervisorError::PortExhaustion {
            count,
            starting_from,
        });
    }
    Ok(ports)
}

fn is_listening(port: u16) -> bool {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
}
