//! Length-delimited framing for the Tablut wire protocol.
//!
//! Incoming frames carry a 2-byte big-endian length prefix, optionally
//! preceded by any number of 0x00 keepalive bytes which are skipped.
//! Outgoing frames carry a 4-byte big-endian length prefix. The asymmetry is
//! part of the existing protocol and must not be "fixed".

use std::io::{Read, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("connection closed by peer mid-frame")]
    ConnectionClosed,
    #[error("frame too large: {len} bytes")]
    TooLarge { len: usize },
}

/// Read one server frame: skip keepalive padding, read the 2-byte length,
/// then exactly that many payload bytes.
///
/// Blocks until a full frame is available; the caller layers timeouts, if
/// any, above this.
///
/// Note a consequence of the padding convention: the high length byte must
/// be nonzero, so frames shorter than 256 bytes cannot be distinguished
/// from padding. The server's state payloads are always well past that.
pub fn read_frame<R: Read>(r: &mut R) -> Result<Vec<u8>, FrameError> {
    let hi = read_nonzero_byte(r)?;
    let mut lo = [0u8; 1];
    read_exact_or_closed(r, &mut lo)?;
    let len = u16::from_be_bytes([hi, lo[0]]) as usize;

    let mut payload = vec![0u8; len];
    read_exact_or_closed(r, &mut payload)?;
    Ok(payload)
}

/// Write one client frame: 4-byte big-endian length prefix plus payload,
/// flushed so the peer never observes a partial frame.
pub fn write_frame<W: Write>(w: &mut W, payload: &[u8]) -> Result<(), FrameError> {
    let len = u32::try_from(payload.len()).map_err(|_| FrameError::TooLarge {
        len: payload.len(),
    })?;
    w.write_all(&len.to_be_bytes())?;
    w.write_all(payload)?;
    w.flush()?;
    Ok(())
}

/// Skip 0x00 keepalive bytes and return the first nonzero byte.
fn read_nonzero_byte<R: Read>(r: &mut R) -> Result<u8, FrameError> {
    let mut byte = [0u8; 1];
    loop {
        read_exact_or_closed(r, &mut byte)?;
        if byte[0] != 0 {
            return Ok(byte[0]);
        }
    }
}

fn read_exact_or_closed<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<(), FrameError> {
    let mut off = 0usize;
    while off < buf.len() {
        match r.read(&mut buf[off..])? {
            0 => return Err(FrameError::ConnectionClosed),
            n => off += n,
        }
    }
    Ok(())
}
