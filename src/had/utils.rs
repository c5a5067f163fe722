//! File loading and debug output helpers

use std::fmt::Write;
use std::fs;
use std::path::Path;
use log::{debug, info};
use super::types::error::Result;

/// Reads an entire file into an owned buffer.
pub fn load_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    info!("Loading {}", path.display());
    let data = fs::read(path)?;
    debug!("Loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Formats bytes as upper-case hex pairs, each followed by a space.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3 + 1);
    for byte in data {
        let _ = write!(out, "{:02X} ", byte);
    }
    out.push('\n');
    out
}

/// Writes [`hex_dump`] output for `data` to `path`.
pub fn write_hex_dump(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, hex_dump(data))?;
    info!("Wrote hex dump of {} bytes to {}", data.len(), path.display());
    Ok(())
}
