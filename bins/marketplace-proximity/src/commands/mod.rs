//! CLI command implementations

pub mod annotate;
pub mod distance;
pub mod extract;

use marketplace_core::{Error, Result, ResultExt};
use std::io::Read;
use std::path::Path;

/// Read a JSON input file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(Error::from)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read {}", path.display()))
}
