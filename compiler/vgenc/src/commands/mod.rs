//! Command handlers for the `vgen` CLI.
//!
//! Shared file handling lives here; `generate` and `check` each implement one
//! mode of the driver.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::CliError;

mod check;
mod generate;

pub use check::{check_file, check_source};
pub use generate::{generate_file, generate_source};

/// Read a graph document; `-` reads stdin.
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        let path = PathBuf::from(path);
        match e.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path),
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path),
            _ => CliError::Read { path, source: e },
        }
    })
}

/// Write generated text to `path`.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
