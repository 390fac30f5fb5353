//! Raw listing acquisition.
//!
//! Runs the upstream listing command (`jarvisctl list` by default) and
//! captures its stdout. Every failure is a [`SourceError`]; the status bar
//! must always get a record, so [`read_listing_or_empty`] is the one place
//! those errors become an empty listing.

use std::io::Read;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::config::SourceConfig;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to run listing command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listing command '{program}' exited with status {code}")]
    NonZero { program: String, code: i32 },

    #[error("failed to read listing from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Run the configured listing command and return its stdout.
pub fn run_listing(source: &SourceConfig) -> Result<String, SourceError> {
    let out = Command::new(&source.program)
        .args(&source.args)
        .output()
        .map_err(|e| SourceError::Spawn {
            program: source.program.clone(),
            source: e,
        })?;

    let code = out.status.code().unwrap_or(-1);
    if code != 0 {
        return Err(SourceError::NonZero {
            program: source.program.clone(),
            code,
        });
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Read a listing that was produced elsewhere (e.g. piped into `--stdin`).
pub fn read_listing_from<R: Read>(mut reader: R) -> Result<String, SourceError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(SourceError::Stdin)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Upstream failures read as an empty listing.
pub fn read_listing_or_empty(result: Result<String, SourceError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "listing unavailable; summarizing empty output");
            String::new()
        }
    }
}
