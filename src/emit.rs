//! Status-bar record serialization.
//!
//! The host parses exactly one compact JSON object per line with the keys
//! `text` and `tooltip`, in that order. `serde_json` escapes in a single
//! pass (`"` → `\"`, newline → `\n`, backslash and other control
//! characters included), so already-escaped text is never escaped twice.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::summary::Summary;

/// One status-bar record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub text: String,
    pub tooltip: String,
}

impl From<Summary> for StatusRecord {
    fn from(summary: Summary) -> Self {
        Self {
            text: summary.text(),
            tooltip: summary.tooltip,
        }
    }
}

impl StatusRecord {
    /// Compact JSON, without the trailing newline.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize status record")
    }

    /// Write the record as a single newline-terminated line and flush.
    pub fn write_line<W: Write>(&self, mut out: W) -> Result<()> {
        let json = self.to_json()?;
        writeln!(out, "{json}").context("failed to write status record")?;
        out.flush().context("failed to flush status record")
    }
}
