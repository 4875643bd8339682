// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use super::InputReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<InputReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }

    /// Queue one input's report.
    pub fn push(&mut self, report: InputReport) {
        self.reports.push(report);
    }

    /// Write every queued report as one pretty-printed array.
    pub fn finish(&mut self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.reports).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
