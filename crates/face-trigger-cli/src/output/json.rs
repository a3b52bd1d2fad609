//! JSON output adapter.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};
use face_trigger_core::TriggerEvent;

/// JSON Lines output adapter for trigger events.
pub struct EventOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl EventOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a new JSON output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Writes one event as a single JSON line.
    pub fn write(&self, event: &TriggerEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;
        self.write_line(&json)
    }

    /// Writes a batch of events as a JSON array.
    pub fn write_array(&self, events: &[TriggerEvent], pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(events)?
        } else {
            serde_json::to_string(events)?
        };
        self.write_line(&json)
    }

    /// Flushes the underlying writer.
    #[allow(clippy::significant_drop_tightening)]
    pub fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush().context("Failed to flush output")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn write_line(&self, json: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}").context("Failed to write output")?;
        Ok(())
    }
}
