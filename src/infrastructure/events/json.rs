//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::ScanStarted { root } => {
                serde_json::json!({
                    "event": "scan_start",
                    "command": "run",
                    "root": root.display().to_string(),
                })
            }

            RunEvent::KindScanned { kind, count } => {
                serde_json::json!({
                    "event": "scan_kind",
                    "command": "run",
                    "kind": kind,
                    "count": count,
                })
            }

            RunEvent::ScanCompleted { total } => {
                serde_json::json!({
                    "event": "scan",
                    "command": "run",
                    "total": total,
                })
            }

            RunEvent::CatalogEmpty => {
                serde_json::json!({
                    "event": "catalog_empty",
                    "command": "run",
                })
            }

            RunEvent::ContinuousStarted { min, max } => {
                serde_json::json!({
                    "event": "continuous_start",
                    "command": "run",
                    "min_interval_ms": min.as_millis() as u64,
                    "max_interval_ms": max.as_millis() as u64,
                })
            }

            RunEvent::ListSelected { requested, matched } => {
                serde_json::json!({
                    "event": "list_selected",
                    "command": "run",
                    "requested": requested,
                    "matched": matched,
                })
            }

            RunEvent::NoMatches { requested } => {
                serde_json::json!({
                    "event": "no_matches",
                    "command": "run",
                    "requested": requested,
                })
            }

            RunEvent::DeployStarted {
                number,
                artifact,
                command,
                dry_run,
                started_at,
            } => {
                serde_json::json!({
                    "event": "deploy",
                    "command": "run",
                    "number": number,
                    "artifact": artifact,
                    "command_line": command,
                    "dry_run": dry_run,
                    "started_at": started_at,
                })
            }

            RunEvent::DeployFinished {
                number,
                artifact,
                outcome,
            } => {
                serde_json::json!({
                    "event": "outcome",
                    "command": "run",
                    "number": number,
                    "artifact": artifact,
                    "success": outcome.success,
                    "exit_code": outcome.exit_code,
                    "output": outcome.output,
                    "finished_at": outcome.finished_at,
                })
            }

            RunEvent::NextScheduled { delay } => {
                serde_json::json!({
                    "event": "next_scheduled",
                    "command": "run",
                    "delay_ms": delay.as_millis() as u64,
                })
            }
        };

        self.write_event(json);
    }
}
