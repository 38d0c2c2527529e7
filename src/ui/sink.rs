//! Console Event Sink
//!
//! Renders run events as human-readable terminal output.

use randeploy::config::Verbosity;
use randeploy::{RunEvent, RunEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{
    render_deploy_finished, render_deploy_started, render_outcome_line, BannerDetails,
};
use crate::ui::views::run::{
    render_continuous_started, render_list_selected, render_next_scheduled, render_no_matches,
};
use crate::ui::views::scan::{
    render_catalog_empty, render_kind_scanned, render_scan_completed, render_scan_started,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Event sink that prints views to stdout (failures to stderr)
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// Text for one event, or `None` when the verbosity hides it
    pub fn render(&self, event: &RunEvent) -> Option<(Stream, String)> {
        let color = self.ui.color;
        let unicode = self.ui.unicode;
        let quiet = self.ui.verbosity == Verbosity::Quiet;

        let rendered = match event {
            RunEvent::ScanStarted { root } if !quiet => {
                (Stream::Stdout, render_scan_started(root, color, unicode))
            }
            RunEvent::KindScanned { kind, count } if !quiet => {
                (Stream::Stdout, render_kind_scanned(*kind, *count))
            }
            RunEvent::ScanCompleted { total } if !quiet => (
                Stream::Stdout,
                format!("\n{}\n", render_scan_completed(*total, color, unicode).trim_end()),
            ),
            RunEvent::CatalogEmpty => (Stream::Stdout, render_catalog_empty(color, unicode)),
            RunEvent::ContinuousStarted { min, max } if !quiet => (
                Stream::Stdout,
                render_continuous_started(*min, *max, color, unicode),
            ),
            RunEvent::ListSelected { matched, .. } if !quiet => {
                (Stream::Stdout, render_list_selected(*matched, color, unicode))
            }
            RunEvent::NoMatches { requested } => {
                (Stream::Stdout, render_no_matches(requested, color, unicode))
            }
            RunEvent::DeployStarted {
                number,
                artifact,
                command,
                dry_run,
                started_at,
            } if !quiet => {
                let details = BannerDetails {
                    number: *number,
                    command,
                    dry_run: *dry_run,
                    started_at: *started_at,
                    verbose: self.ui.is_verbose(),
                };
                (
                    Stream::Stdout,
                    render_deploy_started(artifact, &details, color, unicode),
                )
            }
            RunEvent::DeployFinished {
                number,
                artifact,
                outcome,
            } => {
                let stream = if outcome.success {
                    Stream::Stdout
                } else {
                    Stream::Stderr
                };
                let text = if quiet {
                    render_outcome_line(*number, artifact, outcome, color, unicode)
                } else {
                    render_deploy_finished(
                        *number,
                        artifact,
                        outcome,
                        self.ui.is_verbose(),
                        color,
                        unicode,
                    )
                };
                (stream, text)
            }
            RunEvent::NextScheduled { delay } if !quiet => {
                (Stream::Stdout, render_next_scheduled(*delay, color, unicode))
            }
            _ => return None,
        };

        Some(rendered)
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, text)) => print!("{}", text),
            Some((Stream::Stderr, text)) => eprint!("{}", text),
            None => {}
        }
    }
}
