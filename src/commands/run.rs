//! Run command entry point

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randeploy::application::{RunMode, RunSettings};
use randeploy::config::{ConfigSource, LoadedConfig};
use randeploy::{
    DirectoryScanner, JsonEventSink, RunController, RunEventSink, SfCliBackend, ThreadSleeper,
};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::primitives::text::ColoredText;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::config::render_config_warnings;
use crate::ui::views::run::render_run_summary;

fn mode_name(mode: &RunMode) -> &'static str {
    match mode {
        RunMode::Once => "once",
        RunMode::Continuous => "continuous",
        RunMode::Components(_) => "components",
    }
}

fn describe_source(source: &ConfigSource) -> String {
    match source.path() {
        Some(path) => format!("Config: {}", path.display()),
        None => "Config: built-in defaults".to_string(),
    }
}

pub fn cmd_run(cli: &Cli) -> Result<()> {
    let started = Instant::now();
    let mode = cli.run_mode()?;

    let cwd = std::env::current_dir()?;
    let loaded = LoadedConfig::discover(cli.config.as_deref(), &cwd)?;
    let mut config = loaded.config;
    cli.apply_overrides(&mut config)?;

    let ui = UiContext::new(cli.json, cli.color, &config);

    if ui.json {
        emit_event(&StartEvent::new("run", mode_name(&mode)))?;
    } else {
        if !loaded.warnings.is_empty() {
            eprint!(
                "{}",
                render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
            );
        }
        if ui.is_verbose() {
            println!(
                "{}",
                ColoredText::dim(describe_source(&loaded.source)).render(ui.color)
            );
        }
    }

    let settings = RunSettings::from_config(&config)?;
    let sink: Arc<dyn RunEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let mut controller = RunController::new(
        DirectoryScanner::new(config.project.root.clone()),
        SfCliBackend::from_config(&config.tool),
        StdRng::from_entropy(),
        ThreadSleeper,
        settings,
    )
    .with_events(sink);

    let summary = controller.run(&mode)?;

    if ui.json {
        let elapsed = started.elapsed().as_millis() as u64;
        emit_event(&CompleteEvent::new("run", summary).with_duration(elapsed))?;
    } else if summary.deployments > 1 && !ui.is_quiet() {
        print!("{}", render_run_summary(&summary, ui.color, ui.unicode));
    }

    Ok(())
}
