use chrono::{DateTime, Local};
use randeploy::{ArtifactDescriptor, DeployOutcome};

use crate::ui::blocks::banner::DeploymentBanner;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a deployment banner shows besides the artifact itself
#[derive(Debug, Clone, Copy)]
pub struct BannerDetails<'a> {
    pub number: usize,
    pub command: &'a str,
    pub dry_run: bool,
    pub started_at: DateTime<Local>,
    pub verbose: bool,
}

pub fn render_deploy_started(
    artifact: &ArtifactDescriptor,
    details: &BannerDetails<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut banner = DeploymentBanner::new(details.number);
    banner.add("Type", artifact.kind().metadata_type());
    banner.add("Name", artifact.name());
    banner.add("Path", artifact.path().display().to_string());
    if details.verbose {
        if let Some(meta) = artifact.meta_path() {
            banner.add("Meta", meta.display().to_string());
        }
    }
    banner.add("Time", details.started_at.format(TIME_FORMAT).to_string());

    let mut out = banner.render(supports_color, supports_unicode);
    out.push('\n');

    if details.dry_run {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Scan.colored(supports_color, supports_unicode),
            ColoredText::warning("Running in DRY RUN mode (validation only)").render(supports_color)
        ));
    }

    out.push_str(&format!(
        "{} {} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim("Command:").render(supports_color),
        details.command
    ));
    out.push_str(&ColoredText::dim(theme::rule(false, supports_unicode)).render(supports_color));
    out.push('\n');
    out
}

/// One-line result, the only deployment output in quiet mode
pub fn render_outcome_line(
    number: usize,
    artifact: &ArtifactDescriptor,
    outcome: &DeployOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, text) = if outcome.success {
        (
            Icon::Success,
            ColoredText::success(format!("Deployment #{} successful", number)),
        )
    } else {
        (
            Icon::Error,
            ColoredText::error(format!("Deployment #{} failed", number)),
        )
    };

    format!(
        "{} {}: {} {}\n",
        icon.colored(supports_color, supports_unicode),
        text.bold().render(supports_color),
        artifact.kind().metadata_type(),
        artifact.name()
    )
}

pub fn render_deploy_finished(
    number: usize,
    artifact: &ArtifactDescriptor,
    outcome: &DeployOutcome,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !outcome.output.is_empty() {
        out.push_str(&outcome.output);
        out.push_str("\n\n");
    }

    out.push_str(&render_outcome_line(
        number,
        artifact,
        outcome,
        supports_color,
        supports_unicode,
    ));

    if verbose {
        let code = match outcome.exit_code {
            Some(code) => code.to_string(),
            None => "none".to_string(),
        };
        out.push_str(&format!(
            "   {} {}\n",
            ColoredText::dim("Exit code:").render(supports_color),
            code
        ));
        out.push_str(&format!(
            "   {} {}\n",
            ColoredText::dim("Finished:").render(supports_color),
            outcome.finished_at.format(TIME_FORMAT)
        ));
    }

    out.push('\n');
    out
}
