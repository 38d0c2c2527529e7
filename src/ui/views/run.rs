use std::time::Duration;

use randeploy::RunSummary;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn format_seconds(d: Duration) -> String {
    if d.subsec_millis() == 0 {
        format!("{}s", d.as_secs())
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// Whole seconds, rounded half up
fn rounded_seconds(d: Duration) -> u128 {
    (d.as_millis() + 500) / 1000
}

pub fn render_continuous_started(
    min: Duration,
    max: Duration,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Continuous, "Starting continuous deployment mode...");
    header.add("Min interval", format_seconds(min));
    header.add("Max interval", format_seconds(max));
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out
}

pub fn render_next_scheduled(delay: Duration, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Next deployment in {} seconds...\n\n",
        Icon::Wait.colored(supports_color, supports_unicode),
        rounded_seconds(delay)
    )
}

pub fn render_list_selected(matched: usize, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Deploying {} specific component(s)...\n\n",
        Icon::List.colored(supports_color, supports_unicode),
        matched
    )
}

pub fn render_no_matches(requested: &[String], supports_color: bool, supports_unicode: bool) -> String {
    WarningBlock::new(format!(
        "No matching components found for: {}",
        requested.join(", ")
    ))
    .render(supports_color, supports_unicode)
}

pub fn render_run_summary(summary: &RunSummary, supports_color: bool, supports_unicode: bool) -> String {
    let text = format!(
        "{} deployment(s): {} succeeded, {} failed",
        summary.deployments, summary.succeeded, summary.failed
    );
    let (icon, text) = if summary.is_success() {
        (Icon::Success, ColoredText::success(text))
    } else {
        (Icon::Warning, ColoredText::warning(text))
    };
    format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color)
    )
}
