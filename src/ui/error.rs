use randeploy::RandeployError;

use crate::ui::json::events::ErrorEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Stable identifier used in JSON error events
fn error_code(err: &RandeployError) -> &'static str {
    match err {
        RandeployError::EmptyCatalog => "EMPTY_CATALOG",
        RandeployError::MissingArgument { .. } => "MISSING_ARGUMENT",
        RandeployError::InvalidInterval { .. } => "INVALID_INTERVAL",
        RandeployError::InvalidConfig { .. } => "INVALID_CONFIG",
        RandeployError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
        RandeployError::UnknownTestLevel { .. } => "UNKNOWN_TEST_LEVEL",
        RandeployError::ScanFailed { .. } => "SCAN_FAILED",
        RandeployError::Io(_) => "IO_ERROR",
    }
}

fn error_help(err: &RandeployError) -> Option<&'static str> {
    match err {
        RandeployError::MissingArgument { .. } => Some(
            "Provide component names after --components, e.g. --components \"AccountHandler,ParkService\"",
        ),
        RandeployError::InvalidInterval { .. } => {
            Some("Make --min-interval (or [continuous] min_interval_ms) no larger than the max")
        }
        RandeployError::ConfigNotFound { .. } => Some("Check the path passed to --config"),
        RandeployError::EmptyCatalog => {
            Some("Check [project] root and the enabled [kinds] in randeploy.toml")
        }
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("Error: {}", err))
            .bold()
            .render(supports_color)
    );

    if let Some(help) = err.downcast_ref::<RandeployError>().and_then(error_help) {
        out.push_str(&format!(
            "   {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            help
        ));
    }

    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let (code, help) = match err.downcast_ref::<RandeployError>() {
            Some(e) => (error_code(e), error_help(e)),
            None => ("ERROR", None),
        };
        let mut event = ErrorEvent::new("run", code, err.to_string());
        if let Some(help) = help {
            event = event.with_help(help);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_includes_help() {
        let err = anyhow::Error::new(RandeployError::MissingArgument {
            flag: "--components".to_string(),
        });

        let rendered = format_error_with(&err, false, false);
        assert!(rendered.starts_with("[FAIL] Error: missing value for '--components'\n"));
        assert!(rendered.contains("[>] Provide component names after --components"));
    }

    #[test]
    fn foreign_errors_render_message_only() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(
            format_error_with(&err, false, false),
            "[FAIL] Error: something else\n"
        );
    }

    #[test]
    fn codes_are_distinct_per_variant() {
        assert_eq!(error_code(&RandeployError::EmptyCatalog), "EMPTY_CATALOG");
        assert_eq!(
            error_code(&RandeployError::UnknownTestLevel {
                value: "x".to_string()
            }),
            "UNKNOWN_TEST_LEVEL"
        );
    }
}
