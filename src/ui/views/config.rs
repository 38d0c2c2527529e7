use randeploy::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let mut block = WarningBlock::new(format!("Unknown config key '{}' in {}", w.key, location));
        if let Some(suggestion) = &w.suggestion {
            block.add_line(format!("Did you mean '{}'?", suggestion));
        }
        out.push_str(&block.render(supports_color, supports_unicode));
    }
    out
}
