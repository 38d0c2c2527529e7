use std::path::Path;

use randeploy::ArtifactKind;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_scan_started(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Scan, "Scanning for deployable components...");
    header.add("Root", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_kind_scanned(kind: ArtifactKind, count: usize) -> String {
    format!("   Found {} {}\n", count, kind.label())
}

pub fn render_scan_completed(total: usize, supports_color: bool, supports_unicode: bool) -> String {
    let text = ColoredText::success(format!("Total: {} deployable components found", total))
        .render(supports_color);
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        text
    )
}

pub fn render_catalog_empty(supports_color: bool, supports_unicode: bool) -> String {
    let mut block = WarningBlock::new("No components found to deploy");
    block.add_line("Check [project] root and the enabled [kinds] in randeploy.toml");
    block.render(supports_color, supports_unicode)
}
