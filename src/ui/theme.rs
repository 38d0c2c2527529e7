use crossterm::style::Color;

/// Design tokens for the Randeploy console UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const SCAN: &str = "🔍";
    pub const DEPLOY: &str = "🚀";
    pub const CONTINUOUS: &str = "⟳";
    pub const LIST: &str = "📋";
    pub const WAIT: &str = "⏳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const SCAN: &str = "[SCAN]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const CONTINUOUS: &str = "[~]";
    pub const LIST: &str = "[LIST]";
    pub const WAIT: &str = "[WAIT]";
}

pub mod borders {
    pub const HEAVY: &str = "━";
    pub const LIGHT: &str = "─";
}

pub mod borders_ascii {
    pub const HEAVY: &str = "=";
    pub const LIGHT: &str = "-";
}

/// Width of the rules drawn around deployment banners
pub const RULE_WIDTH: usize = 40;

/// Horizontal rule for banners
pub fn rule(heavy: bool, supports_unicode: bool) -> String {
    let piece = match (heavy, supports_unicode) {
        (true, true) => borders::HEAVY,
        (false, true) => borders::LIGHT,
        (true, false) => borders_ascii::HEAVY,
        (false, false) => borders_ascii::LIGHT,
    };
    piece.repeat(RULE_WIDTH)
}
