use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Scan,
    Deploy,
    Continuous,
    List,
    Wait,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Scan) => theme::icons::SCAN,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Continuous) => theme::icons::CONTINUOUS,
            (true, Icon::List) => theme::icons::LIST,
            (true, Icon::Wait) => theme::icons::WAIT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Scan) => theme::icons_ascii::SCAN,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Continuous) => theme::icons_ascii::CONTINUOUS,
            (false, Icon::List) => theme::icons_ascii::LIST,
            (false, Icon::Wait) => theme::icons_ascii::WAIT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Wait => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Scan | Icon::Deploy | Icon::Continuous | Icon::List => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
