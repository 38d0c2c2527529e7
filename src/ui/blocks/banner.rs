use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Ruled banner printed before each deployment
#[derive(Debug, Clone)]
pub struct DeploymentBanner {
    number: usize,
    rows: Vec<(String, String)>,
}

impl DeploymentBanner {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rule = ColoredText::dim(theme::rule(true, supports_unicode)).render(supports_color);
        let title = ColoredText::info(format!("DEPLOYMENT #{}", self.number))
            .bold()
            .render(supports_color);

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            Icon::Deploy.colored(supports_color, supports_unicode),
            title
        ));
        out.push_str(&rule);
        out.push('\n');

        let width = self.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0) + 1;
        for (label, value) in &self.rows {
            let label = format!("{:<width$}", format!("{}:", label), width = width);
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::dim(label).render(supports_color),
                value
            ));
        }
        out
    }
}
