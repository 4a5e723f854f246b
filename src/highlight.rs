use inksac::prelude::*;

/// Colors for the shell's own messages. Output of delegated commands is never
/// restyled.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_notice(&self, notice: &str) -> String {
        if !self.enabled() {
            return notice.to_string();
        }

        let notice_style = Style::builder().foreground(Color::Yellow).build();
        notice.style(notice_style).to_string()
    }

    pub fn highlight_title(&self, title: &str) -> String {
        if !self.enabled() {
            return title.to_string();
        }

        let title_style = Style::builder().foreground(Color::Cyan).bold().build();
        title.style(title_style).to_string()
    }
}
