use std::path::Path;

use crate::platform::{dir_label, Identity, Platform};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    /// The host's usual look: `PS dir> `, `user@host dir % ` or `user@host:dir$ `.
    #[default]
    Native,
    /// Just `dir> `.
    Minimal,
}

pub fn render(style: PromptStyle, platform: Platform, identity: &Identity, cwd: &Path) -> String {
    match style {
        PromptStyle::Native => platform.prompt(identity, cwd),
        PromptStyle::Minimal => format!("{}> ", dir_label(cwd)),
    }
}

/// Startup banner lines, without styling. Minimal mode gets a single line.
pub fn banner(style: PromptStyle, platform: Platform, release: Option<&str>) -> Vec<String> {
    if style == PromptStyle::Minimal {
        return vec!["Minimal Terminal - Type commands or 'exit' to quit".to_string()];
    }

    let rule = "=".repeat(RULE_WIDTH);
    let running_on = match release {
        Some(release) => format!("Running on: {} {}", platform.name(), release),
        None => format!("Running on: {}", platform.name()),
    };

    vec![
        rule.clone(),
        "Cross-Platform Shell".to_string(),
        running_on,
        "Type 'help' for commands, 'exit' to quit".to_string(),
        rule,
    ]
}
