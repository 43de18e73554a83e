use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::{config::Config, projection::GoalProjectionStatus};

#[derive(Debug, Clone)]
pub struct UiStyle {
    pub header_prefix: &'static str,
    pub horizontal: char,
    pub use_color: bool,
    pub plain_mode: bool,
}

impl UiStyle {
    /// Colors only when stdout is a terminal, the config allows it, and
    /// `NO_COLOR` is unset.
    pub fn detect(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::new(
            config.plain_output,
            stdout_tty && config.ui_color_enabled && !no_color,
        )
    }

    pub fn new(plain_mode: bool, color: bool) -> Self {
        Self {
            header_prefix: if plain_mode { "> " } else { "⮞ " },
            horizontal: if plain_mode { '-' } else { '─' },
            use_color: color && !plain_mode,
            plain_mode,
        }
    }

    pub fn plain() -> Self {
        Self::new(true, false)
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(40))
    }

    pub fn header(&self, text: &str) -> String {
        let prefixed = format!("{}{}", self.header_prefix, text);
        if self.use_color {
            prefixed.color(Color::BrightBlue).bold().to_string()
        } else {
            prefixed
        }
    }

    pub fn emphasis(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn status(&self, status: GoalProjectionStatus, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let color = match status {
            GoalProjectionStatus::Completed => Color::Green,
            GoalProjectionStatus::AtRisk => Color::Red,
            GoalProjectionStatus::Active => Color::Cyan,
        };
        text.color(color).to_string()
    }
}
