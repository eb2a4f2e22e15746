pub mod money;

pub use money::{format_money, format_money_with, LocaleFormatter, MoneyFormatter, PlainFormatter};

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Respect NO_COLOR, CLICOLOR and CLICOLOR_FORCE on top of `self`.
    pub fn from_env(self) -> Self {
        let mut mode = self;

        // per no-color.org
        if env::var("NO_COLOR").is_ok() {
            mode = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                mode = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                mode = ColorMode::Always;
            }
        }

        mode
    }
}

/// How good or bad a highlighted value is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Negative,
}

pub trait Painter {
    fn tone(&self, text: &str, tone: Tone) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredPainter;

impl ColoredPainter {
    pub fn new(mode: ColorMode) -> Self {
        colored::control::set_override(mode.should_use_color());
        Self
    }
}

impl Painter for ColoredPainter {
    fn tone(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Positive => text.green().to_string(),
            Tone::Caution => text.yellow().to_string(),
            Tone::Negative => text.red().to_string(),
        }
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

pub struct PlainPainter;

impl Painter for PlainPainter {
    fn tone(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a painter for the given mode
pub fn painter_for(mode: ColorMode) -> Box<dyn Painter> {
    if mode.should_use_color() {
        Box::new(ColoredPainter::new(mode))
    } else {
        Box::new(PlainPainter)
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_painter_is_identity() {
        let painter = PlainPainter;
        assert_eq!(painter.tone("risk", Tone::Negative), "risk");
        assert_eq!(painter.header("Meeting"), "Meeting");
    }

    #[test]
    fn test_never_mode_gives_plain_output() {
        let painter = painter_for(ColorMode::Never);
        assert_eq!(painter.bold("x"), "x");
    }
}
