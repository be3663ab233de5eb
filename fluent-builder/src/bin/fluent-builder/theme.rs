//! Colors and glyphs of the CLI.

use clap::builder::styling::{AnsiColor, Styles};
use colored::Color;
use colored::control::ShouldColorize;
use once_cell::sync::Lazy;

pub const ARROW: &str = "→";
pub const CHECK: &str = "✓";
pub const CROSS: &str = "✗";
pub const FILE: &str = "📄";

/// Help section titles.
pub const HEADING: Color = Color::Cyan;
/// Command lines in help examples.
pub const COMMAND: Color = Color::Magenta;

/// Whether the environment and terminal accept color, probed once per run.
pub static COLOR_SUPPORT: Lazy<bool> = Lazy::new(|| ShouldColorize::from_env().should_colorize());

/// What a message line reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
    Detail,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Failure => Color::Red,
            Self::Warning => Color::Yellow,
            Self::Info => Color::Blue,
            Self::Detail => Color::BrightBlack,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => CHECK,
            Self::Failure => CROSS,
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Detail => ARROW,
        }
    }
}

pub fn help_styles() -> Styles {
    Styles::styled()
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().bold())
}
