use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color as TableColor, Table, presets};
use serde::Serialize;

use crate::theme::{COLOR_SUPPORT, HEADING, Tone};

/// Output format options for CLI commands
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// Compact single-line output
    Compact,
}

#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// A command result that renders in every output format.
pub trait TableDisplay {
    fn to_table(&self, output: &OutputManager) -> Table;
    fn to_compact(&self) -> String;
}

pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    pub fn is_json(&self) -> bool {
        self.options.output_format == OutputFormat::Json
    }

    fn plain(&self) -> bool {
        self.options.no_color || !*COLOR_SUPPORT
    }

    /// Stdout carries only the document in JSON mode.
    fn chatty(&self) -> bool {
        !self.options.quiet && !self.is_json()
    }

    /// Print a command result in the configured format.
    pub fn display<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay,
    {
        if self.options.quiet {
            return Ok(());
        }
        match self.options.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Table => println!("{}", data.to_table(self)),
            OutputFormat::Compact => println!("{}", data.to_compact()),
        }
        Ok(())
    }

    fn message(&self, tone: Tone, text: &str) -> String {
        if self.plain() {
            format!("{} {text}", tone.icon())
        } else {
            format!("{} {}", tone.icon().color(tone.color()), text.color(tone.color()))
        }
    }

    pub fn success(&self, text: &str) {
        if self.chatty() {
            println!("{}", self.message(Tone::Success, text));
        }
    }

    pub fn info(&self, text: &str) {
        if self.chatty() {
            println!("{}", self.message(Tone::Info, text));
        }
    }

    pub fn warning(&self, text: &str) {
        if !self.options.quiet {
            eprintln!("{}", self.message(Tone::Warning, text));
        }
    }

    /// Errors are printed even in quiet mode.
    pub fn error(&self, text: &str) {
        eprintln!("{}", self.message(Tone::Failure, text));
    }

    pub fn verbose(&self, text: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.message(Tone::Detail, text));
        }
    }

    pub fn heading(&self, text: &str) {
        if !self.chatty() {
            return;
        }
        if self.plain() {
            println!("{text}\n{}", "=".repeat(text.chars().count()));
        } else {
            println!("{}", text.color(HEADING).bold());
        }
    }

    /// An empty table with a bold header row.
    pub fn table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(if self.plain() {
            presets::ASCII_FULL
        } else {
            presets::UTF8_FULL_CONDENSED
        });
        let plain = self.plain();
        table.set_header(headers.iter().map(|header| {
            let cell = Cell::new(header).add_attribute(Attribute::Bold);
            if plain { cell } else { cell.fg(TableColor::Cyan) }
        }));
        table
    }
}
