use std::fmt::Write;

use colored::{Color, Colorize};

use crate::commands::{expand, init, states};
use crate::theme::{ARROW, COMMAND, HEADING};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "init",
            groups: init::EXAMPLES,
        },
        CommandExample {
            name: "expand",
            groups: expand::EXAMPLES,
        },
        CommandExample {
            name: "states",
            groups: states::EXAMPLES,
        },
    ]
}

fn paint(text: &str, color: Color, bold: bool, use_color: bool) -> String {
    match (use_color, bold) {
        (false, _) => text.to_string(),
        (true, false) => text.color(color).to_string(),
        (true, true) => text.color(color).bold().to_string(),
    }
}

/// `Examples:` section appended to a subcommand's long help.
pub fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}", paint("Examples:", HEADING, true, use_color));
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            buffer.push('\n');
        }
        let _ = writeln!(buffer, "  {}", paint(group.title, HEADING, false, use_color));
        for command in group.commands {
            let _ = writeln!(
                buffer,
                "    {} {}",
                paint(ARROW, COMMAND, false, use_color),
                paint(command, COMMAND, false, use_color)
            );
        }
    }
    buffer
}

/// Environment and usage tip appended to the top-level long help.
pub fn render_appendix(use_color: bool) -> String {
    format!(
        "{}\n  {}  Log filter, overrides the level chosen by -v\n\n{} Use 'fluent-builder <command> --help' to view examples for each command.\n",
        paint("Environment Variables:", HEADING, true, use_color),
        paint("RUST_LOG", COMMAND, true, use_color),
        paint("Tip:", HEADING, true, use_color),
    )
}
