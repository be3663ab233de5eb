mod commands;
mod context;
mod examples;
mod output;
mod theme;

use anyhow::Result;
use clap::{ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand};

use commands::{
    expand::{ExpandArgs, handle_expand},
    init::{InitArgs, handle_init},
    states::{StatesArgs, handle_states},
};
use examples::{command_examples, render_appendix, render_examples};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::COLOR_SUPPORT;

#[derive(Parser)]
#[command(name = "fluent-builder")]
#[command(version)]
#[command(
    about = "Inspect and expand FluentBuilder type-state builders",
    long_about = r#"Companion CLI for #[derive(FluentBuilder)] that provides:

• A listing of every builder state, what it holds and where each setter leads
• Formatted review copies of each generated builder
• Per-record diagnostics that point at the offending declaration"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write fluent-builder.toml in the current project
    Init(InitArgs),

    /// Write a review copy of every record's generated builder
    Expand(ExpandArgs),

    /// Show the state lattice of each record
    States(StatesArgs),
}

fn build_cli_command() -> Command {
    let use_color = *COLOR_SUPPORT;
    let mut command = Cli::command()
        .styles(theme::help_styles())
        .color(if use_color { ColorChoice::Auto } else { ColorChoice::Never })
        .after_long_help(render_appendix(use_color));
    for example in command_examples() {
        command = command.mut_subcommand(example.name, |subcommand| {
            subcommand.after_long_help(render_examples(example.groups, use_color))
        });
    }
    command
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = match build_cli_command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = execute(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });
    log::debug!("running with {:?}", output.options);

    match cli.command {
        Commands::Init(args) => handle_init(args, &output),
        Commands::Expand(args) => handle_expand(args, &output),
        Commands::States(args) => handle_states(args, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn test_global_flags_follow_the_subcommand() {
        let matches = build_cli_command()
            .try_get_matches_from(["fluent-builder", "states", "--output", "json", "-q"])
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::States(_)));
    }
}
