use anyhow::{Context, Result};
use clap::Args;

use crate::context::{FluentBuilderConfig, ProjectContext};
use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Initialize",
    commands: &[
        "fluent-builder init               # Write fluent-builder.toml next to Cargo.toml",
        "fluent-builder init --force       # Overwrite an existing configuration",
    ],
}];

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing fluent-builder.toml
    #[arg(long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;

    if ctx.is_initialized() && !args.force {
        output.warning(&format!("{} already exists.", ctx.config_path.display()));
        output.info("Use --force to overwrite it with the defaults.");
        return Ok(());
    }

    let content = render_config(&FluentBuilderConfig::default())?;
    std::fs::write(&ctx.config_path, content)
        .with_context(|| format!("Failed to write {}", ctx.config_path.display()))?;

    output.success(&format!("Created {}", ctx.config_path.display()));
    output.info("Next: 'fluent-builder states' lists the builder states of every record.");
    Ok(())
}

fn render_config(config: &FluentBuilderConfig) -> Result<String> {
    let body = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    Ok(format!("# fluent-builder configuration\n\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_config_round_trips() {
        let rendered = render_config(&FluentBuilderConfig::default()).unwrap();
        assert!(rendered.starts_with("# fluent-builder configuration"));
        let parsed: FluentBuilderConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.expand.derive_name, "FluentBuilder");
    }
}
