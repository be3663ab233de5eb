use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Table};
use fluent_builder_build::{BatchError, BuilderGenerator, GenerationReport};
use serde::Serialize;

use crate::context::ProjectContext;
use crate::examples::ExampleGroup;
use crate::output::{OutputManager, TableDisplay};
use crate::theme::{CHECK, CROSS, FILE};

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Expand Builders",
        commands: &[
            "fluent-builder expand                      # Scan the configured paths",
            "fluent-builder expand src/models           # Scan one directory",
            "fluent-builder expand --out gen            # Write units to ./gen",
        ],
    },
    ExampleGroup {
        title: "Scripting",
        commands: &["fluent-builder --output json expand     # Machine-readable report"],
    },
];

#[derive(Args)]
pub struct ExpandArgs {
    /// Directories to scan (defaults to `scan_paths` in fluent-builder.toml)
    pub paths: Vec<PathBuf>,

    /// Directory receiving the generated files
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Crate name used when naming each record's module
    #[arg(long)]
    pub crate_name: Option<String>,

    /// Derive that marks a record
    #[arg(long)]
    pub derive: Option<String>,
}

#[derive(Serialize)]
struct ExpandSummary {
    generated: Vec<UnitRow>,
    failures: Vec<FailureRow>,
}

#[derive(Serialize)]
struct UnitRow {
    record: String,
    unit: String,
    source: String,
    output: String,
    written: bool,
}

#[derive(Serialize)]
struct FailureRow {
    record: String,
    kind: &'static str,
    message: String,
}

impl From<&GenerationReport> for ExpandSummary {
    fn from(report: &GenerationReport) -> Self {
        let generated = report
            .generated
            .iter()
            .map(|unit| UnitRow {
                record: unit.record.clone(),
                unit: unit.unit.clone(),
                source: unit.source_file.display().to_string(),
                output: unit.output_file.display().to_string(),
                written: unit.written,
            })
            .collect();
        let failures = report
            .failures
            .iter()
            .map(|failure| FailureRow {
                record: failure.record().to_string(),
                kind: match failure {
                    BatchError::Usage { .. } => "usage",
                    BatchError::Emission { .. } => "emission",
                },
                message: failure.to_string(),
            })
            .collect();
        Self { generated, failures }
    }
}

impl TableDisplay for ExpandSummary {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.table(&["Record", "Unit", "Output", "Status"]);
        for row in &self.generated {
            let status = if row.written {
                format!("{} written", FILE)
            } else {
                format!("{} unchanged", CHECK)
            };
            table.add_row(vec![
                Cell::new(&row.record),
                Cell::new(&row.unit),
                Cell::new(&row.output),
                Cell::new(status),
            ]);
        }
        for row in &self.failures {
            table.add_row(vec![
                Cell::new(&row.record),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(format!("{} {}", CROSS, row.kind)),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        let written = self.generated.iter().filter(|row| row.written).count();
        format!(
            "generated={} written={} failed={}",
            self.generated.len(),
            written,
            self.failures.len()
        )
    }
}

pub fn handle_expand(args: ExpandArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    let settings = &ctx.config.expand;

    let out = args.out.unwrap_or_else(|| ctx.resolve(&settings.output_dir));
    let mut generator = BuilderGenerator::new()
        .output_dir(&out)
        .crate_name(args.crate_name.unwrap_or_else(|| settings.crate_name.clone()))
        .derive_name(args.derive.unwrap_or_else(|| settings.derive_name.clone()));
    for path in ctx.scan_paths(&args.paths) {
        output.verbose(&format!("scanning {}", path.display()));
        generator = generator.scan_path(path);
    }

    output.heading("Expand Builders");
    let report = generator.run()?;
    output.display(&ExpandSummary::from(&report))?;

    if report.is_success() {
        output.success(&format!("{} unit(s) in {}", report.generated.len(), out.display()));
        return Ok(());
    }

    if !output.is_json() {
        for failure in &report.failures {
            output.error(&failure.to_string());
        }
    }
    anyhow::bail!("{} record(s) could not be expanded", report.failures.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_builder_build::GeneratedUnit;

    #[test]
    fn test_summary_compact() {
        let report = GenerationReport {
            generated: vec![GeneratedUnit {
                record: "Person".to_string(),
                unit: "PersonBuilder".to_string(),
                source_file: PathBuf::from("src/people.rs"),
                output_file: PathBuf::from("gen/person_builder.rs"),
                written: true,
            }],
            failures: Vec::new(),
        };
        let summary = ExpandSummary::from(&report);
        assert_eq!(summary.to_compact(), "generated=1 written=1 failed=0");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["generated"][0]["unit"], "PersonBuilder");
    }
}
