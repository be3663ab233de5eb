use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Table};
use fluent_builder_build::BuilderGenerator;
use fluent_builder_codegen::{BuilderPlan, Schema, plan};
use serde::Serialize;

use crate::context::ProjectContext;
use crate::examples::ExampleGroup;
use crate::output::{OutputManager, TableDisplay};
use crate::theme::{ARROW, CHECK};

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Inspect States",
    commands: &[
        "fluent-builder states                      # Every record in the configured paths",
        "fluent-builder states --record Person      # One record",
        "fluent-builder --output json states        # Lattice as JSON",
    ],
}];

#[derive(Args)]
pub struct StatesArgs {
    /// Directories to scan (defaults to `scan_paths` in fluent-builder.toml)
    pub paths: Vec<PathBuf>,

    /// Only show the record with this name
    #[arg(long)]
    pub record: Option<String>,

    /// Derive that marks a record
    #[arg(long)]
    pub derive: Option<String>,
}

#[derive(Serialize)]
#[serde(transparent)]
struct StatesReport {
    records: Vec<RecordStates>,
}

#[derive(Serialize)]
struct RecordStates {
    record: String,
    module: String,
    file: String,
    required: Vec<String>,
    optional: Vec<String>,
    excluded: Vec<String>,
    states: Vec<StateRow>,
}

#[derive(Serialize)]
struct StateRow {
    name: String,
    provided: Vec<String>,
    missing: Vec<String>,
    transitions: Vec<TransitionRow>,
    builds: bool,
}

#[derive(Serialize)]
struct TransitionRow {
    field: String,
    target: String,
}

impl RecordStates {
    fn new(plan: BuilderPlan, file: String) -> Self {
        let states = plan
            .states
            .into_iter()
            .map(|state| StateRow {
                name: state.name,
                provided: state.provided,
                missing: state.missing,
                transitions: state
                    .transitions
                    .into_iter()
                    .map(|t| TransitionRow {
                        field: t.field,
                        target: t.target,
                    })
                    .collect(),
                builds: state.builds,
            })
            .collect();
        Self {
            record: plan.record,
            module: plan.module,
            file,
            required: plan.required,
            optional: plan.optional,
            excluded: plan.excluded,
            states,
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() { "-".to_string() } else { items.join(", ") }
}

impl TableDisplay for StatesReport {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.table(&["Record", "State", "Provided", "Missing", "Next", "Build"]);
        for record in &self.records {
            for state in &record.states {
                let next: Vec<String> = state
                    .transitions
                    .iter()
                    .map(|t| format!("{} {} {}", t.field, ARROW, t.target))
                    .collect();
                table.add_row(vec![
                    Cell::new(&record.record),
                    Cell::new(format!("{}::{}", record.module, state.name)),
                    Cell::new(join_or_dash(&state.provided)),
                    Cell::new(join_or_dash(&state.missing)),
                    Cell::new(if next.is_empty() { "-".to_string() } else { next.join("\n") }),
                    Cell::new(if state.builds { CHECK } else { "" }),
                ]);
            }
        }
        table
    }

    fn to_compact(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{}: {} states", record.record, record.states.len()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub fn handle_states(args: StatesArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    let settings = &ctx.config.expand;

    let mut generator = BuilderGenerator::new()
        .crate_name(settings.crate_name.clone())
        .derive_name(args.derive.unwrap_or_else(|| settings.derive_name.clone()));
    for path in ctx.scan_paths(&args.paths) {
        output.verbose(&format!("scanning {}", path.display()));
        generator = generator.scan_path(path);
    }

    let mut records = Vec::new();
    for discovered in generator.discover()? {
        if args.record.as_deref().is_some_and(|wanted| wanted != discovered.name()) {
            continue;
        }
        let (line, column) = discovered.location();
        let location = format!("{}:{line}:{column}", discovered.file.display());
        match Schema::from_derive_input(&discovered.input).and_then(|schema| plan(&schema)) {
            Ok(plan) => records.push(RecordStates::new(plan, location)),
            Err(err) => output.warning(&format!("{location}: {err}")),
        }
    }

    if records.is_empty() {
        match &args.record {
            Some(name) => anyhow::bail!("No valid record named `{name}` was found"),
            None => {
                output.info("No records deriving the builder were found.");
                return Ok(());
            }
        }
    }

    output.heading("Builder States");
    output.display(&StatesReport { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn person_plan() -> BuilderPlan {
        let input: syn::DeriveInput = parse_quote! {
            struct Person {
                #[builder(required)]
                name: String,
                #[builder(required)]
                age: u32,
                email: Option<String>,
            }
        };
        plan(&Schema::from_derive_input(&input).unwrap()).unwrap()
    }

    #[test]
    fn test_record_states_from_plan() {
        let record = RecordStates::new(person_plan(), "src/people.rs:2:8".to_string());
        assert_eq!(record.module, "person_builder");
        assert_eq!(record.optional, vec!["email".to_string()]);
        assert_eq!(record.states.len(), 4);
        assert_eq!(record.states[0].name, "Initial");
        assert_eq!(record.states[0].transitions.len(), 2);
        assert!(record.states[3].builds);
    }

    #[test]
    fn test_report_serializes_as_a_list() {
        let report = StatesReport {
            records: vec![RecordStates::new(person_plan(), "src/people.rs:2:8".to_string())],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json[0]["record"], "Person");
        assert_eq!(json[0]["states"][3]["name"], "Final");
        assert_eq!(report.to_compact(), "Person: 4 states");
    }
}
