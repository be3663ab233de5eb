//! Batch emission of builder units.
//!
//! Units are review copies of the derive's expansion. They are not compiled and
//! no `mod.rs` is written.

use crate::scanner::{DiscoveredRecord, scan_directory};
use anyhow::{Context, Result};
use fluent_builder_codegen::{DERIVE_NAME, Schema, SchemaError, emit_unit, module_name};
use quote::quote;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why one declaration produced no unit. Other declarations in the batch are unaffected.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The declaration is not a valid builder schema.
    #[error("{}:{line}:{column}: {source}", .file.display())]
    Usage {
        record: String,
        file: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: SchemaError,
    },

    /// The schema was valid but its unit could not be produced.
    #[error("{}: `{record}`: {source}", .file.display())]
    Emission {
        record: String,
        file: PathBuf,
        #[source]
        source: EmissionFailure,
    },
}

impl BatchError {
    pub fn record(&self) -> &str {
        match self {
            Self::Usage { record, .. } | Self::Emission { record, .. } => record,
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            Self::Usage { file, .. } | Self::Emission { file, .. } => file,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmissionFailure {
    #[error("unit `{unit}` was already emitted for the record in {}", .first.display())]
    Collision { unit: String, first: PathBuf },

    #[error("generated code could not be formatted: {0}")]
    Format(#[source] syn::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One unit emitted by a batch run.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub record: String,
    pub unit: String,
    pub source_file: PathBuf,
    pub output_file: PathBuf,
    /// False when the file already held identical content.
    pub written: bool,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedUnit>,
    pub failures: Vec<BatchError>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builder for configuring and running the batch expander.
pub struct BuilderGenerator {
    scan_paths: Vec<PathBuf>,
    output_dir: PathBuf,
    crate_name: String,
    derive_name: String,
}

impl BuilderGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            scan_paths: Vec::new(),
            output_dir: PathBuf::from("target/fluent-builder"),
            crate_name: "crate".to_string(),
            derive_name: DERIVE_NAME.to_string(),
        }
    }

    /// Add a path to scan for derived records.
    ///
    /// Can be called multiple times to scan multiple directories.
    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scan_paths.push(path.into());
        self
    }

    /// Set the directory receiving one file per unit.
    ///
    /// Default: `target/fluent-builder`
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the crate name used when naming the record's module.
    ///
    /// Default: `crate`
    pub fn crate_name(mut self, name: impl Into<String>) -> Self {
        self.crate_name = name.into();
        self
    }

    /// Set the derive that marks a record.
    ///
    /// Default: `FluentBuilder`
    pub fn derive_name(mut self, name: impl Into<String>) -> Self {
        self.derive_name = name.into();
        self
    }

    fn effective_scan_paths(&self) -> Vec<PathBuf> {
        if self.scan_paths.is_empty() {
            vec![PathBuf::from("src/")]
        } else {
            self.scan_paths.clone()
        }
    }

    /// Find every declaration carrying the derive, without emitting anything.
    pub fn discover(&self) -> Result<Vec<DiscoveredRecord>> {
        let skip = [self.output_dir.clone()];
        let mut records = Vec::new();
        for path in self.effective_scan_paths() {
            let found = scan_directory(&path, &self.crate_name, &self.derive_name, &skip)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            records.extend(found);
        }
        Ok(records)
    }

    /// Run the generator.
    ///
    /// Every discovered declaration is processed on its own: a failure is
    /// recorded in the report and the batch moves on to the next one.
    pub fn run(self) -> Result<GenerationReport> {
        let records = self.discover()?;
        log::info!("found {} record(s) deriving {}", records.len(), self.derive_name);

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create directory {}", self.output_dir.display()))?;

        let mut report = GenerationReport::default();
        let mut claimed: HashMap<String, PathBuf> = HashMap::new();

        for record in &records {
            match self.emit_one(record, &mut claimed) {
                Ok(unit) => {
                    if unit.written {
                        log::info!("generated {}", unit.output_file.display());
                    } else {
                        log::debug!("{} is up to date", unit.output_file.display());
                    }
                    report.generated.push(unit);
                }
                Err(err) => {
                    log::warn!("{err}");
                    report.failures.push(err);
                }
            }
        }

        Ok(report)
    }

    fn emit_one(&self, record: &DiscoveredRecord, claimed: &mut HashMap<String, PathBuf>) -> Result<GeneratedUnit, BatchError> {
        let schema = Schema::from_derive_input(&record.input).map_err(|source| usage(record, source))?;
        let tokens = emit_unit(&schema).map_err(|source| usage(record, source))?;

        let emission = |source| BatchError::Emission {
            record: record.name(),
            file: record.file.clone(),
            source,
        };

        let unit = schema.unit_name();
        let module = module_name(&schema);
        if let Some(first) = claimed.get(&module) {
            return Err(emission(EmissionFailure::Collision {
                unit,
                first: first.clone(),
            }));
        }

        let (line, column) = record.location();
        let origin = format!(
            "{}::{} ({}:{line}:{column})",
            record.module_path,
            record.name(),
            record.file.display()
        );
        let code = render_unit(&origin, tokens).map_err(|err| emission(EmissionFailure::Format(err)))?;
        let output_file = self.output_dir.join(format!("{module}.rs"));
        let written = write_if_changed(&output_file, &code).map_err(|source| {
            emission(EmissionFailure::Io {
                path: output_file.clone(),
                source,
            })
        })?;

        claimed.insert(module, record.file.clone());
        Ok(GeneratedUnit {
            record: record.name(),
            unit,
            source_file: record.file.clone(),
            output_file,
            written,
        })
    }
}

impl Default for BuilderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn usage(record: &DiscoveredRecord, source: SchemaError) -> BatchError {
    let start = source.span().start();
    BatchError::Usage {
        record: record.name(),
        file: record.file.clone(),
        line: start.line,
        column: start.column + 1,
        source,
    }
}

/// Format a unit under a header naming the record it was expanded from.
fn render_unit(origin: &str, unit: proc_macro2::TokenStream) -> Result<String, syn::Error> {
    let source = format!(" Expansion of `#[derive(FluentBuilder)]` on `{origin}`.");
    let output = quote! {
        //! Generated by fluent-builder for review. Do not edit manually.
        //!
        //! The derive already emits this code next to the record, so this file
        //! must not be included in the crate.
        #![doc = ""]
        #![doc = #source]

        #unit
    };
    let syntax_tree = syn::parse2(output)?;
    Ok(prettyplease::unparse(&syntax_tree))
}

/// Only write if content has changed (avoids unnecessary recompilation).
fn write_if_changed(path: &Path, content: &str) -> io::Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == content => Ok(false),
        _ => fs::write(path, content).map(|_| true),
    }
}
