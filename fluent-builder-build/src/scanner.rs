//! Source file scanner for discovering FluentBuilder derives.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Attribute, DeriveInput, Item};
use walkdir::WalkDir;

/// A declaration carrying the derive, found in a scanned file.
#[derive(Debug, Clone)]
pub struct DiscoveredRecord {
    /// The declaration, ready for schema extraction.
    pub input: DeriveInput,
    /// The file it was found in.
    pub file: PathBuf,
    /// The module path where it is declared (e.g., "crate::shop::order")
    pub module_path: String,
}

impl DiscoveredRecord {
    pub fn name(&self) -> String {
        self.input.ident.to_string()
    }

    /// 1-based line and column of the declaration name.
    pub fn location(&self) -> (usize, usize) {
        let start = self.input.ident.span().start();
        (start.line, start.column + 1)
    }
}

/// Scan a directory recursively for Rust files containing the derive.
///
/// Files under `target/` and under any of `skip` are ignored. Files that fail to
/// parse are logged and skipped.
pub fn scan_directory(path: &Path, crate_name: &str, derive_name: &str, skip: &[PathBuf]) -> Result<Vec<DiscoveredRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != "target" && !skip.iter().any(|s| e.path().starts_with(s)))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let file_path = entry.path();
        match scan_file(file_path, path, crate_name, derive_name) {
            Ok(found) => {
                log::debug!("{}: {} record(s)", file_path.display(), found.len());
                records.extend(found);
            }
            Err(err) => log::warn!("skipping {}: {err:#}", file_path.display()),
        }
    }

    Ok(records)
}

/// Scan a single Rust file for the derive, including inline modules.
pub fn scan_file(file_path: &Path, base_path: &Path, crate_name: &str, derive_name: &str) -> Result<Vec<DiscoveredRecord>> {
    let content = fs::read_to_string(file_path).with_context(|| format!("Failed to read {}", file_path.display()))?;

    let syntax = syn::parse_file(&content).with_context(|| format!("Failed to parse {}", file_path.display()))?;

    let module_path = compute_module_path(file_path, base_path, crate_name);

    let mut records = Vec::new();
    collect_items(syntax.items, &module_path, file_path, derive_name, &mut records);
    Ok(records)
}

fn collect_items(items: Vec<Item>, module_path: &str, file: &Path, derive_name: &str, out: &mut Vec<DiscoveredRecord>) {
    for item in items {
        let input = match item {
            Item::Struct(item) if has_derive(&item.attrs, derive_name) => DeriveInput::from(item),
            Item::Enum(item) if has_derive(&item.attrs, derive_name) => DeriveInput::from(item),
            Item::Union(item) if has_derive(&item.attrs, derive_name) => DeriveInput::from(item),
            Item::Mod(module) => {
                if let Some((_, content)) = module.content {
                    let nested = format!("{module_path}::{}", module.ident);
                    collect_items(content, &nested, file, derive_name, out);
                }
                continue;
            }
            _ => continue,
        };
        out.push(DiscoveredRecord {
            input,
            file: file.to_path_buf(),
            module_path: module_path.to_string(),
        });
    }
}

/// Check if an item has `#[derive(..)]` naming `derive_name`, bare or by path.
fn has_derive(attrs: &[Attribute], derive_name: &str) -> bool {
    for attr in attrs {
        if attr.path().is_ident("derive")
            && let Ok(nested) =
                attr.parse_args_with(syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
        {
            for path in nested {
                if path.segments.last().is_some_and(|segment| segment.ident == derive_name) {
                    return true;
                }
            }
        }
    }
    false
}

/// Compute the module path from a file path.
/// e.g., "src/shop/order.rs" -> "crate::shop::order"
pub fn compute_module_path(file_path: &Path, base_path: &Path, crate_name: &str) -> String {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);

    let without_extension = relative.with_extension("");
    let mut parts: Vec<&str> = without_extension
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    // Remove "mod", "lib" or "main" from the end if present
    if let Some(last) = parts.last()
        && (*last == "mod" || *last == "lib" || *last == "main")
    {
        parts.pop();
    }

    if parts.is_empty() {
        crate_name.to_string()
    } else {
        format!("{}::{}", crate_name, parts.join("::"))
    }
}
