use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "fluent-builder.toml";

/// Project context for fluent-builder operations
pub struct ProjectContext {
    /// Root directory of the project (where Cargo.toml is)
    pub project_root: PathBuf,
    /// Path to config file
    pub config_path: PathBuf,
    /// Loaded configuration, defaults when the file is absent
    pub config: FluentBuilderConfig,
}

/// Configuration stored in fluent-builder.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FluentBuilderConfig {
    #[serde(default)]
    pub expand: ExpandSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandSettings {
    #[serde(default = "default_scan_paths")]
    pub scan_paths: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_derive_name")]
    pub derive_name: String,
    #[serde(default = "default_crate_name")]
    pub crate_name: String,
}

impl Default for ExpandSettings {
    fn default() -> Self {
        Self {
            scan_paths: default_scan_paths(),
            output_dir: default_output_dir(),
            derive_name: default_derive_name(),
            crate_name: default_crate_name(),
        }
    }
}

fn default_scan_paths() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_output_dir() -> String {
    "target/fluent-builder".to_string()
}

fn default_derive_name() -> String {
    fluent_builder_codegen::DERIVE_NAME.to_string()
}

fn default_crate_name() -> String {
    "crate".to_string()
}

impl ProjectContext {
    /// Find and load project context from current directory or ancestors
    pub fn find() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::find_from(&current_dir)
    }

    /// Find project context starting from the given directory
    pub fn find_from(start: &Path) -> Result<Self> {
        let project_root = Self::find_project_root(start)?;
        Self::from_root(project_root)
    }

    /// Create context from a known project root
    pub fn from_root(project_root: PathBuf) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            FluentBuilderConfig::default()
        };

        Ok(Self {
            project_root,
            config_path,
            config,
        })
    }

    /// Find project root by looking for Cargo.toml
    fn find_project_root(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let cargo_toml = current.join("Cargo.toml");
            if cargo_toml.exists() {
                return Ok(current);
            }

            if !current.pop() {
                anyhow::bail!(
                    "Could not find Cargo.toml in {start:?} or any parent directory. \
                     Are you in a Rust project?"
                );
            }
        }
    }

    /// Check if a config file exists in this project
    pub fn is_initialized(&self) -> bool {
        self.config_path.exists()
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(path)
    }

    /// Scan paths from the command line, or from the config when none are given.
    pub fn scan_paths(&self, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if overrides.is_empty() {
            self.config.expand.scan_paths.iter().map(|p| self.resolve(p)).collect()
        } else {
            overrides.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FluentBuilderConfig::default();
        assert_eq!(config.expand.scan_paths, vec!["src".to_string()]);
        assert_eq!(config.expand.output_dir, "target/fluent-builder");
        assert_eq!(config.expand.derive_name, "FluentBuilder");
        assert_eq!(config.expand.crate_name, "crate");
    }

    #[test]
    fn test_config_serialization() {
        let config = FluentBuilderConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[expand]"));
        assert!(toml_str.contains("scan_paths"));
        assert!(toml_str.contains("output_dir"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FluentBuilderConfig = toml::from_str("[expand]\noutput_dir = \"gen\"\n").unwrap();
        assert_eq!(config.expand.output_dir, "gen");
        assert_eq!(config.expand.scan_paths, vec!["src".to_string()]);
    }

    #[test]
    fn test_find_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[expand]\nscan_paths = [\"src/models\"]\n",
        )
        .unwrap();
        let nested = dir.path().join("src/models");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = ProjectContext::find_from(&nested).unwrap();
        assert_eq!(ctx.project_root, dir.path());
        assert!(ctx.is_initialized());
        assert_eq!(ctx.scan_paths(&[]), vec![dir.path().join("src/models")]);
        assert_eq!(ctx.scan_paths(&[PathBuf::from("lib")]), vec![PathBuf::from("lib")]);
    }
}
