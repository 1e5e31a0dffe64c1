//! Inventory loading options shared by every subcommand
//!
//! Resolver settings come from an optional TOML file, with command-line
//! flags applied on top:
//!
//! ```toml
//! source_label = "cohort-repo-1"
//! duplicate_policy = "first_write_wins"
//! error_mode = "collect_all"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use typex_core::{ErrorMode, ResolverConfig, TypeExplorer};

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Path to the inventory YAML file
    pub file: PathBuf,

    /// Resolver configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source label used in diagnostics
    #[arg(long)]
    pub source: Option<String>,

    /// Report every structural error of the failing pass
    #[arg(long)]
    pub collect_all: bool,
}

/// Read a resolver configuration file
pub fn read_config(path: &Path) -> Result<ResolverConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config: ResolverConfig = toml::from_str(&content)
        .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
    Ok(config)
}

impl LoadArgs {
    /// Configuration after applying flags over the config file
    pub fn resolver_config(&self) -> Result<ResolverConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ResolverConfig::default(),
        };
        if let Some(source) = &self.source {
            config.source_label = Some(source.clone());
        }
        if self.collect_all {
            config.error_mode = ErrorMode::CollectAll;
        }
        Ok(config)
    }

    /// Parse, register and resolve the inventory
    pub fn load(&self) -> Result<TypeExplorer, Box<dyn std::error::Error>> {
        let config = self.resolver_config()?;
        let explorer = typex_inventory::load_explorer(&self.file, config)?;
        Ok(explorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use typex_core::DuplicatePolicy;

    fn args(config: Option<PathBuf>) -> LoadArgs {
        LoadArgs {
            file: PathBuf::from("inventory.yaml"),
            config,
            source: None,
            collect_all: false,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = args(None).resolver_config().unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source_label = \"from-file\"").unwrap();
        writeln!(file, "duplicate_policy = \"first_write_wins\"").unwrap();

        let mut load = args(Some(file.path().to_path_buf()));
        assert_eq!(load.resolver_config().unwrap().source_label(), "from-file");

        load.source = Some("from-flag".to_string());
        load.collect_all = true;
        let config = load.resolver_config().unwrap();

        assert_eq!(config.source_label(), "from-flag");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::FirstWriteWins);
        assert_eq!(config.error_mode, ErrorMode::CollectAll);
    }

    #[test]
    fn test_invalid_config_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error_mode = \"sometimes\"").unwrap();

        let err = args(Some(file.path().to_path_buf()))
            .resolver_config()
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
