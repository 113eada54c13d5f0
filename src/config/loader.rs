//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/repotree/config.toml)
//! 3. Project config (.repotree/config.toml)
//! 4. Environment variables (REPOTREE_* prefix, nested keys split on `__`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::{Config, OutputFormat};
use crate::types::{RepoTreeError, Result, ResultExt};

/// Environment variable prefix
const ENV_PREFIX: &str = "REPOTREE_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let global = Self::global_config_path();
        let project = Self::project_config_path();
        Self::load_layers(global.as_deref(), &project, ENV_PREFIX)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .with_context_fn(|| "Configuration error")?;
        config.validate()?;
        Ok(config)
    }

    fn load_layers(global: Option<&Path>, project: &Path, env_prefix: &str) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if project.exists() {
            debug!("Loading project config from: {}", project.display());
            figment = figment.merge(Toml::file(project));
        }

        // e.g. REPOTREE_TREE__SORT -> tree.sort
        figment = figment.merge(Env::prefixed(env_prefix).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .with_context_fn(|| "Configuration error")?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/repotree/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("repotree"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".repotree")
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:    {} {}", exists, global.display());
        } else {
            println!("  Global:    (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project:   {} {}", exists, project.display());
    }

    /// Render an effective configuration in the requested format
    pub fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?),
            OutputFormat::Text => {
                toml::to_string_pretty(config).map_err(|e| RepoTreeError::Config(e.to_string()))
            }
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            RepoTreeError::Config("Cannot determine global config directory".to_string())
        })?;
        Self::write_default_config(&global_dir, Self::default_global_config(), force)
    }

    /// Initialize project configuration in `dir` (usually `.repotree`)
    pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir.join("snapshots"))?;
        Self::write_default_config(dir, Self::default_project_config(), force)
    }

    fn write_default_config(dir: &Path, content: &str, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() || force {
            fs::write(&config_path, content)?;
            info!("Created config: {}", config_path.display());
        } else {
            info!("Config exists: {}", config_path.display());
        }

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn default_global_config() -> &'static str {
        r#"# repotree Global Configuration
# User-wide defaults. Project settings in .repotree/config.toml override these.

version = "1.0"

[output]
format = "text"
show_size = false
color = true
"#
    }

    fn default_project_config() -> &'static str {
        r#"# repotree Project Configuration
# Project-specific settings that override global defaults.

version = "1.0"

[tree]
# preserve | alphabetical | directories-first
sort = "preserve"
exclude = []

[snapshots]
root = ".repotree/snapshots"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SortOrder;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let config = ConfigLoader::load_layers(
            None,
            &temp.path().join("missing.toml"),
            "REPOTREE_TEST_DEFAULTS_",
        )
        .unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.tree.sort, SortOrder::Preserve);
    }

    #[test]
    fn test_project_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        let project = temp.path().join("project.toml");
        fs::write(&global, "[tree]\nsort = \"alphabetical\"\n[output]\nshow_size = true\n")
            .unwrap();
        fs::write(&project, "[tree]\nsort = \"directories-first\"\n").unwrap();

        let config =
            ConfigLoader::load_layers(Some(&global), &project, "REPOTREE_TEST_LAYERS_").unwrap();
        assert_eq!(config.tree.sort, SortOrder::DirectoriesFirst);
        assert!(config.output.show_size);
    }

    #[test]
    fn test_env_override() {
        let temp = TempDir::new().unwrap();
        // SAFETY: The prefix is unique to this test
        unsafe {
            std::env::set_var("REPOTREE_TEST_ENV_OUTPUT__FORMAT", "json");
        }
        let config = ConfigLoader::load_layers(
            None,
            &temp.path().join("missing.toml"),
            "REPOTREE_TEST_ENV_",
        )
        .unwrap();
        unsafe {
            std::env::remove_var("REPOTREE_TEST_ENV_OUTPUT__FORMAT");
        }
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[tree]\nsort = \"sideways\"\n").unwrap();
        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RepoTreeError::Config(_)));
    }

    #[test]
    fn test_init_project_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".repotree");
        let path = ConfigLoader::init_project(&dir, false).unwrap();

        assert!(path.exists());
        assert!(dir.join("snapshots").is_dir());
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.tree.sort, SortOrder::Preserve);
    }

    #[test]
    fn test_init_does_not_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".repotree");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "version = \"9\"\n").unwrap();

        ConfigLoader::init_project(&dir, false).unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("config.toml")).unwrap(),
            "version = \"9\"\n"
        );

        ConfigLoader::init_project(&dir, true).unwrap();
        assert!(
            fs::read_to_string(dir.join("config.toml"))
                .unwrap()
                .contains("[tree]")
        );
    }

    #[test]
    fn test_render_config_formats() {
        let config = Config::default();
        let json = ConfigLoader::render_config(&config, OutputFormat::Json).unwrap();
        assert!(json.contains("\"sort\": \"preserve\""));
        let text = ConfigLoader::render_config(&config, OutputFormat::Text).unwrap();
        assert!(text.contains("[tree]"));
    }
}
