//! Config Command
//!
//! Manage repotree configuration.
//!
//! Usage:
//!   repotree config show [-f json]
//!   repotree config path
//!   repotree config init [-g] [--force]

use crate::config::{ConfigLoader, OutputFormat};
use crate::types::Result;

/// Show merged effective configuration
pub fn show(format: OutputFormat) -> Result<()> {
    let config = ConfigLoader::load()?;
    println!("{}", ConfigLoader::render_config(&config, format)?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config:    {}", config_path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_project(&ConfigLoader::project_dir(), force)?;
    println!("✓ Initialized project configuration");
    println!("  Config:    {}", config_path.display());
    println!(
        "  Snapshots: {}",
        ConfigLoader::project_dir().join("snapshots").display()
    );
    Ok(())
}
