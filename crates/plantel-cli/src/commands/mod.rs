//! CLI command implementations.

use anyhow::{Context, Result};
use plantel_authz::Authorizer;
use plantel_config::{ConfigLoader, PlantelConfig};

pub mod check;
pub mod config;
pub mod guard;
pub mod nav;
pub mod roles;
pub mod version;

/// Loads the project configuration.
pub(crate) fn load_config(project: &str) -> Result<PlantelConfig> {
    ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load configuration")
}

/// Loads the project configuration and builds its authorizer.
pub(crate) fn load_authorizer(project: &str) -> Result<(PlantelConfig, Authorizer)> {
    let config = load_config(project)?;
    let authorizer = config
        .authorizer()
        .context("Failed to build permission table")?;
    Ok((config, authorizer))
}
