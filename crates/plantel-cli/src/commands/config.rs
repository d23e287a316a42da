//! Configuration management commands.

use anyhow::{Context, Result};
use plantel_config::{PROJECT_CONFIG_FILE, PlantelConfig};
use std::path::Path;

use crate::style::{print_error, print_hint, print_labeled, print_spacer, print_success};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let config = super::load_config(project)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            println!("{}", config.to_toml()?);
        }
        _ => {
            let table = config.permission_table()?;

            println!("Plantel Configuration");
            println!("=====================");
            print_spacer();

            println!("App:");
            print_labeled("Name", &config.app.name);
            print_labeled("API URL", &config.app.api_url);
            print_spacer();

            println!("Routes:");
            print_labeled("Login", &config.routes.login);
            print_labeled("Landing", &config.routes.landing);
            print_spacer();

            println!("Authorization:");
            print_labeled(
                "Warn on unknown entities",
                &config.authz.warn_unknown_entities.to_string(),
            );
            print_labeled(
                "Coordinator roles",
                &config.authz.coordinator_roles.join(", "),
            );
            print_labeled(
                "Permission table",
                if config.permissions.is_some() {
                    "custom"
                } else {
                    "standard"
                },
            );
            print_labeled("Roles declared", &table.roles().count().to_string());
            print_labeled("Entities", &table.entities().len().to_string());
        }
    }

    Ok(())
}

/// Write a plantel.toml with the defaults.
pub fn init(project: &str, development: bool) -> Result<()> {
    let project_path = Path::new(project);

    let config = if development {
        PlantelConfig::development()
    } else {
        PlantelConfig::production()
    };

    let written = config
        .write_project_file(project_path)
        .context("Failed to initialize project")?;

    print_success(&format!("Wrote {}", written.display()));
    print_hint("Add a [permissions] section to replace the standard table");
    Ok(())
}

/// Validate configuration files.
pub fn validate(project: &str) -> Result<()> {
    let project_path = Path::new(project);

    if !project_path.join(PROJECT_CONFIG_FILE).exists() {
        anyhow::bail!(
            "Project not initialized. Run 'plantel config init' in {} first.",
            project_path.display()
        );
    }

    // Loading already runs validation, including the permission table.
    let config = match super::load_config(project) {
        Ok(config) => config,
        Err(err) => {
            print_error("Configuration is invalid");
            return Err(err);
        }
    };
    let table = config.permission_table()?;

    print_success("Configuration is valid");
    print_labeled("Roles declared", &table.roles().count().to_string());
    Ok(())
}
