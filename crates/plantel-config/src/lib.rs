//! Configuration management for Plantel
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (PLANTEL_* prefix, `__` between sections)
//! 2. plantel.local.toml (gitignored, local overrides)
//! 3. plantel.toml (git-tracked, project config)
//! 4. ~/.config/plantel/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! The permission table is part of the configuration: with no `[permissions]`
//! section the deployed table is used, otherwise the section replaces it
//! wholesale.

use anyhow::Result;
use plantel_authz::{Authorizer, AuthorizerOptions, GuardRoutes, RolePermissionTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod definition;
mod error;
mod loader;

pub use definition::{TableDefinition, TableError};
pub use error::ConfigError;
pub use loader::{ConfigLoader, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, user_config_file};

/// Main Plantel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantelConfig {
    pub app: AppConfig,
    pub routes: GuardRoutes,
    pub authz: AuthorizerOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<TableDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    /// Base URL of the backend REST API.
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "plantel".to_string(),
            api_url: "http://localhost:8000/api".to_string(),
        }
    }
}

impl PlantelConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a development configuration
    pub fn development() -> Self {
        Self {
            authz: AuthorizerOptions {
                warn_unknown_entities: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self {
            authz: AuthorizerOptions {
                warn_unknown_entities: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [("login", &self.routes.login), ("landing", &self.routes.landing)] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "routes.{name} must be an absolute path, got {path:?}"
                )));
            }
        }

        if self.routes.login == self.routes.landing {
            return Err(ConfigError::ValidationError(
                "routes.login and routes.landing must differ".to_string(),
            ));
        }

        self.permission_table()?;
        Ok(())
    }

    /// Build the permission table in effect
    pub fn permission_table(&self) -> Result<RolePermissionTable, ConfigError> {
        match &self.permissions {
            Some(definition) => Ok(definition.build()?),
            None => Ok(RolePermissionTable::standard()),
        }
    }

    /// Build the authorization service described by this configuration
    pub fn authorizer(&self) -> Result<Authorizer, ConfigError> {
        Ok(Authorizer::new(self.permission_table()?).with_options(self.authz.clone()))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write as the project config file, refusing to overwrite.
    /// Returns the path written.
    pub fn write_project_file(
        &self,
        project_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ConfigError> {
        let path = project_dir.as_ref().join(PROJECT_CONFIG_FILE);
        if path.exists() {
            return Err(ConfigError::ValidationError(format!(
                "{} already exists",
                path.display()
            )));
        }

        let contents = self.to_toml()?;
        match std::fs::write(&path, contents) {
            Ok(()) => Ok(path),
            Err(source) => Err(ConfigError::WriteError { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlantelConfig::default();
        assert_eq!(config.app.name, "plantel");
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.landing, "/dashboard");
        assert!(!config.authz.warn_unknown_entities);
        assert!(config.permissions.is_none());
    }

    #[test]
    fn test_development_config() {
        let config = PlantelConfig::development();
        assert!(config.authz.warn_unknown_entities);
    }

    #[test]
    fn test_production_config() {
        let config = PlantelConfig::production();
        assert!(!config.authz.warn_unknown_entities);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_table_is_standard() {
        let config = PlantelConfig::default();
        assert_eq!(
            config.permission_table().unwrap(),
            RolePermissionTable::standard()
        );
    }

    #[test]
    fn test_validate_rejects_relative_routes() {
        let mut config = PlantelConfig::default();
        config.routes.login = "login".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("routes.login")
        ));
    }

    #[test]
    fn test_validate_rejects_identical_routes() {
        let mut config = PlantelConfig::default();
        config.routes.landing = "/login".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_table_is_reported() {
        let mut definition = TableDefinition::default();
        definition.0.insert(
            "equipo".to_string(),
            [("escuela".to_string(), vec!["write".to_string()])].into(),
        );
        let config = PlantelConfig {
            permissions: Some(definition),
            ..Default::default()
        };

        assert!(matches!(
            config.authorizer(),
            Err(ConfigError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_write_project_file_refuses_overwrite() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = PlantelConfig::production();

        let path = config.write_project_file(temp_dir.path()).unwrap();
        assert_eq!(path, temp_dir.path().join(PROJECT_CONFIG_FILE));
        assert!(path.exists());

        assert!(matches!(
            config.write_project_file(temp_dir.path()),
            Err(ConfigError::ValidationError(msg)) if msg.contains("already exists")
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PlantelConfig::development();
        let rendered = config.to_toml().unwrap();
        let parsed: PlantelConfig = toml::from_str(&rendered).unwrap();

        assert!(parsed.authz.warn_unknown_entities);
        assert_eq!(parsed.routes, config.routes);
        assert!(parsed.permissions.is_none());
    }
}
