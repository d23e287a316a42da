//! Configuration loader with multi-source merging

use crate::PlantelConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Git-tracked project file.
pub const PROJECT_CONFIG_FILE: &str = "plantel.toml";

/// Per-checkout overrides, kept out of git.
pub const LOCAL_CONFIG_FILE: &str = "plantel.local.toml";

/// Operator defaults shared by every project, e.g.
/// `~/.config/plantel/config.toml` on Linux. `None` without a home directory.
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("ar", "Plantel", "plantel")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "PLANTEL".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "PLANTEL")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/plantel/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<PlantelConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = PlantelConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/plantel/config.toml)
        let user_file = self.user_config.then(user_config_file).flatten();
        let project_file = self.project_dir.join(PROJECT_CONFIG_FILE);
        let local_file = self.project_dir.join(LOCAL_CONFIG_FILE);

        // 3. Project config (plantel.toml)
        // 4. Local config (plantel.local.toml, gitignored)
        for file in user_file.into_iter().chain([project_file, local_file]) {
            if file.exists() {
                builder = builder.add_source(
                    config::File::from(file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // 5. Environment variables (PLANTEL_AUTHZ__WARN_UNKNOWN_ENTITIES=true)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let plantel_config: PlantelConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        plantel_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(plantel_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> PlantelConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
