//! Plantel CLI.
//!
//! Operator tooling for the dashboard's access rules: inspect the
//! role-permission table, evaluate single decisions, preview the sidebar a
//! role gets, and simulate the route guard.
//!
//! # Quick Start
//!
//! ```bash
//! # Write a plantel.toml with the defaults
//! plantel config init --development
//!
//! # Can observatorio delete professionals?
//! plantel check observatorio profesional delete
//!
//! # Sidebar for a territorial team member
//! plantel nav equipo
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Plantel - access rules for the personnel dashboard.
#[derive(Parser)]
#[command(name = "plantel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory containing plantel.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: String,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List roles and how many entities each can reach.
    Roles,

    /// Show the permission entries of one role.
    Entities {
        /// Role name (admin, observatorio, equipo, directora, tecnico, user).
        role: String,
    },

    /// Evaluate a single permission check.
    Check {
        /// Role name as stored in the session.
        role: String,

        /// Entity name (profesional, escuela, user, ...).
        entity: String,

        /// Action (read, create, update, delete).
        action: String,

        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the sidebar entries visible to a role.
    Nav {
        /// Role name. Omit to preview a signed-out session.
        role: Option<String>,
    },

    /// Simulate the route guard for a page.
    Guard {
        /// Role of the signed-in user. Omit for a signed-out session.
        #[arg(short, long)]
        role: Option<String>,

        /// Simulate a session that is still loading.
        #[arg(long)]
        loading: bool,

        /// Required role for the page.
        #[arg(long)]
        required_role: Option<String>,

        /// Required permission as entity:action.
        #[arg(long)]
        requires: Option<String>,
    },

    /// Configuration management commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, toml, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a plantel.toml with the defaults.
    Init {
        /// Enable development diagnostics.
        #[arg(long)]
        development: bool,
    },

    /// Validate configuration files and the permission table.
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    let project = cli.project.as_str();

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Roles => commands::roles::list(project),
        Commands::Entities { role } => commands::roles::entities(project, &role),
        Commands::Check {
            role,
            entity,
            action,
            json,
        } => commands::check::run(project, &role, &entity, &action, json),
        Commands::Nav { role } => commands::nav::run(project, role.as_deref()),
        Commands::Guard {
            role,
            loading,
            required_role,
            requires,
        } => commands::guard::run(
            project,
            role.as_deref(),
            loading,
            required_role.as_deref(),
            requires.as_deref(),
        ),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(project, &format),
            ConfigCommands::Init { development } => commands::config::init(project, development),
            ConfigCommands::Validate => commands::config::validate(project),
        },
    }
}
