//! The `[permissions]` section: a replacement role-permission table.
//!
//! ```toml
//! [permissions.observatorio]
//! profesional = ["read", "update"]
//! escuela = ["read"]
//!
//! [permissions.tecnico]
//! ```

use std::collections::BTreeMap;

use plantel_authz::{Action, Role, RolePermissionTable, RoleParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building a table from its definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Role name is not one of the known roles.
    #[error(transparent)]
    UnknownRole(#[from] RoleParseError),

    /// Action name is not one of read/create/update/delete.
    #[error("Unknown action {action:?} for {role}.{entity}")]
    UnknownAction {
        role: Role,
        entity: String,
        action: String,
    },

    /// Entry with no actions. Would make an entity "accessible" without
    /// granting anything on it.
    #[error("Entity {entity:?} for role {role} grants no actions")]
    EmptyActions { role: Role, entity: String },
}

/// Role name → entity name → action names.
///
/// Entities come out of the map in alphabetical order, so a table built from
/// a definition lists them that way too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDefinition(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl TableDefinition {
    /// Validates the definition and builds the table it describes.
    ///
    /// A role present with no entities is declared with no permissions.
    pub fn build(&self) -> Result<RolePermissionTable, TableError> {
        let mut builder = RolePermissionTable::builder();

        for (role_name, entities) in &self.0 {
            let role: Role = role_name.parse()?;
            builder = builder.declare(role);

            for (entity, action_names) in entities {
                if action_names.is_empty() {
                    return Err(TableError::EmptyActions {
                        role,
                        entity: entity.clone(),
                    });
                }

                let actions = action_names
                    .iter()
                    .map(|name| {
                        Action::parse(name).ok_or_else(|| TableError::UnknownAction {
                            role,
                            entity: entity.clone(),
                            action: name.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                builder = builder.grant(role, entity.as_str(), actions);
            }
        }

        Ok(builder.build())
    }
}
