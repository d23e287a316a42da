//! Permission types for access control.
//!
//! An entity is a free-form name ("profesional", "escuela", ...) and is never
//! enumerated. Actions are the four CRUD verbs with no hierarchy between them:
//! holding `update` says nothing about `read`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operation class that can be granted on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// List and view records.
    Read,

    /// Create new records.
    Create,

    /// Edit existing records.
    Update,

    /// Delete records.
    Delete,
}

impl Action {
    /// Every action, in CRUD display order.
    pub const ALL: [Action; 4] = [Action::Read, Action::Create, Action::Update, Action::Delete];

    /// Parses an action name. Exact, case-sensitive match.
    pub fn parse(raw: &str) -> Option<Action> {
        match raw {
            "read" => Some(Action::Read),
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions granted on one entity. Belongs to exactly one role's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Entity name, matched exactly against lookups.
    pub entity: String,

    /// Allowed actions. Never empty once the entry is in a table.
    pub actions: Vec<Action>,
}

impl PermissionEntry {
    /// Creates an entry, dropping duplicate actions while keeping order.
    pub fn new(entity: impl Into<String>, actions: impl IntoIterator<Item = Action>) -> Self {
        let mut deduped = Vec::new();
        for action in actions {
            if !deduped.contains(&action) {
                deduped.push(action);
            }
        }

        Self {
            entity: entity.into(),
            actions: deduped,
        }
    }

    /// Returns whether this entry grants the given action.
    pub fn grants(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Returns whether this entry grants the raw action name.
    ///
    /// Names that are not one of the four actions never match.
    pub fn allows(&self, action: &str) -> bool {
        Action::parse(action).is_some_and(|a| self.grants(a))
    }
}

/// A required (entity, action) pair, as passed to guards, gates and
/// navigation entries.
///
/// Both halves are plain strings because they come from page code; a typo
/// simply fails every check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRequirement {
    pub entity: String,
    pub action: String,
}

impl PermissionRequirement {
    /// Creates a new requirement.
    pub fn new(entity: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            action: action.into(),
        }
    }

    /// Shorthand for a `read` requirement on the entity.
    pub fn read(entity: impl Into<String>) -> Self {
        Self::new(entity, Action::Read.as_str())
    }
}

impl fmt::Display for PermissionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity, self.action)
    }
}
