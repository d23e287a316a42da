//! The role-permission table.
//!
//! A table maps each [`Role`] to an ordered list of [`PermissionEntry`]. It is
//! built once at startup and never mutated; changing who can do what means
//! shipping a new table.
//!
//! Every lookup is total. An unknown role, an unknown entity or an unknown
//! action is a plain `false`, never an error.

use std::collections::{BTreeMap, BTreeSet};

use crate::permissions::{Action, PermissionEntry};
use crate::roles::Role;

/// Immutable mapping from role to permission entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePermissionTable {
    roles: BTreeMap<Role, Vec<PermissionEntry>>,
}

impl RolePermissionTable {
    /// Starts an empty table builder.
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// The deployed table.
    ///
    /// | Role         | Entries                                                  |
    /// |--------------|----------------------------------------------------------|
    /// | admin        | CRUD on every entity                                     |
    /// | observatorio | profesional read/update, read on the other catalogs      |
    /// | equipo       | read on the operational catalogs                         |
    /// | directora    | read on escuela, equipo, profesional, paquetehoras, anexo|
    /// | tecnico      | nothing                                                  |
    /// | user         | user read                                                |
    pub fn standard() -> Self {
        const CATALOGS: [&str; 8] = [
            "escuela",
            "departamento",
            "equipo",
            "profesional",
            "paquetehoras",
            "region",
            "direccion",
            "anexo",
        ];

        let mut builder = Self::builder();

        for entity in CATALOGS.iter().chain(&["modificacion", "user"]) {
            builder = builder.grant(Role::Admin, *entity, Action::ALL);
        }

        builder = builder.grant(Role::Observatorio, "profesional", [Action::Read, Action::Update]);
        for entity in CATALOGS.iter().chain(&["modificacion"]) {
            builder = builder.grant(Role::Observatorio, *entity, [Action::Read]);
        }

        for entity in CATALOGS {
            builder = builder.grant(Role::Equipo, entity, [Action::Read]);
        }

        for entity in ["escuela", "equipo", "profesional", "paquetehoras", "anexo"] {
            builder = builder.grant(Role::Directora, entity, [Action::Read]);
        }

        builder
            // Permissions still to be defined.
            .declare(Role::Tecnico)
            .grant(Role::User, "user", [Action::Read])
            .build()
    }

    /// Returns whether `role` may perform `action` on `entity`.
    ///
    /// Role, entity and action are matched exactly and case-sensitively.
    pub fn has_permission(&self, role: &str, entity: &str, action: &str) -> bool {
        self.entry(role, entity).is_some_and(|entry| entry.allows(action))
    }

    /// Returns whether `role` may see the page named after `page`.
    ///
    /// Page visibility is a `read` check on the entity of the same name.
    pub fn can_view_page(&self, role: &str, page: &str) -> bool {
        self.has_permission(role, page, Action::Read.as_str())
    }

    /// Returns the entities `role` has any entry for, in table order.
    pub fn accessible_entities(&self, role: &str) -> Vec<&str> {
        Role::parse(role)
            .map(|role| self.entries(role))
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.entity.as_str())
            .collect()
    }

    /// Returns the entries granted to `role`. Empty for undeclared roles.
    pub fn entries(&self, role: Role) -> &[PermissionEntry] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the declared roles, in enum order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.keys().copied()
    }

    /// Returns whether any role has an entry for `entity`.
    pub fn knows_entity(&self, entity: &str) -> bool {
        self.roles
            .values()
            .flatten()
            .any(|entry| entry.entity == entity)
    }

    /// Returns every entity named anywhere in the table.
    pub fn entities(&self) -> BTreeSet<&str> {
        self.roles
            .values()
            .flatten()
            .map(|entry| entry.entity.as_str())
            .collect()
    }

    fn entry(&self, role: &str, entity: &str) -> Option<&PermissionEntry> {
        let role = Role::parse(role)?;
        self.entries(role).iter().find(|entry| entry.entity == entity)
    }
}

/// Builder for [`RolePermissionTable`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    roles: BTreeMap<Role, Vec<PermissionEntry>>,
}

impl TableBuilder {
    /// Declares a role, even if it ends up with no entries.
    pub fn declare(mut self, role: Role) -> Self {
        self.roles.entry(role).or_default();
        self
    }

    /// Grants actions on an entity. Granting the same entity twice merges
    /// the actions into the first entry.
    pub fn grant(
        mut self,
        role: Role,
        entity: impl Into<String>,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        let entity = entity.into();
        let entries = self.roles.entry(role).or_default();

        match entries.iter_mut().find(|e| e.entity == entity) {
            Some(existing) => {
                for action in actions {
                    if !existing.grants(action) {
                        existing.actions.push(action);
                    }
                }
            }
            None => {
                let entry = PermissionEntry::new(entity, actions);
                if !entry.actions.is_empty() {
                    entries.push(entry);
                }
            }
        }

        self
    }

    /// Finishes the table.
    pub fn build(self) -> RolePermissionTable {
        RolePermissionTable { roles: self.roles }
    }
}
