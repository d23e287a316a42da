//! Authorization facade consumed by the UI.
//!
//! [`Authorizer`] is built once at startup and owns the table. Each render
//! asks it for a [`Permissions`] view bound to the current session; the view
//! is cheap, borrows everything, and is thrown away after the render.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::roles::{Role, role_display_name};
use crate::session::{SessionAccessor, SessionSource};
use crate::table::RolePermissionTable;

/// Tracing target for lookup diagnostics.
pub const DIAGNOSTICS_TARGET: &str = "plantel_authz::diagnostics";

/// Behavioural knobs for [`Authorizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizerOptions {
    /// Warn when a lookup names an entity no role has an entry for.
    /// The decision is still `false`.
    pub warn_unknown_entities: bool,

    /// Raw role names treated as coordinators, besides admin.
    pub coordinator_roles: Vec<String>,
}

impl Default for AuthorizerOptions {
    fn default() -> Self {
        Self {
            warn_unknown_entities: false,
            coordinator_roles: vec!["coordinador".to_string()],
        }
    }
}

/// Shared authorization service.
#[derive(Debug, Clone)]
pub struct Authorizer {
    table: Arc<RolePermissionTable>,
    options: AuthorizerOptions,
}

impl Authorizer {
    /// Creates a service over the given table with default options.
    pub fn new(table: impl Into<Arc<RolePermissionTable>>) -> Self {
        Self {
            table: table.into(),
            options: AuthorizerOptions::default(),
        }
    }

    /// Creates a service over the deployed table.
    pub fn standard() -> Self {
        Self::new(RolePermissionTable::standard())
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: AuthorizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Turns unknown-entity warnings on or off.
    pub fn with_unknown_entity_warnings(mut self, enabled: bool) -> Self {
        self.options.warn_unknown_entities = enabled;
        self
    }

    /// Returns the underlying table.
    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &AuthorizerOptions {
        &self.options
    }

    /// Binds the service to the current session for one render.
    pub fn for_session<'a, S>(&'a self, source: &'a S) -> Permissions<'a>
    where
        S: SessionSource + ?Sized,
    {
        let accessor = SessionAccessor::new(source.session());
        Permissions {
            authorizer: self,
            role: accessor.role(),
            authenticated: accessor.is_authenticated(),
        }
    }

    /// Binds the service to a bare role string, as if signed in with it.
    pub fn for_role<'a>(&'a self, role: &'a str) -> Permissions<'a> {
        Permissions {
            authorizer: self,
            role,
            authenticated: !role.is_empty(),
        }
    }

    fn check_entity(&self, role: &str, entity: &str) {
        if self.options.warn_unknown_entities && !self.table.knows_entity(entity) {
            warn!(
                target: DIAGNOSTICS_TARGET,
                role = %role,
                entity = %entity,
                "Permission lookup for an entity missing from every role"
            );
        }
    }
}

/// Per-render authorization view for the current session.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    authorizer: &'a Authorizer,
    role: &'a str,
    authenticated: bool,
}

impl<'a> Permissions<'a> {
    /// Returns whether the current role may perform `action` on `entity`.
    pub fn has_permission(&self, entity: &str, action: &str) -> bool {
        self.authorizer.check_entity(self.role, entity);
        self.authorizer
            .table
            .has_permission(self.role, entity, action)
    }

    /// Returns whether the current role may see the page for `page`.
    pub fn can_view_page(&self, page: &str) -> bool {
        self.authorizer.check_entity(self.role, page);
        self.authorizer.table.can_view_page(self.role, page)
    }

    /// Returns the entities the current role has any entry for.
    pub fn accessible_entities(&self) -> Vec<&'a str> {
        self.authorizer.table.accessible_entities(self.role)
    }

    /// Returns the display label for the current role.
    pub fn role_display_name(&self) -> String {
        role_display_name(self.role)
    }

    /// Returns the raw current role, `""` when signed out or loading.
    pub fn user_role(&self) -> &'a str {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }

    pub fn is_coordinator_or_admin(&self) -> bool {
        self.is_admin()
            || self
                .authorizer
                .options
                .coordinator_roles
                .iter()
                .any(|r| r == self.role)
    }
}
