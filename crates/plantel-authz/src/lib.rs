//! # plantel-authz: Role-Based Access Control for the Plantel dashboard
//!
//! Decides what each role may see and do across the dashboard:
//! - **Role-permission table** (role → entity → CRUD actions)
//! - **Query functions** (`has_permission`, `can_view_page`, ...)
//! - **Route guard** for whole pages, with login/landing redirects
//! - **Permission button** and **permission gate** for controls and content
//! - **Navigation filter** for the sidebar
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Session (auth provider)                     │
//! └─────────────────┬───────────────────────────┘
//!                   │ role, loading flag
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Authorizer ── RolePermissionTable           │
//! │  └─ Permissions (one view per render)        │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!     ┌─────────────┼──────────────┬──────────────┐
//!     ▼             ▼              ▼              ▼
//! RouteGuard  PermissionButton PermissionGate filter_navigation
//! ```
//!
//! Every surface goes through the same [`Permissions`] view, so they cannot
//! disagree about a (role, entity, action) triple.
//!
//! ## Roles
//!
//! | Role         | profesional | catalogs | modificacion | user |
//! |--------------|-------------|----------|--------------|------|
//! | admin        | CRUD        | CRUD     | CRUD         | CRUD |
//! | observatorio | read/update | read     | read         | ✗    |
//! | equipo       | read        | read     | ✗            | ✗    |
//! | directora    | read        | some     | ✗            | ✗    |
//! | tecnico      | ✗           | ✗        | ✗            | ✗    |
//! | user         | ✗           | ✗        | ✗            | read |
//!
//! ## Examples
//!
//! ```
//! use plantel_authz::{Authorizer, PermissionButton, Session, SessionUser};
//!
//! let authorizer = Authorizer::standard();
//! let session = Session::authenticated(SessionUser::with_role("observatorio"));
//! let perms = authorizer.for_session(&session);
//!
//! assert!(perms.has_permission("profesional", "update"));
//! assert!(!perms.has_permission("profesional", "delete"));
//!
//! let delete = PermissionButton::new("profesional", "delete", "Eliminar");
//! assert!(delete.render(&perms).is_none());
//! ```
//!
//! ### Route guard
//!
//! ```
//! use plantel_authz::{
//!     Authorizer, GuardRoutes, GuardView, PermissionRequirement, RecordingNavigator,
//!     RouteGuard, Session, SessionUser,
//! };
//!
//! let authorizer = Authorizer::standard();
//! let mut nav = RecordingNavigator::default();
//! let mut guard = RouteGuard::new(GuardRoutes::default())
//!     .with_required_permission(PermissionRequirement::new("user", "delete"));
//!
//! let session = Session::authenticated(SessionUser::with_role("user"));
//! let view = guard.render(&authorizer, &session, &mut nav, || "usuarios");
//!
//! assert!(matches!(view, GuardView::Denied(_)));
//! assert_eq!(nav.redirects, vec!["/dashboard"]);
//! ```

pub mod authorizer;
pub mod gate;
pub mod guard;
pub mod navigation;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use authorizer::{Authorizer, AuthorizerOptions, Permissions};
pub use gate::{GateContext, PermissionButton, PermissionGate};
pub use guard::{
    GuardRoutes, GuardState, GuardView, Navigator, RecordingNavigator, RouteGuard,
    DEFAULT_DENIAL_MESSAGE,
};
pub use navigation::{NavigationEntry, filter_navigation};
pub use permissions::{Action, PermissionEntry, PermissionRequirement};
pub use roles::{Role, RoleParseError, role_display_name};
pub use session::{Session, SessionAccessor, SessionSource, SessionStatus, SessionUser};
pub use table::{RolePermissionTable, TableBuilder};
