//! Role definitions.
//!
//! Sessions carry the role as a bare string chosen by the auth provider.
//! [`Role`] is the closed set the permission table is keyed by; strings are
//! narrowed into it at the session boundary and anything that does not parse
//! is treated as a role with no permissions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role assigned to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full CRUD on every entity, including user administration.
    Admin,

    /// Observatory staff.
    ///
    /// **Permissions:**
    /// - Read and update professionals
    /// - Read every other catalog, including movements
    Observatorio,

    /// Territorial team member. Read-only on the operational catalogs.
    Equipo,

    /// School principal. Read-only on schools, teams and staff.
    Directora,

    /// Technician. No permissions have been assigned yet.
    Tecnico,

    /// Plain user account. Can only see the user directory.
    User,
}

impl Role {
    /// Every role, in table order.
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Observatorio,
        Role::Equipo,
        Role::Directora,
        Role::Tecnico,
        Role::User,
    ];

    /// Narrows a raw session role. Exact, case-sensitive match.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "admin" => Some(Role::Admin),
            "observatorio" => Some(Role::Observatorio),
            "equipo" => Some(Role::Equipo),
            "directora" => Some(Role::Directora),
            "tecnico" => Some(Role::Tecnico),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Wire name of the role, as stored in sessions and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Observatorio => "observatorio",
            Role::Equipo => "equipo",
            Role::Directora => "directora",
            Role::Tecnico => "tecnico",
            Role::User => "user",
        }
    }

    /// Human-readable label shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Observatorio => "Observatorio",
            Role::Equipo => "Equipo",
            Role::Directora => "Directora",
            Role::Tecnico => "Técnico",
            Role::User => "Usuario",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name in configuration is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RoleParseError(s.to_string()))
    }
}

/// Returns the label for a raw role string.
///
/// Unknown roles come back unchanged. Only used for presentation, never for
/// access decisions.
pub fn role_display_name(raw: &str) -> String {
    Role::parse(raw).map_or_else(|| raw.to_string(), |role| role.display_name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_wire_names() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(" admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_from_str_reports_unknown_role() {
        let err = "coordinador".parse::<Role>().unwrap_err();
        assert_eq!(err, RoleParseError("coordinador".to_string()));
        assert!(err.to_string().contains("coordinador"));
    }

    #[test]
    fn test_display_name_known_roles() {
        assert_eq!(role_display_name("admin"), "Administrador");
        assert_eq!(role_display_name("tecnico"), "Técnico");
        assert_eq!(role_display_name("user"), "Usuario");
    }

    #[test]
    fn test_display_name_falls_back_to_raw_string() {
        assert_eq!(role_display_name("supervisor"), "supervisor");
        assert_eq!(role_display_name(""), "");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::Observatorio).unwrap();
        assert_eq!(json, "\"observatorio\"");

        let role: Role = serde_json::from_str("\"directora\"").unwrap();
        assert_eq!(role, Role::Directora);
    }
}
