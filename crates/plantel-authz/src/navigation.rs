//! Sidebar navigation filtering.

use serde::{Deserialize, Serialize};

use crate::authorizer::Permissions;
use crate::permissions::PermissionRequirement;

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub path: String,
    pub title: String,
    pub icon: String,

    /// Hidden from signed-out sessions.
    #[serde(default)]
    pub auth_required: bool,

    /// Page visibility requirement. Only the entity is consulted, as a
    /// `read` check.
    #[serde(default)]
    pub required_permission: Option<PermissionRequirement>,
}

impl NavigationEntry {
    /// Creates a public entry.
    pub fn new(path: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: icon.into(),
            auth_required: false,
            required_permission: None,
        }
    }

    /// Marks the entry as requiring a signed-in user.
    pub fn authenticated(mut self) -> Self {
        self.auth_required = true;
        self
    }

    /// Requires read access to `entity`. Implies [`Self::authenticated`].
    pub fn requires_read(mut self, entity: impl Into<String>) -> Self {
        self.auth_required = true;
        self.required_permission = Some(PermissionRequirement::read(entity));
        self
    }

    /// Returns whether this entry is shown for the view.
    pub fn is_visible(&self, perms: &Permissions<'_>) -> bool {
        if self.auth_required && !perms.is_authenticated() {
            return false;
        }

        self.required_permission
            .as_ref()
            .is_none_or(|req| perms.can_view_page(&req.entity))
    }

    /// The application sidebar.
    pub fn sidebar() -> Vec<NavigationEntry> {
        vec![
            NavigationEntry::new("/dashboard", "Inicio", "home").authenticated(),
            NavigationEntry::new("/profesionales", "Profesionales", "users")
                .requires_read("profesional"),
            NavigationEntry::new("/equipos", "Equipos", "users-round").requires_read("equipo"),
            NavigationEntry::new("/escuelas", "Escuelas", "school").requires_read("escuela"),
            NavigationEntry::new("/paquetes", "Paquetes de horas", "clock")
                .requires_read("paquetehoras"),
            NavigationEntry::new("/departamentos", "Departamentos", "map")
                .requires_read("departamento"),
            NavigationEntry::new("/regiones", "Regiones", "globe").requires_read("region"),
            NavigationEntry::new("/direcciones", "Direcciones", "building")
                .requires_read("direccion"),
            NavigationEntry::new("/anexos", "Anexos", "building-2").requires_read("anexo"),
            NavigationEntry::new("/modificaciones", "Modificaciones", "arrow-left-right")
                .requires_read("modificacion"),
            NavigationEntry::new("/usuarios", "Usuarios", "user-cog").requires_read("user"),
        ]
    }
}

/// Returns the entries visible for the view, in their original order.
pub fn filter_navigation<'e>(
    entries: &'e [NavigationEntry],
    perms: &Permissions<'_>,
) -> Vec<&'e NavigationEntry> {
    entries.iter().filter(|entry| entry.is_visible(perms)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorizer::Authorizer;

    fn titles<'e>(entries: &[&'e NavigationEntry]) -> Vec<&'e str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_public_entries_survive_sign_out() {
        let authorizer = Authorizer::standard();
        let entries = vec![
            NavigationEntry::new("/", "Portada", "home"),
            NavigationEntry::new("/dashboard", "Inicio", "home").authenticated(),
        ];

        let visible = filter_navigation(&entries, &authorizer.for_role(""));
        assert_eq!(titles(&visible), vec!["Portada"]);
    }

    #[test]
    fn test_permission_without_auth_flag_still_checked() {
        let authorizer = Authorizer::standard();
        let mut entry = NavigationEntry::new("/usuarios", "Usuarios", "user-cog");
        entry.required_permission = Some(PermissionRequirement::new("user", "delete"));

        // Only the read check matters for visibility.
        assert!(entry.is_visible(&authorizer.for_role("user")));
        assert!(!entry.is_visible(&authorizer.for_role("equipo")));
    }

    #[test]
    fn test_sidebar_for_admin_is_complete() {
        let authorizer = Authorizer::standard();
        let sidebar = NavigationEntry::sidebar();

        let visible = filter_navigation(&sidebar, &authorizer.for_role("admin"));
        assert_eq!(visible.len(), sidebar.len());
    }

    #[test]
    fn test_sidebar_for_tecnico_only_has_home() {
        let authorizer = Authorizer::standard();
        let sidebar = NavigationEntry::sidebar();

        let visible = filter_navigation(&sidebar, &authorizer.for_role("tecnico"));
        assert_eq!(titles(&visible), vec!["Inicio"]);
    }

    #[test]
    fn test_sidebar_for_user_role() {
        let authorizer = Authorizer::standard();
        let sidebar = NavigationEntry::sidebar();

        let visible = filter_navigation(&sidebar, &authorizer.for_role("user"));
        assert_eq!(titles(&visible), vec!["Inicio", "Usuarios"]);
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let entry: NavigationEntry = serde_json::from_str(
            r#"{"path": "/escuelas", "title": "Escuelas", "icon": "school"}"#,
        )
        .unwrap();

        assert!(!entry.auth_required);
        assert_eq!(entry.required_permission, None);
    }
}
