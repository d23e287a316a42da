//! Sidebar preview.

use anyhow::Result;
use plantel_authz::{NavigationEntry, Session, SessionUser, filter_navigation};

use crate::style::{print_grid, print_hint};

/// Prints the sidebar entries visible to `role` (signed out when `None`).
pub fn run(project: &str, role: Option<&str>) -> Result<()> {
    let (_, authorizer) = super::load_authorizer(project)?;
    let session = match role {
        Some(role) => Session::authenticated(SessionUser::with_role(role)),
        None => Session::unauthenticated(),
    };
    let perms = authorizer.for_session(&session);

    let sidebar = NavigationEntry::sidebar();
    let visible = filter_navigation(&sidebar, &perms);

    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|entry| {
            let requirement = entry
                .required_permission
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            vec![entry.title.clone(), entry.path.clone(), requirement]
        })
        .collect();

    print_grid(&["Title", "Path", "Requires"], &rows);
    print_hint(&format!(
        "{} of {} entries visible",
        visible.len(),
        sidebar.len()
    ));
    Ok(())
}
