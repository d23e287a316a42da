//! Role listing commands.

use anyhow::Result;
use plantel_authz::{Action, Role, role_display_name};

use crate::style::{print_grid, print_hint, print_warn};

/// Lists every declared role with its label and reach.
pub fn list(project: &str) -> Result<()> {
    let (_, authorizer) = super::load_authorizer(project)?;
    let table = authorizer.table();

    let rows: Vec<Vec<String>> = Role::ALL
        .iter()
        .map(|role| {
            let entries = table.entries(*role);
            let reach = if entries.is_empty() {
                "none".to_string()
            } else {
                entries.len().to_string()
            };
            vec![
                role.as_str().to_string(),
                role.display_name().to_string(),
                reach,
            ]
        })
        .collect();

    print_grid(&["Role", "Label", "Entities"], &rows);
    Ok(())
}

/// Shows the entries of one role as an entity × action grid.
pub fn entities(project: &str, role: &str) -> Result<()> {
    let (_, authorizer) = super::load_authorizer(project)?;
    let perms = authorizer.for_role(role);

    if Role::parse(role).is_none() {
        print_warn(&format!("Unknown role {role:?}: every check denies"));
        return Ok(());
    }

    let accessible = perms.accessible_entities();
    if accessible.is_empty() {
        print_warn(&format!("{} has no permissions", role_display_name(role)));
        return Ok(());
    }

    let rows: Vec<Vec<String>> = accessible
        .iter()
        .map(|entity| {
            let mut row = vec![(*entity).to_string()];
            for action in Action::ALL {
                let mark = if perms.has_permission(entity, action.as_str()) {
                    "✓"
                } else {
                    "·"
                };
                row.push(mark.to_string());
            }
            row
        })
        .collect();

    print_grid(&["Entity", "read", "create", "update", "delete"], &rows);
    print_hint(&format!("Role label: {}", perms.role_display_name()));
    Ok(())
}
