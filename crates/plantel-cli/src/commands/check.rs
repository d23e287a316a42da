//! Single permission check.

use anyhow::Result;
use plantel_authz::{Action, Role};
use serde::Serialize;

use crate::style::{print_denied, print_hint, print_success};

#[derive(Serialize)]
struct Decision<'a> {
    role: &'a str,
    entity: &'a str,
    action: &'a str,
    allowed: bool,
}

/// Evaluates `role` doing `action` on `entity` against the configured table.
pub fn run(project: &str, role: &str, entity: &str, action: &str, json: bool) -> Result<()> {
    let (_, authorizer) = super::load_authorizer(project)?;
    let allowed = authorizer.for_role(role).has_permission(entity, action);

    if json {
        let decision = Decision {
            role,
            entity,
            action,
            allowed,
        };
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    if allowed {
        print_success(&format!("{role} may {action} {entity}"));
        return Ok(());
    }

    print_denied(&format!("{role} may not {action} {entity}"));

    // Point at the likely typo, since lookups fail silently.
    if Role::parse(role).is_none() {
        print_hint(&format!("{role:?} is not a known role"));
    } else if !authorizer.table().knows_entity(entity) {
        print_hint(&format!("{entity:?} does not appear in the permission table"));
    } else if Action::parse(action).is_none() {
        print_hint(&format!("{action:?} is not one of read, create, update, delete"));
    }

    Ok(())
}
