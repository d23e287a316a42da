//! Route guard simulation.

use anyhow::{Result, bail};
use plantel_authz::{
    GuardView, PermissionRequirement, RecordingNavigator, RouteGuard, Session, SessionUser,
};

use crate::style::{print_denied, print_labeled, print_success, print_warn};

/// Renders one guard pass for the described session and page.
pub fn run(
    project: &str,
    role: Option<&str>,
    loading: bool,
    required_role: Option<&str>,
    requires: Option<&str>,
) -> Result<()> {
    let (config, authorizer) = super::load_authorizer(project)?;

    let session = match (loading, role) {
        (true, _) => Session::loading(),
        (false, Some(role)) => Session::authenticated(SessionUser::with_role(role)),
        (false, None) => Session::unauthenticated(),
    };

    let mut guard: RouteGuard<String> = RouteGuard::new(config.routes.clone());
    if let Some(required_role) = required_role {
        guard = guard.with_required_role(required_role);
    }
    if let Some(requires) = requires {
        guard = guard.with_required_permission(parse_requirement(requires)?);
    }

    let mut nav = RecordingNavigator::default();
    let view = guard.render(&authorizer, &session, &mut nav, || "page".to_string());

    match view {
        GuardView::Loading => print_warn("Loading: spinner shown, no checks yet"),
        GuardView::Redirecting => print_denied("Unauthenticated: nothing rendered"),
        GuardView::Denied(message) => print_denied(&format!("Forbidden: {message}")),
        GuardView::Fallback(fallback) => print_denied(&format!("Forbidden: {fallback}")),
        GuardView::Children(_) => print_success("Authorized: page rendered"),
    }

    for redirect in &nav.redirects {
        print_labeled("Redirect", redirect);
    }

    Ok(())
}

/// Parses `entity:action`.
fn parse_requirement(raw: &str) -> Result<PermissionRequirement> {
    match raw.split_once(':') {
        Some((entity, action)) if !entity.is_empty() && !action.is_empty() => {
            Ok(PermissionRequirement::new(entity, action))
        }
        _ => bail!("Expected entity:action, got {raw:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entity_action() {
        let req = parse_requirement("user:delete").unwrap();
        assert_eq!(req, PermissionRequirement::new("user", "delete"));
    }

    #[test]
    fn rejects_malformed_requirement() {
        assert!(parse_requirement("user").is_err());
        assert!(parse_requirement(":read").is_err());
        assert!(parse_requirement("user:").is_err());
    }
}
