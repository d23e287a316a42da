//! Cross-surface scenario tests for plantel-authz


use test_case::test_case;

use crate::{
    Authorizer, GuardRoutes, GuardState, GuardView, NavigationEntry, PermissionButton,
    PermissionGate, PermissionRequirement, RecordingNavigator, RouteGuard, Session, SessionUser,
    filter_navigation,
};

fn signed_in(role: &str) -> Session {
    Session::authenticated(SessionUser::with_role(role))
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn equipo_sees_profesionales_but_not_admin_sections() {
    let authorizer = Authorizer::standard();
    let session = signed_in("equipo");
    let entries = vec![
        NavigationEntry::new("/profesionales", "Profesionales", "users")
            .requires_read("profesional"),
        NavigationEntry::new("/usuarios", "Usuarios", "user-cog").requires_read("user"),
        NavigationEntry::new("/modificaciones", "Modificaciones", "arrow-left-right")
            .requires_read("modificacion"),
    ];

    let visible = filter_navigation(&entries, &authorizer.for_session(&session));
    let titles: Vec<&str> = visible.iter().map(|e| e.title.as_str()).collect();

    assert_eq!(titles, vec!["Profesionales"]);
}

#[test]
fn sidebar_order_is_preserved() {
    let authorizer = Authorizer::standard();
    let session = signed_in("observatorio");
    let sidebar = NavigationEntry::sidebar();

    let visible = filter_navigation(&sidebar, &authorizer.for_session(&session));
    let positions: Vec<usize> = visible
        .iter()
        .map(|v| sidebar.iter().position(|e| e.path == v.path).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(visible.iter().any(|e| e.path == "/modificaciones"));
    assert!(!visible.iter().any(|e| e.path == "/usuarios"));
}

// ============================================================================
// Route guard
// ============================================================================

#[test]
fn guard_follows_session_resolution() {
    let authorizer = Authorizer::standard();
    let mut nav = RecordingNavigator::default();
    let mut guard: RouteGuard<&str> = RouteGuard::new(GuardRoutes::default());

    let view = guard.render(&authorizer, &Session::loading(), &mut nav, || "page");
    assert_eq!(view, GuardView::Loading);
    assert!(nav.redirects.is_empty());

    let view = guard.render(&authorizer, &Session::unauthenticated(), &mut nav, || "page");
    assert_eq!(view, GuardView::Redirecting);
    assert_eq!(nav.redirects, vec!["/login"]);
}

#[test]
fn guard_denies_user_deleting_users() {
    let authorizer = Authorizer::standard();
    let mut nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new(GuardRoutes::default())
        .with_required_permission(PermissionRequirement::new("user", "delete"))
        .with_fallback("sin permisos");

    let view = guard.render(&authorizer, &signed_in("user"), &mut nav, || "usuarios");

    assert_eq!(view, GuardView::Fallback("sin permisos"));
    assert_eq!(guard.state(), Some(GuardState::Forbidden));
    assert_eq!(nav.redirects, vec!["/dashboard"]);
}

#[test_case("admin", "profesional", "delete", GuardState::Authorized ; "admin deletes profesionales")]
#[test_case("observatorio", "profesional", "update", GuardState::Authorized ; "observatorio edits profesionales")]
#[test_case("observatorio", "profesional", "delete", GuardState::Forbidden ; "observatorio cannot delete")]
#[test_case("equipo", "escuela", "read", GuardState::Authorized ; "equipo reads escuelas")]
#[test_case("equipo", "escuela", "create", GuardState::Forbidden ; "equipo cannot create escuelas")]
#[test_case("tecnico", "escuela", "read", GuardState::Forbidden ; "tecnico has nothing")]
#[test_case("desconocido", "escuela", "read", GuardState::Forbidden ; "unknown role has nothing")]
fn guard_state_matches_table(role: &str, entity: &str, action: &str, expected: GuardState) {
    let authorizer = Authorizer::standard();
    let guard: RouteGuard<()> = RouteGuard::new(GuardRoutes::default())
        .with_required_permission(PermissionRequirement::new(entity, action));

    assert_eq!(guard.evaluate(&authorizer, &signed_in(role)), expected);
}

// ============================================================================
// Buttons and gates agree with the guard
// ============================================================================

#[test]
fn observatorio_buttons() {
    let authorizer = Authorizer::standard();
    let session = signed_in("observatorio");
    let perms = authorizer.for_session(&session);

    let delete = PermissionButton::new("profesional", "delete", "Eliminar");
    let update = PermissionButton::new("profesional", "update", "Editar");

    assert!(delete.render(&perms).is_none());
    assert_eq!(update.render(&perms), Some(&"Editar"));
}

#[test_case("admin")]
#[test_case("observatorio")]
#[test_case("equipo")]
#[test_case("directora")]
#[test_case("tecnico")]
#[test_case("user")]
fn surfaces_agree_for_role(role: &str) {
    let authorizer = Authorizer::standard();
    let session = signed_in(role);
    let perms = authorizer.for_session(&session);

    for entity in authorizer.table().entities() {
        for action in ["read", "create", "update", "delete"] {
            let requirement = PermissionRequirement::new(entity, action);

            let guard: RouteGuard<()> = RouteGuard::new(GuardRoutes::default())
                .with_required_permission(requirement.clone());
            let guard_allows = guard.evaluate(&authorizer, &session) == GuardState::Authorized;

            let button_allows = PermissionButton::new(entity, action, ()).is_visible(&perms);
            let gate_allows = PermissionGate::<()>::requiring(requirement).allows(&perms);

            assert_eq!(guard_allows, button_allows, "{role} {entity}:{action}");
            assert_eq!(gate_allows, button_allows, "{role} {entity}:{action}");
        }

        let entry = NavigationEntry::new("/x", "x", "x").requires_read(entity);
        assert_eq!(entry.is_visible(&perms), perms.can_view_page(entity));
    }
}
