//! Route guard for protected pages.
//!
//! A [`RouteGuard`] wraps a page and decides, on every render, between four
//! states:
//!
//! ```text
//!            session resolves                 role/permission ok
//! Loading ─────────────────────► ┌──────────┐ ───────────────────► Authorized
//!    ▲                           │ resolved │
//!    │ session reloads           └──────────┘ ───────────────────► Forbidden
//!    └──────────────────────────     │        role/permission denied  (→ landing)
//!                                    └──────────────────────────► Unauthenticated
//!                                       nobody signed in              (→ login)
//! ```
//!
//! Redirects are side effects of *entering* Unauthenticated or Forbidden.
//! Rendering again in the same state never navigates again, and neither does
//! a transition whose target is the redirect already in flight.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::authorizer::{Authorizer, Permissions};
use crate::permissions::PermissionRequirement;
use crate::session::{SessionAccessor, SessionSource};

/// Message rendered by a forbidden guard with no fallback.
pub const DEFAULT_DENIAL_MESSAGE: &str = "No tenés permisos para acceder a esta página.";

/// Client-side navigation primitive.
pub trait Navigator {
    /// Requests navigation to `path`.
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, path: &str) {
        self(path);
    }
}

/// Navigator that only records the requested paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    pub redirects: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.redirects.push(path.to_string());
    }
}

/// Paths the guard redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardRoutes {
    /// Where signed-out users are sent.
    pub login: String,

    /// Default authenticated landing page, where forbidden users are sent.
    pub landing: String,
}

impl Default for GuardRoutes {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            landing: "/dashboard".to_string(),
        }
    }
}

/// Decision state of a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardState {
    /// Session still resolving. No checks, no redirects.
    Loading,

    /// Resolved with nobody signed in.
    Unauthenticated,

    /// Signed in, but the required role or permission is missing.
    Forbidden,

    /// Signed in and every requirement holds.
    Authorized,
}

/// What a guard renders for the current pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<C> {
    /// Loading indicator.
    Loading,

    /// Nothing; a redirect to login is under way.
    Redirecting,

    /// Default denial message; a redirect to the landing page is under way.
    Denied(&'static str),

    /// Caller-supplied fallback for the forbidden state.
    Fallback(C),

    /// The protected content.
    Children(C),
}

impl<C> GuardView<C> {
    /// Returns the rendered content, if any.
    pub fn into_content(self) -> Option<C> {
        match self {
            GuardView::Fallback(c) | GuardView::Children(c) => Some(c),
            _ => None,
        }
    }
}

/// Guard wrapping one protected page.
#[derive(Debug, Clone)]
pub struct RouteGuard<C> {
    routes: GuardRoutes,
    required_role: Option<String>,
    required_permission: Option<PermissionRequirement>,
    fallback: Option<C>,
    state: Option<GuardState>,
    in_flight: Option<String>,
}

impl<C: Clone> RouteGuard<C> {
    /// Creates a guard that only requires a signed-in user.
    pub fn new(routes: GuardRoutes) -> Self {
        Self {
            routes,
            required_role: None,
            required_permission: None,
            fallback: None,
            state: None,
            in_flight: None,
        }
    }

    /// Requires an exact role.
    pub fn with_required_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = Some(role.into());
        self
    }

    /// Requires a permission.
    pub fn with_required_permission(mut self, requirement: PermissionRequirement) -> Self {
        self.required_permission = Some(requirement);
        self
    }

    /// Content rendered instead of the default denial message.
    pub fn with_fallback(mut self, fallback: C) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Changes the required role. Takes effect on the next render.
    pub fn set_required_role(&mut self, role: Option<String>) {
        self.required_role = role;
    }

    /// Changes the required permission. Takes effect on the next render.
    pub fn set_required_permission(&mut self, requirement: Option<PermissionRequirement>) {
        self.required_permission = requirement;
    }

    /// Returns the state reached by the last render.
    pub fn state(&self) -> Option<GuardState> {
        self.state
    }

    /// Forgets the state and any in-flight redirect, as on a fresh mount.
    pub fn reset(&mut self) {
        self.state = None;
        self.in_flight = None;
    }

    /// Computes the state for a session without side effects.
    pub fn evaluate<S>(&self, authorizer: &Authorizer, source: &S) -> GuardState
    where
        S: SessionSource + ?Sized,
    {
        let session = source.session();
        let accessor = SessionAccessor::new(session);

        if accessor.is_loading() {
            return GuardState::Loading;
        }

        if !accessor.is_authenticated() {
            return GuardState::Unauthenticated;
        }

        if self
            .required_role
            .as_deref()
            .is_some_and(|required| required != accessor.role())
        {
            return GuardState::Forbidden;
        }

        let perms = authorizer.for_session(session);
        if !self.requirement_holds(&perms) {
            return GuardState::Forbidden;
        }

        GuardState::Authorized
    }

    /// Renders one pass of the guard.
    ///
    /// `children` is only invoked when the guard is authorized.
    pub fn render<S, N, F>(
        &mut self,
        authorizer: &Authorizer,
        source: &S,
        navigator: &mut N,
        children: F,
    ) -> GuardView<C>
    where
        S: SessionSource + ?Sized,
        N: Navigator + ?Sized,
        F: FnOnce() -> C,
    {
        let next = self.evaluate(authorizer, source);
        let previous = self.state.replace(next);

        if previous != Some(next) {
            debug!(from = ?previous, to = ?next, "Route guard transition");

            match next {
                GuardState::Unauthenticated => {
                    let target = self.routes.login.clone();
                    self.redirect(navigator, target, next);
                }
                GuardState::Forbidden => {
                    let target = self.routes.landing.clone();
                    self.redirect(navigator, target, next);
                }
                GuardState::Authorized => self.in_flight = None,
                GuardState::Loading => {}
            }
        }

        match next {
            GuardState::Loading => GuardView::Loading,
            GuardState::Unauthenticated => GuardView::Redirecting,
            GuardState::Forbidden => match &self.fallback {
                Some(fallback) => GuardView::Fallback(fallback.clone()),
                None => GuardView::Denied(DEFAULT_DENIAL_MESSAGE),
            },
            GuardState::Authorized => GuardView::Children(children()),
        }
    }

    fn requirement_holds(&self, perms: &Permissions<'_>) -> bool {
        self.required_permission
            .as_ref()
            .is_none_or(|req| perms.has_permission(&req.entity, &req.action))
    }

    fn redirect<N>(&mut self, navigator: &mut N, target: String, state: GuardState)
    where
        N: Navigator + ?Sized,
    {
        if self.in_flight.as_deref() == Some(target.as_str()) {
            debug!(target_path = %target, "Redirect already in flight");
            return;
        }

        info!(
            target_path = %target,
            state = ?state,
            required_role = ?self.required_role,
            required_permission = ?self.required_permission,
            "Route guard redirect"
        );
        navigator.navigate(&target);
        self.in_flight = Some(target);
    }
}
