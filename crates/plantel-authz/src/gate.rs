//! Conditional controls and content.
//!
//! [`PermissionButton`] drops an interactive control entirely when its
//! permission is missing. [`PermissionGate`] hides arbitrary content behind a
//! permission plus an optional extra predicate, with an optional fallback.
//! Neither navigates.

use std::fmt;

use crate::authorizer::Permissions;
use crate::permissions::PermissionRequirement;

/// Control rendered only when its permission holds.
///
/// `P` carries the control's own props (label, variant, click handler id...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionButton<P> {
    pub required_permission: PermissionRequirement,
    pub props: P,
}

impl<P> PermissionButton<P> {
    /// Creates a control requiring `action` on `entity`.
    pub fn new(entity: impl Into<String>, action: impl Into<String>, props: P) -> Self {
        Self {
            required_permission: PermissionRequirement::new(entity, action),
            props,
        }
    }

    /// Returns whether the control is shown for this view.
    pub fn is_visible(&self, perms: &Permissions<'_>) -> bool {
        perms.has_permission(
            &self.required_permission.entity,
            &self.required_permission.action,
        )
    }

    /// Returns the control's props if it is shown, `None` if it is absent.
    pub fn render(&self, perms: &Permissions<'_>) -> Option<&P> {
        self.is_visible(perms).then_some(&self.props)
    }
}

/// What an extra predicate gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct GateContext<'a> {
    perms: &'a Permissions<'a>,
}

impl GateContext<'_> {
    /// Raw role of the current session.
    pub fn role(&self) -> &str {
        self.perms.user_role()
    }

    /// Same check as the gate's own requirement, for any other pair.
    pub fn has_permission(&self, entity: &str, action: &str) -> bool {
        self.perms.has_permission(entity, action)
    }
}

type ExtraPredicate = Box<dyn Fn(&GateContext<'_>) -> bool + Send + Sync>;

/// Content rendered only when a permission and an optional predicate hold.
pub struct PermissionGate<C> {
    required_permission: PermissionRequirement,
    extra_predicate: Option<ExtraPredicate>,
    fallback: Option<C>,
}

impl<C: Clone> PermissionGate<C> {
    /// Creates a gate requiring `action` on `entity`.
    pub fn new(entity: impl Into<String>, action: impl Into<String>) -> Self {
        Self::requiring(PermissionRequirement::new(entity, action))
    }

    /// Creates a gate from a requirement.
    pub fn requiring(required_permission: PermissionRequirement) -> Self {
        Self {
            required_permission,
            extra_predicate: None,
            fallback: None,
        }
    }

    /// Adds a predicate that must also pass. Only consulted once the
    /// permission itself holds.
    ///
    /// Repeated calls accumulate: every predicate added must pass.
    pub fn with_extra_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&GateContext<'_>) -> bool + Send + Sync + 'static,
    {
        let combined: ExtraPredicate = match self.extra_predicate.take() {
            Some(previous) => {
                Box::new(move |ctx: &GateContext<'_>| previous(ctx) && predicate(ctx))
            }
            None => Box::new(predicate),
        };
        self.extra_predicate = Some(combined);
        self
    }

    /// Content rendered when the gate is closed.
    pub fn with_fallback(mut self, fallback: C) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns whether the gate is open for this view.
    pub fn allows(&self, perms: &Permissions<'_>) -> bool {
        if !perms.has_permission(
            &self.required_permission.entity,
            &self.required_permission.action,
        ) {
            return false;
        }

        let ctx = GateContext { perms };
        self.extra_predicate
            .as_ref()
            .is_none_or(|predicate| predicate(&ctx))
    }

    /// Renders the children, the fallback, or nothing.
    ///
    /// `children` is only invoked when the gate is open.
    pub fn render<F>(&self, perms: &Permissions<'_>, children: F) -> Option<C>
    where
        F: FnOnce() -> C,
    {
        if self.allows(perms) {
            Some(children())
        } else {
            self.fallback.clone()
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for PermissionGate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionGate")
            .field("required_permission", &self.required_permission)
            .field("extra_predicate", &self.extra_predicate.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}
