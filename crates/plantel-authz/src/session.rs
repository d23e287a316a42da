//! Session accessor.
//!
//! The session is owned by the external auth provider. This module only
//! reads the role out of it, and never triggers I/O doing so.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Resolution state of the ambient session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// The provider has not answered yet.
    Loading,

    /// Resolved with a signed-in user.
    Authenticated,

    /// Resolved with nobody signed in.
    Unauthenticated,
}

/// User record as delivered by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role string. Not validated by the provider.
    pub role: String,
}

impl SessionUser {
    /// Creates a user with only a role, for call sites that care about nothing else.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            role: role.into(),
        }
    }
}

/// Snapshot of the ambient session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

impl Session {
    /// Session that has not resolved yet.
    pub fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            user: None,
        }
    }

    /// Resolved session with nobody signed in.
    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
        }
    }

    /// Resolved session for a signed-in user.
    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
        }
    }

    /// Returns an accessor over this session.
    pub fn accessor(&self) -> SessionAccessor<'_> {
        SessionAccessor::new(self)
    }
}

/// Source of the current session, e.g. the auth provider's client state.
///
/// The authorizer and route guard read the session through this trait, so a
/// provider can be handed to them directly.
pub trait SessionSource {
    /// Returns the current session. Must not block or perform I/O.
    fn session(&self) -> &Session;
}

impl SessionSource for Session {
    fn session(&self) -> &Session {
        self
    }
}

/// Read-only view extracting "who is asking" from a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionAccessor<'a> {
    session: &'a Session,
}

impl<'a> SessionAccessor<'a> {
    /// Creates a new accessor.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the raw role, or `""` while loading or when signed out.
    pub fn role(&self) -> &'a str {
        match (self.session.status, &self.session.user) {
            (SessionStatus::Authenticated, Some(user)) => user.role.as_str(),
            _ => "",
        }
    }

    /// Returns the role narrowed to the known set.
    pub fn narrowed_role(&self) -> Option<Role> {
        Role::parse(self.role())
    }

    /// Returns whether the provider is still resolving the session.
    pub fn is_loading(&self) -> bool {
        self.session.status == SessionStatus::Loading
    }

    /// Returns whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.status == SessionStatus::Authenticated && self.session.user.is_some()
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&'a SessionUser> {
        if self.is_authenticated() {
            self.session.user.as_ref()
        } else {
            None
        }
    }
}
