use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Which bottom-of-page branch a render should take.
///
/// A session that is still being resolved counts as `Unauthenticated`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    #[default]
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

impl From<bool> for AuthStatus {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Option<Session>>,
}

impl Auth {
    pub fn new(state: Signal<Option<Session>>) -> Self {
        Self { state }
    }

    pub fn login(&mut self, session: Session) {
        self.state.set(Some(session));
    }

    pub fn logout(&mut self) {
        self.state.set(None);
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn display_name(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.display_name.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_some()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus::from(self.is_logged_in())
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Reads the current status from the auth context, if one is provided.
/// Components rendered outside a provider see `Unauthenticated`.
pub fn use_auth_status() -> AuthStatus {
    try_use_context::<Auth>()
        .map(|auth| auth.status())
        .unwrap_or_default()
}
