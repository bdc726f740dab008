//! Shared session state and its transitions.
//!
//! One `RwSignal<SessionState>` is created in `App` and provided via
//! context; it lives for the whole page session. The async operations
//! here are the only writers. Overlapping `refresh` calls are allowed
//! to race: each completion replaces the state wholesale, so the last
//! writer wins without partial updates.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::auth::SessionApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Identity, Role};

/// Session state visible to every UI consumer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The resolved user, or `None` when signed out.
    pub identity: Option<Identity>,
    /// True strictly between the start and completion of an identity fetch.
    pub loading: bool,
    /// User-facing message from the last failed identity fetch.
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_patient(&self) -> bool {
        self.identity.as_ref().is_some_and(|id| id.role == Role::Patient)
    }

    pub fn is_doctor(&self) -> bool {
        self.identity.as_ref().is_some_and(|id| id.role == Role::Doctor)
    }

    /// The settled state after an identity fetch. A failure leaves no
    /// identity behind, only its message.
    fn settled(result: Result<Identity, ApiError>) -> Self {
        match result {
            Ok(identity) => Self { identity: Some(identity), loading: false, error: None },
            Err(err) => Self { identity: None, loading: false, error: Some(err.to_string()) },
        }
    }
}

/// Re-derive the session from the stored token.
///
/// Without a token this settles to signed-out immediately, no request
/// sent. Otherwise the identity endpoint decides: success installs the
/// identity, and any failure is treated as session invalidation. The
/// token is cleared along with the identity, so a stale credential never
/// outlives the fetch that exposed it.
pub async fn refresh(session: RwSignal<SessionState>, api: &impl SessionApi) {
    if !api.has_token() {
        session.update(|s| {
            s.identity = None;
            s.loading = false;
        });
        return;
    }

    session.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = api.fetch_identity().await;
    if let Err(err) = &result {
        leptos::logging::warn!("identity refresh failed: {err}");
        api.logout();
    }
    session.update(|s| *s = SessionState::settled(result));
}

/// Sign in and install the freshly fetched identity.
///
/// The busy flag covers the whole exchange, the login call plus the
/// canonical identity fetch behind it. A failed attempt propagates
/// without disturbing whatever identity and error were already visible.
pub async fn login(
    session: RwSignal<SessionState>,
    api: &impl SessionApi,
    credentials: &Credentials,
) -> Result<Identity, ApiError> {
    session.update(|s| s.loading = true);
    match api.login(credentials).await {
        Ok(identity) => {
            session.update(|s| {
                s.identity = Some(identity.clone());
                s.loading = false;
                s.error = None;
            });
            Ok(identity)
        }
        Err(err) => {
            session.update(|s| s.loading = false);
            Err(err)
        }
    }
}

/// Sign out: clear the token, then the visible session. Idempotent.
pub fn logout(session: RwSignal<SessionState>, api: &impl SessionApi) {
    api.logout();
    session.update(|s| {
        s.identity = None;
        s.error = None;
    });
}
