//! Navigation guard: decides every route transition.
//!
//! Each attempted transition is evaluated against the candidate route's
//! [`RouteMeta`] and settles to one of three outcomes. The rules run in
//! order, first match wins:
//!
//! 1. route is public → allow
//! 2. auth required, no token stored → redirect to login
//! 3. no role constraint → allow
//! 4. fetch the identity fresh; matching role → allow, wrong role →
//!    redirect home, fetch failure → clear the token and redirect to login
//!
//! The role check deliberately ignores the session store's cached
//! identity and asks the service again: a stale cached role must never
//! authorize a transition. A wrong-role user is sent home with no
//! explanation, matching the product's current behavior.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::{AuthGateway, SessionApi};
use crate::net::error::ApiError;
use crate::net::types::{Identity, Role};
use crate::routes;

/// Static access requirements attached to a route definition. Never
/// mutated at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_role: Option<Role>,
}

impl RouteMeta {
    /// No requirements; everyone may enter.
    pub const PUBLIC: Self = Self { requires_auth: false, requires_role: None };

    /// Requires a signed-in user of the given role.
    pub const fn for_role(role: Role) -> Self {
        Self { requires_auth: true, requires_role: Some(role) }
    }
}

/// How a guarded transition settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Result of the synchronous rules (1–3): either settled, or a role
/// check against the service is still needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precheck {
    Settled(GuardOutcome),
    CheckRole(Role),
}

/// Rules 1–3: everything decidable from the meta and token presence.
fn precheck(meta: RouteMeta, has_token: bool) -> Precheck {
    if !meta.requires_auth {
        return Precheck::Settled(GuardOutcome::Allow);
    }
    if !has_token {
        return Precheck::Settled(GuardOutcome::RedirectToLogin);
    }
    match meta.requires_role {
        None => Precheck::Settled(GuardOutcome::Allow),
        Some(role) => Precheck::CheckRole(role),
    }
}

/// Rule 4: settle a required-role check from the fetched identity.
fn role_outcome(required: Role, fetched: &Result<Identity, ApiError>) -> GuardOutcome {
    match fetched {
        Ok(identity) if identity.role == required => GuardOutcome::Allow,
        Ok(_) => GuardOutcome::RedirectToHome,
        Err(_) => GuardOutcome::RedirectToLogin,
    }
}

/// Evaluate one transition. Suspends only for the role-check fetch; a
/// fetch failure here is indistinguishable from an expired session, so
/// the token is cleared before redirecting.
pub async fn evaluate(meta: RouteMeta, api: &impl SessionApi) -> GuardOutcome {
    match precheck(meta, api.has_token()) {
        Precheck::Settled(outcome) => outcome,
        Precheck::CheckRole(required) => {
            let fetched = api.fetch_identity().await;
            if let Err(err) = &fetched {
                leptos::logging::warn!("role check failed: {err}");
                api.logout();
            }
            role_outcome(required, &fetched)
        }
    }
}

/// Wraps a routed page and applies the guard on entry.
///
/// Renders nothing while the check is in flight, the children once it
/// settles on `Allow`, and navigates away on either redirect outcome.
#[component]
pub fn Guarded(meta: RouteMeta, children: ChildrenFn) -> impl IntoView {
    let gateway = expect_context::<AuthGateway>();
    let navigate = use_navigate();

    let outcome = LocalResource::new(move || async move { evaluate(meta, &gateway).await });

    Effect::new(move || match outcome.get() {
        Some(GuardOutcome::RedirectToLogin) => {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
        Some(GuardOutcome::RedirectToHome) => {
            navigate(routes::HOME, NavigateOptions::default());
        }
        _ => {}
    });

    view! {
        {move || match outcome.get() {
            Some(GuardOutcome::Allow) => children().into_any(),
            _ => ().into_any(),
        }}
    }
}
