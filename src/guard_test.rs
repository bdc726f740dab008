use std::cell::Cell;

use futures::executor::block_on;

use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        role,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

struct FakeApi {
    token: Cell<bool>,
    identity: Result<Identity, ApiError>,
    fetches: Cell<usize>,
}

impl FakeApi {
    fn new(token: bool, identity: Result<Identity, ApiError>) -> Self {
        Self { token: Cell::new(token), identity, fetches: Cell::new(0) }
    }
}

impl SessionApi for FakeApi {
    fn has_token(&self) -> bool {
        self.token.get()
    }

    fn logout(&self) {
        self.token.set(false);
    }

    async fn fetch_identity(&self) -> Result<Identity, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        self.identity.clone()
    }

    async fn login(
        &self,
        _credentials: &crate::net::types::Credentials,
    ) -> Result<Identity, ApiError> {
        unreachable!("the guard never logs in")
    }
}

// =============================================================
// Rules 1–3: no network needed
// =============================================================

#[test]
fn public_routes_are_always_allowed() {
    // Regardless of token or identity state.
    for (token, result) in [
        (false, Err(ApiError::Unauthenticated)),
        (true, Ok(identity(Role::Patient))),
        (true, Err(ApiError::InvalidSession)),
    ] {
        let api = FakeApi::new(token, result);
        assert_eq!(block_on(evaluate(RouteMeta::PUBLIC, &api)), GuardOutcome::Allow);
        assert_eq!(api.fetches.get(), 0);
    }
}

#[test]
fn guarded_routes_without_a_token_redirect_to_login() {
    let api = FakeApi::new(false, Ok(identity(Role::Doctor)));
    let meta = RouteMeta::for_role(Role::Doctor);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::RedirectToLogin);
    // Settled from token presence alone.
    assert_eq!(api.fetches.get(), 0);
}

#[test]
fn authenticated_routes_without_a_role_constraint_skip_the_fetch() {
    let api = FakeApi::new(true, Err(ApiError::InvalidSession));
    let meta = RouteMeta { requires_auth: true, requires_role: None };
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::Allow);
    assert_eq!(api.fetches.get(), 0);
}

// =============================================================
// Rule 4: role checks
// =============================================================

#[test]
fn matching_role_is_allowed() {
    let api = FakeApi::new(true, Ok(identity(Role::Doctor)));
    let meta = RouteMeta::for_role(Role::Doctor);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::Allow);
    assert_eq!(api.fetches.get(), 1);
}

#[test]
fn wrong_role_redirects_home_and_keeps_the_session() {
    let api = FakeApi::new(true, Ok(identity(Role::Doctor)));
    let meta = RouteMeta::for_role(Role::Patient);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::RedirectToHome);
    // A mismatch is not an auth failure: the token survives.
    assert!(api.has_token());
}

#[test]
fn patient_reaching_a_doctor_route_redirects_home() {
    let api = FakeApi::new(true, Ok(identity(Role::Patient)));
    let meta = RouteMeta::for_role(Role::Doctor);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::RedirectToHome);
}

#[test]
fn failed_role_check_clears_the_token_and_redirects_to_login() {
    let api = FakeApi::new(true, Err(ApiError::InvalidSession));
    let meta = RouteMeta::for_role(Role::Patient);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::RedirectToLogin);
    assert!(!api.has_token());
}

#[test]
fn network_failure_during_a_role_check_is_treated_like_an_expired_session() {
    let api = FakeApi::new(true, Err(ApiError::Network("timeout".to_owned())));
    let meta = RouteMeta::for_role(Role::Doctor);
    assert_eq!(block_on(evaluate(meta, &api)), GuardOutcome::RedirectToLogin);
    assert!(!api.has_token());
}

#[test]
fn role_check_asks_the_service_every_time() {
    let api = FakeApi::new(true, Ok(identity(Role::Patient)));
    let meta = RouteMeta::for_role(Role::Patient);
    block_on(evaluate(meta, &api));
    block_on(evaluate(meta, &api));
    // Freshness over round-trips: no caching between transitions.
    assert_eq!(api.fetches.get(), 2);
}
