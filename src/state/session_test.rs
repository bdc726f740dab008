use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;
use futures::task::noop_waker;
use leptos::prelude::{GetUntracked, RwSignal};

use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        role,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

/// Future that parks exactly once before completing, so a test can poll
/// stepwise and observe state while the call is still in flight.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Scripted stand-in for the auth gateway: a boolean token slot plus a
/// canned identity-endpoint result.
struct FakeApi {
    token: Cell<bool>,
    identity: Result<Identity, ApiError>,
    login_error: Option<ApiError>,
    fetches: Cell<usize>,
    stall: bool,
}

impl FakeApi {
    fn new(token: bool, identity: Result<Identity, ApiError>) -> Self {
        Self {
            token: Cell::new(token),
            identity,
            login_error: None,
            fetches: Cell::new(0),
            stall: false,
        }
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
        if self.stall {
            YieldOnce(false).await;
        }
        self.fetches.set(self.fetches.get() + 1);
        self.identity.clone()
    }

    // Mirrors the gateway's sequence: store the token, resolve the
    // identity canonically, drop the token if that resolution fails.
    async fn login(&self, _credentials: &Credentials) -> Result<Identity, ApiError> {
        if let Some(err) = &self.login_error {
            return Err(err.clone());
        }
        self.token.set(true);
        match self.fetch_identity().await {
            Ok(identity) => Ok(identity),
            Err(err) => {
                self.token.set(false);
                Err(err)
            }
        }
    }
}

fn credentials() -> Credentials {
    Credentials { email: "ada@example.com".to_owned(), password: "hunter2".to_owned() }
}

// =============================================================
// Defaults and predicates
// =============================================================

#[test]
fn session_starts_signed_out() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn predicates_follow_the_identity_role() {
    let patient = SessionState { identity: Some(identity(Role::Patient)), ..Default::default() };
    assert!(patient.is_authenticated());
    assert!(patient.is_patient());
    assert!(!patient.is_doctor());

    let doctor = SessionState { identity: Some(identity(Role::Doctor)), ..Default::default() };
    assert!(doctor.is_doctor());
    assert!(!doctor.is_patient());
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_without_token_settles_signed_out_with_no_request() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(false, Err(ApiError::Unauthenticated));

    block_on(refresh(session, &api));

    let state = session.get_untracked();
    assert_eq!(state, SessionState::default());
    assert_eq!(api.fetches.get(), 0);
}

#[test]
fn refresh_installs_the_fetched_identity() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(true, Ok(identity(Role::Doctor)));

    block_on(refresh(session, &api));

    let state = session.get_untracked();
    assert!(state.is_doctor());
    assert!(!state.is_patient());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn refresh_failure_invalidates_the_session_and_clears_the_token() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(true, Err(ApiError::InvalidSession));

    block_on(refresh(session, &api));

    let state = session.get_untracked();
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert!(state.error.is_some());
    // The stale token must not survive the fetch that exposed it.
    assert!(!api.has_token());
}

#[test]
fn refresh_treats_network_failure_like_an_expired_session() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(true, Err(ApiError::Network("connection refused".to_owned())));

    block_on(refresh(session, &api));

    let state = session.get_untracked();
    assert!(state.identity.is_none());
    assert_eq!(state.error.as_deref(), Some("could not reach the server: connection refused"));
    assert!(!api.has_token());
}

#[test]
fn refresh_shows_loading_only_while_the_fetch_is_in_flight() {
    let session = RwSignal::new(SessionState::default());
    let mut api = FakeApi::new(true, Ok(identity(Role::Patient)));
    api.stall = true;

    let mut fut = Box::pin(refresh(session, &api));
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    // Parked inside the fetch: the busy window is open.
    assert!(fut.as_mut().poll(&mut cx).is_pending());
    let mid = session.get_untracked();
    assert!(mid.loading);
    assert!(mid.error.is_none());

    assert!(fut.as_mut().poll(&mut cx).is_ready());
    let done = session.get_untracked();
    assert!(!done.loading);
    assert!(done.is_patient());
}

#[test]
fn refresh_replaces_a_previous_identity_wholesale() {
    let session = RwSignal::new(SessionState {
        identity: Some(identity(Role::Patient)),
        loading: false,
        error: Some("old error".to_owned()),
    });
    let api = FakeApi::new(true, Ok(identity(Role::Doctor)));

    block_on(refresh(session, &api));

    let state = session.get_untracked();
    assert!(state.is_doctor());
    assert!(state.error.is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_round_trip_uses_the_identity_endpoint_role() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(false, Ok(identity(Role::Patient)));

    let returned = block_on(login(session, &api, &credentials())).expect("login");

    assert_eq!(returned.role, Role::Patient);
    // Exactly one identity fetch: the post-login canonical one.
    assert_eq!(api.fetches.get(), 1);

    let state = session.get_untracked();
    assert!(state.is_authenticated());
    assert!(state.is_patient());
    assert!(state.error.is_none());
}

#[test]
fn login_shows_loading_while_the_exchange_is_in_flight() {
    let session = RwSignal::new(SessionState::default());
    let mut api = FakeApi::new(false, Ok(identity(Role::Doctor)));
    api.stall = true;

    let credentials = credentials();
    let mut fut = Box::pin(login(session, &api, &credentials));
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert!(fut.as_mut().poll(&mut cx).is_pending());
    assert!(session.get_untracked().loading);

    assert!(fut.as_mut().poll(&mut cx).is_ready());
    let done = session.get_untracked();
    assert!(!done.loading);
    assert!(done.is_doctor());
}

#[test]
fn login_whose_identity_fetch_fails_leaves_no_token_behind() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(false, Err(ApiError::InvalidSession));

    let result = block_on(login(session, &api, &credentials()));

    assert!(result.is_err());
    // The token stored during the attempt must not survive it.
    assert!(!api.has_token());
    assert_eq!(session.get_untracked(), SessionState::default());
}

#[test]
fn failed_login_leaves_prior_state_untouched() {
    let prior = SessionState { identity: Some(identity(Role::Doctor)), ..Default::default() };
    let session = RwSignal::new(prior.clone());
    let mut api = FakeApi::new(true, Ok(identity(Role::Doctor)));
    api.login_error = Some(ApiError::InvalidCredentials("wrong password".to_owned()));

    let result = block_on(login(session, &api, &credentials()));

    assert_eq!(result, Err(ApiError::InvalidCredentials("wrong password".to_owned())));
    assert_eq!(session.get_untracked(), prior);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_identity_error_and_token() {
    let session = RwSignal::new(SessionState {
        identity: Some(identity(Role::Patient)),
        loading: false,
        error: Some("stale".to_owned()),
    });
    let api = FakeApi::new(true, Ok(identity(Role::Patient)));

    logout(session, &api);

    let state = session.get_untracked();
    assert!(state.identity.is_none());
    assert!(state.error.is_none());
    assert!(!api.has_token());
}

#[test]
fn logout_is_idempotent() {
    let session = RwSignal::new(SessionState::default());
    let api = FakeApi::new(true, Ok(identity(Role::Patient)));

    logout(session, &api);
    let once = session.get_untracked();
    logout(session, &api);
    let twice = session.get_untracked();

    assert_eq!(once, twice);
    assert!(twice.identity.is_none());
    assert!(twice.error.is_none());
}
