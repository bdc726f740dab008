//! Auth gateway: every identity-related call to the scheduling service.
//!
//! This is the only module that touches the token slot. It never mutates
//! session state itself; the store and the navigation guard apply their
//! own transitions from the results returned here.

use super::error::ApiError;
use super::http::{self, Auth};
use super::token;
use super::types::{
    Credentials, DoctorRegistration, Identity, LoginResponse, PatientRegistration,
};

/// Identity operations the session store and navigation guard depend on.
///
/// [`AuthGateway`] is the production implementation; tests script the
/// trait directly.
// Futures here are browser-local and never cross threads, so the
// implicit `Send` bound an async trait would normally want is unwanted.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Whether a token is stored. Says nothing about its validity.
    fn has_token(&self) -> bool;

    /// Clear the stored token. Idempotent, no network call.
    fn logout(&self);

    /// Resolve the identity behind the stored token from `GET /user/me`.
    async fn fetch_identity(&self) -> Result<Identity, ApiError>;

    /// Exchange credentials for a token, then resolve the identity.
    async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError>;
}

/// Stateless handle to the auth endpoints; all durable state lives in
/// the token slot. Constructed once in `App` and provided via context.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthGateway;

impl AuthGateway {
    pub fn new() -> Self {
        Self
    }

    /// Register a new patient account. Does not sign the new user in;
    /// no token is stored.
    pub async fn register_patient(
        &self,
        data: &PatientRegistration,
    ) -> Result<Identity, ApiError> {
        http::post_json("/user/patient", data, Auth::Public)
            .await
            .map_err(http::HttpFailure::into_validation_error)
    }

    /// Register a new doctor account. Does not sign the new user in.
    pub async fn register_doctor(&self, data: &DoctorRegistration) -> Result<Identity, ApiError> {
        http::post_json("/user/doctor", data, Auth::Public)
            .await
            .map_err(http::HttpFailure::into_validation_error)
    }
}

impl SessionApi for AuthGateway {
    fn has_token(&self) -> bool {
        token::read().is_some()
    }

    fn logout(&self) {
        token::clear();
    }

    async fn fetch_identity(&self) -> Result<Identity, ApiError> {
        // Short-circuit: without a token the service would only say 401.
        if !self.has_token() {
            return Err(ApiError::Unauthenticated);
        }
        http::get_json("/user/me").await.map_err(http::HttpFailure::into_session_error)
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let resp: LoginResponse = http::post_json("/auth/login", credentials, Auth::Public)
            .await
            .map_err(http::HttpFailure::into_login_error)?;
        token::write(&resp.token);

        // Role and profile data come from the canonical identity
        // endpoint, never from the login response body.
        match self.fetch_identity().await {
            Ok(identity) => Ok(identity),
            Err(err) => {
                // A token whose identity cannot be resolved is useless;
                // drop it rather than leaving it for the next refresh.
                token::clear();
                Err(err)
            }
        }
    }
}
