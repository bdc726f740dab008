//! Generic JSON request helper for the scheduling service.
//!
//! One shared code path attaches the bearer token and translates non-2xx
//! responses uniformly; the gateways are plain functions over this helper
//! rather than wrappers around their own fetch logic.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Outside the browser
//! every request fails as a transport error, mirroring how the rest of
//! the crate stubs browser-only code.
//!
//! A failure here is an [`HttpFailure`], not yet an [`ApiError`]: the
//! status/message pair means different things per endpoint (a 401 from
//! login is bad credentials, a 401 from a protected route is a dead
//! session), so each gateway picks the translation.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Base path of the scheduling API. The SPA is served behind the same
/// host as the service, so requests stay same-origin.
pub const API_BASE: &str = "/api";

/// Whether a request carries the stored bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Auth {
    Public,
    Bearer,
}

/// A failed request, before any endpoint-specific interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum HttpFailure {
    /// The request never produced a response, or the body did not parse.
    Transport(String),
    /// The service answered with a non-2xx status.
    Rejected { status: u16, message: Option<String> },
}

impl HttpFailure {
    /// Translation for token-protected endpoints: an authorization-class
    /// status means the stored token is no longer honored.
    pub(super) fn into_session_error(self) -> ApiError {
        match self {
            HttpFailure::Transport(msg) => ApiError::Network(msg),
            HttpFailure::Rejected { status: 401 | 403, .. } => ApiError::InvalidSession,
            HttpFailure::Rejected { status, message } => ApiError::Network(
                message.unwrap_or_else(|| format!("request failed with status {status}")),
            ),
        }
    }

    /// Translation for the login endpoint: any rejection is treated as
    /// bad credentials, carrying the service's message when present.
    pub(super) fn into_login_error(self) -> ApiError {
        match self {
            HttpFailure::Transport(msg) => ApiError::Network(msg),
            HttpFailure::Rejected { message, .. } => ApiError::InvalidCredentials(
                message.unwrap_or_else(|| "invalid email or password".to_owned()),
            ),
        }
    }

    /// Translation for the registration endpoints: rejections carry
    /// field-level messages from the service.
    pub(super) fn into_validation_error(self) -> ApiError {
        match self {
            HttpFailure::Transport(msg) => ApiError::Network(msg),
            HttpFailure::Rejected { message, .. } => ApiError::Validation(
                message.unwrap_or_else(|| "registration was rejected".to_owned()),
            ),
        }
    }
}

#[cfg(feature = "csr")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the stored bearer token, if any. A missing token is not an
/// error here; the service will answer 401 and the caller translates.
#[cfg(feature = "csr")]
fn attach_bearer(
    builder: gloo_net::http::RequestBuilder,
    auth: Auth,
) -> gloo_net::http::RequestBuilder {
    match (auth, super::token::read()) {
        (Auth::Bearer, Some(token)) => builder.header("Authorization", &format!("Bearer {token}")),
        _ => builder,
    }
}

/// Settle a sent request into a decoded body or an [`HttpFailure`].
#[cfg(feature = "csr")]
async fn settle<T: DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, HttpFailure> {
    let resp = sent.map_err(|e| HttpFailure::Transport(e.to_string()))?;
    if !resp.ok() {
        let message = resp
            .json::<super::types::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(HttpFailure::Rejected { status: resp.status(), message });
    }
    resp.json::<T>().await.map_err(|e| HttpFailure::Transport(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> HttpFailure {
    HttpFailure::Transport("not available outside the browser".to_owned())
}

/// `GET` a protected endpoint and decode the JSON body.
pub(super) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, HttpFailure> {
    #[cfg(feature = "csr")]
    {
        let builder = attach_bearer(gloo_net::http::Request::get(&url(path)), Auth::Bearer);
        settle(builder.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(unavailable())
    }
}

/// `POST` a JSON body and decode the JSON response.
pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, HttpFailure> {
    #[cfg(feature = "csr")]
    {
        let builder = attach_bearer(gloo_net::http::Request::post(&url(path)), auth);
        let request = builder.json(body).map_err(|e| HttpFailure::Transport(e.to_string()))?;
        settle(request.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, auth);
        Err(unavailable())
    }
}

/// `PUT` a JSON body to a protected endpoint and decode the response.
pub(super) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, HttpFailure> {
    #[cfg(feature = "csr")]
    {
        let builder = attach_bearer(gloo_net::http::Request::put(&url(path)), Auth::Bearer);
        let request = builder.json(body).map_err(|e| HttpFailure::Transport(e.to_string()))?;
        settle(request.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(unavailable())
    }
}

/// `PUT` with no body, for endpoints that act on the path alone.
pub(super) async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, HttpFailure> {
    #[cfg(feature = "csr")]
    {
        let builder = attach_bearer(gloo_net::http::Request::put(&url(path)), Auth::Bearer);
        settle(builder.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(unavailable())
    }
}
