use super::*;

fn rejected(status: u16, message: Option<&str>) -> HttpFailure {
    HttpFailure::Rejected { status, message: message.map(str::to_owned) }
}

// =============================================================
// Session-error translation (protected endpoints)
// =============================================================

#[test]
fn unauthorized_statuses_become_invalid_session() {
    assert_eq!(rejected(401, Some("expired")).into_session_error(), ApiError::InvalidSession);
    assert_eq!(rejected(403, None).into_session_error(), ApiError::InvalidSession);
}

#[test]
fn other_rejections_surface_the_server_message() {
    assert_eq!(
        rejected(500, Some("database down")).into_session_error(),
        ApiError::Network("database down".to_owned())
    );
}

#[test]
fn rejections_without_a_message_fall_back_to_the_status() {
    assert_eq!(
        rejected(502, None).into_session_error(),
        ApiError::Network("request failed with status 502".to_owned())
    );
}

#[test]
fn transport_failures_are_network_errors() {
    let failure = HttpFailure::Transport("connection refused".to_owned());
    assert_eq!(failure.into_session_error(), ApiError::Network("connection refused".to_owned()));
}

// =============================================================
// Login and registration translations
// =============================================================

#[test]
fn login_rejections_become_invalid_credentials() {
    assert_eq!(
        rejected(401, Some("wrong password")).into_login_error(),
        ApiError::InvalidCredentials("wrong password".to_owned())
    );
    assert_eq!(
        rejected(400, None).into_login_error(),
        ApiError::InvalidCredentials("invalid email or password".to_owned())
    );
}

#[test]
fn login_transport_failures_stay_network_errors() {
    let failure = HttpFailure::Transport("timeout".to_owned());
    assert_eq!(failure.into_login_error(), ApiError::Network("timeout".to_owned()));
}

#[test]
fn registration_rejections_become_validation_errors() {
    assert_eq!(
        rejected(422, Some("email already in use")).into_validation_error(),
        ApiError::Validation("email already in use".to_owned())
    );
    assert_eq!(
        rejected(400, None).into_validation_error(),
        ApiError::Validation("registration was rejected".to_owned())
    );
}
