//! Wire types shared with the scheduling service.
//!
//! All request and response bodies are JSON. Field names follow the
//! service's camelCase convention via serde renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The two user roles recognized by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }
}

/// The resolved user record behind the current token.
///
/// Never persisted: it is re-derived from `GET /user/me` on every page
/// load and on every guarded role check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    /// Some service builds report this field as `userType`.
    #[serde(alias = "userType")]
    pub role: Role,
    pub name: String,
    pub email: String,
}

/// Login form payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response; only the token is used. Role and profile
/// data always come from the identity endpoint instead.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Patient registration payload for `POST /user/patient`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Doctor registration payload for `POST /user/doctor`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoctorRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialty: String,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// A doctor entry from `GET /user/doctors`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

/// A patient entry from `GET /user/patients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// An appointment slot. Free until a patient books it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub doctor_id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    /// ISO-8601 start of the slot, as reported by the service.
    pub starts_at: String,
}

impl Slot {
    pub fn is_booked(&self) -> bool {
        self.patient_id.is_some()
    }
}

/// Payload for publishing new slots via `POST /schedule`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSlot {
    pub doctor_id: String,
    pub starts_at: String,
}

/// Payload for rescheduling an existing slot via `PUT /schedule/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotUpdate {
    pub starts_at: String,
}
