//! Schedule and appointment endpoints.
//!
//! All of these are token-protected; a 401/403 surfaces as
//! [`ApiError::InvalidSession`] and pages fall back to the guard's
//! redirect behavior. The service spells the appointments path segment
//! "apointments"; the typo is part of the wire contract.

use super::error::ApiError;
use super::http::{self, HttpFailure};
use super::types::{DoctorSummary, NewSlot, PatientSummary, Slot, SlotUpdate};

/// List all registered doctors, for the patient's booking view.
pub async fn list_doctors() -> Result<Vec<DoctorSummary>, ApiError> {
    http::get_json("/user/doctors").await.map_err(HttpFailure::into_session_error)
}

/// List all registered patients, for the doctor's overview.
pub async fn list_patients() -> Result<Vec<PatientSummary>, ApiError> {
    http::get_json("/user/patients").await.map_err(HttpFailure::into_session_error)
}

/// All slots published by one doctor, booked or free.
pub async fn doctor_appointments(doctor_id: &str) -> Result<Vec<Slot>, ApiError> {
    http::get_json(&format!("/schedule/doctor/apointments/{doctor_id}"))
        .await
        .map_err(HttpFailure::into_session_error)
}

/// All slots booked by one patient.
pub async fn patient_appointments(patient_id: &str) -> Result<Vec<Slot>, ApiError> {
    http::get_json(&format!("/schedule/patient/apointments/{patient_id}"))
        .await
        .map_err(HttpFailure::into_session_error)
}

/// Publish a batch of free slots for the signed-in doctor.
pub async fn create_slots(slots: &[NewSlot]) -> Result<Vec<Slot>, ApiError> {
    http::post_json("/schedule", &slots, http::Auth::Bearer)
        .await
        .map_err(HttpFailure::into_session_error)
}

/// Move an existing slot to a new time.
pub async fn update_slot(id: &str, update: &SlotUpdate) -> Result<Slot, ApiError> {
    http::put_json(&format!("/schedule/{id}"), update)
        .await
        .map_err(HttpFailure::into_session_error)
}

/// Book a free slot for the signed-in patient.
pub async fn book_slot(slot_id: &str) -> Result<Slot, ApiError> {
    http::put_empty(&format!("/schedule/apointment/{slot_id}"))
        .await
        .map_err(HttpFailure::into_session_error)
}
