//! Routed pages.

pub mod doctor;
pub mod home;
pub mod login;
pub mod patient;
pub mod register;
