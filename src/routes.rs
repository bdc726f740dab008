//! Static route table: every navigable path and its access requirements.
//!
//! The table is data, not behavior: `App` wires each entry to its page
//! component, and the guard consults the attached [`RouteMeta`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::RouteMeta;
use crate::net::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER_PATIENT: &str = "/register/patient";
pub const REGISTER_DOCTOR: &str = "/register/doctor";
pub const PATIENT: &str = "/patient";
pub const DOCTOR: &str = "/doctor";

/// One route table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub meta: RouteMeta,
}

/// The full route table. Guarded routes declare `requires_auth` and the
/// role-specific pages pin `requires_role`.
pub const ROUTES: [RouteDef; 6] = [
    RouteDef { path: HOME, meta: RouteMeta::PUBLIC },
    RouteDef { path: LOGIN, meta: RouteMeta::PUBLIC },
    RouteDef { path: REGISTER_PATIENT, meta: RouteMeta::PUBLIC },
    RouteDef { path: REGISTER_DOCTOR, meta: RouteMeta::PUBLIC },
    RouteDef { path: PATIENT, meta: RouteMeta::for_role(Role::Patient) },
    RouteDef { path: DOCTOR, meta: RouteMeta::for_role(Role::Doctor) },
];

/// Access requirements for a path; unknown paths are treated as public
/// (the router's fallback page carries no privileged content).
pub fn meta_for(path: &str) -> RouteMeta {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map_or(RouteMeta::PUBLIC, |route| route.meta)
}
