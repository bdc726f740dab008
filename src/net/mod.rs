//! Network layer: wire types, the shared request helper, and the
//! gateways for auth and scheduling.
//!
//! DESIGN
//! ======
//! One generic helper (`http`) owns bearer attachment and non-2xx
//! translation; `auth` and `schedule` are thin sets of functions over it.
//! The token slot (`token`) is module-private: nothing outside this
//! layer can read or write the stored credential directly.

pub mod auth;
pub mod error;
pub mod http;
pub mod schedule;
pub mod types;

mod token;
