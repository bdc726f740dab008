//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session triple (identity / loading / error) is the one piece of
//! state every page consumes, so it lives in a single signal created at
//! application start and provided via context, not in module globals.

pub mod session;
