//! Networking modules for the CofferCard REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `client` owns bearer auth and token refresh
//! (coordinated by `refresh`), `session` persists credentials, `api` defines
//! the typed endpoints, and `types` the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod refresh;
pub mod session;
pub mod types;
