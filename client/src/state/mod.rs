//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs wrapped in `RwSignal`s by pages. `auth` is shared app-wide
//! through context; the others are page-scoped. Transitions live on the
//! structs so they are testable without a reactive runtime.

pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod play;
