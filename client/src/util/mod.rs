//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod access;
pub mod auth;
pub mod qr;
pub mod share;
pub mod storage;
pub mod time;
pub mod validation;
pub mod wheel;
