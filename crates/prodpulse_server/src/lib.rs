//! HTTP surface for prodpulse.
//!
//! # Responsibility
//! - Expose the product health REST endpoints over an embedded SQLite
//!   database.
//! - Keep route handlers thin: decode, delegate to the core service,
//!   encode.
//!
//! # Invariants
//! - Handlers never bypass the core service layer.
//! - Every failure maps to a distinct HTTP status with a JSON error body.

pub mod routes;
pub mod state;
