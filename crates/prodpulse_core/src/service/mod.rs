//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep surface crates decoupled from storage details.

pub mod product_service;
