//! Core domain logic for prodpulse.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::product::ProductHealth;
pub use query::{
    Filter, FilterOp, FilterSet, Page, PagedResult, QueryError, QueryField, SortDirection,
    SortKey, SortSpec,
};
pub use repo::product_repo::{
    ProductField, ProductHealthRepository, SqliteProductHealthRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::product_service::ProductHealthService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
