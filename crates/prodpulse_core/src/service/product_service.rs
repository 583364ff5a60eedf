//! Product health use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for surface crates.
//! - Translate caller-supplied field/direction names into typed plans.
//!
//! # Invariants
//! - Unknown field names fail before any SQL is issued.
//! - Service APIs never bypass repository contracts.
//! - The repository is injected at construction; no ambient lookups.

use crate::model::product::ProductHealth;
use crate::query::{parse_field, FilterSet, Page, PagedResult, SortDirection, SortSpec};
use crate::repo::product_repo::{ProductField, ProductHealthRepository};
use crate::repo::RepoResult;

/// Use-case service wrapper for product health operations.
pub struct ProductHealthService<R: ProductHealthRepository> {
    repo: R,
}

impl<R: ProductHealthRepository> ProductHealthService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new product health record.
    ///
    /// A record whose name is already taken is rejected with a duplicate
    /// error; existing data is never overwritten.
    pub fn save_product_health(&self, product: &ProductHealth) -> RepoResult<ProductHealth> {
        self.repo.save(product)
    }

    /// Runs an arbitrary filtered, sorted, paginated product query.
    pub fn query_products(
        &self,
        filters: &FilterSet<ProductField>,
        sort: &SortSpec<ProductField>,
        page: Page,
    ) -> RepoResult<PagedResult<ProductHealth>> {
        self.repo.find_page(filters, sort, page)
    }

    /// Finds products whose score is at least `min_health_score`.
    ///
    /// `sort_by` is an ordered list of `(field name, direction)` pairs;
    /// the first pair is the primary sort key. An empty `sort_by` leaves
    /// the page in storage-native order.
    pub fn find_by_min_health_score(
        &self,
        min_health_score: i64,
        page_number: i64,
        page_size: i64,
        sort_by: &[(String, String)],
    ) -> RepoResult<PagedResult<ProductHealth>> {
        let page = Page::new(page_number, page_size)?;

        let mut filters = FilterSet::new();
        filters.gte(ProductField::Score, min_health_score);

        let mut sort = SortSpec::new();
        for (field_name, direction) in sort_by {
            let field = parse_field::<ProductField>(field_name)?;
            sort.push(field, SortDirection::parse(direction));
        }

        self.repo.find_page(&filters, &sort, page)
    }

    /// Gets one record by product name.
    pub fn get_product_health(&self, product_name: &str) -> RepoResult<Option<ProductHealth>> {
        self.repo.get(product_name)
    }

    /// Deletes one record by product name.
    ///
    /// Returns the repository-level not-found error unchanged.
    pub fn delete_product_health(&self, product_name: &str) -> RepoResult<()> {
        self.repo.delete(product_name)
    }
}
