//! Product health repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable write/read/query APIs over `product_health` rows.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Duplicate product names are rejected, never overwritten.
//! - Paged queries share one plan between the count and page fetches.

use crate::model::product::ProductHealth;
use crate::query::{FilterSet, Page, PagedResult, QueryField, SortSpec};
use crate::repo::paged::fetch_page;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PRODUCT_SELECT_SQL: &str = "SELECT product_name, health_score FROM product_health";
const PRODUCT_TABLE: &str = "product_health";

/// Queryable fields of [`ProductHealth`].
///
/// Both the entity property spelling (`healthScore`) and the column
/// spelling (`health_score`) are accepted; anything else is an unknown
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Score,
}

impl QueryField for ProductField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "productName" | "product_name" => Some(Self::Name),
            "healthScore" | "health_score" => Some(Self::Score),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Name => "product_name",
            Self::Score => "health_score",
        }
    }
}

/// Repository interface for product health records.
pub trait ProductHealthRepository {
    fn save(&self, product: &ProductHealth) -> RepoResult<ProductHealth>;
    fn get(&self, product_name: &str) -> RepoResult<Option<ProductHealth>>;
    fn delete(&self, product_name: &str) -> RepoResult<()>;
    fn find_page(
        &self,
        filters: &FilterSet<ProductField>,
        sort: &SortSpec<ProductField>,
        page: Page,
    ) -> RepoResult<PagedResult<ProductHealth>>;
}

/// SQLite-backed product health repository.
pub struct SqliteProductHealthRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductHealthRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductHealthRepository for SqliteProductHealthRepository<'_> {
    fn save(&self, product: &ProductHealth) -> RepoResult<ProductHealth> {
        let inserted = self.conn.execute(
            "INSERT INTO product_health (product_name, health_score) VALUES (?1, ?2);",
            params![product.product_name.as_str(), product.health_score],
        );

        match inserted {
            Ok(_) => Ok(product.clone()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::Duplicate(product.product_name.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get(&self, product_name: &str) -> RepoResult<Option<ProductHealth>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE product_name = ?1;"))?;

        let mut rows = stmt.query(params![product_name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn delete(&self, product_name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM product_health WHERE product_name = ?1;",
            params![product_name],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(product_name.to_string()));
        }

        Ok(())
    }

    fn find_page(
        &self,
        filters: &FilterSet<ProductField>,
        sort: &SortSpec<ProductField>,
        page: Page,
    ) -> RepoResult<PagedResult<ProductHealth>> {
        fetch_page(
            self.conn,
            PRODUCT_SELECT_SQL,
            PRODUCT_TABLE,
            filters,
            sort,
            page,
            parse_product_row,
        )
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<ProductHealth> {
    Ok(ProductHealth {
        product_name: row.get("product_name")?,
        health_score: row.get("health_score")?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
