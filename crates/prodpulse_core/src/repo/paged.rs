//! Generic paginated fetch over a filtered, sorted table.
//!
//! # Responsibility
//! - Run the count + page query pair behind every paged listing.
//! - Keep pagination semantics identical for all record types.
//!
//! # Invariants
//! - The count query applies filters but never sort; ordering cannot
//!   change cardinality.
//! - Both queries render the same `WHERE` fragment from the same plan.
//! - A page past the last page returns empty items with correct totals.

use super::RepoResult;
use crate::query::{FilterSet, Page, PagedResult, QueryField, SortSpec};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

/// Fetches one page of records plus the authoritative total count.
///
/// Runs two statements against `conn`: an unbounded `COUNT(*)` with the
/// filter predicate, then the bounded page select with filter, sort and
/// `LIMIT`/`OFFSET`. No transaction spans the pair; a concurrent writer
/// may shift totals between the two reads (accepted weak-consistency
/// read).
pub fn fetch_page<T, F>(
    conn: &Connection,
    select_sql: &str,
    table: &str,
    filters: &FilterSet<F>,
    sort: &SortSpec<F>,
    page: Page,
    map_row: impl Fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<PagedResult<T>>
where
    F: QueryField,
{
    let (where_sql, binds) = filters.where_clause();

    let total_items = count_items(conn, table, &where_sql, &binds)?;

    let mut sql = format!("{select_sql}{where_sql}");
    sql.push_str(&sort.order_by_clause());
    sql.push_str(" LIMIT ? OFFSET ?");

    let mut page_binds = binds;
    page_binds.push(Value::from(page.limit()));
    page_binds.push(Value::from(page.offset()));

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(page_binds))?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(map_row(row)?);
    }

    Ok(PagedResult::new(items, page, total_items))
}

fn count_items(
    conn: &Connection,
    table: &str,
    where_sql: &str,
    binds: &[Value],
) -> RepoResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {table}{where_sql}");
    let mut stmt = conn.prepare(&sql)?;
    let count: i64 = stmt.query_row(params_from_iter(binds.iter().cloned()), |row| row.get(0))?;
    // COUNT(*) is non-negative by definition.
    Ok(u64::try_from(count).unwrap_or(0))
}
