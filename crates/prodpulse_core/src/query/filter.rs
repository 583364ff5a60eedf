//! Field constraints rendered to SQL predicates.
//!
//! # Invariants
//! - Constraints are combined with `AND`; bind order matches placeholder
//!   order in the rendered fragment.
//! - An empty set renders nothing (no `WHERE`).

use super::QueryField;
use rusqlite::types::Value;

/// Comparison operator supported by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact match.
    Eq,
    /// Greater-or-equal, used by the minimum-score search.
    Gte,
}

impl FilterOp {
    fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gte => ">=",
        }
    }
}

/// One field constraint.
#[derive(Debug, Clone)]
pub struct Filter<F> {
    pub field: F,
    pub op: FilterOp,
    pub value: Value,
}

/// AND-combined set of field constraints. Empty means unfiltered.
#[derive(Debug, Clone)]
pub struct FilterSet<F> {
    filters: Vec<Filter<F>>,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<F: QueryField> FilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint with an explicit operator.
    pub fn push(&mut self, field: F, op: FilterOp, value: impl Into<Value>) {
        self.filters.push(Filter {
            field,
            op,
            value: value.into(),
        });
    }

    /// Adds an equality constraint.
    pub fn eq(&mut self, field: F, value: impl Into<Value>) {
        self.push(field, FilterOp::Eq, value);
    }

    /// Adds a greater-or-equal constraint.
    pub fn gte(&mut self, field: F, value: impl Into<Value>) {
        self.push(field, FilterOp::Gte, value);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Renders the ` WHERE ...` fragment and its bind values.
    ///
    /// Returns an empty string and no binds for an empty set. The same
    /// fragment is used for the page select and the count query, which
    /// keeps their predicates identical by construction.
    pub fn where_clause(&self) -> (String, Vec<Value>) {
        if self.filters.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut sql = String::from(" WHERE ");
        let mut binds = Vec::with_capacity(self.filters.len());
        for (index, filter) in self.filters.iter().enumerate() {
            if index > 0 {
                sql.push_str(" AND ");
            }
            sql.push_str(filter.field.column());
            sql.push(' ');
            sql.push_str(filter.op.sql());
            sql.push_str(" ?");
            binds.push(filter.value.clone());
        }

        (sql, binds)
    }
}
