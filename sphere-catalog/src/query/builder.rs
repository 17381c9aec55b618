//! Fluent query construction

use super::filters::{Filter, FilterValue};
use super::orderby::OrderBy;
use super::query::Query;

/// Fluent builder for [`Query`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            query: Query::new(table),
        }
    }

    /// Set the projection, including embedded joins.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.query.select = Some(columns.into());
        self
    }

    /// Add an arbitrary predicate.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filters.push(filter);
        self
    }

    /// Add an equality predicate.
    pub fn eq(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filter(Filter::eq(field, value))
    }

    /// Add an inequality predicate.
    pub fn ne(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filter(Filter::ne(field, value))
    }

    /// Add a case-insensitive substring predicate.
    pub fn ilike(self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.filter(Filter::ilike(field, needle))
    }

    /// Add a disjunction of predicates.
    pub fn or(self, filters: Vec<Filter>) -> Self {
        self.filter(Filter::Or(filters))
    }

    /// Order results ascending by a field.
    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.query.order_by = Some(OrderBy::asc(field));
        self
    }

    /// Order results descending by a field.
    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.query.order_by = Some(OrderBy::desc(field));
        self
    }

    /// Cap the number of returned records.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}
