//! Reusable query description

use serde_json::Value;

use super::builder::QueryBuilder;
use super::filters::Filter;
use super::orderby::OrderBy;

/// A backend-neutral description of one catalog query.
///
/// Filters combine with logical AND; an empty filter list matches every
/// record in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table (collection) the query targets.
    pub table: String,
    /// Projection, including embedded joins (e.g. `*, profiles(...)`).
    /// `None` means the backend default of all columns.
    pub select: Option<String>,
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: None,
            filters: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Start building a query fluently.
    pub fn builder(table: impl Into<String>) -> QueryBuilder {
        QueryBuilder::new(table)
    }

    /// Evaluate all predicates against a raw record (AND semantics).
    pub fn matches(&self, record: &Value) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_list_matches_everything() {
        let query = Query::new("services");
        assert!(query.matches(&json!({"id": "svc-1"})));
        assert!(query.matches(&json!({})));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let query = Query::builder("services")
            .ilike("title", "tutoring")
            .eq("category", "tutoring")
            .build();

        assert!(query.matches(&json!({"title": "Math tutoring", "category": "tutoring"})));
        assert!(!query.matches(&json!({"title": "Math tutoring", "category": "tech"})));
        assert!(!query.matches(&json!({"title": "Web design", "category": "tutoring"})));
    }
}
