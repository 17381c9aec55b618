//! Catalog filter and query building

use super::{SERVICES_SELECT, SERVICES_TABLE};
use crate::query::{Filter, Query};

/// Sentinel select-option value meaning "no constraint".
pub const FILTER_ALL: &str = "all";

/// User-selected constraints narrowing the catalog view.
///
/// The default value is the neutral filter: it matches every active listing.
/// Equality is structural, so UI layers can cheaply detect "filter
/// unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text search across title and description. Empty means no text
    /// constraint; surrounding whitespace is ignored.
    pub search: String,
    /// University name, or [`FILTER_ALL`].
    pub university: String,
    /// Category code, or [`FILTER_ALL`].
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            university: FILTER_ALL.to_string(),
            category: FILTER_ALL.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_university(mut self, university: impl Into<String>) -> Self {
        self.university = university.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// True when every constraint is in its "match everything" form.
    pub fn is_neutral(&self) -> bool {
        self.search.trim().is_empty()
            && !constrains(&self.university)
            && !constrains(&self.category)
    }

    /// Translate into the backend query for this filter.
    ///
    /// Pure: no side effects, no ambient state. Predicates combine with
    /// logical AND; the query is always scoped to active listings, newest
    /// first, so a neutral filter yields the whole active catalog.
    pub fn to_query(&self) -> Query {
        let mut builder = Query::builder(SERVICES_TABLE)
            .select(SERVICES_SELECT)
            .eq("is_active", true)
            .order_desc("created_at");

        let search = self.search.trim();
        if !search.is_empty() {
            builder = builder.or(vec![
                Filter::ilike("title", search),
                Filter::ilike("description", search),
            ]);
        }
        if constrains(&self.university) {
            builder = builder.eq("university", self.university.as_str());
        }
        if constrains(&self.category) {
            builder = builder.eq("category", self.category.as_str());
        }

        builder.build()
    }
}

fn constrains(value: &str) -> bool {
    !value.is_empty() && value != FILTER_ALL
}
