//! Query construction for the hosted data store
//!
//! Provides a fluent API for describing catalog queries. A [`Query`] is a
//! backend-neutral predicate set: the REST store translates it to
//! PostgREST-style query parameters, while the in-memory store evaluates the
//! same predicates directly against raw records, so both paths share one
//! filter semantics.

pub mod builder;
pub mod filters;
pub mod orderby;
pub mod query;

pub use builder::QueryBuilder;
pub use filters::{Filter, FilterValue};
pub use orderby::OrderBy;
pub use query::Query;
