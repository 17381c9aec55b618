//! # sphere-catalog
//!
//! Client-side catalog engine for the Student Sphere services marketplace.
//!
//! The hosted backend owns authentication, persistence, and row-level
//! authorization; this crate owns everything between a filter change and
//! the rendered card grid:
//!
//! - [`query`]: backend-neutral query descriptions with a fluent builder,
//!   translated to PostgREST parameters or evaluated in-memory.
//! - [`store`]: the [`DataStore`] boundary, with a REST implementation and
//!   an in-process fixture store sharing one predicate semantics.
//! - [`catalog`]: filter-to-query building, normalization of divergent raw
//!   record shapes into one canonical listing, card rendering with total
//!   field fallbacks, and the refresh controller that discards stale
//!   out-of-order fetch results.
//!
//! Notifications and auth are trait boundaries ([`NotificationSink`],
//! [`AuthProvider`]); the UI shell supplies both.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod query;
pub mod store;

pub use auth::AuthProvider;
pub use catalog::{
    CatalogController, CatalogFilter, FILTER_ALL, ListingDraft, ListingManager, RenderResult,
    Seller, ServiceCard, ServiceListing,
};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use notify::{LogNotifier, NotificationSink, Severity};
pub use query::{Filter, FilterValue, OrderBy, Query, QueryBuilder};
pub use store::{DataStore, MemoryStore, RestStore, StoreFailure};
