//! Data store boundary
//!
//! The hosted backend owns persistence and row-level authorization; this
//! crate talks to it through the [`DataStore`] trait. [`RestStore`] speaks
//! the PostgREST dialect over HTTP; [`MemoryStore`] evaluates the same
//! queries against in-process fixture records and doubles as the test store.

pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::query::Query;

/// Failure reported by a data store. Carries a human-readable message only;
/// the catalog never branches on backend-specific error codes.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreFailure {
    pub message: String,
}

impl StoreFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreFailure {}

/// Client for the hosted relational store. Records cross this boundary as
/// raw JSON; normalization into the canonical listing shape happens in
/// [`crate::catalog`].
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Run a query and return the matching raw records.
    async fn query(&self, query: &Query) -> Result<Vec<Value>, StoreFailure>;

    /// Fetch a single record by id.
    async fn get(&self, table: &str, id: &str) -> Result<Value, StoreFailure>;

    /// Insert a record and return it as stored.
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreFailure>;

    /// Patch fields of an existing record and return the updated record.
    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreFailure>;

    /// Delete a record by id.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreFailure>;

    /// Invoke a named server-side function (counter bumps and the like).
    async fn rpc(&self, function: &str, params: Value) -> Result<(), StoreFailure>;
}
