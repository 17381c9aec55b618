//! In-memory data store
//!
//! Evaluates queries directly with [`Query::matches`], so fixture data goes
//! through exactly the same predicate semantics as the hosted path. Used for
//! demo catalogs and as the test double.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use serde_json::Value;

use super::{DataStore, StoreFailure};
use crate::query::Query;

/// Table-per-key in-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    rpc_calls: Mutex<Vec<(String, Value)>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with records, replacing any previous contents.
    pub fn with_table(self, table: impl Into<String>, records: Vec<Value>) -> Self {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(table.into(), records);
        self
    }

    /// RPC invocations observed so far, in call order.
    pub fn rpc_calls(&self) -> Vec<(String, Value)> {
        self.rpc_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut HashMap<String, Vec<Value>>) -> T) -> T {
        let mut tables = self
            .tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut tables)
    }
}

fn record_id(record: &Value) -> Option<String> {
    match record.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Compare two raw field values for ordering. Numbers compare numerically,
/// strings lexicographically (RFC 3339 timestamps sort correctly this way);
/// anything else is treated as equal.
fn compare_fields(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn query(&self, query: &Query) -> Result<Vec<Value>, StoreFailure> {
        self.with_tables(|tables| {
            let mut results: Vec<Value> = tables
                .get(&query.table)
                .map(|records| {
                    records
                        .iter()
                        .filter(|record| query.matches(record))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            if let Some(order_by) = &query.order_by {
                results.sort_by(|a, b| {
                    let ordering = compare_fields(
                        a.get(&order_by.field).unwrap_or(&Value::Null),
                        b.get(&order_by.field).unwrap_or(&Value::Null),
                    );
                    if order_by.descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                });
            }
            if let Some(limit) = query.limit {
                results.truncate(limit);
            }

            Ok(results)
        })
    }

    async fn get(&self, table: &str, id: &str) -> Result<Value, StoreFailure> {
        self.with_tables(|tables| {
            tables
                .get(table)
                .and_then(|records| {
                    records
                        .iter()
                        .find(|record| record_id(record).as_deref() == Some(id))
                        .cloned()
                })
                .ok_or_else(|| StoreFailure::new(format!("{}: no record with id {}", table, id)))
        })
    }

    async fn insert(&self, table: &str, mut record: Value) -> Result<Value, StoreFailure> {
        if record_id(&record).is_none() {
            if let Some(fields) = record.as_object_mut() {
                let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed) + 1;
                fields.insert("id".to_string(), Value::String(format!("svc-{}", id)));
            }
        }
        self.with_tables(|tables| {
            tables
                .entry(table.to_string())
                .or_default()
                .push(record.clone());
        });
        Ok(record)
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreFailure> {
        self.with_tables(|tables| {
            let records = tables
                .get_mut(table)
                .ok_or_else(|| StoreFailure::new(format!("no such table: {}", table)))?;
            let record = records
                .iter_mut()
                .find(|record| record_id(record).as_deref() == Some(id))
                .ok_or_else(|| {
                    StoreFailure::new(format!("{}: no record with id {}", table, id))
                })?;

            if let (Some(target), Some(fields)) = (record.as_object_mut(), patch.as_object()) {
                for (key, value) in fields {
                    target.insert(key.clone(), value.clone());
                }
            }
            Ok(record.clone())
        })
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreFailure> {
        self.with_tables(|tables| {
            if let Some(records) = tables.get_mut(table) {
                records.retain(|record| record_id(record).as_deref() != Some(id));
            }
            Ok(())
        })
    }

    async fn rpc(&self, function: &str, params: Value) -> Result<(), StoreFailure> {
        self.rpc_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((function.to_string(), params));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> MemoryStore {
        MemoryStore::new().with_table(
            "services",
            vec![
                json!({"id": "svc-1", "title": "Math tutoring", "category": "tutoring",
                       "is_active": true, "created_at": "2025-01-01T00:00:00Z"}),
                json!({"id": "svc-2", "title": "Web design", "category": "tech",
                       "is_active": true, "created_at": "2025-03-01T00:00:00Z"}),
                json!({"id": "svc-3", "title": "Old listing", "category": "tech",
                       "is_active": false, "created_at": "2025-02-01T00:00:00Z"}),
            ],
        )
    }

    #[tokio::test]
    async fn test_query_filters_sorts_and_limits() {
        let store = seeded();
        let query = Query::builder("services")
            .eq("is_active", true)
            .order_desc("created_at")
            .build();

        let records = store.query(&query).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], "svc-2");
        assert_eq!(records[1]["id"], "svc-1");

        let limited = store
            .query(&Query::builder("services").limit(1).build())
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_query_unknown_table_is_empty() {
        let store = MemoryStore::new();
        let records = store.query(&Query::new("nothing")).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_get_update_delete_roundtrip() {
        let store = seeded();

        let record = store.get("services", "svc-1").await.unwrap();
        assert_eq!(record["title"], "Math tutoring");

        let updated = store
            .update("services", "svc-1", json!({"title": "Advanced math tutoring"}))
            .await
            .unwrap();
        assert_eq!(updated["title"], "Advanced math tutoring");

        store.delete("services", "svc-1").await.unwrap();
        assert!(store.get("services", "svc-1").await.is_err());
    }

    #[tokio::test]
    async fn test_insert_assigns_id_when_missing() {
        let store = MemoryStore::new();
        let record = store
            .insert("services", json!({"title": "New"}))
            .await
            .unwrap();
        assert!(record_id(&record).is_some());
    }

    #[tokio::test]
    async fn test_rpc_calls_are_recorded() {
        let store = MemoryStore::new();
        store
            .rpc("increment_service_views", json!({"service_uuid": "svc-1"}))
            .await
            .unwrap();

        let calls = store.rpc_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "increment_service_views");
    }
}
