//! PostgREST-style HTTP store client
//!
//! Translates [`Query`] values into the query-parameter dialect used by
//! hosted Postgres platforms (`field=eq.value`, `or=(...)`, `order=`,
//! `limit=`) and maps HTTP failures into [`StoreFailure`] messages.

use async_trait::async_trait;
use serde_json::Value;

use super::{DataStore, StoreFailure};
use crate::config::CatalogConfig;
use crate::query::Query;

/// HTTP client for the hosted relational store.
#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl RestStore {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.config.base_url, function)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    async fn first_of(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<Value, StoreFailure> {
        let mut records: Vec<Value> = response.json().await?;
        if records.is_empty() {
            return Err(StoreFailure::new(format!("{}: no record returned", context)));
        }
        Ok(records.remove(0))
    }
}

/// Render a query as PostgREST query parameters, in a stable order.
fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(select) = &query.select {
        params.push(("select".to_string(), select.clone()));
    }
    for filter in &query.filters {
        params.push(filter.to_query_pair());
    }
    if let Some(order_by) = &query.order_by {
        params.push(("order".to_string(), order_by.to_param()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }

    params
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreFailure> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StoreFailure::new(format!("HTTP {}: {}", status, body)))
}

impl From<reqwest::Error> for StoreFailure {
    fn from(error: reqwest::Error) -> Self {
        StoreFailure::new(error.to_string())
    }
}

#[async_trait]
impl DataStore for RestStore {
    async fn query(&self, query: &Query) -> Result<Vec<Value>, StoreFailure> {
        let url = self.table_url(&query.table);
        let params = query_params(query);
        log::debug!("GET {} with {} params", url, params.len());

        let response = self
            .authed(self.http.get(&url))
            .query(&params)
            .send()
            .await?;
        let response = check_status(response).await?;
        let records = response.json().await?;
        Ok(records)
    }

    async fn get(&self, table: &str, id: &str) -> Result<Value, StoreFailure> {
        let response = self
            .authed(self.http.get(self.table_url(table)))
            .query(&[("id", format!("eq.{}", id)), ("limit", "1".to_string())])
            .send()
            .await?;
        let response = check_status(response).await?;
        self.first_of(response, table).await
    }

    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreFailure> {
        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?;
        let response = check_status(response).await?;
        self.first_of(response, table).await
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreFailure> {
        let response = self
            .authed(self.http.patch(self.table_url(table)))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        let response = check_status(response).await?;
        self.first_of(response, table).await
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreFailure> {
        let response = self
            .authed(self.http.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn rpc(&self, function: &str, params: Value) -> Result<(), StoreFailure> {
        let response = self
            .authed(self.http.post(self.rpc_url(function)))
            .json(&params)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_for_filtered_catalog_query() {
        let query = Query::builder("services")
            .select("*, profiles(full_name)")
            .eq("is_active", true)
            .ilike("title", "math")
            .order_desc("created_at")
            .limit(3)
            .build();

        assert_eq!(
            query_params(&query),
            vec![
                ("select".to_string(), "*, profiles(full_name)".to_string()),
                ("is_active".to_string(), "eq.true".to_string()),
                ("title".to_string(), "ilike.*math*".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
                ("limit".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_for_bare_query() {
        let query = Query::new("universities");
        assert!(query_params(&query).is_empty());
    }

    #[test]
    fn test_urls() {
        let store = RestStore::new(CatalogConfig::new("https://x.supabase.co/", "key"));
        assert_eq!(store.table_url("services"), "https://x.supabase.co/rest/v1/services");
        assert_eq!(
            store.rpc_url("increment_service_views"),
            "https://x.supabase.co/rest/v1/rpc/increment_service_views"
        );
    }
}
