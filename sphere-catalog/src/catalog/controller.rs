//! Catalog refresh orchestration
//!
//! One controller instance serves one catalog surface. Filter changes can
//! arrive faster than fetches complete, so every refresh takes a ticket from
//! a monotonic counter at issue time; when its fetch settles, a refresh
//! whose ticket is no longer the latest issued discards its result instead
//! of rendering it. A slower, earlier refresh can therefore never overwrite
//! a later one's output, regardless of completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Value, json};

use super::filter::CatalogFilter;
use super::listing::ServiceListing;
use super::normalize::{normalize, normalize_all};
use super::render::{RenderResult, render};
use super::{SERVICES_SELECT, SERVICES_TABLE};
use crate::error::CatalogError;
use crate::notify::{NotificationSink, Severity};
use crate::store::DataStore;

/// How many listings the featured / related strips show.
const STRIP_LIMIT: usize = 3;

/// Orchestrates filter → query → fetch → normalize → render.
pub struct CatalogController<S, N> {
    store: Arc<S>,
    notifier: Arc<N>,
    /// Latest issued refresh ticket. Owned exclusively by this controller
    /// and bumped only at refresh-issue time.
    seq: AtomicU64,
}

impl<S: DataStore, N: NotificationSink> CatalogController<S, N> {
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self {
            store,
            notifier,
            seq: AtomicU64::new(0),
        }
    }

    /// Refresh the catalog for a filter selection.
    ///
    /// Returns the render result for the UI, or [`CatalogError::Stale`] when
    /// a newer refresh was issued while this one's fetch was in flight.
    /// Stale results are discarded, not rendered, and carry no user-facing
    /// meaning. A fetch failure is recovered locally: the fetch-failure
    /// empty-state comes back as a normal result and the notification sink
    /// is told, so the caller renders exactly what it receives.
    pub async fn refresh(&self, filter: &CatalogFilter) -> Result<RenderResult, CatalogError> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let query = filter.to_query();
        log::debug!("refresh #{}: querying {}", ticket, query.table);

        let fetched = self.store.query(&query).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            log::debug!("refresh #{}: superseded, discarding result", ticket);
            return Err(CatalogError::Stale);
        }

        let records = match fetched {
            Ok(records) => records,
            Err(failure) => {
                log::error!("refresh #{}: fetch failed: {}", ticket, failure);
                self.notifier.notify("Error loading services", Severity::Danger);
                return Ok(RenderResult::fetch_failed());
            }
        };

        Ok(render(&normalize_all(&records)))
    }

    /// The newest active listings, for the landing-page strip.
    pub async fn featured(&self) -> RenderResult {
        self.strip(None).await
    }

    /// Other active listings shown under a detail page, excluding the
    /// listing being viewed.
    pub async fn more_services(&self, exclude_id: &str) -> RenderResult {
        self.strip(Some(exclude_id)).await
    }

    async fn strip(&self, exclude_id: Option<&str>) -> RenderResult {
        let mut builder = crate::query::Query::builder(SERVICES_TABLE)
            .select(SERVICES_SELECT)
            .eq("is_active", true)
            .order_desc("created_at")
            .limit(STRIP_LIMIT);
        if let Some(id) = exclude_id {
            builder = builder.ne("id", id);
        }

        match self.store.query(&builder.build()).await {
            Ok(records) => render(&normalize_all(&records)),
            Err(failure) => {
                log::error!("listing strip fetch failed: {}", failure);
                RenderResult::fetch_failed()
            }
        }
    }

    /// Fetch one listing for its detail page, bumping the view counter as a
    /// best-effort side effect.
    pub async fn service_detail(&self, id: &str) -> Result<ServiceListing, CatalogError> {
        let record = self
            .store
            .get(SERVICES_TABLE, id)
            .await
            .map_err(|failure| CatalogError::FetchFailure(failure.message))?;
        let listing = normalize(&record)?;

        if let Err(failure) = self
            .store
            .rpc("increment_service_views", json!({ "service_uuid": id }))
            .await
        {
            log::warn!("view counter bump failed for {}: {}", id, failure);
        }

        Ok(listing)
    }

    /// Record that a buyer reached out about a listing. Best-effort.
    pub async fn record_contact(&self, id: &str) {
        if let Err(failure) = self
            .store
            .rpc("increment_contact_count", json!({ "service_uuid": id }))
            .await
        {
            log::warn!("contact counter bump failed for {}: {}", id, failure);
        }
    }

    /// Raw records for one seller, newest first.
    pub async fn user_listings(&self, user_id: &str) -> Result<Vec<ServiceListing>, CatalogError> {
        let query = crate::query::Query::builder(SERVICES_TABLE)
            .eq("user_id", user_id)
            .order_desc("created_at")
            .build();
        let records: Vec<Value> = self
            .store
            .query(&query)
            .await
            .map_err(|failure| CatalogError::FetchFailure(failure.message))?;
        Ok(normalize_all(&records))
    }
}
