//! Listing management flows
//!
//! Create, update, and delete for a seller's own listings. These are the
//! only flows that consult the auth provider; the catalog read path never
//! does. Row-level authorization stays the backend's job; this layer only
//! refuses to issue writes with no signed-in user.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};

use super::SERVICES_TABLE;
use super::listing::ServiceListing;
use super::normalize::normalize;
use crate::auth::AuthProvider;
use crate::error::CatalogError;
use crate::notify::{NotificationSink, Severity};
use crate::store::DataStore;

/// A new listing as entered by the seller, before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub university: String,
    pub location: String,
    pub image_url: Option<String>,
    pub payment_methods: Vec<String>,
}

/// Write-side companion to the catalog controller.
pub struct ListingManager<S, A, N> {
    store: Arc<S>,
    auth: Arc<A>,
    notifier: Arc<N>,
}

impl<S: DataStore, A: AuthProvider, N: NotificationSink> ListingManager<S, A, N> {
    pub fn new(store: Arc<S>, auth: Arc<A>, notifier: Arc<N>) -> Self {
        Self {
            store,
            auth,
            notifier,
        }
    }

    /// Create a listing owned by the current user, active immediately.
    pub async fn create_listing(&self, draft: &ListingDraft) -> Result<ServiceListing, CatalogError> {
        let Some(user_id) = self.auth.current_user_id().await else {
            self.notifier
                .notify("Please login to create a service", Severity::Warning);
            return Err(CatalogError::NotAuthenticated);
        };

        let record = json!({
            "user_id": user_id,
            "title": draft.title,
            "description": draft.description,
            "category": draft.category,
            "price": draft.price,
            "university": draft.university,
            "location": draft.location,
            "image_url": draft.image_url,
            "payment_methods": draft.payment_methods,
            "is_active": true,
        });

        let created = self.write(self.store.insert(SERVICES_TABLE, record).await)?;
        self.notifier
            .notify("Service created successfully!", Severity::Success);
        normalize(&created)
    }

    /// Patch fields of an existing listing.
    pub async fn update_listing(
        &self,
        id: &str,
        patch: Value,
    ) -> Result<ServiceListing, CatalogError> {
        let updated = self.write(self.store.update(SERVICES_TABLE, id, patch).await)?;
        self.notifier
            .notify("Service updated successfully!", Severity::Success);
        normalize(&updated)
    }

    /// Remove a listing entirely.
    pub async fn delete_listing(&self, id: &str) -> Result<(), CatalogError> {
        self.write(self.store.delete(SERVICES_TABLE, id).await)?;
        self.notifier
            .notify("Service deleted successfully!", Severity::Success);
        Ok(())
    }

    /// Surface a store failure as a danger notification before mapping it.
    fn write<T>(&self, result: Result<T, crate::store::StoreFailure>) -> Result<T, CatalogError> {
        result.map_err(|failure| {
            log::error!("listing write failed: {}", failure);
            self.notifier.notify(&failure.message, Severity::Danger);
            CatalogError::FetchFailure(failure.message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedAuth(Option<String>);

    #[async_trait]
    impl AuthProvider for FixedAuth {
        async fn current_user_id(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<(String, Severity)>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, message: &str, severity: Severity) {
            self.messages
                .lock()
                .unwrap()
                .push((message.to_string(), severity));
        }
    }

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Guitar lessons".to_string(),
            description: "Beginner friendly".to_string(),
            category: "tutoring".to_string(),
            price: 200.0,
            university: "UCT".to_string(),
            location: "UCT".to_string(),
            image_url: None,
            payment_methods: vec!["Cash".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_requires_authentication() {
        let sink = Arc::new(RecordingSink::default());
        let manager = ListingManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedAuth(None)),
            sink.clone(),
        );

        let result = manager.create_listing(&draft()).await;
        assert_eq!(result, Err(CatalogError::NotAuthenticated));

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].1, Severity::Warning);
    }

    #[tokio::test]
    async fn test_create_inserts_active_listing_for_current_user() {
        let store = Arc::new(MemoryStore::new());
        let manager = ListingManager::new(
            store.clone(),
            Arc::new(FixedAuth(Some("user-7".to_string()))),
            Arc::new(RecordingSink::default()),
        );

        let listing = manager.create_listing(&draft()).await.unwrap();
        assert_eq!(listing.title, "Guitar lessons");

        let stored = store.get(SERVICES_TABLE, &listing.id).await.unwrap();
        assert_eq!(stored["user_id"], "user-7");
        assert_eq!(stored["is_active"], true);
    }

    #[tokio::test]
    async fn test_update_and_delete_notify_success() {
        let store = Arc::new(MemoryStore::new());
        let sink = Arc::new(RecordingSink::default());
        let manager = ListingManager::new(
            store.clone(),
            Arc::new(FixedAuth(Some("user-7".to_string()))),
            sink.clone(),
        );

        let listing = manager.create_listing(&draft()).await.unwrap();
        let updated = manager
            .update_listing(&listing.id, serde_json::json!({"price": 250}))
            .await
            .unwrap();
        assert_eq!(updated.price, 250.0);

        manager.delete_listing(&listing.id).await.unwrap();
        assert!(store.get(SERVICES_TABLE, &listing.id).await.is_err());

        let messages = sink.messages.lock().unwrap();
        assert!(messages.iter().all(|(_, severity)| *severity == Severity::Success));
        assert_eq!(messages.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_failure_notifies_danger() {
        struct FailingDelete(MemoryStore);

        #[async_trait]
        impl DataStore for FailingDelete {
            async fn query(
                &self,
                query: &crate::query::Query,
            ) -> Result<Vec<Value>, crate::store::StoreFailure> {
                self.0.query(query).await
            }
            async fn get(&self, table: &str, id: &str) -> Result<Value, crate::store::StoreFailure> {
                self.0.get(table, id).await
            }
            async fn insert(
                &self,
                table: &str,
                record: Value,
            ) -> Result<Value, crate::store::StoreFailure> {
                self.0.insert(table, record).await
            }
            async fn update(
                &self,
                table: &str,
                id: &str,
                patch: Value,
            ) -> Result<Value, crate::store::StoreFailure> {
                self.0.update(table, id, patch).await
            }
            async fn delete(&self, _table: &str, _id: &str) -> Result<(), crate::store::StoreFailure> {
                Err(crate::store::StoreFailure::new("row is protected"))
            }
            async fn rpc(
                &self,
                function: &str,
                params: Value,
            ) -> Result<(), crate::store::StoreFailure> {
                self.0.rpc(function, params).await
            }
        }

        let sink = Arc::new(RecordingSink::default());
        let manager = ListingManager::new(
            Arc::new(FailingDelete(MemoryStore::new())),
            Arc::new(FixedAuth(Some("user-7".to_string()))),
            sink.clone(),
        );

        let result = manager.delete_listing("svc-1").await;
        assert_eq!(
            result,
            Err(CatalogError::FetchFailure("row is protected".to_string()))
        );

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.last().unwrap().1, Severity::Danger);
    }
}
