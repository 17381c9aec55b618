//! Auth provider boundary
//!
//! Session management lives in the hosted platform's auth service. The
//! catalog only needs to know who the current user is when a flow writes
//! listings; the refresh path never consults auth.

use async_trait::async_trait;

/// Read-only view of the current session.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the signed-in user's id, or `None` when there is no session.
    async fn current_user_id(&self) -> Option<String>;
}
