//! Error taxonomy for catalog operations

/// Errors produced while fetching, normalizing, or refreshing the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A raw record has no usable `id`. Fatal to that single record only;
    /// callers drop it from the rendered set and log, never abort a refresh.
    MissingIdentifier,
    /// The data store reported a failure. Recovered by rendering the
    /// fetch-failure empty-state; not retried automatically.
    FetchFailure(String),
    /// A refresh completed after a newer one was issued. Its result is
    /// discarded without rendering; never surfaced to the user.
    Stale,
    /// A flow that writes listings was invoked without a signed-in user.
    NotAuthenticated,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::MissingIdentifier => {
                write!(f, "record has no id and cannot be normalized")
            }
            CatalogError::FetchFailure(msg) => write!(f, "data store failure: {}", msg),
            CatalogError::Stale => write!(f, "refresh superseded by a newer one"),
            CatalogError::NotAuthenticated => write!(f, "no authenticated user"),
        }
    }
}

impl std::error::Error for CatalogError {}
