//! Canonical listing shape
//!
//! Every raw record shape the backend can return collapses into
//! [`ServiceListing`] during normalization. All fields are total: the
//! fallbacks below are applied field by field, so a partial record degrades
//! gracefully instead of poisoning the whole card.

use serde::{Deserialize, Serialize};

pub const FALLBACK_TITLE: &str = "Untitled Service";
pub const FALLBACK_DESCRIPTION: &str = "No description provided";
pub const FALLBACK_CATEGORY: &str = "General";
pub const FALLBACK_LOCATION: &str = "Any University";
pub const FALLBACK_SELLER_NAME: &str = "Anonymous";
pub const FALLBACK_PAYMENT_METHOD: &str = "Cash";

/// Placeholder shown when a listing has no image of its own.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=600&h=400&fit=crop";

/// Seller details attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub avatar_url: String,
    pub verified: bool,
}

/// A single service offering, post-normalization.
///
/// Constructed fresh on every fetch and never mutated in place; a new fetch
/// fully replaces the previous set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    /// Opaque identifier, stable and unique within the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category code; unknown or missing codes collapse to the
    /// [`FALLBACK_CATEGORY`] sentinel.
    pub category: String,
    /// Non-negative amount, currency-agnostic. Display formatting is a
    /// renderer concern.
    pub price: f64,
    /// University or free-text location.
    pub location: String,
    pub image_url: String,
    pub seller: Seller,
    /// Payment-method codes in backend order.
    pub payment_methods: Vec<String>,
}
