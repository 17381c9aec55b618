//! Service catalog: filter → query → normalize → render
//!
//! The pipeline a filter change travels: [`CatalogFilter`] builds a
//! [`crate::query::Query`], the store returns raw records,
//! [`normalize`](normalize::normalize) maps each into the canonical
//! [`ServiceListing`] shape, and [`render`](render::render) produces the
//! card view models. [`CatalogController`] orchestrates the whole refresh
//! and guarantees that out-of-order fetch completions never overwrite a
//! newer result.

pub mod controller;
pub mod filter;
pub mod html;
pub mod listing;
pub mod manage;
pub mod normalize;
pub mod render;

pub use controller::CatalogController;
pub use filter::{CatalogFilter, FILTER_ALL};
pub use html::render_html;
pub use listing::{Seller, ServiceListing};
pub use manage::{ListingDraft, ListingManager};
pub use normalize::{normalize, normalize_all};
pub use render::{PaymentBadge, RenderResult, ServiceCard, render};

/// Table holding service listings.
pub const SERVICES_TABLE: &str = "services";

/// Projection for catalog reads: every listing column plus the joined
/// seller profile.
pub const SERVICES_SELECT: &str =
    "*, profiles:user_id(full_name, university, avatar_url, rating, is_verified)";
