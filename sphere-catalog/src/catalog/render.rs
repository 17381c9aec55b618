//! Catalog rendering
//!
//! Maps canonical listings into card view models. Stateless: rendering the
//! same sequence twice yields structurally identical output, and input order
//! is display order.

use super::listing::ServiceListing;

/// Empty-state text when the filter matched nothing.
pub const EMPTY_NO_MATCHES: &str = "No services found. Try adjusting your filters.";
/// Empty-state text when the fetch itself failed. Deliberately distinct from
/// [`EMPTY_NO_MATCHES`] so the UI never passes a failure off as an empty
/// catalog.
pub const EMPTY_FETCH_FAILED: &str = "Failed to load services. Please try again.";

/// One payment method badge: the code plus its icon glyph (empty for
/// unknown methods).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentBadge {
    pub method: String,
    pub icon: &'static str,
}

/// View model for a single listing card.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Capitalized category label (e.g. "Tutoring").
    pub category_label: String,
    /// CSS badge class for the category.
    pub badge_class: &'static str,
    /// Formatted price, rounded to whole currency units (e.g. "R150").
    pub price_label: String,
    pub location: String,
    pub image_url: String,
    pub seller_name: String,
    pub seller_avatar_url: String,
    pub verified: bool,
    /// Badges in listing order; duplicates are the caller's to deduplicate.
    pub payment_badges: Vec<PaymentBadge>,
    /// Relative link to the detail page.
    pub detail_href: String,
}

/// Outcome of rendering a listing sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    /// One card per listing, input order preserved.
    Cards(Vec<ServiceCard>),
    /// Designated "no content" state with a human-readable reason.
    Empty { message: String },
}

impl RenderResult {
    pub fn no_matches() -> Self {
        RenderResult::Empty {
            message: EMPTY_NO_MATCHES.to_string(),
        }
    }

    pub fn fetch_failed() -> Self {
        RenderResult::Empty {
            message: EMPTY_FETCH_FAILED.to_string(),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, RenderResult::Empty { .. })
    }

    /// Number of cards (zero for an empty-state).
    pub fn count(&self) -> usize {
        match self {
            RenderResult::Cards(cards) => cards.len(),
            RenderResult::Empty { .. } => 0,
        }
    }

    /// Results caption, e.g. "3 services found".
    pub fn results_caption(&self) -> String {
        let count = self.count();
        let plural = if count == 1 { "" } else { "s" };
        format!("{} service{} found", count, plural)
    }
}

/// Render listings into card view models, or the "no matches" empty-state
/// for an empty sequence. The fetch-failure empty-state is the controller's
/// to produce; this function only ever sees successfully fetched listings.
pub fn render(listings: &[ServiceListing]) -> RenderResult {
    if listings.is_empty() {
        return RenderResult::no_matches();
    }
    RenderResult::Cards(listings.iter().map(card_view).collect())
}

fn card_view(listing: &ServiceListing) -> ServiceCard {
    ServiceCard {
        id: listing.id.clone(),
        title: listing.title.clone(),
        description: listing.description.clone(),
        category_label: capitalize(&listing.category),
        badge_class: category_badge_class(&listing.category),
        price_label: format_price(listing.price),
        location: listing.location.clone(),
        image_url: listing.image_url.clone(),
        seller_name: listing.seller.name.clone(),
        seller_avatar_url: listing.seller.avatar_url.clone(),
        verified: listing.seller.verified,
        payment_badges: listing
            .payment_methods
            .iter()
            .map(|method| PaymentBadge {
                method: method.clone(),
                icon: payment_icon(method),
            })
            .collect(),
        detail_href: format!("service-detail.html?id={}", listing.id),
    }
}

/// Whole-unit price with the Rand marker; fractional cents are never shown.
pub fn format_price(amount: f64) -> String {
    format!("R{}", amount.round() as i64)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn category_badge_class(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "tutoring" => "badge-tutoring",
        "tech" => "badge-tech",
        "beauty" => "badge-beauty",
        "food" => "badge-food",
        "transport" => "badge-transport",
        _ => "bg-secondary",
    }
}

fn payment_icon(method: &str) -> &'static str {
    match method {
        "Cash" => "bi-cash",
        "EFT" => "bi-bank",
        "Card" => "bi-credit-card",
        _ => "",
    }
}
