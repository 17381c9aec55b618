//! Record normalization
//!
//! The backend returns listings in two shapes: the hosted query joins the
//! seller profile as a nested `profiles` object with snake_case columns,
//! while older flat records carry seller fields at the top level (some in
//! camelCase). [`normalize`] folds both into [`ServiceListing`] with one
//! lookup order per field: nested shape first, flat shape second, then the
//! documented default.

use serde_json::Value;

use super::listing::{
    DEFAULT_IMAGE_URL, FALLBACK_CATEGORY, FALLBACK_DESCRIPTION, FALLBACK_LOCATION,
    FALLBACK_PAYMENT_METHOD, FALLBACK_SELLER_NAME, FALLBACK_TITLE, Seller, ServiceListing,
};
use crate::error::CatalogError;

/// Map a raw record into the canonical listing shape.
///
/// Total for any record carrying an `id`; fails with
/// [`CatalogError::MissingIdentifier`] otherwise, because a record without an
/// identity signals a data-integrity fault upstream and must not be silently
/// defaulted. Pure function of one record: no I/O, no memory of prior calls.
pub fn normalize(raw: &Value) -> Result<ServiceListing, CatalogError> {
    let id = id_string(raw).ok_or(CatalogError::MissingIdentifier)?;
    let profile = raw.get("profiles").filter(|p| p.is_object());

    let seller_name = profile
        .and_then(|p| text(p, "full_name"))
        .or_else(|| first_text(raw, &["seller_name", "sellerName"]))
        .unwrap_or(FALLBACK_SELLER_NAME)
        .to_string();
    let avatar_url = profile
        .and_then(|p| text(p, "avatar_url"))
        .or_else(|| first_text(raw, &["avatar_url", "sellerAvatar"]))
        .map(str::to_string)
        .unwrap_or_else(|| generated_avatar(&initials(&seller_name)));
    let verified = profile
        .and_then(|p| p.get("is_verified"))
        .or_else(|| raw.get("verified"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(ServiceListing {
        id,
        title: text(raw, "title").unwrap_or(FALLBACK_TITLE).to_string(),
        description: text(raw, "description")
            .unwrap_or(FALLBACK_DESCRIPTION)
            .to_string(),
        category: text(raw, "category")
            .unwrap_or(FALLBACK_CATEGORY)
            .to_string(),
        price: price_of(raw),
        location: first_text(raw, &["university", "location"])
            .unwrap_or(FALLBACK_LOCATION)
            .to_string(),
        image_url: first_text(raw, &["image_url", "imageUrl"])
            .unwrap_or(DEFAULT_IMAGE_URL)
            .to_string(),
        seller: Seller {
            name: seller_name,
            avatar_url,
            verified,
        },
        payment_methods: payment_methods_of(raw),
    })
}

/// Normalize a batch, dropping (and logging) records without an id.
/// A bad record never aborts the refresh that carried it.
pub fn normalize_all(records: &[Value]) -> Vec<ServiceListing> {
    records
        .iter()
        .filter_map(|record| match normalize(record) {
            Ok(listing) => Some(listing),
            Err(error) => {
                log::warn!("skipping catalog record: {}", error);
                None
            }
        })
        .collect()
}

/// Uppercased first character of each whitespace-separated name token.
/// Feeds the generated-avatar fallback; never displayed directly.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn generated_avatar(initials: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=667eea&color=fff",
        urlencoding::encode(initials)
    )
}

fn id_string(raw: &Value) -> Option<String> {
    match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-empty trimmed text field, or `None`.
fn text<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn first_text<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| text(record, key))
}

/// Price as a non-negative amount. Accepts numbers and numeric strings
/// (the flat shape stores form input verbatim).
fn price_of(raw: &Value) -> f64 {
    let amount = match raw.get("price") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    amount.max(0.0)
}

fn payment_methods_of(raw: &Value) -> Vec<String> {
    let methods: Vec<String> = raw
        .get("payment_methods")
        .or_else(|| raw.get("paymentMethods"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if methods.is_empty() {
        vec![FALLBACK_PAYMENT_METHOD.to_string()]
    } else {
        methods
    }
}
