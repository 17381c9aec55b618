//! HTML serialization of render results
//!
//! Produces the Bootstrap card grid the UI shell injects into its listing
//! container. Pure function of the view models; binding the fragment to a
//! concrete DOM surface is the shell's job.

use maud::{Markup, html};

use super::render::{RenderResult, ServiceCard};

/// Serialize a render result to its display fragment.
pub fn render_html(result: &RenderResult) -> Markup {
    match result {
        RenderResult::Cards(cards) => html! {
            div class="row" {
                @for card in cards {
                    (service_card(card))
                }
            }
        },
        RenderResult::Empty { message } => empty_state(message),
    }
}

fn service_card(card: &ServiceCard) -> Markup {
    html! {
        div class="col-md-6 col-lg-4 mb-4" {
            div class="card h-100 shadow-sm card-hover" {
                div class="position-relative" {
                    img src=(card.image_url) class="card-img-top service-card-img" alt=(card.title);
                    span class={ "badge " (card.badge_class) " position-absolute top-0 start-0 m-2" } {
                        (card.category_label)
                    }
                }
                div class="card-body d-flex flex-column" {
                    h5 class="card-title line-clamp-2 mb-2" { (card.title) }
                    p class="card-text text-muted line-clamp-3 mb-3" { (card.description) }
                    div class="mb-2" {
                        small class="text-muted" {
                            i class="bi bi-geo-alt" {} " " (card.location)
                        }
                    }
                    div class="d-flex align-items-center gap-2 mb-3" {
                        img src=(card.seller_avatar_url) alt=(card.seller_name)
                            class="rounded-circle" width="24" height="24";
                        small { (card.seller_name) }
                        @if card.verified {
                            i class="bi bi-patch-check-fill verified-badge ms-1" {}
                        }
                    }
                    div class="d-flex flex-wrap gap-2 mb-3" {
                        @for badge in &card.payment_badges {
                            span class="payment-badge" {
                                @if !badge.icon.is_empty() {
                                    i class={ "bi " (badge.icon) } {} " "
                                }
                                (badge.method)
                            }
                        }
                    }
                    div class="mt-auto pt-3 border-top d-flex justify-content-between align-items-center" {
                        div class="price-display" { (card.price_label) }
                        a href=(card.detail_href) class="btn btn-primary btn-sm btn-hover" {
                            "View Details"
                        }
                    }
                }
            }
        }
    }
}

fn empty_state(message: &str) -> Markup {
    html! {
        div class="text-center py-5" {
            i class="bi bi-inbox empty-state-icon" {}
            p class="text-muted mt-3 fs-5" { (message) }
        }
    }
}
