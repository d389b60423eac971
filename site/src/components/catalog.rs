//! Catalog section and product card components.

use crate::types::{CatalogSection, ProductCard, badge_icon_url};
use leptos::prelude::*;

/// Heading plus a wrapping row of product cards.
///
/// A section with no cards still renders its heading and an empty row.
/// Card order follows the input sequence.
#[component]
pub fn CatalogSectionView(section: CatalogSection) -> impl IntoView {
    view! {
        <section class="catalog-section">
            <h2 class="catalog-title">{section.title.clone()}</h2>
            <div class="card-row">
                {section
                    .cards
                    .into_iter()
                    .map(|card| view! { <ProductCardView card=card /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// A single product tile: optional kind tag, label, image, badge icons,
/// and the "Know More" link.
#[component]
pub fn ProductCardView(card: ProductCard) -> impl IntoView {
    view! {
        <article class="product-card">
            {card
                .kind
                .map(|kind| view! { <div class="card-kind">{kind.label()}</div> })}
            <div class="card-label">{label_view(&card.label)}</div>
            <img class="card-image" src=card.image_url.clone() alt=card.label.clone() />
            <BadgeRow badges=card.badges.clone() />
            <a href=card.cta_url.clone() class="card-cta">"Know More >>"</a>
        </article>
    }
}

/// One icon per badge code; suppression systems carry none, so an empty
/// list renders nothing at all (matching the card markup without the row).
#[component]
fn BadgeRow(badges: Vec<String>) -> impl IntoView {
    (!badges.is_empty()).then(|| {
        view! {
            <div class="badge-row">
                {badges
                    .into_iter()
                    .map(|code| {
                        let icon = badge_icon_url(&code);
                        view! { <img class="badge-icon" src=icon alt=code /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}

/// Display form of a card label. "CO2 ..." labels get the chemical
/// subscript; alt text elsewhere keeps the plain form.
fn label_view(label: &str) -> impl IntoView + use<> {
    match label.strip_prefix("CO2") {
        Some(rest) => view! {
            "CO"
            <sub>"2"</sub>
            {rest.to_string()}
        }
        .into_any(),
        None => {
            let text = label.to_string();
            view! { {text} }.into_any()
        }
    }
}
