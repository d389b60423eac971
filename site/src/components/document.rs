//! Root document component - the complete HTML page.

use crate::styles::SITE_CSS;
use crate::types::IndustryPage;
use leptos::prelude::*;

use super::{CatalogSectionView, HeroBanner, SiteFooter, SiteHeader};

/// The complete HTML document for one page.
///
/// Composes the shared header, the hero with its breadcrumb trail, the
/// catalog sections in input order, and the shared footer. `year` feeds the
/// footer copyright line.
#[component]
pub fn PageDocument(page: IndustryPage, year: i32) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page.hero_title.clone()}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SiteHeader />
                <HeroBanner
                    title=page.hero_title.clone()
                    image_url=page.hero_image_url.clone()
                    trail=page.breadcrumb.clone()
                />
                <main class="container">
                    {page
                        .sections
                        .into_iter()
                        .map(|section| view! { <CatalogSectionView section=section /> })
                        .collect::<Vec<_>>()}
                </main>
                <SiteFooter year=year />
            </body>
        </html>
    }
}
