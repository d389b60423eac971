//! Shared header - brand block and fixed navigation links.

use leptos::prelude::*;

const BRAND_LOGO_URL: &str = "https://www.kanexfire.com/images/home/Footer_Logo.png";

/// Fixed header mounted above the hero on every page. Takes no
/// page-specific parameters.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="brand">
                    <img class="brand-logo" src=BRAND_LOGO_URL alt="Kanex Fire" />
                    <span class="brand-title">"Kanex Fire"</span>
                </a>
                <nav class="header-links">
                    <a href="/" class="header-link">"Home"</a>
                    <a href="/hotels-and-restaurants" class="header-link">
                        "Hotels & Restaurants"
                    </a>
                    <a href="/residential-societies" class="header-link">
                        "Residential Societies"
                    </a>
                    <a href="/about" class="header-link">"About Us"</a>
                </nav>
            </div>
        </header>
    }
}
