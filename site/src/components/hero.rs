//! Hero banner - page title over a background image with a dark overlay.

use leptos::prelude::*;

/// Top banner with overlay, centered title, and the breadcrumb trail.
///
/// A missing background image falls back to the solid `hero-solid`
/// background instead of an inline style.
#[component]
pub fn HeroBanner(
    title: String,
    image_url: Option<String>,
    trail: Vec<String>,
) -> impl IntoView {
    let content = view! {
        <div class="hero-overlay"></div>
        <div class="hero-content">
            <h1 class="hero-title">{title}</h1>
            <BreadcrumbTrail trail=trail />
        </div>
    };

    match image_url {
        Some(url) => view! {
            <section class="hero" style=format!("background-image:url({url})")>
                {content}
            </section>
        }
        .into_any(),
        None => view! { <section class="hero hero-solid">{content}</section> }.into_any(),
    }
}

/// "Home / Industries / ..." trail. The first element links home; the rest
/// name intermediate groupings and the current page, so they stay plain.
#[component]
fn BreadcrumbTrail(trail: Vec<String>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);

    view! {
        <nav class="breadcrumb">
            {trail
                .into_iter()
                .enumerate()
                .map(|(idx, part)| {
                    let sep = (idx > 0)
                        .then(|| view! { <span class="breadcrumb-sep">"/"</span> });
                    let item = if idx == 0 {
                        view! { <a href="/" class="breadcrumb-link">{part}</a> }.into_any()
                    } else if idx == last {
                        view! { <span class="breadcrumb-here">{part}</span> }.into_any()
                    } else {
                        view! { <span>{part}</span> }.into_any()
                    };
                    view! {
                        {sep}
                        {item}
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
