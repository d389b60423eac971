//! # site-leptos
//!
//! Leptos SSR renderer for the Kanex Fire marketing site.
//!
//! This crate provides a type-safe, component-based approach to generating
//! the company's static catalog pages using [Leptos](https://leptos.dev/)
//! server-side rendering. Every page is a pure function from declarative
//! content records to an HTML string.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - Hero, catalog section, product card, footer
//! - **Declarative Content** - Pages are data tables, not repeated markup
//!
//! ## Quick Start
//!
//! ```rust
//! use site_leptos::{content, render_page};
//!
//! // Pick a registered page
//! let page = content::hotels_restaurants();
//!
//! // Render to a complete HTML document
//! let html = render_page(&page);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("hotels-and-restaurants.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`types`] - Content records (pages, sections, cards)
//! - [`content`] - Declarative page tables and the route registry
//! - [`components`] - Leptos UI components
//! - [`styles`] - Embedded CSS
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod types;

use chrono::{Datelike, Local};
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::IndustryPage;

/// Render a complete HTML document for one page.
///
/// This is the main entry point. Rendering is pure apart from reading the
/// wall clock once for the footer copyright year: the same input renders to
/// byte-identical output within a calendar year.
///
/// # Example
///
/// ```rust
/// use site_leptos::{render_page, types::IndustryPage};
///
/// let page = IndustryPage {
///     slug: "about".into(),
///     hero_title: "About Us".into(),
///     breadcrumb: vec!["Home".into(), "About Us".into()],
///     ..Default::default()
/// };
///
/// let html = render_page(&page);
/// assert!(html.contains("About Us"));
/// ```
pub fn render_page(page: &IndustryPage) -> String {
    let year = Local::now().year();
    let doc = view! {
        <PageDocument page=page.clone() year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
