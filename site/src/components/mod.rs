//! Leptos UI components for rendering the marketing pages.
//!
//! Each component is a stateless Leptos `#[component]` function; pages are
//! produced by composing them and rendering the result to an HTML string.
//! No signals, no hydration - pure SSR.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader
//! ├── HeroBanner (title + breadcrumb trail)
//! ├── CatalogSectionView (per section)
//! │   └── ProductCardView (per card)
//! │       └── badge row
//! └── SiteFooter
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! composed directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use site_leptos::components::{CatalogSectionView, SiteFooter};
//!
//! view! {
//!     <CatalogSectionView section=my_section />
//!     <SiteFooter year=2026 />
//! }
//! ```

mod catalog;
mod document;
mod footer;
mod header;
mod hero;

pub use catalog::{CatalogSectionView, ProductCardView};
pub use document::PageDocument;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroBanner;
