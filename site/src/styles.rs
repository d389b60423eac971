//! CSS styles for the rendered pages.
//!
//! The complete stylesheet is embedded into every page's `<head>` so the
//! generated HTML files are self-contained and deployable as-is.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use site_leptos::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the site - light catalog theme.
///
/// This CSS provides:
/// - Base typography and the centered page container
/// - Header and navigation styling
/// - Hero banner with dark overlay (image or solid fallback)
/// - Catalog section and product card grid
/// - Dark footer with contact/payments/quick-links columns
pub const SITE_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-card: #ffffff;
    --bg-footer: #222222;
    --text-main: #1f2937;
    --text-dim: #6b7280;
    --text-inverse: #ffffff;
    --accent-red: #dc2626;
    --accent-blue: #1d4ed8;
    --accent-orange: #fb923c;
    --border-card: rgba(0, 0, 0, 0.12);
    --hero-fallback: #e5e7eb;
    --font-body: 'Helvetica Neue', Arial, sans-serif;
    --container-max: 1120px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-body);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
    width: 100%;
}

/* Header */

.site-header {
    background: var(--bg-page);
    border-bottom: 1px solid var(--border-card);
}

.header-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 12px 16px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 10px;
    text-decoration: none;
    color: var(--text-main);
}

.brand-logo {
    height: 40px;
}

.brand-title {
    font-size: 18px;
    font-weight: 700;
    color: var(--accent-red);
}

.header-links {
    display: flex;
    flex-wrap: wrap;
    gap: 18px;
}

.header-link {
    color: var(--text-main);
    text-decoration: none;
    font-size: 14px;
}

.header-link:hover {
    color: var(--accent-red);
}

/* Hero */

.hero {
    position: relative;
    width: 100%;
    min-height: 320px;
    display: flex;
    align-items: center;
    justify-content: center;
    background-size: cover;
    background-position: center;
}

.hero-solid {
    background: var(--hero-fallback);
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
}

.hero-content {
    position: relative;
    z-index: 1;
    text-align: center;
    padding: 24px 16px;
}

.hero-title {
    color: var(--text-inverse);
    font-size: 40px;
    font-weight: 700;
    margin: 0 0 16px;
}

.breadcrumb {
    color: var(--text-inverse);
    font-size: 14px;
}

.breadcrumb-link {
    color: var(--text-inverse);
    text-decoration: none;
}

.breadcrumb-link:hover {
    color: var(--accent-orange);
}

.breadcrumb-sep {
    margin: 0 8px;
    opacity: 0.7;
}

.breadcrumb-here {
    opacity: 0.9;
}

/* Catalog */

main.container {
    padding-top: 32px;
    padding-bottom: 32px;
    flex: 1;
}

.catalog-section {
    margin-bottom: 40px;
}

.catalog-title {
    font-size: 18px;
    font-weight: 700;
    color: var(--text-main);
    margin: 0 0 16px;
}

.card-row {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

.product-card {
    background: var(--bg-card);
    border-radius: 4px;
    box-shadow: 0 1px 4px var(--border-card);
    padding: 16px;
    width: 160px;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.card-kind {
    font-size: 13px;
    font-weight: 700;
    color: var(--accent-red);
    margin-bottom: 8px;
}

.card-label {
    font-weight: 600;
    margin-bottom: 8px;
}

.card-image {
    height: 80px;
    margin-bottom: 8px;
}

.badge-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 4px;
    margin-bottom: 8px;
}

.badge-icon {
    height: 20px;
}

.card-cta {
    color: var(--accent-blue);
    font-size: 12px;
    font-weight: 600;
    text-decoration: none;
    margin-top: 8px;
}

.card-cta:hover {
    text-decoration: underline;
}

/* Footer */

.footer {
    background: var(--bg-footer);
    color: var(--text-inverse);
    padding: 40px 0 16px;
    margin-top: 32px;
}

.footer-columns {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 32px;
}

.footer-col {
    flex: 1;
    min-width: 220px;
}

.footer-logo {
    height: 48px;
    margin-bottom: 16px;
}

.footer-line {
    font-size: 12px;
    margin-bottom: 8px;
}

.footer-heading {
    font-weight: 700;
    margin-bottom: 8px;
}

.payment-methods {
    height: 32px;
}

.quick-links {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 8px;
    font-size: 12px;
}

.quick-links a {
    color: var(--text-inverse);
    text-decoration: none;
}

.quick-links a:hover {
    color: var(--accent-orange);
}

.footer-copyright {
    text-align: center;
    font-size: 12px;
    color: #9ca3af;
    margin-top: 32px;
}

@media (max-width: 640px) {
    .hero-title {
        font-size: 28px;
    }

    .product-card {
        width: 100%;
    }
}
"#;
