//! Content lints - surface model invariants the renderer deliberately
//! tolerates at render time (conventions, not runtime checks).

use std::collections::HashSet;
use std::process::ExitCode;

use site_leptos::content;
use site_leptos::types::IndustryPage;
use tracing::info;

/// One invariant violation in the content tables.
#[derive(Debug)]
pub struct Finding {
    /// Slug of the offending page
    pub slug: String,
    /// Human-readable description
    pub message: String,
}

/// Check the shipped content and report violations through the exit code.
pub fn run_check() -> ExitCode {
    let pages = content::all_pages();
    let findings = content_findings(&pages);

    if findings.is_empty() {
        let cards: usize = pages.iter().map(|p| p.card_count()).sum();
        info!("content ok: {} pages, {} cards", pages.len(), cards);
        ExitCode::SUCCESS
    } else {
        for finding in &findings {
            eprintln!("{}: {}", finding.slug, finding.message);
        }
        eprintln!("{} content issue(s)", findings.len());
        ExitCode::FAILURE
    }
}

/// Invariants: non-empty card labels, section titles unique within a page,
/// breadcrumb present on every page that shows a catalog.
pub fn content_findings(pages: &[IndustryPage]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for page in pages {
        let mut titles = HashSet::new();
        for section in &page.sections {
            if !titles.insert(section.title.as_str()) {
                findings.push(Finding {
                    slug: page.slug.clone(),
                    message: format!("duplicate section title {:?}", section.title),
                });
            }
            for (idx, card) in section.cards.iter().enumerate() {
                if card.label.trim().is_empty() {
                    findings.push(Finding {
                        slug: page.slug.clone(),
                        message: format!("empty card label in {:?} (card {idx})", section.title),
                    });
                }
            }
        }

        if !page.sections.is_empty() && page.breadcrumb.is_empty() {
            findings.push(Finding {
                slug: page.slug.clone(),
                message: "catalog page without a breadcrumb trail".into(),
            });
        }
    }

    findings
}
