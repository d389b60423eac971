//! Route rendering and output layout.
//!
//! `build_site` renders every registered page to `<out>/<slug>/index.html`
//! and writes a `manifest.json` summarizing the build next to them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use site_leptos::{content, render_page};
use thiserror::Error;
use tracing::{debug, info};

/// Filesystem failures while emitting the site.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page {path}")]
    WritePage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize build manifest")]
    SerializeManifest(#[source] serde_json::Error),

    #[error("failed to write manifest {path}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Build summary written to `<out>/manifest.json`.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// RFC 3339 build timestamp
    pub generated_at: String,
    /// Number of pages emitted
    pub page_count: usize,
    /// Per-page entries in navigation order
    pub pages: Vec<ManifestPage>,
}

/// One emitted page in the manifest.
#[derive(Debug, Serialize)]
pub struct ManifestPage {
    /// Route slug
    pub slug: String,
    /// Hero title
    pub title: String,
    /// Output path relative to the output directory
    pub path: String,
    /// Catalog section count
    pub sections: usize,
    /// Total product card count
    pub cards: usize,
}

/// Render every registered route into `out` and write the manifest.
pub fn build_site(out: &Path) -> Result<Manifest, BuildError> {
    let pages = content::all_pages();

    fs::create_dir_all(out).map_err(|source| BuildError::CreateDir {
        path: out.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::with_capacity(pages.len());
    for page in &pages {
        let dir = out.join(&page.slug);
        fs::create_dir_all(&dir).map_err(|source| BuildError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let html = render_page(page);
        let file = dir.join("index.html");
        fs::write(&file, &html).map_err(|source| BuildError::WritePage {
            path: file.clone(),
            source,
        })?;

        debug!(bytes = html.len(), slug = %page.slug, "rendered page");
        info!("wrote {}", file.display());

        entries.push(ManifestPage {
            slug: page.slug.clone(),
            title: page.hero_title.clone(),
            path: format!("{}/index.html", page.slug),
            sections: page.sections.len(),
            cards: page.card_count(),
        });
    }

    let manifest = Manifest {
        generated_at: Utc::now().to_rfc3339(),
        page_count: entries.len(),
        pages: entries,
    };

    let manifest_path = out.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest).map_err(BuildError::SerializeManifest)?;
    fs::write(&manifest_path, json).map_err(|source| BuildError::WriteManifest {
        path: manifest_path.clone(),
        source,
    })?;
    info!("wrote {}", manifest_path.display());

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_emits_one_file_per_route_plus_manifest() {
        let temp = tempfile::tempdir().unwrap();
        let manifest = build_site(temp.path()).unwrap();

        assert_eq!(manifest.page_count, content::all_pages().len());
        for entry in &manifest.pages {
            let file = temp.path().join(&entry.path);
            assert!(file.exists(), "{}", file.display());
            let html = fs::read_to_string(&file).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
        assert!(temp.path().join("manifest.json").exists());
    }

    #[test]
    fn manifest_counts_match_content() {
        let temp = tempfile::tempdir().unwrap();
        let manifest = build_site(temp.path()).unwrap();

        let hotels = manifest
            .pages
            .iter()
            .find(|p| p.slug == "hotels-and-restaurants")
            .unwrap();
        assert_eq!(hotels.sections, 6);
        assert_eq!(hotels.cards, 10);

        let about = manifest.pages.iter().find(|p| p.slug == "about").unwrap();
        assert_eq!(about.sections, 0);
        assert_eq!(about.cards, 0);
    }
}
