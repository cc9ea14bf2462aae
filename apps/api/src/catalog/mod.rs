//! Motion demo catalog — the fixed set of recommendable items.
//!
//! Loaded once at startup (built-in list or `CATALOG_PATH` JSON file) and shared
//! read-only across requests as an `Arc<[CatalogItem]>`. Nothing mutates it after load.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod ranker;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid slug '{0}': expected URL-safe path segments")]
    InvalidSlug(String),

    #[error("Duplicate slug '{0}'")]
    DuplicateSlug(String),
}

/// A single recommendable motion demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub slug: String,
    pub title: String,
    pub kicker: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Absolute link to the demo page: `{base_url}/{locale}/motions/{slug}`.
    pub fn url(&self, base_url: &str, locale: &str) -> String {
        format!(
            "{}/{}/motions/{}",
            base_url.trim_end_matches('/'),
            locale,
            self.slug
        )
    }
}

/// Immutable, ordered catalog. Cloning is cheap (shared `Arc`).
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[CatalogItem]>,
}

impl Catalog {
    /// Builds a catalog after checking that every slug is URL-safe and unique.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !is_url_safe_slug(&item.slug) {
                return Err(CatalogError::InvalidSlug(item.slug.clone()));
            }
            if !seen.insert(item.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// Loads a JSON array of catalog items from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;
        Self::new(items)
    }

    /// The Motion Lab demos shipped with the service.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items().into(),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn builtin_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            slug: "button/adaptive-hover-morph".to_string(),
            title: "Adaptive Hover Morph".to_string(),
            kicker: "Button motion / 01".to_string(),
            description: "A pill CTA that compresses into a circular icon when hovered to signal urgency.".to_string(),
            tags: vec![
                "button".to_string(),
                "hover".to_string(),
                "cta".to_string(),
                "glow".to_string(),
            ],
        },
        CatalogItem {
            slug: "timeline/time-reveal".to_string(),
            title: "Timeline Reveal".to_string(),
            kicker: "Timeline motion / 01".to_string(),
            description: "Sequential cards fade in with staggered springs to narrate multi-step journeys.".to_string(),
            tags: vec![
                "timeline".to_string(),
                "stagger".to_string(),
                "roadmap".to_string(),
            ],
        },
        CatalogItem {
            slug: "interactions/ecology-matrix".to_string(),
            title: "Ecology Matrix".to_string(),
            kicker: "Interaction motion / 01".to_string(),
            description: "Orchid-inspired carousel that highlights one specimen while adjacent cards preview upcoming moods.".to_string(),
            tags: vec![
                "carousel".to_string(),
                "hover".to_string(),
                "fragrance".to_string(),
                "orchid".to_string(),
            ],
        },
    ]
}

/// Slugs are `/`-separated segments of ASCII alphanumerics, `-` and `_`.
/// Empty segments (leading, trailing or doubled `/`) are rejected.
fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
}
