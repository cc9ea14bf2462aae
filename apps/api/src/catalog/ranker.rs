//! Catalog Ranker — keyword overlap between the latest utterance and each catalog item.
//!
//! Pure, deterministic, no I/O. Results borrow from the catalog so callers can
//! never mutate a shared entry.

use super::CatalogItem;

/// Number of default recommendations returned when nothing matches and the
/// caller asked for zero matches.
pub const ZERO_LIMIT_FALLBACK: usize = 3;

/// Ranks `catalog` against `query` and returns at most `limit` items.
///
/// Algorithm:
/// 1. Tokenize: lower-case, split on whitespace (repeated tokens each count)
/// 2. Haystack per item: `title description tags…`, lower-cased
/// 3. Score = number of tokens that occur as a substring of the haystack
/// 4. Sort by score descending; equal scores keep catalog order
/// 5. Keep score > 0, truncate to `limit`
/// 6. Empty → fall back to the first `limit` catalog items
///    (first `ZERO_LIMIT_FALLBACK` when `limit` is 0)
pub fn rank<'a>(query: &str, catalog: &'a [CatalogItem], limit: usize) -> Vec<&'a CatalogItem> {
    let tokens = tokenize(query);

    let mut scored: Vec<(usize, &CatalogItem)> = catalog
        .iter()
        .map(|item| (score(&tokens, item), item))
        .collect();

    // `sort_by` is a stable sort: ties stay in catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let matches: Vec<&CatalogItem> = scored
        .into_iter()
        .filter(|(score, _)| *score > 0)
        .map(|(_, item)| item)
        .take(limit)
        .collect();

    if !matches.is_empty() {
        return matches;
    }

    // limit == 0 still yields a default slice; see DESIGN.md.
    let fallback = if limit == 0 { ZERO_LIMIT_FALLBACK } else { limit };
    catalog.iter().take(fallback).collect()
}

fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn haystack(item: &CatalogItem) -> String {
    format!("{} {} {}", item.title, item.description, item.tags.join(" ")).to_lowercase()
}

fn score(tokens: &[String], item: &CatalogItem) -> usize {
    let haystack = haystack(item);
    tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count()
}
