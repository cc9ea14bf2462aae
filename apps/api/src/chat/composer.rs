//! Prompt Composer — renders ranked catalog items into the system instruction.
//!
//! Pure functions of their inputs: identical arguments give byte-identical text.

use crate::catalog::CatalogItem;
use crate::chat::prompts::{
    BASE_SYSTEM_PROMPT, CATALOG_INTRO, DESCRIPTION_LABEL, LINK_LABEL, TAGS_LABEL,
};

/// Renders the catalog block: intro line, then one numbered entry per match.
///
/// ```text
/// 1. {title} ({kicker})
///    링크: {base_url}/{locale}/motions/{slug}
///    설명: {description}
///    태그: {tag}, {tag}
/// ```
pub fn compose(matches: &[&CatalogItem], locale: &str, base_url: &str) -> String {
    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(CATALOG_INTRO.to_string());

    for (idx, item) in matches.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({})\n   {LINK_LABEL}: {}\n   {DESCRIPTION_LABEL}: {}\n   {TAGS_LABEL}: {}",
            idx + 1,
            item.title,
            item.kicker,
            item.url(base_url, locale),
            item.description,
            item.tags.join(", "),
        ));
    }

    lines.join("\n")
}

/// Full system message content: persona/policy followed by the catalog block.
pub fn system_prompt(matches: &[&CatalogItem], locale: &str, base_url: &str) -> String {
    format!("{BASE_SYSTEM_PROMPT}\n{}", compose(matches, locale, base_url))
}
