use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_MAX_MATCHES: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn. Also the wire shape sent to the inference service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Signed so that negative values reach validation instead of failing deserialisation.
    #[serde(default = "default_max_matches")]
    pub max_matches: i64,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_max_matches() -> i64 {
    DEFAULT_MAX_MATCHES
}

/// A catalog item projected for one response, with its locale-specific link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub url: String,
}

impl MatchResult {
    pub fn project(item: &CatalogItem, base_url: &str, locale: &str) -> Self {
        Self {
            url: item.url(base_url, locale),
            item: item.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub matches: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request: ChatRequest = serde_json::from_value(json!({
            "messages": [{"role": "user", "content": "hi"}]
        }))
        .unwrap();
        assert_eq!(request.locale, "en");
        assert_eq!(request.max_matches, 3);
        assert_eq!(request.messages, vec![Message::user("hi")]);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = serde_json::from_value::<ChatRequest>(json!({
            "messages": [{"role": "tool", "content": "hi"}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_match_result_serializes_flat_with_url() {
        let item = CatalogItem {
            slug: "timeline/time-reveal".to_string(),
            title: "Timeline Reveal".to_string(),
            kicker: "Timeline motion / 01".to_string(),
            description: "Cards".to_string(),
            tags: vec!["timeline".to_string()],
        };
        let projected = MatchResult::project(&item, "http://localhost:3000", "ko");
        let value = serde_json::to_value(&projected).unwrap();
        assert_eq!(
            value,
            json!({
                "slug": "timeline/time-reveal",
                "title": "Timeline Reveal",
                "kicker": "Timeline motion / 01",
                "description": "Cards",
                "tags": ["timeline"],
                "url": "http://localhost:3000/ko/motions/timeline/time-reveal"
            })
        );
        // the projection is a copy; the source item is untouched
        assert_eq!(projected.item, item);
    }
}
