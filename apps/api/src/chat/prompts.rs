// Prompt constants for the chat pipeline.
// The catalog block labels are Korean to match the reply language.

/// Persona and language policy. Always the head of the injected system message.
pub const BASE_SYSTEM_PROMPT: &str = "You are Motion Lab's UX/motion assistant.
Reply **only in Korean** regardless of the user's language.
Use the supplied motion demo catalog to answer questions and include the `/[locale]/motions/...` links.
If nothing matches, say so clearly and propose a new experiment idea, also in Korean.
";

/// First line of the catalog block.
pub const CATALOG_INTRO: &str = "여기 추천 가능한 모션 데모 목록이 있어:";

pub const LINK_LABEL: &str = "링크";
pub const DESCRIPTION_LABEL: &str = "설명";
pub const TAGS_LABEL: &str = "태그";
