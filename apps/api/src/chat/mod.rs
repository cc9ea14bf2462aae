// Chat pipeline: Catalog Ranker → Prompt Composer → inference call.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod composer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
