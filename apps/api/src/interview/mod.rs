// Interview flow: question generation, answer scoring, session tracking, final verdict.
// All LLM calls go through llm_client via the collaborator traits.

pub mod aggregator;
pub mod collaborators;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod question_parser;
pub mod response_parser;
pub mod session;
pub mod store;

/// An interview question, immutable once generated.
pub type Question = String;
