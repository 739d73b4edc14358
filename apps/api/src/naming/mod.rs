// Hōmyō generation engine.
// grammar → prompt_builder → (llm_client) → extractor → repair, orchestrated
// by generator and exposed over HTTP by handlers.

pub mod extractor;
pub mod generator;
pub mod grammar;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod repair;
pub mod validation;
