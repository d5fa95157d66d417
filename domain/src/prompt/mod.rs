//! Prompt domain
//!
//! Builds the full instruction payload for one council sitting: the system
//! instruction carrying every agent's psychometric kernel, the user prompt,
//! and the fixed output schema.

mod composer;
mod schema;
mod template;

pub use composer::{ComposedPrompt, DeliberationMode, PromptComposer};
pub use schema::output_schema;
pub use template::PromptTemplate;
