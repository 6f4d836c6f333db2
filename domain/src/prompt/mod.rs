//! Prompt templates for the tribunal roles

pub mod template;

pub use template::PromptTemplate;
