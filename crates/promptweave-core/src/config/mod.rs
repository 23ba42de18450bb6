//! Prompt configuration
//!
//! A prompt is described by a list of section configs plus a total token
//! budget, loadable from JSON, TOML or YAML.

mod file_loader;
mod section_config;

pub use file_loader::load_from_file;
pub use section_config::{DEFAULT_MAX_TOKENS, PromptConfig, SectionConfig};
