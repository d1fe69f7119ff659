mod context;
mod file_entry;
mod grep_match;
mod report;
mod search_config;
mod searcher;
mod sink;

pub use context::ContextWindow;
pub use search_config::{SearchConfig, DEFAULT_CONFIG_FILE};
pub use searcher::run;
