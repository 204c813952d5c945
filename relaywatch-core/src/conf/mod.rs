mod error;
mod loader;
pub mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ValidationIssue};
pub use loader::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE, load_config, load_optional_config};
pub use types::{ClassifierConfig, EngineSettings, Mode, RelaywatchConfig};
pub use validate::validate_config;
