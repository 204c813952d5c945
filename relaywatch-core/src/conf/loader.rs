use crate::conf::error::ConfigError;
use crate::conf::types::RelaywatchConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "relaywatch.hcl";

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# relaywatch configuration

engine = {
  # Events older than this many seconds are ignored.
  window_seconds = 120

  # Lines fetched per source by the transport (reported only).
  lookback_lines = 1000

  # Clients returned in a summary.
  limit = 250

  # Hard cap on tracked clients per run.
  max_clients = 500

  max_destinations_per_platform = 20

  # "backend" or "frontend"
  mode = "backend"
}

# Operator rules are evaluated before the built-in rules, first match wins.
#
#   host_rules = [{ platform = "corp", needles = ["corp.example"] }]
#   ip_rules   = [{ platform = "corp", cidrs = ["10.20.0.0/16"] }]
classifier = {
  host_rules = []
  ip_rules   = []
}
"#;

/// Read, parse and validate a configuration file.
pub fn load_config(path: &Path) -> Result<RelaywatchConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let cfg: RelaywatchConfig =
        hcl::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    validate_config(&cfg)?;

    tracing::debug!(
        path = %path.display(),
        host_rules = cfg.classifier.host_rules.len(),
        ip_rules = cfg.classifier.ip_rules.len(),
        "config loaded"
    );

    Ok(cfg)
}

/// Like [`load_config`], but a missing path means "use the defaults".
pub fn load_optional_config(path: Option<&Path>) -> Result<RelaywatchConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(RelaywatchConfig::default()),
    }
}
