use crate::aggregate::AggregationLimits;
use crate::classify::{HostRule, IpRuleSpec};
use serde::{Deserialize, Serialize};

/// Root of `relaywatch.hcl`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelaywatchConfig {
    pub engine: EngineSettings,
    pub classifier: ClassifierConfig,
}

/// Which side of the dashboard produced the summary. Echoed verbatim in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Frontend,
    #[default]
    Backend,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Frontend => "frontend",
            Mode::Backend => "backend",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Recency cutoff; events older than `now - window_seconds` are ignored.
    pub window_seconds: u64,

    /// How many lines the transport fetched per source. Reported, not enforced.
    pub lookback_lines: u64,

    /// Maximum number of clients in the summary.
    pub limit: usize,

    /// Hard cap on tracked clients per run.
    pub max_clients: usize,

    pub max_destinations_per_platform: usize,

    pub mode: Mode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let limits = AggregationLimits::default();
        Self {
            window_seconds: limits.window_seconds,
            lookback_lines: 1000,
            limit: 250,
            max_clients: limits.max_clients,
            max_destinations_per_platform: limits.max_destinations_per_platform,
            mode: Mode::default(),
        }
    }
}

impl EngineSettings {
    pub fn limits(&self) -> AggregationLimits {
        AggregationLimits {
            window_seconds: self.window_seconds,
            max_clients: self.max_clients,
            max_destinations_per_platform: self.max_destinations_per_platform,
        }
    }
}

/// Operator rules, evaluated before the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub host_rules: Vec<HostRule>,
    pub ip_rules: Vec<IpRuleSpec>,
}
