use crate::conf::{ConfigError, load_config};
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ {} host rules", cfg.classifier.host_rules.len());
            println!("✔ {} ip rules", cfg.classifier.ip_rules.len());
            println!(
                "✔ {}s window, {} clients max, mode {}",
                cfg.engine.window_seconds,
                cfg.engine.max_clients,
                cfg.engine.mode.as_str()
            );
            Ok(())
        }
        Err(err) => {
            if let Some(hint) = config_error_hint(&err) {
                eprintln!("{hint}");
                eprintln!();
            }
            Err(err.into())
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config file with:\n\
             \n\
             relaywatch conf init",
        ),

        ConfigError::Parse { .. } => Some(
            "The config file must be HCL with `engine` and `classifier` objects.\n\
             \n\
             Example:\n\
             \n\
             engine = {\n\
             \x20 window_seconds = 120\n\
             }",
        ),

        ConfigError::Validation { issues }
            if issues.iter().any(|i| i.field.starts_with("classifier.ip_rules")) =>
        {
            Some(
                "IP rules take CIDR blocks or single addresses.\n\
                 \n\
                 Example:\n\
                 \n\
                 ip_rules = [{ platform = \"corp\", cidrs = [\"10.20.0.0/16\"] }]",
            )
        }

        _ => None,
    }
}
