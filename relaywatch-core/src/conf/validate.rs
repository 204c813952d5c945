use crate::classify::{PLATFORM_OTHER, parse_net};
use crate::conf::error::{ConfigError, ValidationIssue};
use crate::conf::types::RelaywatchConfig;

#[derive(Default)]
struct ValidationCtx {
    issues: Vec<ValidationIssue>,
}

impl ValidationCtx {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ConfigError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                issues: self.issues,
            })
        }
    }
}

/// Check every semantic constraint, reporting all violations at once.
pub fn validate_config(cfg: &RelaywatchConfig) -> Result<(), ConfigError> {
    let mut ctx = ValidationCtx::default();

    //-------------------------------------------------------------------------
    // Engine
    //-------------------------------------------------------------------------
    let engine = &cfg.engine;
    if engine.window_seconds == 0 {
        ctx.push("engine.window_seconds", "must be greater than zero");
    }
    if engine.limit == 0 {
        ctx.push("engine.limit", "must be greater than zero");
    }
    if engine.max_clients == 0 {
        ctx.push("engine.max_clients", "must be greater than zero");
    }
    if engine.max_destinations_per_platform == 0 {
        ctx.push(
            "engine.max_destinations_per_platform",
            "must be greater than zero",
        );
    }

    //-------------------------------------------------------------------------
    // Classifier rules
    //-------------------------------------------------------------------------
    for (i, rule) in cfg.classifier.host_rules.iter().enumerate() {
        let field = format!("classifier.host_rules[{i}]");
        check_platform(&mut ctx, &field, &rule.platform);

        if rule.needles.is_empty() {
            ctx.push(format!("{field}.needles"), "must contain at least one needle");
        }
        for (j, needle) in rule.needles.iter().enumerate() {
            if needle.trim().is_empty() {
                ctx.push(format!("{field}.needles[{j}]"), "must not be empty");
            }
        }
    }

    for (i, rule) in cfg.classifier.ip_rules.iter().enumerate() {
        let field = format!("classifier.ip_rules[{i}]");
        check_platform(&mut ctx, &field, &rule.platform);

        if rule.cidrs.is_empty() {
            ctx.push(format!("{field}.cidrs"), "must contain at least one cidr");
        }
        for (j, cidr) in rule.cidrs.iter().enumerate() {
            if let Err(err) = parse_net(cidr) {
                ctx.push(
                    format!("{field}.cidrs[{j}]"),
                    format!("invalid cidr '{cidr}': {err}"),
                );
            }
        }
    }

    ctx.into_result()
}

fn check_platform(ctx: &mut ValidationCtx, field: &str, platform: &str) {
    if platform.trim().is_empty() {
        ctx.push(format!("{field}.platform"), "must not be empty");
    } else if platform == PLATFORM_OTHER {
        ctx.push(
            format!("{field}.platform"),
            format!("'{PLATFORM_OTHER}' is reserved for unclassified destinations"),
        );
    }
}
