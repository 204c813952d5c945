use crate::conf::load_optional_config;
use serde::Serialize;
use std::path::Path;

/// JSON unless `yaml` is set.
pub fn dump(path: Option<&Path>, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_optional_config(path)?;
    if yaml {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
