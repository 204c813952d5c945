use crate::conf::{ConfigError, DEFAULT_CONFIG_TEMPLATE};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub fn init(path: &Path) -> anyhow::Result<()> {
    write_template(path)?;

    println!("✔ Initialized relaywatch config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  relaywatch conf check {}", path.display());
    println!("  relaywatch summarize --config {}", path.display());

    Ok(())
}

/// Create `path` with the default template, never overwriting an existing file.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => ConfigError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
        .map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
}
