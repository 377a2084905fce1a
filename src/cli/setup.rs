use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

// The example ledger is compiled into the binary
const EXAMPLE_LEDGER: &str = include_str!("../../docs/example_config.yaml");

/// Creates an example ledger at the default location
pub fn setup() -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(path)
}

/// Creates an example ledger at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Ledger file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, EXAMPLE_LEDGER)
        .with_context(|| format!("Failed to write ledger file to {}", path.display()))?;

    tracing::info!("Created example ledger at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_ledger_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("ledger.yaml");

        setup_at_path(&config_path)?;

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path)?;
        assert!(content.contains("profile:"));
        assert!(content.contains("assets:"));
        assert!(content.contains("# Example ledger for finpulse"));

        Ok(())
    }

    #[test]
    fn test_setup_fails_if_ledger_exists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("ledger.yaml");
        std::fs::write(&config_path, "test")?;

        let result = setup_at_path(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));

        Ok(())
    }

    #[test]
    fn test_example_ledger_is_valid() -> Result<()> {
        let config =
            AppConfig::from_yaml(EXAMPLE_LEDGER).context("Failed to parse example ledger")?;

        assert!(!config.assets.is_empty());
        assert!(!config.liabilities.is_empty());
        assert!(config.profile.salary.is_some());

        Ok(())
    }
}
