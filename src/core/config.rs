use super::records::{
    Asset, Goal, Installment, Liability, Profile, Receivable, Subscription, Transaction,
};
use super::safe_to_spend::SafeToSpendMode;
use super::validation::validate_ledger;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// The user's ledger. Every record list is optional in the file.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,
    #[serde(default)]
    pub receivables: Vec<Receivable>,
    #[serde(default)]
    pub installments: Vec<Installment>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub safe_to_spend_mode: Option<SafeToSpendMode>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default ledger");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "finpulse", "finpulse")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("ledger.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read ledger file: {}", path.as_ref().display()))?;

        let config = Self::from_yaml(&config_str)
            .with_context(|| format!("Invalid ledger file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded ledger");
        Ok(config)
    }

    /// Parses and validates a ledger.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse ledger")?;

        let validation = validate_ledger(&config);
        if !validation.is_valid() {
            anyhow::bail!(
                "Ledger has {} invalid entries:\n  {}",
                validation.errors.len(),
                validation.errors.join("\n  ")
            );
        }
        Ok(config)
    }
}
