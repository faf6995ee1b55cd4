// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of aemo-tariff.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::path::Path;

use aemo_tariff_core::{BillingPeriod, LossFactors, Network};
use aemo_tariff_ha::DEFAULT_PRICE_ENTITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "aemo-tariff.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub loss_factors: LossFactors,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub sensor: SensorConfig,

    #[serde(default)]
    pub billing: BillingPeriod,
}

/// Network and tariff used when a command does not name them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub tariff: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Entity holding the spot price in $/MWh
    #[serde(default = "default_price_entity")]
    pub price_entity: String,
}

fn default_price_entity() -> String {
    DEFAULT_PRICE_ENTITY.to_owned()
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            price_entity: default_price_entity(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `aemo-tariff.toml` in the working
    /// directory is used when present, else defaults with environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let config = Self::from_file(path)?;
            info!("Loaded configuration from {}", path.display());
            return Ok(config);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            let config = Self::from_file(default_path)?;
            info!("Loaded configuration from {}", DEFAULT_CONFIG_FILE);
            return Ok(config);
        }

        warn!("No configuration file found, using defaults with environment overrides");
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `AEMO_TARIFF_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from a variable lookup; unparsable numbers are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(network) = lookup("AEMO_TARIFF_NETWORK") {
            self.defaults.network = Some(network);
        }
        if let Some(tariff) = lookup("AEMO_TARIFF_TARIFF") {
            self.defaults.tariff = Some(tariff);
        }

        let factors = [
            ("AEMO_TARIFF_DLF", &mut self.loss_factors.dlf),
            ("AEMO_TARIFF_MLF", &mut self.loss_factors.mlf),
            ("AEMO_TARIFF_MARKET", &mut self.loss_factors.market),
        ];
        for (key, factor) in factors {
            if let Some(value) = lookup(key) {
                match value.parse::<f64>() {
                    Ok(parsed) => *factor = parsed,
                    Err(_) => warn!("Ignoring {}={}: not a number", key, value),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.loss_factors.is_valid() {
            anyhow::bail!(
                "Loss factors must be finite and positive (dlf={}, mlf={}, market={})",
                self.loss_factors.dlf,
                self.loss_factors.mlf,
                self.loss_factors.market
            );
        }

        if self.billing.days == 0 {
            anyhow::bail!("Billing period must be at least one day");
        }

        if let Some(network) = &self.defaults.network {
            network
                .parse::<Network>()
                .with_context(|| format!("Invalid default network '{network}'"))?;
        }

        if !self.sensor.price_entity.contains('.') {
            anyhow::bail!(
                "Price entity '{}' is not an entity id (expected 'domain.object_id')",
                self.sensor.price_entity
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.loss_factors, LossFactors::default());
        assert_eq!(config.billing.days, 30);
        assert_eq!(config.sensor.price_entity, "sensor.current_rrp");
        assert!(config.defaults.network.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            r#"
[loss_factors]
dlf = 1.0
mlf = 1.0

[defaults]
network = "Energex"
tariff = "6900"

[sensor]
price_entity = "sensor.nem_qld1_price"

[billing]
days = 31
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.loss_factors.dlf, 1.0);
        assert_eq!(config.loss_factors.market, 1.0154);
        assert_eq!(config.defaults.network.as_deref(), Some("Energex"));
        assert_eq!(config.defaults.tariff.as_deref(), Some("6900"));
        assert_eq!(config.sensor.price_entity, "sensor.nem_qld1_price");
        assert_eq!(config.billing.days, 31);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.loss_factors, LossFactors::default());
        assert_eq!(config.sensor.price_entity, DEFAULT_PRICE_ENTITY);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = AppConfig::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_malformed_file_fails() {
        let file = write_config("[loss_factors\ndlf = ");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("[loss_factors]\ndlf = -1.0\n");
        assert!(AppConfig::load(Some(file.path())).is_err());

        let file = write_config("[billing]\ndays = 0\n");
        assert!(AppConfig::load(Some(file.path())).is_err());

        let file = write_config("[defaults]\nnetwork = \"bogus\"\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid default network"));

        let file = write_config("[sensor]\nprice_entity = \"current_rrp\"\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AEMO_TARIFF_NETWORK", "sapn"),
            ("AEMO_TARIFF_TARIFF", "RTOU"),
            ("AEMO_TARIFF_DLF", "1.02"),
            ("AEMO_TARIFF_MARKET", "oops"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| (*v).to_owned()));

        assert_eq!(config.defaults.network.as_deref(), Some("sapn"));
        assert_eq!(config.defaults.tariff.as_deref(), Some("RTOU"));
        assert_eq!(config.loss_factors.dlf, 1.02);
        assert_eq!(config.loss_factors.mlf, 1.0154);
        assert_eq!(config.loss_factors.market, 1.0154);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.defaults.network = Some("endeavour".to_owned());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.defaults.network.as_deref(), Some("endeavour"));
        assert_eq!(parsed.loss_factors, config.loss_factors);
    }
}
