//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settlement
//! rules from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::SettlementRules;

/// Loads and provides access to settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/costa_rica/
/// └── settlement.yaml   # Aguinaldo, cesantía and seniority rules
/// ```
///
/// # Example
///
/// ```no_run
/// use liquidacion_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/costa_rica")?;
/// println!("Rules version: {}", loader.rules().version);
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: SettlementRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `settlement.yaml` is missing, is not valid YAML,
    /// lacks a required field, or fails [`SettlementRules::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settlement_path = path.as_ref().join("settlement.yaml");
        let rules = Self::load_yaml::<SettlementRules>(&settlement_path)?;
        rules.validate()?;

        debug!(
            path = %settlement_path.display(),
            version = %rules.version,
            jurisdiction = %rules.jurisdiction,
            "Loaded settlement rules"
        );

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settlement rules.
    pub fn rules(&self) -> &SettlementRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> SettlementRules {
        self.rules
    }
}
