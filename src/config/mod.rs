//! Configuration loading and management for the settlement engine.
//!
//! This module provides the statutory rules used by the calculator, either
//! loaded from YAML files or taken from [`SettlementRules::default`].
//!
//! # Example
//!
//! ```no_run
//! use liquidacion_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/costa_rica").unwrap();
//! println!("Loaded rules: {}", config.rules().version);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AguinaldoRules, CesantiaRules, CesantiaTier, SeniorityRules, SettlementRules};
