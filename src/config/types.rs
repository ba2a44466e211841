//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `settlement.yaml`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Aguinaldo accrual rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AguinaldoRules {
    /// Reference to the law governing the aguinaldo.
    pub clause: String,
    /// Divisor applied to the accrued payments (one month in twelve).
    pub divisor: Decimal,
    /// Month of the prior year in which the accrual window opens.
    pub accrual_start_month: u32,
    /// Day of `accrual_start_month` on which the accrual window opens.
    pub accrual_start_day: u32,
}

/// A single flat severance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CesantiaTier {
    /// Minimum tenure, in average months, for this tier to apply.
    pub min_months: Decimal,
    /// Days of salary owed within this tier.
    pub days: Decimal,
}

/// Cesantía (severance) rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CesantiaRules {
    /// Reference to the article governing cesantía.
    pub clause: String,
    /// Average month length used to convert service days into months.
    pub average_month_days: Decimal,
    /// Year length used to convert service days into years.
    pub days_per_year: Decimal,
    /// Flat tiers, ascending by `min_months`.
    pub tiers: Vec<CesantiaTier>,
    /// Tenure, in average months, from which the per-year multiplier applies.
    pub per_year_from_months: Decimal,
    /// Days of salary owed per year of service once past `per_year_from_months`.
    pub days_per_year_of_service: Decimal,
}

/// Rules for the seniority (antigüedad) line of a settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityRules {
    /// Whole days counted as one year of service.
    pub days_per_year: i64,
    /// Month length used to count the remaining months.
    pub month_days: Decimal,
}

/// The complete set of settlement rules.
///
/// # Example
///
/// ```
/// use liquidacion_engine::config::SettlementRules;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// assert_eq!(rules.aguinaldo.divisor, Decimal::from(12));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRules {
    /// Version tag of the rule set, carried into each result for reprints.
    pub version: String,
    /// Jurisdiction code (e.g., "CR").
    pub jurisdiction: String,
    /// Aguinaldo rules.
    pub aguinaldo: AguinaldoRules,
    /// Cesantía rules.
    pub cesantia: CesantiaRules,
    /// Seniority rules.
    pub seniority: SeniorityRules,
}

impl Default for SettlementRules {
    fn default() -> Self {
        Self {
            version: "2024-01-01".to_string(),
            jurisdiction: "CR".to_string(),
            aguinaldo: AguinaldoRules {
                clause: "Ley 2412".to_string(),
                divisor: Decimal::from(12),
                accrual_start_month: 12,
                accrual_start_day: 1,
            },
            cesantia: CesantiaRules {
                clause: "Código de Trabajo, art. 29".to_string(),
                average_month_days: Decimal::new(3044, 2),
                days_per_year: Decimal::from(365),
                tiers: vec![
                    CesantiaTier {
                        min_months: Decimal::from(3),
                        days: Decimal::from(7),
                    },
                    CesantiaTier {
                        min_months: Decimal::from(6),
                        days: Decimal::from(14),
                    },
                ],
                per_year_from_months: Decimal::from(12),
                days_per_year_of_service: Decimal::new(195, 1),
            },
            seniority: SeniorityRules {
                days_per_year: 365,
                month_days: Decimal::new(3041, 2),
            },
        }
    }
}

impl SettlementRules {
    /// Checks that the rules can drive a calculation.
    ///
    /// Rejects non-positive divisors and lengths, an accrual start that is not
    /// a real calendar day, and tiers that are not strictly ascending or that
    /// overlap the per-year range.
    pub fn validate(&self) -> EngineResult<()> {
        fn positive(value: Decimal, name: &str) -> EngineResult<()> {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} must be positive, got {}", name, value),
                });
            }
            Ok(())
        }

        positive(self.aguinaldo.divisor, "aguinaldo.divisor")?;
        positive(self.cesantia.average_month_days, "cesantia.average_month_days")?;
        positive(self.cesantia.days_per_year, "cesantia.days_per_year")?;
        positive(self.seniority.month_days, "seniority.month_days")?;
        if self.seniority.days_per_year <= 0 {
            return Err(EngineError::InvalidConfig {
                message: "seniority.days_per_year must be positive".to_string(),
            });
        }

        // 2001 is not a leap year, so Feb 29 is rejected here as it would be
        // for most exit years.
        if NaiveDate::from_ymd_opt(
            2001,
            self.aguinaldo.accrual_start_month,
            self.aguinaldo.accrual_start_day,
        )
        .is_none()
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "accrual start {}-{} is not a calendar day",
                    self.aguinaldo.accrual_start_month, self.aguinaldo.accrual_start_day
                ),
            });
        }

        let mut previous: Option<Decimal> = None;
        for tier in &self.cesantia.tiers {
            if tier.days < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("cesantia tier at {} months has negative days", tier.min_months),
                });
            }
            if previous.is_some_and(|p| tier.min_months <= p) {
                return Err(EngineError::InvalidConfig {
                    message: "cesantia tiers must be strictly ascending by min_months".to_string(),
                });
            }
            previous = Some(tier.min_months);
        }

        if previous.is_some_and(|p| self.cesantia.per_year_from_months <= p) {
            return Err(EngineError::InvalidConfig {
                message: "cesantia.per_year_from_months must exceed every tier".to_string(),
            });
        }

        Ok(())
    }
}
