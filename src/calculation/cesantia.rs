//! Cesantía (severance) calculation.
//!
//! Severance is owed in days of salary, chosen by tenure:
//!
//! | Tenure (average months) | Days owed          |
//! |-------------------------|--------------------|
//! | below 3                 | 0                  |
//! | 3 up to 6               | 7                  |
//! | 6 up to 12              | 14                 |
//! | 12 or more              | years × 19.5       |
//!
//! The last row is a linear approximation of the statutory table, which is
//! non-linear and capped at eight years. It is kept as-is so that reprints of
//! earlier settlements reproduce the same amounts.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CesantiaRules;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::round_currency;
use super::tenure::Tenure;

/// The result of a cesantía calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CesantiaResult {
    /// Days of salary owed.
    pub cesantia_days: Decimal,
    /// `daily_salary * cesantia_days`, rounded to cents.
    pub cesantia: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the days of salary owed for `tenure`.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::{cesantia_days, Tenure};
/// use liquidacion_engine::config::SettlementRules;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let tenure = Tenure { days: 112, months: Decimal::new(368, 2), years: Decimal::new(31, 2) };
/// assert_eq!(cesantia_days(&tenure, &rules.cesantia), Decimal::from(7));
/// ```
pub fn cesantia_days(tenure: &Tenure, rules: &CesantiaRules) -> Decimal {
    if tenure.months >= rules.per_year_from_months {
        return tenure.years * rules.days_per_year_of_service;
    }

    rules
        .tiers
        .iter()
        .rev()
        .find(|tier| tenure.months >= tier.min_months)
        .map(|tier| tier.days)
        .unwrap_or(Decimal::ZERO)
}

/// Calculates the cesantía owed for `tenure` at `daily_salary`.
///
/// # Arguments
///
/// * `daily_salary` - The employee's daily salary
/// * `tenure` - Service length from [`measure_tenure`](super::measure_tenure)
/// * `rules` - Cesantía rules
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `daily_salary * days` does not
/// fit in a `Decimal`.
pub fn calculate_cesantia(
    daily_salary: Decimal,
    tenure: &Tenure,
    rules: &CesantiaRules,
    step_number: u32,
) -> EngineResult<CesantiaResult> {
    let days_owed = cesantia_days(tenure, rules);
    let cesantia = daily_salary
        .checked_mul(days_owed)
        .map(round_currency)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "daily_salary",
                format!("₡{} x {} days overflows", daily_salary, days_owed.round_dp(4)),
            )
        })?;
    let per_year = tenure.months >= rules.per_year_from_months;

    debug!(
        tenure_days = tenure.days,
        tenure_months = %tenure.months.round_dp(2),
        cesantia_days = %days_owed.round_dp(4),
        per_year,
        "Resolved cesantía tier"
    );

    let reasoning = if per_year {
        format!(
            "{} years x {} days = {} days x ₡{} = ₡{}",
            tenure.years.round_dp(4),
            rules.days_per_year_of_service.normalize(),
            days_owed.round_dp(4),
            daily_salary,
            cesantia
        )
    } else if days_owed.is_zero() {
        format!(
            "{} months of service is below the first tier; no cesantía owed",
            tenure.months.round_dp(2)
        )
    } else {
        format!(
            "{} months of service: {} days x ₡{} = ₡{}",
            tenure.months.round_dp(2),
            days_owed.normalize(),
            daily_salary,
            cesantia
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cesantia_tier".to_string(),
        rule_name: "Cesantía Tier".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "daily_salary": daily_salary.to_string(),
            "tenure_days": tenure.days,
            "tenure_months": tenure.months.round_dp(4).to_string(),
            "tenure_years": tenure.years.round_dp(4).to_string(),
        }),
        output: serde_json::json!({
            "cesantia_days": days_owed.normalize().to_string(),
            "per_year_multiplier": per_year,
            "cesantia": cesantia.to_string(),
        }),
        reasoning,
    };

    Ok(CesantiaResult {
        cesantia_days: days_owed,
        cesantia,
        audit_step,
    })
}
