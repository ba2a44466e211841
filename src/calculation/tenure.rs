//! Service-length arithmetic.
//!
//! Tenure is measured in elapsed calendar days and then converted to
//! fractional months and years using the average lengths from the rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{CesantiaRules, SeniorityRules};
use crate::models::Seniority;

/// Elapsed service between hire and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    /// Whole days from hire date to exit date.
    pub days: i64,
    /// `days / average_month_days`.
    pub months: Decimal,
    /// `days / days_per_year`.
    pub years: Decimal,
}

/// Measures tenure from `hire_date` to `exit_date`.
///
/// Callers must ensure `exit_date >= hire_date`.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::measure_tenure;
/// use liquidacion_engine::config::SettlementRules;
/// use chrono::NaiveDate;
///
/// let rules = SettlementRules::default();
/// let tenure = measure_tenure(
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     &rules.cesantia,
/// );
/// assert_eq!(tenure.days, 112);
/// ```
pub fn measure_tenure(hire_date: NaiveDate, exit_date: NaiveDate, rules: &CesantiaRules) -> Tenure {
    let days = (exit_date - hire_date).num_days();
    let elapsed = Decimal::from(days);

    Tenure {
        days,
        months: elapsed / rules.average_month_days,
        years: elapsed / rules.days_per_year,
    }
}

/// Splits a day count into whole years and remaining whole months.
pub fn seniority(days: i64, rules: &SeniorityRules) -> Seniority {
    let years = days / rules.days_per_year;
    let remainder = Decimal::from(days % rules.days_per_year);
    let months = (remainder / rules.month_days).floor().to_i64().unwrap_or(0);

    Seniority { years, months }
}
