//! Aguinaldo (13th-month bonus) calculation.
//!
//! The bonus is one twelfth of what was actually paid to the employee in the
//! accrual window, which opens on December 1 of the year before the exit
//! year (or on the hire date, for employees hired after that).

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::AguinaldoRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MonthKey, WorkLogEntry};

use super::rounding::round_currency;

/// The result of an aguinaldo calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AguinaldoResult {
    /// First day of the accrual window.
    pub accrual_start: NaiveDate,
    /// Accrued payments grouped by period-end month.
    pub breakdown: BTreeMap<MonthKey, Decimal>,
    /// Sum of the breakdown.
    pub aguinaldo_total: Decimal,
    /// `aguinaldo_total / divisor`, rounded to cents.
    pub aguinaldo: Decimal,
    /// Number of work-log entries that fell inside the window.
    pub entries_counted: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Resolves the first day of the accrual window.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::accrual_window_start;
/// use liquidacion_engine::config::SettlementRules;
/// use chrono::NaiveDate;
///
/// let rules = SettlementRules::default();
///
/// // Long-tenured employee: window opens December 1 of the prior year.
/// let start = accrual_window_start(
///     NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     &rules.aguinaldo,
/// )?;
/// assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
///
/// // Hired after that date: the window opens on the hire date.
/// let start = accrual_window_start(
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     &rules.aguinaldo,
/// )?;
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
pub fn accrual_window_start(
    hire_date: NaiveDate,
    exit_date: NaiveDate,
    rules: &AguinaldoRules,
) -> EngineResult<NaiveDate> {
    let period_start = NaiveDate::from_ymd_opt(
        exit_date.year() - 1,
        rules.accrual_start_month,
        rules.accrual_start_day,
    )
    .ok_or_else(|| EngineError::InvalidConfig {
        message: format!(
            "accrual start {}-{} does not exist in {}",
            rules.accrual_start_month,
            rules.accrual_start_day,
            exit_date.year() - 1
        ),
    })?;

    Ok(hire_date.max(period_start))
}

/// Calculates the aguinaldo owed at `exit_date`.
///
/// Entries whose `period_end` falls inside `[accrual_start, exit_date]` are
/// grouped by the month of `period_end` and summed. Entries outside the
/// window are ignored; an empty history yields a zero bonus.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date
/// * `work_logs` - Payment history, in any order
/// * `exit_date` - The separation date
/// * `rules` - Aguinaldo rules
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// * [`EngineError::InvalidConfig`] if the accrual start date does not exist
/// * [`EngineError::InvalidInput`] if the accrued payments overflow a `Decimal`
pub fn calculate_aguinaldo(
    hire_date: NaiveDate,
    work_logs: &[WorkLogEntry],
    exit_date: NaiveDate,
    rules: &AguinaldoRules,
    step_number: u32,
) -> EngineResult<AguinaldoResult> {
    let accrual_start = accrual_window_start(hire_date, exit_date, rules)?;

    let overflow = || EngineError::invalid_input("work_logs", "accrued payments overflow");

    let mut breakdown: BTreeMap<MonthKey, Decimal> = BTreeMap::new();
    let mut aguinaldo_total = Decimal::ZERO;
    let mut entries_counted = 0;
    for entry in work_logs
        .iter()
        .filter(|e| e.ends_within(accrual_start, exit_date))
    {
        let month_total = breakdown.entry(entry.month()).or_insert(Decimal::ZERO);
        *month_total = month_total
            .checked_add(entry.total_payment)
            .ok_or_else(overflow)?;
        aguinaldo_total = aguinaldo_total
            .checked_add(entry.total_payment)
            .ok_or_else(overflow)?;
        entries_counted += 1;
    }

    let aguinaldo = aguinaldo_total
        .checked_div(rules.divisor)
        .map(round_currency)
        .ok_or_else(overflow)?;

    debug!(
        accrual_start = %accrual_start,
        exit_date = %exit_date,
        entries_counted,
        months = breakdown.len(),
        aguinaldo_total = %aguinaldo_total,
        "Resolved aguinaldo accrual window"
    );

    let breakdown_json: serde_json::Map<String, serde_json::Value> = breakdown
        .iter()
        .map(|(month, amount)| (month.to_string(), serde_json::json!(amount.to_string())))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "aguinaldo_accrual".to_string(),
        rule_name: "Aguinaldo Accrual".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "exit_date": exit_date.to_string(),
            "work_log_entries": work_logs.len(),
        }),
        output: serde_json::json!({
            "accrual_start": accrual_start.to_string(),
            "entries_counted": entries_counted,
            "breakdown": breakdown_json,
            "aguinaldo_total": aguinaldo_total.to_string(),
            "aguinaldo": aguinaldo.to_string(),
        }),
        reasoning: format!(
            "₡{} paid between {} and {} / {} = ₡{}",
            aguinaldo_total,
            accrual_start,
            exit_date,
            rules.divisor.normalize(),
            aguinaldo
        ),
    };

    Ok(AguinaldoResult {
        accrual_start,
        breakdown,
        aguinaldo_total,
        aguinaldo,
        entries_counted,
        audit_step,
    })
}
