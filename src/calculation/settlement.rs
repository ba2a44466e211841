//! Settlement (liquidación) calculation.
//!
//! [`calculate_settlement`] is the engine's entry point. It is pure: the same
//! employee, work logs, exit date and rules always produce an identical
//! [`SettlementResult`], so it can back both the preview shown before
//! confirmation and any later reprint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::SettlementRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, BreakdownLine, Employee, SettlementDates, SettlementResult, WorkLogEntry,
};

use super::aguinaldo::calculate_aguinaldo;
use super::cesantia::calculate_cesantia;
use super::dates::today;
use super::rounding::round_currency;
use super::tenure::{measure_tenure, seniority};

/// Checks the calculator's preconditions.
fn validate_inputs(
    employee: &Employee,
    work_logs: &[WorkLogEntry],
    exit_date: NaiveDate,
) -> EngineResult<()> {
    if employee.daily_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "daily_salary",
            format!("must be greater than zero, got {}", employee.daily_salary),
        ));
    }

    if exit_date < employee.hire_date {
        return Err(EngineError::invalid_input(
            "exit_date",
            format!("{} precedes hire date {}", exit_date, employee.hire_date),
        ));
    }

    if let Some(foreign) = work_logs.iter().find(|e| e.employee_id != employee.id) {
        return Err(EngineError::invalid_input(
            "work_logs",
            format!(
                "entry '{}' belongs to employee '{}', not '{}'",
                foreign.id, foreign.employee_id, employee.id
            ),
        ));
    }

    Ok(())
}

/// Calculates the labor settlement for a separated employee.
///
/// # Arguments
///
/// * `employee` - The employee being settled; only `id`, `hire_date` and
///   `daily_salary` are read
/// * `work_logs` - The employee's payment history, in any order; entries
///   outside the aguinaldo window are ignored
/// * `exit_date` - The separation date, or `None` for today
/// * `rules` - Statutory constants
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the daily salary is not positive,
/// the exit date precedes the hire date, or a work-log entry belongs to a
/// different employee.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_settlement;
/// use liquidacion_engine::config::SettlementRules;
/// use liquidacion_engine::models::{Employee, WorkLogEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana Mora".to_string(),
///     cedula: None,
///     position: "Cocinera".to_string(),
///     contract_type: "Indefinido".to_string(),
///     payment_type: "Semanal".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     daily_salary: Decimal::from(10000),
///     exit_date: None,
/// };
/// let logs = vec![
///     WorkLogEntry {
///         id: "log_001".to_string(),
///         employee_id: "emp_001".to_string(),
///         days_worked: 7,
///         period_start: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///         total_payment: Decimal::from(70000),
///     },
///     WorkLogEntry {
///         id: "log_002".to_string(),
///         employee_id: "emp_001".to_string(),
///         days_worked: 7,
///         period_start: NaiveDate::from_ymd_opt(2024, 4, 14).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
///         total_payment: Decimal::from(70000),
///     },
/// ];
///
/// let result = calculate_settlement(
///     &employee,
///     &logs,
///     NaiveDate::from_ymd_opt(2024, 5, 1),
///     &SettlementRules::default(),
/// )?;
///
/// assert_eq!(result.aguinaldo, Decimal::from_str("11666.67").unwrap());
/// assert_eq!(result.cesantia, Decimal::from_str("70000.00").unwrap());
/// assert_eq!(result.total, Decimal::from_str("81666.67").unwrap());
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
pub fn calculate_settlement(
    employee: &Employee,
    work_logs: &[WorkLogEntry],
    exit_date: Option<NaiveDate>,
    rules: &SettlementRules,
) -> EngineResult<SettlementResult> {
    let exit_date = exit_date.unwrap_or_else(today);

    if let Err(err) = validate_inputs(employee, work_logs, exit_date) {
        warn!(employee_id = %employee.id, error = %err, "Rejected settlement input");
        return Err(err);
    }

    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(3);
    let mut step_number: u32 = 1;

    let aguinaldo_result = calculate_aguinaldo(
        employee.hire_date,
        work_logs,
        exit_date,
        &rules.aguinaldo,
        step_number,
    )?;
    audit_steps.push(aguinaldo_result.audit_step.clone());
    step_number += 1;

    let tenure = measure_tenure(employee.hire_date, exit_date, &rules.cesantia);
    let cesantia_result =
        calculate_cesantia(employee.daily_salary, &tenure, &rules.cesantia, step_number)?;
    audit_steps.push(cesantia_result.audit_step.clone());
    step_number += 1;

    let aguinaldo = aguinaldo_result.aguinaldo;
    let cesantia = cesantia_result.cesantia;
    let total = aguinaldo
        .checked_add(cesantia)
        .map(round_currency)
        .ok_or_else(|| EngineError::invalid_input("daily_salary", "settlement total overflows"))?;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "settlement_total".to_string(),
        rule_name: "Settlement Total".to_string(),
        clause_ref: format!("{} / {}", rules.aguinaldo.clause, rules.cesantia.clause),
        input: serde_json::json!({
            "aguinaldo": aguinaldo.to_string(),
            "cesantia": cesantia.to_string(),
        }),
        output: serde_json::json!({
            "total": total.to_string(),
        }),
        reasoning: format!("₡{} + ₡{} = ₡{}", aguinaldo, cesantia, total),
    });

    info!(
        employee_id = %employee.id,
        exit_date = %exit_date,
        tenure_days = tenure.days,
        aguinaldo = %aguinaldo,
        cesantia = %cesantia,
        total = %total,
        "Settlement calculated"
    );

    Ok(SettlementResult {
        employee_id: employee.id.clone(),
        dates: SettlementDates {
            entry: employee.hire_date,
            exit: exit_date,
        },
        accrual_start: aguinaldo_result.accrual_start,
        breakdown_labels: BreakdownLine::from_breakdown(&aguinaldo_result.breakdown),
        breakdown: aguinaldo_result.breakdown,
        aguinaldo_total: aguinaldo_result.aguinaldo_total,
        aguinaldo,
        cesantia_days: cesantia_result.cesantia_days,
        cesantia,
        total,
        seniority: seniority(tenure.days, &rules.seniority),
        rules_version: rules.version.clone(),
        audit_steps,
    })
}
