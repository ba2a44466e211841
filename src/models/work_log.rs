//! Work-log (jornada) payment records.
//!
//! A [`WorkLogEntry`] records a period of days worked and the amount paid
//! for it. Entries are append-only from the engine's point of view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Employee, MonthKey};

/// A recorded pay period for one employee.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::WorkLogEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = WorkLogEntry {
///     id: "log_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     days_worked: 7,
///     period_start: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     total_payment: Decimal::from(70000),
/// };
/// assert_eq!(entry.month().label(), "MARZO 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee the payment was made to.
    pub employee_id: String,
    /// Number of days worked in the period.
    #[serde(default)]
    pub days_worked: u32,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive); this date decides accrual.
    pub period_end: NaiveDate,
    /// Amount paid for the period.
    pub total_payment: Decimal,
}

impl WorkLogEntry {
    /// Builds an entry paying `days_worked` days at the employee's daily salary.
    ///
    /// Fails with [`EngineError::InvalidInput`] when the period is inverted.
    ///
    /// # Example
    ///
    /// ```
    /// use liquidacion_engine::models::{Employee, WorkLogEntry};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana Mora".to_string(),
    ///     cedula: None,
    ///     position: String::new(),
    ///     contract_type: String::new(),
    ///     payment_type: String::new(),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     daily_salary: Decimal::from(10000),
    ///     exit_date: None,
    /// };
    ///
    /// let entry = WorkLogEntry::for_days_worked(
    ///     "log_001",
    ///     &employee,
    ///     6,
    ///     NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    /// )?;
    /// assert_eq!(entry.total_payment, Decimal::from(60000));
    /// # Ok::<(), liquidacion_engine::error::EngineError>(())
    /// ```
    pub fn for_days_worked(
        id: impl Into<String>,
        employee: &Employee,
        days_worked: u32,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> EngineResult<Self> {
        if period_start > period_end {
            return Err(EngineError::invalid_input(
                "period_end",
                format!("{} precedes period start {}", period_end, period_start),
            ));
        }

        let total_payment = employee
            .daily_salary
            .checked_mul(Decimal::from(days_worked))
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "daily_salary",
                    format!("₡{} x {} days overflows", employee.daily_salary, days_worked),
                )
            })?;

        Ok(Self {
            id: id.into(),
            employee_id: employee.id.clone(),
            days_worked,
            period_start,
            period_end,
            total_payment,
        })
    }

    /// The calendar month the payment accrues to.
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.period_end)
    }

    /// Returns true if the period ends within `[start, end]`, both inclusive.
    pub fn ends_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.period_end >= start && self.period_end <= end
    }
}
