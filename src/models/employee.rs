//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing workers subject to a labor settlement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lifecycle state of an employee.
///
/// The only transition is `Active -> Settled`, taken once when a settlement
/// is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Still employed; no exit date recorded.
    Active,
    /// Separated and settled; the exit date is fixed.
    Settled,
}

/// Represents an employee of the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name, as printed on the settlement.
    pub name: String,
    /// National identity number (cédula), if on file.
    #[serde(default)]
    pub cedula: Option<String>,
    /// Job title (e.g., "Cocinera").
    #[serde(default)]
    pub position: String,
    /// Contract type (e.g., "Indefinido").
    #[serde(default)]
    pub contract_type: String,
    /// How the employee is paid (e.g., "Semanal").
    #[serde(default)]
    pub payment_type: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Average daily salary in colones.
    pub daily_salary: Decimal,
    /// The separation date, set once at settlement.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the lifecycle state derived from the exit date.
    ///
    /// # Examples
    ///
    /// ```
    /// use liquidacion_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
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
    /// assert_eq!(employee.status(), EmployeeStatus::Active);
    /// ```
    pub fn status(&self) -> EmployeeStatus {
        match self.exit_date {
            Some(_) => EmployeeStatus::Settled,
            None => EmployeeStatus::Active,
        }
    }

    /// Returns true while the employee has not been settled.
    pub fn is_active(&self) -> bool {
        self.status() == EmployeeStatus::Active
    }

    /// Records the exit date, moving the employee to `Settled`.
    ///
    /// Fails with [`EngineError::AlreadySettled`] if an exit date is already
    /// recorded, and with [`EngineError::InvalidInput`] if `exit_date`
    /// precedes the hire date.
    pub fn mark_settled(&mut self, exit_date: NaiveDate) -> EngineResult<()> {
        if let Some(existing) = self.exit_date {
            return Err(EngineError::AlreadySettled {
                employee_id: self.id.clone(),
                exit_date: existing,
            });
        }
        if exit_date < self.hire_date {
            return Err(EngineError::invalid_input(
                "exit_date",
                format!("{} precedes hire date {}", exit_date, self.hire_date),
            ));
        }
        self.exit_date = Some(exit_date);
        Ok(())
    }
}
