//! Settlement finalization.
//!
//! Once a preview has been confirmed, [`finalize_settlement`] stamps the
//! employee's exit date and produces the record the caller persists. The
//! record copies the confirmed amounts as they are; nothing is recomputed.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SettlementRecord, SettlementResult};

/// Confirms `result` for `employee`.
///
/// On success the employee moves to `Settled` with the result's exit date.
/// On failure the employee is left untouched.
///
/// # Errors
///
/// * [`EngineError::InvalidInput`] if `result` was calculated for another
///   employee or another hire date
/// * [`EngineError::AlreadySettled`] if the employee already has an exit date
pub fn finalize_settlement(
    employee: &mut Employee,
    result: &SettlementResult,
    notes: Option<String>,
) -> EngineResult<SettlementRecord> {
    if result.employee_id != employee.id {
        return Err(EngineError::invalid_input(
            "employee_id",
            format!(
                "settlement was calculated for '{}', not '{}'",
                result.employee_id, employee.id
            ),
        ));
    }
    if result.dates.entry != employee.hire_date {
        return Err(EngineError::invalid_input(
            "hire_date",
            format!(
                "settlement used hire date {}, employee record has {}",
                result.dates.entry, employee.hire_date
            ),
        ));
    }

    employee.mark_settled(result.dates.exit)?;

    let record = SettlementRecord {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        exit_date: result.dates.exit,
        aguinaldo: result.aguinaldo,
        cesantia: result.cesantia,
        total: result.total,
        notes,
        finalized_at: Utc::now(),
    };

    info!(
        settlement_id = %record.id,
        employee_id = %record.employee_id,
        exit_date = %record.exit_date,
        total = %record.total,
        "Settlement finalized"
    );

    Ok(record)
}
