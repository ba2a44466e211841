//! The persisted form of a finalized settlement.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable settlement record, written once when a preview is confirmed.
///
/// Monetary fields are copied verbatim from the confirmed
/// [`SettlementResult`](super::SettlementResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The settled employee.
    pub employee_id: String,
    /// The separation date written to the employee.
    pub exit_date: NaiveDate,
    /// Aguinaldo paid.
    pub aguinaldo: Decimal,
    /// Cesantía paid.
    pub cesantia: Decimal,
    /// Total paid.
    pub total: Decimal,
    /// Free-form notes entered at confirmation.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the settlement was confirmed.
    pub finalized_at: DateTime<Utc>,
}
