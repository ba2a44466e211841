//! Date input handling.

use chrono::{Local, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Format accepted for date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date, naming `field` in the error.
///
/// No coercion is attempted beyond standard parsing: other layouts,
/// timestamps and impossible days are all rejected.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2024-05-01", "exit_date").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
/// );
/// assert!(parse_date("2024-02-30", "exit_date").is_err());
/// ```
pub fn parse_date(value: &str, field: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        EngineError::invalid_input(field, format!("'{}' is not a valid date: {}", value, e))
    })
}

/// The current local calendar date, used when no exit date is given.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
