//! Calculation logic for the settlement engine.
//!
//! This module contains the calculation functions for a labor settlement:
//! currency rounding, date input parsing, tenure measurement, aguinaldo
//! accrual, cesantía tiering, the combined settlement and its finalization.

mod aguinaldo;
mod cesantia;
mod dates;
mod finalization;
mod rounding;
mod settlement;
mod tenure;

pub use aguinaldo::{AguinaldoResult, accrual_window_start, calculate_aguinaldo};
pub use cesantia::{CesantiaResult, calculate_cesantia, cesantia_days};
pub use dates::{DATE_FORMAT, parse_date, today};
pub use finalization::finalize_settlement;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use settlement::calculate_settlement;
pub use tenure::{Tenure, measure_tenure, seniority};
