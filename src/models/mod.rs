//! Core data models for the settlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod month;
mod settlement_record;
mod settlement_result;
mod work_log;

pub use employee::{Employee, EmployeeStatus};
pub use month::MonthKey;
pub use settlement_record::SettlementRecord;
pub use settlement_result::{AuditStep, BreakdownLine, Seniority, SettlementDates, SettlementResult};
pub use work_log::WorkLogEntry;
