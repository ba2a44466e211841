//! Labor settlement (liquidación) engine for Costa Rican employment law.
//!
//! This crate computes the aguinaldo and cesantía owed to a separated
//! employee from their hire date, daily salary, work-log payment history and
//! exit date.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
