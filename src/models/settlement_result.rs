//! Settlement result models.
//!
//! This module contains the [`SettlementResult`] type and its associated
//! structures. The JSON field names and the two-decimal rounding of the
//! monetary fields are the contract consumed by the document layer.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the law or article for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Entry and exit dates of the settled employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementDates {
    /// Hire date.
    pub entry: NaiveDate,
    /// Separation date.
    pub exit: NaiveDate,
}

/// Length of service in whole years and remaining months (antigüedad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seniority {
    /// Whole years of service.
    pub years: i64,
    /// Whole months beyond the last full year.
    pub months: i64,
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years > 0 {
            write!(f, "{} años, {} meses", self.years, self.months)
        } else {
            write!(f, "{} meses", self.months)
        }
    }
}

/// One breakdown row as printed on the settlement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The accrual month.
    pub month: MonthKey,
    /// Display label, e.g. `"MARZO 2024"`.
    pub label: String,
    /// Payments accrued in the month.
    pub amount: Decimal,
}

impl BreakdownLine {
    /// Builds the labeled rows for `breakdown`, in chronological order.
    pub fn from_breakdown(breakdown: &BTreeMap<MonthKey, Decimal>) -> Vec<Self> {
        breakdown
            .iter()
            .map(|(month, amount)| Self {
                month: *month,
                label: month.label(),
                amount: *amount,
            })
            .collect()
    }
}

/// The complete result of a settlement calculation.
///
/// Two calculations over the same inputs compare equal; nothing in here
/// depends on the wall clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    /// The ID of the settled employee.
    pub employee_id: String,
    /// Entry and exit dates.
    pub dates: SettlementDates,
    /// First day of the aguinaldo accrual window.
    pub accrual_start: NaiveDate,
    /// Accrued payments grouped by the month of each period end.
    pub breakdown: BTreeMap<MonthKey, Decimal>,
    /// `breakdown` with display labels, for documents that print rows as-is.
    #[serde(default)]
    pub breakdown_labels: Vec<BreakdownLine>,
    /// Sum of `breakdown`.
    pub aguinaldo_total: Decimal,
    /// Prorated aguinaldo owed, `aguinaldo_total / 12` rounded to cents.
    pub aguinaldo: Decimal,
    /// Days of salary owed as cesantía.
    pub cesantia_days: Decimal,
    /// Cesantía owed, rounded to cents.
    pub cesantia: Decimal,
    /// `aguinaldo + cesantia`, rounded to cents.
    pub total: Decimal,
    /// Length of service.
    pub seniority: Seniority,
    /// Version of the rule set used.
    pub rules_version: String,
    /// Every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl SettlementResult {
    /// The breakdown with display labels, in chronological order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn show(result: &liquidacion_engine::models::SettlementResult) {
    /// for (label, amount) in result.labeled_breakdown() {
    ///     println!("{label}: ₡{amount}");
    /// }
    /// # }
    /// ```
    pub fn labeled_breakdown(&self) -> Vec<(String, Decimal)> {
        self.breakdown
            .iter()
            .map(|(month, amount)| (month.label(), *amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> SettlementResult {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(MonthKey::new(2024, 4).unwrap(), dec("70000"));
        breakdown.insert(MonthKey::new(2024, 3).unwrap(), dec("70000"));

        SettlementResult {
            employee_id: "emp_001".to_string(),
            dates: SettlementDates {
                entry: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                exit: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            },
            accrual_start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            breakdown_labels: BreakdownLine::from_breakdown(&breakdown),
            breakdown,
            aguinaldo_total: dec("140000"),
            aguinaldo: dec("11666.67"),
            cesantia_days: dec("7"),
            cesantia: dec("70000.00"),
            total: dec("81666.67"),
            seniority: Seniority { years: 0, months: 3 },
            rules_version: "2024-01-01".to_string(),
            audit_steps: vec![],
        }
    }

    #[test]
    fn test_result_serializes_contract_field_names() {
        let json = serde_json::to_string(&create_sample_result()).unwrap();

        assert!(json.contains("\"aguinaldoTotal\":\"140000\""));
        assert!(json.contains("\"aguinaldo\":\"11666.67\""));
        assert!(json.contains("\"cesantia\":\"70000.00\""));
        assert!(json.contains("\"total\":\"81666.67\""));
        assert!(json.contains("\"dates\":{\"entry\":\"2024-01-10\",\"exit\":\"2024-05-01\"}"));
        assert!(json.contains("\"breakdown\":{\"2024-03\":\"70000\",\"2024-04\":\"70000\"}"));
    }

    #[test]
    fn test_result_deserialization() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();

        let back: SettlementResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_breakdown_labels_serialized_for_documents() {
        let json: serde_json::Value = serde_json::to_value(create_sample_result()).unwrap();

        let lines = json["breakdownLabels"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["month"], "2024-03");
        assert_eq!(lines[0]["label"], "MARZO 2024");
        assert_eq!(lines[0]["amount"], "70000");
        assert_eq!(lines[1]["label"], "ABRIL 2024");
    }

    #[test]
    fn test_labeled_breakdown_is_chronological() {
        let labels: Vec<String> = create_sample_result()
            .labeled_breakdown()
            .into_iter()
            .map(|(label, _)| label)
            .collect();

        assert_eq!(labels, vec!["MARZO 2024", "ABRIL 2024"]);
    }

    #[test]
    fn test_seniority_display() {
        assert_eq!(Seniority { years: 0, months: 3 }.to_string(), "3 meses");
        assert_eq!(
            Seniority { years: 2, months: 5 }.to_string(),
            "2 años, 5 meses"
        );
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "cesantia_tier".to_string(),
            rule_name: "Cesantía Tier".to_string(),
            clause_ref: "Código de Trabajo, art. 29".to_string(),
            input: serde_json::json!({"months": "3.68"}),
            output: serde_json::json!({"cesantia_days": "7"}),
            reasoning: "3 to 6 months of service".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"cesantia_tier\""));
    }
}
