//! Property tests for settlement invariants.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use liquidacion_engine::calculation::{calculate_settlement, round_currency};
use liquidacion_engine::config::SettlementRules;
use liquidacion_engine::models::{Employee, MonthKey, WorkLogEntry};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

fn employee(hire_date: NaiveDate, daily_salary: Decimal) -> Employee {
    Employee {
        id: "emp_prop".to_string(),
        name: "Prueba".to_string(),
        cedula: None,
        position: String::new(),
        contract_type: String::new(),
        payment_type: String::new(),
        hire_date,
        daily_salary,
        exit_date: None,
    }
}

/// Daily salary between ₡1.00 and ₡100,000.00.
fn arb_salary() -> impl Strategy<Value = Decimal> {
    (100i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Weekly entries placed as day offsets from the hire date.
fn arb_logs() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..4000, 0i64..5_000_000), 0..40)
}

fn build_logs(hire_date: NaiveDate, raw: &[(i64, i64)]) -> Vec<WorkLogEntry> {
    raw.iter()
        .enumerate()
        .map(|(i, (offset, cents))| {
            let period_end = hire_date + Duration::days(*offset);
            WorkLogEntry {
                id: format!("log_{:03}", i),
                employee_id: "emp_prop".to_string(),
                days_worked: 6,
                period_start: period_end - Duration::days(6),
                period_end,
                total_payment: Decimal::new(*cents, 2),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn total_is_rounded_sum_of_components(
        hire_offset in 0i64..3000,
        tenure_days in 0i64..4000,
        salary in arb_salary(),
        raw_logs in arb_logs(),
    ) {
        let rules = SettlementRules::default();
        let hire = base_date() + Duration::days(hire_offset);
        let exit = hire + Duration::days(tenure_days);
        let logs = build_logs(hire, &raw_logs);

        let result = calculate_settlement(&employee(hire, salary), &logs, Some(exit), &rules).unwrap();

        prop_assert_eq!(result.total, round_currency(result.aguinaldo + result.cesantia));
        prop_assert_eq!(result.aguinaldo, round_currency(result.aguinaldo_total / Decimal::from(12)));
        prop_assert_eq!(result.aguinaldo_total, result.breakdown.values().copied().sum::<Decimal>());
        prop_assert!(result.total >= Decimal::ZERO);
    }

    #[test]
    fn calculation_is_deterministic(
        tenure_days in 0i64..4000,
        salary in arb_salary(),
        raw_logs in arb_logs(),
    ) {
        let rules = SettlementRules::default();
        let hire = base_date();
        let exit = hire + Duration::days(tenure_days);
        let logs = build_logs(hire, &raw_logs);
        let mut reversed = logs.clone();
        reversed.reverse();

        let first = calculate_settlement(&employee(hire, salary), &logs, Some(exit), &rules).unwrap();
        let second = calculate_settlement(&employee(hire, salary), &reversed, Some(exit), &rules).unwrap();

        prop_assert_eq!(&first.breakdown, &second.breakdown);
        prop_assert_eq!(first.total, second.total);
    }

    #[test]
    fn breakdown_months_fall_inside_window(
        tenure_days in 0i64..4000,
        raw_logs in arb_logs(),
    ) {
        let rules = SettlementRules::default();
        let hire = base_date();
        let exit = hire + Duration::days(tenure_days);
        let logs = build_logs(hire, &raw_logs);

        let result =
            calculate_settlement(&employee(hire, Decimal::from(10000)), &logs, Some(exit), &rules).unwrap();

        let first = MonthKey::from_date(result.accrual_start);
        let last = MonthKey::from_date(exit);
        for month in result.breakdown.keys() {
            prop_assert!(*month >= first && *month <= last, "{} outside {}..={}", month, first, last);
        }
    }

    #[test]
    fn under_three_months_owes_no_cesantia(
        tenure_days in 0i64..91,
        salary in arb_salary(),
    ) {
        let rules = SettlementRules::default();
        let hire = base_date();
        let exit = hire + Duration::days(tenure_days);

        let result = calculate_settlement(&employee(hire, salary), &[], Some(exit), &rules).unwrap();

        prop_assert_eq!(result.cesantia, Decimal::ZERO);
        prop_assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn cesantia_never_decreases_with_tenure(
        tenure_days in 0i64..4000,
        extra_days in 1i64..400,
        salary in arb_salary(),
    ) {
        let rules = SettlementRules::default();
        let hire = base_date();
        let shorter = hire + Duration::days(tenure_days);
        let longer = shorter + Duration::days(extra_days);
        let emp = employee(hire, salary);

        let short_result = calculate_settlement(&emp, &[], Some(shorter), &rules).unwrap();
        let long_result = calculate_settlement(&emp, &[], Some(longer), &rules).unwrap();

        prop_assert!(long_result.cesantia_days >= short_result.cesantia_days);
    }
}
