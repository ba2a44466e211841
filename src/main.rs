//! `liquidacion` command-line entry point.
//!
//! Reads a settlement request (employee, work logs, optional exit date) from a
//! JSON file and prints the calculated settlement as JSON.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use liquidacion_engine::calculation::{calculate_settlement, finalize_settlement, parse_date};
use liquidacion_engine::config::{ConfigLoader, SettlementRules};
use liquidacion_engine::error::EngineError;
use liquidacion_engine::models::{Employee, SettlementRecord, SettlementResult, WorkLogEntry};

/// liquidacion - Costa Rican labor settlement calculator
#[derive(Parser, Debug)]
#[command(name = "liquidacion")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON settlement request
    request: PathBuf,

    /// Directory containing settlement.yaml (built-in rules when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mark the employee as settled and print the settlement record
    #[arg(long)]
    finalize: bool,

    /// Notes stored on the settlement record
    #[arg(long, requires = "finalize")]
    notes: Option<String>,
}

/// Request file layout.
#[derive(Debug, Deserialize)]
struct SettlementRequest {
    employee: Employee,
    #[serde(default)]
    work_logs: Vec<WorkLogEntry>,
    #[serde(default)]
    exit_date: Option<String>,
}

/// Output of `--finalize`.
#[derive(Debug, Serialize)]
struct FinalizedSettlement {
    employee: Employee,
    settlement: SettlementResult,
    record: SettlementRecord,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let rules = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)?.into_rules(),
        None => SettlementRules::default(),
    };

    let content = fs::read_to_string(&cli.request)
        .map_err(|e| format!("cannot read {}: {}", cli.request.display(), e))?;
    let request: SettlementRequest = serde_json::from_str(&content)
        .map_err(|e| EngineError::invalid_input("request", e.to_string()))?;

    let exit_date = request
        .exit_date
        .as_deref()
        .map(|value| parse_date(value, "exit_date"))
        .transpose()?;

    info!(
        employee_id = %request.employee.id,
        work_log_entries = request.work_logs.len(),
        rules_version = %rules.version,
        "Calculating settlement"
    );

    let settlement = calculate_settlement(&request.employee, &request.work_logs, exit_date, &rules)?;

    if !cli.finalize {
        return Ok(serde_json::to_string_pretty(&settlement)?);
    }

    let mut employee = request.employee;
    let record = finalize_settlement(&mut employee, &settlement, cli.notes)?;
    Ok(serde_json::to_string_pretty(&FinalizedSettlement {
        employee,
        settlement,
        record,
    })?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Settlement failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const REQUEST: &str = r#"{
        "employee": {
            "id": "emp_001",
            "name": "Ana Mora",
            "hire_date": "2024-01-10",
            "daily_salary": "10000"
        },
        "work_logs": [
            {
                "id": "log_001",
                "employee_id": "emp_001",
                "period_start": "2024-03-09",
                "period_end": "2024-03-15",
                "total_payment": "70000"
            },
            {
                "id": "log_002",
                "employee_id": "emp_001",
                "period_start": "2024-04-14",
                "period_end": "2024-04-20",
                "total_payment": "70000"
            }
        ],
        "exit_date": "2024-05-01"
    }"#;

    fn write_request(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("request.json");
        fs::write(&path, content).unwrap();
        path
    }

    fn cli_for(request: PathBuf) -> Cli {
        Cli {
            request,
            config: None,
            finalize: false,
            notes: None,
        }
    }

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::try_parse_from(["liquidacion", "request.json"]).unwrap();
        assert_eq!(cli.request, PathBuf::from("request.json"));
        assert!(cli.config.is_none());
        assert!(!cli.finalize);
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "liquidacion",
            "--config",
            "./config/costa_rica",
            "request.json",
            "--finalize",
            "--notes",
            "Despido con responsabilidad",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("./config/costa_rica")));
        assert!(cli.finalize);
        assert_eq!(cli.notes.as_deref(), Some("Despido con responsabilidad"));
    }

    #[test]
    fn test_cli_usage_errors() {
        assert!(Cli::try_parse_from(["liquidacion"]).is_err());
        assert!(Cli::try_parse_from(["liquidacion", "a.json", "b.json"]).is_err());
        assert!(Cli::try_parse_from(["liquidacion", "a.json", "--config"]).is_err());
        assert!(Cli::try_parse_from(["liquidacion", "a.json", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["liquidacion", "a.json", "--notes", "x"]).is_err());
    }

    #[test]
    fn test_request_deserializes_without_optional_fields() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "name": "Ana Mora",
                "hire_date": "2024-01-10",
                "daily_salary": "10000"
            }
        }"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert!(request.work_logs.is_empty());
        assert!(request.exit_date.is_none());
    }

    #[test]
    fn test_run_prints_settlement() {
        let dir = tempfile::tempdir().unwrap();
        let request = write_request(dir.path(), REQUEST);

        let output = run(cli_for(request)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["total"], "81666.67");
        assert_eq!(json["breakdownLabels"][0]["label"], "MARZO 2024");
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_run_with_shipped_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(write_request(dir.path(), REQUEST));
        cli.config = Some(PathBuf::from("./config/costa_rica"));

        let json: serde_json::Value = serde_json::from_str(&run(cli).unwrap()).unwrap();

        assert_eq!(json["rulesVersion"], "2024-01-01");
    }

    #[test]
    fn test_run_finalize_prints_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(write_request(dir.path(), REQUEST));
        cli.finalize = true;
        cli.notes = Some("Renuncia".to_string());

        let json: serde_json::Value = serde_json::from_str(&run(cli).unwrap()).unwrap();

        assert_eq!(json["employee"]["exit_date"], "2024-05-01");
        assert_eq!(json["settlement"]["total"], "81666.67");
        assert_eq!(json["record"]["total"], "81666.67");
        assert_eq!(json["record"]["notes"], "Renuncia");
    }

    #[test]
    fn test_run_rejects_bad_requests() {
        let dir = tempfile::tempdir().unwrap();

        let missing = run(cli_for(dir.path().join("absent.json")));
        assert!(missing.unwrap_err().to_string().contains("cannot read"));

        let malformed = run(cli_for(write_request(dir.path(), "{\"employee\": 1}")));
        assert!(malformed.unwrap_err().to_string().contains("Invalid input 'request'"));

        let bad_exit = REQUEST.replace("2024-05-01", "2024-13-01");
        let bad_date = run(cli_for(write_request(dir.path(), &bad_exit)));
        assert!(bad_date.unwrap_err().to_string().contains("exit_date"));
    }
}
