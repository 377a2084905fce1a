use finpulse::AppCommand;
use finpulse::cli::OutputFormat;
use finpulse::core::config::AppConfig;
use finpulse::core::calendar::{PaymentKind, upcoming_payments};
use finpulse::core::health::calculate_category_scores;
use finpulse::core::recommendations::get_recommendations;
use finpulse::core::safe_to_spend::calculate_safe_to_spend;
use finpulse::core::{FinancialSnapshot, SafeToSpendMode};
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::info;

const LEDGER: &str = r#"
profile:
  name: "Integration"
  salary: 10000
  findeks_score: 1500
assets:
  - name: "Cash"
    type: liquid
    value: 40000
  - name: "Dollars"
    type: gold_currency
    value: 10000
  - name: "Deposit"
    type: term
    value: 50000
liabilities:
  - name: "Card"
    type: credit_card
    current_debt: 10000
    total_limit: 30000
installments:
  - name: "Laptop"
    installment_amount: 2000
    remaining_months: 6
    payment_day: 10
    end_date: "2027-04-10"
transactions:
  - type: expense
    category: rent
    amount: 4000
    date: "2026-10-01"
safe_to_spend_mode: conservative
"#;

fn write_ledger(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp ledger");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp ledger");
    file
}

fn commands() -> Vec<AppCommand> {
    vec![
        AppCommand::Summary,
        AppCommand::Health,
        AppCommand::Spend { mode: None },
        AppCommand::Spend {
            mode: Some(SafeToSpendMode::Aggressive),
        },
        AppCommand::Advice { limit: None },
        AppCommand::Advice { limit: Some(2) },
        AppCommand::Calendar { days: 30 },
        AppCommand::Calendar { days: 400 },
    ]
}

#[test_log::test]
fn test_full_app_flow_table() {
    let file = write_ledger(LEDGER);
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    for command in commands() {
        let result = finpulse::run_command(command, Some(path), OutputFormat::Table);
        assert!(result.is_ok(), "Command failed: {result:?}");
    }
}

#[test_log::test]
fn test_full_app_flow_json() {
    let file = write_ledger(LEDGER);
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    for command in commands() {
        let result = finpulse::run_command(command, Some(path), OutputFormat::Json);
        assert!(result.is_ok(), "Command failed: {result:?}");
    }
}

#[test_log::test]
fn test_empty_ledger_runs() {
    let file = write_ledger("{}\n");
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    for command in commands() {
        let result = finpulse::run_command(command, Some(path), OutputFormat::Table);
        assert!(result.is_ok(), "Command failed: {result:?}");
    }
}

#[test_log::test]
fn test_invalid_ledger_is_rejected() {
    let file = write_ledger(
        r#"
assets:
  - name: ""
    type: liquid
    value: -5
"#,
    );
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    let result = finpulse::run_command(AppCommand::Summary, Some(path), OutputFormat::Table);
    let error = result.expect_err("Invalid ledger should fail");
    let message = format!("{error:#}");
    info!(%message, "Ledger rejected");
    assert!(message.contains("Invalid ledger file"));
    assert!(message.contains("asset #1"));
}

#[test_log::test]
fn test_missing_ledger_is_reported() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing.yaml");

    let result = finpulse::run_command(
        AppCommand::Health,
        path.to_str(),
        OutputFormat::Table,
    );
    let error = result.expect_err("Missing ledger should fail");
    assert!(error.to_string().contains("Failed to read ledger file"));
}

#[test]
fn test_snapshot_feeds_calculators() {
    let config = AppConfig::from_yaml(LEDGER).expect("Ledger should be valid");
    let snapshot = FinancialSnapshot::from_ledger(&config);

    assert_eq!(snapshot.total_assets, 100000.0);
    assert_eq!(snapshot.liquid_assets, 50000.0);
    assert_eq!(snapshot.net_worth, 90000.0);
    assert_eq!(snapshot.monthly_installments, 2000.0);

    // 50000 - 1.5 * 10000 - 2000
    let params = snapshot.safe_to_spend_params();
    assert_eq!(calculate_safe_to_spend(&params, SafeToSpendMode::Balanced), 33000.0);
    // 50000 - 10000 - 3 * 10000 - 3 * 2000
    assert_eq!(calculate_safe_to_spend(&params, SafeToSpendMode::Conservative), 4000.0);

    let scores = calculate_category_scores(&snapshot.health_params());
    assert!((0.0..=100.0).contains(&scores.overall));
}

#[test]
fn test_emergency_fund_advice_leads_for_thin_cash() {
    let config = AppConfig::from_yaml(
        r#"
profile:
  salary: 20000
assets:
  - name: "Cash"
    type: liquid
    value: 10000
"#,
    )
    .expect("Ledger should be valid");
    let snapshot = FinancialSnapshot::from_ledger(&config);

    let recommendations = get_recommendations(&snapshot.recommendation_params(50.0));
    assert_eq!(recommendations[0].id, "emergency-fund");
    assert_eq!(recommendations[1].id, "budget-rule");
}

#[test]
fn test_installment_calendar_follows_ledger() {
    let config = AppConfig::from_yaml(LEDGER).expect("Ledger should be valid");
    let from = chrono::NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date");

    let events = upcoming_payments(&config, from, 365);
    // October 2026 through April 2027 on the 10th
    assert_eq!(events.len(), 7);
    assert!(events.iter().all(|e| e.kind == PaymentKind::Installment));
    assert_eq!(events.last().map(|e| e.date.to_string()), Some("2027-04-10".to_string()));
}
