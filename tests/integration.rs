//! Integration tests for the salary engine.
//!
//! This test suite covers:
//! - Calculations over HTTP with defaults, inputs and selections
//! - Configuration editing over HTTP (items, brackets, import, reset)
//! - Roster management, batch results and CSV export
//! - Engine-level properties: defaulting, round-trip, batch aggregation
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{create_router, AppState};
use salary_engine::calculation::calculate_progressive_tax;
use salary_engine::config::{ConfigFormat, SalaryConfig};
use salary_engine::engine::PayrollEngine;
use salary_engine::models::{SalaryInputs, WARN_ARITHMETIC_OVERFLOW, WARN_NO_MATCHING_BRACKET};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(PayrollEngine::new()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn send_text(router: &Router, method: &str, uri: &str, body: String) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = normalize_decimal(value.as_str().unwrap());
    assert_eq!(actual, normalize_decimal(expected), "Expected {}, got {}", expected, actual);
}

fn deduction_amount(result: &Value, name: &str) -> Option<String> {
    result["deductions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|line| line["name"] == name)
        .map(|line| normalize_decimal(line["amount"].as_str().unwrap()))
}

// =============================================================================
// SECTION 1: Calculation
// =============================================================================

#[tokio::test]
async fn test_default_calculation() {
    // 12800 income; 1050 + 1200 pre-tax; (12800 - 2250 - 5000) * 0.03 - 150 = 16.5
    let router = create_router_for_test();

    let (status, body) = send(&router, "POST", "/calculate", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_amount(&result["total_income"], "12800");
    assert_amount(&result["total_deductions"], "2266.5");
    assert_amount(&result["net_income"], "10533.5");
    assert_eq!(deduction_amount(result, "Income Tax").as_deref(), Some("16.5"));
    assert_eq!(body["summary"]["net_income"], "¥10,533.50");
    assert_eq!(result["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_zero_input_uses_default() {
    let router = create_router_for_test();

    let (_, body) = send(
        &router,
        "POST",
        "/calculate",
        Some(json!({ "inputs": { "Base Salary": 0 } })),
    )
    .await;

    assert_amount(&body["result"]["total_income"], "12800");
}

#[tokio::test]
async fn test_high_income_uses_top_bracket() {
    // 100000 + 2800 income; SI 10500, HF 12000; taxable 75300 -> 35% bracket
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        "POST",
        "/calculate",
        Some(json!({ "inputs": { "Base Salary": "100000" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        deduction_amount(&body["result"], "Income Tax").as_deref(),
        Some("17445")
    );
}

#[tokio::test]
async fn test_optional_deduction_only_when_selected() {
    let router = create_router_for_test();
    let (status, _) = send(
        &router,
        "POST",
        "/config/deduction-items",
        Some(json!({ "name": "Union Fee", "type": "fixed_amount", "amount": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, default_run) = send(&router, "POST", "/calculate", Some(json!({}))).await;
    let (_, selected_run) = send(
        &router,
        "POST",
        "/calculate",
        Some(json!({
            "inputs": { "deduction_Union Fee": 80 },
            "selected_deductions": ["Union Fee"]
        })),
    )
    .await;

    assert_eq!(deduction_amount(&default_run["result"], "Union Fee"), None);
    assert_eq!(
        deduction_amount(&selected_run["result"], "Union Fee").as_deref(),
        Some("80")
    );
    assert_eq!(selected_run["result"]["deductions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_out_of_range_inputs_return_clamped_result() {
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        "POST",
        "/calculate",
        Some(json!({
            "inputs": {
                "Base Salary": "50000000000000000000000000000",
                "Performance Bonus": "50000000000000000000000000000"
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&body["result"]["total_income"], &Decimal::MAX.to_string());
    let codes: Vec<&str> = body["result"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["code"].as_str())
        .collect();
    assert!(codes.contains(&WARN_ARITHMETIC_OVERFLOW));
}

// =============================================================================
// SECTION 2: Configuration editing
// =============================================================================

#[tokio::test]
async fn test_rename_income_item_repoints_percentage_bases() {
    let router = create_router_for_test();

    let (status, items) = send(
        &router,
        "PUT",
        "/config/income-items/Base%20Salary",
        Some(json!({ "new_name": "Basic Pay" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["name"], "Basic Pay");

    let (_, deductions) = send(&router, "GET", "/config/deduction-items", None).await;
    assert_eq!(deductions[0]["base"], "Basic Pay");
    assert_eq!(deductions[1]["base"], "Basic Pay");

    let (_, body) = send(&router, "POST", "/calculate", Some(json!({}))).await;
    assert_eq!(
        deduction_amount(&body["result"], "Social Insurance").as_deref(),
        Some("1050")
    );
}

#[tokio::test]
async fn test_rename_collision_returns_409() {
    let router = create_router_for_test();

    let (status, error) = send(
        &router,
        "PUT",
        "/config/income-items/Base%20Salary",
        Some(json!({ "new_name": "Meal Allowance" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_NAME");
}

#[tokio::test]
async fn test_empty_name_returns_400() {
    let router = create_router_for_test();

    let (status, error) = send(
        &router,
        "POST",
        "/config/income-items",
        Some(json!({ "name": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_override_prefixed_income_name_returns_400() {
    let router = create_router_for_test();

    let (status, error) = send(
        &router,
        "POST",
        "/config/income-items",
        Some(json!({ "name": "deduction_bonus", "default": 100 })),
    )
    .await;
    let (_, config) = send(&router, "GET", "/config", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(config["income_items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_tax_bracket_editing() {
    let router = create_router_for_test();

    let (status, brackets) = send(
        &router,
        "POST",
        "/config/tax-brackets",
        Some(json!({ "min_income": 2000, "max_income": 3000, "rate": 0.01 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(brackets.as_array().unwrap().len(), 9);
    assert_eq!(brackets[1]["min"], json!("2000"));

    let (status, _) = send(&router, "DELETE", "/config/tax-brackets/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(&router, "DELETE", "/config/tax-brackets/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "BRACKET_NOT_FOUND");

    let (_, brackets) = send(&router, "GET", "/config/tax-brackets", None).await;
    assert_eq!(brackets.as_array().unwrap().len(), 8);
    assert_eq!(brackets[7]["max"], json!(-1));
}

#[tokio::test]
async fn test_import_rejects_duplicates_and_keeps_config() {
    let router = create_router_for_test();
    let (_, mut config) = send(&router, "GET", "/config", None).await;
    let first = config["income_items"][0].clone();
    config["income_items"].as_array_mut().unwrap().push(first);

    let (status, error) = send_text(&router, "PUT", "/config", config.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error.contains("INVALID_CONFIG"));

    let (_, current) = send(&router, "GET", "/config", None).await;
    assert_eq!(current["income_items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_export_import_round_trip_over_http() {
    let router = create_router_for_test();
    send(
        &router,
        "POST",
        "/config/income-items",
        Some(json!({ "name": "Night Shift", "default": 800 })),
    )
    .await;
    let (_, exported) = send(&router, "GET", "/config", None).await;

    let (status, _) = send(&router, "POST", "/config/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_text(&router, "PUT", "/config", exported.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (_, current) = send(&router, "GET", "/config", None).await;
    assert_eq!(current, exported);
}

// =============================================================================
// SECTION 3: Roster
// =============================================================================

#[tokio::test]
async fn test_roster_lifecycle() {
    let router = create_router_for_test();

    let (status, employee) = send(&router, "POST", "/employees", Some(json!({ "name": "Zhang San" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["selected_deductions"].as_array().unwrap().len(), 3);

    let (status, _) = send(&router, "POST", "/employees", Some(json!({ "name": "Zhang San" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &router,
        "PUT",
        "/employees/Zhang%20San",
        Some(json!({ "salary_data": { "Base Salary": 20000 } })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, results) = send(&router, "GET", "/employees/results", None).await;
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Zhang San");
    // Only Base Salary is stored now; the other items use their defaults.
    assert_amount(&results[0]["result"]["total_income"], "22800");

    let (status, _) = send(&router, "DELETE", "/employees/Zhang%20San", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&router, "GET", "/employees/Zhang%20San", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roster_export_csv() {
    let router = create_router_for_test();
    send(&router, "POST", "/employees", Some(json!({ "name": "Zhang San" }))).await;
    send(&router, "POST", "/employees", Some(json!({ "name": "Li Si" }))).await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/employees/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/csv"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("employee,income_Base Salary"));
    assert!(lines[1].starts_with("Zhang San,10000"));
}

// =============================================================================
// SECTION 4: Engine-level properties
// =============================================================================

#[test]
fn test_defaults_sum_to_total_income() {
    let engine = PayrollEngine::new();

    let result = engine.calculate_salary(&SalaryInputs::new(), None);
    let defaults: Decimal = engine
        .config()
        .income_items()
        .iter()
        .map(|item| item.default)
        .sum();

    assert_eq!(result.total_income, defaults);
    for name in engine.config().mandatory_deductions() {
        assert!(result.deduction(&name).is_some(), "{} missing", name);
    }
}

#[test]
fn test_progressive_tax_boundaries() {
    let config = SalaryConfig::default();
    let rule = config.progressive_tax().unwrap();

    assert_eq!(calculate_progressive_tax(rule, decimal("5000")).tax, Decimal::ZERO);
    assert_eq!(
        calculate_progressive_tax(rule, decimal("5000.01")).tax,
        decimal("5000.01") * decimal("0.03") - decimal("150")
    );
    assert_eq!(calculate_progressive_tax(rule, decimal("8000")).tax, decimal("90"));
    assert_eq!(
        calculate_progressive_tax(rule, decimal("8000.01")).tax,
        decimal("8000.01") * decimal("0.10") - decimal("710")
    );
}

#[test]
fn test_yaml_round_trip_preserves_everything() {
    let mut engine = PayrollEngine::new();
    engine
        .add_tax_bracket(decimal("120000"), decimal("-1"), decimal("0.5"), decimal("23410"))
        .unwrap();
    let original = engine.config().clone();

    let text = engine.export_config(ConfigFormat::Yaml).unwrap();
    engine.reset_config();
    engine.import_config(&text, ConfigFormat::Yaml).unwrap();

    assert_eq!(engine.config(), &original);
    assert_eq!(engine.config().tax_brackets().last().unwrap().max_income, None);
}

#[test]
fn test_defaulted_employee_matches_temporary_calculation() {
    let mut engine = PayrollEngine::new();
    engine.add_employee("Wang Wu", None, None).unwrap();

    let batch = engine.calculate_all_employees();
    let temporary = engine.calculate_salary(&SalaryInputs::new(), None);

    assert_eq!(batch[0].result, temporary);
}

/// Deleting every bracket is allowed; tax then becomes zero with a warning.
#[test]
fn test_delete_last_tax_bracket() {
    let mut engine = PayrollEngine::new();
    while engine.config().tax_brackets().len() > 1 {
        engine.delete_tax_bracket(0).unwrap();
    }

    engine.delete_tax_bracket(0).unwrap();
    let result = engine.calculate_salary(&SalaryInputs::new(), None);

    assert!(engine.config().tax_brackets().is_empty());
    assert_eq!(result.deduction("Income Tax"), Some(Decimal::ZERO));
    assert!(result.has_warning(WARN_NO_MATCHING_BRACKET));
    assert!(engine.delete_tax_bracket(0).is_err());
}

proptest! {
    #[test]
    fn prop_batch_equals_individual_calculations(
        salaries in prop::collection::vec(0i64..200_000, 1..20),
        with_tax_only in any::<bool>(),
    ) {
        let mut engine = PayrollEngine::new();
        let selection = if with_tax_only { Some(names(&["Income Tax"])) } else { None };
        for (i, salary) in salaries.iter().enumerate() {
            let inputs = SalaryInputs::new().with_income("Base Salary", Decimal::from(*salary));
            engine
                .add_employee(&format!("emp_{}", i), Some(inputs), selection.clone())
                .unwrap();
        }

        let batch = engine.calculate_all_employees();

        prop_assert_eq!(batch.len(), salaries.len());
        for (entry, employee) in batch.iter().zip(engine.get_employees()) {
            let single = engine.calculate_salary(
                &employee.salary_data,
                Some(employee.selected_deductions.as_slice()),
            );
            prop_assert_eq!(&entry.result, &single);
        }
    }
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_deduction_type() {
    let router = create_router_for_test();

    let (status, error) = send(
        &router,
        "POST",
        "/config/deduction-items",
        Some(json!({ "name": "Parking" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_unknown_item_returns_404() {
    let router = create_router_for_test();

    let (status, error) = send(&router, "DELETE", "/config/income-items/Stock%20Options", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}
