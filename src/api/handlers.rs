//! HTTP request handlers for the salary engine API.
//!
//! Every handler tags its log lines with a fresh correlation id. Queries and
//! calculations share the engine through the read lock; mutations take the
//! write lock for the duration of the call.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize;
use crate::config::{
    ConfigFormat, DeductionItem, DeductionItemUpdate, IncomeItem, IncomeItemUpdate, SalaryConfig,
    TaxBracket, TaxBracketUpdate,
};
use crate::error::EngineError;
use crate::models::Employee;
use crate::roster::EmployeeResult;

use super::request::{
    CalculationRequest, EmployeeUpdateRequest, NewDeductionItemRequest, NewEmployeeRequest,
    NewIncomeItemRequest, NewTaxBracketRequest,
};
use super::response::{ApiErrorResponse, CalculationResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/config", get(get_config).put(import_config))
        .route("/config/reset", post(reset_config))
        .route(
            "/config/income-items",
            get(list_income_items).post(add_income_item),
        )
        .route(
            "/config/income-items/:name",
            put(update_income_item).delete(delete_income_item),
        )
        .route(
            "/config/deduction-items",
            get(list_deduction_items).post(add_deduction_item),
        )
        .route(
            "/config/deduction-items/:name",
            put(update_deduction_item).delete(delete_deduction_item),
        )
        .route(
            "/config/tax-brackets",
            get(list_tax_brackets).post(add_tax_bracket),
        )
        .route(
            "/config/tax-brackets/:index",
            put(update_tax_bracket).delete(delete_tax_bracket),
        )
        .route("/employees", get(list_employees).post(add_employee))
        .route("/employees/results", get(employee_results))
        .route("/employees/export", get(export_employees))
        .route(
            "/employees/:name",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

/// Unwraps a JSON body, logging rejections against the correlation id.
fn body<T>(payload: Result<Json<T>, JsonRejection>, correlation_id: Uuid) -> ApiResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            Err(rejection.into())
        }
    }
}

/// Converts an engine error, logging it against the correlation id.
fn engine_error(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for POST /calculate.
///
/// Calculates a salary that is not stored in the roster.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");
    let request = body(payload, correlation_id)?;

    let start_time = Instant::now();
    let engine = state.read().await;
    let result = engine.calculate_salary(&request.inputs, request.selected_deductions.as_deref());
    let summary = summarize(&result);

    info!(
        correlation_id = %correlation_id,
        net_income = %result.net_income,
        warnings = result.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    Ok(Json(CalculationResponse { result, summary }))
}

// ---- Configuration ----

async fn get_config(State(state): State<AppState>) -> Json<SalaryConfig> {
    Json(state.read().await.config().clone())
}

/// Handler for PUT /config.
///
/// The body is a JSON configuration document. It replaces the live
/// configuration only if it parses and validates.
async fn import_config(
    State(state): State<AppState>,
    text: String,
) -> ApiResult<Json<SalaryConfig>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = text.len(), "Importing configuration");

    let mut engine = state.write().await;
    engine
        .import_config(&text, ConfigFormat::Json)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(engine.config().clone()))
}

async fn reset_config(State(state): State<AppState>) -> Json<SalaryConfig> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Resetting configuration");

    let mut engine = state.write().await;
    engine.reset_config();
    Json(engine.config().clone())
}

async fn list_income_items(State(state): State<AppState>) -> Json<Vec<IncomeItem>> {
    Json(state.read().await.config().income_items().to_vec())
}

async fn add_income_item(
    State(state): State<AppState>,
    payload: Result<Json<NewIncomeItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<IncomeItem>>)> {
    let correlation_id = Uuid::new_v4();
    let request = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, name = %request.name, "Adding income item");

    let mut engine = state.write().await;
    engine
        .add_income_item(&request.name, request.default, request.required)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok((
        StatusCode::CREATED,
        Json(engine.config().income_items().to_vec()),
    ))
}

async fn update_income_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<IncomeItemUpdate>, JsonRejection>,
) -> ApiResult<Json<Vec<IncomeItem>>> {
    let correlation_id = Uuid::new_v4();
    let update = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, name = %name, "Updating income item");

    let mut engine = state.write().await;
    engine
        .update_income_item(&name, update)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(engine.config().income_items().to_vec()))
}

async fn delete_income_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, name = %name, "Deleting income item");

    state
        .write()
        .await
        .delete_income_item(&name)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_deduction_items(State(state): State<AppState>) -> Json<Vec<DeductionItem>> {
    Json(state.read().await.config().deduction_items().to_vec())
}

async fn add_deduction_item(
    State(state): State<AppState>,
    payload: Result<Json<NewDeductionItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<DeductionItem>>)> {
    let correlation_id = Uuid::new_v4();
    let (name, draft, optional) = body(payload, correlation_id)?.into_parts();
    info!(correlation_id = %correlation_id, name = %name, "Adding deduction item");

    let mut engine = state.write().await;
    engine
        .add_deduction_item(&name, draft, optional)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok((
        StatusCode::CREATED,
        Json(engine.config().deduction_items().to_vec()),
    ))
}

async fn update_deduction_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<DeductionItemUpdate>, JsonRejection>,
) -> ApiResult<Json<Vec<DeductionItem>>> {
    let correlation_id = Uuid::new_v4();
    let update = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, name = %name, "Updating deduction item");

    let mut engine = state.write().await;
    engine
        .update_deduction_item(&name, update)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(engine.config().deduction_items().to_vec()))
}

async fn delete_deduction_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, name = %name, "Deleting deduction item");

    state
        .write()
        .await
        .delete_deduction_item(&name)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_tax_brackets(State(state): State<AppState>) -> Json<Vec<TaxBracket>> {
    Json(state.read().await.config().tax_brackets().to_vec())
}

async fn add_tax_bracket(
    State(state): State<AppState>,
    payload: Result<Json<NewTaxBracketRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<TaxBracket>>)> {
    let correlation_id = Uuid::new_v4();
    let request = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, min = %request.min_income, "Adding tax bracket");

    let mut engine = state.write().await;
    engine
        .add_tax_bracket(
            request.min_income,
            request.max_income,
            request.rate,
            request.fast_deduction,
        )
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok((
        StatusCode::CREATED,
        Json(engine.config().tax_brackets().to_vec()),
    ))
}

async fn update_tax_bracket(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Result<Json<TaxBracketUpdate>, JsonRejection>,
) -> ApiResult<Json<Vec<TaxBracket>>> {
    let correlation_id = Uuid::new_v4();
    let update = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, index, "Updating tax bracket");

    let mut engine = state.write().await;
    engine
        .update_tax_bracket(index, update)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(engine.config().tax_brackets().to_vec()))
}

async fn delete_tax_bracket(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, index, "Deleting tax bracket");

    state
        .write()
        .await
        .delete_tax_bracket(index)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Roster ----

async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.read().await.get_employees().to_vec())
}

async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    let request = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, employee = %request.name, "Adding employee");

    let mut engine = state.write().await;
    engine
        .add_employee(&request.name, request.salary_data, request.selected_deductions)
        .map_err(|err| engine_error(err, correlation_id))?;
    let employee = engine
        .get_employee(request.name.trim())
        .cloned()
        .ok_or_else(|| {
            engine_error(
                EngineError::NotFound {
                    kind: "employee",
                    name: request.name.clone(),
                },
                correlation_id,
            )
        })?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Employee>> {
    state
        .read()
        .await
        .get_employee(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            EngineError::NotFound {
                kind: "employee",
                name,
            }
            .into()
        })
}

async fn update_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<EmployeeUpdateRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let request = body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, employee = %name, "Updating employee");

    state
        .write()
        .await
        .update_employee(&name, request.salary_data, request.selected_deductions)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee = %name, "Deleting employee");

    state
        .write()
        .await
        .delete_employee(&name)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn employee_results(State(state): State<AppState>) -> Json<Vec<EmployeeResult>> {
    Json(state.read().await.calculate_all_employees())
}

/// Handler for GET /employees/export.
async fn export_employees(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Exporting roster table");

    let table = state
        .read()
        .await
        .export_roster_table()
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        table,
    ))
}
