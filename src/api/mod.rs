//! HTTP API module for the salary engine.
//!
//! This module exposes calculations, configuration editing, the employee
//! roster and its export as REST endpoints over one shared engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, EmployeeUpdateRequest, NewDeductionItemRequest, NewEmployeeRequest,
    NewIncomeItemRequest, NewTaxBracketRequest,
};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
