//! Core data models for the salary engine.
//!
//! This module contains the calculation inputs, employee records and
//! calculation results shared by the engine and its callers.

mod calculation_result;
mod employee;

pub use calculation_result::{
    BreakdownLine, CalculationResult, CalculationSummary, CalculationWarning, SummaryLine,
    WARN_ARITHMETIC_OVERFLOW, WARN_MISSING_BASE_ITEM, WARN_NO_MATCHING_BRACKET,
    WARN_UNKNOWN_DEDUCTION, WARN_UNREGISTERED_METHOD,
};
pub use employee::{DEDUCTION_OVERRIDE_PREFIX, Employee, SalaryInputs};
