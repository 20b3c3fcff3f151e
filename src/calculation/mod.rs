//! Calculation logic for the salary engine.
//!
//! This module contains the single-employee salary calculation, the
//! progressive tax bracket algorithm and currency-formatted summaries. All
//! functions read the configuration and never mutate it.

mod progressive_tax;
mod salary;
mod summary;

pub use progressive_tax::{ProgressiveTaxResult, calculate_progressive_tax, taxable_income};
pub use salary::calculate_salary;
pub use summary::{CURRENCY_SYMBOL, format_currency, summarize};
