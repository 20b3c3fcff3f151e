//! Calculation result models for the salary engine.
//!
//! This module contains the [`CalculationResult`] type produced by every
//! salary calculation, its formatted [`CalculationSummary`], and the
//! [`CalculationWarning`] records describing degenerate computations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Warning code: a calculated deduction names an unregistered method.
pub const WARN_UNREGISTERED_METHOD: &str = "unregistered_method";
/// Warning code: a percentage deduction's base is not an income item.
pub const WARN_MISSING_BASE_ITEM: &str = "missing_base_item";
/// Warning code: taxable income fell outside every tax bracket.
pub const WARN_NO_MATCHING_BRACKET: &str = "no_matching_bracket";
/// Warning code: a selected deduction is not configured.
pub const WARN_UNKNOWN_DEDUCTION: &str = "unknown_deduction";
/// Warning code: an amount left the decimal range and was replaced.
pub const WARN_ARITHMETIC_OVERFLOW: &str = "arithmetic_overflow";

/// A named amount in an income or deduction breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The income or deduction item name.
    pub name: String,
    /// The resolved amount.
    pub amount: Decimal,
}

impl BreakdownLine {
    /// Creates a breakdown line.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// A computation that silently resolved to zero.
///
/// Warnings never change the numbers; they flag results that may be wrong
/// because the configuration does not cover the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl CalculationWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// The result of one salary calculation.
///
/// Produced fresh by every call; nothing here is cached.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::models::{BreakdownLine, CalculationResult};
///
/// let result = CalculationResult {
///     total_income: Decimal::new(10000, 0),
///     income_breakdown: vec![BreakdownLine::new("Base Salary", Decimal::new(10000, 0))],
///     deductions: vec![BreakdownLine::new("Social Insurance", Decimal::new(1050, 0))],
///     total_deductions: Decimal::new(1050, 0),
///     net_income: Decimal::new(8950, 0),
///     selected_deductions: vec!["Social Insurance".to_string()],
///     warnings: vec![],
/// };
/// assert_eq!(result.deduction("Social Insurance"), Some(Decimal::new(1050, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of every income item.
    pub total_income: Decimal,
    /// Value of every configured income item, in configured order.
    pub income_breakdown: Vec<BreakdownLine>,
    /// Amount of every applied deduction, in configured order.
    pub deductions: Vec<BreakdownLine>,
    /// Sum of every applied deduction.
    pub total_deductions: Decimal,
    /// Total income minus total deductions; may be negative.
    pub net_income: Decimal,
    /// The deduction selection the calculation ran with.
    pub selected_deductions: Vec<String>,
    /// Degenerate computations encountered.
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}

impl CalculationResult {
    /// The value of an income item in this result.
    pub fn income(&self, name: &str) -> Option<Decimal> {
        self.income_breakdown
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.amount)
    }

    /// The amount of a deduction in this result, if it was applied.
    pub fn deduction(&self, name: &str) -> Option<Decimal> {
        self.deductions
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.amount)
    }

    /// Returns true if any warning with `code` was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|warning| warning.code == code)
    }
}

/// A currency-formatted line of a [`CalculationSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// The income or deduction item name.
    pub name: String,
    /// The formatted amount (e.g. `¥1,050.00`).
    pub amount: String,
}

/// Human-formatted view of a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSummary {
    /// Formatted total income.
    pub total_income: String,
    /// Formatted total deductions.
    pub total_deductions: String,
    /// Formatted net income.
    pub net_income: String,
    /// Formatted income breakdown.
    pub income_breakdown: Vec<SummaryLine>,
    /// Formatted deduction breakdown.
    pub deductions: Vec<SummaryLine>,
}
