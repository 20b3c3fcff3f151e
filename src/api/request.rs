//! Request types for the salary engine API.
//!
//! Update bodies reuse the engine's own update structs
//! ([`IncomeItemUpdate`](crate::config::IncomeItemUpdate) and friends); this
//! module only defines the bodies that have no engine counterpart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DeductionDraft, DeductionType, UNBOUNDED_SENTINEL};
use crate::models::SalaryInputs;

fn default_true() -> bool {
    true
}

fn default_unbounded() -> Decimal {
    UNBOUNDED_SENTINEL
}

/// Request body for the `/calculate` endpoint.
///
/// Both fields may be omitted: empty inputs use every income default and a
/// missing selection applies every non-optional deduction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Income values and `deduction_<name>` overrides.
    #[serde(default)]
    pub inputs: SalaryInputs,
    /// Deductions to apply.
    #[serde(default)]
    pub selected_deductions: Option<Vec<String>>,
}

/// Request body for `POST /config/income-items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIncomeItemRequest {
    /// Unique item name.
    pub name: String,
    /// Default value (zero when omitted).
    #[serde(default)]
    pub default: Decimal,
    /// Whether the item is required.
    #[serde(default)]
    pub required: bool,
}

/// Request body for `POST /config/deduction-items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeductionItemRequest {
    /// Unique item name.
    pub name: String,
    /// Deduction kind.
    #[serde(rename = "type")]
    pub deduction_type: DeductionType,
    /// Rate for percentage deductions.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Base income item for percentage deductions.
    #[serde(default)]
    pub base: Option<String>,
    /// Amount for fixed deductions.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Method for calculated deductions.
    #[serde(default)]
    pub method: Option<String>,
    /// Whether the deduction is opt-in (defaults to true).
    #[serde(default = "default_true")]
    pub optional: bool,
}

impl NewDeductionItemRequest {
    /// Splits the request into the item name, its draft kind and the
    /// optional flag.
    pub fn into_parts(self) -> (String, DeductionDraft, bool) {
        let draft = DeductionDraft {
            deduction_type: self.deduction_type,
            rate: self.rate,
            base: self.base,
            amount: self.amount,
            method: self.method,
        };
        (self.name, draft, self.optional)
    }
}

/// Request body for `POST /config/tax-brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTaxBracketRequest {
    /// Inclusive lower bound.
    pub min_income: Decimal,
    /// Inclusive upper bound; `-1` (the default) means unbounded.
    #[serde(default = "default_unbounded")]
    pub max_income: Decimal,
    /// Marginal rate.
    pub rate: Decimal,
    /// Fast deduction constant.
    #[serde(default)]
    pub fast_deduction: Decimal,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployeeRequest {
    /// Unique employee name.
    pub name: String,
    /// Stored inputs; defaults to every income item's current default.
    #[serde(default)]
    pub salary_data: Option<SalaryInputs>,
    /// Stored selection; defaults to every non-optional deduction.
    #[serde(default)]
    pub selected_deductions: Option<Vec<String>>,
}

/// Request body for `PUT /employees/:name`. Omitted fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdateRequest {
    /// Replacement inputs.
    #[serde(default)]
    pub salary_data: Option<SalaryInputs>,
    /// Replacement selection.
    #[serde(default)]
    pub selected_deductions: Option<Vec<String>>,
}
