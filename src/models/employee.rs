//! Employee model and calculation inputs.
//!
//! This module defines [`SalaryInputs`], the caller-supplied values for a
//! single calculation, and [`Employee`], a named set of stored inputs.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key prefix marking a per-calculation deduction override in flat input maps.
pub const DEDUCTION_OVERRIDE_PREFIX: &str = "deduction_";

/// Caller-supplied values for one salary calculation.
///
/// On the wire this is a flat map of income item name to amount, plus
/// `deduction_<name>` entries overriding fixed amount deductions. Income
/// items may not be named with that prefix.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::models::SalaryInputs;
///
/// let inputs: SalaryInputs = serde_json::from_str(
///     r#"{"Base Salary": "12000", "deduction_Union Fee": "40"}"#,
/// ).unwrap();
///
/// assert_eq!(inputs.income_value("Base Salary"), Some(Decimal::new(12000, 0)));
/// assert_eq!(inputs.deduction_override("Union Fee"), Some(Decimal::new(40, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Decimal>", into = "BTreeMap<String, Decimal>")]
pub struct SalaryInputs {
    income: BTreeMap<String, Decimal>,
    deduction_overrides: BTreeMap<String, Decimal>,
}

impl SalaryInputs {
    /// Creates empty inputs; every income item will use its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of an income item.
    pub fn with_income(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.income.insert(name.into(), value);
        self
    }

    /// Overrides the amount of a fixed amount deduction.
    pub fn with_deduction_override(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.deduction_overrides.insert(name.into(), value);
        self
    }

    /// The caller's value for an income item, if it should replace the default.
    ///
    /// A supplied value of exactly zero counts as unset and falls back to the
    /// item's configured default.
    pub fn income_value(&self, name: &str) -> Option<Decimal> {
        self.income.get(name).copied().filter(|value| !value.is_zero())
    }

    /// The caller's raw value for an income item, zero included.
    pub fn raw_income(&self, name: &str) -> Option<Decimal> {
        self.income.get(name).copied()
    }

    /// The override for a fixed amount deduction, if any. Zero is honoured.
    pub fn deduction_override(&self, name: &str) -> Option<Decimal> {
        self.deduction_overrides.get(name).copied()
    }

    /// Returns true when no values are supplied at all.
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.deduction_overrides.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for SalaryInputs {
    /// Splits a flat map into income values and `deduction_` overrides.
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(entries: I) -> Self {
        let mut inputs = SalaryInputs::new();
        for (key, value) in entries {
            let key = key.into();
            match key.strip_prefix(DEDUCTION_OVERRIDE_PREFIX) {
                Some(name) => {
                    inputs.deduction_overrides.insert(name.to_string(), value);
                }
                None => {
                    inputs.income.insert(key, value);
                }
            }
        }
        inputs
    }
}

impl From<BTreeMap<String, Decimal>> for SalaryInputs {
    fn from(map: BTreeMap<String, Decimal>) -> Self {
        map.into_iter().collect()
    }
}

impl From<SalaryInputs> for BTreeMap<String, Decimal> {
    fn from(inputs: SalaryInputs) -> Self {
        let mut map = inputs.income;
        map.extend(
            inputs
                .deduction_overrides
                .into_iter()
                .map(|(name, value)| (format!("{DEDUCTION_OVERRIDE_PREFIX}{name}"), value)),
        );
        map
    }
}

/// An employee in the roster with their stored calculation inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name within the roster.
    pub name: String,
    /// Income values and deduction overrides.
    pub salary_data: SalaryInputs,
    /// Deductions applied to this employee.
    pub selected_deductions: Vec<String>,
}
