//! Configuration types for salary calculation.
//!
//! The whole rule set is one [`SalaryConfig`] value. It serializes to a nested
//! JSON/YAML document. Amounts are written as decimal strings so they survive
//! a round trip exactly; plain numbers are accepted on input. The top tax
//! bracket uses the number `-1` as its "no upper bound" marker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of the built-in progressive tax calculation method.
pub const PROGRESSIVE_TAX_METHOD: &str = "progressive_tax";

/// Exchange-format marker for an unbounded bracket maximum.
pub const UNBOUNDED_SENTINEL: Decimal = Decimal::NEGATIVE_ONE;

/// Income below this amount is untaxed by the default progressive method.
pub fn default_tax_threshold() -> Decimal {
    Decimal::new(5000, 0)
}

/// Deductions subtracted from total income before the tax threshold.
pub fn default_pre_tax_deductions() -> Vec<String> {
    vec!["Social Insurance".to_string(), "Housing Fund".to_string()]
}

/// Converts a caller-supplied maximum into an internal upper bound.
///
/// The sentinel `-1` means "no upper bound"; any other value is kept as is.
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::config::upper_bound_from_sentinel;
///
/// assert_eq!(upper_bound_from_sentinel(Decimal::NEGATIVE_ONE), None);
/// assert_eq!(upper_bound_from_sentinel(Decimal::new(8000, 0)), Some(Decimal::new(8000, 0)));
/// ```
pub fn upper_bound_from_sentinel(max_income: Decimal) -> Option<Decimal> {
    if max_income == UNBOUNDED_SENTINEL {
        None
    } else {
        Some(max_income)
    }
}

/// A named, independently defaultable component of gross pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeItem {
    /// Unique name of the item.
    pub name: String,
    /// Value used when the caller supplies none.
    pub default: Decimal,
    /// Whether the presentation layer should insist on a value.
    #[serde(default)]
    pub required: bool,
}

/// How a deduction item computes its amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeductionKind {
    /// `rate` times the value of the income item named `base`.
    Percentage {
        /// Fraction of the base, between 0 and 1.
        rate: Decimal,
        /// Name of the income item the rate applies to.
        base: String,
    },
    /// A flat amount, overridable per calculation.
    FixedAmount {
        /// The configured amount.
        amount: Decimal,
    },
    /// Delegates to a registered calculation method.
    Calculated {
        /// Identifier of the calculation method.
        method: String,
    },
}

impl DeductionKind {
    /// Returns true for calculated deductions, which are resolved last.
    pub fn is_calculated(&self) -> bool {
        matches!(self, DeductionKind::Calculated { .. })
    }
}

/// A named rule removing value from gross pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// Unique name of the item.
    pub name: String,
    /// The computation rule.
    #[serde(flatten)]
    pub kind: DeductionKind,
    /// Optional items apply only when explicitly selected.
    #[serde(default)]
    pub optional: bool,
}

/// One marginal band of a progressive tax table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound.
    #[serde(rename = "min")]
    pub min_income: Decimal,
    /// Inclusive upper bound; `None` for the unbounded top bracket.
    #[serde(rename = "max", with = "bracket_bound")]
    pub max_income: Option<Decimal>,
    /// Marginal rate applied to the whole taxable income.
    pub rate: Decimal,
    /// Quick deduction constant subtracted after applying the rate.
    #[serde(rename = "deduction")]
    pub fast_deduction: Decimal,
}

impl TaxBracket {
    /// Creates a bracket, translating the `-1` sentinel for `max_income`.
    pub fn new(min_income: Decimal, max_income: Decimal, rate: Decimal, fast_deduction: Decimal) -> Self {
        Self {
            min_income,
            max_income: upper_bound_from_sentinel(max_income),
            rate,
            fast_deduction,
        }
    }

    /// Returns true if `income` falls inside this bracket (both ends inclusive).
    pub fn contains(&self, income: Decimal) -> bool {
        self.min_income <= income && self.max_income.is_none_or(|max| income <= max)
    }
}

/// Parameters of the progressive tax method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    /// Brackets sorted by ascending minimum income.
    pub brackets: Vec<TaxBracket>,
    /// Amount of income exempt before brackets apply.
    #[serde(default = "default_tax_threshold")]
    pub threshold: Decimal,
    /// Names of deductions subtracted from income before taxation.
    #[serde(default = "default_pre_tax_deductions")]
    pub pre_tax_deductions: Vec<String>,
}

/// The rule a calculation method evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MethodRule {
    /// Marginal bracket tax with fast deduction constants.
    ProgressiveTax(ProgressiveTax),
}

/// A registered calculation method referenced by calculated deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationMethod {
    /// Identifier referenced by `DeductionKind::Calculated`.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The rule evaluated by this method.
    #[serde(flatten)]
    pub rule: MethodRule,
}

/// The complete rule configuration.
///
/// Items keep their insertion order; names are unique within each list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    pub(super) income_items: Vec<IncomeItem>,
    pub(super) deduction_items: Vec<DeductionItem>,
    pub(super) calculation_methods: Vec<CalculationMethod>,
}

impl SalaryConfig {
    /// Creates a configuration from its component parts.
    ///
    /// No uniqueness check is made here; see [`SalaryConfig::validate`].
    pub fn new(
        income_items: Vec<IncomeItem>,
        deduction_items: Vec<DeductionItem>,
        calculation_methods: Vec<CalculationMethod>,
    ) -> Self {
        Self {
            income_items,
            deduction_items,
            calculation_methods,
        }
    }

    /// Returns all income items in configured order.
    pub fn income_items(&self) -> &[IncomeItem] {
        &self.income_items
    }

    /// Returns all deduction items in configured order.
    pub fn deduction_items(&self) -> &[DeductionItem] {
        &self.deduction_items
    }

    /// Returns all registered calculation methods.
    pub fn calculation_methods(&self) -> &[CalculationMethod] {
        &self.calculation_methods
    }

    /// Looks up an income item by name.
    pub fn income_item(&self, name: &str) -> Option<&IncomeItem> {
        self.income_items.iter().find(|item| item.name == name)
    }

    /// Looks up a deduction item by name.
    pub fn deduction_item(&self, name: &str) -> Option<&DeductionItem> {
        self.deduction_items.iter().find(|item| item.name == name)
    }

    /// Looks up a calculation method by identifier.
    pub fn method(&self, id: &str) -> Option<&CalculationMethod> {
        self.calculation_methods.iter().find(|method| method.id == id)
    }

    /// Returns the progressive tax parameters, if that method is registered.
    pub fn progressive_tax(&self) -> Option<&ProgressiveTax> {
        self.method(PROGRESSIVE_TAX_METHOD).map(|method| match &method.rule {
            MethodRule::ProgressiveTax(rule) => rule,
        })
    }

    /// Returns the progressive tax brackets, or an empty slice when the
    /// method is not registered.
    pub fn tax_brackets(&self) -> &[TaxBracket] {
        self.progressive_tax()
            .map(|rule| rule.brackets.as_slice())
            .unwrap_or(&[])
    }

    /// Names of every non-optional deduction, in configured order.
    ///
    /// This is the deduction set used when a caller selects none.
    pub fn mandatory_deductions(&self) -> Vec<String> {
        self.deduction_items
            .iter()
            .filter(|item| !item.optional)
            .map(|item| item.name.clone())
            .collect()
    }

    /// Default value of every income item, keyed by name.
    pub fn income_defaults(&self) -> Vec<(String, Decimal)> {
        self.income_items
            .iter()
            .map(|item| (item.name.clone(), item.default))
            .collect()
    }
}

/// Serde adapter writing `None` as the numeric `-1` sentinel.
mod bracket_bound {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::upper_bound_from_sentinel;

    pub fn serialize<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(max) => Serialize::serialize(max, serializer),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(upper_bound_from_sentinel(raw))
    }
}
