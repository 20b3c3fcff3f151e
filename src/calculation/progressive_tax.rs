//! Progressive tax calculation.
//!
//! Tax is computed with the quick-deduction form: the single bracket that
//! contains the taxable income applies its marginal rate to the whole income
//! and subtracts its fast deduction constant.

use rust_decimal::Decimal;

use crate::config::ProgressiveTax;
use crate::models::BreakdownLine;

/// The outcome of a progressive tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTaxResult {
    /// The income that was taxed.
    pub taxable_income: Decimal,
    /// The tax due, never negative.
    pub tax: Decimal,
    /// Index of the applied bracket; `None` when no bracket matched.
    pub bracket_index: Option<usize>,
    /// True when the bracket arithmetic left the decimal range; tax is then
    /// zero.
    pub overflowed: bool,
}

/// Computes the income fed into the bracket table.
///
/// Subtracts the already-resolved pre-tax deductions (social insurance and
/// housing fund by default) and the exempt threshold from total income,
/// flooring the result at zero. Returns `None` if the arithmetic leaves the
/// decimal range.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::taxable_income;
/// use salary_engine::config::SalaryConfig;
/// use salary_engine::models::BreakdownLine;
///
/// let config = SalaryConfig::default();
/// let rule = config.progressive_tax().unwrap();
/// let resolved = vec![
///     BreakdownLine::new("Social Insurance", Decimal::new(1050, 0)),
///     BreakdownLine::new("Housing Fund", Decimal::new(1200, 0)),
/// ];
///
/// let taxable = taxable_income(rule, Decimal::new(12800, 0), &resolved);
/// assert_eq!(taxable, Some(Decimal::new(5550, 0)));
/// ```
pub fn taxable_income(
    rule: &ProgressiveTax,
    total_income: Decimal,
    resolved: &[BreakdownLine],
) -> Option<Decimal> {
    let pre_tax = resolved
        .iter()
        .filter(|line| rule.pre_tax_deductions.iter().any(|name| *name == line.name))
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.amount))?;

    let taxable = total_income
        .checked_sub(pre_tax)?
        .checked_sub(rule.threshold)?;
    Some(taxable.max(Decimal::ZERO))
}

/// Applies the bracket table to a taxable income.
///
/// Brackets are scanned in ascending order of minimum income and the first
/// bracket containing the income applies. Tax is floored at zero. When no
/// bracket matches (an empty table, or a gap between brackets) the tax is
/// zero and `bracket_index` is `None`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_progressive_tax;
/// use salary_engine::config::SalaryConfig;
///
/// let config = SalaryConfig::default();
/// let rule = config.progressive_tax().unwrap();
///
/// let result = calculate_progressive_tax(rule, Decimal::new(8000, 0));
/// assert_eq!(result.tax, Decimal::new(90, 0));
/// assert_eq!(result.bracket_index, Some(1));
/// ```
pub fn calculate_progressive_tax(rule: &ProgressiveTax, taxable_income: Decimal) -> ProgressiveTaxResult {
    let matched = rule
        .brackets
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.contains(taxable_income));

    match matched {
        Some((index, bracket)) => {
            let tax = taxable_income
                .checked_mul(bracket.rate)
                .and_then(|gross| gross.checked_sub(bracket.fast_deduction));
            ProgressiveTaxResult {
                taxable_income,
                tax: tax.map_or(Decimal::ZERO, |tax| tax.max(Decimal::ZERO)),
                bracket_index: Some(index),
                overflowed: tax.is_none(),
            }
        }
        None => ProgressiveTaxResult {
            taxable_income,
            tax: Decimal::ZERO,
            bracket_index: None,
            overflowed: false,
        },
    }
}
