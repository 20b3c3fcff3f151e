//! Single-employee salary calculation.
//!
//! This module resolves income items against caller inputs, evaluates each
//! selected deduction by kind and produces a [`CalculationResult`].

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{DeductionItem, DeductionKind, MethodRule, SalaryConfig};
use crate::models::{
    BreakdownLine, CalculationResult, CalculationWarning, SalaryInputs, WARN_ARITHMETIC_OVERFLOW,
    WARN_MISSING_BASE_ITEM, WARN_NO_MATCHING_BRACKET, WARN_UNKNOWN_DEDUCTION,
    WARN_UNREGISTERED_METHOD,
};

use super::progressive_tax::{calculate_progressive_tax, taxable_income};

fn push_warning(warnings: &mut Vec<CalculationWarning>, code: &str, message: String) {
    warn!(code, message = %message, "Degenerate salary computation");
    warnings.push(CalculationWarning::new(code, message));
}

/// Sums `lines`, clamping to the decimal range on overflow.
fn checked_total(
    lines: &[BreakdownLine],
    what: &str,
    warnings: &mut Vec<CalculationWarning>,
) -> Decimal {
    match lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.amount))
    {
        Some(total) => total,
        None => {
            push_warning(
                warnings,
                WARN_ARITHMETIC_OVERFLOW,
                format!("{} exceeds the decimal range and was clamped", what),
            );
            lines
                .iter()
                .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.amount))
        }
    }
}

/// Resolves a percentage or fixed amount deduction.
///
/// Returns `None` for calculated deductions, which depend on these.
fn resolve_direct(
    item: &DeductionItem,
    income_breakdown: &[BreakdownLine],
    inputs: &SalaryInputs,
    warnings: &mut Vec<CalculationWarning>,
) -> Option<Decimal> {
    match &item.kind {
        DeductionKind::Percentage { rate, base } => {
            let base_value = income_breakdown
                .iter()
                .find(|line| line.name == *base)
                .map(|line| line.amount);
            match base_value {
                Some(value) => match value.checked_mul(*rate) {
                    Some(amount) => Some(amount),
                    None => {
                        push_warning(
                            warnings,
                            WARN_ARITHMETIC_OVERFLOW,
                            format!("'{}' exceeds the decimal range", item.name),
                        );
                        Some(Decimal::ZERO)
                    }
                },
                None => {
                    push_warning(
                        warnings,
                        WARN_MISSING_BASE_ITEM,
                        format!("'{}' is based on missing income item '{}'", item.name, base),
                    );
                    Some(Decimal::ZERO)
                }
            }
        }
        DeductionKind::FixedAmount { amount } => {
            Some(inputs.deduction_override(&item.name).unwrap_or(*amount))
        }
        DeductionKind::Calculated { .. } => None,
    }
}

/// Resolves a calculated deduction against the directly resolved ones.
fn resolve_calculated(
    config: &SalaryConfig,
    item: &DeductionItem,
    method_id: &str,
    total_income: Decimal,
    resolved: &[BreakdownLine],
    warnings: &mut Vec<CalculationWarning>,
) -> Decimal {
    let Some(method) = config.method(method_id) else {
        push_warning(
            warnings,
            WARN_UNREGISTERED_METHOD,
            format!("'{}' uses unregistered method '{}'", item.name, method_id),
        );
        return Decimal::ZERO;
    };

    match &method.rule {
        MethodRule::ProgressiveTax(rule) => {
            let Some(taxable) = taxable_income(rule, total_income, resolved) else {
                push_warning(
                    warnings,
                    WARN_ARITHMETIC_OVERFLOW,
                    format!("taxable income for '{}' exceeds the decimal range", item.name),
                );
                return Decimal::ZERO;
            };
            let result = calculate_progressive_tax(rule, taxable);
            if result.overflowed {
                push_warning(
                    warnings,
                    WARN_ARITHMETIC_OVERFLOW,
                    format!("'{}' exceeds the decimal range", item.name),
                );
            } else if result.bracket_index.is_none() {
                push_warning(
                    warnings,
                    WARN_NO_MATCHING_BRACKET,
                    format!("taxable income {} matches no bracket of '{}'", taxable, method_id),
                );
            }
            debug!(
                item = %item.name,
                taxable_income = %taxable,
                bracket = ?result.bracket_index,
                tax = %result.tax,
                "Applied progressive tax"
            );
            result.tax
        }
    }
}

/// Calculates one employee's salary against the configuration.
///
/// * Every configured income item contributes the caller's value, or its
///   default when the caller supplied none (or zero).
/// * `selected_deductions` defaults to every non-optional deduction.
/// * Percentage and fixed amount deductions are resolved before calculated
///   ones, because progressive tax subtracts the pre-tax deductions.
/// * Degenerate cases (missing base, unregistered method, no matching
///   bracket, unknown selection) contribute zero and add a warning.
/// * A deduction whose arithmetic leaves the decimal range contributes zero;
///   totals that overflow are clamped. Both add an `arithmetic_overflow`
///   warning, so the calculation never panics.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::config::SalaryConfig;
/// use salary_engine::models::SalaryInputs;
///
/// let config = SalaryConfig::default();
/// let result = calculate_salary(&config, &SalaryInputs::new(), None);
///
/// assert_eq!(result.total_income, Decimal::new(12800, 0));
/// assert_eq!(result.deduction("Social Insurance"), Some(Decimal::new(1050, 0)));
/// ```
pub fn calculate_salary(
    config: &SalaryConfig,
    inputs: &SalaryInputs,
    selected_deductions: Option<&[String]>,
) -> CalculationResult {
    let selected: Vec<String> = match selected_deductions {
        Some(names) => names.to_vec(),
        None => config.mandatory_deductions(),
    };
    let is_selected = |name: &str| selected.iter().any(|s| s == name);
    let mut warnings = Vec::new();

    let income_breakdown: Vec<BreakdownLine> = config
        .income_items()
        .iter()
        .map(|item| BreakdownLine::new(&item.name, inputs.income_value(&item.name).unwrap_or(item.default)))
        .collect();
    let total_income = checked_total(&income_breakdown, "total income", &mut warnings);

    for name in &selected {
        if config.deduction_item(name).is_none() {
            push_warning(
                &mut warnings,
                WARN_UNKNOWN_DEDUCTION,
                format!("selected deduction '{}' is not configured", name),
            );
        }
    }

    let applied: Vec<&DeductionItem> = config
        .deduction_items()
        .iter()
        .filter(|item| is_selected(&item.name))
        .collect();

    let mut amounts: Vec<Option<Decimal>> = applied
        .iter()
        .map(|item| resolve_direct(item, &income_breakdown, inputs, &mut warnings))
        .collect();

    let resolved_direct: Vec<BreakdownLine> = applied
        .iter()
        .zip(&amounts)
        .filter_map(|(item, amount)| amount.map(|amount| BreakdownLine::new(&item.name, amount)))
        .collect();

    for (item, amount) in applied.iter().zip(amounts.iter_mut()) {
        if let DeductionKind::Calculated { method } = &item.kind {
            *amount = Some(resolve_calculated(
                config,
                item,
                method,
                total_income,
                &resolved_direct,
                &mut warnings,
            ));
        }
    }

    let deductions: Vec<BreakdownLine> = applied
        .iter()
        .zip(amounts)
        .map(|(item, amount)| BreakdownLine::new(&item.name, amount.unwrap_or(Decimal::ZERO)))
        .collect();
    let total_deductions = checked_total(&deductions, "total deductions", &mut warnings);
    let net_income = match total_income.checked_sub(total_deductions) {
        Some(net) => net,
        None => {
            push_warning(
                &mut warnings,
                WARN_ARITHMETIC_OVERFLOW,
                "net income exceeds the decimal range and was clamped".to_string(),
            );
            total_income.saturating_sub(total_deductions)
        }
    };

    debug!(
        total_income = %total_income,
        total_deductions = %total_deductions,
        net_income = %net_income,
        warnings = warnings.len(),
        "Calculated salary"
    );

    CalculationResult {
        total_income,
        income_breakdown,
        deductions,
        total_deductions,
        net_income,
        selected_deductions: selected,
        warnings,
    }
}
