//! Human-formatted calculation summaries.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BreakdownLine, CalculationResult, CalculationSummary, SummaryLine};

/// Currency symbol used in formatted summaries.
pub const CURRENCY_SYMBOL: &str = "¥";

/// Formats an amount with the currency symbol, thousands separators and two
/// decimals (half-up rounding).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::format_currency;
///
/// assert_eq!(format_currency(Decimal::new(1234567, 1)), "¥123,456.70");
/// assert_eq!(format_currency(Decimal::new(-5, 3)), "-¥0.01");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}

fn format_lines(lines: &[BreakdownLine]) -> Vec<SummaryLine> {
    lines
        .iter()
        .map(|line| SummaryLine {
            name: line.name.clone(),
            amount: format_currency(line.amount),
        })
        .collect()
}

/// Builds the formatted view of a result without altering it.
pub fn summarize(result: &CalculationResult) -> CalculationSummary {
    CalculationSummary {
        total_income: format_currency(result.total_income),
        total_deductions: format_currency(result.total_deductions),
        net_income: format_currency(result.net_income),
        income_breakdown: format_lines(&result.income_breakdown),
        deductions: format_lines(&result.deductions),
    }
}
