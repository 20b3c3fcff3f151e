//! Built-in default configuration.

use rust_decimal::Decimal;

use super::types::{
    CalculationMethod, DeductionItem, DeductionKind, IncomeItem, MethodRule, PROGRESSIVE_TAX_METHOD,
    ProgressiveTax, SalaryConfig, TaxBracket, UNBOUNDED_SENTINEL, default_pre_tax_deductions,
    default_tax_threshold,
};

/// Income item every default percentage deduction is based on.
pub const BASE_SALARY_ITEM: &str = "Base Salary";

fn income(name: &str, default: i64, required: bool) -> IncomeItem {
    IncomeItem {
        name: name.to_string(),
        default: Decimal::new(default, 0),
        required,
    }
}

fn percentage(name: &str, rate: Decimal) -> DeductionItem {
    DeductionItem {
        name: name.to_string(),
        kind: DeductionKind::Percentage {
            rate,
            base: BASE_SALARY_ITEM.to_string(),
        },
        optional: false,
    }
}

fn bracket(min: i64, max: Decimal, rate: Decimal, fast_deduction: i64) -> TaxBracket {
    TaxBracket::new(Decimal::new(min, 0), max, rate, Decimal::new(fast_deduction, 0))
}

/// The progressive tax table shipped with the engine.
pub fn default_tax_brackets() -> Vec<TaxBracket> {
    let pct = |p: i64| Decimal::new(p, 2);
    let upto = |max: i64| Decimal::new(max, 0);

    vec![
        bracket(0, upto(5000), Decimal::ZERO, 0),
        bracket(5000, upto(8000), pct(3), 150),
        bracket(8000, upto(17000), pct(10), 710),
        bracket(17000, upto(30000), pct(20), 2410),
        bracket(30000, upto(40000), pct(25), 3910),
        bracket(40000, upto(60000), pct(30), 5910),
        bracket(60000, upto(85000), pct(35), 8910),
        bracket(85000, UNBOUNDED_SENTINEL, pct(45), 17410),
    ]
}

impl Default for SalaryConfig {
    /// Six income items, social insurance and housing fund at 10.5% and 12%
    /// of base salary, and income tax over the default bracket table.
    fn default() -> Self {
        let income_items = vec![
            income(BASE_SALARY_ITEM, 10000, true),
            income("Performance Bonus", 2000, false),
            income("Overtime Pay", 0, false),
            income("Meal Allowance", 500, false),
            income("Transport Allowance", 300, false),
            income("Skill Allowance", 0, false),
        ];

        let pre_tax = default_pre_tax_deductions();
        let deduction_items = vec![
            percentage(&pre_tax[0], Decimal::new(105, 3)),
            percentage(&pre_tax[1], Decimal::new(12, 2)),
            DeductionItem {
                name: "Income Tax".to_string(),
                kind: DeductionKind::Calculated {
                    method: PROGRESSIVE_TAX_METHOD.to_string(),
                },
                optional: false,
            },
        ];

        let calculation_methods = vec![CalculationMethod {
            id: PROGRESSIVE_TAX_METHOD.to_string(),
            name: "Progressive Tax".to_string(),
            rule: MethodRule::ProgressiveTax(ProgressiveTax {
                brackets: default_tax_brackets(),
                threshold: default_tax_threshold(),
                pre_tax_deductions: pre_tax,
            }),
        }];

        SalaryConfig::new(income_items, deduction_items, calculation_methods)
    }
}
