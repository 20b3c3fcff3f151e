//! Rule configuration for the salary engine.
//!
//! This module holds the configuration model (income items, deduction items
//! and calculation methods), the default configuration, the mutators that
//! keep it consistent, and JSON/YAML persistence.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use salary_engine::config::SalaryConfig;
//!
//! let mut config = SalaryConfig::default();
//! config.add_income_item("Night Shift", Decimal::new(800, 0), false).unwrap();
//! assert_eq!(config.income_items().len(), 7);
//! ```

mod defaults;
mod loader;
mod mutators;
mod types;

pub use defaults::{BASE_SALARY_ITEM, default_tax_brackets};
pub use loader::{ConfigFormat, ConfigLoader, INLINE_SOURCE};
pub use mutators::{
    DEFAULT_CUSTOM_METHOD, DeductionDraft, DeductionItemUpdate, DeductionType, IncomeItemUpdate,
    TaxBracketUpdate, default_percentage_rate,
};
pub use types::{
    CalculationMethod, DeductionItem, DeductionKind, IncomeItem, MethodRule,
    PROGRESSIVE_TAX_METHOD, ProgressiveTax, SalaryConfig, TaxBracket, UNBOUNDED_SENTINEL,
    default_pre_tax_deductions, default_tax_threshold, upper_bound_from_sentinel,
};
