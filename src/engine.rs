//! The salary engine instance.
//!
//! [`PayrollEngine`] owns one live configuration and one roster. Every
//! operation a caller needs goes through it, so there is no process-wide
//! state: tests and servers create as many independent engines as they like.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{calculate_salary, summarize};
use crate::config::{
    ConfigFormat, ConfigLoader, DeductionDraft, DeductionItemUpdate, IncomeItemUpdate,
    SalaryConfig, TaxBracketUpdate,
};
use crate::error::EngineResult;
use crate::models::{CalculationResult, CalculationSummary, Employee, SalaryInputs};
use crate::roster::{EmployeeResult, Roster, export_roster_table};

/// A configuration plus the employees calculated against it.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::engine::PayrollEngine;
/// use salary_engine::models::SalaryInputs;
///
/// let mut engine = PayrollEngine::new();
/// engine.add_employee("Zhang San", None, None)?;
///
/// let results = engine.calculate_all_employees();
/// assert_eq!(results[0].result.net_income, Decimal::new(105335, 1));
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollEngine {
    config: SalaryConfig,
    roster: Roster,
}

impl PayrollEngine {
    /// Creates an engine with the built-in default configuration and no
    /// employees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine around an existing configuration.
    pub fn with_config(config: SalaryConfig) -> Self {
        Self {
            config,
            roster: Roster::new(),
        }
    }

    /// The live configuration.
    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }

    /// The stored employees.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Restores the built-in default configuration. Employees are kept.
    pub fn reset_config(&mut self) {
        self.config = SalaryConfig::default();
        info!("Configuration reset to defaults");
    }

    // ---- Calculation ----

    /// Calculates a salary that is not stored in the roster.
    pub fn calculate_salary(
        &self,
        inputs: &SalaryInputs,
        selected_deductions: Option<&[String]>,
    ) -> CalculationResult {
        calculate_salary(&self.config, inputs, selected_deductions)
    }

    /// Calculates a salary and returns its currency-formatted view alongside
    /// the raw result.
    pub fn calculation_summary(
        &self,
        inputs: &SalaryInputs,
        selected_deductions: Option<&[String]>,
    ) -> (CalculationSummary, CalculationResult) {
        let result = self.calculate_salary(inputs, selected_deductions);
        (summarize(&result), result)
    }

    // ---- Configuration mutators ----

    /// See [`SalaryConfig::add_income_item`].
    pub fn add_income_item(&mut self, name: &str, default: Decimal, required: bool) -> EngineResult<()> {
        self.config.add_income_item(name, default, required)
    }

    /// See [`SalaryConfig::update_income_item`].
    pub fn update_income_item(&mut self, name: &str, update: IncomeItemUpdate) -> EngineResult<()> {
        self.config.update_income_item(name, update)
    }

    /// See [`SalaryConfig::delete_income_item`].
    pub fn delete_income_item(&mut self, name: &str) -> EngineResult<()> {
        self.config.delete_income_item(name)
    }

    /// Adds a deduction item, filling the draft's missing parts from the
    /// current configuration.
    pub fn add_deduction_item(&mut self, name: &str, draft: DeductionDraft, optional: bool) -> EngineResult<()> {
        let kind = self.config.resolve_deduction_draft(draft);
        self.config.add_deduction_item(name, kind, optional)
    }

    /// See [`SalaryConfig::update_deduction_item`].
    pub fn update_deduction_item(&mut self, name: &str, update: DeductionItemUpdate) -> EngineResult<()> {
        self.config.update_deduction_item(name, update)
    }

    /// See [`SalaryConfig::delete_deduction_item`].
    pub fn delete_deduction_item(&mut self, name: &str) -> EngineResult<()> {
        self.config.delete_deduction_item(name)
    }

    /// See [`SalaryConfig::add_tax_bracket`].
    pub fn add_tax_bracket(
        &mut self,
        min_income: Decimal,
        max_income: Decimal,
        rate: Decimal,
        fast_deduction: Decimal,
    ) -> EngineResult<()> {
        self.config
            .add_tax_bracket(min_income, max_income, rate, fast_deduction)
    }

    /// See [`SalaryConfig::update_tax_bracket`].
    pub fn update_tax_bracket(&mut self, index: usize, update: TaxBracketUpdate) -> EngineResult<()> {
        self.config.update_tax_bracket(index, update)
    }

    /// See [`SalaryConfig::delete_tax_bracket`].
    pub fn delete_tax_bracket(&mut self, index: usize) -> EngineResult<()> {
        self.config.delete_tax_bracket(index)
    }

    // ---- Roster ----

    /// See [`Roster::add_employee`].
    pub fn add_employee(
        &mut self,
        name: &str,
        salary_data: Option<SalaryInputs>,
        selected_deductions: Option<Vec<String>>,
    ) -> EngineResult<()> {
        self.roster
            .add_employee(&self.config, name, salary_data, selected_deductions)
    }

    /// See [`Roster::update_employee`].
    pub fn update_employee(
        &mut self,
        name: &str,
        salary_data: Option<SalaryInputs>,
        selected_deductions: Option<Vec<String>>,
    ) -> EngineResult<()> {
        self.roster
            .update_employee(name, salary_data, selected_deductions)
    }

    /// See [`Roster::delete_employee`].
    pub fn delete_employee(&mut self, name: &str) -> EngineResult<()> {
        self.roster.delete_employee(name)
    }

    /// Every stored employee in insertion order.
    pub fn get_employees(&self) -> &[Employee] {
        self.roster.employees()
    }

    /// Looks up one employee.
    pub fn get_employee(&self, name: &str) -> Option<&Employee> {
        self.roster.employee(name)
    }

    /// An employee's stored salary data; empty when the employee is unknown.
    pub fn get_employee_salary(&self, name: &str) -> SalaryInputs {
        self.roster
            .employee(name)
            .map(|employee| employee.salary_data.clone())
            .unwrap_or_default()
    }

    /// An employee's deduction selection; empty when the employee is unknown.
    pub fn get_employee_deductions(&self, name: &str) -> Vec<String> {
        self.roster
            .employee(name)
            .map(|employee| employee.selected_deductions.clone())
            .unwrap_or_default()
    }

    /// Calculates every stored employee against the live configuration.
    pub fn calculate_all_employees(&self) -> Vec<EmployeeResult> {
        let results = self.roster.calculate_all(&self.config);
        info!(employees = results.len(), "Calculated roster");
        results
    }

    /// Exports the roster as CSV stamped with the current local time.
    pub fn export_roster_table(&self) -> EngineResult<String> {
        self.export_roster_table_at(Local::now().naive_local())
    }

    /// Exports the roster as CSV stamped with `generated_at`.
    pub fn export_roster_table_at(&self, generated_at: NaiveDateTime) -> EngineResult<String> {
        export_roster_table(&self.config, &self.roster, generated_at)
    }

    // ---- Persistence ----

    /// Renders the live configuration.
    pub fn export_config(&self, format: ConfigFormat) -> EngineResult<String> {
        ConfigLoader::render(&self.config, format)
    }

    /// Replaces the live configuration with a parsed document.
    ///
    /// On any error the current configuration is left untouched.
    pub fn import_config(&mut self, text: &str, format: ConfigFormat) -> EngineResult<()> {
        let config = ConfigLoader::parse(text, format)?;
        self.config = config;
        info!(
            income_items = self.config.income_items().len(),
            deduction_items = self.config.deduction_items().len(),
            "Imported configuration"
        );
        Ok(())
    }

    /// Writes the live configuration to a file; the extension picks the
    /// format.
    pub fn export_config_to_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        ConfigLoader::save(&self.config, path)
    }

    /// Replaces the live configuration with the contents of a file.
    pub fn import_config_from_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<()> {
        self.config = ConfigLoader::load(path)?;
        Ok(())
    }
}
