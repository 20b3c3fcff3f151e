//! Employee roster management.
//!
//! The [`Roster`] stores each employee's calculation inputs. Calculations
//! always run against the configuration passed in at call time, so rule
//! changes apply retroactively to every stored employee.

mod export;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::calculate_salary;
use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, Employee, SalaryInputs};

pub use export::{TIMESTAMP_FORMAT, export_roster_table};

const EMPLOYEE: &str = "employee";

/// One employee's calculation in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResult {
    /// The employee's name.
    pub name: String,
    /// The calculation result.
    pub result: CalculationResult,
}

/// The collection of stored employees, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    ///
    /// Missing salary data is filled with every income item's current
    /// default; a missing selection uses every non-optional deduction. Both
    /// are captured at add time.
    pub fn add_employee(
        &mut self,
        config: &SalaryConfig,
        name: &str,
        salary_data: Option<SalaryInputs>,
        selected_deductions: Option<Vec<String>>,
    ) -> EngineResult<()> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected employee with empty name");
            return Err(EngineError::EmptyName { kind: EMPLOYEE });
        }
        if self.employee(name).is_some() {
            warn!(employee = name, "Rejected duplicate employee");
            return Err(EngineError::DuplicateName {
                kind: EMPLOYEE,
                name: name.to_string(),
            });
        }

        let salary_data =
            salary_data.unwrap_or_else(|| config.income_defaults().into_iter().collect());
        let selected_deductions =
            selected_deductions.unwrap_or_else(|| config.mandatory_deductions());

        self.employees.push(Employee {
            name: name.to_string(),
            salary_data,
            selected_deductions,
        });
        info!(employee = name, "Added employee");
        Ok(())
    }

    /// Replaces an employee's salary data and/or deduction selection.
    pub fn update_employee(
        &mut self,
        name: &str,
        salary_data: Option<SalaryInputs>,
        selected_deductions: Option<Vec<String>>,
    ) -> EngineResult<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.name == name)
            .ok_or_else(|| EngineError::NotFound {
                kind: EMPLOYEE,
                name: name.to_string(),
            })?;

        if let Some(salary_data) = salary_data {
            employee.salary_data = salary_data;
        }
        if let Some(selected_deductions) = selected_deductions {
            employee.selected_deductions = selected_deductions;
        }
        info!(employee = name, "Updated employee");
        Ok(())
    }

    /// Removes an employee.
    pub fn delete_employee(&mut self, name: &str) -> EngineResult<()> {
        let index = self
            .employees
            .iter()
            .position(|employee| employee.name == name)
            .ok_or_else(|| EngineError::NotFound {
                kind: EMPLOYEE,
                name: name.to_string(),
            })?;
        self.employees.remove(index);
        info!(employee = name, "Deleted employee");
        Ok(())
    }

    /// Returns every employee in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by name.
    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.name == name)
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Calculates one stored employee against `config`.
    pub fn calculate_employee(&self, config: &SalaryConfig, name: &str) -> Option<CalculationResult> {
        self.employee(name).map(|employee| {
            calculate_salary(config, &employee.salary_data, Some(employee.selected_deductions.as_slice()))
        })
    }

    /// Calculates every stored employee against `config`.
    pub fn calculate_all(&self, config: &SalaryConfig) -> Vec<EmployeeResult> {
        self.employees
            .iter()
            .map(|employee| EmployeeResult {
                name: employee.name.clone(),
                result: calculate_salary(
                    config,
                    &employee.salary_data,
                    Some(employee.selected_deductions.as_slice()),
                ),
            })
            .collect()
    }
}
