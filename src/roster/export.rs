//! Tabular roster export.
//!
//! Produces CSV with one row per employee. Columns are the union of every
//! currently configured income and deduction item, so all rows share the
//! same layout regardless of what each employee selected.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};

use super::Roster;

/// Format of the generation timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn export_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        message: e.to_string(),
    }
}

fn cell(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Renders the roster as CSV.
///
/// Header: `employee`, `income_<item>`..., `deduction_<item>`...,
/// `total_income`, `total_deductions`, `net_income`, `calculated_at`.
/// Deductions an employee does not have are written as `0`. An empty
/// roster produces the header row only.
pub fn export_roster_table(
    config: &SalaryConfig,
    roster: &Roster,
    generated_at: NaiveDateTime,
) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["employee".to_string()];
    header.extend(config.income_items().iter().map(|item| format!("income_{}", item.name)));
    header.extend(
        config
            .deduction_items()
            .iter()
            .map(|item| format!("deduction_{}", item.name)),
    );
    header.extend(
        ["total_income", "total_deductions", "net_income", "calculated_at"].map(String::from),
    );
    writer.write_record(&header).map_err(export_error)?;

    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
    for entry in roster.calculate_all(config) {
        let result = &entry.result;
        let mut row = vec![entry.name.clone()];
        row.extend(
            config
                .income_items()
                .iter()
                .map(|item| cell(result.income(&item.name).unwrap_or(item.default))),
        );
        row.extend(
            config
                .deduction_items()
                .iter()
                .map(|item| cell(result.deduction(&item.name).unwrap_or(Decimal::ZERO))),
        );
        row.push(cell(result.total_income));
        row.push(cell(result.total_deductions));
        row.push(cell(result.net_income));
        row.push(timestamp.clone());
        writer.write_record(&row).map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}
