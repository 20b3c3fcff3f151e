//! Add, update and delete operations over a [`SalaryConfig`].
//!
//! Every operation validates before touching state, so a rejected call leaves
//! the configuration exactly as it was.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::DEDUCTION_OVERRIDE_PREFIX;

use super::types::{
    DeductionItem, DeductionKind, IncomeItem, MethodRule, PROGRESSIVE_TAX_METHOD, ProgressiveTax,
    SalaryConfig, TaxBracket, upper_bound_from_sentinel,
};

const INCOME_ITEM: &str = "income item";
const DEDUCTION_ITEM: &str = "deduction item";

/// Fallback rate for percentage deductions added without one.
pub fn default_percentage_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// Fallback method for calculated deductions added without one.
pub const DEFAULT_CUSTOM_METHOD: &str = "custom";

/// Fields to change on an income item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeItemUpdate {
    /// New unique name.
    #[serde(default)]
    pub new_name: Option<String>,
    /// New default value.
    #[serde(default)]
    pub default: Option<Decimal>,
    /// New required flag.
    #[serde(default)]
    pub required: Option<bool>,
}

/// Fields to change on a deduction item.
///
/// Fields that do not apply to the item's kind are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeductionItemUpdate {
    /// New rate for a percentage deduction.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// New base income item for a percentage deduction.
    #[serde(default)]
    pub base: Option<String>,
    /// New amount for a fixed amount deduction.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// New optional flag.
    #[serde(default)]
    pub optional: Option<bool>,
}

/// Fields to change on a tax bracket. A `max_income` of `-1` means unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxBracketUpdate {
    /// New inclusive lower bound.
    #[serde(default)]
    pub min_income: Option<Decimal>,
    /// New inclusive upper bound, or the `-1` sentinel.
    #[serde(default)]
    pub max_income: Option<Decimal>,
    /// New marginal rate.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// New fast deduction constant.
    #[serde(default)]
    pub fast_deduction: Option<Decimal>,
}

/// Discriminant of [`DeductionKind`] used by [`DeductionDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// See [`DeductionKind::Percentage`].
    Percentage,
    /// See [`DeductionKind::FixedAmount`].
    FixedAmount,
    /// See [`DeductionKind::Calculated`].
    Calculated,
}

/// A loosely specified deduction kind whose missing parts get filled in
/// from the current configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionDraft {
    /// Which kind of deduction to build.
    #[serde(rename = "type")]
    pub deduction_type: DeductionType,
    /// Rate for percentage deductions (defaults to 0.1).
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Base item for percentage deductions (defaults to the first income item).
    #[serde(default)]
    pub base: Option<String>,
    /// Amount for fixed deductions (defaults to zero).
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Method for calculated deductions (defaults to `custom`).
    #[serde(default)]
    pub method: Option<String>,
}

fn validated_name<'a>(name: &'a str, kind: &'static str) -> EngineResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        warn!(kind, "Rejected empty name");
        return Err(EngineError::EmptyName { kind });
    }
    Ok(name)
}

/// Income item names share the flat input map with deduction overrides, so
/// they must not carry the override prefix.
fn validated_income_name(name: &str) -> EngineResult<&str> {
    let name = validated_name(name, INCOME_ITEM)?;
    if name.starts_with(DEDUCTION_OVERRIDE_PREFIX) {
        warn!(name, "Rejected reserved income item name");
        return Err(EngineError::ReservedName {
            kind: INCOME_ITEM,
            name: name.to_string(),
            prefix: DEDUCTION_OVERRIDE_PREFIX,
        });
    }
    Ok(name)
}

fn not_found(kind: &'static str, name: &str) -> EngineError {
    warn!(kind, name, "Item not found");
    EngineError::NotFound {
        kind,
        name: name.to_string(),
    }
}

fn duplicate(kind: &'static str, name: &str) -> EngineError {
    warn!(kind, name, "Rejected duplicate name");
    EngineError::DuplicateName {
        kind,
        name: name.to_string(),
    }
}

fn sort_brackets(brackets: &mut [TaxBracket]) {
    brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));
}

impl SalaryConfig {
    /// Adds an income item at the end of the list.
    ///
    /// Fails if the name is empty, already used or starts with
    /// [`DEDUCTION_OVERRIDE_PREFIX`].
    pub fn add_income_item(&mut self, name: &str, default: Decimal, required: bool) -> EngineResult<()> {
        let name = validated_income_name(name)?;
        if self.income_item(name).is_some() {
            return Err(duplicate(INCOME_ITEM, name));
        }

        self.income_items.push(IncomeItem {
            name: name.to_string(),
            default,
            required,
        });
        info!(item = name, default = %default, "Added income item");
        Ok(())
    }

    /// Renames and/or changes an income item in place.
    ///
    /// A rename keeps the item's position and re-points every percentage
    /// deduction based on the old name. Renaming onto another existing item
    /// fails.
    pub fn update_income_item(&mut self, name: &str, update: IncomeItemUpdate) -> EngineResult<()> {
        let index = self
            .income_items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| not_found(INCOME_ITEM, name))?;

        let new_name = match update.new_name.as_deref() {
            Some(candidate) => {
                let candidate = validated_income_name(candidate)?;
                if candidate != name && self.income_item(candidate).is_some() {
                    return Err(duplicate(INCOME_ITEM, candidate));
                }
                Some(candidate.to_string()).filter(|candidate| candidate != name)
            }
            None => None,
        };

        let item = &mut self.income_items[index];
        if let Some(default) = update.default {
            item.default = default;
        }
        if let Some(required) = update.required {
            item.required = required;
        }

        if let Some(new_name) = new_name {
            item.name = new_name.clone();
            for deduction in &mut self.deduction_items {
                if let DeductionKind::Percentage { base, .. } = &mut deduction.kind {
                    if *base == name {
                        *base = new_name.clone();
                    }
                }
            }
            info!(item = name, new_name = %new_name, "Renamed income item");
        }

        info!(item = %self.income_items[index].name, "Updated income item");
        Ok(())
    }

    /// Removes an income item.
    ///
    /// Percentage deductions based on it are kept and resolve to zero until
    /// re-pointed.
    pub fn delete_income_item(&mut self, name: &str) -> EngineResult<()> {
        let index = self
            .income_items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| not_found(INCOME_ITEM, name))?;
        self.income_items.remove(index);

        let orphaned: Vec<&str> = self
            .deduction_items
            .iter()
            .filter(|d| matches!(&d.kind, DeductionKind::Percentage { base, .. } if base == name))
            .map(|d| d.name.as_str())
            .collect();
        if !orphaned.is_empty() {
            warn!(item = name, deductions = ?orphaned, "Deleted income item is still a percentage base");
        }

        info!(item = name, "Deleted income item");
        Ok(())
    }

    /// Builds a full deduction kind from a draft, filling gaps with defaults.
    pub fn resolve_deduction_draft(&self, draft: DeductionDraft) -> DeductionKind {
        match draft.deduction_type {
            DeductionType::Percentage => DeductionKind::Percentage {
                rate: draft.rate.unwrap_or_else(default_percentage_rate),
                base: draft
                    .base
                    .or_else(|| self.income_items.first().map(|item| item.name.clone()))
                    .unwrap_or_default(),
            },
            DeductionType::FixedAmount => DeductionKind::FixedAmount {
                amount: draft.amount.unwrap_or(Decimal::ZERO),
            },
            DeductionType::Calculated => DeductionKind::Calculated {
                method: draft
                    .method
                    .unwrap_or_else(|| DEFAULT_CUSTOM_METHOD.to_string()),
            },
        }
    }

    /// Adds a deduction item at the end of the list.
    ///
    /// Fails if the name is empty or already used.
    pub fn add_deduction_item(&mut self, name: &str, kind: DeductionKind, optional: bool) -> EngineResult<()> {
        let name = validated_name(name, DEDUCTION_ITEM)?;
        if self.deduction_item(name).is_some() {
            return Err(duplicate(DEDUCTION_ITEM, name));
        }

        match &kind {
            DeductionKind::Percentage { base, .. } if self.income_item(base).is_none() => {
                warn!(item = name, base = %base, "Percentage base is not a configured income item");
            }
            DeductionKind::Calculated { method } if self.method(method).is_none() => {
                warn!(item = name, method = %method, "Calculation method is not registered");
            }
            _ => {}
        }

        self.deduction_items.push(DeductionItem {
            name: name.to_string(),
            kind,
            optional,
        });
        info!(item = name, optional, "Added deduction item");
        Ok(())
    }

    /// Changes a deduction item in place.
    pub fn update_deduction_item(&mut self, name: &str, update: DeductionItemUpdate) -> EngineResult<()> {
        let item = self
            .deduction_items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| not_found(DEDUCTION_ITEM, name))?;

        match &mut item.kind {
            DeductionKind::Percentage { rate, base } => {
                if let Some(new_rate) = update.rate {
                    *rate = new_rate;
                }
                if let Some(new_base) = update.base {
                    *base = new_base;
                }
            }
            DeductionKind::FixedAmount { amount } => {
                if let Some(new_amount) = update.amount {
                    *amount = new_amount;
                }
            }
            DeductionKind::Calculated { .. } => {}
        }
        if let Some(optional) = update.optional {
            item.optional = optional;
        }

        info!(item = name, "Updated deduction item");
        Ok(())
    }

    /// Removes a deduction item.
    pub fn delete_deduction_item(&mut self, name: &str) -> EngineResult<()> {
        let index = self
            .deduction_items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| not_found(DEDUCTION_ITEM, name))?;
        self.deduction_items.remove(index);
        info!(item = name, "Deleted deduction item");
        Ok(())
    }

    fn progressive_tax_mut(&mut self) -> EngineResult<&mut ProgressiveTax> {
        self.calculation_methods
            .iter_mut()
            .find(|method| method.id == PROGRESSIVE_TAX_METHOD)
            .map(|method| match &mut method.rule {
                MethodRule::ProgressiveTax(rule) => rule,
            })
            .ok_or_else(|| EngineError::MethodNotFound {
                method: PROGRESSIVE_TAX_METHOD.to_string(),
            })
    }

    /// Inserts a bracket and re-sorts the table by minimum income.
    ///
    /// Overlaps and gaps are not checked. A `max_income` of `-1` means
    /// unbounded.
    pub fn add_tax_bracket(
        &mut self,
        min_income: Decimal,
        max_income: Decimal,
        rate: Decimal,
        fast_deduction: Decimal,
    ) -> EngineResult<()> {
        let rule = self.progressive_tax_mut()?;
        rule.brackets
            .push(TaxBracket::new(min_income, max_income, rate, fast_deduction));
        sort_brackets(&mut rule.brackets);
        info!(min = %min_income, max = %max_income, rate = %rate, "Added tax bracket");
        Ok(())
    }

    /// Changes the bracket at `index`, then re-sorts the table.
    pub fn update_tax_bracket(&mut self, index: usize, update: TaxBracketUpdate) -> EngineResult<()> {
        let rule = self.progressive_tax_mut()?;
        let len = rule.brackets.len();
        let bracket = rule
            .brackets
            .get_mut(index)
            .ok_or(EngineError::BracketIndexOutOfRange { index, len })?;

        if let Some(min_income) = update.min_income {
            bracket.min_income = min_income;
        }
        if let Some(max_income) = update.max_income {
            bracket.max_income = upper_bound_from_sentinel(max_income);
        }
        if let Some(rate) = update.rate {
            bracket.rate = rate;
        }
        if let Some(fast_deduction) = update.fast_deduction {
            bracket.fast_deduction = fast_deduction;
        }

        sort_brackets(&mut rule.brackets);
        info!(index, "Updated tax bracket");
        Ok(())
    }

    /// Removes the bracket at `index`.
    ///
    /// Removing the last bracket is allowed; tax then resolves to zero.
    pub fn delete_tax_bracket(&mut self, index: usize) -> EngineResult<()> {
        let rule = self.progressive_tax_mut()?;
        let len = rule.brackets.len();
        if index >= len {
            warn!(index, len, "Tax bracket index out of range");
            return Err(EngineError::BracketIndexOutOfRange { index, len });
        }

        rule.brackets.remove(index);
        if rule.brackets.is_empty() {
            warn!("Tax bracket table is now empty; progressive tax will be zero");
        }
        info!(index, "Deleted tax bracket");
        Ok(())
    }

    /// Checks name uniqueness across every list, and that no income item
    /// uses the deduction override prefix.
    ///
    /// Used when accepting a configuration from outside the mutators.
    pub fn validate(&self) -> EngineResult<()> {
        fn check<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> EngineResult<()> {
            let mut seen = std::collections::HashSet::new();
            for name in names {
                if name.trim().is_empty() {
                    return Err(EngineError::InvalidConfig {
                        message: format!("{kind} with empty name"),
                    });
                }
                if !seen.insert(name) {
                    return Err(EngineError::InvalidConfig {
                        message: format!("duplicate {kind} '{name}'"),
                    });
                }
            }
            Ok(())
        }

        check(INCOME_ITEM, self.income_items.iter().map(|i| i.name.as_str()))?;
        if let Some(item) = self
            .income_items
            .iter()
            .find(|i| i.name.starts_with(DEDUCTION_OVERRIDE_PREFIX))
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "{INCOME_ITEM} '{}' must not start with '{DEDUCTION_OVERRIDE_PREFIX}'",
                    item.name
                ),
            });
        }
        check(DEDUCTION_ITEM, self.deduction_items.iter().map(|i| i.name.as_str()))?;
        check(
            "calculation method",
            self.calculation_methods.iter().map(|m| m.id.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNBOUNDED_SENTINEL;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_add_income_item_appends() {
        let mut config = SalaryConfig::default();
        config.add_income_item("Night Shift", dec("800"), false).unwrap();

        let last = config.income_items().last().unwrap();
        assert_eq!(last.name, "Night Shift");
        assert_eq!(last.default, dec("800"));
    }

    #[test]
    fn test_add_income_item_rejects_duplicate_without_overwriting() {
        let mut config = SalaryConfig::default();
        let before = config.clone();

        let result = config.add_income_item("Base Salary", dec("1"), false);

        assert!(matches!(result, Err(EngineError::DuplicateName { .. })));
        assert_eq!(config, before);
    }

    #[test]
    fn test_add_income_item_rejects_empty_name() {
        let mut config = SalaryConfig::default();

        let result = config.add_income_item("   ", dec("1"), false);

        assert!(matches!(result, Err(EngineError::EmptyName { .. })));
    }

    #[test]
    fn test_add_income_item_rejects_override_prefix() {
        let mut config = SalaryConfig::default();
        let before = config.clone();

        let result = config.add_income_item("deduction_bonus", dec("100"), false);

        match result {
            Err(EngineError::ReservedName { name, prefix, .. }) => {
                assert_eq!(name, "deduction_bonus");
                assert_eq!(prefix, DEDUCTION_OVERRIDE_PREFIX);
            }
            other => panic!("Expected ReservedName error, got {:?}", other),
        }
        assert_eq!(config, before);
    }

    #[test]
    fn test_prefix_check_is_case_sensitive() {
        let mut config = SalaryConfig::default();

        config.add_income_item("Deduction_bonus", dec("100"), false).unwrap();

        assert!(config.income_item("Deduction_bonus").is_some());
    }

    #[test]
    fn test_rename_onto_override_prefix_fails() {
        let mut config = SalaryConfig::default();
        let before = config.clone();
        let update = IncomeItemUpdate {
            new_name: Some("deduction_Base Salary".to_string()),
            default: Some(dec("1")),
            required: None,
        };

        let result = config.update_income_item("Base Salary", update);

        assert!(matches!(result, Err(EngineError::ReservedName { .. })));
        assert_eq!(config, before);
    }

    #[test]
    fn test_rename_income_item_keeps_position_and_repoints_bases() {
        let mut config = SalaryConfig::default();
        let update = IncomeItemUpdate {
            new_name: Some("Basic Pay".to_string()),
            ..Default::default()
        };

        config.update_income_item("Base Salary", update).unwrap();

        assert_eq!(config.income_items()[0].name, "Basic Pay");
        assert!(config.income_item("Base Salary").is_none());
        match &config.deduction_item("Social Insurance").unwrap().kind {
            DeductionKind::Percentage { base, .. } => assert_eq!(base, "Basic Pay"),
            other => panic!("Expected percentage deduction, got {:?}", other),
        }
    }

    #[test]
    fn test_rename_onto_existing_item_fails() {
        let mut config = SalaryConfig::default();
        let before = config.clone();
        let update = IncomeItemUpdate {
            new_name: Some("Meal Allowance".to_string()),
            default: Some(dec("1")),
            required: None,
        };

        let result = config.update_income_item("Base Salary", update);

        assert!(matches!(result, Err(EngineError::DuplicateName { .. })));
        assert_eq!(config, before);
    }

    #[test]
    fn test_update_income_item_default_and_required() {
        let mut config = SalaryConfig::default();
        let update = IncomeItemUpdate {
            new_name: Some("Meal Allowance".to_string()),
            default: Some(dec("650")),
            required: Some(true),
        };

        config.update_income_item("Meal Allowance", update).unwrap();

        let item = config.income_item("Meal Allowance").unwrap();
        assert_eq!(item.default, dec("650"));
        assert!(item.required);
    }

    #[test]
    fn test_update_missing_income_item_fails() {
        let mut config = SalaryConfig::default();

        let result = config.update_income_item("Nope", IncomeItemUpdate::default());

        assert!(matches!(result, Err(EngineError::NotFound { .. })));
    }

    #[test]
    fn test_delete_income_item() {
        let mut config = SalaryConfig::default();

        config.delete_income_item("Skill Allowance").unwrap();

        assert!(config.income_item("Skill Allowance").is_none());
        assert!(config.delete_income_item("Skill Allowance").is_err());
    }

    #[test]
    fn test_draft_fills_reference_defaults() {
        let config = SalaryConfig::default();

        let percentage = config.resolve_deduction_draft(DeductionDraft {
            deduction_type: DeductionType::Percentage,
            rate: None,
            base: None,
            amount: None,
            method: None,
        });
        assert_eq!(
            percentage,
            DeductionKind::Percentage {
                rate: dec("0.1"),
                base: "Base Salary".to_string()
            }
        );

        let calculated = config.resolve_deduction_draft(DeductionDraft {
            deduction_type: DeductionType::Calculated,
            rate: None,
            base: None,
            amount: None,
            method: None,
        });
        assert_eq!(
            calculated,
            DeductionKind::Calculated {
                method: "custom".to_string()
            }
        );
    }

    #[test]
    fn test_update_deduction_ignores_fields_of_other_kinds() {
        let mut config = SalaryConfig::default();
        let update = DeductionItemUpdate {
            rate: Some(dec("0.08")),
            amount: Some(dec("999")),
            optional: Some(true),
            ..Default::default()
        };

        config.update_deduction_item("Social Insurance", update).unwrap();

        let item = config.deduction_item("Social Insurance").unwrap();
        assert!(item.optional);
        assert_eq!(
            item.kind,
            DeductionKind::Percentage {
                rate: dec("0.08"),
                base: "Base Salary".to_string()
            }
        );
    }

    #[test]
    fn test_add_and_delete_deduction_item() {
        let mut config = SalaryConfig::default();
        config
            .add_deduction_item("Union Fee", DeductionKind::FixedAmount { amount: dec("50") }, true)
            .unwrap();

        assert!(config.deduction_item("Union Fee").unwrap().optional);
        assert!(
            config
                .add_deduction_item("Union Fee", DeductionKind::FixedAmount { amount: dec("1") }, true)
                .is_err()
        );

        config.delete_deduction_item("Union Fee").unwrap();
        assert!(config.deduction_item("Union Fee").is_none());
    }

    #[test]
    fn test_add_tax_bracket_resorts_by_min() {
        let mut config = SalaryConfig::default();

        config
            .add_tax_bracket(dec("2000"), dec("3000"), dec("0.01"), dec("0"))
            .unwrap();

        let brackets = config.tax_brackets();
        assert_eq!(brackets.len(), 9);
        assert_eq!(brackets[1].min_income, dec("2000"));
        assert!(brackets.windows(2).all(|w| w[0].min_income <= w[1].min_income));
    }

    #[test]
    fn test_add_tax_bracket_translates_sentinel() {
        let mut config = SalaryConfig::default();

        config
            .add_tax_bracket(dec("200000"), UNBOUNDED_SENTINEL, dec("0.5"), dec("30000"))
            .unwrap();

        assert_eq!(config.tax_brackets().last().unwrap().max_income, None);
    }

    #[test]
    fn test_update_tax_bracket_out_of_range_is_rejected() {
        let mut config = SalaryConfig::default();
        let before = config.clone();

        let result = config.update_tax_bracket(8, TaxBracketUpdate::default());

        assert!(matches!(
            result,
            Err(EngineError::BracketIndexOutOfRange { index: 8, len: 8 })
        ));
        assert_eq!(config, before);
    }

    #[test]
    fn test_update_tax_bracket_sets_unbounded_max() {
        let mut config = SalaryConfig::default();
        let update = TaxBracketUpdate {
            max_income: Some(dec("-1")),
            rate: Some(dec("0.4")),
            ..Default::default()
        };

        config.update_tax_bracket(6, update).unwrap();

        let bracket = &config.tax_brackets()[6];
        assert_eq!(bracket.max_income, None);
        assert_eq!(bracket.rate, dec("0.4"));
    }

    #[test]
    fn test_delete_tax_bracket_out_of_range_is_rejected() {
        let mut config = SalaryConfig::default();

        assert!(config.delete_tax_bracket(100).is_err());
        assert_eq!(config.tax_brackets().len(), 8);
    }

    #[test]
    fn test_deleting_every_bracket_is_allowed() {
        let mut config = SalaryConfig::default();

        while !config.tax_brackets().is_empty() {
            config.delete_tax_bracket(0).unwrap();
        }

        assert!(config.tax_brackets().is_empty());
        assert!(matches!(
            config.delete_tax_bracket(0),
            Err(EngineError::BracketIndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_bracket_mutation_without_progressive_method_fails() {
        let mut config = SalaryConfig::new(vec![], vec![], vec![]);

        let result = config.add_tax_bracket(dec("0"), dec("-1"), dec("0.1"), dec("0"));

        assert!(matches!(result, Err(EngineError::MethodNotFound { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicate_income_names() {
        let item = IncomeItem {
            name: "Base Salary".to_string(),
            default: dec("1"),
            required: false,
        };
        let config = SalaryConfig::new(vec![item.clone(), item], vec![], vec![]);

        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_override_prefixed_income_name() {
        let item = IncomeItem {
            name: "deduction_bonus".to_string(),
            default: dec("1"),
            required: false,
        };
        let config = SalaryConfig::new(vec![item], vec![], vec![]);

        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_accepts_default_config() {
        assert!(SalaryConfig::default().validate().is_ok());
    }
}
